//! CLI parser.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cmdbot")]
#[command(about = "Single-owner Telegram command bot", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Print the commands enabled by the current environment.
    Commands,
}
