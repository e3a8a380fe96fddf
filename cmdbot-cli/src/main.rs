//! cmdbot: run the Telegram command bot or print its command list. Config from env and optional CLI args.

use anyhow::Result;
use clap::Parser;
use cmdbot_cli::{commands_text, run_bot, BotConfig, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = BotConfig::load(token)?;
            run_bot(config).await
        }
        Commands::Commands => {
            println!("{}", commands_text()?);
            Ok(())
        }
    }
}
