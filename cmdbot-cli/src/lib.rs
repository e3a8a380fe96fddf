//! # cmdbot-cli
//!
//! Wires the command router to the Telegram session provider: loads [`BotConfig`] from the
//! environment, initializes tracing, builds content/LLM services, and runs the REPL.

pub mod cli;
pub mod config;
pub mod runner;

pub use cli::{Cli, Commands};
pub use config::{BotConfig, DEFAULT_ALLOWED_SENDER};
pub use runner::{build_router, commands_text, run_bot};
