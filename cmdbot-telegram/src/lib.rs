//! # cmdbot-telegram
//!
//! Telegram session provider: adapters from teloxide types, [`cmdbot_core::Bot`] implementation,
//! minimal config, and the REPL runner that hands each message to a [`cmdbot_core::Handler`].
//! Owns only Telegram connectivity and lifecycle logging; no command logic.

mod adapters;
mod bot_adapter;
mod config;
mod markup;
mod runner;

pub use adapters::{chat_kind, TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::{media_method, MediaMethod, TelegramBotAdapter};
pub use config::TelegramConfig;
pub use markup::to_telegram_html;
pub use runner::run_repl;
