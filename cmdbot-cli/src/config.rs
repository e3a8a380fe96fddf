//! Bot configuration: Telegram connection, allowed sender, log file, content endpoints, optional LLM.

use anyhow::Result;
use cmdbot_telegram::TelegramConfig;
use command_router::MediaCatalog;
use llm_client::LlmConfig;
use std::env;
use web_content::{DEFAULT_FACT_URL, DEFAULT_JOKE_URL};

/// Sender identity used when ALLOWED_SENDER_ID is not set.
pub const DEFAULT_ALLOWED_SENDER: &str = "123456789";
pub const DEFAULT_LOG_FILE: &str = "logs/cmdbot.log";

#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram: TelegramConfig,
    /// The only sender whose messages are answered.
    pub allowed_sender: String,
    pub log_file: String,
    pub joke_url: String,
    pub fact_url: String,
    pub media: MediaCatalog,
    /// `None` disables the `ai` command.
    pub llm: Option<LlmConfig>,
}

impl BotConfig {
    /// Loads from environment variables. `token` overrides BOT_TOKEN when given.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = TelegramConfig::load(token)?;
        let defaults = MediaCatalog::default();
        Ok(Self {
            telegram,
            allowed_sender: var_or("ALLOWED_SENDER_ID", DEFAULT_ALLOWED_SENDER),
            log_file: var_or("LOG_FILE", DEFAULT_LOG_FILE),
            joke_url: var_or("JOKE_API_URL", DEFAULT_JOKE_URL),
            fact_url: var_or("FACT_API_URL", DEFAULT_FACT_URL),
            media: MediaCatalog {
                image_url: var_or("IMAGE_URL", &defaults.image_url),
                audio_url: var_or("AUDIO_URL", &defaults.audio_url),
                document_url: var_or("DOCUMENT_URL", &defaults.document_url),
            },
            llm: LlmConfig::from_env(),
        })
    }

    /// Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        if self.allowed_sender.trim().is_empty() {
            anyhow::bail!("ALLOWED_SENDER_ID is empty");
        }
        Ok(())
    }

    pub fn uses_default_sender(&self) -> bool {
        self.allowed_sender == DEFAULT_ALLOWED_SENDER
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
