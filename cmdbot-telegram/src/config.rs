//! Minimal Telegram connection config: token and optional API URL.
//! Loaded from BOT_TOKEN and TELEGRAM_API_URL / TELOXIDE_API_URL.

use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub api_url: Option<String>,
}

impl TelegramConfig {
    /// Loads from the environment. `token` overrides BOT_TOKEN when given.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("BOT_TOKEN").context("BOT_TOKEN not set")?,
        };
        if bot_token.trim().is_empty() {
            anyhow::bail!("BOT_TOKEN is empty");
        }
        let api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok()
            .filter(|s| !s.trim().is_empty());
        Ok(Self { bot_token, api_url })
    }

    pub fn with_token(bot_token: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            api_url: None,
        }
    }

    /// Fails when the API URL override is set but not a valid URL.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url) = self.api_url {
            if reqwest::Url::parse(url).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url
                );
            }
        }
        Ok(())
    }

    /// Builds the teloxide client, applying the API URL override.
    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        let bot = teloxide::Bot::new(self.bot_token.clone());
        match self.api_url {
            Some(ref url) => {
                let url = reqwest::Url::parse(url)
                    .with_context(|| format!("invalid Telegram API URL: {}", url))?;
                Ok(bot.set_api_url(url))
            }
            None => Ok(bot),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in ["BOT_TOKEN", "TELEGRAM_API_URL", "TELOXIDE_API_URL"] {
            env::remove_var(key);
        }
    }

    #[test]
    fn test_with_token() {
        let config = TelegramConfig::with_token("test_token");
        assert_eq!(config.bot_token, "test_token");
        assert!(config.api_url.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_load_requires_token() {
        clear_env();
        assert!(TelegramConfig::load(None).is_err());
        assert!(TelegramConfig::load(Some("  ".to_string())).is_err());
    }

    #[test]
    #[serial]
    fn test_load_token_override_and_api_url_alias() {
        clear_env();
        env::set_var("BOT_TOKEN", "from_env");
        env::set_var("TELOXIDE_API_URL", "http://127.0.0.1:8081");

        let config = TelegramConfig::load(Some("from_cli".to_string())).unwrap();

        assert_eq!(config.bot_token, "from_cli");
        assert_eq!(config.api_url.as_deref(), Some("http://127.0.0.1:8081"));
        assert!(config.validate().is_ok());
        clear_env();
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let config = TelegramConfig {
            bot_token: "t".to_string(),
            api_url: Some("not a url".to_string()),
        };
        assert!(config.validate().is_err());
        assert!(config.build_bot().is_err());
    }
}
