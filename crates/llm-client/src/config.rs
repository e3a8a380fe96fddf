//! LLM configuration loaded from environment variables.

use std::env;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Settings for an OpenAI-compatible chat completion endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    /// Overrides the default system prompt when set.
    pub system_prompt: Option<String>,
}

impl LlmConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            system_prompt: None,
        }
    }

    /// Loads from `OPENAI_API_KEY`, `OPENAI_BASE_URL`, `MODEL`, `LLM_SYSTEM_PROMPT`.
    /// Returns `None` when `OPENAI_API_KEY` is unset or blank (AI command disabled).
    pub fn from_env() -> Option<Self> {
        let api_key = non_blank_var("OPENAI_API_KEY")?;
        let base_url = non_blank_var("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let model = non_blank_var("MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let system_prompt = non_blank_var("LLM_SYSTEM_PROMPT");
        Some(Self {
            api_key,
            base_url,
            model,
            system_prompt,
        })
    }
}

fn non_blank_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in ["OPENAI_API_KEY", "OPENAI_BASE_URL", "MODEL", "LLM_SYSTEM_PROMPT"] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_without_key_is_none() {
        clear_env();
        assert!(LlmConfig::from_env().is_none());

        env::set_var("OPENAI_API_KEY", "   ");
        assert!(LlmConfig::from_env().is_none());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        env::set_var("OPENAI_API_KEY", "sk-test");

        let config = LlmConfig::from_env().unwrap();

        assert_eq!(config, LlmConfig::new("sk-test"));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_custom_values() {
        clear_env();
        env::set_var("OPENAI_API_KEY", "sk-test");
        env::set_var("OPENAI_BASE_URL", "http://localhost:8080/v1");
        env::set_var("MODEL", "gpt-4o-mini");
        env::set_var("LLM_SYSTEM_PROMPT", "Answer briefly.");

        let config = LlmConfig::from_env().unwrap();

        assert_eq!(config.base_url, "http://localhost:8080/v1");
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.system_prompt.as_deref(), Some("Answer briefly."));
        clear_env();
    }
}
