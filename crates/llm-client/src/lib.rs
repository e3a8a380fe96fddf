//! # LLM client
//!
//! Defines the [`LlmClient`] trait used by the `ai <question>` command and an OpenAI-compatible
//! implementation. The capability is optional: [`LlmConfig::from_env`] returns `None` when no
//! API key is configured, and the bot then runs without the AI command.

use anyhow::Result;
use async_trait::async_trait;

mod config;
mod openai_llm;

pub use config::{LlmConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use openai_llm::{mask_token, OpenAILlmClient, DEFAULT_SYSTEM_PROMPT};

/// Answers a single user question with one completion.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Returns the model's reply to `question`, trimmed. Errors carry a human-readable reason.
    async fn complete(&self, question: &str) -> Result<String>;
}
