//! OpenAI-compatible [`LlmClient`] built on async-openai: one system message plus the user question.

use anyhow::Result;
use async_openai::config::OpenAIConfig;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
};
use async_openai::Client;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::config::LlmConfig;
use crate::LlmClient;

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful chat assistant.";

/// Masks an API key for logs: first 7 chars + `***` + last 4. Keys of 11 chars or fewer become `***`.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 11 {
        return "***".to_string();
    }
    let head: String = chars[..7].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}***{}", head, tail)
}

#[derive(Clone)]
pub struct OpenAILlmClient {
    client: Arc<Client<OpenAIConfig>>,
    model: String,
    system_prompt: String,
    masked_key: String,
}

impl OpenAILlmClient {
    pub fn new(config: &LlmConfig) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.api_key.clone())
            .with_api_base(config.base_url.clone());
        Self {
            client: Arc::new(Client::with_config(openai_config)),
            model: config.model.clone(),
            system_prompt: config
                .system_prompt
                .clone()
                .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string()),
            masked_key: mask_token(&config.api_key),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn build_messages(&self, question: &str) -> Result<Vec<ChatCompletionRequestMessage>> {
        Ok(vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(self.system_prompt.clone())
                .build()?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(question.to_string())
                .build()?
                .into(),
        ])
    }
}

#[async_trait]
impl LlmClient for OpenAILlmClient {
    #[instrument(skip(self, question), fields(model = %self.model))]
    async fn complete(&self, question: &str) -> Result<String> {
        info!(
            api_key = %self.masked_key,
            question_len = question.len(),
            "chat completion request"
        );

        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model.as_str())
            .messages(self.build_messages(question)?)
            .build()?;

        if let Ok(json) = serde_json::to_string(&request) {
            debug!(request_json = %json, "chat completion request JSON");
        }

        let response = self.client.chat().create(request).await?;

        if let Some(ref usage) = response.usage {
            info!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                total_tokens = usage.total_tokens,
                "chat completion usage"
            );
        }

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .map(str::trim)
            .unwrap_or_default();
        if content.is_empty() {
            anyhow::bail!("No response from the AI service");
        }
        Ok(content.to_string())
    }
}
