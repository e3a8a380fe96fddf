//! Startup: tracing, service construction, router wiring, REPL.

use anyhow::Result;
use cmdbot_core::{init_tracing, Bot};
use cmdbot_telegram::{run_repl, TelegramBotAdapter};
use command_router::{CommandRouter, RuleSet};
use llm_client::{LlmClient, LlmConfig, OpenAILlmClient};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use web_content::{ContentService, HttpContentService};

use crate::config::BotConfig;

/// Builds the router around the given session handle. The AI capability is decided here, once.
pub fn build_router(config: &BotConfig, bot: Arc<dyn Bot>) -> Result<CommandRouter> {
    let content: Arc<dyn ContentService> = Arc::new(HttpContentService::with_urls(
        config.joke_url.clone(),
        config.fact_url.clone(),
    ));
    let llm = config
        .llm
        .as_ref()
        .map(|llm| Arc::new(OpenAILlmClient::new(llm)) as Arc<dyn LlmClient>);

    let router = CommandRouter::builder(bot, config.allowed_sender.clone(), content)
        .llm(llm)
        .media(config.media.clone())
        .build()?;
    Ok(router)
}

/// Help text for the commands the current environment enables.
pub fn commands_text() -> Result<String> {
    Ok(RuleSet::standard(LlmConfig::from_env().is_some())?.help_text())
}

/// Main entry: validate config, init logging, build the router, then run the REPL until it stops.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;

    if config.uses_default_sender() {
        warn!(
            allowed_sender = %config.allowed_sender,
            "ALLOWED_SENDER_ID not set, using the built-in default identity"
        );
    }

    let teloxide_bot = config.telegram.build_bot()?;
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let router = build_router(&config, bot)?;

    info!(
        allowed_sender = %config.allowed_sender,
        ai_enabled = router.ai_enabled(),
        log_file = %config.log_file,
        "Bot started"
    );

    run_repl(teloxide_bot, Arc::new(router)).await
}
