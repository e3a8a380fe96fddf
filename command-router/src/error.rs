use cmdbot_core::BotError;
use thiserror::Error;
use web_content::ContentError;

/// Failure of a single command. Converted to the rule's fallback text when it has one.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Content(#[from] ContentError),

    #[error("{0}")]
    Ai(String),

    #[error("AI command is not configured")]
    AiUnavailable,

    #[error(transparent)]
    Bot(#[from] BotError),
}
