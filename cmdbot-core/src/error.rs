use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid id: {0}")]
    InvalidId(String),
}

pub type Result<T> = std::result::Result<T, BotError>;
