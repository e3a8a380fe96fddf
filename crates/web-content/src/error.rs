use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Empty response body from {0}")]
    Empty(String),
}

pub type Result<T> = std::result::Result<T, ContentError>;
