//! Response bodies of the joke and fact APIs and their conversion to display text.

use serde::Deserialize;

use crate::error::{ContentError, Result};

/// JokeAPI v2 response. Single jokes carry `joke`; two-part jokes carry `setup` and `delivery`.
#[derive(Debug, Deserialize)]
pub struct JokePayload {
    #[serde(default)]
    pub error: bool,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub joke: Option<String>,
    pub setup: Option<String>,
    pub delivery: Option<String>,
    /// Set by the API when `error` is true.
    pub message: Option<String>,
}

impl JokePayload {
    pub fn into_text(self) -> Result<String> {
        if self.error {
            return Err(ContentError::Malformed(format!(
                "joke API reported an error: {}",
                self.message.as_deref().unwrap_or("unknown")
            )));
        }
        if let Some(joke) = non_blank(self.joke) {
            return Ok(joke);
        }
        match (non_blank(self.setup), non_blank(self.delivery)) {
            (Some(setup), Some(delivery)) => Ok(format!("{}\n\n{}", setup, delivery)),
            _ => Err(ContentError::Malformed(format!(
                "joke of type {:?} has no text",
                self.kind.as_deref().unwrap_or("unknown")
            ))),
        }
    }
}

/// Useless-facts API response; only `text` is used.
#[derive(Debug, Deserialize)]
pub struct FactPayload {
    pub text: Option<String>,
}

impl FactPayload {
    pub fn into_text(self) -> Result<String> {
        non_blank(self.text).ok_or_else(|| ContentError::Malformed("fact has no text".to_string()))
    }
}

fn non_blank(s: Option<String>) -> Option<String> {
    s.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}
