//! # web-content
//!
//! Unauthenticated HTTP GET services used by chat commands: a joke API, a random-fact API,
//! and binary media downloads. [`ContentService`] is the seam the router depends on;
//! [`HttpContentService`] is the reqwest-backed implementation.

mod error;
mod http;
mod media;
mod payload;

use async_trait::async_trait;
use cmdbot_core::Media;

pub use error::{ContentError, Result};
pub use http::{HttpContentService, DEFAULT_FACT_URL, DEFAULT_JOKE_URL};
pub use media::{file_name_from_url, guess_mime_type};
pub use payload::{FactPayload, JokePayload};

/// Source of joke text, fact text, and downloadable media.
#[async_trait]
pub trait ContentService: Send + Sync {
    /// Fetches one joke as display text.
    async fn joke(&self) -> Result<String>;
    /// Fetches one random fact as display text.
    async fn fact(&self) -> Result<String>;
    /// Downloads the resource at `url` with its MIME type and file name.
    async fn fetch_media(&self, url: &str) -> Result<Media>;
}
