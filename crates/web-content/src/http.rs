//! reqwest-backed [`ContentService`].

use async_trait::async_trait;
use cmdbot_core::Media;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, instrument};

use crate::error::{ContentError, Result};
use crate::media::{essence, file_name_from_url, guess_mime_type};
use crate::payload::{FactPayload, JokePayload};
use crate::ContentService;

/// JokeAPI endpoint restricted to single-line jokes.
pub const DEFAULT_JOKE_URL: &str = "https://v2.jokeapi.dev/joke/Any?type=single";
/// Random English fact endpoint.
pub const DEFAULT_FACT_URL: &str = "https://uselessfacts.jsph.pl/random.json?language=en";

/// Content service over plain HTTP GET. No timeout is set; a slow endpoint only delays its own reply.
#[derive(Clone)]
pub struct HttpContentService {
    client: reqwest::Client,
    joke_url: String,
    fact_url: String,
}

impl HttpContentService {
    /// Endpoints come from config (`DEFAULT_JOKE_URL` / `DEFAULT_FACT_URL` unless overridden).
    pub fn with_urls(joke_url: impl Into<String>, fact_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            joke_url: joke_url.into(),
            fact_url: fact_url.into(),
        }
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ContentError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl ContentService for HttpContentService {
    #[instrument(skip(self), fields(url = %self.joke_url))]
    async fn joke(&self) -> Result<String> {
        let payload: JokePayload = self.get(&self.joke_url).await?.json().await?;
        payload.into_text()
    }

    #[instrument(skip(self), fields(url = %self.fact_url))]
    async fn fact(&self) -> Result<String> {
        let payload: FactPayload = self.get(&self.fact_url).await?.json().await?;
        payload.into_text()
    }

    #[instrument(skip(self))]
    async fn fetch_media(&self, url: &str) -> Result<Media> {
        let response = self.get(url).await?;
        let mime_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(essence)
            .unwrap_or_else(|| guess_mime_type(url));
        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(ContentError::Empty(url.to_string()));
        }

        debug!(bytes = bytes.len(), mime_type = %mime_type, "media downloaded");

        Ok(Media {
            bytes: bytes.to_vec(),
            mime_type,
            file_name: file_name_from_url(url),
        })
    }
}
