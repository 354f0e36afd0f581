//! Food image lookup against the Pixabay API.
//!
//! Lookup failures are never fatal: an item without a picture is still a
//! pantry item, so every error path falls back to [`FALLBACK_IMAGE`].

use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

pub const FALLBACK_IMAGE: &str = "/static/food.png";

const PIXABAY_URL: &str = "https://pixabay.com/api/";
const LOOKUP_TIMEOUT_SECONDS: u64 = 5;

#[derive(Debug, Deserialize)]
struct PixabayResponse {
    #[serde(default)]
    hits: Vec<PixabayHit>,
}

#[derive(Debug, Deserialize)]
struct PixabayHit {
    #[serde(rename = "webformatURL")]
    webformat_url: String,
}

pub struct ImageFinder {
    client: reqwest::Client,
    api_key: Option<String>,
}

// The API key must not leak into logs.
impl std::fmt::Debug for ImageFinder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageFinder")
            .field("api_key_set", &self.api_key.is_some())
            .finish_non_exhaustive()
    }
}

impl ImageFinder {
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(api_key: Option<String>) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(crate::APP_USER_AGENT)
            .timeout(Duration::from_secs(LOOKUP_TIMEOUT_SECONDS))
            .build()?;

        Ok(Self { client, api_key })
    }

    /// Best-effort image URL for a food name.
    pub async fn lookup(&self, food_name: &str) -> String {
        let Some(api_key) = self.api_key.as_deref() else {
            return FALLBACK_IMAGE.to_string();
        };

        match self.fetch(api_key, food_name).await {
            Ok(Some(url)) => url,
            Ok(None) => {
                debug!("no image hits for {food_name}");
                FALLBACK_IMAGE.to_string()
            }
            Err(err) => {
                debug!("image lookup failed for {food_name}: {err}");
                FALLBACK_IMAGE.to_string()
            }
        }
    }

    async fn fetch(&self, api_key: &str, food_name: &str) -> Result<Option<String>, reqwest::Error> {
        let response = self
            .client
            .get(PIXABAY_URL)
            .query(&[
                ("key", api_key),
                ("q", food_name),
                ("image_type", "photo"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<PixabayResponse>()
            .await?;

        Ok(response.hits.into_iter().next().map(|hit| hit.webformat_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixabay_response_parses_hits() {
        let json = r#"{"total": 2, "hits": [
            {"webformatURL": "https://cdn.example/milk.jpg", "tags": "milk"},
            {"webformatURL": "https://cdn.example/milk2.jpg", "tags": "milk"}
        ]}"#;

        let parsed: PixabayResponse = serde_json::from_str(json).expect("valid payload");
        assert_eq!(parsed.hits.len(), 2);
        assert_eq!(parsed.hits[0].webformat_url, "https://cdn.example/milk.jpg");
    }

    #[test]
    fn test_pixabay_response_without_hits() {
        let parsed: PixabayResponse = serde_json::from_str(r#"{"total": 0}"#).expect("valid");
        assert!(parsed.hits.is_empty());
    }

    #[tokio::test]
    async fn test_lookup_without_key_uses_fallback() {
        let finder = ImageFinder::new(None).expect("client");
        assert_eq!(finder.lookup("milk").await, FALLBACK_IMAGE);
    }
}
