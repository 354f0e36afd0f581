//! One-shot expiry notifier.
//!
//! The network dependency sits behind [`AlertsClient`] so the check can be
//! driven deterministically in tests and callers decide what to do with
//! the outcome; nothing here fires at load time.

use reqwest::StatusCode;
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;
use url::Url;

/// Literal prefix of the user-facing alert message.
pub const ALERT_PREFIX: &str = "⚠ Items expiring soon: ";

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("alerts request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("alerts endpoint returned {0}")]
    Status(StatusCode),
    #[error("invalid alerts URL: {0}")]
    Url(#[from] url::ParseError),
}

type FetchFuture<'a> = Pin<Box<dyn Future<Output = Result<Vec<String>, NotifyError>> + Send + 'a>>;

/// Source of the expiring-item list.
pub trait AlertsClient {
    fn fetch_alerts(&self) -> FetchFuture<'_>;
}

/// [`AlertsClient`] backed by `GET <base>/alerts`.
#[derive(Debug, Clone)]
pub struct HttpAlertsClient {
    client: reqwest::Client,
    base: Url,
}

impl HttpAlertsClient {
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(base: Url) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(crate::APP_USER_AGENT)
            .build()?;

        Ok(Self { client, base })
    }

    async fn fetch(&self) -> Result<Vec<String>, NotifyError> {
        let url = self.base.join("/alerts")?;
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Status(status));
        }

        Ok(response.json::<Vec<String>>().await?)
    }
}

impl AlertsClient for HttpAlertsClient {
    fn fetch_alerts(&self) -> FetchFuture<'_> {
        Box::pin(self.fetch())
    }
}

/// Build the alert message for a non-empty item list.
#[must_use]
pub fn alert_message(items: &[String]) -> Option<String> {
    if items.is_empty() {
        return None;
    }
    Some(format!("{ALERT_PREFIX}{}", items.join(", ")))
}

/// Fetch the expiring-item list exactly once and turn it into an alert
/// message: `Ok(None)` when nothing is expiring, `Ok(Some(_))` with the
/// user-facing text otherwise.
///
/// # Errors
/// Returns [`NotifyError`] when the fetch fails; no message is produced in
/// that case and the caller decides on user feedback.
pub async fn check_expiring<C>(client: &C) -> Result<Option<String>, NotifyError>
where
    C: AlertsClient + ?Sized,
{
    let items = client.fetch_alerts().await?;
    Ok(alert_message(&items))
}
