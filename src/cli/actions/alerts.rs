use crate::ui::notify::{self, HttpAlertsClient};
use anyhow::{Context, Result};
use tracing::debug;
use url::Url;

#[derive(Debug)]
pub struct Args {
    pub url: String,
}

/// Execute the alerts action: ask the server once for expiring items and
/// print the alert message when there is one. Nothing is printed when the
/// pantry is quiet, and failures surface as errors instead of silence.
///
/// # Errors
/// Returns an error if the URL is invalid or the request fails.
pub async fn execute(args: Args) -> Result<()> {
    let base = Url::parse(&args.url).context("invalid server URL")?;
    let client = HttpAlertsClient::new(base)?;

    let message = notify::check_expiring(&client)
        .await
        .context("failed to check for expiring items")?;

    match message {
        Some(alert) => println!("{alert}"),
        None => debug!("no items expiring soon"),
    }

    Ok(())
}
