use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tokio::time::sleep;
use tracing::warn;

use crate::config;

/// Builds the shared HTTP client: browser User-Agent, 30 second timeout.
pub fn build_client() -> Result<Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(config::USER_AGENT));

    Client::builder()
        .default_headers(headers)
        .timeout(Duration::from_secs(30))
        .build()
}

/// GET `url` and decode the body as JSON, retrying on failure.
///
/// A transport error, non-success status, empty body or undecodable body
/// all count as one failed attempt. Attempts are separated by `delay`.
/// After `retries` failed attempts the result is `None`; callers treat
/// that as "no data available", never as fatal.
pub async fn fetch_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    retries: u32,
    delay: Duration,
) -> Option<T> {
    for attempt in 1..=retries {
        match client.get(url).send().await {
            Ok(response) => {
                let status = response.status();
                if !status.is_success() {
                    warn!(url, %status, attempt, "Request returned a failure status");
                } else {
                    match response.text().await {
                        Ok(body) if body.trim().is_empty() => {
                            warn!(url, attempt, "Empty response body");
                        }
                        Ok(body) => match serde_json::from_str::<T>(&body) {
                            Ok(value) => return Some(value),
                            Err(e) => {
                                warn!(url, attempt, error = %e, "Invalid JSON response");
                            }
                        },
                        Err(e) => {
                            warn!(url, attempt, error = %e, "Failed to read response body");
                        }
                    }
                }
            }
            Err(e) => {
                warn!(url, attempt, error = %e, "Request failed");
            }
        }

        if attempt < retries {
            sleep(delay).await;
        }
    }

    None
}
