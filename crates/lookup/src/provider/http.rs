//! Shared GET-and-decode helper for the JSON providers.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::errors::LookupError;

/// Default client used when a provider is built without one.
pub(crate) fn default_client() -> Client {
    Client::builder()
        .user_agent(concat!("ceprace/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// GET `url` and decode the body as `T`, all within `deadline`.
///
/// The deadline covers connect, body read and decode. When it fires the
/// in-flight request future is dropped, which cancels the request.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &Client,
    provider: &'static str,
    url: &str,
    deadline: Duration,
) -> Result<T, LookupError> {
    match tokio::time::timeout(deadline, fetch_json(client, provider, url, deadline)).await {
        Ok(result) => result,
        Err(_) => Err(LookupError::Timeout {
            provider: provider.to_string(),
        }),
    }
}

async fn fetch_json<T: DeserializeOwned>(
    client: &Client,
    provider: &'static str,
    url: &str,
    deadline: Duration,
) -> Result<T, LookupError> {
    debug!("{} request: {}", provider, url);

    let response = client
        .get(url)
        .timeout(deadline)
        .send()
        .await
        .map_err(|e| LookupError::from_reqwest(provider, e))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(LookupError::Transport {
            provider: provider.to_string(),
            message: format!("HTTP {} - {}", status, body.trim()),
        });
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| LookupError::from_reqwest(provider, e))?;

    serde_json::from_slice::<T>(&body).map_err(|e| LookupError::Decode {
        provider: provider.to_string(),
        message: format!("Failed to parse response: {}", e),
    })
}

/// Fill the `{key}` placeholder with the percent-encoded key.
pub(crate) fn render_url(base_url: &str, template: &str, key: &str) -> String {
    let path = template.replace("{key}", &urlencoding::encode(key));
    format!("{}{}", base_url.trim_end_matches('/'), path)
}
