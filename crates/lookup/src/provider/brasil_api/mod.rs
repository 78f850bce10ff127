//! BrasilAPI postal code provider.
//!
//! Uses the `/api/cep/v1/{cep}` endpoint, which answers with English field
//! names (`street`, `neighborhood`, `city`, `state`). Generic codes for a whole
//! city come back with `null` street and neighborhood.
//!
//! API documentation: https://brasilapi.com.br/docs#tag/CEP

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::errors::LookupError;
use crate::models::{AddressRecord, QueryKey};
use crate::provider::http::{default_client, get_json, render_url};
use crate::provider::ProviderClient;

const BASE_URL: &str = "https://brasilapi.com.br";
const PATH_TEMPLATE: &str = "/api/cep/v1/{key}";
const PROVIDER_NAME: &str = "BrasilAPI";

/// Response from /api/cep/v1
#[derive(Debug, Deserialize)]
struct CepResponse {
    #[serde(default)]
    cep: Option<String>,
    /// Two-letter state code
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    neighborhood: Option<String>,
    #[serde(default)]
    street: Option<String>,
    // Note: `service` (which upstream answered) exists but is not used
}

impl CepResponse {
    fn into_record(self) -> AddressRecord {
        AddressRecord::new(
            PROVIDER_NAME,
            self.cep.unwrap_or_default(),
            self.street.unwrap_or_default(),
            self.neighborhood.unwrap_or_default(),
            self.city.unwrap_or_default(),
            self.state.unwrap_or_default(),
        )
    }
}

/// BrasilAPI provider.
pub struct BrasilApiProvider {
    client: Client,
    base_url: String,
}

impl BrasilApiProvider {
    pub fn new() -> Self {
        Self::with_client(default_client())
    }

    /// Share a client (and its connection pool) with other providers.
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Point the provider at another host, e.g. a local stub.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn url_for(&self, key: &QueryKey) -> String {
        render_url(&self.base_url, PATH_TEMPLATE, key.as_str())
    }
}

impl Default for BrasilApiProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProviderClient for BrasilApiProvider {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn fetch(
        &self,
        key: &QueryKey,
        deadline: Duration,
    ) -> Result<AddressRecord, LookupError> {
        let url = self.url_for(key);
        let response: CepResponse = get_json(&self.client, PROVIDER_NAME, &url, deadline).await?;
        Ok(response.into_record())
    }
}
