//! ViaCEP postal code provider.
//!
//! Uses the `/ws/{cep}/json/` endpoint. ViaCEP answers unknown but
//! well-formed codes with HTTP 200 and `{"erro": true}` (newer deployments
//! send the string `"true"`), which is treated as a schema mismatch.
//!
//! API documentation: https://viacep.com.br

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::errors::LookupError;
use crate::models::{AddressRecord, QueryKey};
use crate::provider::http::{default_client, get_json, render_url};
use crate::provider::ProviderClient;

const BASE_URL: &str = "https://viacep.com.br";
const PATH_TEMPLATE: &str = "/ws/{key}/json/";
const PROVIDER_NAME: &str = "ViaCEP";

/// Response from /ws/{cep}/json/
#[derive(Debug, Deserialize)]
struct ViaCepResponse {
    #[serde(default)]
    cep: String,
    #[serde(default)]
    logradouro: String,
    #[serde(default)]
    bairro: String,
    #[serde(default)]
    localidade: String,
    #[serde(default)]
    uf: String,
    /// Present only when the code is unknown
    #[serde(default)]
    erro: Option<serde_json::Value>,
}

impl ViaCepResponse {
    fn into_record(self, key: &QueryKey) -> Result<AddressRecord, LookupError> {
        if self
            .erro
            .as_ref()
            .is_some_and(|flag| *flag == true || *flag == "true")
        {
            return Err(LookupError::Decode {
                provider: PROVIDER_NAME.to_string(),
                message: format!("Unknown postal code: {}", key),
            });
        }

        Ok(AddressRecord::new(
            PROVIDER_NAME,
            self.cep,
            self.logradouro,
            self.bairro,
            self.localidade,
            self.uf,
        ))
    }
}

/// ViaCEP provider.
pub struct ViaCepProvider {
    client: Client,
    base_url: String,
}

impl ViaCepProvider {
    pub fn new() -> Self {
        Self::with_client(default_client())
    }

    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            base_url: BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn url_for(&self, key: &QueryKey) -> String {
        render_url(&self.base_url, PATH_TEMPLATE, key.as_str())
    }
}

impl Default for ViaCepProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProviderClient for ViaCepProvider {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn fetch(
        &self,
        key: &QueryKey,
        deadline: Duration,
    ) -> Result<AddressRecord, LookupError> {
        let url = self.url_for(key);
        let response: ViaCepResponse =
            get_json(&self.client, PROVIDER_NAME, &url, deadline).await?;
        response.into_record(key)
    }
}
