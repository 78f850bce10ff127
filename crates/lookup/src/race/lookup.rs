//! Lookup facade: race every provider, then select.

use std::sync::Arc;

use tracing::{info, warn};

use super::{select_fastest_valid, RaceConfig, RaceDiagnostics, Racer};
use crate::models::{FetchOutcome, QueryKey, RaceResult};
use crate::provider::brasil_api::BrasilApiProvider;
use crate::provider::via_cep::ViaCepProvider;
use crate::provider::{default_client, ProviderClient};

/// Everything one lookup produced.
#[derive(Clone, Debug)]
pub struct LookupReport {
    pub key: QueryKey,
    pub result: RaceResult,
    /// Raw outcomes in arrival order.
    pub outcomes: Vec<FetchOutcome>,
    pub diagnostics: RaceDiagnostics,
}

/// Races a fixed set of providers for each key.
pub struct AddressLookup {
    providers: Vec<Arc<dyn ProviderClient>>,
    racer: Racer,
}

impl AddressLookup {
    pub fn new(providers: Vec<Arc<dyn ProviderClient>>) -> Self {
        Self::with_config(providers, RaceConfig::default())
    }

    pub fn with_config(providers: Vec<Arc<dyn ProviderClient>>, config: RaceConfig) -> Self {
        Self {
            providers,
            racer: Racer::new(config),
        }
    }

    /// Race BrasilAPI and ViaCEP.
    pub fn with_default_providers(config: RaceConfig) -> Self {
        Self::with_config(Self::default_providers(default_client()), config)
    }

    /// BrasilAPI and ViaCEP sharing one HTTP client.
    pub fn default_providers(client: reqwest::Client) -> Vec<Arc<dyn ProviderClient>> {
        vec![
            Arc::new(BrasilApiProvider::with_client(client.clone())),
            Arc::new(ViaCepProvider::with_client(client)),
        ]
    }

    pub fn providers(&self) -> &[Arc<dyn ProviderClient>] {
        &self.providers
    }

    pub fn config(&self) -> &RaceConfig {
        self.racer.config()
    }

    pub async fn lookup(&self, key: &QueryKey) -> LookupReport {
        info!(
            "Racing {} provider(s) for '{}' (timeout {:?})",
            self.providers.len(),
            key,
            self.config().per_call_timeout
        );

        let outcomes = self.racer.race(key, &self.providers).await;
        let result = select_fastest_valid(&outcomes);
        let diagnostics = RaceDiagnostics::from_outcomes(&outcomes);

        match result.winner() {
            Some(winner) => info!(
                "Fastest valid result for '{}' from '{}' [{}]",
                key,
                winner.provider,
                diagnostics.summary()
            ),
            None => warn!(
                "No valid result for '{}' [{}]",
                key,
                diagnostics.summary()
            ),
        }

        LookupReport {
            key: key.clone(),
            result,
            outcomes,
            diagnostics,
        }
    }
}
