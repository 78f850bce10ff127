//! Concurrent fan-out of one lookup across every provider.
//!
//! One task per provider, all spawned together and all joined before
//! `race` returns. Outcomes travel over a channel sized to the fan-out, and
//! the channel is drained only after the last unit has joined, so the
//! returned collection is complete and no late result can arrive after it.

use std::borrow::Cow;
use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{debug, warn};

use super::config::{FailurePolicy, RaceConfig};
use crate::errors::LookupError;
use crate::models::{FetchOutcome, QueryKey};
use crate::provider::ProviderClient;

/// Fan-out/fan-in barrier over a set of providers.
#[derive(Clone, Debug, Default)]
pub struct Racer {
    config: RaceConfig,
}

impl Racer {
    pub fn new(config: RaceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RaceConfig {
        &self.config
    }

    /// Query every provider for `key` in parallel.
    ///
    /// Each unit enforces `per_call_timeout` on its own call; a slow provider
    /// never delays or cancels the others. Returns at most one outcome per
    /// provider, in arrival order. Under [`FailurePolicy::Suppress`] failed
    /// units contribute nothing.
    pub async fn race(
        &self,
        key: &QueryKey,
        providers: &[Arc<dyn ProviderClient>],
    ) -> Vec<FetchOutcome> {
        if providers.is_empty() {
            warn!("No providers to race for '{}'", key);
            return Vec::new();
        }

        let policy = self.config.failure_policy;
        let deadline = self.config.per_call_timeout;

        // Capacity equals the number of senders: a hand-off never waits.
        let (tx, mut rx) = mpsc::channel(providers.len());

        let units: Vec<_> = providers
            .iter()
            .map(|provider| {
                let provider = Arc::clone(provider);
                let key = key.clone();
                let tx = tx.clone();
                let name = provider.name();

                let handle = tokio::spawn(async move {
                    let outcome = run_unit(provider.as_ref(), &key, deadline).await;
                    if let Some(outcome) = admit(outcome, policy) {
                        // The receiver outlives every unit.
                        let _ = tx.send(outcome).await;
                    }
                });
                (name, handle)
            })
            .collect();
        drop(tx);

        let joined = join_all(
            units
                .into_iter()
                .map(|(name, handle)| async move { (name, handle.await) }),
        )
        .await;

        let mut outcomes = Vec::with_capacity(providers.len());
        while let Some(outcome) = rx.recv().await {
            outcomes.push(outcome);
        }

        for (name, result) in joined {
            if let Err(e) = result {
                warn!("Unit for provider '{}' aborted: {}", name, e);
                let error = LookupError::TaskAborted {
                    provider: name.to_string(),
                    message: e.to_string(),
                };
                if let Some(outcome) = admit(FetchOutcome::failure(error), policy) {
                    outcomes.push(outcome);
                }
            }
        }

        debug!(
            "Race for '{}' finished: {} outcome(s) from {} provider(s)",
            key,
            outcomes.len(),
            providers.len()
        );
        outcomes
    }
}

/// Time one provider call and wrap its result.
async fn run_unit(
    provider: &dyn ProviderClient,
    key: &QueryKey,
    deadline: Duration,
) -> FetchOutcome {
    let name = provider.name();
    let started = Instant::now();
    debug!("Fetching '{}' from provider '{}'", key, name);

    // Holds even for providers that ignore the deadline they are given.
    let result = match tokio::time::timeout(deadline, provider.fetch(key, deadline)).await {
        Ok(result) => result,
        Err(_) => Err(LookupError::Timeout {
            provider: name.to_string(),
        }),
    };

    match result {
        Ok(record) => {
            let elapsed = started.elapsed();
            debug!("Provider '{}' answered in {:?}", name, elapsed);
            FetchOutcome::Success(record.with_elapsed(elapsed))
        }
        Err(error) => {
            warn!("Provider '{}' failed: {}", name, error);
            FetchOutcome::Failure {
                provider: Cow::Borrowed(name),
                error,
            }
        }
    }
}

fn admit(outcome: FetchOutcome, policy: FailurePolicy) -> Option<FetchOutcome> {
    match (policy, &outcome) {
        (FailurePolicy::Suppress, FetchOutcome::Failure { .. }) => None,
        _ => Some(outcome),
    }
}
