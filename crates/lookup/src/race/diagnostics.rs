//! Per-provider attempt tracking for race diagnostics.

use std::time::Duration;

use super::validator;
use crate::errors::{FailureKind, LookupError};
use crate::models::{FetchOutcome, ProviderId};

/// How a single provider fared in a race.
#[derive(Clone, Debug)]
pub enum AttemptStatus {
    /// Valid record, eligible to win.
    Accepted { elapsed: Option<Duration> },

    /// Record arrived but failed validation.
    Rejected { error: LookupError },

    /// The call itself failed.
    Failed { error: LookupError },
}

/// Record of a single provider attempt during a race.
#[derive(Clone, Debug)]
pub struct ProviderAttempt {
    pub provider_id: ProviderId,
    pub status: AttemptStatus,
}

impl ProviderAttempt {
    pub fn is_accepted(&self) -> bool {
        matches!(self.status, AttemptStatus::Accepted { .. })
    }

    /// The error behind a rejection or failure.
    pub fn error(&self) -> Option<&LookupError> {
        match &self.status {
            AttemptStatus::Accepted { .. } => None,
            AttemptStatus::Rejected { error } | AttemptStatus::Failed { error } => Some(error),
        }
    }
}

/// Everything the race observed, in outcome order.
///
/// Providers whose failures were suppressed do not appear.
#[derive(Clone, Debug, Default)]
pub struct RaceDiagnostics {
    pub attempts: Vec<ProviderAttempt>,
}

impl RaceDiagnostics {
    pub fn new() -> Self {
        Self {
            attempts: Vec::new(),
        }
    }

    pub fn from_outcomes<'a, I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = &'a FetchOutcome>,
    {
        let mut diagnostics = Self::new();
        for outcome in outcomes {
            match outcome {
                FetchOutcome::Success(record) => match validator::validate(record) {
                    Ok(()) => diagnostics.record_accepted(record.provider.clone(), record.elapsed),
                    Err(error) => diagnostics.record_rejected(record.provider.clone(), error),
                },
                FetchOutcome::Failure { provider, error } => {
                    diagnostics.record_failure(provider.clone(), error.clone())
                }
            }
        }
        diagnostics
    }

    pub fn record_accepted(&mut self, provider_id: ProviderId, elapsed: Option<Duration>) {
        self.attempts.push(ProviderAttempt {
            provider_id,
            status: AttemptStatus::Accepted { elapsed },
        });
    }

    pub fn record_rejected(&mut self, provider_id: ProviderId, error: LookupError) {
        self.attempts.push(ProviderAttempt {
            provider_id,
            status: AttemptStatus::Rejected { error },
        });
    }

    pub fn record_failure(&mut self, provider_id: ProviderId, error: LookupError) {
        self.attempts.push(ProviderAttempt {
            provider_id,
            status: AttemptStatus::Failed { error },
        });
    }

    /// Summary for logging/debugging.
    pub fn summary(&self) -> String {
        if self.attempts.is_empty() {
            return "no outcomes".to_string();
        }

        self.attempts
            .iter()
            .map(|a| match &a.status {
                AttemptStatus::Accepted {
                    elapsed: Some(elapsed),
                } => format!("{}: OK ({}ms)", a.provider_id, elapsed.as_millis()),
                AttemptStatus::Accepted { elapsed: None } => format!("{}: OK", a.provider_id),
                AttemptStatus::Rejected { error } => {
                    format!("{}: REJECTED ({})", a.provider_id, error)
                }
                AttemptStatus::Failed { error } => format!("{}: ERROR ({})", a.provider_id, error),
            })
            .collect::<Vec<_>>()
            .join(" -> ")
    }

    /// Check if any provider returned a usable record.
    pub fn has_success(&self) -> bool {
        self.attempts.iter().any(ProviderAttempt::is_accepted)
    }

    /// Failed calls, excluding validation rejections.
    pub fn failures(&self) -> Vec<(&ProviderId, &LookupError)> {
        self.attempts
            .iter()
            .filter_map(|a| match &a.status {
                AttemptStatus::Failed { error } => Some((&a.provider_id, error)),
                _ => None,
            })
            .collect()
    }

    /// Records that arrived but were not usable.
    pub fn rejections(&self) -> Vec<(&ProviderId, &LookupError)> {
        self.attempts
            .iter()
            .filter_map(|a| match &a.status {
                AttemptStatus::Rejected { error } => Some((&a.provider_id, error)),
                _ => None,
            })
            .collect()
    }

    /// True when every observed attempt failed with `kind`.
    pub fn all_failed_with(&self, kind: FailureKind) -> bool {
        !self.attempts.is_empty()
            && self
                .attempts
                .iter()
                .all(|a| a.error().is_some_and(|e| e.kind() == kind))
    }
}
