use std::borrow::Cow;

use crate::errors::LookupError;

use super::address::AddressRecord;
use super::types::ProviderId;

/// What one concurrent unit hands to the collector.
#[derive(Clone, Debug)]
pub enum FetchOutcome {
    /// The provider returned a decoded record, stamped with its elapsed time.
    Success(AddressRecord),

    /// The provider call failed. Only emitted under `FailurePolicy::Report`.
    Failure {
        provider: ProviderId,
        error: LookupError,
    },
}

impl FetchOutcome {
    pub fn failure(error: LookupError) -> Self {
        Self::Failure {
            provider: Cow::Owned(error.provider().to_string()),
            error,
        }
    }

    pub fn provider(&self) -> &str {
        match self {
            Self::Success(record) => &record.provider,
            Self::Failure { provider, .. } => provider,
        }
    }

    pub fn record(&self) -> Option<&AddressRecord> {
        match self {
            Self::Success(record) => Some(record),
            Self::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&LookupError> {
        match self {
            Self::Success(_) => None,
            Self::Failure { error, .. } => Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Output of the selector: the winning record, or an explicit empty marker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RaceResult {
    Winner(AddressRecord),
    /// No provider returned a valid record within the deadline.
    Empty,
}

impl RaceResult {
    pub fn winner(&self) -> Option<&AddressRecord> {
        match self {
            Self::Winner(record) => Some(record),
            Self::Empty => None,
        }
    }

    pub fn into_winner(self) -> Option<AddressRecord> {
        match self {
            Self::Winner(record) => Some(record),
            Self::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}
