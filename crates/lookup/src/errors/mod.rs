//! Error types for the lookup crate.
//!
//! This module provides:
//! - [`LookupError`]: The error returned by a single provider call
//! - [`FailureKind`]: A flat tag for grouping failures in diagnostics

mod kind;

pub use kind::FailureKind;

use thiserror::Error;

/// Errors that can occur while fetching an address from one provider.
///
/// Every variant carries the name of the provider that produced it, so a
/// failure can be reported on its own once it leaves the concurrent unit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The request never produced a usable response
    /// (connection refused, DNS failure, non-success HTTP status).
    #[error("Transport error: {provider} - {message}")]
    Transport {
        /// The provider that failed
        provider: String,
        /// What went wrong on the wire
        message: String,
    },

    /// The response body was malformed or did not match the provider schema.
    #[error("Decode error: {provider} - {message}")]
    Decode {
        /// The provider that returned the body
        provider: String,
        /// Why decoding failed
        message: String,
    },

    /// The per-call deadline elapsed before the call completed.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The record decoded but is not usable.
    /// Never returned by a provider fetch; produced when reporting rejected records.
    #[error("Validation failed: {provider} - {message}")]
    ValidationFailed {
        /// The provider whose record was rejected
        provider: String,
        /// The missing fields
        message: String,
    },

    /// The unit running the call panicked or was cancelled before handing off.
    #[error("Task aborted: {provider} - {message}")]
    TaskAborted {
        /// The provider whose unit aborted
        provider: String,
        /// The join error
        message: String,
    },
}

impl LookupError {
    /// Builds the matching variant for a `reqwest` failure.
    pub fn from_reqwest(provider: &str, error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout {
                provider: provider.to_string(),
            }
        } else if error.is_decode() {
            Self::Decode {
                provider: provider.to_string(),
                message: error.to_string(),
            }
        } else {
            Self::Transport {
                provider: provider.to_string(),
                message: format!("Request failed: {}", error),
            }
        }
    }

    /// The provider this error belongs to.
    pub fn provider(&self) -> &str {
        match self {
            Self::Transport { provider, .. }
            | Self::Decode { provider, .. }
            | Self::Timeout { provider }
            | Self::ValidationFailed { provider, .. }
            | Self::TaskAborted { provider, .. } => provider,
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Transport { .. } => FailureKind::Transport,
            Self::Decode { .. } => FailureKind::Decode,
            Self::Timeout { .. } => FailureKind::Timeout,
            Self::ValidationFailed { .. } => FailureKind::Validation,
            Self::TaskAborted { .. } => FailureKind::Aborted,
        }
    }
}
