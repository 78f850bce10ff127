//! Race configuration.

use std::str::FromStr;
use std::time::Duration;

/// Reference per-call deadline.
pub const DEFAULT_PER_CALL_TIMEOUT: Duration = Duration::from_secs(1);

/// What a unit does with a failed provider call.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum FailurePolicy {
    /// Drop the failure; the unit contributes no outcome.
    Suppress,
    /// Emit `FetchOutcome::Failure` so callers can tell "down" from "slow".
    #[default]
    Report,
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "suppress" => Ok(Self::Suppress),
            "report" => Ok(Self::Report),
            other => Err(format!("Unknown failure policy: {}", other)),
        }
    }
}

#[derive(Clone, Debug)]
pub struct RaceConfig {
    /// Deadline each unit enforces on its own provider call.
    pub per_call_timeout: Duration,
    pub failure_policy: FailurePolicy,
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            per_call_timeout: DEFAULT_PER_CALL_TIMEOUT,
            failure_policy: FailurePolicy::default(),
        }
    }
}
