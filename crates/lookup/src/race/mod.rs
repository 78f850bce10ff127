//! Race orchestration.
//!
//! This module provides the concurrency and selection logic:
//! - Validation of decoded records
//! - Parallel fan-out to every provider with a per-call deadline
//! - Selection of the fastest valid record
//! - Per-provider diagnostics

mod config;
mod diagnostics;
mod lookup;
mod racer;
mod selector;

pub mod validator;

pub use config::{FailurePolicy, RaceConfig, DEFAULT_PER_CALL_TIMEOUT};
pub use diagnostics::{AttemptStatus, ProviderAttempt, RaceDiagnostics};
pub use lookup::{AddressLookup, LookupReport};
pub use racer::Racer;
pub use selector::select_fastest_valid;
