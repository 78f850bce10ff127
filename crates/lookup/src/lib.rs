//! Postal Code Race Crate
//!
//! Looks up a Brazilian postal code (CEP) by querying several independent
//! providers at once and keeping the fastest answer that is actually usable.
//!
//! # Architecture
//!
//! ```text
//!                      +------------------+
//!                      |    QueryKey      |  (caller-supplied)
//!                      +------------------+
//!                               |
//!                               v
//!                      +------------------+
//!                      |      Racer       |  (one task per provider,
//!                      +------------------+   per-call deadline, join all)
//!                        |             |
//!                        v             v
//!              +----------------+ +----------------+
//!              | ProviderClient | | ProviderClient |  (BrasilAPI, ViaCEP, ...)
//!              +----------------+ +----------------+
//!                        |             |
//!                        v             v
//!                      +------------------+
//!                      |  FetchOutcome[]  |  (Success | Failure)
//!                      +------------------+
//!                               |
//!                               v
//!                      +------------------+
//!                      |     Selector     |  (valid + minimum elapsed)
//!                      +------------------+
//!                               |
//!                               v
//!                      +------------------+
//!                      |    RaceResult    |  (Winner | Empty)
//!                      +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`QueryKey`] - Opaque identifier of the resource to look up
//! - [`AddressRecord`] - Normalized address plus provenance and elapsed time
//! - [`FetchOutcome`] - One provider's success or failure
//! - [`RaceResult`] - The winning record or an explicit empty marker
//! - [`AddressLookup`] - Race-then-select facade returning a [`LookupReport`]

pub mod errors;
pub mod models;
pub mod provider;
pub mod race;

pub use errors::{FailureKind, LookupError};

pub use models::{AddressRecord, FetchOutcome, ProviderId, QueryKey, RaceResult};

pub use provider::brasil_api::BrasilApiProvider;
pub use provider::via_cep::ViaCepProvider;
pub use provider::ProviderClient;

pub use race::{
    select_fastest_valid, validator, AddressLookup, AttemptStatus, FailurePolicy, LookupReport,
    ProviderAttempt, RaceConfig, RaceDiagnostics, Racer, DEFAULT_PER_CALL_TIMEOUT,
};
