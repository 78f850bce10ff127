//! Lookup models
//!
//! - `types` - Type aliases for common identifiers (ProviderId)
//! - `query` - The caller-supplied lookup key (QueryKey)
//! - `address` - The normalized record decoded from a provider (AddressRecord)
//! - `outcome` - Per-provider outcomes and the race result (FetchOutcome, RaceResult)

mod address;
mod outcome;
mod query;
mod types;

pub use address::AddressRecord;
pub use outcome::{FetchOutcome, RaceResult};
pub use query::QueryKey;
pub use types::ProviderId;
