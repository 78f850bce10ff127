//! Provider trait definition.

use std::time::Duration;

use async_trait::async_trait;

use crate::errors::LookupError;
use crate::models::{AddressRecord, QueryKey};

/// Trait for address providers.
///
/// Implement this trait to race another remote source. The racer calls
/// [`fetch`](Self::fetch) once per lookup from its own concurrent unit, so
/// implementations must be shareable across tasks.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use ceprace_lookup::provider::ProviderClient;
///
/// struct MyProvider;
///
/// #[async_trait]
/// impl ProviderClient for MyProvider {
///     fn name(&self) -> &'static str {
///         "MY_PROVIDER"
///     }
///
///     async fn fetch(&self, key: &QueryKey, deadline: Duration) -> Result<AddressRecord, LookupError> {
///         // ... one GET, decode, stamp provider
///     }
/// }
/// ```
#[async_trait]
pub trait ProviderClient: Send + Sync {
    /// Unique name for this provider.
    ///
    /// Stamped into every record and error the provider produces.
    fn name(&self) -> &'static str;

    /// Fetch and decode the address for `key`.
    ///
    /// Makes a single attempt bounded by `deadline`. On success the record
    /// carries the provider name but no elapsed time; the caller measures that
    /// around the whole call.
    ///
    /// # Errors
    ///
    /// [`LookupError::Transport`], [`LookupError::Decode`] or [`LookupError::Timeout`].
    async fn fetch(&self, key: &QueryKey, deadline: Duration)
        -> Result<AddressRecord, LookupError>;
}
