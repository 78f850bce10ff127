use std::time::Duration;

use chrono::{DateTime, Utc};

use super::types::ProviderId;

/// Address decoded from one provider response.
///
/// Providers create the record and stamp `provider`; the racer stamps
/// `elapsed` once the call returns. Nothing else changes after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddressRecord {
    /// Postal code as echoed by the provider (may be empty)
    pub postal_code: String,

    /// Street / address line
    pub address_line: String,

    /// Neighborhood (bairro)
    pub neighborhood: String,

    /// City (localidade)
    pub locality: String,

    /// Two-letter state code (UF)
    pub region_code: String,

    /// Source of the record (BrasilAPI, ViaCEP, ...)
    pub provider: ProviderId,

    /// When the response was decoded
    pub received_at: DateTime<Utc>,

    /// Round trip of the provider call, including decode.
    /// `None` until the racer stamps it.
    pub elapsed: Option<Duration>,
}

impl AddressRecord {
    pub fn new(
        provider: impl Into<ProviderId>,
        postal_code: impl Into<String>,
        address_line: impl Into<String>,
        neighborhood: impl Into<String>,
        locality: impl Into<String>,
        region_code: impl Into<String>,
    ) -> Self {
        Self {
            postal_code: postal_code.into(),
            address_line: address_line.into(),
            neighborhood: neighborhood.into(),
            locality: locality.into(),
            region_code: region_code.into(),
            provider: provider.into(),
            received_at: Utc::now(),
            elapsed: None,
        }
    }

    /// Stamp the measured round trip.
    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = Some(elapsed);
        self
    }
}
