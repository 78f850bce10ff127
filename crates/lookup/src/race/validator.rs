//! Address record validation.
//!
//! A record is usable iff the four semantic fields are non-empty after
//! trimming whitespace. The postal code echo and provenance fields are not checked.
//! Everything here is pure and safe to call from any unit concurrently.

use log::debug;

use crate::errors::LookupError;
use crate::models::AddressRecord;

/// Required fields, in report order.
const REQUIRED_FIELDS: [&str; 4] = ["address_line", "neighborhood", "locality", "region_code"];

fn field_values(record: &AddressRecord) -> [&str; 4] {
    [
        record.address_line.as_str(),
        record.neighborhood.as_str(),
        record.locality.as_str(),
        record.region_code.as_str(),
    ]
}

/// Names of the required fields that are empty or whitespace-only.
pub fn missing_fields(record: &AddressRecord) -> Vec<&'static str> {
    REQUIRED_FIELDS
        .iter()
        .zip(field_values(record))
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect()
}

/// Whether the record can be selected as a winner.
pub fn is_valid(record: &AddressRecord) -> bool {
    field_values(record)
        .iter()
        .all(|value| !value.trim().is_empty())
}

/// Like [`is_valid`], but explains the rejection.
pub fn validate(record: &AddressRecord) -> Result<(), LookupError> {
    let missing = missing_fields(record);
    if missing.is_empty() {
        return Ok(());
    }

    debug!(
        "Record from '{}' rejected, missing: {}",
        record.provider,
        missing.join(", ")
    );
    Err(LookupError::ValidationFailed {
        provider: record.provider.to_string(),
        message: format!("Missing required fields: {}", missing.join(", ")),
    })
}
