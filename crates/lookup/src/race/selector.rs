//! Reduction of raced outcomes to a single winner.

use std::time::Duration;

use log::debug;

use super::validator;
use crate::models::{AddressRecord, FetchOutcome, RaceResult};

/// Pick the valid record with the smallest stamped `elapsed`.
///
/// Comparison uses the elapsed value captured when the call returned, never
/// the clock at selection time. Ties keep the first record in iteration order.
/// A record the racer never stamped sorts after every stamped one.
pub fn select_fastest_valid<'a, I>(outcomes: I) -> RaceResult
where
    I: IntoIterator<Item = &'a FetchOutcome>,
{
    let mut fastest: Option<(&AddressRecord, Duration)> = None;

    for record in outcomes.into_iter().filter_map(FetchOutcome::record) {
        if !validator::is_valid(record) {
            debug!("Skipping invalid record from '{}'", record.provider);
            continue;
        }

        let elapsed = record.elapsed.unwrap_or(Duration::MAX);
        match fastest {
            Some((_, best)) if elapsed >= best => {}
            _ => fastest = Some((record, elapsed)),
        }
    }

    match fastest {
        Some((record, _)) => RaceResult::Winner(record.clone()),
        None => RaceResult::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LookupError;

    fn success(provider: &'static str, elapsed_ms: u64) -> FetchOutcome {
        FetchOutcome::Success(
            AddressRecord::new(provider, "88905440", "Rua A", "Centro", "Araranguá", "SC")
                .with_elapsed(Duration::from_millis(elapsed_ms)),
        )
    }

    #[test]
    fn test_picks_minimum_elapsed() {
        let outcomes = vec![success("SLOW", 120), success("FAST", 50)];

        let result = select_fastest_valid(&outcomes);
        assert_eq!(result.winner().unwrap().provider, "FAST");
    }

    #[test]
    fn test_tie_keeps_first_seen() {
        let outcomes = vec![success("FIRST", 80), success("SECOND", 80)];

        let result = select_fastest_valid(&outcomes);
        assert_eq!(result.winner().unwrap().provider, "FIRST");
    }

    #[test]
    fn test_invalid_record_never_wins() {
        let mut invalid = success("FAST", 10);
        if let FetchOutcome::Success(record) = &mut invalid {
            record.region_code = String::new();
        }
        let outcomes = vec![invalid, success("SLOW", 200)];

        let result = select_fastest_valid(&outcomes);
        assert_eq!(result.winner().unwrap().provider, "SLOW");
    }

    #[test]
    fn test_failures_are_ignored() {
        let outcomes = vec![
            FetchOutcome::failure(LookupError::Timeout {
                provider: "A".to_string(),
            }),
            success("B", 300),
        ];

        let result = select_fastest_valid(&outcomes);
        assert_eq!(result.winner().unwrap().provider, "B");
    }

    #[test]
    fn test_unstamped_record_loses_to_stamped() {
        let unstamped = FetchOutcome::Success(AddressRecord::new(
            "UNSTAMPED", "", "Rua A", "Centro", "Araranguá", "SC",
        ));
        let outcomes = vec![unstamped, success("STAMPED", 900)];

        let result = select_fastest_valid(&outcomes);
        assert_eq!(result.winner().unwrap().provider, "STAMPED");
    }

    #[test]
    fn test_empty_input_is_empty_result() {
        let outcomes: Vec<FetchOutcome> = Vec::new();
        assert!(select_fastest_valid(&outcomes).is_empty());
    }
}
