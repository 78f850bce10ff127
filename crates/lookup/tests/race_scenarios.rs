//! End-to-end race scenarios against scripted providers.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use ceprace_lookup::{
    AddressLookup, AddressRecord, FailureKind, FailurePolicy, LookupError, ProviderClient,
    QueryKey, RaceConfig,
};

// =============================================================================
// Scripted provider
// =============================================================================

enum Script {
    Answer(AddressRecord),
    Fail(LookupError),
}

struct ScriptedProvider {
    name: &'static str,
    delay: Duration,
    script: Script,
}

impl ScriptedProvider {
    fn valid(name: &'static str, delay_ms: u64) -> Arc<dyn ProviderClient> {
        Self::answering(name, delay_ms, address(name, "SC"))
    }

    fn answering(name: &'static str, delay_ms: u64, record: AddressRecord) -> Arc<dyn ProviderClient> {
        Arc::new(Self {
            name,
            delay: Duration::from_millis(delay_ms),
            script: Script::Answer(record),
        })
    }

    fn failing(name: &'static str, delay_ms: u64, error: LookupError) -> Arc<dyn ProviderClient> {
        Arc::new(Self {
            name,
            delay: Duration::from_millis(delay_ms),
            script: Script::Fail(error),
        })
    }
}

#[async_trait]
impl ProviderClient for ScriptedProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn fetch(
        &self,
        _key: &QueryKey,
        _deadline: Duration,
    ) -> Result<AddressRecord, LookupError> {
        tokio::time::sleep(self.delay).await;
        match &self.script {
            Script::Answer(record) => Ok(record.clone()),
            Script::Fail(error) => Err(error.clone()),
        }
    }
}

fn address(provider: &'static str, region_code: &str) -> AddressRecord {
    AddressRecord::new(
        provider,
        "88905440",
        "Rua Caetano Lummertz",
        "Cidade Alta",
        "Araranguá",
        region_code,
    )
}

fn lookup(providers: Vec<Arc<dyn ProviderClient>>, timeout_ms: u64) -> AddressLookup {
    AddressLookup::with_config(
        providers,
        RaceConfig {
            per_call_timeout: Duration::from_millis(timeout_ms),
            failure_policy: FailurePolicy::Report,
        },
    )
}

fn key() -> QueryKey {
    QueryKey::new("88905440")
}

// =============================================================================
// Scenarios
// =============================================================================

#[tokio::test(start_paused = true)]
async fn two_valid_providers_fastest_wins() {
    let lookup = lookup(
        vec![
            ScriptedProvider::valid("SLOW", 120),
            ScriptedProvider::valid("FAST", 50),
        ],
        1_000,
    );

    let report = lookup.lookup(&key()).await;

    let winner = report.result.winner().expect("a winner");
    assert_eq!(winner.provider, "FAST");
    assert!(winner.elapsed.unwrap() >= Duration::from_millis(50));
    assert!(winner.elapsed.unwrap() < Duration::from_millis(120));
    assert_eq!(report.outcomes.len(), 2);
}

#[tokio::test(start_paused = true)]
async fn invalid_fast_answer_loses_to_valid_slow_answer() {
    let lookup = lookup(
        vec![
            ScriptedProvider::answering("A", 20, address("A", "")),
            ScriptedProvider::valid("B", 200),
        ],
        1_000,
    );

    let report = lookup.lookup(&key()).await;

    assert_eq!(report.result.winner().unwrap().provider, "B");
    let rejections = report.diagnostics.rejections();
    assert_eq!(rejections.len(), 1);
    assert_eq!(rejections[0].0, "A");
    assert_eq!(rejections[0].1.kind(), FailureKind::Validation);
}

#[tokio::test(start_paused = true)]
async fn all_providers_timing_out_yield_empty_result() {
    let lookup = lookup(
        vec![
            ScriptedProvider::valid("A", 5_000),
            ScriptedProvider::valid("B", 5_000),
        ],
        1_000,
    );

    let report = lookup.lookup(&key()).await;

    assert!(report.result.is_empty());
    assert!(report.diagnostics.all_failed_with(FailureKind::Timeout));
    assert_eq!(report.diagnostics.failures().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn decode_error_is_reported_not_fatal() {
    let lookup = lookup(
        vec![
            ScriptedProvider::failing(
                "A",
                10,
                LookupError::Decode {
                    provider: "A".to_string(),
                    message: "expected value at line 1 column 1".to_string(),
                },
            ),
            ScriptedProvider::valid("B", 80),
        ],
        1_000,
    );

    let report = lookup.lookup(&key()).await;

    assert_eq!(report.result.winner().unwrap().provider, "B");
    let failures = report.diagnostics.failures();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].0, "A");
    assert_eq!(failures[0].1.kind(), FailureKind::Decode);
}

#[tokio::test(start_paused = true)]
async fn suppressed_failures_leave_no_trace() {
    let lookup = AddressLookup::with_config(
        vec![
            ScriptedProvider::failing(
                "A",
                10,
                LookupError::Transport {
                    provider: "A".to_string(),
                    message: "connection refused".to_string(),
                },
            ),
            ScriptedProvider::valid("B", 5_000),
        ],
        RaceConfig {
            per_call_timeout: Duration::from_secs(1),
            failure_policy: FailurePolicy::Suppress,
        },
    );

    let report = lookup.lookup(&key()).await;

    assert!(report.result.is_empty());
    assert!(report.outcomes.is_empty());
    assert!(report.diagnostics.attempts.is_empty());
}

// =============================================================================
// Concurrency
// =============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn slow_provider_does_not_serialize_the_race() {
    let timeout = Duration::from_millis(400);
    let lookup = lookup(
        vec![
            ScriptedProvider::valid("A", 60),
            ScriptedProvider::valid("SLOW", 10_000),
            ScriptedProvider::valid("B", 30),
            ScriptedProvider::valid("C", 90),
        ],
        timeout.as_millis() as u64,
    );

    let started = std::time::Instant::now();
    let report = lookup.lookup(&key()).await;
    let wall = started.elapsed();

    assert_eq!(report.result.winner().unwrap().provider, "B");
    assert_eq!(report.outcomes.len(), 4);
    // Sequential execution would take at least 60 + 400 + 30 + 90 ms.
    assert!(wall >= timeout);
    assert!(wall < timeout * 2, "race took {:?}", wall);
}

#[tokio::test(start_paused = true)]
async fn no_late_success_after_deadline() {
    let lookup = lookup(vec![ScriptedProvider::valid("LATE", 1_001)], 1_000);

    let report = lookup.lookup(&key()).await;

    assert!(report.result.is_empty());
    assert_eq!(report.outcomes.len(), 1);
    assert!(matches!(
        report.outcomes[0].error(),
        Some(LookupError::Timeout { .. })
    ));
}
