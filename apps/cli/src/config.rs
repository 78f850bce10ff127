use std::time::Duration;

use ceprace_lookup::{FailurePolicy, RaceConfig};

const DEFAULT_POSTAL_CODE: &str = "88905440";
const DEFAULT_TIMEOUT_MS: u64 = 1_000;

pub struct Config {
    pub postal_code: String,
    pub request_timeout: Duration,
    pub failure_policy: FailurePolicy,
    pub log_format: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let postal_code = var("CEPRACE_POSTAL_CODE")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_POSTAL_CODE.into());
        let timeout_ms: u64 = var("CEPRACE_TIMEOUT_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_TIMEOUT_MS);
        let failure_policy = var("CEPRACE_FAILURE_POLICY")
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();
        let log_format = var("CEPRACE_LOG_FORMAT").unwrap_or_else(|| "text".into());
        Self {
            postal_code,
            request_timeout: Duration::from_millis(timeout_ms),
            failure_policy,
            log_format,
        }
    }

    /// The first positional argument, if any, replaces the postal code.
    pub fn with_args(mut self, mut args: impl Iterator<Item = String>) -> Self {
        if let Some(code) = args.next().filter(|s| !s.trim().is_empty()) {
            self.postal_code = code;
        }
        self
    }

    pub fn race_config(&self) -> RaceConfig {
        RaceConfig {
            per_call_timeout: self.request_timeout,
            failure_policy: self.failure_policy,
        }
    }
}
