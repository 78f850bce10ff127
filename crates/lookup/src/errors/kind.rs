/// Classification of a failed provider call, used for reporting.
///
/// | Kind | Raised when |
/// |------|-------------|
/// | `Transport` | connection failure or non-success HTTP status |
/// | `Decode` | body is not valid JSON or does not match the provider schema |
/// | `Timeout` | the per-call deadline elapsed before the record was decoded |
/// | `Validation` | the record decoded but is missing a required field |
/// | `Aborted` | the concurrent unit panicked or was cancelled |
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum FailureKind {
    Transport,
    Decode,
    Timeout,
    Validation,
    Aborted,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::Decode => "decode",
            Self::Timeout => "timeout",
            Self::Validation => "validation",
            Self::Aborted => "aborted",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
