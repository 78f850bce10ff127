use std::fmt;
use std::sync::Arc;

/// Identifier of the resource to look up, e.g. a postal code.
///
/// The key is opaque to the race: it is only trimmed, never parsed, and each
/// provider decides how to template it into its request. Cloning is cheap so
/// every concurrent unit can own a copy.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QueryKey(Arc<str>);

impl QueryKey {
    pub fn new(key: impl AsRef<str>) -> Self {
        Self(Arc::from(key.as_ref().trim()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QueryKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for QueryKey {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}
