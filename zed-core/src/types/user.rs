use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};

/// Opaque identifier of an authenticated user.
///
/// The authentication provider owns the format of this identifier; the
/// dashboard only passes it through to scope queries against the hosted
/// store.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default, PartialOrd, Ord)]
pub struct UserId(String);

impl UserId {
    /// Creates a new `UserId`.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the provided `id` is empty.
    pub fn new(id: impl Into<String>) -> Self {
        let id_str = id.into();
        debug_assert!(!id_str.is_empty(), "UserId must not be empty.");
        Self(id_str)
    }

    /// Returns a string slice of the user ID.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Debug for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UserId").field(&self.0).finish()
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        debug_assert!(!id.is_empty(), "UserId must not be empty.");
        Self(id)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        debug_assert!(!id.is_empty(), "UserId must not be empty.");
        Self(id.to_string())
    }
}
