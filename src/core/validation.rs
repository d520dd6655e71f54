//! Normalization of subsystem names
//!
//! Names are bounded identifiers. Input longer than the bound is truncated,
//! never rejected, so any caller-supplied string produces a usable name.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of characters kept in a subsystem name
pub const MAX_NAME_LEN: usize = 31;

/// Bounded subsystem name
///
/// # Rules
/// - At most [`MAX_NAME_LEN`] characters; extra characters are dropped
/// - Truncation happens on a character boundary, never inside a UTF-8 sequence
/// - Comparison is exact and case-sensitive
///
/// # Examples
///
/// ```
/// use subsys_registry::SubsystemName;
///
/// let name = SubsystemName::new("SENSOR");
/// assert_eq!(name.as_str(), "SENSOR");
///
/// let long = SubsystemName::new("X".repeat(40));
/// assert_eq!(long.as_str().len(), 31);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct SubsystemName(String);

impl SubsystemName {
    /// Create a name, truncating to [`MAX_NAME_LEN`] characters
    pub fn new(name: impl Into<String>) -> Self {
        let mut name = name.into();
        if let Some((cut, _)) = name.char_indices().nth(MAX_NAME_LEN) {
            tracing::debug!("Truncating subsystem name '{}' to {} characters", name, MAX_NAME_LEN);
            name.truncate(cut);
        }
        SubsystemName(name)
    }

    /// Get the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to String
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for SubsystemName {
    fn from(name: String) -> Self {
        SubsystemName::new(name)
    }
}

impl From<&str> for SubsystemName {
    fn from(name: &str) -> Self {
        SubsystemName::new(name)
    }
}

impl From<SubsystemName> for String {
    fn from(name: SubsystemName) -> Self {
        name.0
    }
}

impl AsRef<str> for SubsystemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for SubsystemName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl fmt::Display for SubsystemName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Pass the formatter through so width/alignment flags apply
        f.pad(&self.0)
    }
}
