//! Newtype identifiers embedded in resource paths.
//!
//! A slug is spliced directly into a relative URL (`modules/{slug}`), so it
//! must never contain characters that would move the request to a different
//! path, add a query string, or start a fragment.

use serde::{Deserialize, Serialize};

/// Characters that would let a slug escape its single path segment.
const FORBIDDEN: [char; 3] = ['/', '?', '#'];

/// Identifies a module by its slug (e.g. `"puppetlabs-stdlib"`).
///
/// Legacy, case-sensitive slugs are accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModuleSlug(String);

impl ModuleSlug {
    /// Creates a new slug, returning `None` if the value is empty, is a dot
    /// segment, or contains a path separator, `?` or `#`.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let v = value.into();
        if v.is_empty() || v == "." || v == ".." || v.contains(&FORBIDDEN[..]) {
            None
        } else {
            Some(Self(v))
        }
    }

    /// Returns the slug as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ModuleSlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ModuleSlug {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value.clone()).ok_or_else(|| format!("invalid module slug: {value:?}"))
    }
}

impl From<ModuleSlug> for String {
    fn from(slug: ModuleSlug) -> Self {
        slug.0
    }
}
