//! The resolver's output value: a BCP-47 region-qualified language tag.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// BCP-47 language tag requested from the messaging widget (e.g. `de-AT`).
///
/// Has no identity beyond its string value; recomputed per request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageTag(String);

impl LanguageTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LanguageTag {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl ValueObject for LanguageTag {}
