//! Strongly-typed input codes supplied by the host platform.
//!
//! Currency and country codes are validated at the boundary; everything
//! downstream can assume well-formed, uppercase codes. The UI locale is
//! deliberately *not* normalized: the resolver's per-branch comparisons
//! depend on the exact spelling the platform reports.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

/// ISO 4217 three-letter currency code (e.g. `EUR`, `SEK`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

/// ISO 3166-1 alpha-2 country code (e.g. `DE`, `NZ`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryCode(String);

macro_rules! impl_alpha_code {
    ($t:ty, $name:literal, $len:expr) => {
        impl $t {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            /// Accepts any casing, stores uppercase.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if s.len() != $len || !s.chars().all(|c| c.is_ascii_alphabetic()) {
                    return Err(DomainError::invalid_code(format!(
                        "{}: expected {} ASCII letters, got {:?}",
                        $name, $len, s
                    )));
                }
                Ok(Self(s.to_ascii_uppercase()))
            }
        }

        impl ValueObject for $t {}
    };
}

impl_alpha_code!(CurrencyCode, "CurrencyCode", 3);
impl_alpha_code!(CountryCode, "CountryCode", 2);

/// Platform locale string as configured on the host (e.g. `de_DE`, `fi`).
///
/// Carries the exact spelling; resolver branches decide case sensitivity
/// individually.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UiLocale(String);

impl UiLocale {
    pub fn new(locale: impl Into<String>) -> Self {
        Self(locale.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exact, case-sensitive comparison.
    pub fn is(&self, other: &str) -> bool {
        self.0 == other
    }

    /// Case-insensitive comparison.
    pub fn is_ignore_case(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }

    /// Substring containment, case-sensitive.
    pub fn contains(&self, needle: &str) -> bool {
        self.0.contains(needle)
    }
}

impl core::fmt::Display for UiLocale {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UiLocale {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl ValueObject for UiLocale {}
