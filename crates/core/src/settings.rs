//! Merchant configuration snapshot.
//!
//! The host platform stores these as admin key-values; callers deserialize
//! once per request and pass the snapshot explicitly. This system never
//! mutates it.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Read-only merchant settings for the on-site messaging integration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Master switch; nothing renders when off.
    pub enabled: bool,
    /// Test mode targets the vendor's playground environment.
    pub test_mode: bool,
    /// Vendor-issued client identifier. Absent (or blank in the host KV
    /// store) suppresses vendor SDK registration.
    pub client_id: Option<String>,
    /// Default widget key used when the shortcode does not supply one.
    pub data_key: String,
    /// Optional widget theme.
    pub theme: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enabled: true,
            test_mode: false,
            client_id: None,
            data_key: "credit-promotion-auto-size".to_string(),
            theme: None,
        }
    }
}

impl Settings {
    /// Deserialize a settings snapshot from the host's JSON key-value blob.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        serde_json::from_str(json).map_err(|e| DomainError::validation(format!("settings: {e}")))
    }

    /// Client identifier, with blank values treated as absent.
    ///
    /// The host KV store persists "unset" as an empty string; a blank id
    /// must suppress SDK registration exactly like a missing one.
    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref().filter(|id| !id.trim().is_empty())
    }

    /// Theme, with blank values treated as absent.
    pub fn theme(&self) -> Option<&str> {
        self.theme.as_deref().filter(|t| !t.trim().is_empty())
    }
}
