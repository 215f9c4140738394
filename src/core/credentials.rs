//! Credentials returned to Terraform.

use std::collections::HashMap;

use serde::Serialize;

use crate::core::hostname::{self, Hostname};
use crate::error::HostnameError;

/// Tokens keyed by comparison-form hostname.
pub type TokenMap = HashMap<Hostname, String>;

/// Build the single-entry token map for `hostname`.
///
/// The key is derived by rendering `hostname` for display and normalizing
/// that rendering back into comparison form, so a caller that hands over a
/// hostname not already in comparison form will not find its own entry.
///
/// # Errors
///
/// Returns `HostnameError` if the display rendering is not a valid hostname.
pub fn token_map(hostname: &str, token: String) -> Result<TokenMap, HostnameError> {
    let display = hostname::for_display(hostname);
    let key = hostname::for_comparison(&display)?;

    let mut map = TokenMap::with_capacity(1);
    map.insert(key, token);
    Ok(map)
}

/// Body of a `get` response: `{"token":"..."}` or `{}`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Credentials {
    /// No credentials for the host.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up `wanted` in `map`, yielding empty credentials when absent.
    pub fn lookup(map: &TokenMap, wanted: &Hostname) -> Self {
        Self {
            token: map.get(wanted).cloned(),
        }
    }

    /// Compact JSON encoding.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
