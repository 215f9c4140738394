//! Terraform service hostnames.
//!
//! Terraform compares hostnames in a canonical "for comparison" form:
//! IDNA-mapped (lowercased, Unicode-normalized), punycode-encoded, with the
//! default `:443` port removed. The "for display" form is the Unicode
//! rendering of the same name.

use std::fmt;

use crate::core::constants;
use crate::error::HostnameError;

/// A hostname in comparison form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hostname(String);

impl Hostname {
    /// Wrap a string the caller asserts is already in comparison form.
    ///
    /// No normalization happens here; a string that is not in comparison
    /// form simply will not equal any normalized hostname.
    pub fn from_comparison_form(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Hostname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalize `given` into comparison form.
///
/// # Errors
///
/// Returns `HostnameError` if the host is empty, is not a valid IDNA domain
/// name under STD3 rules, or carries a port that is not a decimal integer.
pub fn for_comparison(given: &str) -> Result<Hostname, HostnameError> {
    let (host, port) = split_port(given);
    if host.is_empty() {
        return Err(HostnameError::Empty);
    }

    let ascii = idna::domain_to_ascii_strict(host).map_err(|e| HostnameError::Idna {
        host: host.to_string(),
        reason: e.to_string(),
    })?;
    let port = normalize_port(port)?;

    Ok(Hostname(format!("{ascii}{port}")))
}

/// Render `given` for display.
///
/// Never fails: a host that cannot be decoded is returned unchanged, and an
/// invalid port is kept verbatim.
pub fn for_display(given: &str) -> String {
    let (host, port) = split_port(given);

    let (unicode, result) = idna::domain_to_unicode(host);
    if result.is_err() {
        return given.to_string();
    }
    let port = normalize_port(port).unwrap_or_else(|_| port.to_string());

    format!("{unicode}{port}")
}

/// Split `host:port` into `("host", ":port")`; the port part may be empty.
fn split_port(given: &str) -> (&str, &str) {
    match given.rfind(':') {
        Some(idx) => given.split_at(idx),
        None => (given, ""),
    }
}

/// Canonicalize a `:port` suffix, dropping the default HTTPS port.
///
/// Any signed decimal integer is accepted and printed back in canonical
/// form; the value is not range-checked, matching Terraform's own hostnames.
fn normalize_port(portion: &str) -> Result<String, HostnameError> {
    let Some(digits) = portion.strip_prefix(':') else {
        return Ok(String::new());
    };
    let port = digits
        .parse::<i64>()
        .map_err(|_| HostnameError::InvalidPort(digits.to_string()))?;

    if port == i64::from(constants::DEFAULT_HTTPS_PORT) {
        Ok(String::new())
    } else {
        Ok(format!(":{port}"))
    }
}
