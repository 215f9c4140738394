//! Vault client configuration.
//!
//! Reads the same `VAULT_*` environment variables as the Vault CLI so the
//! helper works wherever `vault read` does.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::core::auth::Token;
use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Connection settings for the Vault HTTP API.
#[derive(Clone, Debug)]
pub struct VaultConfig {
    /// Server address without trailing slash, e.g. `https://vault.example.com:8200`.
    pub addr: String,
    /// Token from `VAULT_TOKEN`, empty when unset.
    pub token: Token,
    pub namespace: Option<String>,
    pub timeout: Duration,
    /// Path and contents of `VAULT_CACERT`.
    pub ca_cert: Option<(PathBuf, Vec<u8>)>,
    pub skip_verify: bool,
}

impl VaultConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let addr = var(constants::VAULT_ADDR_ENV)
            .unwrap_or_else(|| constants::DEFAULT_VAULT_ADDR.to_string())
            .trim_end_matches('/')
            .to_string();
        let token = Token::new(var(constants::VAULT_TOKEN_ENV).unwrap_or_default());
        let namespace = var(constants::VAULT_NAMESPACE_ENV);

        let timeout = match var(constants::VAULT_CLIENT_TIMEOUT_ENV) {
            Some(raw) => parse_timeout(&raw)?,
            None => Duration::from_secs(constants::DEFAULT_TIMEOUT_SECS),
        };

        let skip_verify = match var(constants::VAULT_SKIP_VERIFY_ENV) {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::InvalidSkipVerify(raw))?,
            None => false,
        };

        let ca_cert = var(constants::VAULT_CACERT_ENV)
            .map(PathBuf::from)
            .map(|path| match fs::read(&path) {
                Ok(bytes) => Ok((path, bytes)),
                Err(source) => Err(ConfigError::CaCert { path, source }),
            })
            .transpose()?;

        debug!(
            addr = %addr,
            namespace = namespace.as_deref().unwrap_or(""),
            timeout_secs = timeout.as_secs(),
            skip_verify,
            ca_cert = ca_cert.is_some(),
            "vault config loaded"
        );

        Ok(Self {
            addr,
            token,
            namespace,
            timeout,
            ca_cert,
            skip_verify,
        })
    }

    /// Build the blocking HTTP client for this configuration.
    pub fn build_http_client(&self) -> Result<Client> {
        let mut builder = Client::builder().use_rustls_tls().timeout(self.timeout);

        if let Some((path, bytes)) = &self.ca_cert {
            let cert = reqwest::Certificate::from_pem(bytes)
                .or_else(|_| reqwest::Certificate::from_der(bytes))
                .map_err(|e| ConfigError::InvalidCaCert {
                    path: path.clone(),
                    reason: e.to_string(),
                })?;
            builder = builder.add_root_certificate(cert);
        }
        if self.skip_verify {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;
        Ok(client)
    }
}

/// Seconds, with an optional `s` suffix (`30`, `30s`).
fn parse_timeout(raw: &str) -> Result<Duration> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_suffix('s').unwrap_or(trimmed);
    digits
        .parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
        .ok_or_else(|| ConfigError::InvalidTimeout(raw.to_string()).into())
}

/// Boolean spellings accepted by the Vault CLI.
fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim() {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}
