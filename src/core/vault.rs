//! Secret retrieval from Vault.
//!
//! Only logical reads are needed: `GET /v1/<path>` with the resolved token.
//! For KV version 2 mounts the base path includes the `data/` segment
//! (`secret/data/terraform`), and the stored fields come back nested under
//! `data.data`.

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::core::auth::Token;
use crate::core::config::VaultConfig;
use crate::error::{Result, RetrievalError};

/// Field of the KV entry holding the Terraform API token.
pub const TOKEN_FIELD: &str = "token";

/// Response to a logical read.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Secret {
    #[serde(default)]
    pub data: Option<Map<String, Value>>,
    #[serde(default)]
    pub warnings: Option<Vec<String>>,
}

impl Secret {
    fn has_content(&self) -> bool {
        self.data.as_ref().is_some_and(|d| !d.is_empty())
            || self.warnings.as_ref().is_some_and(|w| !w.is_empty())
    }
}

/// Read-by-path access to a secret store.
pub trait SecretReader {
    /// Read the secret at `path`.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when the store returned no payload.
    ///
    /// # Errors
    ///
    /// Returns `RetrievalError` on transport, authorization, or decoding
    /// failures.
    fn read(&self, path: &str) -> Result<Option<Secret>>;
}

/// Error body returned by Vault on failure.
#[derive(Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    errors: Vec<String>,
}

/// Blocking Vault HTTP client bound to one token.
pub struct VaultClient {
    config: VaultConfig,
    client: Client,
    token: Token,
}

impl VaultClient {
    pub fn new(config: VaultConfig, token: Token) -> Result<Self> {
        let client = config.build_http_client()?;
        Ok(Self {
            config,
            client,
            token,
        })
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/v1/{}",
            self.config.addr.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl SecretReader for VaultClient {
    fn read(&self, path: &str) -> Result<Option<Secret>> {
        let url = self.url(path);
        debug!(path, "reading secret");

        let mut request = self
            .client
            .get(&url)
            .header("X-Vault-Token", self.token.as_str());
        if let Some(namespace) = &self.config.namespace {
            request = request.header("X-Vault-Namespace", namespace);
        }

        let response = request.send().map_err(|e| RetrievalError::Request {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        let status = response.status();
        let body = response.text().map_err(|e| RetrievalError::Request {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        debug!(path, status = status.as_u16(), "vault responded");

        if status == StatusCode::NOT_FOUND {
            // Vault answers 404 for missing paths; KV v2 also uses it for
            // deleted versions, which still carry metadata worth returning.
            let secret = serde_json::from_str::<Secret>(&body).ok();
            return Ok(secret.filter(Secret::has_content));
        }

        if !status.is_success() {
            let errors = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.errors)
                .unwrap_or_default();
            return Err(RetrievalError::Status {
                path: path.to_string(),
                status: status.as_u16(),
                errors,
            }
            .into());
        }

        if body.trim().is_empty() {
            return Ok(None);
        }
        let secret = serde_json::from_str::<Secret>(&body).map_err(|e| RetrievalError::Decode {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Some(secret))
    }
}

/// Path of the secret for `hostname` under `base`.
pub fn lookup_path(base: &str, hostname: &str) -> String {
    format!("{base}/{hostname}")
}

/// Pull the API token out of a KV v2 read.
///
/// # Returns
///
/// `Ok(None)` when the payload has no nested `data` object. This is not an
/// error: the caller answers with empty credentials.
///
/// # Errors
///
/// - `RetrievalError::NoSecretData` if there was no payload at all
/// - `RetrievalError::MissingToken` if the nested object has no usable `token`
pub fn extract_token(secret: Option<Secret>, path: &str) -> Result<Option<String>> {
    let secret = secret.ok_or_else(|| RetrievalError::NoSecretData {
        path: path.to_string(),
    })?;

    let Some(Value::Object(fields)) = secret.data.as_ref().and_then(|d| d.get("data")) else {
        debug!(path, "secret has no nested data object");
        return Ok(None);
    };

    let token = match fields.get(TOKEN_FIELD) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };
    if token.is_empty() {
        return Err(RetrievalError::MissingToken {
            path: path.to_string(),
        }
        .into());
    }
    Ok(Some(token))
}
