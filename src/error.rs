//! Error types for the credentials helper.
//!
//! Each stage of a `get` request has its own error enum; they are unified
//! under [`Error`] so the binary can map any failure to exit status 1.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error returned by every fallible operation.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Usage(#[from] UsageError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Unable to read secret from Vault: {0}")]
    Retrieval(#[from] RetrievalError),

    #[error("failed to convert hostname: {0}")]
    Hostname(#[from] HostnameError),

    #[error("failed to serialize result: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write result: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the usage text should follow the diagnostic.
    pub fn wants_usage(&self) -> bool {
        matches!(
            self,
            Error::Usage(
                UsageError::MissingVaultPath
                    | UsageError::MissingArguments
                    | UsageError::InvalidArguments(_)
            )
        )
    }
}

/// Malformed invocation.
#[derive(Error, Debug)]
pub enum UsageError {
    #[error("Error: --vault-path or TF_TOKEN_VAULT_PATH not set.")]
    MissingVaultPath,

    #[error("expected a verb and a hostname")]
    MissingArguments,

    #[error("{0}")]
    InvalidArguments(String),

    #[error("The 'vault' credentials helper is not able to {0} credentials.")]
    UnsupportedVerb(String),
}

/// No usable Vault token.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("failed to get token from environment or credential helper")]
    NoToken,

    #[error("failed to get token from token helper: unable to determine home directory")]
    NoHomeDir,

    #[error("failed to get token from token helper {}: {source}", path.display())]
    TokenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Invalid `VAULT_*` environment configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid VAULT_CLIENT_TIMEOUT {0:?}: expected a positive number of seconds")]
    InvalidTimeout(String),

    #[error("invalid VAULT_SKIP_VERIFY {0:?}: expected a boolean")]
    InvalidSkipVerify(String),

    #[error("failed to read VAULT_CACERT {}: {source}", path.display())]
    CaCert {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse VAULT_CACERT {}: {reason}", path.display())]
    InvalidCaCert { path: PathBuf, reason: String },

    #[error("failed to create client: {0}")]
    Client(String),
}

/// Failure while reading or interpreting the secret.
#[derive(Error, Debug)]
pub enum RetrievalError {
    #[error("failed to read secret from Vault at {path}: {reason}")]
    Request { path: String, reason: String },

    #[error("failed to read secret from Vault at {path}: {status}{}", format_errors(.errors))]
    Status {
        path: String,
        status: u16,
        errors: Vec<String>,
    },

    #[error("failed to decode Vault response from {path}: {reason}")]
    Decode { path: String, reason: String },

    #[error("no secret data returned from path={path}")]
    NoSecretData { path: String },

    #[error("secret data at {path} does not contain a token attribute or it is empty")]
    MissingToken { path: String },
}

/// Hostname is not valid in comparison form.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum HostnameError {
    #[error("hostname is empty")]
    Empty,

    #[error("invalid hostname {host:?}: {reason}")]
    Idna { host: String, reason: String },

    #[error("invalid port {0:?}: must be a decimal number between 1 and 65535")]
    InvalidPort(String),
}

fn format_errors(errors: &[String]) -> String {
    if errors.is_empty() {
        String::new()
    } else {
        format!(" ({})", errors.join("; "))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
