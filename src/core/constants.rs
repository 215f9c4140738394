//! Constants used throughout the helper.
//!
//! Centralizes environment variable names and defaults.

/// Base KV path fallback when `--vault-path` is not given.
pub const VAULT_PATH_ENV: &str = "TF_TOKEN_VAULT_PATH";

/// Log filter directive for the tracing subscriber.
pub const LOG_ENV: &str = "TF_CREDENTIALS_VAULT_LOG";

/// Vault server address.
pub const VAULT_ADDR_ENV: &str = "VAULT_ADDR";

/// Vault token read by the environment token source.
pub const VAULT_TOKEN_ENV: &str = "VAULT_TOKEN";

/// Enterprise namespace sent as `X-Vault-Namespace`.
pub const VAULT_NAMESPACE_ENV: &str = "VAULT_NAMESPACE";

/// CA certificate file to trust in addition to the system roots.
pub const VAULT_CACERT_ENV: &str = "VAULT_CACERT";

/// Disables TLS certificate verification.
pub const VAULT_SKIP_VERIFY_ENV: &str = "VAULT_SKIP_VERIFY";

/// Request timeout in seconds.
pub const VAULT_CLIENT_TIMEOUT_ENV: &str = "VAULT_CLIENT_TIMEOUT";

/// Address used when `VAULT_ADDR` is unset, matching the Vault CLI.
pub const DEFAULT_VAULT_ADDR: &str = "https://127.0.0.1:8200";

/// Request timeout used when `VAULT_CLIENT_TIMEOUT` is unset.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Token file written by `vault login`, relative to HOME.
pub const TOKEN_FILE: &str = ".vault-token";

/// Port Terraform assumes when a hostname carries none.
pub const DEFAULT_HTTPS_PORT: u16 = 443;
