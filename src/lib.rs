//! terraform-credentials-vault - A Terraform credentials helper backed by
//! HashiCorp Vault.
//!
//! Terraform invokes the helper as `terraform-credentials-vault get <hostname>`
//! and expects `{"token":"..."}` (or `{}`) on stdout. The token is read from
//! the KV secret at `<vault-path>/<hostname>`.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── get           # The `get` verb
//! │   └── output        # stderr diagnostics and usage
//! └── core/             # Core library components
//!     ├── auth/         # Vault token sources
//!     │   ├── env       # VAULT_TOKEN
//!     │   └── file      # ~/.vault-token
//!     ├── config        # VAULT_* environment configuration
//!     ├── credentials   # Token map and response object
//!     ├── hostname      # Comparison/display hostname forms
//!     ├── vault         # Secret reads over the Vault HTTP API
//!     └── version       # Build information
//! ```

pub mod cli;
pub mod core;
pub mod error;
