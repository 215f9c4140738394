//! Vault token resolution.
//!
//! A token is taken from the first [`TokenSource`] that yields a non-empty
//! value. The default chain mirrors the Vault CLI: `VAULT_TOKEN`, then the
//! `~/.vault-token` file written by `vault login`.
//!
//! ## Adding a New Token Source
//!
//! 1. Implement the `TokenSource` trait
//! 2. Add the implementation in a new file (e.g., `agent.rs`)
//! 3. Insert it into the chain built by `default_sources`

use tracing::debug;
use zeroize::Zeroizing;

use crate::core::config::VaultConfig;
use crate::error::{AuthError, Result};

mod env;
mod file;

pub use env::EnvToken;
pub use file::TokenFile;

/// Vault token, wiped from memory on drop.
pub type Token = Zeroizing<String>;

/// A place a Vault token may be found.
pub trait TokenSource {
    /// Short name for diagnostics.
    fn name(&self) -> &'static str;

    /// Look up a token.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when this source has no token. An empty string counts as
    /// no token.
    ///
    /// # Errors
    ///
    /// Any failure to consult the source. Errors end the resolution chain;
    /// later sources are not tried.
    fn token(&self) -> Result<Option<Token>>;
}

/// Environment first, then the token file.
pub fn default_sources(config: &VaultConfig) -> Result<Vec<Box<dyn TokenSource>>> {
    let env: Box<dyn TokenSource> = Box::new(EnvToken::new(config.token.clone()));
    let file: Box<dyn TokenSource> = Box::new(TokenFile::default_location()?);
    Ok(vec![env, file])
}

/// Walk the sources in order and return the first non-empty token.
///
/// # Errors
///
/// Returns the first source error encountered, or `AuthError::NoToken` when
/// every source came up empty.
pub fn resolve(sources: &[Box<dyn TokenSource>]) -> Result<Token> {
    for source in sources {
        match source.token()? {
            Some(token) if !token.is_empty() => {
                debug!(source = source.name(), "vault token resolved");
                return Ok(token);
            }
            _ => debug!(source = source.name(), "no vault token"),
        }
    }
    Err(AuthError::NoToken.into())
}
