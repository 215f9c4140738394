//! Token cached by `vault login` in `~/.vault-token`.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::debug;
use zeroize::Zeroizing;

use super::{Token, TokenSource};
use crate::core::constants;
use crate::error::{AuthError, Result};

/// Vault CLI's internal token helper file.
pub struct TokenFile {
    path: PathBuf,
}

impl TokenFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$HOME/.vault-token`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::NoHomeDir` if the home directory is unknown.
    pub fn default_location() -> Result<Self> {
        let home = dirs::home_dir().ok_or(AuthError::NoHomeDir)?;
        Ok(Self::new(home.join(constants::TOKEN_FILE)))
    }
}

impl TokenSource for TokenFile {
    fn name(&self) -> &'static str {
        "token helper"
    }

    fn token(&self) -> Result<Option<Token>> {
        debug!(path = %self.path.display(), "reading token file");
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => Zeroizing::new(contents),
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(AuthError::TokenFile {
                    path: self.path.clone(),
                    source,
                }
                .into())
            }
        };

        let token = contents.trim();
        if token.is_empty() {
            return Ok(None);
        }
        Ok(Some(Zeroizing::new(token.to_string())))
    }
}
