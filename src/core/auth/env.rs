//! Token taken from `VAULT_TOKEN`.

use super::{Token, TokenSource};
use crate::error::Result;

/// Token already read from the environment by [`VaultConfig`](crate::core::config::VaultConfig).
pub struct EnvToken {
    token: Token,
}

impl EnvToken {
    pub fn new(token: Token) -> Self {
        Self { token }
    }
}

impl TokenSource for EnvToken {
    fn name(&self) -> &'static str {
        "environment"
    }

    fn token(&self) -> Result<Option<Token>> {
        if self.token.is_empty() {
            return Ok(None);
        }
        Ok(Some(self.token.clone()))
    }
}
