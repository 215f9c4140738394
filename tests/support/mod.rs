//! Test support utilities for credentials helper integration tests.
//!
//! Provides an isolated environment and a mock Vault server.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;
pub mod vault;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use vault::MockVault;

use std::fs;

use tempfile::TempDir;

/// Test environment with an isolated home directory.
///
/// Child processes get `HOME` pointed at a temp dir and every `VAULT_*`
/// variable removed, so the developer's own Vault login never leaks in.
pub struct Test {
    /// Temporary home directory
    pub home: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let home = TempDir::new().expect("failed to create temp home");
        Self { home }
    }

    /// Create a test environment with a cached `vault login` token.
    pub fn with_token_file(token: &str) -> Self {
        let t = Self::new();
        t.write_token_file(token);
        t
    }

    /// Write `~/.vault-token`.
    pub fn write_token_file(&self, token: &str) {
        fs::write(self.home.path().join(".vault-token"), format!("{token}\n"))
            .expect("failed to write token file");
    }
}
