//! Command helper methods for Test.

use super::{MockVault, Test, BASE_PATH, ENV_TOKEN};
use assert_cmd::Command;
use std::process::Output;

/// Variables that would otherwise leak in from the developer's shell.
const SCRUBBED_ENV: &[&str] = &[
    "VAULT_ADDR",
    "VAULT_TOKEN",
    "VAULT_NAMESPACE",
    "VAULT_CACERT",
    "VAULT_SKIP_VERIFY",
    "VAULT_CLIENT_TIMEOUT",
    "TF_TOKEN_VAULT_PATH",
    "TF_CREDENTIALS_VAULT_LOG",
];

impl Test {
    /// Create a helper command with a scrubbed environment.
    ///
    /// Returns a Command configured with:
    /// - HOME set to the temporary home directory
    /// - all Vault and helper variables removed
    /// - NO_COLOR set so diagnostics are plain text
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("terraform-credentials-vault")
            .expect("failed to find terraform-credentials-vault binary");
        for var in SCRUBBED_ENV {
            cmd.env_remove(var);
        }
        cmd.env("HOME", self.home.path());
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.home.path());
        cmd
    }

    /// Command pointed at `vault` with no token configured.
    pub fn vault_cmd(&self, vault: &MockVault) -> Command {
        let mut cmd = self.cmd();
        cmd.env("VAULT_ADDR", vault.uri());
        cmd
    }

    /// Shortcut for `get <hostname>` against `vault` using `VAULT_TOKEN`.
    pub fn get(&self, vault: &MockVault, hostname: &str) -> Output {
        self.vault_cmd(vault)
            .env("VAULT_TOKEN", ENV_TOKEN)
            .args(["--vault-path", BASE_PATH, "get", hostname])
            .output()
            .expect("failed to run get")
    }
}
