//! The `get` verb.

use std::io::Write;

use tracing::debug;

use crate::core::auth;
use crate::core::config::VaultConfig;
use crate::core::credentials::{self, Credentials};
use crate::core::hostname::Hostname;
use crate::core::vault::{self, SecretReader, VaultClient};
use crate::error::Result;

/// Resolve a token, read the host's secret and print the credentials object.
///
/// Nothing is written to `out` unless the whole lookup succeeds.
pub fn execute(vault_path: &str, hostname: &str, out: &mut impl Write) -> Result<()> {
    let config = VaultConfig::from_env()?;
    let sources = auth::default_sources(&config)?;
    let token = auth::resolve(&sources)?;
    let client = VaultClient::new(config, token)?;

    let creds = lookup(&client, vault_path, hostname)?;
    write_credentials(out, &creds)
}

/// Look up the credentials for `hostname` under `vault_path`.
///
/// Terraform passes the hostname in comparison form already, so it is used
/// verbatim both in the secret path and as the lookup key.
pub fn lookup(reader: &dyn SecretReader, vault_path: &str, hostname: &str) -> Result<Credentials> {
    let wanted = Hostname::from_comparison_form(hostname);
    let path = vault::lookup_path(vault_path, hostname);

    let secret = reader.read(&path)?;
    let Some(token) = vault::extract_token(secret, &path)? else {
        return Ok(Credentials::empty());
    };

    let map = credentials::token_map(hostname, token)?;
    let creds = Credentials::lookup(&map, &wanted);
    debug!(hostname, found = creds.token.is_some(), "credentials lookup");
    Ok(creds)
}

/// Write `creds` as a single JSON line.
pub fn write_credentials(out: &mut impl Write, creds: &Credentials) -> Result<()> {
    let json = creds.to_json()?;
    writeln!(out, "{json}")?;
    out.flush()?;
    Ok(())
}
