//! Command-line interface.
//!
//! Terraform runs credentials helpers as `<helper> [flags] <verb> <hostname>`.
//! Flags are parsed by clap; everything from the verb on is collected
//! verbatim so unknown verbs can be declined with a protocol message rather
//! than a clap error.

pub mod get;
pub mod output;

use std::io;

use clap::Parser;

use crate::core::{constants, version};
use crate::error::{Result, UsageError};

/// Terraform credentials helper backed by HashiCorp Vault.
#[derive(Parser, Debug)]
#[command(
    name = "terraform-credentials-vault",
    about = "Terraform credentials helper that reads API tokens from HashiCorp Vault",
    version = version::long_version(),
    after_help = "This is a Terraform credentials helper, not intended to be run directly from a shell."
)]
pub struct Cli {
    /// Base KV path holding one secret per hostname (e.g. secret/data/terraform)
    #[arg(long = "vault-path", env = constants::VAULT_PATH_ENV, value_name = "PATH")]
    pub vault_path: Option<String>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Helper verb and its arguments (`get <hostname>`)
    #[arg(value_name = "ARGS", trailing_var_arg = true)]
    pub args: Vec<String>,
}

/// Credentials helper protocol verbs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verb {
    /// Look up credentials for a host.
    Get,
    /// Any verb this helper declines, such as `store` or `forget`.
    Unsupported(String),
}

impl Verb {
    pub fn parse(name: &str) -> Self {
        match name {
            "get" => Verb::Get,
            other => Verb::Unsupported(other.to_string()),
        }
    }
}

/// A validated invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub vault_path: String,
    pub verb: Verb,
    pub hostname: String,
}

impl Cli {
    /// Validate the parsed arguments.
    ///
    /// # Errors
    ///
    /// - `UsageError::MissingVaultPath` if neither the flag nor the
    ///   environment variable supplies a non-empty base path
    /// - `UsageError::MissingArguments` if fewer than two positional
    ///   arguments were given
    pub fn into_request(self) -> Result<Request> {
        let vault_path = self
            .vault_path
            .filter(|p| !p.is_empty())
            .ok_or(UsageError::MissingVaultPath)?;

        let mut args = self.args.into_iter();
        let (Some(verb), Some(hostname)) = (args.next(), args.next()) else {
            return Err(UsageError::MissingArguments.into());
        };

        Ok(Request {
            vault_path,
            verb: Verb::parse(&verb),
            hostname,
        })
    }
}

/// Execute a parsed command line, writing the response to stdout.
pub fn execute(cli: Cli) -> Result<()> {
    let request = cli.into_request()?;
    match request.verb {
        Verb::Get => get::execute(&request.vault_path, &request.hostname, &mut io::stdout()),
        Verb::Unsupported(verb) => Err(UsageError::UnsupportedVerb(verb).into()),
    }
}
