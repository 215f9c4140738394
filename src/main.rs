//! terraform-credentials-vault - Terraform credentials helper backed by Vault.

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use terraform_credentials_vault::cli::{execute, output, Cli};
use terraform_credentials_vault::core::constants;
use terraform_credentials_vault::error::{Error, UsageError};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let msg = e.to_string();
            let first = msg.lines().next().unwrap_or_default();
            let first = first.strip_prefix("error: ").unwrap_or(first);
            fail(UsageError::InvalidArguments(first.to_string()).into());
        }
    };

    // Logs go to stderr; stdout carries the protocol response.
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("terraform_credentials_vault=debug")
        } else {
            EnvFilter::new("terraform_credentials_vault=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli) {
        fail(e);
    }
}

fn fail(e: Error) -> ! {
    output::error(&e.to_string());
    if e.wants_usage() {
        eprintln!();
        output::usage();
    }
    std::process::exit(1);
}
