//! Diagnostics written to stderr.
//!
//! stdout belongs to the credentials helper protocol, so every message here
//! goes to stderr. Colour is used on terminals unless `NO_COLOR` is set.

use console::{style, Term};

/// Usage line printed after invocation errors.
pub const USAGE: &str =
    "Usage: terraform-credentials-vault --vault-path <base secrets kv path> get <hostname>";

/// Explains why running the helper by hand is unusual.
pub const USAGE_NOTE: &str =
    "This is a Terraform credentials helper, not intended to be run directly from a shell.";

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err() && Term::stderr().features().colors_supported()
}

/// Print an error message to stderr (red).
///
/// Example: `✗ failed to get token from environment or credential helper`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red().for_stderr(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print the usage text to stderr.
pub fn usage() {
    eprintln!("{}", USAGE);
    eprintln!();
    eprintln!("{}", USAGE_NOTE);
}
