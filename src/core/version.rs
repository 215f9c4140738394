//! Build information.
//!
//! Release builds inject `TFCV_PRERELEASE` and `TFCV_GIT_COMMIT` at compile
//! time; local builds report a `dev` prerelease with no commit.

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prerelease tag, empty for final releases.
pub const PRERELEASE: &str = match option_env!("TFCV_PRERELEASE") {
    Some(tag) => tag,
    None => "dev",
};

/// Commit the binary was built from, if known.
pub const GIT_COMMIT: Option<&str> = option_env!("TFCV_GIT_COMMIT");

/// Version string shown by `--version`, e.g. `0.1.0-dev (abc1234)`.
pub fn long_version() -> String {
    let mut version = VERSION.to_string();
    if !PRERELEASE.is_empty() {
        version.push('-');
        version.push_str(PRERELEASE);
    }
    if let Some(commit) = GIT_COMMIT.filter(|c| !c.is_empty()) {
        version.push_str(&format!(" ({commit})"));
    }
    version
}
