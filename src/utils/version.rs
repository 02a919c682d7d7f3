use crate::utils::signature::get_signature;

/// Env var overriding the version reported by `--version`.
pub const VERSION_ENV: &str = "NEXTTAG_CLI_VERSION";

/// Returns the CLI version:
/// 1. NEXTTAG_CLI_VERSION env var
/// 2. compile-time CARGO_PKG_VERSION
pub fn get_version() -> String {
    if let Ok(v) = std::env::var(VERSION_ENV) {
        if !v.trim().is_empty() {
            return v.trim().to_string();
        }
    }

    option_env!("CARGO_PKG_VERSION").unwrap_or("0.0.0").to_string()
}

pub fn get_version_with_signature() -> String {
    get_signature(&get_version())
}
