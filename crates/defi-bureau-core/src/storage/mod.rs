mod config;
pub mod database;

pub use config::Config;
pub use database::{Database, Stats};

use std::path::PathBuf;

/// Returns `~/.config/defi-bureau[-dev]/` based on DEFI_BUREAU_ENV.
///
/// Set DEFI_BUREAU_ENV=dev to use a separate development data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("DEFI_BUREAU_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("defi-bureau-dev")
    } else {
        base_dir.join("defi-bureau")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
