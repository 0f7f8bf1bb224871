mod config;
mod session;

pub use config::{Config, NotificationsConfig, RotationConfig, StatsConfig};
pub use session::SessionFiles;

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the mobroom data directory, creating it if needed.
///
/// `MOBROOM_HOME` overrides the location. Otherwise it is
/// `~/.config/mobroom/`, or `~/.config/mobroom-dev/` with `MOBROOM_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("MOBROOM_HOME") {
        Some(home) => PathBuf::from(home),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("MOBROOM_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("mobroom-dev")
            } else {
                base_dir.join("mobroom")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
