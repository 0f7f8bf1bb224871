//! TOML-based application configuration.
//!
//! Stores the defaults a new session starts from:
//! - Rotation timing (rotation length, break frequency, break length)
//! - Notification preferences
//! - Stat log file name
//!
//! Configuration is stored at `<data dir>/config.toml`. Settings carried by
//! a session link take precedence over these defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::stats::STATS_KEY;
use crate::timer::{
    RotationSettings, DEFAULT_BREAKS_EVERY, DEFAULT_BREAK_MINUTES, DEFAULT_ROTATION_MINUTES,
};

const CONFIG_FILE: &str = "config.toml";

/// Rotation timing defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotationConfig {
    #[serde(default = "default_minutes")]
    pub minutes: u32,
    #[serde(default = "default_breaks_every")]
    pub breaks_every: u32,
    #[serde(default = "default_break_minutes")]
    pub break_minutes: u32,
}

/// Notification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    /// Ring the terminal bell when a rotation or break ends.
    #[serde(default = "default_true")]
    pub bell: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsConfig {
    /// File name of the stat log, relative to the data directory.
    #[serde(default = "default_stats_file")]
    pub file: String,
}

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub rotation: RotationConfig,
    #[serde(default)]
    pub notifications: NotificationsConfig,
    #[serde(default)]
    pub stats: StatsConfig,
}

fn default_minutes() -> u32 {
    DEFAULT_ROTATION_MINUTES
}
fn default_breaks_every() -> u32 {
    DEFAULT_BREAKS_EVERY
}
fn default_break_minutes() -> u32 {
    DEFAULT_BREAK_MINUTES
}
fn default_true() -> bool {
    true
}
fn default_stats_file() -> String {
    format!("{STATS_KEY}.json")
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            minutes: default_minutes(),
            breaks_every: default_breaks_every(),
            break_minutes: default_break_minutes(),
        }
    }
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self { bell: true }
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            file: default_stats_file(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if parts.peek().is_none_or(|p| p.is_empty()) {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_none() {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value
                            .parse::<bool>()
                            .map_err(|_| invalid(format!("cannot parse '{value}' as bool")))?,
                    ),
                    serde_json::Value::Number(_) => serde_json::Value::Number(
                        value
                            .parse::<u64>()
                            .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?
                            .into(),
                    ),
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        return Err(invalid("only leaf keys can be set".into()));
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    pub fn path(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILE)
    }

    /// Load from `dir`, writing the defaults if no config exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load_from(dir: &Path) -> Result<Self, ConfigError> {
        let path = Self::path(dir);
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
            Err(_) => {
                let cfg = Self::default();
                cfg.save_to(dir)?;
                Ok(cfg)
            }
        }
    }

    /// Persist to `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save_to(&self, dir: &Path) -> Result<(), ConfigError> {
        let path = Self::path(dir);
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.clone(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(&path, content).map_err(|e| save_failed(e.to_string()))?;
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key. The new config must still produce valid
    /// rotation settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value cannot be parsed
    /// or is out of range. The config is left unchanged in that case.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(&*self).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config =
            serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        updated.settings().map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        *self = updated;
        Ok(())
    }

    /// Rotation settings described by this config.
    pub fn settings(&self) -> Result<RotationSettings, ConfigError> {
        RotationSettings::new(
            self.rotation.minutes,
            self.rotation.breaks_every,
            self.rotation.break_minutes,
        )
        .map_err(|e| ConfigError::InvalidValue {
            key: "rotation".into(),
            message: e.to_string(),
        })
    }

    pub fn stats_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.stats.file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.rotation.minutes, 5);
        assert_eq!(parsed.rotation.breaks_every, 4);
        assert!(parsed.notifications.bell);
        assert_eq!(parsed.stats.file, "mobStats.json");
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let parsed: Config = toml::from_str("[rotation]\nminutes = 12\n").unwrap();
        assert_eq!(parsed.rotation.minutes, 12);
        assert_eq!(parsed.rotation.break_minutes, 10);
        assert!(parsed.notifications.bell);
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("rotation.minutes").as_deref(), Some("5"));
        assert_eq!(cfg.get("notifications.bell").as_deref(), Some("true"));
        assert_eq!(cfg.get("stats.file").as_deref(), Some("mobStats.json"));
        assert!(cfg.get("rotation.missing_key").is_none());
        assert!(cfg.get("").is_none());
    }

    #[test]
    fn set_updates_nested_values() {
        let mut cfg = Config::default();
        cfg.set("rotation.minutes", "8").unwrap();
        cfg.set("notifications.bell", "false").unwrap();
        cfg.set("stats.file", "team.json").unwrap();
        assert_eq!(cfg.rotation.minutes, 8);
        assert!(!cfg.notifications.bell);
        assert_eq!(cfg.stats.file, "team.json");
    }

    #[test]
    fn set_rejects_unknown_key() {
        let mut cfg = Config::default();
        assert!(matches!(
            cfg.set("rotation.nonexistent_key", "1"),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(cfg.set("rotation", "1").is_err());
    }

    #[test]
    fn set_rejects_invalid_type() {
        let mut cfg = Config::default();
        assert!(cfg.set("notifications.bell", "not_a_bool").is_err());
        assert!(cfg.set("rotation.minutes", "five").is_err());
    }

    #[test]
    fn set_rejects_zero_durations() {
        let mut cfg = Config::default();
        assert!(cfg.set("rotation.break_minutes", "0").is_err());
        assert_eq!(cfg.rotation.break_minutes, 10);
    }

    #[test]
    fn load_writes_defaults_then_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from(dir.path()).unwrap();
        assert!(Config::path(dir.path()).exists());
        assert_eq!(cfg.rotation.minutes, 5);

        let mut cfg = cfg;
        cfg.set("rotation.minutes", "25").unwrap();
        cfg.save_to(dir.path()).unwrap();
        let reloaded = Config::load_from(dir.path()).unwrap();
        assert_eq!(reloaded.rotation.minutes, 25);
    }

    #[test]
    fn load_reports_unparsable_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(Config::path(dir.path()), "rotation = [").unwrap();
        assert!(matches!(
            Config::load_from(dir.path()),
            Err(ConfigError::LoadFailed { .. })
        ));
    }
}
