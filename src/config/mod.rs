//! Configuration file handling: YAML under a per-user config directory.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the local sheet files.
    pub store_dir: String,
    #[serde(default = "default_records_sheet")]
    pub records_sheet: String,
    #[serde(default = "default_collaborators_sheet")]
    pub collaborators_sheet: String,
    /// TTL of cached record sets, in seconds.
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,
    /// Fixed UTC offset of the site the scanners run at. "Today" is always
    /// computed against this offset, not the host timezone.
    #[serde(default = "default_utc_offset")]
    pub utc_offset_hours: i32,
}

fn default_records_sheet() -> String {
    "EntryExit".to_string()
}
fn default_collaborators_sheet() -> String {
    "Collaborators".to_string()
}
fn default_cache_ttl() -> u64 {
    60
}
fn default_utc_offset() -> i32 {
    -3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_dir: Self::default_store_dir().to_string_lossy().to_string(),
            records_sheet: default_records_sheet(),
            collaborators_sheet: default_collaborators_sheet(),
            cache_ttl_secs: default_cache_ttl(),
            utc_offset_hours: default_utc_offset(),
        }
    }
}

impl Config {
    /// Standard configuration directory, per platform.
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".refectory")
    }

    /// Full path of the config file.
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("refectory.conf")
    }

    /// Default location of the local sheet store.
    pub fn default_store_dir() -> PathBuf {
        Self::config_dir().join("store")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("failed to parse {}: {e}", path.display())))
    }

    /// Write the config file, creating the config directory as needed.
    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("failed to serialize configuration: {e}")))?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Initialize configuration, honoring an optional store-dir override.
    /// In test mode nothing is written to the user's config directory.
    pub fn init_all(custom_store: Option<String>, is_test: bool) -> AppResult<Self> {
        let mut cfg = Self::default();
        if let Some(dir) = custom_store {
            cfg.store_dir = dir;
        }
        if !is_test {
            cfg.save()?;
        }
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_name_both_sheets() {
        let cfg = Config::default();
        assert_eq!(cfg.records_sheet, "EntryExit");
        assert_eq!(cfg.collaborators_sheet, "Collaborators");
        assert_eq!(cfg.cache_ttl_secs, 60);
    }

    #[test]
    fn yaml_round_trip_keeps_overrides() {
        let mut cfg = Config::default();
        cfg.store_dir = "/tmp/refectory-store".into();
        cfg.utc_offset_hours = 2;

        let yaml = serde_yaml::to_string(&cfg).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.store_dir, cfg.store_dir);
        assert_eq!(parsed.utc_offset_hours, 2);
    }

    #[test]
    fn missing_optional_keys_fall_back_to_defaults() {
        let parsed: Config = serde_yaml::from_str("store_dir: /tmp/s\n").unwrap();
        assert_eq!(parsed.records_sheet, "EntryExit");
        assert_eq!(parsed.utc_offset_hours, -3);
    }
}
