use crate::error::{Result, ShelfError};
use crate::store::fs::DEFAULT_SNAPSHOT_FILE;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

pub const CONFIG_FILENAME: &str = "config.json";

/// What to do when the snapshot exists but cannot be parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Abort the operation with a `Malformed` error.
    #[default]
    Fail,
    /// Carry on as if the catalog were empty, with a warning.
    Empty,
}

impl fmt::Display for MalformedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedPolicy::Fail => f.write_str("fail"),
            MalformedPolicy::Empty => f.write_str("empty"),
        }
    }
}

impl FromStr for MalformedPolicy {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "fail" => Ok(MalformedPolicy::Fail),
            "empty" => Ok(MalformedPolicy::Empty),
            other => Err(ShelfError::Config(format!(
                "Invalid on-malformed value: {} (expected fail or empty)",
                other
            ))),
        }
    }
}

/// Configuration for a catalog, stored in .shelf/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelfConfig {
    /// File name of the snapshot inside the catalog directory
    #[serde(default = "default_snapshot_file")]
    pub snapshot_file: String,

    /// Behavior when the snapshot is unreadable
    #[serde(default)]
    pub on_malformed: MalformedPolicy,
}

fn default_snapshot_file() -> String {
    DEFAULT_SNAPSHOT_FILE.to_string()
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            snapshot_file: default_snapshot_file(),
            on_malformed: MalformedPolicy::default(),
        }
    }
}

impl ShelfConfig {
    pub const KEYS: [&'static str; 2] = ["snapshot-file", "on-malformed"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ShelfError::Io)?;
        let config: ShelfConfig =
            serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ShelfError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ShelfError::Serialization)?;
        fs::write(config_path, content).map_err(ShelfError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "snapshot-file" => Some(self.snapshot_file.clone()),
            "on-malformed" => Some(self.on_malformed.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "snapshot-file" => {
                let name = value.trim();
                if name.is_empty()
                    || name.contains(['/', '\\'])
                    || matches!(name, "." | ".." | CONFIG_FILENAME)
                {
                    return Err(ShelfError::Config(format!(
                        "Invalid snapshot file name: {:?}",
                        value
                    )));
                }
                self.snapshot_file = name.to_string();
            }
            "on-malformed" => self.on_malformed = value.parse()?,
            other => {
                return Err(ShelfError::Config(format!(
                    "Unknown config key: {}",
                    other
                )))
            }
        }
        Ok(())
    }

    /// All keys with their current values, in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        Self::KEYS
            .iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ShelfConfig::default();
        assert_eq!(config.snapshot_file, "items.json");
        assert_eq!(config.on_malformed, MalformedPolicy::Fail);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = ShelfConfig::load(dir.path()).unwrap();
        assert_eq!(config, ShelfConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join(".shelf");

        let mut config = ShelfConfig::default();
        config.set("on-malformed", "empty").unwrap();
        config.save(&target).unwrap();

        let loaded = ShelfConfig::load(&target).unwrap();
        assert_eq!(loaded.on_malformed, MalformedPolicy::Empty);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"on_malformed": "empty"}"#,
        )
        .unwrap();

        let loaded = ShelfConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.snapshot_file, "items.json");
        assert_eq!(loaded.on_malformed, MalformedPolicy::Empty);
    }

    #[test]
    fn test_set_rejects_unknown_key_and_bad_values() {
        let mut config = ShelfConfig::default();
        assert!(matches!(
            config.set("colour", "blue"),
            Err(ShelfError::Config(_))
        ));
        assert!(config.set("on-malformed", "ignore").is_err());
        assert!(config.set("snapshot-file", "../escape.json").is_err());
        assert!(config.set("snapshot-file", "  ").is_err());
        assert_eq!(config, ShelfConfig::default());
    }

    #[test]
    fn test_snapshot_file_cannot_shadow_config_or_dirs() {
        let mut config = ShelfConfig::default();
        for name in ["config.json", " config.json ", ".", ".."] {
            assert!(
                matches!(config.set("snapshot-file", name), Err(ShelfError::Config(_))),
                "accepted {:?}",
                name
            );
        }
        config.set("snapshot-file", "books.json").unwrap();
        assert_eq!(config.snapshot_file, "books.json");
        assert_eq!(config, ShelfConfig::default());
    }

    #[test]
    fn test_entries_lists_every_key() {
        let config = ShelfConfig::default();
        assert_eq!(
            config.entries(),
            vec![
                ("snapshot-file", "items.json".to_string()),
                ("on-malformed", "fail".to_string()),
            ]
        );
    }
}
