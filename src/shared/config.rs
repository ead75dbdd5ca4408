//! Launcher configuration (nisi.toml)
//!
//! Every field has a default, so a missing file or a partial one both work.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::value_objects::OrphanPolicy;

/// File name searched for in the standard locations
pub const CONFIG_FILE: &str = "nisi.toml";

/// Configuration loaded from nisi.toml
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub reconciler: ReconcilerConfig,

    #[serde(default)]
    pub workers: WorkersConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub apps: AppsConfig,
}

/// Where preferences and settings are stored
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Base directory; defaults to the platform data dir
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    #[serde(default = "default_preferences_file")]
    pub preferences_file: String,

    #[serde(default = "default_settings_file")]
    pub settings_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            preferences_file: default_preferences_file(),
            settings_file: default_settings_file(),
        }
    }
}

fn default_preferences_file() -> String {
    "preferences.json".to_string()
}

fn default_settings_file() -> String {
    "settings.toml".to_string()
}

impl StorageConfig {
    /// Resolved data directory (<data dir>/nisi unless configured)
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|d| d.join("nisi"))
                .unwrap_or_else(crate::log::exe_dir)
        })
    }

    pub fn preferences_path(&self) -> PathBuf {
        self.data_dir().join(&self.preferences_file)
    }

    pub fn settings_path(&self) -> PathBuf {
        self.data_dir().join(&self.settings_file)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReconcilerConfig {
    /// What to do with preferences of uninstalled packages
    #[serde(default)]
    pub orphan_policy: OrphanPolicy,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkersConfig {
    #[serde(default = "default_threads")]
    pub threads: usize,
}

impl Default for WorkersConfig {
    fn default() -> Self {
        Self {
            threads: default_threads(),
        }
    }
}

fn default_threads() -> usize {
    2
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,

    /// Log file; defaults to <data dir>/nisi/nisi.log
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            file: None,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

impl LoggingConfig {
    pub fn path(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(crate::log::default_log_path)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppsConfig {
    /// Manifest listing installed apps
    #[serde(default)]
    pub manifest: Option<PathBuf>,
}

impl Config {
    /// Find nisi.toml in standard locations
    pub fn find_config_path() -> Option<PathBuf> {
        // Check in order: config dir, exe dir, cwd
        let candidates = [
            dirs::config_dir().map(|p| p.join("nisi").join(CONFIG_FILE)),
            Some(crate::log::exe_dir().join(CONFIG_FILE)),
            Some(PathBuf::from(CONFIG_FILE)),
        ];

        candidates.into_iter().flatten().find(|c| c.exists())
    }

    /// Load configuration from the standard locations, returning defaults if not found
    pub fn load() -> Result<Self, ConfigError> {
        match Self::find_config_path() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        if config.workers.threads == 0 {
            return Err(ConfigError::Invalid("workers.threads must be at least 1".to_string()));
        }
        Ok(config)
    }
}

/// Configuration error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.storage.preferences_file, "preferences.json");
        assert_eq!(config.reconciler.orphan_policy, OrphanPolicy::Hide);
        assert_eq!(config.workers.threads, 2);
        assert_eq!(config.logging.level, "info");
        assert!(config.apps.manifest.is_none());
    }

    #[test]
    fn test_partial_file() {
        let config = Config::parse(
            r#"
[storage]
data_dir = "/tmp/nisi-test"

[reconciler]
orphan_policy = "placeholder"

[apps]
manifest = "apps.toml"
"#,
        )
        .unwrap();

        assert_eq!(
            config.storage.preferences_path(),
            PathBuf::from("/tmp/nisi-test/preferences.json")
        );
        assert_eq!(config.storage.settings_path(), PathBuf::from("/tmp/nisi-test/settings.toml"));
        assert_eq!(config.reconciler.orphan_policy, OrphanPolicy::Placeholder);
        assert_eq!(config.apps.manifest, Some(PathBuf::from("apps.toml")));
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(Config::parse("[workers]\nthreads = 0"), Err(ConfigError::Invalid(_))));
        assert!(matches!(
            Config::parse("[reconciler]\norphan_policy = \"keep\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[logging]\nlevel = \"debug\"\n").unwrap();

        assert_eq!(Config::load_from_path(&path).unwrap().logging.level, "debug");
        assert!(matches!(
            Config::load_from_path(&dir.path().join("missing.toml")),
            Err(ConfigError::Io { .. })
        ));
    }
}
