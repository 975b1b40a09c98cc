// Settings module
// User configuration read from config.toml

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Number of all-day events shown in a day cell before "+N More".
pub const DEFAULT_MAX_VISIBLE_ALL_DAY: usize = 2;

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Default `env_logger` filter; `RUST_LOG` still wins.
    pub log_level: String,
    pub max_visible_all_day: usize,
    pub storage: StorageSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            max_visible_all_day: DEFAULT_MAX_VISIBLE_ALL_DAY,
            storage: StorageSettings::default(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if self.max_visible_all_day == 0 {
            return Err("max_visible_all_day must be at least 1".to_string());
        }

        let level = self.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(format!(
                "Unknown log level '{}' (expected one of {})",
                self.log_level,
                LOG_LEVELS.join(", ")
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    pub backend: StorageBackend,
    /// Database file (sqlite) or directory (json). Defaults to the data dir.
    pub path: Option<PathBuf>,
}

/// Where the event snapshot is kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Sqlite,
    Json,
    Memory,
}
