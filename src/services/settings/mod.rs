//! Loading `config.toml` and opening the configured event storage.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::{Settings, StorageBackend};
use crate::services::storage::{
    JsonFileKeyValueStore, KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore,
};

/// Overrides the config file location.
pub const CONFIG_ENV_VAR: &str = "MONTH_PLANNER_CONFIG";

const CONFIG_FILE: &str = "config.toml";
const DATABASE_FILE: &str = "calendar.db";
const JSON_DIR: &str = "events";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "MonthPlanner", "MonthPlanner")
}

/// `$MONTH_PLANNER_CONFIG`, else `config.toml` in the platform config dir.
pub fn config_path() -> PathBuf {
    if let Some(path) = env::var_os(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }

    match project_dirs() {
        Some(dirs) => dirs.config_dir().join(CONFIG_FILE),
        None => PathBuf::from(CONFIG_FILE),
    }
}

/// Platform data dir, or the current directory when none is known.
pub fn data_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Parse and validate `path`; `Ok(None)` when the file does not exist.
///
/// Nothing is logged here: the config carries the log level, so callers read
/// it before the logger is set up and report errors afterwards.
pub fn read_settings_file(path: &Path) -> Result<Option<Settings>> {
    if !path.exists() {
        return Ok(None);
    }

    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let settings: Settings = toml::from_str(&text).context("failed to parse settings")?;
    settings
        .validate()
        .map_err(|e| anyhow!("Invalid settings: {}", e))?;
    Ok(Some(settings))
}

pub fn save_settings(settings: &Settings, path: &Path) -> Result<()> {
    settings
        .validate()
        .map_err(|e| anyhow!("Invalid settings: {}", e))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create dir {}", parent.display()))?;
    }

    let text = toml::to_string_pretty(settings).context("failed to serialize settings")?;
    fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Database file or JSON directory for the configured backend.
///
/// `None` for the memory backend.
pub fn resolve_storage_path(settings: &Settings) -> Option<PathBuf> {
    let default_name = match settings.storage.backend {
        StorageBackend::Memory => return None,
        StorageBackend::Sqlite => DATABASE_FILE,
        StorageBackend::Json => JSON_DIR,
    };

    Some(
        settings
            .storage
            .path
            .clone()
            .unwrap_or_else(|| data_dir().join(default_name)),
    )
}

/// Open the key-value store named by `settings.storage`.
pub fn open_storage(settings: &Settings) -> Result<Box<dyn KeyValueStore>> {
    let path = resolve_storage_path(settings);

    let store: Box<dyn KeyValueStore> = match (settings.storage.backend, path) {
        (StorageBackend::Sqlite, Some(path)) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create dir {}", parent.display()))?;
            }
            log::info!("Using SQLite storage at {}", path.display());
            Box::new(SqliteKeyValueStore::open(&path.to_string_lossy())?)
        }
        (StorageBackend::Json, Some(path)) => {
            log::info!("Using JSON storage in {}", path.display());
            Box::new(JsonFileKeyValueStore::new(path))
        }
        _ => {
            log::info!("Using in-memory storage; events will not be saved");
            Box::new(MemoryKeyValueStore::new())
        }
    };

    Ok(store)
}
