use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::info;

use crate::config::GameConfig;

const APP_DIR_NAME: &str = "grid-snake";
const SETTINGS_FILE_NAME: &str = "settings.json";
const LOG_FILE_NAME: &str = "grid-snake.log";

/// Returns the platform-correct settings file path.
#[must_use]
pub fn settings_path() -> PathBuf {
    let mut base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SETTINGS_FILE_NAME);
    base
}

/// Returns the default log file path.
#[must_use]
pub fn default_log_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(LOG_FILE_NAME);
    base
}

/// Loads game settings.
///
/// With `explicit` set, that file must exist. Otherwise the default settings
/// file is read when present and defaults are used when it is not. Fields
/// missing from the file keep their defaults; a malformed file is an error.
pub fn load_settings(explicit: Option<&Path>) -> io::Result<GameConfig> {
    match explicit {
        Some(path) => read_settings(path),
        None => load_settings_or_default(&settings_path()),
    }
}

fn load_settings_or_default(path: &Path) -> io::Result<GameConfig> {
    match read_settings(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(GameConfig::default()),
        other => other,
    }
}

fn read_settings(path: &Path) -> io::Result<GameConfig> {
    let raw = fs::read_to_string(path)?;
    let config = serde_json::from_str::<GameConfig>(&raw)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    info!("settings loaded from {}", path.display());
    Ok(config)
}
