//! Settings persistence
//!
//! Saves and loads [`ClientSettings`] to/from a JSON file in the per-user config
//! directory.
//!
//! # Error Handling
//!
//! - Load failures fall back to default settings with a warning
//! - Save failures are returned to the caller

use super::error::CoreResult;
use super::resources::ClientSettings;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Path of `settings.json` in the user's configuration directory
///
/// Falls back to `settings.json` in the working directory if the system config dir
/// cannot be found.
pub fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "trilltino", "ShadowChess") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Read settings, returning `Ok(None)` when the file does not exist
pub fn try_load_settings(path: &Path) -> CoreResult<Option<ClientSettings>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path)?;
    let settings = serde_json::from_str::<ClientSettings>(&contents)?;
    Ok(Some(settings))
}

/// Load settings from `path`, using defaults when missing or unreadable
pub fn load_settings(path: &Path) -> ClientSettings {
    match try_load_settings(path) {
        Ok(Some(settings)) => {
            info!("[SETTINGS] Loaded settings from {:?}", path);
            settings
        }
        Ok(None) => {
            info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
            ClientSettings::default()
        }
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                path, e
            );
            ClientSettings::default()
        }
    }
}

/// Write settings to `path`, creating the parent directory if needed
pub fn save_settings(path: &Path, settings: &ClientSettings) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}
