//! Settings file persistence.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::{Settings, SettingsError};

pub fn save(settings: &Settings, path: &Path) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }

    let data = serde_json::to_string_pretty(settings)?;
    fs::write(path, data)?;
    log::debug!("settings saved to {}", path.display());
    Ok(())
}

pub fn load(path: &Path) -> Result<Settings, SettingsError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("no settings at {}, using defaults", path.display());
            return Ok(Settings::default());
        }
        Err(e) => return Err(e.into()),
    };

    if data.trim().is_empty() {
        return Ok(Settings::default());
    }

    let settings = serde_json::from_str(&data)?;
    log::debug!("settings loaded from {}", path.display());
    Ok(settings)
}
