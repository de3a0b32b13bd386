//! Persisted generation defaults.

mod file;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entropy::Source;
use crate::pass::GenerationConfig;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed settings file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no configuration directory on this system")]
    NoConfigDir,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub config: GenerationConfig,
    pub number_of_passwords: usize,
    pub source: Source,
}

impl Settings {
    /// `<config dir>/passgen/settings.json`
    pub fn path() -> Result<PathBuf, SettingsError> {
        dirs::config_dir()
            .map(|dir| dir.join("passgen").join("settings.json"))
            .ok_or(SettingsError::NoConfigDir)
    }

    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(&Self::path()?)
    }

    pub fn save(&self) -> Result<PathBuf, SettingsError> {
        let path = Self::path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        file::load(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        file::save(self, path)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config: GenerationConfig::default(),
            number_of_passwords: 1,
            source: Source::default(),
        }
    }
}
