//! Shell settings: a small TOML file controlling the HUD's defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("io error: {0}")]
    Io(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Route shown on startup.
    pub default_route: String,
    /// "compact" or "expanded".
    pub density: String,
    /// Context-file reload cadence in seconds.
    pub refresh_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_route: "/dashboard".to_string(),
            density: "compact".to_string(),
            refresh_secs: 5,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !matches!(self.density.as_str(), "compact" | "expanded") {
            return Err(SettingsError::Invalid(format!(
                "density must be \"compact\" or \"expanded\", got {:?}",
                self.density
            )));
        }
        if self.refresh_secs == 0 {
            return Err(SettingsError::Invalid(
                "refresh_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn expanded(&self) -> bool {
        self.density == "expanded"
    }
}

/// Manages loading and saving settings to a TOML file on disk.
pub struct SettingsManager {
    path: PathBuf,
}

impl SettingsManager {
    /// Create a new `SettingsManager` that reads/writes the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a `SettingsManager` using the default config location
    /// (`~/.config/fieldhud/settings.toml`).
    pub fn default_path() -> Self {
        let path = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("fieldhud")
            .join("settings.toml");
        Self { path }
    }

    /// Load settings from the TOML file on disk.
    pub fn load(&self) -> Result<Settings, SettingsError> {
        let text =
            std::fs::read_to_string(&self.path).map_err(|e| SettingsError::Io(e.to_string()))?;
        let settings: Settings =
            toml::from_str(&text).map_err(|e| SettingsError::Parse(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to the TOML file on disk, creating parent directories
    /// if they don't exist.
    pub fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        settings.validate()?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }
        let text =
            toml::to_string_pretty(settings).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(&self.path, text).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }

    /// Load settings from disk, falling back to defaults when the file is
    /// missing or unparseable.
    pub fn load_or_default(&self) -> Settings {
        self.load().unwrap_or_default()
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
