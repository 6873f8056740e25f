//! Settings file on disk.
//!
//! Settings live in one `game_settings.json` file directly under the
//! store's base directory, loaded on startup and saved on change.

use std::fs;
use std::path::{Path, PathBuf};

use kibble_core::settings::GameSettings;
use thiserror::Error;
use tracing::info;

/// Settings file name.
pub const SETTINGS_FILE_NAME: &str = "game_settings.json";

/// Errors that can occur during settings persistence.
#[derive(Debug, Error)]
pub enum SettingsStoreError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or parse error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for settings persistence.
pub type SettingsStoreResult<T> = Result<T, SettingsStoreError>;

/// Store keeping the settings file in sync with an in-memory copy.
#[derive(Debug)]
pub struct SettingsStore {
    /// Current settings.
    settings: GameSettings,
    /// Path to the settings file.
    settings_path: PathBuf,
    /// Whether settings have been modified since last save.
    dirty: bool,
}

impl SettingsStore {
    /// Creates a store for the settings file under the base directory.
    ///
    /// Starts with defaults; call [`load`] to read the file.
    ///
    /// [`load`]: SettingsStore::load
    #[must_use]
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            settings: GameSettings::default(),
            settings_path: base_dir.as_ref().join(SETTINGS_FILE_NAME),
            dirty: false,
        }
    }

    /// Returns the settings file path.
    #[must_use]
    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    /// Returns the current settings.
    #[must_use]
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// Returns the current settings for modification.
    pub fn settings_mut(&mut self) -> &mut GameSettings {
        self.dirty = true;
        &mut self.settings
    }

    /// Returns whether settings have unsaved changes.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Loads settings from the file.
    ///
    /// A missing file is not an error: defaults are kept and marked
    /// dirty so the next save writes them out. A present but malformed
    /// file is an error and leaves the current settings untouched.
    pub fn load(&mut self) -> SettingsStoreResult<()> {
        if !self.settings_path.exists() {
            info!("Settings file not found, using defaults");
            self.settings = GameSettings::default();
            self.dirty = true;
            return Ok(());
        }

        let contents = fs::read_to_string(&self.settings_path)?;
        self.settings = serde_json::from_str(&contents)?;
        self.dirty = false;

        info!("Settings loaded from {:?}", self.settings_path);
        Ok(())
    }

    /// Saves settings to the file.
    pub fn save(&mut self) -> SettingsStoreResult<()> {
        if let Some(parent) = self.settings_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&self.settings)?;
        fs::write(&self.settings_path, json)?;
        self.dirty = false;

        info!("Settings saved to {:?}", self.settings_path);
        Ok(())
    }

    /// Saves only if there are unsaved changes.
    pub fn save_if_dirty(&mut self) -> SettingsStoreResult<()> {
        if self.dirty {
            self.save()?;
        }
        Ok(())
    }

    /// Writes the current settings out if no file exists yet.
    pub fn ensure_exists(&mut self) -> SettingsStoreResult<()> {
        if !self.settings_path.exists() {
            self.save()?;
        }
        Ok(())
    }

    /// Resets settings to defaults.
    pub fn reset_to_defaults(&mut self) {
        self.settings = GameSettings::default();
        self.dirty = true;
        info!("Settings reset to defaults");
    }
}
