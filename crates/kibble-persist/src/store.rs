//! Saved-game files on disk.
//!
//! Each saved game is one pretty-printed JSON file named after the pet,
//! kept in a `SavedGames` directory under the store's base directory.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use kibble_core::save::SavedGame;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Default base directory for all persisted files.
pub const SAVE_FOLDER: &str = "SavedFiles";

/// Subdirectory holding the saved-game files.
pub const SAVED_GAMES_FOLDER: &str = "SavedGames";

/// Errors that can occur during saved-game operations.
#[derive(Debug, Error)]
pub enum SaveError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or parse error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Saved game not found
    #[error("Saved game not found: {0}")]
    NotFound(String),
}

/// Result type for saved-game operations.
pub type SaveResult<T> = Result<T, SaveError>;

/// Store for saved-game files.
#[derive(Debug, Clone)]
pub struct SaveStore {
    /// Directory for saved-game files
    games_dir: PathBuf,
}

impl Default for SaveStore {
    fn default() -> Self {
        Self::new(SAVE_FOLDER)
    }
}

impl SaveStore {
    /// Creates a store rooted at the given base directory.
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            games_dir: base_dir.into().join(SAVED_GAMES_FOLDER),
        }
    }

    /// Returns the saved-games directory path.
    #[must_use]
    pub fn games_dir(&self) -> &Path {
        &self.games_dir
    }

    /// Ensures the saved-games directory exists.
    pub fn ensure_dir(&self) -> SaveResult<()> {
        fs::create_dir_all(&self.games_dir)?;
        Ok(())
    }

    /// Gets the path for a saved-game file.
    fn save_path(&self, name: &str) -> PathBuf {
        self.games_dir.join(format!("{name}.json"))
    }

    /// Gets the path for a temporary saved-game file.
    fn temp_path(&self, name: &str) -> PathBuf {
        self.games_dir.join(format!("{name}.json.tmp"))
    }

    /// Writes a saved game to disk under its pet's name.
    ///
    /// Uses atomic write (write to temp, then rename) so a crash cannot
    /// leave a half-written file behind.
    pub fn save(&self, game: &SavedGame) -> SaveResult<()> {
        self.ensure_dir()?;

        let name = game.save_name();
        let json = serde_json::to_string_pretty(game)?;
        let temp_path = self.temp_path(name);
        let final_path = self.save_path(name);

        let mut file = fs::File::create(&temp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
        drop(file);

        fs::rename(&temp_path, &final_path)?;

        info!("Saved game '{}' to {:?}", name, final_path);
        Ok(())
    }

    /// Reads and parses one saved-game file.
    fn read_game(path: &Path) -> SaveResult<SavedGame> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Loads a saved game, reporting why it could not be loaded.
    pub fn try_load(&self, name: &str) -> SaveResult<SavedGame> {
        let path = self.save_path(name);
        if !path.exists() {
            return Err(SaveError::NotFound(name.to_string()));
        }
        Self::read_game(&path)
    }

    /// Loads a saved game, or `None` when absent or unreadable.
    #[must_use]
    pub fn load(&self, name: &str) -> Option<SavedGame> {
        match self.try_load(name) {
            Ok(game) => Some(game),
            Err(SaveError::NotFound(_)) => {
                debug!("No saved game named '{name}'");
                None
            }
            Err(err) => {
                error!("Failed to load saved game '{name}': {err}");
                None
            }
        }
    }

    /// Loads every readable saved game, skipping files that fail.
    #[must_use]
    pub fn load_all(&self) -> Vec<SavedGame> {
        let entries = match fs::read_dir(&self.games_dir) {
            Ok(entries) => entries,
            Err(err) => {
                warn!("Cannot read {:?}: {err}", self.games_dir);
                return Vec::new();
            }
        };

        let mut games = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.extension().is_some_and(|ext| ext == "json") {
                continue;
            }
            match Self::read_game(&path) {
                Ok(game) => games.push(game),
                Err(err) => warn!("Skipping unreadable save {path:?}: {err}"),
            }
        }
        games
    }

    /// Deletes a saved game.
    pub fn delete(&self, name: &str) -> SaveResult<()> {
        let path = self.save_path(name);
        if !path.exists() {
            return Err(SaveError::NotFound(name.to_string()));
        }
        fs::remove_file(&path)?;
        info!("Deleted saved game '{name}'");
        Ok(())
    }

    /// Checks if a saved game exists.
    #[must_use]
    pub fn exists(&self, name: &str) -> bool {
        self.save_path(name).exists()
    }
}
