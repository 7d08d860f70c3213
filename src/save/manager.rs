//! Save manager for handling save/load operations
//!
//! This module provides the SaveManager struct which handles:
//! - Saving game sessions to slot files through the text serializer
//! - Loading game sessions from files
//! - Autosave timing
//! - Save file management (listing, cleanup)

use super::serializer;
use super::types::*;
use crate::session::GameSession;
use rand_pcg::Pcg32;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

pub struct SaveManager {
    save_directory: PathBuf,
    current_save_slot: u8,
    autosave_interval: Duration,
    last_autosave: Option<SystemTime>,
}

impl SaveManager {
    /// Creates a new SaveManager with the given save directory
    ///
    /// The save directory will be created if it doesn't exist.
    pub fn new(save_directory: impl AsRef<Path>) -> Result<Self, SaveError> {
        let save_dir = save_directory.as_ref().to_path_buf();

        if !save_dir.exists() {
            fs::create_dir_all(&save_dir)?;
        }

        Ok(SaveManager {
            save_directory: save_dir,
            current_save_slot: 1,
            autosave_interval: Duration::from_secs(300), // 5 minutes
            last_autosave: None,
        })
    }

    /// Default save location under the user's home directory
    pub fn default_save_directory() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".tilemerge").join("saves"))
    }

    /// Sets the current save slot (1-5)
    pub fn set_save_slot(&mut self, slot: u8) {
        self.current_save_slot = slot.clamp(1, 5);
    }

    /// Gets the current save slot
    pub fn save_slot(&self) -> u8 {
        self.current_save_slot
    }

    /// Saves the game session to the current slot
    ///
    /// Returns the path of the file written. Autosaves get a timestamped
    /// filename and refresh the autosave timer; manual and quick saves
    /// overwrite the slot file.
    pub fn save_game(
        &mut self,
        game: &GameSession,
        save_type: SaveType,
    ) -> Result<PathBuf, SaveError> {
        let filename = self.generate_filename(save_type, self.current_save_slot);
        let filepath = self.save_directory.join(&filename);

        serializer::save_game(&filepath, game)?;

        if matches!(save_type, SaveType::Auto) {
            self.last_autosave = Some(SystemTime::now());
        }

        Ok(filepath)
    }

    /// Loads a fresh game session from a specific slot
    ///
    /// `rng` becomes the loaded session's random source.
    pub fn load_game(&self, slot: u8, rng: Pcg32) -> Result<GameSession, SaveError> {
        let filename = format!("slot_{}.{}", slot, SAVE_EXTENSION);
        self.load_game_by_filename(&filename, rng)
    }

    /// Loads a fresh game session from a file in the save directory
    pub fn load_game_by_filename(
        &self,
        filename: &str,
        rng: Pcg32,
    ) -> Result<GameSession, SaveError> {
        let filepath = self.save_directory.join(filename);

        if !filepath.exists() {
            return Err(SaveError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("save file not found: {}", filename),
            )));
        }

        serializer::load_game(&filepath, rng)
    }

    /// Whether the autosave interval has elapsed since the last autosave
    pub fn should_autosave(&self) -> bool {
        match self.last_autosave {
            Some(last) => SystemTime::now()
                .duration_since(last)
                .map(|elapsed| elapsed >= self.autosave_interval)
                .unwrap_or(true),
            None => true, // save if we've never autosaved
        }
    }

    /// Lists all save files, newest first
    ///
    /// Files that cannot be read or whose header does not parse are
    /// skipped with a warning.
    pub fn list_saves(&self) -> Result<Vec<SaveFileInfo>, SaveError> {
        let mut saves = Vec::new();

        for entry in fs::read_dir(&self.save_directory)? {
            let entry = entry?;
            let path = entry.path();

            if path.extension().and_then(|s| s.to_str()) != Some(SAVE_EXTENSION) {
                continue;
            }
            let Some(filename) = path.file_name().and_then(|f| f.to_str()) else {
                continue;
            };

            let text = match fs::read_to_string(&path) {
                Ok(text) => text,
                Err(err) => {
                    log::warn!("skipping unreadable save {}: {}", filename, err);
                    continue;
                }
            };
            let header = match text.lines().next().map(serializer::parse_header) {
                Some(Ok(header)) => header,
                _ => {
                    log::warn!("skipping save with malformed header: {}", filename);
                    continue;
                }
            };

            let modified = entry
                .metadata()
                .and_then(|m| m.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH);

            saves.push(SaveFileInfo {
                filename: filename.to_string(),
                width: header.width,
                height: header.height,
                score: header.score,
                modified,
            });
        }

        // Sort by modification time, newest first
        saves.sort_by(|a, b| b.modified.cmp(&a.modified));

        Ok(saves)
    }

    /// Deletes old autosaves, keeping only the N most recent per slot
    pub fn cleanup_autosaves(&self, keep_count: usize) -> Result<(), SaveError> {
        for slot in 1..=5u8 {
            let prefix = format!("autosave_slot{}_", slot);

            let mut autosaves: Vec<_> = fs::read_dir(&self.save_directory)?
                .filter_map(|entry| entry.ok())
                .filter(|entry| {
                    entry
                        .file_name()
                        .to_str()
                        .map(|s| s.starts_with(&prefix))
                        .unwrap_or(false)
                })
                .collect();

            // Sort by modification time, newest first
            autosaves.sort_by_key(|entry| {
                entry
                    .metadata()
                    .and_then(|m| m.modified())
                    .ok()
                    .map(std::cmp::Reverse)
            });

            for entry in autosaves.iter().skip(keep_count) {
                fs::remove_file(entry.path())?;
            }
        }

        Ok(())
    }

    /// Checks if a save file exists for a given slot
    pub fn save_exists(&self, slot: u8) -> bool {
        self.save_directory
            .join(format!("slot_{}.{}", slot, SAVE_EXTENSION))
            .exists()
    }

    fn generate_filename(&self, save_type: SaveType, slot: u8) -> String {
        match save_type {
            SaveType::Manual | SaveType::QuickSave => {
                format!("slot_{}.{}", slot, SAVE_EXTENSION)
            }
            SaveType::Auto => {
                let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
                format!("autosave_slot{}_{}.{}", slot, timestamp, SAVE_EXTENSION)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::Tile;
    use rand::SeedableRng;
    use tempfile::tempdir;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(11)
    }

    fn sample_session() -> GameSession {
        let mut game = GameSession::new(2, 2, 1, 4, rng()).unwrap();
        game.set_score(64);
        game.grid_mut().set_tile(Tile::new(3), 1, 0).unwrap();
        game
    }

    #[test]
    fn test_new_creates_save_directory() {
        let dir = tempdir().unwrap();
        let save_dir = dir.path().join("saves");

        SaveManager::new(&save_dir).unwrap();

        assert!(save_dir.is_dir());
    }

    #[test]
    fn test_slot_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let mut manager = SaveManager::new(dir.path()).unwrap();

        let path = manager.save_game(&sample_session(), SaveType::Manual).unwrap();
        assert!(path.ends_with("slot_1.game"));
        assert!(manager.save_exists(1));

        let restored = manager.load_game(1, rng()).unwrap();
        assert_eq!(restored.score(), 64);
        assert_eq!(restored.grid().tile(1, 0).unwrap().unwrap().level(), 3);
    }

    #[test]
    fn test_missing_slot_is_not_found() {
        let dir = tempdir().unwrap();
        let manager = SaveManager::new(dir.path()).unwrap();

        let result = manager.load_game(3, rng());
        match result {
            Err(SaveError::Io(err)) => assert_eq!(err.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected not-found IO error, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_autosave_filename_and_timer() {
        let dir = tempdir().unwrap();
        let mut manager = SaveManager::new(dir.path()).unwrap();
        assert!(manager.should_autosave());

        let path = manager.save_game(&sample_session(), SaveType::Auto).unwrap();
        let filename = path.file_name().unwrap().to_str().unwrap();

        assert!(filename.starts_with("autosave_slot1_"));
        assert!(filename.ends_with(".game"));
        assert!(!manager.should_autosave());
    }

    #[test]
    fn test_set_save_slot_clamps() {
        let dir = tempdir().unwrap();
        let mut manager = SaveManager::new(dir.path()).unwrap();

        manager.set_save_slot(9);
        assert_eq!(manager.save_slot(), 5);
        manager.set_save_slot(0);
        assert_eq!(manager.save_slot(), 1);
    }

    #[test]
    fn test_list_saves_skips_non_save_files() {
        let dir = tempdir().unwrap();
        let mut manager = SaveManager::new(dir.path()).unwrap();

        manager.save_game(&sample_session(), SaveType::Manual).unwrap();
        manager.set_save_slot(2);
        manager.save_game(&sample_session(), SaveType::Manual).unwrap();
        fs::write(dir.path().join("notes.txt"), "not a save").unwrap();
        fs::write(dir.path().join("bad.game"), "garbage header\n").unwrap();

        let saves = manager.list_saves().unwrap();

        assert_eq!(saves.len(), 2);
        for info in &saves {
            assert_eq!(info.width, 2);
            assert_eq!(info.height, 2);
            assert_eq!(info.score, 64);
        }
    }

    #[test]
    fn test_cleanup_autosaves_keeps_most_recent() {
        let dir = tempdir().unwrap();
        let manager = SaveManager::new(dir.path()).unwrap();

        for stamp in ["20240101_000001", "20240101_000002", "20240101_000003"] {
            let name = format!("autosave_slot1_{}.game", stamp);
            fs::write(dir.path().join(name), "2 2 1 4 0\n0 0\n0 0\n").unwrap();
        }

        manager.cleanup_autosaves(1).unwrap();

        let remaining = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(remaining, 1);
    }
}
