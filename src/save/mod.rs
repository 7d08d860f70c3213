//! Save/Load system for the tile-merging game
//!
//! This module persists game sessions in a line-oriented plain-text
//! format and manages the files it produces:
//! - `serializer`: the text format itself (bit-exact round trip)
//! - `manager`: save directory, slots (1-5), autosaves, listing, cleanup
//! - `types`: save errors and file metadata
//!
//! # Example Usage
//!
//! ```ignore
//! use rand::SeedableRng;
//! use rand_pcg::Pcg32;
//!
//! // Create save manager
//! let dir = SaveManager::default_save_directory().unwrap();
//! let mut save_manager = SaveManager::new(dir)?;
//!
//! // Save game
//! save_manager.save_game(&game, SaveType::Manual)?;
//!
//! // Load game (the loaded session gets a fresh random source)
//! let game = save_manager.load_game(1, Pcg32::seed_from_u64(42))?;
//! ```

pub mod manager;
pub mod serializer;
pub mod types;

// Re-export commonly used items
pub use manager::SaveManager;
pub use serializer::{from_save_text, load_game, save_game, to_save_text};
pub use types::*;
