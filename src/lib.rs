//! Persistence core for a 2048-style tile-merging game.
//!
//! The crate keeps the playing field in memory and round-trips complete
//! game state through a plain-text save format:
//! - `tile`: a cell occupant with an integer level (value = `2^level`)
//! - `grid`: the fixed-size rectangular field with positional get/set
//! - `session`: grid + score + level bounds + injected random source
//! - `save`: the text serializer and the slot/autosave file manager
//!
//! Game rules — moves, merges, scoring, tile spawning — live outside this
//! crate and drive the session through its accessors.
//!
//! # Example Usage
//!
//! ```ignore
//! use rand::SeedableRng;
//! use rand_pcg::Pcg32;
//! use tilemerge::{save, GameSession, Tile};
//!
//! let mut game = GameSession::new(4, 4, 1, 11, Pcg32::seed_from_u64(1))?;
//! game.grid_mut().set_tile(Tile::new(1), 0, 0)?;
//! game.set_score(4);
//!
//! save::save_game("slot_1.game", &game)?;
//! let restored = save::load_game("slot_1.game", Pcg32::seed_from_u64(2))?;
//! assert_eq!(restored.score(), 4);
//! ```

pub mod grid;
pub mod save;
pub mod session;
pub mod tile;

// Re-export the core types
pub use grid::{Grid, GridError};
pub use save::{SaveError, SaveFileInfo, SaveManager, SaveType};
pub use session::GameSession;
pub use tile::Tile;
