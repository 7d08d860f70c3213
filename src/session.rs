// GameSession: the per-game state bundle consumed and produced by the
// save system. Game rules (moves, merges, spawning) live outside this
// crate and operate on the session through its accessors.

use crate::grid::{Grid, GridError};
use rand_pcg::Pcg32;

/// A single game's state: the active grid, the tile level bounds, the
/// current score, and the random source reserved for tile spawning.
///
/// The random source is injected by the caller rather than pulled from a
/// global. Its seed only influences gameplay after construction; it never
/// affects what is saved or loaded.
pub struct GameSession {
    grid: Grid,
    min_tile_level: u32,
    max_tile_level: u32,
    score: u64,
    rng: Pcg32,
}

impl GameSession {
    /// Creates a session with an empty `width` x `height` grid, a score of
    /// zero, and the given level bounds and random source.
    pub fn new(
        width: usize,
        height: usize,
        min_tile_level: u32,
        max_tile_level: u32,
        rng: Pcg32,
    ) -> Result<Self, GridError> {
        Ok(Self {
            grid: Grid::new(width, height)?,
            min_tile_level,
            max_tile_level,
            score: 0,
            rng,
        })
    }

    /// The active grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access to the active grid.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Smallest tile level the game spawns.
    pub fn min_tile_level(&self) -> u32 {
        self.min_tile_level
    }

    /// Level of the winning tile.
    pub fn max_tile_level(&self) -> u32 {
        self.max_tile_level
    }

    /// Current score.
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Replaces the current score.
    pub fn set_score(&mut self, score: u64) {
        self.score = score;
    }

    /// The session's random source, for the game rules that spawn tiles.
    pub fn rng_mut(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(42)
    }

    #[test]
    fn test_new_session() {
        let session = GameSession::new(4, 4, 1, 11, rng()).unwrap();

        assert_eq!(session.grid().width(), 4);
        assert_eq!(session.grid().height(), 4);
        assert_eq!(session.min_tile_level(), 1);
        assert_eq!(session.max_tile_level(), 11);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_set_score() {
        let mut session = GameSession::new(4, 4, 1, 11, rng()).unwrap();
        session.set_score(256);
        assert_eq!(session.score(), 256);
    }

    #[test]
    fn test_new_session_rejects_zero_dimensions() {
        let result = GameSession::new(0, 4, 1, 11, rng());
        assert_eq!(
            result.err(),
            Some(GridError::InvalidDimension {
                width: 0,
                height: 4
            })
        );
    }

    #[test]
    fn test_rng_is_deterministic_for_a_seed() {
        use rand::Rng;

        let mut a = GameSession::new(4, 4, 1, 11, rng()).unwrap();
        let mut b = GameSession::new(4, 4, 1, 11, rng()).unwrap();
        let roll_a: u32 = a.rng_mut().random_range(0..100);
        let roll_b: u32 = b.rng_mut().random_range(0..100);
        assert_eq!(roll_a, roll_b);
    }
}
