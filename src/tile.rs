use std::fmt;

/// A single cell occupant on the playing field.
///
/// A tile carries an integer level; its displayed numeric value is
/// `2^level` (level 1 is 2, level 2 is 4, level 3 is 8, ...). Level 0 is
/// the conventional "empty" level. The location is unset until the tile is
/// placed into a grid, which stamps it with the cell's (column, row).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    level: u32,
    location: Option<(usize, usize)>,
}

impl Tile {
    /// Creates a tile with the given level and no location.
    pub fn new(level: u32) -> Self {
        Self {
            level,
            location: None,
        }
    }

    /// The tile's level.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// The tile's numeric value, `2^level`.
    pub fn value(&self) -> u64 {
        // saturates past 2^63
        1u64.checked_shl(self.level).unwrap_or(u64::MAX)
    }

    /// Grid position as (column, row), if the tile has been placed.
    pub fn location(&self) -> Option<(usize, usize)> {
        self.location
    }

    /// Records the tile's grid position. `Grid::set_tile` calls this for
    /// every tile it stores.
    pub fn set_location(&mut self, x: usize, y: usize) {
        self.location = Some((x, y));
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level)
    }
}
