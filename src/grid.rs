use crate::tile::Tile;
use std::fmt;

/// Errors from grid construction and cell access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Access outside the grid's declared dimensions
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// Grid constructed with a zero width or height
    InvalidDimension { width: usize, height: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(f, "cell ({}, {}) outside {}x{} grid", x, y, width, height)
            }
            GridError::InvalidDimension { width, height } => {
                write!(f, "invalid grid dimensions: {}x{}", width, height)
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Fixed-size rectangular playing field of tiles.
///
/// Cells are addressed by (x = column, y = row) with `0 <= x < width` and
/// `0 <= y < height`. Dimensions are immutable after construction and a
/// fresh grid's cells are all empty. Storage is row-major (`cells[y][x]`)
/// and both accessors index it the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<Option<Tile>>>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Creates an empty grid with the given dimensions.
    ///
    /// Fails with `GridError::InvalidDimension` when either dimension is
    /// zero.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimension { width, height });
        }
        Ok(Self {
            cells: vec![vec![None; width]; height],
            width,
            height,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The tile at column `x`, row `y`, or `Ok(None)` for an empty cell.
    pub fn tile(&self, x: usize, y: usize) -> Result<Option<&Tile>, GridError> {
        self.check_bounds(x, y)?;
        Ok(self.cells[y][x].as_ref())
    }

    /// Places `tile` at column `x`, row `y`.
    ///
    /// The tile's location is stamped to (x, y) before it is stored. Any
    /// previous occupant of the cell is discarded.
    pub fn set_tile(&mut self, mut tile: Tile, x: usize, y: usize) -> Result<(), GridError> {
        self.check_bounds(x, y)?;
        tile.set_location(x, y);
        self.cells[y][x] = Some(tile);
        Ok(())
    }

    /// Row `y` as a slice of cells, left to right.
    ///
    /// Precondition: `y < height`. Used by the serializer and `Display`,
    /// which iterate within the declared dimensions.
    pub(crate) fn row(&self, y: usize) -> &[Option<Tile>] {
        &self.cells[y]
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<(), GridError> {
        if x >= self.width || y >= self.height {
            return Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Human-readable rendering for diagnostics: one bracketed row per line,
/// cells comma-separated, `-` for an empty cell. Not the save format.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            if y > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (x, cell) in self.row(y).iter().enumerate() {
                if x > 0 {
                    write!(f, ",")?;
                }
                match cell {
                    Some(tile) => write!(f, "{}", tile)?,
                    None => write!(f, "-")?,
                }
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
