//! Save data types for the persistence layer
//!
//! This module defines the error and metadata types shared by the
//! serializer and the save manager.

use crate::grid::GridError;
use std::fmt;
use std::time::SystemTime;

/// File extension for saved games
pub const SAVE_EXTENSION: &str = "game";

/// How a save was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveType {
    Manual,
    Auto,
    QuickSave,
}

/// Summary of one save file on disk, as reported by
/// `SaveManager::list_saves`
#[derive(Debug, Clone)]
pub struct SaveFileInfo {
    pub filename: String,
    pub width: usize,
    pub height: usize,
    pub score: u64,
    pub modified: SystemTime,
}

/// Error types for save/load operations
#[derive(Debug)]
pub enum SaveError {
    /// File could not be opened, read, or written
    Io(std::io::Error),

    /// First line is missing, has fewer than five fields, or holds a
    /// non-integer field
    MalformedHeader(String),

    /// Grid lines are missing, a row is short, or a level is not an
    /// integer
    MalformedGrid(String),

    /// Header declared a zero or negative width or height
    InvalidDimension { width: i64, height: i64 },

    /// Grid rebuild failed while placing loaded tiles
    Grid(GridError),
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::Io(e) => write!(f, "IO error: {}", e),
            SaveError::MalformedHeader(msg) => write!(f, "malformed header: {}", msg),
            SaveError::MalformedGrid(msg) => write!(f, "malformed grid: {}", msg),
            SaveError::InvalidDimension { width, height } => {
                write!(f, "invalid grid dimensions in header: {}x{}", width, height)
            }
            SaveError::Grid(e) => write!(f, "grid error: {}", e),
        }
    }
}

impl std::error::Error for SaveError {}

impl From<std::io::Error> for SaveError {
    fn from(err: std::io::Error) -> Self {
        SaveError::Io(err)
    }
}

impl From<GridError> for SaveError {
    fn from(err: GridError) -> Self {
        SaveError::Grid(err)
    }
}
