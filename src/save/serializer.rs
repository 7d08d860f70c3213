//! Plain-text game file serializer
//!
//! The save format is one line of game data followed by one line per grid
//! row. The first line contains the width, height, minimum tile level,
//! maximum tile level, and score. The grid is represented by tile levels;
//! the conversion to tile values is `2^level`, for example, 1 is 2, 2 is
//! 4, 3 is 8, 4 is 16, etc. The following is an example:
//!
//! ```text
//! 5 3 1 4 100
//! 1 1 2 3 1
//! 2 3 3 1 3
//! 3 3 1 2 2
//! ```
//!
//! All fields are base-10 integers separated by single spaces, with no
//! trailing space and every line newline-terminated. Rows appear top to
//! bottom (y = 0 first) and columns left to right (x = 0 first). An empty
//! grid cell is written as level 0.

use super::types::SaveError;
use crate::session::GameSession;
use crate::tile::Tile;
use rand_pcg::Pcg32;
use std::fs;
use std::path::Path;

/// Parsed first line of a save file.
pub(crate) struct Header {
    pub width: usize,
    pub height: usize,
    pub min_tile_level: u32,
    pub max_tile_level: u32,
    pub score: u64,
}

fn parse_field<T: std::str::FromStr>(token: &str, name: &str) -> Result<T, SaveError> {
    token
        .parse()
        .map_err(|_| SaveError::MalformedHeader(format!("invalid {}: {:?}", name, token)))
}

/// Parses a header line. Fields past the fifth are ignored.
pub(crate) fn parse_header(line: &str) -> Result<Header, SaveError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 5 {
        return Err(SaveError::MalformedHeader(format!(
            "expected 5 fields, found {}",
            fields.len()
        )));
    }

    // width/height go through i64 so that a negative dimension reads as a
    // well-formed integer outside the valid domain, not a bad token
    let width: i64 = parse_field(fields[0], "width")?;
    let height: i64 = parse_field(fields[1], "height")?;
    let min_tile_level: u32 = parse_field(fields[2], "min tile level")?;
    let max_tile_level: u32 = parse_field(fields[3], "max tile level")?;
    let score: u64 = parse_field(fields[4], "score")?;

    if width <= 0 || height <= 0 {
        return Err(SaveError::InvalidDimension { width, height });
    }

    Ok(Header {
        width: width as usize,
        height: height as usize,
        min_tile_level,
        max_tile_level,
        score,
    })
}

/// Renders `game` in the save-file format.
///
/// Empty cells are written as the sentinel level 0.
pub fn to_save_text(game: &GameSession) -> String {
    let grid = game.grid();
    let mut text = String::new();

    text.push_str(&format!(
        "{} {} {} {} {}\n",
        grid.width(),
        grid.height(),
        game.min_tile_level(),
        game.max_tile_level(),
        game.score()
    ));

    for y in 0..grid.height() {
        for (x, cell) in grid.row(y).iter().enumerate() {
            if x > 0 {
                text.push(' ');
            }
            let level = cell.as_ref().map_or(0, |tile| tile.level());
            text.push_str(&level.to_string());
        }
        text.push('\n');
    }

    text
}

/// Parses save-file text into a fresh session.
///
/// One tile is constructed per cell value (level 0 included) and placed
/// through the grid, so every loaded tile carries its stamped location.
/// `rng` becomes the new session's random source; it has no effect on the
/// loaded grid or score. On any failure nothing is produced, so the
/// caller's existing session stays untouched.
///
/// Fields past `width` on a grid line, and lines past `height`, are
/// ignored.
pub fn from_save_text(text: &str, rng: Pcg32) -> Result<GameSession, SaveError> {
    let mut lines = text.lines();
    let header_line = lines
        .next()
        .ok_or_else(|| SaveError::MalformedHeader("missing header line".to_string()))?;
    let header = parse_header(header_line)?;

    let mut game = GameSession::new(
        header.width,
        header.height,
        header.min_tile_level,
        header.max_tile_level,
        rng,
    )?;
    game.set_score(header.score);

    for y in 0..header.height {
        let line = lines.next().ok_or_else(|| {
            SaveError::MalformedGrid(format!("expected {} grid rows, found {}", header.height, y))
        })?;
        let mut levels = line.split_whitespace();
        for x in 0..header.width {
            let token = levels.next().ok_or_else(|| {
                SaveError::MalformedGrid(format!(
                    "row {} has fewer than {} cells",
                    y, header.width
                ))
            })?;
            let level: u32 = token.parse().map_err(|_| {
                SaveError::MalformedGrid(format!("invalid level {:?} at ({}, {})", token, x, y))
            })?;
            game.grid_mut().set_tile(Tile::new(level), x, y)?;
        }
    }

    Ok(game)
}

/// Saves `game` to a file at `path`, creating or overwriting it.
///
/// The text is written to a sibling temporary file and renamed into
/// place, so a failed save never leaves a partial file at `path`.
pub fn save_game(path: impl AsRef<Path>, game: &GameSession) -> Result<(), SaveError> {
    let path = path.as_ref();
    let text = to_save_text(game);

    let tmp = path.with_extension("tmp");
    if let Err(err) = fs::write(&tmp, &text) {
        let _ = fs::remove_file(&tmp);
        return Err(SaveError::Io(err));
    }
    if let Err(err) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(SaveError::Io(err));
    }

    log::info!("game saved to {}", path.display());
    Ok(())
}

/// Loads the save file at `path` into a fresh session.
///
/// `rng` becomes the new session's random source, as the previous game's
/// generator does not survive a reload.
pub fn load_game(path: impl AsRef<Path>, rng: Pcg32) -> Result<GameSession, SaveError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let game = from_save_text(&text, rng)?;

    log::info!("game loaded from {}", path.display());
    Ok(game)
}
