//! Direction-log parsing and loading
//!
//! A direction log is plain text holding one letter per move: `U`, `D`, `L`,
//! or `R`, case insensitive, with whitespace ignored. The engine is stateless
//! between calls, so a game can be reconstructed from its log by replaying
//! the letters against the same seed.

use crate::board::Direction;
use crate::io::error::{GameError, Result};
use std::path::Path;

/// Map one log letter to a direction
///
/// # Errors
///
/// Returns [`GameError::InvalidDirection`] for anything other than
/// `U`, `D`, `L`, or `R` in either case.
pub const fn parse_direction(token: char) -> Result<Direction> {
    match token.to_ascii_uppercase() {
        'U' => Ok(Direction::Up),
        'D' => Ok(Direction::Down),
        'L' => Ok(Direction::Left),
        'R' => Ok(Direction::Right),
        _ => Err(GameError::InvalidDirection { token }),
    }
}

/// Parse a direction log from text
///
/// # Errors
///
/// Returns [`GameError::InvalidDirection`] on the first unrecognized
/// non-whitespace character.
pub fn parse_moves(text: &str) -> Result<Vec<Direction>> {
    let mut moves = Vec::new();
    for token in text.chars() {
        if token.is_whitespace() {
            continue;
        }
        moves.push(parse_direction(token)?);
    }
    Ok(moves)
}

/// Load a direction log from a file
///
/// # Errors
///
/// Returns [`GameError::ReplayRead`] if the file cannot be read, or a
/// parse error from [`parse_moves`] on malformed content.
pub fn load_moves(path: &Path) -> Result<Vec<Direction>> {
    let text = std::fs::read_to_string(path).map_err(|source| GameError::ReplayRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_moves(&text)
}
