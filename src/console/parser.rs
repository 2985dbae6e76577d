//! Parsing of raw console answers.
//!
//! Turns the strings a player types at the prompts into engine values:
//! action words, `row,col` board positions, and piece-kind names. The
//! engine itself only ever sees already-validated values.

use thiserror::Error;

use crate::board::{Position, PositionError};

/// A player-selectable action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move,
    Recruit,
    Place,
    Attack,
    Control,
    Initiative,
    Forfeit,
}

/// The action words accepted at the prompt, in display order.
pub const VALID_ACTIONS: [&str; 7] = [
    "move",
    "recruit",
    "place",
    "attack",
    "control",
    "initiative",
    "forfeit",
];

/// Parses an action word. Returns `None` for anything unrecognized.
pub fn parse_action(s: &str) -> Option<Action> {
    match s.trim() {
        "move" => Some(Action::Move),
        "recruit" => Some(Action::Recruit),
        "place" => Some(Action::Place),
        "attack" => Some(Action::Attack),
        "control" => Some(Action::Control),
        "initiative" => Some(Action::Initiative),
        "forfeit" => Some(Action::Forfeit),
        _ => None,
    }
}

/// Errors from parsing a position answer.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid position format, expected row,col")]
    InvalidFormat,

    #[error(transparent)]
    Position(#[from] PositionError),
}

/// Parses a `row,col` answer such as `a,2` into a board position.
///
/// The shape is checked first (`InvalidFormat`); the coordinate values then
/// go through `Position::from_row_letter`, so a bad letter or column
/// surfaces as the underlying `PositionError`.
pub fn parse_position(s: &str) -> Result<Position, ParseError> {
    let mut parts = s.trim().split(',');
    let (row, col) = match (parts.next(), parts.next(), parts.next()) {
        (Some(row), Some(col), None) => (row.trim(), col.trim()),
        _ => return Err(ParseError::InvalidFormat),
    };

    let mut chars = row.chars();
    let letter = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => return Err(ParseError::InvalidFormat),
    };
    let col: i32 = col.parse().map_err(|_| ParseError::InvalidFormat)?;

    Ok(Position::from_row_letter(col, letter)?)
}
