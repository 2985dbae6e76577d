//! Warchest engine library.
//!
//! Exposes the board geometry, player economy, match rules, console
//! driver, and leaderboard modules for use by integration tests and the
//! binary entry point.

pub mod board;
pub mod console;
pub mod game;
pub mod leaderboard;
pub mod player;

pub use board::{Piece, PieceKind, Position, PositionError};
pub use game::{GameError, GameState, Side};
pub use player::{Player, PlayerError};
