//! Board geometry types.
//!
//! Contains the bounds-checked coordinate type and the piece kinds with
//! their movement and attack patterns.

pub mod piece;
pub mod position;

pub use piece::{
    IllegalMove, Piece, PieceKind, ALL_KINDS, ARCHER_ATTACK_OFFSETS, BASIC_KINDS, KIND_COUNT,
};
pub use position::{
    Position, PositionError, ADJACENT_OFFSETS, BOARD_SIZE, ORTHOGONAL_OFFSETS,
};
