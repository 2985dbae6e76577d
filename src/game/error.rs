//! Rule-violation errors.
//!
//! Every illegal player action surfaces as a `GameError` naming the exact
//! cause. These are expected and recoverable: the console driver prints the
//! message and re-prompts. No action mutates any state before its checks
//! pass, so a returned error always leaves the match unchanged.

use thiserror::Error;

/// The closed set of rule-violation causes.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("there's no piece to move there")]
    NoPieceToMove,

    #[error("the target square is occupied")]
    OccupiedTarget,

    #[error("that move is invalid")]
    InvalidMove,

    #[error("there's no control zone there")]
    NoControlZone,

    #[error("that piece belongs to the other player")]
    InactivePlayerMove,

    #[error("you can't place a piece there")]
    InvalidPlacement,

    #[error("you don't have that piece")]
    NoPieceToPlace,

    #[error("you can't attack your own unit")]
    FriendlyFire,

    #[error("there's no piece to attack in that square")]
    NoAttackTarget,

    #[error("that piece can't attack there")]
    InvalidAttack,

    #[error("there's no piece to attack with")]
    NoPieceToAttackWith,

    #[error("that piece belongs to the other player")]
    InactivePlayerAttack,

    #[error("the target piece is not the same type as the discarded one")]
    UnmatchingPieces,

    #[error("you don't have a piece in that control zone")]
    NoPieceToControlWith,

    #[error("you don't have that type of piece in your hand")]
    NoPieceToDiscard,

    #[error("no more pieces of that type to recruit")]
    NoPieceToRecruit,
}
