//! Match rules: the action state machine, win detection, and rendering.

mod display;
pub mod error;
pub mod state;

pub use error::GameError;
pub use state::{
    ControlZone, ControlledPiece, GameState, Side, Square, ALL_SIDES, SIDE_COUNT, ZONE_COUNT,
};
