//! Error types for the game engine

use std::io;

use crate::board::{Player, Pos};

/// Errors raised by the board engine and the game driver.
///
/// Search trouble (no move found, hard ceiling exceeded) is not an error:
/// it is recovered with a random legal move and reported through
/// [`crate::engine::MoveSource`].
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("illegal move at {pos}: cell is owned by {owner}")]
    IllegalMove { pos: Pos, owner: Player },
    #[error("position ({row}, {col}) is off the board")]
    OutOfBounds { row: i32, col: i32 },
    #[error("interrupted by quit request")]
    Interrupted,
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
