use thiserror::Error;

use crate::input::Direction;

/// Errors raised while building or steering a snake.
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum SnakeError {
    #[error("invalid direction {0:?}, expected one of N, S, W, E")]
    InvalidDirection(String),

    #[error("snake head needs positive coordinates, got ({x}, {y})")]
    HeadNotPositive { x: i32, y: i32 },
}

/// Errors raised by board setup and game start.
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum GameError {
    #[error(
        "board {width}x{height} is too small for a snake of length {length} facing {direction} \
         (snakes start in a random facing, so every facing must fit)"
    )]
    BoardTooSmall {
        width: u16,
        height: u16,
        length: usize,
        direction: Direction,
    },

    #[error("no free cell left for an apple")]
    NoFreeCell,

    #[error(transparent)]
    Snake(#[from] SnakeError),
}
