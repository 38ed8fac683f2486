use std::fmt;

use crate::data::{Point, Tile};
use crate::disjoint_set::DisjointSetError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidMoveReason {
    OutOfBounds,
    Occupied(Tile),
}

/// Errors raised by the game core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid move at {point}: {reason}")]
    InvalidMove { point: Point, reason: InvalidMoveReason },

    #[error("board size must be between 1 and {max}, got {0}", max = crate::game::MAX_SIZE)]
    InvalidSize(usize),

    #[error("connectivity index out of sync with the board: {0}")]
    Index(#[from] DisjointSetError),
}

impl fmt::Display for InvalidMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InvalidMoveReason::OutOfBounds => f.write_str("out of bounds"),
            InvalidMoveReason::Occupied(tile) => write!(f, "cell already taken by {}", tile.glyph()),
        }
    }
}

impl GameError {
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, GameError::InvalidMove { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("expected two integers separated by a space, got {0} value(s)")]
    WrongArity(usize),

    #[error("'{0}' is not an integer")]
    NotANumber(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_move_display() {
        let err = GameError::InvalidMove {
            point: Point::new(3, -1),
            reason: InvalidMoveReason::OutOfBounds,
        };
        assert_eq!(err.to_string(), "invalid move at (3, -1): out of bounds");
        assert!(err.is_invalid_move());

        let err = GameError::InvalidMove {
            point: Point::new(0, 0),
            reason: InvalidMoveReason::Occupied(Tile::Blue),
        };
        assert_eq!(err.to_string(), "invalid move at (0, 0): cell already taken by B");
    }

    #[test]
    fn input_error_display() {
        assert_eq!(
            InputError::NotANumber("x".to_string()).to_string(),
            "'x' is not an integer"
        );
        assert!(!GameError::InvalidSize(0).is_invalid_move());
        assert_eq!(
            GameError::InvalidSize(2048).to_string(),
            "board size must be between 1 and 1024, got 2048"
        );
    }
}
