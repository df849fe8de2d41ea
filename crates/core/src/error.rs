//! Unified error type for engine operations.
//!
//! The engine has exactly two failure modes, and neither is reachable through
//! the normal `GameState` turn loop:
//!
//! - [`GameError::InvalidCoordinate`] is a programming error: valid callers
//!   address cells inside `0..GRID_SIZE` only.
//! - [`GameError::GridFull`] is expected and recoverable: it is returned when
//!   a spawn is requested on a grid with no empty cell. `GameState` never
//!   triggers it because it spawns only after a confirmed-changed move.
//!
//! "No merge occurred" is not an error; it is reported via
//! `TurnResult::changed == false`.

use thiserror::Error;

/// Unified error type for grid and spawner operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Coordinate outside the grid. Never silently clamped.
    #[error("invalid coordinate ({row}, {col}): rows and columns range over 0..4")]
    InvalidCoordinate {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// Every cell is occupied; there is nowhere to spawn a tile.
    #[error("grid is full: no empty cell to spawn into")]
    GridFull,
}

/// Result type alias for engine operations.
pub type GameResult<T> = Result<T, GameError>;
