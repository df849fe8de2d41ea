//! Core types shared across the engine
//!
//! This crate contains pure data types with no external dependencies:
//! grid dimensions, spawn odds, the move [`Direction`], and the per-turn
//! [`TurnResult`] report.

/// Grid dimension (the board is `GRID_SIZE` x `GRID_SIZE`)
pub const GRID_SIZE: usize = 4;

/// Total number of cells on the grid
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Number of tiles seeded onto a fresh grid at game start
pub const INITIAL_TILES: usize = 2;

/// Spawn odds denominator: a freshly spawned tile is a 4 once in every
/// `SPAWN_FOUR_ONE_IN` draws on average (probability 1/3), and a 2 otherwise
/// (probability 2/3).
pub const SPAWN_FOUR_ONE_IN: u32 = 3;

/// The four move directions
///
/// A closed enumeration: the merge pass dispatches on it to pick the axis
/// (rows vs. columns) and the traversal order, and it is never extended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a fixed order (used for terminal lookahead)
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Outcome of a single call to `GameState::take_turn`
///
/// Produced fresh each turn and never persisted.
///
/// - `changed`: whether the move compacted or merged anything
/// - `score_delta`: points gained from merges this turn (twice the pre-merge
///   value of every merged pair)
/// - `spawned`: whether a new tile was placed (only after a changed move)
/// - `terminal`: whether the game is over after this turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TurnResult {
    pub changed: bool,
    pub score_delta: u32,
    pub spawned: bool,
    pub terminal: bool,
}
