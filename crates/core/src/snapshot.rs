//! Read-only state snapshot handed to presentation layers
//!
//! The snapshot is a plain value: rendering code gets tile values, the score,
//! and the terminal flag without any access to the live game state.

use game_2048_types::GRID_SIZE;

/// Read-only view of a game, produced by `GameState::snapshot`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Tile values, `grid[row][col]`, 0 for empty
    pub grid: [[u32; GRID_SIZE]; GRID_SIZE],
    /// Cumulative score
    pub score: u32,
    /// Highest tile on the grid (for win display)
    pub highest_tile: u32,
    /// Whether the game is over
    pub terminal: bool,
    /// Current spawner RNG state
    pub seed: u32,
}

impl GameSnapshot {
    /// Reset to the empty-game view
    pub fn clear(&mut self) {
        self.grid = [[0; GRID_SIZE]; GRID_SIZE];
        self.score = 0;
        self.highest_tile = 0;
        self.terminal = false;
        self.seed = 0;
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[0; GRID_SIZE]; GRID_SIZE],
            score: 0,
            highest_tile: 0,
            terminal: false,
            seed: 0,
        }
    }
}
