//! Spawner module - places new tiles into empty cells
//!
//! The target cell is chosen uniformly at random among the currently empty
//! cells. The value is 2 with probability 2/3 and 4 with probability 1/3,
//! fixed odds so that replays with the same seed are reproducible. The RNG is
//! owned and seeded once at construction; it is never reseeded mid-game.

use crate::error::{GameError, GameResult};
use crate::grid::Grid;
use crate::rng::SimpleRng;
use game_2048_types::SPAWN_FOUR_ONE_IN;

/// A tile placed by the spawner: where it landed and what it is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawn {
    pub row: u8,
    pub col: u8,
    pub value: u32,
}

/// Seedable tile spawner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spawner {
    rng: SimpleRng,
}

impl Spawner {
    /// Create a new spawner with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Current RNG state (for snapshots / restart-with-same-sequence)
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }

    /// Place one tile into a uniformly chosen empty cell
    ///
    /// Fails with [`GameError::GridFull`] when no empty cell exists; callers
    /// either check `Grid::is_full` first or handle the error.
    pub fn place(&mut self, grid: &mut Grid) -> GameResult<Spawn> {
        let empties = grid.empty_cells();
        if empties.is_empty() {
            return Err(GameError::GridFull);
        }

        let (row, col) = empties[self.rng.next_range(empties.len() as u32) as usize];
        let value = if self.rng.next_range(SPAWN_FOUR_ONE_IN) == 0 {
            4
        } else {
            2
        };

        grid.set(row as usize, col as usize, value)?;
        Ok(Spawn { row, col, value })
    }
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new(1)
    }
}
