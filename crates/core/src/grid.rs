//! Grid module - manages the 4x4 tile matrix
//!
//! Each cell holds 0 (empty) or a power of two >= 2. Uses a flat array for
//! better cache locality and zero-allocation.
//! Coordinates: (row, col) where row ranges 0..3 (top to bottom), col ranges
//! 0..3 (left to right). Out-of-range access fails with
//! [`GameError::InvalidCoordinate`]; coordinates are never silently clamped.

use arrayvec::ArrayVec;

use crate::error::{GameError, GameResult};
use game_2048_types::{CELL_COUNT, GRID_SIZE};

/// The game grid - 4x4 tiles using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Flat array of tile values, row-major order (row * GRID_SIZE + col)
    cells: [u32; CELL_COUNT],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [0; CELL_COUNT],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: usize, col: usize) -> Option<usize> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return None;
        }
        Some(row * GRID_SIZE + col)
    }

    /// Get the tile value at (row, col)
    ///
    /// Fails with [`GameError::InvalidCoordinate`] if out of range.
    pub fn get(&self, row: usize, col: usize) -> GameResult<u32> {
        Self::index(row, col)
            .map(|idx| self.cells[idx])
            .ok_or(GameError::InvalidCoordinate { row, col })
    }

    /// Set the tile value at (row, col)
    ///
    /// `value` must be 0 (empty) or a power of two >= 2; that invariant is
    /// debug-asserted. Fails with [`GameError::InvalidCoordinate`] if out of
    /// range.
    pub fn set(&mut self, row: usize, col: usize, value: u32) -> GameResult<()> {
        debug_assert!(
            value == 0 || (value >= 2 && value.is_power_of_two()),
            "tile value must be 0 or a power of two >= 2, got {value}"
        );
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = value;
                Ok(())
            }
            None => Err(GameError::InvalidCoordinate { row, col }),
        }
    }

    /// Check if every cell holds a tile
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }

    /// Collect the coordinates of all empty cells, row-major order
    ///
    /// Zero-allocation: the result lives on the stack.
    pub fn empty_cells(&self) -> ArrayVec<(u8, u8), CELL_COUNT> {
        let mut empties = ArrayVec::new();
        for (idx, &value) in self.cells.iter().enumerate() {
            if value == 0 {
                empties.push(((idx / GRID_SIZE) as u8, (idx % GRID_SIZE) as u8));
            }
        }
        empties
    }

    /// Highest tile currently on the grid (0 when the grid is empty)
    ///
    /// Presentation layers use this for win detection; the engine itself
    /// attaches no meaning to any particular value.
    pub fn highest_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all tile values (merges conserve this plus the score delta)
    pub fn tile_sum(&self) -> u32 {
        self.cells.iter().sum()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[u32; CELL_COUNT] {
        &self.cells
    }

    /// Get a mutable reference to the internal cells array (merge pass only)
    pub(crate) fn cells_mut(&mut self) -> &mut [u32; CELL_COUNT] {
        &mut self.cells
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.cells = [0; CELL_COUNT];
    }

    /// Create from a 2D row array (construction seam for tests and tools)
    pub fn from_rows(rows: [[u32; GRID_SIZE]; GRID_SIZE]) -> Self {
        let mut grid = Self::new();
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                grid.cells[row * GRID_SIZE + col] = value;
            }
        }
        grid
    }

    /// Convert to a 2D row array (read-only view for snapshots and display)
    pub fn rows(&self) -> [[u32; GRID_SIZE]; GRID_SIZE] {
        let mut rows = [[0; GRID_SIZE]; GRID_SIZE];
        for (idx, &value) in self.cells.iter().enumerate() {
            rows[idx / GRID_SIZE][idx % GRID_SIZE] = value;
        }
        rows
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
