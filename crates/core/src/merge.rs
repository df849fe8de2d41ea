//! Merge module - the sliding/merging move pass
//!
//! All four directions run the same one-dimensional algorithm. A move
//! processes four independent lines (rows for Left/Right, columns for
//! Up/Down); the direction only selects the axis and the traversal order.
//! Each line is read starting from the forward end (the edge tiles move
//! toward), compacted, merged pairwise, and written back.
//!
//! [`apply_move`] is pure: it returns the post-move grid and never mutates
//! its input, which makes turn atomicity and terminal lookahead trivial.

use arrayvec::ArrayVec;

use crate::grid::Grid;
use game_2048_types::{Direction, GRID_SIZE};

/// Result of applying a move to a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The post-move grid (equal to the input when `changed` is false)
    pub grid: Grid,
    /// Whether any cell differs from the input grid
    pub changed: bool,
    /// Points gained from merges: twice the pre-merge value of each pair
    pub score_delta: u32,
}

/// Flat cell indices of one line, ordered from the forward end
///
/// `lane` selects the row (Left/Right) or column (Up/Down).
fn line_indices(direction: Direction, lane: usize) -> [usize; GRID_SIZE] {
    let mut indices = [0; GRID_SIZE];
    for (i, slot) in indices.iter_mut().enumerate() {
        let (row, col) = match direction {
            Direction::Left => (lane, i),
            Direction::Right => (lane, GRID_SIZE - 1 - i),
            Direction::Up => (i, lane),
            Direction::Down => (GRID_SIZE - 1 - i, lane),
        };
        *slot = row * GRID_SIZE + col;
    }
    indices
}

/// Compact and merge a single line, read forward-end first
///
/// Returns the re-packed line (still forward-end first) and the score gained:
/// 1. Drop zeros, preserving relative order.
/// 2. Merge adjacent equal pairs, scanning from the forward end. A merged
///   tile is consumed and never merges again within the same pass, so
///   `[2, 2, 2, 2]` becomes `[4, 4]`, never `[8]`.
/// 3. Zero-fill the tail.
fn merge_line(line: [u32; GRID_SIZE]) -> ([u32; GRID_SIZE], u32) {
    let packed: ArrayVec<u32, GRID_SIZE> = line.iter().copied().filter(|&v| v != 0).collect();

    let mut merged = [0u32; GRID_SIZE];
    let mut score = 0;
    let mut write = 0;
    let mut read = 0;
    while read < packed.len() {
        if read + 1 < packed.len() && packed[read] == packed[read + 1] {
            merged[write] = packed[read] * 2;
            score += packed[read] * 2;
            read += 2;
        } else {
            merged[write] = packed[read];
            read += 1;
        }
        write += 1;
    }

    (merged, score)
}

/// Apply a move to the grid, producing the post-move grid, whether anything
/// changed, and the score gained from merges
///
/// Pure: the input grid is left untouched. Grid-level `changed` is the OR
/// over the four lines; `score_delta` is the sum.
pub fn apply_move(grid: &Grid, direction: Direction) -> MoveOutcome {
    let mut next = *grid;
    let mut changed = false;
    let mut score_delta = 0;

    for lane in 0..GRID_SIZE {
        let indices = line_indices(direction, lane);
        let line = indices.map(|idx| grid.cells()[idx]);
        let (merged, score) = merge_line(line);

        if merged != line {
            changed = true;
        }
        score_delta += score;

        for (&idx, &value) in indices.iter().zip(merged.iter()) {
            next.cells_mut()[idx] = value;
        }
    }

    MoveOutcome {
        grid: next,
        changed,
        score_delta,
    }
}

/// Check whether a move would change the grid, without applying it
pub fn move_changes(grid: &Grid, direction: Direction) -> bool {
    apply_move(grid, direction).changed
}
