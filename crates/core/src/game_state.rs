//! Game state module - composes the grid, spawner, and merge pass into turns
//!
//! `GameState` owns the grid exclusively and is the only place it gets
//! mutated. A turn is atomic: either the move changed something and the new
//! grid, score, and spawned tile are all committed together, or the state is
//! left byte-for-byte unchanged. Once no direction can change the grid, the
//! state is terminal and absorbing.

use crate::grid::Grid;
use crate::merge::apply_move;
use crate::snapshot::GameSnapshot;
use crate::spawner::Spawner;
use game_2048_types::{Direction, TurnResult, INITIAL_TILES};

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    grid: Grid,
    spawner: Spawner,
    score: u32,
    terminal: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed
    ///
    /// The grid starts with two spawned tiles. The same seed produces the
    /// same initial grid and the same subsequent spawn sequence.
    pub fn new(seed: u32) -> Self {
        let mut state = Self {
            grid: Grid::new(),
            spawner: Spawner::new(seed),
            score: 0,
            terminal: false,
        };
        for _ in 0..INITIAL_TILES {
            state.spawn();
        }
        state
    }

    /// Create a game over an existing grid (composition seam for tools and
    /// tests; no initial tiles are spawned)
    pub fn from_grid(grid: Grid, seed: u32) -> Self {
        let mut state = Self {
            grid,
            spawner: Spawner::new(seed),
            score: 0,
            terminal: false,
        };
        state.terminal = state.compute_terminal();
        state
    }

    /// Restart in place with a fresh seed
    pub fn reset(&mut self, seed: u32) {
        *self = Self::new(seed);
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn terminal(&self) -> bool {
        self.terminal
    }

    pub fn highest_tile(&self) -> u32 {
        self.grid.highest_tile()
    }

    /// Apply one move and report what happened
    ///
    /// A move that changes nothing is rejected outright: no mutation, no
    /// spawn, no score change. A changed move commits the post-move grid,
    /// adds the merge score, spawns one tile, and re-evaluates the terminal
    /// condition. Once terminal, `take_turn` is a no-op.
    pub fn take_turn(&mut self, direction: Direction) -> TurnResult {
        if self.terminal {
            return TurnResult {
                changed: false,
                score_delta: 0,
                spawned: false,
                terminal: true,
            };
        }

        let outcome = apply_move(&self.grid, direction);
        if !outcome.changed {
            return TurnResult {
                changed: false,
                score_delta: 0,
                spawned: false,
                terminal: false,
            };
        }

        self.grid = outcome.grid;
        self.score += outcome.score_delta;
        let spawned = self.spawn();
        self.terminal = self.compute_terminal();

        TurnResult {
            changed: true,
            score_delta: outcome.score_delta,
            spawned,
            terminal: self.terminal,
        }
    }

    /// Terminal iff the grid is full and no direction moves anything
    ///
    /// Pure lookahead: trial-applies all four directions without mutating.
    fn compute_terminal(&self) -> bool {
        self.grid.is_full()
            && Direction::ALL
                .iter()
                .all(|&direction| !apply_move(&self.grid, direction).changed)
    }

    /// Spawn one tile if there is room; reports whether a tile was placed
    fn spawn(&mut self) -> bool {
        if self.grid.is_full() {
            return false;
        }
        self.spawner.place(&mut self.grid).is_ok()
    }

    /// Fill an existing snapshot without allocating
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid = self.grid.rows();
        out.score = self.score;
        out.highest_tile = self.grid.highest_tile();
        out.terminal = self.terminal;
        out.seed = self.spawner.seed();
    }

    /// Produce a read-only snapshot for rendering
    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    #[cfg(test)]
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
