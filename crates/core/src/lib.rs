//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the 2048 rules and state management. It has
//! **zero dependencies** on UI, input devices, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: The merge pass and turn loop are plain value transforms
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Zero-allocation hot paths for moves and spawns
//!
//! # Module Structure
//!
//! - [`grid`]: 4x4 tile matrix with bounds-checked addressing
//! - [`merge`]: the sliding/merging move pass, one algorithm for all four
//!   directions
//! - [`spawner`]: seedable placement of new 2/4 tiles into empty cells
//! - [`game_state`]: the turn loop tying grid, merge, and spawner together
//! - [`snapshot`]: read-only state view for presentation layers
//! - [`rng`]: simple seedable LCG
//! - [`error`]: the two-variant error taxonomy
//!
//! # Game Rules
//!
//! A move slides all tiles toward one edge. Within each row or column,
//! adjacent equal tiles merge into one tile of double the value, once per
//! pair per move; the merge score is the sum of the merged results. A move
//! that changes nothing is rejected and spawns no tile. The game ends when
//! the grid is full and no direction can change it.
//!
//! # Example
//!
//! ```
//! use game_2048_core::GameState;
//! use game_2048_types::Direction;
//!
//! let mut game = GameState::new(12345);
//! let result = game.take_turn(Direction::Left);
//!
//! if result.changed {
//!     // The move merged or moved something and one new tile spawned
//!     assert!(result.spawned);
//! }
//! let view = game.snapshot();
//! assert_eq!(view.score, game.score());
//! ```

pub mod error;
pub mod game_state;
pub mod grid;
pub mod merge;
pub mod rng;
pub mod snapshot;
pub mod spawner;

pub use game_2048_types as types;

// Re-export commonly used types for convenience
pub use error::{GameError, GameResult};
pub use game_state::GameState;
pub use grid::Grid;
pub use merge::{apply_move, move_changes, MoveOutcome};
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;
pub use spawner::{Spawn, Spawner};
