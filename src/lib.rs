//! 2048 merge engine (workspace facade crate).
//!
//! This package keeps a stable `game_2048::{core,types}` public API while the
//! implementation lives in dedicated crates under `crates/`.

pub use game_2048_core as core;
pub use game_2048_types as types;
