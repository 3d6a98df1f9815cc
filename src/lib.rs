//! Match Grid (workspace facade crate).
//!
//! This package keeps a single `match_grid::{core,types}` public API while
//! the implementation lives in dedicated crates under `crates/`.

pub use match_grid_core as core;
pub use match_grid_types as types;
