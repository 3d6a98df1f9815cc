//! Error types for the rules engine.
//!
//! All errors are local and recoverable; no failure path leaves the
//! board partially mutated.

use match_grid_types::{Pos, MAX_DIM, MIN_COLORS, MIN_DIM};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Swap request with identical or non-adjacent positions.
    #[error("positions {a} and {b} cannot be swapped: not grid-adjacent")]
    InvalidSwap { a: Pos, b: Pos },

    /// A position referenced a cell outside the grid.
    #[error("position {pos} is outside the {rows}x{cols} grid")]
    OutOfBounds { pos: Pos, rows: u8, cols: u8 },

    /// Board dimensions on which match detection cannot work.
    #[error("board dimensions {rows}x{cols} are outside the supported range {min}..={max} per side", min = MIN_DIM, max = MAX_DIM)]
    InvalidDimensions { rows: u8, cols: u8 },

    /// Refill needs at least two colors to draw from; one color would
    /// match the whole board on every wave.
    #[error("color palette must contain at least {min} colors", min = MIN_COLORS)]
    PaletteTooSmall,
}
