//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, UI rendering, headless drivers).
//!
//! # Board Dimensions
//!
//! The standard board is 8x8; any `rows x cols` grid in the supported
//! range works:
//!
//! - **Minimum side**: 3 (a 3-run must be geometrically possible)
//! - **Maximum side**: 32 (bounds the detector's fixed-capacity scan buffers)
//!
//! # Scoring Constants
//!
//! Wave scores are tiered by the number of positions cleared in the wave,
//! with a per-token multiplier:
//!
//! | Constant | Value | Applies to |
//! |----------|-------|------------|
//! | `RUN3_POINTS` | 10 | waves clearing exactly 3 positions |
//! | `RUN4_POINTS` | 20 | waves clearing exactly 4 positions |
//! | `RUN5_POINTS` | 30 | waves clearing 5 or more positions |

use std::fmt;

/// Default board dimensions
pub const DEFAULT_ROWS: u8 = 8;
pub const DEFAULT_COLS: u8 = 8;

/// Smallest supported board side
pub const MIN_DIM: u8 = 3;
/// Largest supported board side
pub const MAX_DIM: u8 = 32;

/// Minimum run length that qualifies as a match
pub const MIN_RUN: usize = 3;

/// Smallest usable palette. With a single color every refill recreates a
/// full-board match, so the cascade loop could never settle.
pub const MIN_COLORS: usize = 2;

/// Per-token score multipliers, tiered by wave size (positions cleared)
pub const RUN3_POINTS: u32 = 10;
pub const RUN4_POINTS: u32 = 20;
pub const RUN5_POINTS: u32 = 30;

/// Token colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenColor {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    Orange,
}

impl TokenColor {
    /// The full palette, in canonical order
    pub const ALL: [TokenColor; 6] = [
        TokenColor::Red,
        TokenColor::Green,
        TokenColor::Blue,
        TokenColor::Yellow,
        TokenColor::Purple,
        TokenColor::Orange,
    ];

    /// Parse color from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" => Some(TokenColor::Red),
            "green" => Some(TokenColor::Green),
            "blue" => Some(TokenColor::Blue),
            "yellow" => Some(TokenColor::Yellow),
            "purple" => Some(TokenColor::Purple),
            "orange" => Some(TokenColor::Orange),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenColor::Red => "red",
            TokenColor::Green => "green",
            TokenColor::Blue => "blue",
            TokenColor::Yellow => "yellow",
            TokenColor::Purple => "purple",
            TokenColor::Orange => "orange",
        }
    }
}

impl fmt::Display for TokenColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grid coordinate, row 0 at the top, col 0 at the left.
///
/// `Ord` is derived (row-major) so position sets iterate deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to another position
    pub fn manhattan(&self, other: Pos) -> u16 {
        let dr = (self.row as i16 - other.row as i16).unsigned_abs();
        let dc = (self.col as i16 - other.col as i16).unsigned_abs();
        dr + dc
    }

    /// True if the two positions are grid-adjacent (Manhattan distance exactly 1)
    pub fn is_adjacent(&self, other: Pos) -> bool {
        self.manhattan(other) == 1
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Stable token identity.
///
/// Ids are assigned monotonically per board and never reused, so
/// displacement and spawn records from different waves cannot alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenId(pub u32);

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
