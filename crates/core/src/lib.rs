//! Core match-3 rules - pure, deterministic, and testable
//!
//! This crate contains the whole board state machine: swap legality,
//! match detection, gravity, refill, and cascade scoring. It has
//! **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed and swap sequence replay identically
//! - **Testable**: Every rule covered by unit tests
//! - **Portable**: Runs headless, in a terminal, or behind any renderer
//!
//! # Module Structure
//!
//! - [`board`]: Grid of colored tokens with stable identities
//! - [`detect`]: Row/column scan for same-color runs of three or more
//! - [`gravity`]: Column compaction and random refill
//! - [`swap`]: Adjacent-swap validation with automatic revert
//! - [`cascade`]: Clear/settle/refill loop with tiered wave scoring
//! - [`game`]: Session facade tying board, RNG, engine, and score together
//! - [`config`]: Explicit session parameters with classic defaults
//! - [`rng`]: Seedable linear congruential generator
//!
//! # Game Rules
//!
//! - A swap is legal between two orthogonally adjacent cells
//! - A swap that creates no run is reverted and costs nothing
//! - Runs of 3+ equal-color tokens clear; crossing runs clear as a union
//! - Survivors fall straight down, new tokens fill from the top
//! - Cleared waves score 10/20/30 points per token for 3/4/5+ clears
//! - Cascades repeat until no run remains
//!
//! # Example
//!
//! ```
//! use match_grid_core::{Game, GameConfig};
//! use match_grid_core::types::Pos;
//!
//! let mut game = Game::new(GameConfig::default())?;
//! let resolution = game.request_swap(Pos::new(4, 3), Pos::new(4, 4))?;
//! if resolution.outcome.applied {
//!     println!("scored {} points", game.score());
//! }
//! # Ok::<(), match_grid_core::CoreError>(())
//! ```

pub mod board;
pub mod cascade;
pub mod config;
pub mod detect;
pub mod error;
pub mod game;
pub mod gravity;
pub mod rng;
pub mod swap;

pub use match_grid_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Token};
pub use cascade::{resolve_cascade, CascadeEngine, CascadeResult, Phase, Wave};
pub use config::GameConfig;
pub use detect::{find_matches, MatchSet};
pub use error::CoreError;
pub use game::{Game, SwapResolution};
pub use gravity::{refill, settle, settle_and_refill, Displacement, RefillReport, Spawn};
pub use rng::SimpleRng;
pub use swap::{adjacent, request_swap, SwapOutcome};
