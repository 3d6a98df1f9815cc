//! Cascade engine / scorer
//!
//! Repeats clear -> settle -> refill -> detect until the board is
//! quiescent, accumulating a score per wave. Wave scores are tiered by
//! the number of positions cleared in that wave (a set union, so a token
//! shared by two crossing runs counts once):
//!
//! - 3 cleared: 10 points per token (30)
//! - 4 cleared: 20 points per token (80)
//! - 5+ cleared: 30 points per token
//!
//! Termination is empirical: with the enforced palette floor of two
//! colors, refills stop producing matches in practice; no formal bound
//! is enforced. Single-color palettes are rejected up front because
//! they would re-match the whole board on every wave.

use match_grid_types::{Pos, TokenColor, MIN_COLORS, RUN3_POINTS, RUN4_POINTS, RUN5_POINTS};

use crate::board::Board;
use crate::detect::{find_matches, MatchSet};
use crate::error::CoreError;
use crate::gravity::{settle_and_refill, Displacement, Spawn};
use crate::rng::SimpleRng;

/// Engine lifecycle. Public calls always return with the engine back at
/// `Idle`; `Resolving` and `Scoring` are only ever observable from
/// within a wave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Resolving,
    Scoring,
}

/// One clear -> settle -> refill iteration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wave {
    /// Positions cleared this wave, row-major order
    pub cleared: Vec<Pos>,
    /// Surviving tokens moved by gravity
    pub displaced: Vec<Displacement>,
    /// Tokens created by the refill
    pub spawned: Vec<Spawn>,
    /// This wave's score contribution
    pub score_delta: u32,
}

/// Full cascade outcome: the ordered wave sequence and the summed score
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CascadeResult {
    pub waves: Vec<Wave>,
    pub score_delta: u32,
}

/// Tiered wave score for `cleared` positions.
///
/// Rewards larger simultaneous clears super-linearly; below 3 the value
/// is 0 (no qualifying run clears fewer than 3 positions).
pub fn wave_score(cleared: usize) -> u32 {
    let n = cleared as u32;
    match cleared {
        0..=2 => 0,
        3 => n * RUN3_POINTS,
        4 => n * RUN4_POINTS,
        _ => n * RUN5_POINTS,
    }
}

/// The cascade state machine: `Idle -> Resolving -> (Scoring ->
/// Resolving)* -> Idle`.
#[derive(Debug, Clone)]
pub struct CascadeEngine {
    phase: Phase,
}

impl CascadeEngine {
    pub fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Run the cascade loop to quiescence.
    ///
    /// `initial` is the match set reported by the swap resolver. Each
    /// wave clears the current matches, settles and refills the board,
    /// then re-detects; the loop ends when detection comes back empty.
    /// On return the board is full and quiescent and the engine is
    /// `Idle` again.
    pub fn resolve(
        &mut self,
        board: &mut Board,
        initial: MatchSet,
        rng: &mut SimpleRng,
        palette: &[TokenColor],
    ) -> Result<CascadeResult, CoreError> {
        if palette.len() < MIN_COLORS {
            return Err(CoreError::PaletteTooSmall);
        }

        self.phase = Phase::Resolving;
        let mut result = CascadeResult::default();
        let mut matches = initial;

        while !matches.is_empty() {
            self.phase = Phase::Scoring;
            let score_delta = wave_score(matches.len());
            self.phase = Phase::Resolving;

            let cleared: Vec<Pos> = matches.iter().copied().collect();
            for &pos in &cleared {
                board.destroy(pos);
            }
            let report = settle_and_refill(board, rng, palette)?;

            result.waves.push(Wave {
                cleared,
                displaced: report.displaced,
                spawned: report.spawned,
                score_delta,
            });
            result.score_delta = result.score_delta.saturating_add(score_delta);

            matches = find_matches(board);
        }

        self.phase = Phase::Idle;
        Ok(result)
    }
}

impl Default for CascadeEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience entry point: resolve one cascade with a fresh engine.
pub fn resolve_cascade(
    board: &mut Board,
    initial_matches: MatchSet,
    rng: &mut SimpleRng,
    palette: &[TokenColor],
) -> Result<CascadeResult, CoreError> {
    CascadeEngine::new().resolve(board, initial_matches, rng, palette)
}
