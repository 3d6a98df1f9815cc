//! Compactor/refiller - closes the gaps left by cleared tokens
//!
//! Gravity works per column, independently: surviving tokens collapse to
//! the bottom preserving their relative vertical order, then every empty
//! cell is filled top-down with a freshly created random token.
//!
//! Moved tokens and newly created tokens are reported separately, so a
//! presentation layer can animate gravity and appearance distinctly.

use match_grid_types::{Pos, TokenColor, TokenId, MIN_COLORS};

use crate::board::Board;
use crate::error::CoreError;
use crate::rng::SimpleRng;

/// One surviving token's gravity move: where it was and where it landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Displacement {
    pub token: TokenId,
    pub from: Pos,
    pub to: Pos,
}

/// One refill-created token and its final position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawn {
    pub token: TokenId,
    pub pos: Pos,
    pub color: TokenColor,
}

/// Combined report of one settle + refill pass
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RefillReport {
    pub displaced: Vec<Displacement>,
    pub spawned: Vec<Spawn>,
}

/// Collapse every column downward, closing all gaps.
///
/// Emits one displacement record per moved token. Columns are processed
/// left to right, tokens within a column bottom-up (two-pointer, the
/// same shape as row compaction in line-clearing games).
pub fn settle(board: &mut Board) -> Vec<Displacement> {
    let mut displaced = Vec::new();
    for col in 0..board.cols() {
        let mut write = board.rows();
        for row in (0..board.rows()).rev() {
            let from = Pos::new(row, col);
            if let Some(id) = board.id_at(from) {
                write -= 1;
                if write != row {
                    let to = Pos::new(write, col);
                    board.relocate(from, to);
                    displaced.push(Displacement {
                        token: id,
                        from,
                        to,
                    });
                }
            }
        }
    }
    displaced
}

/// Fill every empty cell (top-down, row-major) with a uniformly random
/// color from `palette`. Afterwards the board has zero empty cells.
pub fn refill(
    board: &mut Board,
    rng: &mut SimpleRng,
    palette: &[TokenColor],
) -> Result<Vec<Spawn>, CoreError> {
    if palette.len() < MIN_COLORS {
        return Err(CoreError::PaletteTooSmall);
    }
    let mut spawned = Vec::new();
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            let pos = Pos::new(row, col);
            if board.id_at(pos).is_none() {
                let color = palette[rng.next_range(palette.len() as u32) as usize];
                let token = board.spawn(pos, color);
                spawned.push(Spawn { token, pos, color });
            }
        }
    }
    Ok(spawned)
}

/// One full gravity pass: settle, then refill.
pub fn settle_and_refill(
    board: &mut Board,
    rng: &mut SimpleRng,
    palette: &[TokenColor],
) -> Result<RefillReport, CoreError> {
    if palette.len() < MIN_COLORS {
        return Err(CoreError::PaletteTooSmall);
    }
    let displaced = settle(board);
    let spawned = refill(board, rng, palette)?;
    Ok(RefillReport { displaced, spawned })
}
