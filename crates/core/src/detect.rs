//! Match detector - scans the board for same-color runs
//!
//! A run is >=3 contiguous, collinear tokens of strictly equal color.
//! Horizontal and vertical scans are unioned into one position set, so a
//! token sitting on the crossing of two runs appears exactly once.
//! An empty result set is the cascade termination condition.

use std::collections::BTreeSet;

use arrayvec::ArrayVec;
use match_grid_types::{Pos, TokenColor, MAX_DIM, MIN_RUN};

use crate::board::{Board, Token};

/// Set of matched positions, ordered row-major for deterministic iteration
pub type MatchSet = BTreeSet<Pos>;

/// Find every position participating in a qualifying run.
///
/// Runs longer than 3 are captured whole: a run of length 5 contributes
/// all 5 positions. Empty cells never match and break runs.
pub fn find_matches(board: &Board) -> MatchSet {
    let mut matches = MatchSet::new();
    for row in 0..board.rows() {
        scan_line(
            board,
            (0..board.cols()).map(|col| Pos::new(row, col)),
            &mut matches,
        );
    }
    for col in 0..board.cols() {
        scan_line(
            board,
            (0..board.rows()).map(|row| Pos::new(row, col)),
            &mut matches,
        );
    }
    matches
}

/// Walk one row or column, extending the current run while the color
/// holds, flushing it whenever the color changes or a cell is empty.
fn scan_line(board: &Board, line: impl Iterator<Item = Pos>, out: &mut MatchSet) {
    let mut run: ArrayVec<Pos, { MAX_DIM as usize }> = ArrayVec::new();
    let mut run_color: Option<TokenColor> = None;

    for pos in line {
        let color = board.get(pos).map(Token::color);
        if color.is_some() && color == run_color {
            run.push(pos);
        } else {
            flush(&run, out);
            run.clear();
            run_color = color;
            if color.is_some() {
                run.push(pos);
            }
        }
    }
    flush(&run, out);
}

fn flush(run: &[Pos], out: &mut MatchSet) {
    if run.len() >= MIN_RUN {
        out.extend(run.iter().copied());
    }
}
