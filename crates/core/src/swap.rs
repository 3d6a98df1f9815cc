//! Swap validator & resolver
//!
//! Validates a proposed swap (bounds, distinctness, adjacency), applies
//! it, and probes for matches. An unproductive swap is reverted before
//! returning, so the caller only ever observes the before/after states,
//! never the transient post-swap arrangement.

use match_grid_types::Pos;

use crate::board::Board;
use crate::detect::{find_matches, MatchSet};
use crate::error::CoreError;

/// Pure adjacency helper, exposed for the input layer's click pairing
pub fn adjacent(a: Pos, b: Pos) -> bool {
    a.is_adjacent(b)
}

/// Result of a swap request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapOutcome {
    /// True if the swap produced at least one match and was kept
    pub applied: bool,
    /// Matches present on the board right after the swap (whole-board
    /// detection, so pre-existing runs count as productive too)
    pub initial_matches: MatchSet,
}

/// Validate and apply a swap request.
///
/// Fails with `OutOfBounds` or `InvalidSwap` before touching the board.
/// A swap that yields no match is swapped back, leaving the board
/// observably unchanged, and reported as `applied: false`.
pub fn request_swap(board: &mut Board, a: Pos, b: Pos) -> Result<SwapOutcome, CoreError> {
    board.check_bounds(a)?;
    board.check_bounds(b)?;
    if !adjacent(a, b) {
        return Err(CoreError::InvalidSwap { a, b });
    }

    board.swap(a, b)?;
    let matches = find_matches(board);
    if matches.is_empty() {
        // Revert; end-to-end the board is untouched
        board.swap(a, b)?;
        return Ok(SwapOutcome {
            applied: false,
            initial_matches: MatchSet::new(),
        });
    }

    Ok(SwapOutcome {
        applied: true,
        initial_matches: matches,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use match_grid_types::TokenColor::*;

    /// 4x4 board with no runs; swapping (2,2) and (3,2) pulls the Red
    /// token up to complete a horizontal Red run on row 2.
    fn productive_board() -> Board {
        Board::from_colors(&[
            vec![Some(Blue), Some(Green), Some(Blue), Some(Yellow)],
            vec![Some(Green), Some(Yellow), Some(Green), Some(Blue)],
            vec![Some(Red), Some(Red), Some(Blue), Some(Yellow)],
            vec![Some(Green), Some(Blue), Some(Red), Some(Green)],
        ])
        .unwrap()
    }

    #[test]
    fn test_non_adjacent_swap_rejected_without_mutation() {
        let mut board = productive_board();
        let before = board.clone();

        let err = request_swap(&mut board, Pos::new(0, 0), Pos::new(0, 2)).unwrap_err();
        assert!(matches!(err, CoreError::InvalidSwap { .. }));
        assert_eq!(board, before);

        // Diagonal neighbors are not adjacent either
        let err = request_swap(&mut board, Pos::new(0, 0), Pos::new(1, 1)).unwrap_err();
        assert!(matches!(err, CoreError::InvalidSwap { .. }));
        assert_eq!(board, before);
    }

    #[test]
    fn test_identical_positions_rejected() {
        let mut board = productive_board();
        let before = board.clone();
        let err = request_swap(&mut board, Pos::new(1, 1), Pos::new(1, 1)).unwrap_err();
        assert!(matches!(err, CoreError::InvalidSwap { .. }));
        assert_eq!(board, before);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut board = productive_board();
        let before = board.clone();
        let err = request_swap(&mut board, Pos::new(3, 3), Pos::new(3, 4)).unwrap_err();
        assert!(matches!(err, CoreError::OutOfBounds { .. }));
        assert_eq!(board, before);
    }

    #[test]
    fn test_productive_swap_stays_applied() {
        let mut board = productive_board();

        let outcome = request_swap(&mut board, Pos::new(2, 2), Pos::new(3, 2)).unwrap();

        assert!(outcome.applied);
        let expected: MatchSet = [Pos::new(2, 0), Pos::new(2, 1), Pos::new(2, 2)]
            .into_iter()
            .collect();
        assert_eq!(outcome.initial_matches, expected);

        // The swap is left on the board
        assert_eq!(board.get(Pos::new(2, 2)).unwrap().color(), Red);
        assert_eq!(board.get(Pos::new(3, 2)).unwrap().color(), Blue);
        assert!(board.is_consistent());
    }

    #[test]
    fn test_unproductive_swap_reverts_bit_identical() {
        let mut board = productive_board();
        let before = board.clone();

        // Swapping (0,0) and (0,1) creates no run anywhere
        let outcome = request_swap(&mut board, Pos::new(0, 0), Pos::new(0, 1)).unwrap();

        assert!(!outcome.applied);
        assert!(outcome.initial_matches.is_empty());
        assert_eq!(board, before);
    }

    #[test]
    fn test_same_color_swap_is_unproductive() {
        // (2,0) and (2,1) are both Red; exchanging them cannot create a
        // run that was not already there
        let mut board = productive_board();
        let before = board.clone();

        let outcome = request_swap(&mut board, Pos::new(2, 0), Pos::new(2, 1)).unwrap();

        assert!(!outcome.applied);
        assert_eq!(board.color_grid(), before.color_grid());
    }

    #[test]
    fn test_pre_existing_match_counts_as_productive() {
        // Row 0 already holds a Red run; any legal swap elsewhere is
        // reported productive with that run in the match set
        let mut board = Board::from_colors(&[
            vec![Some(Red), Some(Red), Some(Red), Some(Green)],
            vec![Some(Green), Some(Yellow), Some(Blue), Some(Yellow)],
            vec![Some(Blue), Some(Green), Some(Purple), Some(Green)],
            vec![Some(Green), Some(Yellow), Some(Blue), Some(Yellow)],
        ])
        .unwrap();

        let outcome = request_swap(&mut board, Pos::new(2, 0), Pos::new(3, 0)).unwrap();

        assert!(outcome.applied);
        assert!(outcome.initial_matches.contains(&Pos::new(0, 0)));
        assert_eq!(outcome.initial_matches.len(), 3);
    }
}
