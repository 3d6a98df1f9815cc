//! Board module - manages the token grid
//!
//! The board is a `rows x cols` grid where each cell is empty or holds a
//! token id into the board-owned arena. Cells use flat row-major storage.
//! Coordinates: (row, col) with row 0 at the top, col 0 at the left.
//!
//! Invariant: an occupied cell's arena token carries a `pos` equal to the
//! cell's coordinate. Only `swap` and the gravity pass move tokens, and
//! both rewrite `pos` in the same step.

use match_grid_types::{Pos, TokenColor, TokenId, MAX_DIM, MIN_COLORS, MIN_DIM};

use crate::error::CoreError;
use crate::rng::SimpleRng;

/// A colored token. Color never changes after creation; position changes
/// only as a consequence of swaps and compaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    color: TokenColor,
    pos: Pos,
}

impl Token {
    pub fn color(&self) -> TokenColor {
        self.color
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }
}

/// The token grid plus the arena that owns every live token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: u8,
    cols: u8,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<Option<TokenId>>,
    /// Arena indexed by `TokenId`. Destroyed tokens leave a tombstone;
    /// ids are never reused within a board's lifetime.
    tokens: Vec<Option<Token>>,
}

impl Board {
    /// Create an empty board. Dimensions must lie in `MIN_DIM..=MAX_DIM`.
    pub fn empty(rows: u8, cols: u8) -> Result<Self, CoreError> {
        Self::validate_dims(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![None; rows as usize * cols as usize],
            tokens: Vec::with_capacity(rows as usize * cols as usize),
        })
    }

    /// Create a board with every cell filled by a uniformly random color
    /// from `palette`.
    ///
    /// Population is purely random, matching the original game: the board
    /// may start with pre-existing runs and carries no guarantee that a
    /// legal move exists. A pre-existing run is simply cleared by the
    /// first productive swap's cascade.
    pub fn populated(
        rows: u8,
        cols: u8,
        palette: &[TokenColor],
        rng: &mut SimpleRng,
    ) -> Result<Self, CoreError> {
        if palette.len() < MIN_COLORS {
            return Err(CoreError::PaletteTooSmall);
        }
        let mut board = Self::empty(rows, cols)?;
        for row in 0..rows {
            for col in 0..cols {
                let color = palette[rng.next_range(palette.len() as u32) as usize];
                board.spawn(Pos::new(row, col), color);
            }
        }
        Ok(board)
    }

    /// Build a board from a grid of colors (row-major, `None` = empty).
    ///
    /// Deterministic construction for tests and tooling. The grid must be
    /// rectangular with supported dimensions.
    pub fn from_colors(grid: &[Vec<Option<TokenColor>>]) -> Result<Self, CoreError> {
        let rows = grid.len();
        let cols = grid.first().map_or(0, Vec::len);
        if rows > MAX_DIM as usize
            || cols > MAX_DIM as usize
            || grid.iter().any(|row| row.len() != cols)
        {
            return Err(CoreError::InvalidDimensions {
                rows: rows.min(u8::MAX as usize) as u8,
                cols: cols.min(u8::MAX as usize) as u8,
            });
        }
        let mut board = Self::empty(rows as u8, cols as u8)?;
        for (row, colors) in grid.iter().enumerate() {
            for (col, color) in colors.iter().enumerate() {
                if let Some(color) = color {
                    board.spawn(Pos::new(row as u8, col as u8), *color);
                }
            }
        }
        Ok(board)
    }

    fn validate_dims(rows: u8, cols: u8) -> Result<(), CoreError> {
        if rows < MIN_DIM || rows > MAX_DIM || cols < MIN_DIM || cols > MAX_DIM {
            return Err(CoreError::InvalidDimensions { rows, cols });
        }
        Ok(())
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Calculate flat index from a position
    #[inline(always)]
    fn index(&self, pos: Pos) -> Option<usize> {
        if pos.row >= self.rows || pos.col >= self.cols {
            return None;
        }
        Some(self.offset(pos))
    }

    /// Flat index for a position already known to be in bounds
    #[inline(always)]
    fn offset(&self, pos: Pos) -> usize {
        debug_assert!(self.in_bounds(pos));
        pos.row as usize * self.cols as usize + pos.col as usize
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Fail fast with `OutOfBounds` for positions off the grid
    pub fn check_bounds(&self, pos: Pos) -> Result<(), CoreError> {
        if self.in_bounds(pos) {
            Ok(())
        } else {
            Err(CoreError::OutOfBounds {
                pos,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Token id at a position; `None` for empty or out-of-bounds cells
    pub fn id_at(&self, pos: Pos) -> Option<TokenId> {
        self.index(pos).and_then(|idx| self.cells[idx])
    }

    /// Token at a position; `None` for empty or out-of-bounds cells
    pub fn get(&self, pos: Pos) -> Option<&Token> {
        self.id_at(pos).and_then(|id| self.token(id))
    }

    /// Look up a live token by id
    pub fn token(&self, id: TokenId) -> Option<&Token> {
        self.tokens.get(id.0 as usize).and_then(Option::as_ref)
    }

    /// True when no cell is empty
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// All grid positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Pos::new(row, col)))
    }

    /// Snapshot of the board as a color grid (row-major, `None` = empty),
    /// for presentation layers and test assertions.
    pub fn color_grid(&self) -> Vec<Vec<Option<TokenColor>>> {
        (0..self.rows)
            .map(|row| {
                (0..self.cols)
                    .map(|col| self.get(Pos::new(row, col)).map(Token::color))
                    .collect()
            })
            .collect()
    }

    /// Create a token in the arena and place it on an empty in-bounds cell.
    pub(crate) fn spawn(&mut self, pos: Pos, color: TokenColor) -> TokenId {
        debug_assert!(self.in_bounds(pos));
        debug_assert!(self.id_at(pos).is_none(), "spawn target must be empty");
        let id = TokenId(self.tokens.len() as u32);
        self.tokens.push(Some(Token { color, pos }));
        let idx = self.offset(pos);
        self.cells[idx] = Some(id);
        id
    }

    /// Empty a cell and destroy its token. Returns the destroyed id.
    pub(crate) fn destroy(&mut self, pos: Pos) -> Option<TokenId> {
        let idx = self.index(pos)?;
        let id = self.cells[idx].take()?;
        self.tokens[id.0 as usize] = None;
        Some(id)
    }

    /// Move a token from an occupied cell to an empty cell, keeping its
    /// stored position in sync. Used by the gravity pass.
    pub(crate) fn relocate(&mut self, from: Pos, to: Pos) {
        debug_assert!(self.id_at(to).is_none(), "relocate target must be empty");
        let from_idx = self.offset(from);
        let to_idx = self.offset(to);
        if let Some(id) = self.cells[from_idx].take() {
            self.cells[to_idx] = Some(id);
            if let Some(token) = self.tokens[id.0 as usize].as_mut() {
                token.pos = to;
            }
        }
    }

    /// Unconditionally exchange the contents of two cells (token or
    /// emptiness) and rewrite each moved token's stored position.
    ///
    /// Adjacency is deliberately not checked here; that is the swap
    /// validator's job. The only guarantee is position/storage
    /// consistency after the call.
    pub fn swap(&mut self, a: Pos, b: Pos) -> Result<(), CoreError> {
        self.check_bounds(a)?;
        self.check_bounds(b)?;
        let a_idx = self.offset(a);
        let b_idx = self.offset(b);
        self.cells.swap(a_idx, b_idx);
        if let Some(id) = self.cells[a_idx] {
            if let Some(token) = self.tokens[id.0 as usize].as_mut() {
                token.pos = a;
            }
        }
        if let Some(id) = self.cells[b_idx] {
            if let Some(token) = self.tokens[id.0 as usize].as_mut() {
                token.pos = b;
            }
        }
        Ok(())
    }

    /// Check the position/storage invariant: every occupied cell's token
    /// reports that cell as its position, and every live arena token is
    /// referenced by exactly one cell.
    pub fn is_consistent(&self) -> bool {
        let mut referenced = 0usize;
        for pos in self.positions() {
            if let Some(id) = self.id_at(pos) {
                referenced += 1;
                match self.token(id) {
                    Some(token) if token.pos == pos => {}
                    _ => return false,
                }
            }
        }
        let live = self.tokens.iter().filter(|slot| slot.is_some()).count();
        referenced == live
    }
}
