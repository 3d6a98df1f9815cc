//! Game configuration
//!
//! Everything that shapes a session is explicit here, with defaults
//! matching the classic setup: 8x8 board, all six colors, seed 1.

use match_grid_types::{TokenColor, DEFAULT_COLS, DEFAULT_ROWS, MAX_DIM, MIN_COLORS, MIN_DIM};

use crate::error::CoreError;

/// Parameters for a new game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: u8,
    pub cols: u8,
    /// Colors the refill draws from; order matters for seeded replays
    pub palette: Vec<TokenColor>,
    /// RNG seed; a given (config, swap sequence) pair replays exactly
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            palette: TokenColor::ALL.to_vec(),
            seed: 1,
        }
    }
}

impl GameConfig {
    /// Check dimensions and palette before any board is built.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.rows < MIN_DIM || self.rows > MAX_DIM || self.cols < MIN_DIM || self.cols > MAX_DIM
        {
            return Err(CoreError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.palette.len() < MIN_COLORS {
            return Err(CoreError::PaletteTooSmall);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.rows, 8);
        assert_eq!(config.cols, 8);
        assert_eq!(config.palette.len(), 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_dimensions_out_of_range() {
        let small = GameConfig {
            rows: 2,
            ..GameConfig::default()
        };
        assert_eq!(
            small.validate(),
            Err(CoreError::InvalidDimensions { rows: 2, cols: 8 })
        );

        let big = GameConfig {
            cols: 40,
            ..GameConfig::default()
        };
        assert_eq!(
            big.validate(),
            Err(CoreError::InvalidDimensions { rows: 8, cols: 40 })
        );
    }

    #[test]
    fn test_rejects_palettes_below_two_colors() {
        let empty = GameConfig {
            palette: Vec::new(),
            ..GameConfig::default()
        };
        assert_eq!(empty.validate(), Err(CoreError::PaletteTooSmall));

        // One color would turn every refill into a full-board match
        let single = GameConfig {
            palette: vec![TokenColor::Red],
            ..GameConfig::default()
        };
        assert_eq!(single.validate(), Err(CoreError::PaletteTooSmall));

        let two = GameConfig {
            palette: vec![TokenColor::Red, TokenColor::Blue],
            ..GameConfig::default()
        };
        assert!(two.validate().is_ok());
    }
}
