//! Validated board parameters.

use crate::BoardError;

/// Largest grid accepted from a client, in cells.
///
/// Each cell costs a few bytes per copy and every undo point holds a full
/// copy, so the grid size is the one knob a client could abuse.
pub const MAX_CELLS: i64 = 1 << 20;

/// Width, height and mine count for a new board.
///
/// The fields are private: the only ways to get a `BoardConfig` are
/// [`BoardConfig::new`], which validates, and `Default`. Code that holds
/// one can rely on `0 <= mines < width * height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    width: usize,
    height: usize,
    mines: usize,
}

impl BoardConfig {
    /// Validates raw parameters as they arrive from a client.
    ///
    /// Signed integers on purpose: a client can type `-3`, and that must
    /// come back as `InvalidDimensions` rather than a parse failure.
    pub fn new(width: i64, height: i64, mines: i64) -> Result<Self, BoardError> {
        let cells = width.checked_mul(height);
        if width <= 0 || height <= 0 || cells.is_none_or(|c| c > MAX_CELLS) {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        let cells = width * height;
        if mines < 0 || mines >= cells {
            return Err(BoardError::InvalidMineCount { mines, cells });
        }

        // All three values are positive and bounded by MAX_CELLS here.
        Ok(Self {
            width: width as usize,
            height: height as usize,
            mines: mines as usize,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn mines(&self) -> usize {
        self.mines
    }

    pub fn cells(&self) -> usize {
        self.width * self.height
    }
}

impl Default for BoardConfig {
    /// 10x10 with 10 mines.
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            mines: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_valid_parameters() {
        let config = BoardConfig::new(4, 3, 2).unwrap();
        assert_eq!(config.width(), 4);
        assert_eq!(config.height(), 3);
        assert_eq!(config.mines(), 2);
        assert_eq!(config.cells(), 12);
    }

    #[test]
    fn test_zero_mines_is_allowed() {
        assert!(BoardConfig::new(3, 3, 0).is_ok());
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        for (w, h) in [(0, 3), (3, 0), (-1, 3), (3, -4)] {
            assert_eq!(
                BoardConfig::new(w, h, 0),
                Err(BoardError::InvalidDimensions { width: w, height: h }),
                "{w}x{h}"
            );
        }
    }

    #[test]
    fn test_rejects_oversized_grid() {
        assert!(matches!(
            BoardConfig::new(MAX_CELLS, 2, 1),
            Err(BoardError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            BoardConfig::new(i64::MAX, i64::MAX, 1),
            Err(BoardError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_rejects_mine_count_out_of_range() {
        assert_eq!(
            BoardConfig::new(2, 2, 4),
            Err(BoardError::InvalidMineCount { mines: 4, cells: 4 })
        );
        assert_eq!(
            BoardConfig::new(2, 2, -1),
            Err(BoardError::InvalidMineCount { mines: -1, cells: 4 })
        );
    }

    #[test]
    fn test_default_is_ten_by_ten() {
        let config = BoardConfig::default();
        assert_eq!((config.width(), config.height(), config.mines()), (10, 10, 10));
    }
}
