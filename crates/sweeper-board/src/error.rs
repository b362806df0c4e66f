//! Error types for the board engine.

/// Errors that can occur while building or playing a board.
///
/// `Copy` because every variant carries only plain integers, which lets
/// callers log an error and still return it without cloning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Width or height is zero, negative, or the grid is too large.
    #[error("invalid board dimensions {width}x{height}")]
    InvalidDimensions { width: i64, height: i64 },

    /// The mine count is negative or leaves no safe cell.
    #[error("invalid mine count {mines} for a board of {cells} cells")]
    InvalidMineCount { mines: i64, cells: i64 },

    /// A coordinate lies outside the grid.
    #[error("coordinate ({x}, {y}) is outside the board")]
    OutOfBounds { x: i64, y: i64 },

    /// The same mine coordinate was listed twice in a fixed layout.
    #[error("duplicate mine at ({x}, {y})")]
    DuplicateMine { x: usize, y: usize },
}
