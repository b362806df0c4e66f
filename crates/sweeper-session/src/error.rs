//! Error types for the session layer.

use sweeper_board::BoardError;

/// Reasons a command was refused.
///
/// None of these end the connection. The session is left exactly as it
/// was before the command, with no undo point saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The board rejected the move or the restart parameters.
    #[error(transparent)]
    Board(#[from] BoardError),

    /// Reveal or flag while the game is over. Only restart, undo and the
    /// reveal-all toggle are accepted until then.
    #[error("game is over; restart or undo to continue")]
    GameOver,

    /// Undo with nothing saved.
    #[error("nothing to undo")]
    EmptyUndoHistory,
}
