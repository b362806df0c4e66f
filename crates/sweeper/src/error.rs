//! Unified error type for the sweeper server.

use sweeper_board::BoardError;
use sweeper_protocol::ProtocolError;
use sweeper_session::SessionError;
use sweeper_transport::TransportError;

/// Top-level error that wraps all crate-specific errors.
///
/// The `#[from]` attribute on each variant generates a `From` impl, so
/// `?` converts sub-crate errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum SweeperError {
    /// A transport-level error (bind, accept, send, recv). Ends the
    /// connection it happened on.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A protocol-level error (encode, decode, malformed command).
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// A command the session refused.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Invalid board parameters, e.g. a bad default board at startup.
    #[error(transparent)]
    Board(#[from] BoardError),
}
