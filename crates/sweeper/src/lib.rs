//! # Sweeper
//!
//! Turn-based Minesweeper served over WebSocket.
//!
//! A client connects, receives the board as JSON, and sends one-line
//! text commands (`! (x,y)` to reveal, `? (x,y)` to flag, `u` to undo,
//! `s w,h,mines` to restart, `%` to show the whole board). Every command
//! is answered with the updated board. Each connection plays its own game;
//! nothing is shared between connections.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sweeper::prelude::*;
//!
//! # async fn start() -> Result<(), SweeperError> {
//! let server = SweeperServerBuilder::new()
//!     .bind("127.0.0.1:8081")
//!     .session_config(SessionConfig {
//!         default_board: BoardConfig::new(16, 16, 40)?,
//!         ..SessionConfig::default()
//!     })
//!     .build()
//!     .await?;
//! server.run().await
//! # }
//! ```

mod error;
mod handler;
mod server;

pub use error::SweeperError;
pub use handler::handle_connection;
pub use server::{DEFAULT_BIND_ADDR, SweeperServer, SweeperServerBuilder};

/// Everything needed to run a server or drive a session by hand.
pub mod prelude {
    pub use crate::{
        DEFAULT_BIND_ADDR, SweeperError, SweeperServer, SweeperServerBuilder, handle_connection,
    };
    pub use sweeper_board::{Board, BoardConfig, BoardError, Coord};
    pub use sweeper_protocol::{
        BoardSnapshot, CellMarker, Codec, Command, JsonCodec, Mark, ProtocolError,
    };
    pub use sweeper_session::{Outcome, Session, SessionConfig, SessionError, SessionState};
    pub use sweeper_transport::{Connection, ConnectionId, TransportError};
}
