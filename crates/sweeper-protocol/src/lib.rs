//! Wire protocol for the sweeper server.
//!
//! This crate defines the "language" that clients and the server speak:
//!
//! - **Commands** ([`Command`]): the text lines a client sends, parsed
//!   into an enum before anything touches the game.
//! - **Snapshots** ([`BoardSnapshot`]): the JSON object the server sends
//!   back after every command.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]): how snapshots become
//!   bytes.
//! - **Errors** ([`ProtocolError`]): what can go wrong on the way.
//!
//! # Architecture
//!
//! ```text
//! Transport (text) → Protocol (Command / BoardSnapshot) → Session (game state)
//! ```

mod codec;
mod command;
mod error;
mod snapshot;

pub use codec::Codec;
#[cfg(feature = "json")]
pub use codec::JsonCodec;
pub use command::{Command, Point, RestartParams};
pub use error::ProtocolError;
pub use snapshot::{BoardSnapshot, CellMarker, Mark, linear_index};
