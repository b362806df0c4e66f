//! Minesweeper board engine.
//!
//! This crate owns the rules and nothing else. It knows where the mines
//! are, how many mines touch each cell, how a reveal floods across empty
//! ground, and whether a game is won or lost. It does no I/O and keeps no
//! history; the session layer above it does that.
//!
//! # State split
//!
//! ```text
//! Board (immutable after creation)      CellSet revealed / flagged (mutable)
//!   width, height, mine layout    ←──     owned by the caller, passed in
//!   neighbour counts                      to reveal_cell / toggle_flag
//! ```
//!
//! Keeping the mutable part outside the board means a full game can be
//! copied for undo by cloning three small values.

mod board;
mod cell_set;
mod config;
mod error;
mod types;
mod view;

pub use board::{Board, Cell, RevealOutcome};
pub use cell_set::CellSet;
pub use config::{BoardConfig, MAX_CELLS};
pub use error::BoardError;
pub use types::{Coord, Neighbors};
pub use view::{BoardView, CellView};
