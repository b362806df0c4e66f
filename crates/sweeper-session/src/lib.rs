//! Game sessions for the sweeper server.
//!
//! A session is everything one connection plays with:
//!
//! 1. **The game** ([`Game`]): board, revealed and flagged cells, the
//!    reveal-all toggle, and whether the game is over
//! 2. **Undo history**: full copies of earlier games, one per change
//! 3. **Command rules** ([`Session::apply`]): which commands run in which
//!    [`SessionState`], and what each one saves
//!
//! # How it fits in the stack
//!
//! ```text
//! Server (above)   ← owns one Session per connection, sends its snapshot
//!     ↕
//! Session (this crate)
//!     ↕
//! Protocol + Board (below)  ← Command / BoardSnapshot, and the rules
//! ```

mod error;
mod game;
mod session;

pub use error::SessionError;
pub use game::{Game, Outcome};
pub use session::{Session, SessionConfig, SessionState};
