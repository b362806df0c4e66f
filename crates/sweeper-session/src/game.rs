//! One game: the board plus everything the player has done to it.
//!
//! A [`Game`] is the unit the undo history stores. Cloning it is a deep
//! copy, and two games compare equal only if board, visibility, and the
//! game-over flag all match.

use sweeper_board::{Board, BoardView, CellSet, Coord, RevealOutcome};
use sweeper_protocol::BoardSnapshot;

use crate::SessionError;

/// What a successful command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Safe cells were revealed and the game goes on.
    Revealed { newly_revealed: usize },
    /// The target cell was already revealed. No undo point was saved.
    AlreadyRevealed,
    /// A mine was revealed. The game is over.
    HitMine,
    /// The last safe cell was revealed. The game is over and the whole
    /// board is shown.
    Won,
    /// A flag was added (`true`) or removed (`false`).
    Flagged { flagged: bool },
    RevealAllToggled { reveal_all: bool },
    /// A new board replaced the old one and the undo history was cleared.
    Restarted,
    /// The previous undo point was restored.
    Undone,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    revealed: CellSet,
    flagged: CellSet,
    reveal_all: bool,
    game_over: bool,
}

impl Game {
    /// A fresh game on `board`: nothing revealed, nothing flagged.
    pub fn new(board: Board) -> Self {
        Self {
            revealed: board.empty_set(),
            flagged: board.empty_set(),
            board,
            reveal_all: false,
            game_over: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn revealed(&self) -> &CellSet {
        &self.revealed
    }

    pub fn flagged(&self) -> &CellSet {
        &self.flagged
    }

    pub fn reveal_all(&self) -> bool {
        self.reveal_all
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    pub fn is_won(&self) -> bool {
        self.board.is_won(&self.revealed)
    }

    pub fn is_lost(&self) -> bool {
        self.board.is_lost(&self.revealed)
    }

    /// Resolves client coordinates and checks the game still accepts
    /// moves. Runs before any undo point is saved.
    pub(crate) fn target(&self, x: i64, y: i64) -> Result<Coord, SessionError> {
        if self.game_over {
            return Err(SessionError::GameOver);
        }
        Ok(self.board.locate(x, y)?)
    }

    /// Reveals `coord` and settles win or loss.
    pub(crate) fn reveal(&mut self, coord: Coord) -> Result<Outcome, SessionError> {
        let revealed = self.board.reveal_cell(&mut self.revealed, coord)?;
        let outcome = match revealed {
            RevealOutcome::AlreadyRevealed => Outcome::AlreadyRevealed,
            RevealOutcome::HitMine => {
                self.game_over = true;
                Outcome::HitMine
            }
            RevealOutcome::Revealed { .. } if self.is_won() => {
                self.reveal_all = true;
                self.game_over = true;
                Outcome::Won
            }
            RevealOutcome::Revealed { newly_revealed } => Outcome::Revealed { newly_revealed },
        };
        Ok(outcome)
    }

    pub(crate) fn toggle_flag(&mut self, coord: Coord) -> Result<Outcome, SessionError> {
        let flagged = self.board.toggle_flag(&mut self.flagged, coord)?;
        Ok(Outcome::Flagged { flagged })
    }

    pub(crate) fn toggle_reveal_all(&mut self) -> Outcome {
        self.reveal_all = !self.reveal_all;
        Outcome::RevealAllToggled {
            reveal_all: self.reveal_all,
        }
    }

    pub fn view(&self) -> BoardView {
        self.board
            .snapshot(&self.revealed, &self.flagged, self.reveal_all)
    }

    /// The wire snapshot of this game.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::new(
            &self.view(),
            self.is_won(),
            self.is_lost(),
            self.board.mine_count(),
            self.flagged.len(),
        )
    }
}
