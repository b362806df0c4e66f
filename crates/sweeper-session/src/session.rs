//! The per-connection session: current game, undo history, and the rules
//! for which commands may run when.
//!
//! ```text
//!            reveal mine / clear board
//!   Playing ───────────────────────────→ GameOver
//!      ↑                                    │
//!      └──────── restart ── or ── undo ─────┘
//! ```
//!
//! Every command that is about to change the game first pushes a full
//! copy of the current [`Game`] onto the history. Undo pops that copy and
//! puts it back wholesale. A command that fails validation, or turns out
//! to be a no-op, never pushes anything.

use std::collections::VecDeque;
use std::fmt;

use rand::SeedableRng;
use rand::rngs::StdRng;
use sweeper_board::{Board, BoardConfig};
use sweeper_protocol::{BoardSnapshot, Command, Point, RestartParams};

use crate::{Game, Outcome, SessionError};

// ---------------------------------------------------------------------------
// SessionConfig
// ---------------------------------------------------------------------------

/// Configuration shared by every session a server creates.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Board used for a new connection and for a bare `s` command.
    pub default_board: BoardConfig,

    /// Upper bound on saved undo points. `None` keeps every one for the
    /// life of the connection; `Some(n)` drops the oldest beyond `n`.
    pub max_undo: Option<usize>,

    /// Seed for mine placement. `None` seeds from the OS, so each
    /// session gets different boards.
    pub seed: Option<u64>,
}

// ---------------------------------------------------------------------------
// SessionState
// ---------------------------------------------------------------------------

/// Whether the current game still accepts reveal and flag commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Playing,
    GameOver,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Playing => f.write_str("playing"),
            Self::GameOver => f.write_str("game over"),
        }
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// One player's game and its undo history.
///
/// Owned by a single connection task; nothing here is shared, so there
/// is no locking.
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    game: Game,
    history: VecDeque<Game>,
    rng: StdRng,
}

impl Session {
    /// Starts a session on a fresh board of the default size.
    pub fn new(config: SessionConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let board = Board::generate(config.default_board, &mut rng);
        Self::start(config, board, rng)
    }

    /// Starts a session on a board chosen by the caller.
    pub fn with_board(config: SessionConfig, board: Board) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::start(config, board, rng)
    }

    fn start(config: SessionConfig, board: Board, rng: StdRng) -> Self {
        Self {
            config,
            game: Game::new(board),
            history: VecDeque::new(),
            rng,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn state(&self) -> SessionState {
        if self.game.is_over() {
            SessionState::GameOver
        } else {
            SessionState::Playing
        }
    }

    /// Number of undo points currently saved.
    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    /// The snapshot to send to the client.
    pub fn snapshot(&self) -> BoardSnapshot {
        self.game.snapshot()
    }

    /// Runs one parsed command.
    ///
    /// On `Err` the session is unchanged: validation happens before the
    /// undo point is saved and before the game is touched.
    pub fn apply(&mut self, command: Command) -> Result<Outcome, SessionError> {
        let outcome = match command {
            Command::Reveal(point) => self.reveal(point)?,
            Command::Flag(point) => self.flag(point)?,
            Command::ToggleRevealAll => {
                self.save();
                self.game.toggle_reveal_all()
            }
            Command::Restart(params) => self.restart(params)?,
            Command::Undo => self.undo()?,
        };

        match outcome {
            Outcome::HitMine => tracing::info!("mine hit, game over"),
            Outcome::Won => tracing::info!("board cleared, game won"),
            _ => tracing::debug!(?outcome, state = %self.state(), "command applied"),
        }
        Ok(outcome)
    }

    fn reveal(&mut self, point: Point) -> Result<Outcome, SessionError> {
        let coord = self.game.target(point.x, point.y)?;
        if self.game.revealed().contains(coord) {
            return Ok(Outcome::AlreadyRevealed);
        }
        self.save();
        self.game.reveal(coord)
    }

    fn flag(&mut self, point: Point) -> Result<Outcome, SessionError> {
        let coord = self.game.target(point.x, point.y)?;
        self.save();
        self.game.toggle_flag(coord)
    }

    /// Replaces the game with a new board. The old history goes with it.
    fn restart(&mut self, params: Option<RestartParams>) -> Result<Outcome, SessionError> {
        let config = match params {
            Some(p) => BoardConfig::new(p.width, p.height, p.mines)?,
            None => self.config.default_board,
        };
        let board = Board::generate(config, &mut self.rng);

        self.history.clear();
        self.game = Game::new(board);
        tracing::info!(
            width = config.width(),
            height = config.height(),
            mines = config.mines(),
            "game restarted"
        );
        Ok(Outcome::Restarted)
    }

    fn undo(&mut self) -> Result<Outcome, SessionError> {
        let previous = self
            .history
            .pop_back()
            .ok_or(SessionError::EmptyUndoHistory)?;
        self.game = previous;
        Ok(Outcome::Undone)
    }

    /// Pushes a copy of the current game, evicting the oldest copy when
    /// the history is capped.
    fn save(&mut self) {
        if let Some(max) = self.config.max_undo {
            if max == 0 {
                return;
            }
            while self.history.len() >= max {
                self.history.pop_front();
            }
        }
        self.history.push_back(self.game.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweeper_board::Coord;

    fn board(width: i64, height: i64, mines: &[(usize, usize)]) -> Board {
        let mines: Vec<Coord> = mines.iter().copied().map(Coord::from).collect();
        Board::from_mines(width, height, &mines).unwrap()
    }

    fn session(width: i64, height: i64, mines: &[(usize, usize)]) -> Session {
        let config = SessionConfig {
            seed: Some(1),
            ..SessionConfig::default()
        };
        Session::with_board(config, board(width, height, mines))
    }

    fn reveal(x: i64, y: i64) -> Command {
        Command::Reveal(Point { x, y })
    }

    fn flag(x: i64, y: i64) -> Command {
        Command::Flag(Point { x, y })
    }

    #[test]
    fn test_new_session_uses_default_board() {
        let s = Session::new(SessionConfig::default());
        let board = s.game().board();
        assert_eq!((board.width(), board.height(), board.mine_count()), (10, 10, 10));
        assert_eq!(s.state(), SessionState::Playing);
        assert_eq!(s.undo_depth(), 0);
    }

    #[test]
    fn test_zero_mine_board_is_won_by_first_reveal() {
        let mut s = session(3, 3, &[]);

        assert_eq!(s.apply(reveal(1, 1)), Ok(Outcome::Won));

        assert_eq!(s.state(), SessionState::GameOver);
        let snap = s.snapshot();
        assert!(snap.winning_condition);
        assert!(!snap.loosing_condition);
        assert!(s.game().reveal_all());
    }

    #[test]
    fn test_numbered_reveal_keeps_playing() {
        let mut s = session(2, 2, &[(0, 0)]);

        assert_eq!(
            s.apply(reveal(1, 1)),
            Ok(Outcome::Revealed { newly_revealed: 1 })
        );

        assert_eq!(s.game().revealed().len(), 1);
        assert_eq!(s.state(), SessionState::Playing);
        assert_eq!(s.undo_depth(), 1);
    }

    #[test]
    fn test_game_over_blocks_reveal_and_flag_only() {
        let mut s = session(2, 2, &[(0, 0)]);
        s.apply(reveal(0, 0)).unwrap();
        let depth = s.undo_depth();

        assert_eq!(s.apply(reveal(1, 1)), Err(SessionError::GameOver));
        assert_eq!(s.apply(flag(1, 1)), Err(SessionError::GameOver));
        assert_eq!(s.undo_depth(), depth, "rejected commands save nothing");

        assert!(s.apply(Command::ToggleRevealAll).is_ok());
        assert_eq!(s.apply(Command::Undo), Ok(Outcome::Undone));
        assert_eq!(s.apply(Command::Undo), Ok(Outcome::Undone));
        assert_eq!(s.state(), SessionState::Playing);
    }

    #[test]
    fn test_already_revealed_saves_no_undo_point() {
        let mut s = session(2, 2, &[(0, 0)]);
        s.apply(reveal(1, 0)).unwrap();

        assert_eq!(s.apply(reveal(1, 0)), Ok(Outcome::AlreadyRevealed));
        assert_eq!(s.undo_depth(), 1);
    }

    #[test]
    fn test_out_of_bounds_changes_nothing() {
        let mut s = session(2, 2, &[(0, 0)]);
        let before = s.game().clone();

        assert!(matches!(
            s.apply(reveal(5, 0)),
            Err(SessionError::Board(_))
        ));
        assert!(matches!(s.apply(flag(-1, 0)), Err(SessionError::Board(_))));

        assert_eq!(s.game(), &before);
        assert_eq!(s.undo_depth(), 0);
    }

    #[test]
    fn test_undo_is_inverse_of_every_mutating_command() {
        let commands = [
            reveal(1, 1),
            reveal(0, 0),
            flag(0, 1),
            flag(2, 2),
            Command::ToggleRevealAll,
        ];
        for command in commands {
            let mut s = session(3, 3, &[(0, 0), (2, 2)]);
            s.apply(flag(2, 2)).unwrap();
            let before = s.game().clone();

            s.apply(command).unwrap();
            assert_ne!(s.game(), &before, "{command:?} should change the game");
            s.apply(Command::Undo).unwrap();

            assert_eq!(s.game(), &before, "undo after {command:?}");
        }
    }

    #[test]
    fn test_undo_restores_game_over_flag() {
        let mut s = session(2, 2, &[(0, 0)]);
        s.apply(reveal(0, 0)).unwrap();
        s.apply(Command::ToggleRevealAll).unwrap();

        s.apply(Command::Undo).unwrap();

        assert_eq!(s.state(), SessionState::GameOver);
    }

    #[test]
    fn test_undo_with_empty_history_is_soft() {
        let mut s = session(2, 2, &[]);
        let before = s.game().clone();

        assert_eq!(s.apply(Command::Undo), Err(SessionError::EmptyUndoHistory));
        assert_eq!(s.game(), &before);
    }

    #[test]
    fn test_flag_twice_restores_flag_set() {
        let mut s = session(3, 3, &[(1, 1)]);
        s.apply(flag(0, 2)).unwrap();
        s.apply(flag(0, 2)).unwrap();
        assert!(s.game().flagged().is_empty());
        assert_eq!(s.snapshot().flags, 0);
    }

    #[test]
    fn test_restart_replaces_board_and_clears_history() {
        let mut s = session(2, 2, &[(0, 0)]);
        s.apply(flag(1, 1)).unwrap();
        s.apply(reveal(0, 0)).unwrap();
        assert_eq!(s.state(), SessionState::GameOver);

        let params = RestartParams {
            width: 4,
            height: 4,
            mines: 3,
        };
        assert_eq!(s.apply(Command::Restart(Some(params))), Ok(Outcome::Restarted));

        let board = s.game().board();
        assert_eq!((board.width(), board.height(), board.mine_count()), (4, 4, 3));
        assert_eq!(s.state(), SessionState::Playing);
        assert_eq!(s.undo_depth(), 0);
        assert_eq!(s.apply(Command::Undo), Err(SessionError::EmptyUndoHistory));
    }

    #[test]
    fn test_bare_restart_uses_default_board() {
        let mut s = session(2, 2, &[]);
        s.apply(Command::Restart(None)).unwrap();
        assert_eq!(s.game().board().config(), BoardConfig::default());
    }

    #[test]
    fn test_invalid_restart_keeps_current_game() {
        let mut s = session(2, 2, &[(0, 0)]);
        s.apply(flag(1, 1)).unwrap();
        let before = s.game().clone();

        let params = RestartParams {
            width: 2,
            height: 2,
            mines: 4,
        };
        assert!(matches!(
            s.apply(Command::Restart(Some(params))),
            Err(SessionError::Board(_))
        ));
        assert_eq!(s.game(), &before);
        assert_eq!(s.undo_depth(), 1);
    }

    #[test]
    fn test_capped_history_drops_oldest() {
        let config = SessionConfig {
            max_undo: Some(2),
            seed: Some(3),
            ..SessionConfig::default()
        };
        let mut s = Session::with_board(config, board(3, 3, &[(1, 1)]));

        for _ in 0..5 {
            s.apply(Command::ToggleRevealAll).unwrap();
        }
        assert_eq!(s.undo_depth(), 2);

        s.apply(Command::Undo).unwrap();
        s.apply(Command::Undo).unwrap();
        assert_eq!(s.apply(Command::Undo), Err(SessionError::EmptyUndoHistory));
    }

    #[test]
    fn test_zero_cap_disables_undo() {
        let config = SessionConfig {
            max_undo: Some(0),
            ..SessionConfig::default()
        };
        let mut s = Session::with_board(config, board(2, 2, &[]));
        s.apply(Command::ToggleRevealAll).unwrap();
        assert_eq!(s.undo_depth(), 0);
    }

    #[test]
    fn test_seeded_sessions_deal_the_same_boards() {
        let config = SessionConfig {
            seed: Some(42),
            ..SessionConfig::default()
        };
        let a = Session::new(config.clone());
        let b = Session::new(config);
        assert_eq!(a.game(), b.game());
    }
}
