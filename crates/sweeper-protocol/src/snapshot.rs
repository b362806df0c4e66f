//! The board snapshot pushed to the client after every command.
//!
//! On the wire it is a flat JSON object:
//!
//! ```json
//! {
//!   "max_x": 3, "max_y": 2,
//!   "game_map": { "0": "hidden", "1": 1, "2": "flagged", "3": "mine", ... },
//!   "winning_condition": false,
//!   "loosing_condition": true,
//!   "mines": 1,
//!   "flags": 1
//! }
//! ```
//!
//! JSON object keys must be strings, so cells are keyed by a single
//! linear index instead of an `(x, y)` pair. See [`linear_index`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sweeper_board::{BoardView, Cell, CellView, Coord};

/// Non-numeric cell markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    Hidden,
    /// Hidden, with a player flag on it.
    Flagged,
    Mine,
}

/// One entry of `game_map`: a neighbour count or a [`Mark`].
///
/// `#[serde(untagged)]` writes the inner value directly, so a count is a
/// bare JSON number and a mark is a bare string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellMarker {
    Count(u8),
    Mark(Mark),
}

impl From<CellView> for CellMarker {
    fn from(view: CellView) -> Self {
        match view.value {
            Some(Cell::Clear(n)) => Self::Count(n),
            Some(Cell::Mine) => Self::Mark(Mark::Mine),
            None if view.flagged => Self::Mark(Mark::Flagged),
            None => Self::Mark(Mark::Hidden),
        }
    }
}

/// Key of `coord` in `game_map` for a board `width` cells wide:
/// `width * x + y`.
///
/// Boards taller than they are wide map several cells to one key. The
/// map is filled in `x`-major order, so the last of them wins.
pub fn linear_index(width: usize, coord: Coord) -> usize {
    width * coord.x + coord.y
}

/// Everything the client needs to draw the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Board width.
    pub max_x: usize,
    /// Board height.
    pub max_y: usize,
    pub game_map: BTreeMap<usize, CellMarker>,
    pub winning_condition: bool,
    pub loosing_condition: bool,
    /// Total mines on the board.
    pub mines: usize,
    /// Cells currently flagged.
    pub flags: usize,
}

impl BoardSnapshot {
    pub fn new(view: &BoardView, won: bool, lost: bool, mines: usize, flags: usize) -> Self {
        let width = view.width();
        let game_map = view
            .iter()
            .map(|(coord, cell)| (linear_index(width, coord), cell.into()))
            .collect();

        Self {
            max_x: width,
            max_y: view.height(),
            game_map,
            winning_condition: won,
            loosing_condition: lost,
            mines,
            flags,
        }
    }

    /// Looks up the marker stored under the key of `(x, y)`.
    ///
    /// Returns `None` outside the board. On boards taller than wide the
    /// key may belong to a later cell.
    pub fn cell(&self, x: usize, y: usize) -> Option<CellMarker> {
        if x >= self.max_x || y >= self.max_y {
            return None;
        }
        self.game_map
            .get(&linear_index(self.max_x, Coord { x, y }))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweeper_board::Board;

    fn snapshot_of(board: &Board, reveal: &[Coord], flag: &[Coord]) -> BoardSnapshot {
        let mut revealed = board.empty_set();
        let mut flagged = board.empty_set();
        for &c in reveal {
            board.reveal_cell(&mut revealed, c).unwrap();
        }
        for &c in flag {
            board.toggle_flag(&mut flagged, c).unwrap();
        }
        let view = board.snapshot(&revealed, &flagged, false);
        BoardSnapshot::new(
            &view,
            board.is_won(&revealed),
            board.is_lost(&revealed),
            board.mine_count(),
            flagged.len(),
        )
    }

    #[test]
    fn test_keys_are_unique_on_wide_boards() {
        let board = Board::from_mines(3, 2, &[]).unwrap();
        let snap = snapshot_of(&board, &[], &[]);
        assert_eq!(snap.game_map.len(), 6);
        assert_eq!(snap.max_x, 3);
        assert_eq!(snap.max_y, 2);
    }

    #[test]
    fn test_keys_use_width_times_x_plus_y() {
        let board = Board::from_mines(3, 2, &[Coord::new(0, 1)]).unwrap();
        let snap = snapshot_of(&board, &[Coord::new(1, 0)], &[]);

        let json = serde_json::to_value(&snap).unwrap();

        assert_eq!(json["game_map"]["3"], 1);
        assert_eq!(json["game_map"]["1"], "hidden");
        assert_eq!(json["game_map"]["4"], "hidden");
        assert_eq!(snap.cell(1, 0), Some(CellMarker::Count(1)));
    }

    #[test]
    fn test_tall_boards_share_keys() {
        let board = Board::from_mines(2, 3, &[]).unwrap();
        let snap = snapshot_of(&board, &[], &[]);

        // (0, 2) and (1, 0) both land on key 2.
        assert_eq!(snap.game_map.len(), 5);
        assert_eq!(snap.cell(5, 0), None);
    }

    #[test]
    fn test_markers_follow_visibility() {
        let board = Board::from_mines(2, 2, &[Coord::new(0, 0)]).unwrap();
        let snap = snapshot_of(&board, &[Coord::new(1, 1)], &[Coord::new(0, 0)]);

        assert_eq!(snap.cell(1, 1), Some(CellMarker::Count(1)));
        assert_eq!(snap.cell(0, 0), Some(CellMarker::Mark(Mark::Flagged)));
        assert_eq!(snap.cell(1, 0), Some(CellMarker::Mark(Mark::Hidden)));
        assert_eq!(snap.flags, 1);
        assert_eq!(snap.mines, 1);
        assert!(!snap.winning_condition);
        assert!(!snap.loosing_condition);
    }

    #[test]
    fn test_json_shape_matches_wire_format() {
        let board = Board::from_mines(2, 2, &[Coord::new(0, 0)]).unwrap();
        let snap = snapshot_of(&board, &[Coord::new(0, 0), Coord::new(1, 1)], &[]);

        let json = serde_json::to_value(&snap).unwrap();

        assert_eq!(json["max_x"], 2);
        assert_eq!(json["max_y"], 2);
        assert_eq!(json["game_map"]["0"], "mine");
        assert_eq!(json["game_map"]["3"], 1);
        assert_eq!(json["game_map"]["1"], "hidden");
        assert_eq!(json["loosing_condition"], true);
        assert_eq!(json["winning_condition"], false);
        assert_eq!(json["flags"], 0);
    }

    #[test]
    fn test_decodes_what_it_encodes() {
        let board = Board::from_mines(3, 1, &[Coord::new(2, 0)]).unwrap();
        let snap = snapshot_of(&board, &[Coord::new(0, 0)], &[Coord::new(2, 0)]);

        let text = serde_json::to_string(&snap).unwrap();
        let back: BoardSnapshot = serde_json::from_str(&text).unwrap();

        assert_eq!(back, snap);
    }
}
