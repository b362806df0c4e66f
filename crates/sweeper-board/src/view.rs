//! Player-facing view of a board.

use ndarray::Array2;

use crate::{Board, Cell, CellSet, Coord};

/// What a player may see of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    /// The true content, or `None` while the cell is hidden.
    pub value: Option<Cell>,
    pub flagged: bool,
}

/// A read-only picture of the board as the player sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    cells: Array2<CellView>,
}

impl BoardView {
    pub fn width(&self) -> usize {
        self.cells.dim().0
    }

    pub fn height(&self) -> usize {
        self.cells.dim().1
    }

    pub fn cell(&self, coord: Coord) -> Option<CellView> {
        self.cells.get(coord.nd()).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord, CellView)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((x, y), view)| (Coord { x, y }, *view))
    }
}

impl Board {
    /// Builds the player view. A cell shows its value when `reveal_all`
    /// is set or it is in `revealed`; otherwise it is hidden.
    pub fn snapshot(&self, revealed: &CellSet, flagged: &CellSet, reveal_all: bool) -> BoardView {
        let cells = Array2::from_shape_fn((self.width(), self.height()), |(x, y)| {
            let coord = Coord { x, y };
            let visible = reveal_all || revealed.contains(coord);
            CellView {
                value: self.cell(coord).filter(|_| visible),
                flagged: flagged.contains(coord),
            }
        });
        BoardView { cells }
    }
}
