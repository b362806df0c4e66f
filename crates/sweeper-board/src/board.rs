//! The board: mine layout, neighbour counts, and the reveal/flag rules.
//!
//! A [`Board`] never changes after it is built. Everything a player does
//! lands in two [`CellSet`]s owned by the caller (revealed and flagged),
//! which the board reads and writes through the methods below. Win and
//! loss are computed from those sets on demand rather than stored.

use ndarray::Array2;
use rand::Rng;

use crate::{BoardConfig, BoardError, CellSet, Coord, Neighbors};

/// The true content of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Mine,
    /// Safe cell with this many mines among its 8 neighbours.
    Clear(u8),
}

impl Cell {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }
}

/// What a call to [`Board::reveal_cell`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The cell was already revealed. Nothing changed.
    AlreadyRevealed,
    /// The cell holds a mine. It is now in the revealed set.
    HitMine,
    /// One or more safe cells were revealed (more than one when the
    /// target had no adjacent mines and the flood fill ran).
    Revealed { newly_revealed: usize },
}

/// An immutable minefield.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    config: BoardConfig,
    cells: Array2<Cell>,
}

impl Board {
    /// Places `config.mines()` mines uniformly at random, using the
    /// thread RNG.
    pub fn new(config: BoardConfig) -> Self {
        Self::generate(config, &mut rand::rng())
    }

    /// Places mines using the given RNG. Deterministic for a seeded RNG.
    pub fn generate<R: Rng + ?Sized>(config: BoardConfig, rng: &mut R) -> Self {
        let width = config.width();
        let mut mines = Array2::from_elem((width, config.height()), false);

        // Sampling indices without replacement gives exactly `mines`
        // distinct cells. `mines < cells` is guaranteed by BoardConfig.
        for index in rand::seq::index::sample(rng, config.cells(), config.mines()) {
            mines[[index % width, index / width]] = true;
        }

        Self::from_layout(config, &mines)
    }

    /// Builds a board with mines at exactly the given coordinates.
    ///
    /// Validated like any other board: the grid must be legal and at
    /// least one cell must stay free of mines.
    pub fn from_mines(width: i64, height: i64, mines: &[Coord]) -> Result<Self, BoardError> {
        let config = BoardConfig::new(width, height, mines.len() as i64)?;
        let mut layout = Array2::from_elem((config.width(), config.height()), false);

        for &coord in mines {
            let slot = layout.get_mut(coord.nd()).ok_or(BoardError::OutOfBounds {
                x: coord.x as i64,
                y: coord.y as i64,
            })?;
            if *slot {
                return Err(BoardError::DuplicateMine {
                    x: coord.x,
                    y: coord.y,
                });
            }
            *slot = true;
        }

        Ok(Self::from_layout(config, &layout))
    }

    fn from_layout(config: BoardConfig, mines: &Array2<bool>) -> Self {
        let (width, height) = (config.width(), config.height());
        let cells = Array2::from_shape_fn((width, height), |(x, y)| {
            if mines[[x, y]] {
                return Cell::Mine;
            }
            let count = Neighbors::new(Coord { x, y }, width, height)
                .filter(|n| mines[n.nd()])
                .count();
            // At most 8 neighbours.
            Cell::Clear(count as u8)
        });
        Self { config, cells }
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn width(&self) -> usize {
        self.config.width()
    }

    pub fn height(&self) -> usize {
        self.config.height()
    }

    pub fn mine_count(&self) -> usize {
        self.config.mines()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.x < self.width() && coord.y < self.height()
    }

    /// Converts signed coordinates, as typed by a client, into an
    /// in-bounds [`Coord`].
    pub fn locate(&self, x: i64, y: i64) -> Result<Coord, BoardError> {
        let coord = usize::try_from(x)
            .ok()
            .zip(usize::try_from(y).ok())
            .map(Coord::from)
            .filter(|&c| self.contains(c));
        coord.ok_or(BoardError::OutOfBounds { x, y })
    }

    /// The content of `coord`, or `None` if it is off the board.
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        self.cells.get(coord.nd()).copied()
    }

    pub fn neighbors(&self, coord: Coord) -> Neighbors {
        Neighbors::new(coord, self.width(), self.height())
    }

    /// Iterates over every cell with its coordinate, column by column.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((x, y), cell)| (Coord { x, y }, *cell))
    }

    /// An empty set shaped like this board.
    pub fn empty_set(&self) -> CellSet {
        CellSet::new(self.width(), self.height())
    }

    /// Reveals `coord`, flooding outward from cells with no adjacent mines.
    ///
    /// The flood fill uses `revealed` itself as the visited set: a cell is
    /// pushed at most once because it is inserted before it is pushed.
    /// That bounds the work by the number of cells.
    pub fn reveal_cell(
        &self,
        revealed: &mut CellSet,
        coord: Coord,
    ) -> Result<RevealOutcome, BoardError> {
        let cell = self.checked_cell(coord)?;

        if !revealed.insert(coord) {
            return Ok(RevealOutcome::AlreadyRevealed);
        }
        if cell.is_mine() {
            return Ok(RevealOutcome::HitMine);
        }

        let mut newly_revealed = 1;
        let mut stack = Vec::new();
        if cell == Cell::Clear(0) {
            stack.push(coord);
        }

        while let Some(current) = stack.pop() {
            for neighbor in self.neighbors(current) {
                // Neighbours of a zero cell are never mines.
                let next = self.cells[neighbor.nd()];
                if next.is_mine() || !revealed.insert(neighbor) {
                    continue;
                }
                newly_revealed += 1;
                if next == Cell::Clear(0) {
                    stack.push(neighbor);
                }
            }
        }

        Ok(RevealOutcome::Revealed { newly_revealed })
    }

    /// Adds or removes a flag on `coord` and returns whether it is now
    /// flagged. Flagging a revealed cell is allowed.
    pub fn toggle_flag(&self, flagged: &mut CellSet, coord: Coord) -> Result<bool, BoardError> {
        self.checked_cell(coord)?;
        Ok(flagged.toggle(coord))
    }

    /// `true` when every safe cell is in `revealed`.
    pub fn is_won(&self, revealed: &CellSet) -> bool {
        self.cells()
            .filter(|(_, cell)| !cell.is_mine())
            .all(|(coord, _)| revealed.contains(coord))
    }

    /// `true` when any mine is in `revealed`.
    pub fn is_lost(&self, revealed: &CellSet) -> bool {
        revealed
            .iter()
            .any(|coord| self.cell(coord).is_some_and(Cell::is_mine))
    }

    fn checked_cell(&self, coord: Coord) -> Result<Cell, BoardError> {
        self.cell(coord).ok_or(BoardError::OutOfBounds {
            x: coord.x as i64,
            y: coord.y as i64,
        })
    }
}
