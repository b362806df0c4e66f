//! Coordinates and neighbourhood iteration.

use std::fmt;

/// A cell position on the board. `x` is the column, `y` the row.
///
/// Holding a `Coord` does not mean it is in bounds for any particular
/// board. Board operations check it and answer with
/// [`BoardError::OutOfBounds`](crate::BoardError::OutOfBounds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Index into an `ndarray::Array2` laid out as `[x, y]`.
    pub(crate) const fn nd(self) -> [usize; 2] {
        [self.x, self.y]
    }
}

impl From<(usize, usize)> for Coord {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

const DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Iterator over the in-bounds 8-connected neighbours of a cell.
#[derive(Debug)]
pub struct Neighbors {
    center: Coord,
    width: usize,
    height: usize,
    index: usize,
}

impl Neighbors {
    pub(crate) fn new(center: Coord, width: usize, height: usize) -> Self {
        Self {
            center,
            width,
            height,
            index: 0,
        }
    }
}

impl Iterator for Neighbors {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        while let Some(&(dx, dy)) = DISPLACEMENTS.get(self.index) {
            self.index += 1;

            let Some(x) = self.center.x.checked_add_signed(dx) else {
                continue;
            };
            let Some(y) = self.center.y.checked_add_signed(dy) else {
                continue;
            };
            if x < self.width && y < self.height {
                return Some(Coord { x, y });
            }
        }
        None
    }
}
