//! A set of board coordinates stored as a grid of booleans.

use ndarray::Array2;

use crate::Coord;

/// Set of cells on a `width` x `height` grid.
///
/// Used for the revealed and flagged sets. Membership is a flat lookup
/// and the element count is kept alongside, so `len` is O(1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellSet {
    cells: Array2<bool>,
    len: usize,
}

impl CellSet {
    /// An empty set sized for a `width` x `height` board.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: Array2::from_elem((width, height), false),
            len: 0,
        }
    }

    /// Returns `true` if `coord` is in the set. Out-of-range coordinates
    /// are never members.
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.get(coord.nd()).copied().unwrap_or(false)
    }

    /// Adds `coord`. Returns `true` if it was not already present.
    ///
    /// # Panics
    /// If `coord` is outside the grid. Callers validate against the board
    /// first.
    pub fn insert(&mut self, coord: Coord) -> bool {
        let slot = &mut self.cells[coord.nd()];
        if *slot {
            return false;
        }
        *slot = true;
        self.len += 1;
        true
    }

    /// Removes `coord`. Returns `true` if it was present.
    pub fn remove(&mut self, coord: Coord) -> bool {
        match self.cells.get_mut(coord.nd()) {
            Some(slot) if *slot => {
                *slot = false;
                self.len -= 1;
                true
            }
            _ => false,
        }
    }

    /// Flips membership of `coord` and returns the new membership.
    pub fn toggle(&mut self, coord: Coord) -> bool {
        if self.remove(coord) {
            false
        } else {
            self.insert(coord)
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates over members in column-major order.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .indexed_iter()
            .filter(|(_, member)| **member)
            .map(|((x, y), _)| Coord { x, y })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_remove_track_len() {
        let mut set = CellSet::new(3, 2);
        assert!(set.is_empty());

        assert!(set.insert(Coord::new(2, 1)));
        assert!(!set.insert(Coord::new(2, 1)));
        assert_eq!(set.len(), 1);
        assert!(set.contains(Coord::new(2, 1)));

        assert!(set.remove(Coord::new(2, 1)));
        assert!(!set.remove(Coord::new(2, 1)));
        assert!(set.is_empty());
    }

    #[test]
    fn test_toggle_twice_restores_membership() {
        let mut set = CellSet::new(2, 2);
        let before = set.clone();
        assert!(set.toggle(Coord::new(1, 0)));
        assert!(!set.toggle(Coord::new(1, 0)));
        assert_eq!(set, before);
    }

    #[test]
    fn test_out_of_range_is_never_contained() {
        let set = CellSet::new(2, 2);
        assert!(!set.contains(Coord::new(5, 5)));
    }

    #[test]
    fn test_iter_yields_members() {
        let mut set = CellSet::new(3, 3);
        set.insert(Coord::new(0, 2));
        set.insert(Coord::new(2, 0));
        let members: Vec<_> = set.iter().collect();
        assert_eq!(members, vec![Coord::new(0, 2), Coord::new(2, 0)]);
    }
}
