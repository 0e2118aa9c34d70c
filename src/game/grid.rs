use serde::Deserialize;
use std::fmt;

/// A cell of the game grid.
///
/// Coordinates are signed so that a head which has stepped off the grid can
/// still be represented (and detected).  `(0, 0)` is the top-left corner.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) struct Cell {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Cell {
    pub(crate) const fn new(x: i32, y: i32) -> Cell {
        Cell { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Which coordinates of a `grid_size × grid_size` grid the snake's head may
/// occupy without the game ending
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub(crate) enum BoundsCheck {
    /// Valid coordinates are `0..grid_size - 1`; the last row & column are
    /// treated as outside the grid.  This is how the game has always played.
    #[default]
    ExcludeLast,

    /// Valid coordinates are `0..grid_size`.
    Full,
}

/// The playable region of the grid
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Bounds {
    pub(crate) grid_size: u16,
    pub(crate) check: BoundsCheck,
}

impl Bounds {
    pub(crate) fn new(grid_size: u16, check: BoundsCheck) -> Bounds {
        Bounds { grid_size, check }
    }

    /// One past the largest coordinate the head may occupy
    pub(crate) fn limit(self) -> i32 {
        let size = i32::from(self.grid_size);
        match self.check {
            BoundsCheck::ExcludeLast => size - 1,
            BoundsCheck::Full => size,
        }
    }

    pub(crate) fn contains(self, cell: Cell) -> bool {
        let limit = self.limit();
        (0..limit).contains(&cell.x) && (0..limit).contains(&cell.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Cell::new(0, 0), BoundsCheck::ExcludeLast, true)]
    #[case(Cell::new(18, 18), BoundsCheck::ExcludeLast, true)]
    #[case(Cell::new(19, 5), BoundsCheck::ExcludeLast, false)]
    #[case(Cell::new(5, 19), BoundsCheck::ExcludeLast, false)]
    #[case(Cell::new(19, 19), BoundsCheck::Full, true)]
    #[case(Cell::new(20, 5), BoundsCheck::Full, false)]
    #[case(Cell::new(-1, 5), BoundsCheck::Full, false)]
    #[case(Cell::new(5, -1), BoundsCheck::ExcludeLast, false)]
    fn test_contains(#[case] cell: Cell, #[case] check: BoundsCheck, #[case] inside: bool) {
        assert_eq!(Bounds::new(20, check).contains(cell), inside);
    }
}
