use super::grid::Cell;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Return the cell one step from `cell` in this direction.  The result may
    /// lie outside the grid.
    pub(crate) fn advance(self, cell: Cell) -> Cell {
        let Cell { x, y } = cell;
        match self {
            Direction::Up => Cell::new(x, y - 1),
            Direction::Down => Cell::new(x, y + 1),
            Direction::Left => Cell::new(x - 1, y),
            Direction::Right => Cell::new(x + 1, y),
        }
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Return the direction of a single step from `from` to `to`, or `None`
    /// if the two cells are not orthogonally adjacent.
    pub(crate) fn between(from: Cell, to: Cell) -> Option<Direction> {
        match (to.x - from.x, to.y - from.y) {
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }
}
