use super::direction::Direction;
use super::grid::Cell;
use crate::rng::uniform_random;
use rand::RngCore;
use std::collections::VecDeque;

/// One body cell of the snake
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Segment {
    pub(crate) position: Cell,

    /// For the head, the direction the snake is moving in.  For any other
    /// segment, the direction in which it last moved; this is only consulted
    /// when growing a new tail behind it.
    pub(crate) direction: Direction,
}

impl Segment {
    pub(crate) fn new(position: Cell, direction: Direction) -> Segment {
        Segment {
            position,
            direction,
        }
    }
}

/// The snake: an ordered, non-empty sequence of segments from head to tail
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Chain {
    segments: VecDeque<Segment>,
}

impl Chain {
    /// Create a chain consisting of a single `segment`
    pub(crate) fn new(segment: Segment) -> Chain {
        Chain {
            segments: VecDeque::from([segment]),
        }
    }

    /// Create a single-segment chain facing up at a random position at least
    /// `margin` cells away from the top & left edges of a `grid_size` grid and
    /// at most `grid_size - margin` along either axis.
    pub(crate) fn spawn<R: RngCore + ?Sized>(grid_size: u16, margin: u16, rng: &mut R) -> Chain {
        let lower = i32::from(margin);
        let upper = i32::from(grid_size) - i32::from(margin);
        let x = uniform_random(rng, lower, upper);
        let y = uniform_random(rng, lower, upper);
        Chain::new(Segment::new(Cell::new(x, y), Direction::Up))
    }

    /// # Panics
    ///
    /// Panics if the chain is empty, which can only happen through a bug.
    pub(crate) fn head(&self) -> &Segment {
        self.segments
            .front()
            .expect("chain should always have a head segment")
    }

    /// # Panics
    ///
    /// Panics if the chain is empty, which can only happen through a bug.
    pub(crate) fn tail(&self) -> &Segment {
        self.segments
            .back()
            .expect("chain should always have a tail segment")
    }

    pub(crate) fn len(&self) -> usize {
        self.segments.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.segments.iter()
    }

    /// Return the segments' positions from head to tail
    pub(crate) fn positions(&self) -> impl Iterator<Item = Cell> + '_ {
        self.segments.iter().map(|seg| seg.position)
    }

    /// Point the head in `direction` unless that would make the snake turn
    /// straight back into itself.  Returns `false` if the turn was refused.
    ///
    /// # Panics
    ///
    /// Panics if the chain is empty.
    pub(crate) fn set_head_direction(&mut self, direction: Direction) -> bool {
        let head = self
            .segments
            .front_mut()
            .expect("chain should always have a head segment");
        if direction == head.direction.reverse() {
            return false;
        }
        head.direction = direction;
        true
    }

    /// Append a new tail one cell behind the current tail, i.e., offset from
    /// it opposite to the tail's direction.  The new tail inherits that
    /// direction.
    ///
    /// If that cell is already taken by another segment (as when the head is
    /// chasing the tail around a tight loop), the new tail is stacked on the
    /// old tail's cell instead; the next move separates them.
    pub(crate) fn grow(&mut self) {
        let tail = *self.tail();
        let mut position = tail.direction.reverse().advance(tail.position);
        if self.positions().any(|p| p == position) {
            position = tail.position;
        }
        self.segments.push_back(Segment::new(position, tail.direction));
    }

    /// Move the head one cell in its direction and pull every other segment
    /// into the cell its predecessor occupied before the move.
    ///
    /// # Panics
    ///
    /// Panics if the chain is empty.
    pub(crate) fn advance(&mut self) {
        let mut segments = self.segments.iter_mut();
        let head = segments
            .next()
            .expect("chain should always have a head segment");
        let mut carried = head.position;
        head.position = head.direction.advance(head.position);
        for seg in segments {
            let vacated = std::mem::replace(&mut seg.position, carried);
            if let Some(d) = Direction::between(vacated, seg.position) {
                seg.direction = d;
            }
            carried = vacated;
        }
    }
}
