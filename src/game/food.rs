use super::grid::Cell;
use crate::rng::uniform_random;
use rand::RngCore;

/// The single piece of food on the grid
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Food {
    pub(crate) position: Cell,
}

impl Food {
    /// Move the food to a random cell of a `grid_size × grid_size` grid.  The
    /// cell may be one the snake is currently on.
    pub(crate) fn place<R: RngCore + ?Sized>(&mut self, grid_size: u16, rng: &mut R) {
        let upper = i32::from(grid_size) - 1;
        self.position = Cell::new(uniform_random(rng, 0, upper), uniform_random(rng, 0, upper));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use std::collections::HashSet;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    #[test]
    fn test_place_in_grid() {
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let mut food = Food::default();
        let mut seen = HashSet::new();
        for _ in 0..2000 {
            food.place(20, &mut rng);
            assert!((0..20).contains(&food.position.x), "{}", food.position);
            assert!((0..20).contains(&food.position.y), "{}", food.position);
            seen.insert(food.position);
        }
        // Every row & column, including the last, is reachable
        assert!(seen.iter().any(|c| c.x == 19));
        assert!(seen.iter().any(|c| c.y == 19));
        assert!(seen.iter().any(|c| c.x == 0));
        assert!(seen.iter().any(|c| c.y == 0));
    }

    #[test]
    fn test_place_is_deterministic_for_seed() {
        let mut a = Food::default();
        let mut b = Food::default();
        a.place(20, &mut ChaCha12Rng::seed_from_u64(RNG_SEED));
        b.place(20, &mut ChaCha12Rng::seed_from_u64(RNG_SEED));
        assert_eq!(a, b);
    }
}
