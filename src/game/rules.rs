//! Predicates deciding what happens to the snake on a tick
use super::chain::Chain;
use super::food::Food;
use super::grid::Bounds;

/// Is the snake's head on the food?
pub(crate) fn food_eaten(chain: &Chain, food: &Food) -> bool {
    chain.head().position == food.position
}

/// Has the head run into some other part of the body?
pub(crate) fn self_collision(chain: &Chain) -> bool {
    let head = chain.head().position;
    chain.iter().skip(1).any(|seg| seg.position == head)
}

/// Has the head left the playable region?
pub(crate) fn out_of_bounds(chain: &Chain, bounds: Bounds) -> bool {
    !bounds.contains(chain.head().position)
}

pub(crate) fn game_over(chain: &Chain, bounds: Bounds) -> bool {
    self_collision(chain) || out_of_bounds(chain, bounds)
}
