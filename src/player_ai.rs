use rand::rngs::SmallRng;
use rand::Rng;

use crate::common::Coordinate;
use crate::config::BOARD_SIZE;
use crate::player::MoveSource;

/// Opponent that fires at uniformly random cells.
///
/// It keeps no memory of earlier shots; repeats are rejected by the board and
/// the game simply asks again.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomAi;

impl RandomAi {
    pub fn new() -> Self {
        Self
    }
}

impl MoveSource for RandomAi {
    fn next_move(&mut self, rng: &mut SmallRng) -> Option<Coordinate> {
        Some(Coordinate::new(
            rng.random_range(0..BOARD_SIZE as i32),
            rng.random_range(0..BOARD_SIZE as i32),
        ))
    }
}
