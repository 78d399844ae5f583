use rand::rngs::SmallRng;

use crate::common::{Coordinate, ShotError, ShotOutcome};

/// Supplies the targets a side fires at.
///
/// The game asks again whenever the opponent board rejects a target, so a
/// source may return coordinates that are off the board or already used.
pub trait MoveSource {
    /// The next coordinate to fire at, or `None` when the source can produce no
    /// more moves (for example, its input was closed).
    fn next_move(&mut self, rng: &mut SmallRng) -> Option<Coordinate>;

    /// The last target was rejected; another one will be requested.
    fn handle_rejected(&mut self, _target: Coordinate, _error: ShotError) {}

    /// Inform the source of the result of its last shot.
    fn handle_shot_result(&mut self, _target: Coordinate, _outcome: ShotOutcome) {}

    /// Inform the source of an opponent shot against its own board.
    fn handle_opponent_shot(&mut self, _target: Coordinate, _outcome: ShotOutcome) {}
}

impl<M: MoveSource + ?Sized> MoveSource for alloc::boxed::Box<M> {
    fn next_move(&mut self, rng: &mut SmallRng) -> Option<Coordinate> {
        (**self).next_move(rng)
    }

    fn handle_rejected(&mut self, target: Coordinate, error: ShotError) {
        (**self).handle_rejected(target, error)
    }

    fn handle_shot_result(&mut self, target: Coordinate, outcome: ShotOutcome) {
        (**self).handle_shot_result(target, outcome)
    }

    fn handle_opponent_shot(&mut self, target: Coordinate, outcome: ShotOutcome) {
        (**self).handle_opponent_shot(target, outcome)
    }
}
