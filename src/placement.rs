//! Random fleet placement.

use rand::Rng;

use crate::board::Board;
use crate::common::{Coordinate, FleetPlacementExhausted};
use crate::config::{BOARD_SIZE, FLEET, MAX_PLACEMENT_ATTEMPTS};
use crate::ship::{Orientation, Ship};

/// Place the whole fleet on `board` at random, largest ship first.
///
/// Gives up after [`MAX_PLACEMENT_ATTEMPTS`] tries across the fleet. The board
/// is left partially filled in that case and should be thrown away.
pub fn place_fleet<R: Rng + ?Sized>(
    rng: &mut R,
    board: &mut Board,
) -> Result<(), FleetPlacementExhausted> {
    let mut attempts = 0;
    for (placed, &length) in FLEET.iter().enumerate() {
        loop {
            if attempts >= MAX_PLACEMENT_ATTEMPTS {
                log::warn!(
                    "gave up placing the fleet after {} attempts ({} ships placed)",
                    attempts,
                    placed
                );
                return Err(FleetPlacementExhausted { placed });
            }
            attempts += 1;
            let origin = Coordinate::new(
                rng.random_range(0..BOARD_SIZE as i32),
                rng.random_range(0..BOARD_SIZE as i32),
            );
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            if board.add_ship(Ship::new(origin, length, orientation)).is_ok() {
                break;
            }
        }
    }
    log::debug!("fleet placed after {} attempts", attempts);
    Ok(())
}

/// A freshly generated board carrying the full fleet. Exhausted placements are
/// discarded and started again from an empty board.
pub fn random_board<R: Rng + ?Sized>(rng: &mut R) -> Board {
    loop {
        let mut board = Board::new();
        match place_fleet(rng, &mut board) {
            Ok(()) => return board,
            Err(e) => log::debug!("discarding board: {}", e),
        }
    }
}
