/// Side length of the square board.
pub const BOARD_SIZE: usize = 6;

/// Number of ships in a fleet.
pub const NUM_SHIPS: usize = 7;

/// Ship lengths placed on every board, largest first.
pub const FLEET: [usize; NUM_SHIPS] = [3, 2, 2, 1, 1, 1, 1];

/// Total number of ship cells in the fleet; hitting all of them wins the game.
pub const TOTAL_FLEET_CELLS: usize = 3 + 2 + 2 + 1 + 1 + 1 + 1;

/// Random placement attempts allowed for a whole fleet before the board is
/// discarded and placement starts over.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 2000;
