//! Common types: coordinates, shot outcomes and the error taxonomy.

use core::fmt;

use crate::config::BOARD_SIZE;

/// A position on the board. `x` is the row and `y` the column, both 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// `(row, col)` grid index, or `None` when the coordinate lies off the board.
    pub fn index(&self) -> Option<(usize, usize)> {
        let size = BOARD_SIZE as i32;
        if (0..size).contains(&self.x) && (0..size).contains(&self.y) {
            Some((self.x as usize, self.y as usize))
        } else {
            None
        }
    }

    pub fn in_bounds(&self) -> bool {
        self.index().is_some()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Result of a shot that the board accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// No ship occupies the cell.
    Miss,
    /// A ship was hit and still floats.
    Hit,
    /// The shot sank the ship.
    Destroyed,
}

impl fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotOutcome::Miss => write!(f, "Miss!"),
            ShotOutcome::Hit => write!(f, "Ship hit!"),
            ShotOutcome::Destroyed => write!(f, "Ship destroyed!"),
        }
    }
}

/// Reasons a ship cannot be added to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// At least one ship cell lies outside the board.
    OutOfBounds,
    /// A ship cell lies on another ship or inside its buffer zone.
    Overlap,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "Ship does not fit on the board"),
            PlacementError::Overlap => {
                write!(f, "Ship touches or overlaps another ship")
            }
        }
    }
}

/// Reasons a shot is rejected. A rejected shot does not consume the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotError {
    OutOfBounds,
    AlreadyTargeted,
}

impl fmt::Display for ShotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotError::OutOfBounds => write!(f, "That cell is outside the board!"),
            ShotError::AlreadyTargeted => write!(f, "You have already fired at this cell!"),
        }
    }
}

/// Random fleet placement ran out of attempts; discard the board and retry
/// from an empty one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetPlacementExhausted {
    /// Ships placed before giving up.
    pub placed: usize,
}

impl fmt::Display for FleetPlacementExhausted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fleet placement exhausted its attempts after placing {} ships",
            self.placed
        )
    }
}

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum SideId {
    A,
    B,
}

impl SideId {
    pub fn opponent(self) -> SideId {
        match self {
            SideId::A => SideId::B,
            SideId::B => SideId::A,
        }
    }
}

impl fmt::Display for SideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SideId::A => write!(f, "side A"),
            SideId::B => write!(f, "side B"),
        }
    }
}

/// Errors returned by the turn engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The game already has a winner.
    AlreadyFinished(SideId),
    /// The move source of this side can no longer produce moves.
    MoveSourceClosed(SideId),
    /// The opponent board has no cell left that this side could fire upon.
    NoTargetsLeft(SideId),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::AlreadyFinished(winner) => {
                write!(f, "the game is over, {} won", winner)
            }
            GameError::MoveSourceClosed(side) => {
                write!(f, "{} has no more moves to make", side)
            }
            GameError::NoTargetsLeft(side) => {
                write!(f, "every cell has been fired upon, {} has nowhere to shoot", side)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
#[cfg(feature = "std")]
impl std::error::Error for ShotError {}
#[cfg(feature = "std")]
impl std::error::Error for FleetPlacementExhausted {}
#[cfg(feature = "std")]
impl std::error::Error for GameError {}
