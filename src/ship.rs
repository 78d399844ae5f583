//! Ships: a straight run of cells with hit-point tracking.

use alloc::vec::Vec;
use core::fmt;

use crate::common::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Cells extend along `y` (to the right).
    Horizontal,
    /// Cells extend along `x` (downwards).
    Vertical,
}

/// A ship of `length` cells starting at `origin`.
///
/// Construction never checks the board; `Board::add_ship` decides whether the
/// ship fits.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    origin: Coordinate,
    length: usize,
    orientation: Orientation,
    remaining_hits: usize,
}

impl Ship {
    pub fn new(origin: Coordinate, length: usize, orientation: Orientation) -> Self {
        Ship {
            origin,
            length,
            orientation,
            remaining_hits: length,
        }
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Hits still needed to sink the ship.
    pub fn remaining_hits(&self) -> usize {
        self.remaining_hits
    }

    pub fn is_destroyed(&self) -> bool {
        self.remaining_hits == 0
    }

    /// The cells covered by the ship, starting at `origin`.
    pub fn occupied_cells(&self) -> Vec<Coordinate> {
        (0..self.length as i32)
            .map(|i| match self.orientation {
                Orientation::Horizontal => Coordinate::new(self.origin.x, self.origin.y + i),
                Orientation::Vertical => Coordinate::new(self.origin.x + i, self.origin.y),
            })
            .collect()
    }

    /// Whether `cell` is one of the ship's cells.
    pub fn contains(&self, cell: Coordinate) -> bool {
        let step = match self.orientation {
            Orientation::Horizontal if cell.x == self.origin.x => cell.y - self.origin.y,
            Orientation::Vertical if cell.y == self.origin.y => cell.x - self.origin.x,
            _ => return false,
        };
        step >= 0 && (step as usize) < self.length
    }

    /// Take one hit. Returns `true` only when this hit sinks the ship; a ship
    /// that is already sunk is left untouched.
    pub fn apply_hit(&mut self) -> bool {
        if self.remaining_hits == 0 {
            return false;
        }
        self.remaining_hits -= 1;
        self.remaining_hits == 0
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ origin: {}, length: {}, orientation: {:?}, remaining_hits: {} }}",
            self.origin, self.length, self.orientation, self.remaining_hits,
        )
    }
}
