//! Board state: the visible grid, placed ships, the exclusion zone around them
//! and the cells already fired upon.

use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::{Coordinate, PlacementError, ShotError, ShotOutcome};
use crate::config::BOARD_SIZE;
use crate::ship::Ship;

type BB = BitBoard<u64, BOARD_SIZE>;

const _: () = assert!(BB::FITS, "board does not fit in a u64 bitboard");

/// Rendered board, one glyph per cell, indexed `[x][y]`.
pub type Glyphs = [[char; BOARD_SIZE]; BOARD_SIZE];

/// What a single grid cell currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    /// An undamaged ship segment.
    Ship,
    /// A shot that found nothing, or the revealed buffer of a sunk ship.
    Miss,
    /// A damaged segment of a ship that still floats.
    Hit,
    /// The segment whose hit sank its ship.
    Destroyed,
}

impl CellState {
    /// Display glyph. Ship segments only show when `reveal_ships` is set.
    pub fn glyph(self, reveal_ships: bool) -> char {
        match self {
            CellState::Empty => '0',
            CellState::Ship if reveal_ships => '■',
            CellState::Ship => '0',
            CellState::Miss => '.',
            CellState::Hit | CellState::Destroyed => 'X',
        }
    }
}

#[derive(Clone)]
pub struct Board {
    cells: [[CellState; BOARD_SIZE]; BOARD_SIZE],
    ships: Vec<Ship>,
    /// Ship cells plus their buffer rings; no new ship may touch these.
    occupied: BB,
    fired: BB,
    hits_scored_against: usize,
    cells_hit: usize,
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board {
            cells: [[CellState::Empty; BOARD_SIZE]; BOARD_SIZE],
            ships: Vec::new(),
            occupied: BB::new(),
            fired: BB::new(),
            hits_scored_against: 0,
            cells_hit: 0,
        }
    }

    /// Placed ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// State of the cell at `at`, or `None` off the board.
    pub fn cell(&self, at: Coordinate) -> Option<CellState> {
        at.index().map(|(r, c)| self.cells[r][c])
    }

    /// Whether `at` is a ship cell or inside a ship's buffer zone.
    pub fn is_occupied(&self, at: Coordinate) -> bool {
        at.index()
            .is_some_and(|(r, c)| self.occupied.contains(r, c))
    }

    /// Whether `at` has already been fired upon.
    pub fn is_targeted(&self, at: Coordinate) -> bool {
        at.index().is_some_and(|(r, c)| self.fired.contains(r, c))
    }

    /// Number of ships sunk on this board.
    pub fn hits_scored_against(&self) -> usize {
        self.hits_scored_against
    }

    /// Number of ship cells hit on this board.
    pub fn cells_hit(&self) -> usize {
        self.cells_hit
    }

    /// Total ship cells placed on this board.
    pub fn ship_cells(&self) -> usize {
        self.ships.iter().map(Ship::length).sum()
    }

    /// `true` once every placed ship cell has been hit.
    pub fn is_exhausted(&self) -> bool {
        !self.ships.is_empty() && self.cells_hit == self.ship_cells()
    }

    /// `true` once every cell has been fired upon.
    pub fn is_fully_targeted(&self) -> bool {
        self.fired.is_full()
    }

    /// Place `ship`, rejecting it when it leaves the board or touches another
    /// ship or its buffer zone.
    pub fn add_ship(&mut self, ship: Ship) -> Result<(), PlacementError> {
        let mut cells = BB::new();
        for cell in ship.occupied_cells() {
            let (r, c) = cell.index().ok_or(PlacementError::OutOfBounds)?;
            cells.mark(r, c);
        }
        if !(self.occupied & cells).is_empty() {
            return Err(PlacementError::Overlap);
        }
        for (r, c) in cells.iter_set_bits() {
            self.cells[r][c] = CellState::Ship;
        }
        self.occupied |= cells.with_buffer();
        log::debug!("placed {:?}", ship);
        self.ships.push(ship);
        Ok(())
    }

    /// Fire at `target`.
    pub fn resolve_shot(&mut self, target: Coordinate) -> Result<ShotOutcome, ShotError> {
        let (row, col) = target.index().ok_or(ShotError::OutOfBounds)?;
        if self.fired.contains(row, col) {
            return Err(ShotError::AlreadyTargeted);
        }
        self.fired.mark(row, col);

        let Some(ship) = self.ships.iter_mut().find(|s| s.contains(target)) else {
            self.cells[row][col] = CellState::Miss;
            log::debug!("shot at {} missed", target);
            return Ok(ShotOutcome::Miss);
        };
        self.cells_hit += 1;
        if !ship.apply_hit() {
            self.cells[row][col] = CellState::Hit;
            log::debug!("shot at {} hit {:?}", target, ship);
            return Ok(ShotOutcome::Hit);
        }

        self.cells[row][col] = CellState::Destroyed;
        let hull: BB = ship
            .occupied_cells()
            .iter()
            .filter_map(Coordinate::index)
            .collect();
        for (r, c) in hull.with_buffer().iter_set_bits() {
            if !hull.contains(r, c) {
                self.cells[r][c] = CellState::Miss;
            }
        }
        self.hits_scored_against += 1;
        log::debug!("shot at {} destroyed {:?}", target, ship);
        Ok(ShotOutcome::Destroyed)
    }

    /// Project the grid to display glyphs, hiding intact ships unless
    /// `reveal_ships` is set.
    pub fn render(&self, reveal_ships: bool) -> Glyphs {
        let mut glyphs = [['0'; BOARD_SIZE]; BOARD_SIZE];
        for (row, cells) in glyphs.iter_mut().zip(self.cells.iter()) {
            for (glyph, cell) in row.iter_mut().zip(cells.iter()) {
                *glyph = cell.glyph(reveal_ships);
            }
        }
        glyphs
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  occupied: {:?},\n  fired: {:?},\n  hits_scored_against: {},\n  ships: {:?}\n}}",
            self.occupied, self.fired, self.hits_scored_against, self.ships
        )
    }
}
