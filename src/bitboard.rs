//! A fixed-size cell set packed into an unsigned integer.
//!
//! Boards are `N×N` grids where bit `row * N + col` marks a cell as a member.
//! The board uses these for its exclusion zone and for the cells that have
//! already been fired upon.

use core::ops::{BitAnd, BitOr, BitOrAssign};
use core::{fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// A set of cells on an N×N board stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Create an empty set.
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Whether `N×N` cells fit in the bits of `T`.
    pub const FITS: bool = N * N <= mem::size_of::<T>() * 8;

    /// Number of cells in the set.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Membership test. Cells outside the board are never members.
    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < N && col < N && ((self.bits >> (row * N + col)) & T::one()) != T::zero()
    }

    /// Add (row, col) to the set. Cells outside the board are ignored.
    #[inline]
    pub fn mark(&mut self, row: usize, col: usize) {
        if row < N && col < N {
            self.bits = self.bits | (T::one() << (row * N + col));
        }
    }

    /// `true` once every cell of the board is a member.
    pub fn is_full(&self) -> bool {
        self.count_ones() == N * N
    }

    /// This set grown by its 8-neighbourhood, clipped to the board.
    pub fn with_buffer(&self) -> Self {
        let mut grown = *self;
        for (r, c) in self.iter_set_bits() {
            for nr in r.saturating_sub(1)..=r + 1 {
                for nc in c.saturating_sub(1)..=c + 1 {
                    grown.mark(nr, nc);
                }
            }
        }
        grown
    }

    /// Iterator over the members in row-major order.
    #[inline]
    pub fn iter_set_bits(&self) -> SetBits<T, N> {
        SetBits {
            bits: self.bits,
            idx: 0,
        }
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> FromIterator<(usize, usize)> for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Collect `(row, col)` positions; cells outside the board are ignored.
    fn from_iter<I: IntoIterator<Item = (usize, usize)>>(cells: I) -> Self {
        let mut board = Self::new();
        for (r, c) in cells {
            board.mark(r, c);
        }
        board
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}>:", N)?;
        for r in 0..N {
            for c in 0..N {
                let bit = if self.contains(r, c) { '■' } else { '□' };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the members of a bitboard.
#[derive(Clone, Copy)]
pub struct SetBits<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
    idx: usize,
}

impl<T, const N: usize> Iterator for SetBits<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.bits >> idx) & T::one()) != T::zero() {
                return Some((idx / N, idx % N));
            }
        }
        None
    }
}

impl<T, const N: usize> BitAnd for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits & rhs.bits,
        }
    }
}

impl<T, const N: usize> BitOr for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitBoard {
            bits: self.bits | rhs.bits,
        }
    }
}

impl<T, const N: usize> BitOrAssign for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits = self.bits | rhs.bits;
    }
}
