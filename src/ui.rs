//! Text rendering of boards with row and column headers.

use alloc::string::String;
use core::fmt::Write;

use crate::board::Board;
use crate::config::BOARD_SIZE;

/// Render `board` as a table with 1-based headers:
///
/// ```text
///   | 1 | 2 | 3 | 4 | 5 | 6 |
/// 1 | 0 | 0 | 0 | 0 | 0 | 0 |
/// ```
pub fn format_board(board: &Board, reveal_ships: bool) -> String {
    let mut out = String::from(" ");
    for c in 1..=BOARD_SIZE {
        let _ = write!(out, " | {}", c);
    }
    out.push_str(" |");
    for (r, row) in board.render(reveal_ships).iter().enumerate() {
        let _ = write!(out, "\n{}", r + 1);
        for glyph in row {
            let _ = write!(out, " | {}", glyph);
        }
        out.push_str(" |");
    }
    out
}

/// Two boards next to each other under their titles.
pub fn format_side_by_side(left: (&str, String), right: (&str, String)) -> String {
    let width = left.1.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    let mut out = String::new();
    let _ = writeln!(out, "{:<width$}    {}", left.0, right.0, width = width);
    let mut right_lines = right.1.lines();
    for line in left.1.lines() {
        let pad = width - line.chars().count();
        let _ = writeln!(
            out,
            "{}{:pad$}    {}",
            line,
            "",
            right_lines.next().unwrap_or(""),
            pad = pad
        );
    }
    out
}
