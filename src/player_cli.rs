#![cfg(feature = "std")]

use std::fmt;
use std::io::{self, BufRead, Write};

use rand::rngs::SmallRng;

use crate::common::{Coordinate, ShotError, ShotOutcome};
use crate::player::MoveSource;

/// Why a line of input is not a coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// No comma between the two numbers.
    MissingSeparator,
    /// More or fewer than two comma-separated parts.
    WrongTokenCount,
    /// A part is not a non-negative integer.
    NotANumber,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::MissingSeparator => write!(f, "Enter coordinates in the format X, Y!"),
            InputError::WrongTokenCount => write!(f, "Enter exactly two coordinates!"),
            InputError::NotANumber => write!(f, "Coordinates must be whole numbers!"),
        }
    }
}

impl std::error::Error for InputError {}

/// Parse `"x, y"` as typed by a player (1-based) into a 0-based coordinate.
///
/// Only the syntax is checked; `"0, 9"` parses and is left for the board to
/// reject.
pub fn parse_coord(input: &str) -> Result<Coordinate, InputError> {
    let input = input.trim();
    if !input.contains(',') {
        return Err(InputError::MissingSeparator);
    }
    let parts: Vec<&str> = input.split(',').map(str::trim).collect();
    let &[x, y] = parts.as_slice() else {
        return Err(InputError::WrongTokenCount);
    };
    let parse = |s: &str| -> Result<i32, InputError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InputError::NotANumber);
        }
        s.parse::<i32>().map_err(|_| InputError::NotANumber)
    };
    Ok(Coordinate::new(parse(x)? - 1, parse(y)? - 1))
}

/// Format a 0-based coordinate the way players type it.
pub fn coord_to_string(at: Coordinate) -> String {
    format!("{}, {}", at.x + 1, at.y + 1)
}

/// Human player reading targets from a line-oriented input.
pub struct CliPlayer<R = io::StdinLock<'static>, W = io::Stdout> {
    input: R,
    output: W,
}

impl CliPlayer {
    /// Player on the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output sink, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, message: fmt::Arguments<'_>) {
        // a closed terminal leaves nothing to report to
        let _ = self.output.write_fmt(message);
        let _ = self.output.write_all(b"\n");
        let _ = self.output.flush();
    }
}

impl<R: BufRead, W: Write> MoveSource for CliPlayer<R, W> {
    fn next_move(&mut self, _rng: &mut SmallRng) -> Option<Coordinate> {
        loop {
            let _ = write!(self.output, "Enter coordinates X, Y: ");
            let _ = self.output.flush();
            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => {
                    log::warn!("failed to read input: {}", e);
                    return None;
                }
            }
            match parse_coord(&line) {
                Ok(at) => return Some(at),
                Err(e) => self.say(format_args!("{}", e)),
            }
        }
    }

    fn handle_rejected(&mut self, _target: Coordinate, error: ShotError) {
        self.say(format_args!("{}", error));
    }

    fn handle_shot_result(&mut self, target: Coordinate, outcome: ShotOutcome) {
        self.say(format_args!("You fired at {}: {}", coord_to_string(target), outcome));
    }

    fn handle_opponent_shot(&mut self, target: Coordinate, outcome: ShotOutcome) {
        self.say(format_args!(
            "Computer fired at {}: {}",
            coord_to_string(target),
            outcome
        ));
    }
}
