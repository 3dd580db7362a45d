use std::fmt;
use std::io::{self, BufRead, Stdout, StdinLock, Write};

use log::warn;
use rand::rngs::SmallRng;

use crate::common::GridError;
use crate::coordinate::Coordinate;
use crate::grid::GridView;

use super::Targeting;

/// Why a line of input could not be read as a coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Expected exactly two numbers.
    WrongCount(usize),
    /// A token was not an integer.
    NotANumber(String),
    /// The line was not valid UTF-8.
    NotText,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::WrongCount(n) => {
                write!(f, "Enter two numbers, row and column (got {})", n)
            }
            InputError::NotANumber(token) => write!(f, "{:?} is not a number", token),
            InputError::NotText => write!(f, "Input is not readable text"),
        }
    }
}

impl std::error::Error for InputError {}

/// Parse `row col` (whitespace or comma separated) into a coordinate.
///
/// Range is not checked here; the grid rejects cells outside the board.
pub fn parse_coordinate(line: &str) -> Result<Coordinate, InputError> {
    let tokens: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect();
    if tokens.len() != 2 {
        return Err(InputError::WrongCount(tokens.len()));
    }
    let number = |token: &str| {
        token
            .parse::<i32>()
            .map_err(|_| InputError::NotANumber(token.to_string()))
    };
    Ok(Coordinate::new(number(tokens[0])?, number(tokens[1])?))
}

/// Human combatant reading targets from a text stream.
pub struct ConsoleTargeting<R, W> {
    input: R,
    output: W,
}

impl ConsoleTargeting<StdinLock<'static>, Stdout> {
    /// Read from standard input, prompt on standard output.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleTargeting<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prompt until a line parses. `Ok(None)` at end of input; malformed
    /// lines, including ones that are not UTF-8, are reported and re-prompted.
    fn read_target(&mut self) -> io::Result<Option<Coordinate>> {
        let mut raw = Vec::new();
        loop {
            write!(self.output, "Your move. Target row and column: ")?;
            self.output.flush()?;
            raw.clear();
            if self.input.read_until(b'\n', &mut raw)? == 0 {
                return Ok(None);
            }
            let parsed = std::str::from_utf8(&raw)
                .map_err(|_| InputError::NotText)
                .and_then(|line| parse_coordinate(line.trim()));
            match parsed {
                Ok(coord) => return Ok(Some(coord)),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Targeting for ConsoleTargeting<R, W> {
    fn select_target(&mut self, _rng: &mut SmallRng, _view: &GridView) -> Option<Coordinate> {
        match self.read_target() {
            Ok(coord) => coord,
            Err(e) => {
                warn!("console input failed: {}", e);
                None
            }
        }
    }

    fn shot_rejected(&mut self, _coord: Coordinate, error: &GridError) {
        if let Err(e) = writeln!(self.output, "{}", error) {
            warn!("console output failed: {}", e);
        }
    }
}
