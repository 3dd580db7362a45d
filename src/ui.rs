#![cfg(feature = "std")]

//! Console presentation: grid rendering, greeting and a match observer that
//! prints the battlefield after every shot.

use std::fmt::Write as _;
use std::io::Write;

use log::warn;

use crate::combatant::Shot;
use crate::common::ShotResult;
use crate::config::GRID_SIZE;
use crate::game::{Match, MatchObserver, MatchOutcome, Side};
use crate::grid::{CellState, Grid, GridView};

/// Symbol drawn for a cell.
pub fn cell_symbol(state: CellState) -> char {
    match state {
        CellState::Empty => '□',
        CellState::ShipPresent => '■',
        CellState::Miss => 'T',
        CellState::Hit => '✕',
    }
}

/// Render a grid view: column numbers on top, row numbers down the left.
pub fn render_grid(view: &GridView) -> String {
    let mut out = String::from(" ");
    for c in 1..=GRID_SIZE {
        let _ = write!(out, " {}", c);
    }
    out.push('\n');
    for (r, row) in view.rows().iter().enumerate() {
        let cells: Vec<String> = row.iter().map(|s| cell_symbol(*s).to_string()).collect();
        let _ = writeln!(out, "{} {}", r + 1, cells.join("|"));
    }
    out
}

/// Opponent grid on top (ships hidden unless `reveal_opponent`), own grid below.
pub fn render_battlefield(own: &Grid, opponent: &Grid, reveal_opponent: bool) -> String {
    format!(
        "{}\nOpponent board:\n{}{}\nYour board:\n{}",
        "*".repeat(20),
        render_grid(&opponent.view(reveal_opponent)),
        "-".repeat(18),
        render_grid(&own.view(true)),
    )
}

pub fn greeting() -> String {
    format!(
        "<<< SEA BATTLE >>>\n\
         Sink the enemy fleet before it sinks yours.\n\
         Enter a shot as two numbers, row then column (1-{}), separated by a space.\n\
         {}",
        GRID_SIZE,
        "*".repeat(40)
    )
}

/// Prints the match to a text stream from the point of view of [`Side::Player`].
pub struct ConsoleObserver<W> {
    out: W,
    reveal_opponent: bool,
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(out: W, reveal_opponent: bool) -> Self {
        Self {
            out,
            reveal_opponent,
        }
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text).and_then(|_| self.out.flush()) {
            warn!("console output failed: {}", e);
        }
    }

    fn battlefield(&self, game: &Match) -> String {
        render_battlefield(
            game.combatant(Side::Player).grid(),
            game.combatant(Side::Opponent).grid(),
            self.reveal_opponent,
        )
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> MatchObserver for ConsoleObserver<W> {
    fn match_started(&mut self, game: &Match) {
        let text = format!(
            "{}\n{}\n{} moves first.",
            greeting(),
            self.battlefield(game),
            game.combatant(game.first_mover()).name()
        );
        self.emit(&text);
    }

    fn turn_played(&mut self, game: &Match, side: Side, shot: &Shot) {
        let verdict = match shot.result {
            ShotResult::Miss => "Miss!",
            ShotResult::Hit => "Hit!",
        };
        let text = format!(
            "{} fired at {}: {}\n{}",
            game.combatant(side).name(),
            shot.target,
            verdict,
            self.battlefield(game)
        );
        self.emit(&text);
    }

    fn match_finished(&mut self, game: &Match, outcome: &MatchOutcome) {
        let text = match outcome.winner {
            Side::Player => "You won!".to_string(),
            Side::Opponent => format!("{} won.", game.combatant(Side::Opponent).name()),
        };
        self.emit(&text);
    }
}
