//! Match flow: random first mover, one shot per turn, strict alternation.

use core::fmt;

use log::info;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::combatant::{Combatant, Shot, TurnError};

/// Seat of a combatant in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Opponent => 1,
        }
    }
}

/// Per-side statistics in a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct SideSummary {
    pub name: &'static str,
    pub shots: usize,
    pub hits_taken: usize,
}

/// Result of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct MatchOutcome {
    pub winner: Side,
    pub loser: Side,
    pub first_mover: Side,
    pub turns: usize,
    pub player: SideSummary,
    pub opponent: SideSummary,
}

/// Errors returned while running a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchError {
    /// The combatant on `side` stopped supplying targets.
    Withdrew { side: Side },
    /// A turn was requested after the match ended.
    Finished,
    /// The side to move has no cell left to shoot at.
    NoTargetsLeft { side: Side },
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::Withdrew { side } => write!(f, "{:?} withdrew from the match", side),
            MatchError::Finished => write!(f, "Match is already finished"),
            MatchError::NoTargetsLeft { side } => {
                write!(f, "{:?} has no cell left to shoot at", side)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MatchError {}

/// Hooks called as a match progresses. All default to doing nothing.
pub trait MatchObserver {
    fn match_started(&mut self, _game: &Match) {}
    fn turn_played(&mut self, _game: &Match, _side: Side, _shot: &Shot) {}
    fn match_finished(&mut self, _game: &Match, _outcome: &MatchOutcome) {}
}

impl MatchObserver for () {}

/// Two combatants and the turn order between them.
#[derive(Debug)]
pub struct Match {
    combatants: [Combatant; 2],
    first_mover: Side,
    to_move: Side,
    turns: usize,
    rng: SmallRng,
    outcome: Option<MatchOutcome>,
}

impl Match {
    /// Start a match; the first mover is drawn from `rng`.
    pub fn new(player: Combatant, opponent: Combatant, mut rng: SmallRng) -> Self {
        let first = if rng.random() {
            Side::Player
        } else {
            Side::Opponent
        };
        Self::with_first_mover(player, opponent, first, rng)
    }

    pub fn with_first_mover(
        player: Combatant,
        opponent: Combatant,
        first: Side,
        rng: SmallRng,
    ) -> Self {
        Self {
            combatants: [player, opponent],
            first_mover: first,
            to_move: first,
            turns: 0,
            rng,
            outcome: None,
        }
    }

    pub fn combatant(&self, side: Side) -> &Combatant {
        &self.combatants[side.index()]
    }

    pub fn first_mover(&self) -> Side {
        self.first_mover
    }

    /// Side whose turn comes next.
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Turns played so far.
    pub fn turns(&self) -> usize {
        self.turns
    }

    pub fn outcome(&self) -> Option<&MatchOutcome> {
        self.outcome.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Side whose fleet has been fully hit, the player checked first.
    pub fn defeated_side(&self) -> Option<Side> {
        [Side::Player, Side::Opponent]
            .into_iter()
            .find(|side| self.combatant(*side).grid().is_defeated())
    }

    /// Play a single turn for the side to move.
    ///
    /// The turn passes to the other side afterwards whether the shot hit or
    /// missed, unless it ended the match.
    pub fn play_turn(&mut self) -> Result<Shot, MatchError> {
        if self.is_finished() {
            return Err(MatchError::Finished);
        }
        let side = self.to_move;
        let [player, opponent] = &mut self.combatants;
        let (shooter, target) = match side {
            Side::Player => (player, opponent),
            Side::Opponent => (opponent, player),
        };
        let shot = shooter
            .take_turn(target.grid_mut(), &mut self.rng)
            .map_err(|e| match e {
                TurnError::Withdrew => MatchError::Withdrew { side },
                TurnError::NoTargetsLeft => MatchError::NoTargetsLeft { side },
            })?;
        self.turns += 1;

        match self.defeated_side() {
            Some(loser) => self.outcome = Some(self.summarize(loser)),
            None => self.to_move = side.other(),
        }
        Ok(shot)
    }

    /// Play turns until one fleet is destroyed.
    pub fn run<O: MatchObserver + ?Sized>(
        &mut self,
        observer: &mut O,
    ) -> Result<MatchOutcome, MatchError> {
        if let Some(outcome) = self.outcome {
            return Ok(outcome);
        }
        info!(
            "match started: {} vs {}, {} moves first",
            self.combatant(Side::Player).name(),
            self.combatant(Side::Opponent).name(),
            self.combatant(self.first_mover).name()
        );
        observer.match_started(self);
        let outcome = loop {
            let side = self.to_move;
            let shot = self.play_turn()?;
            observer.turn_played(self, side, &shot);
            if let Some(outcome) = self.outcome {
                break outcome;
            }
        };
        info!(
            "match finished after {} turns, {} wins",
            outcome.turns,
            self.combatant(outcome.winner).name()
        );
        observer.match_finished(self, &outcome);
        Ok(outcome)
    }

    fn summarize(&self, loser: Side) -> MatchOutcome {
        let summary = |side: Side| {
            let c = self.combatant(side);
            SideSummary {
                name: c.name(),
                shots: c.shots_fired(),
                hits_taken: c.grid().count_hits(),
            }
        };
        MatchOutcome {
            winner: loser.other(),
            loser,
            first_mover: self.first_mover,
            turns: self.turns,
            player: summary(Side::Player),
            opponent: summary(Side::Opponent),
        }
    }
}

/// Game RNG: fixed when a seed is given, otherwise seeded from the OS.
#[cfg(feature = "std")]
pub fn match_rng(seed: Option<u64>) -> SmallRng {
    use rand::SeedableRng;
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_rng(&mut rand::rng()),
    }
}
