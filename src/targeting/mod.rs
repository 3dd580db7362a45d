//! Shot selection strategies.
//!
//! A [`Targeting`] decides where its combatant fires next:
//! - [`RandomTargeting`]: uniform over the whole grid
//! - [`ConsoleTargeting`]: asks a human for `row col` on a text stream

use rand::rngs::SmallRng;

use crate::common::{GridError, ShotResult};
use crate::coordinate::Coordinate;
use crate::grid::GridView;

/// Interface implemented by the different ways of picking a target.
pub trait Targeting {
    /// Choose the next coordinate to fire at, given the opponent grid with
    /// its vessels hidden. `None` means the source has gone away and the
    /// combatant withdraws.
    fn select_target(&mut self, rng: &mut SmallRng, view: &GridView) -> Option<Coordinate>;

    /// Inform the strategy that a chosen coordinate was refused.
    fn shot_rejected(&mut self, _coord: Coordinate, _error: &GridError) {}

    /// Inform the strategy of the result of a shot that landed.
    fn shot_resolved(&mut self, _coord: Coordinate, _result: ShotResult) {}
}

pub mod random;
pub use random::RandomTargeting;

#[cfg(feature = "std")]
pub mod console;
#[cfg(feature = "std")]
pub use console::{parse_coordinate, ConsoleTargeting, InputError};
