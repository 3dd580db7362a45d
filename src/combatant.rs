//! A combatant: one fleet plus the strategy it uses to fire at the other fleet.

use alloc::boxed::Box;
use core::fmt;

use log::debug;
use rand::rngs::SmallRng;

use crate::common::{FleetError, ShotResult};
use crate::config::GeneratorLimits;
use crate::coordinate::Coordinate;
use crate::fleet::generate_fleet_grid;
use crate::grid::Grid;
use crate::targeting::Targeting;

/// A shot that landed on the opponent grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shot {
    pub target: Coordinate,
    pub result: ShotResult,
    /// Choices refused before this one (off the grid or already shot).
    pub rejected: usize,
}

/// Errors returned by [`Combatant::take_turn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnError {
    /// The targeting source stopped supplying coordinates.
    Withdrew,
    /// Every cell of the target grid has already been shot at.
    NoTargetsLeft,
}

impl fmt::Display for TurnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnError::Withdrew => write!(f, "Combatant withdrew before firing"),
            TurnError::NoTargetsLeft => write!(f, "Every cell of the target grid was already shot"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TurnError {}

pub struct Combatant {
    name: &'static str,
    grid: Grid,
    targeting: Box<dyn Targeting>,
    shots_fired: usize,
}

impl Combatant {
    pub fn new(name: &'static str, grid: Grid, targeting: Box<dyn Targeting>) -> Self {
        Self {
            name,
            grid,
            targeting,
            shots_fired: 0,
        }
    }

    /// Combatant with a freshly generated fleet.
    pub fn with_random_fleet(
        name: &'static str,
        targeting: Box<dyn Targeting>,
        rng: &mut SmallRng,
        limits: &GeneratorLimits,
    ) -> Result<Self, FleetError> {
        let grid = generate_fleet_grid(rng, limits)?;
        Ok(Self::new(name, grid, targeting))
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The combatant's own fleet and the damage it has taken.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Own grid, for the opponent's shots.
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn shots_fired(&self) -> usize {
        self.shots_fired
    }

    /// Fire one shot at `target`.
    ///
    /// Keeps asking the targeting strategy until a coordinate is accepted by
    /// the grid; refused coordinates are reported back to the strategy and
    /// never surface to the caller. Fails with [`TurnError::NoTargetsLeft`]
    /// when no cell is left to shoot.
    pub fn take_turn(&mut self, target: &mut Grid, rng: &mut SmallRng) -> Result<Shot, TurnError> {
        if target.untargeted().is_empty() {
            return Err(TurnError::NoTargetsLeft);
        }
        let mut rejected = 0;
        loop {
            let view = target.view(false);
            let coord = self
                .targeting
                .select_target(rng, &view)
                .ok_or(TurnError::Withdrew)?;
            match target.shoot(coord) {
                Ok(result) => {
                    self.shots_fired += 1;
                    self.targeting.shot_resolved(coord, result);
                    debug!("{} fired at {}: {:?}", self.name, coord, result);
                    return Ok(Shot {
                        target: coord,
                        result,
                        rejected,
                    });
                }
                Err(e) => {
                    rejected += 1;
                    debug!("{} shot at {} refused: {}", self.name, coord, e);
                    self.targeting.shot_rejected(coord, &e);
                }
            }
        }
    }
}

impl fmt::Debug for Combatant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Combatant")
            .field("name", &self.name)
            .field("grid", &self.grid)
            .field("shots_fired", &self.shots_fired)
            .finish()
    }
}
