//! Random fleet generation.
//!
//! Vessels are dropped at random origins and orientations, largest class
//! first. A grid that runs out of room is thrown away and generation starts
//! over on a fresh grid: clearance rings overlap, so removing a vessel
//! cannot be done without recomputing the ring of every other vessel.

use core::fmt;

use log::{debug, trace, warn};
use rand::Rng;

use crate::common::FleetError;
use crate::config::{GeneratorLimits, VesselClass, FLEET};
use crate::coordinate::Coordinate;
use crate::grid::Grid;
use crate::vessel::{Orientation, Vessel};

/// Why a single grid attempt was given up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Abandoned {
    /// Every cell is in the clearance set.
    ClearanceFull { placed: usize },
    /// No random placement fit within the per-vessel budget.
    OutOfAttempts { length: usize },
}

impl fmt::Display for Abandoned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Abandoned::ClearanceFull { placed } => {
                write!(f, "clearance covers the grid after {} vessels", placed)
            }
            Abandoned::OutOfAttempts { length } => {
                write!(f, "no room found for a vessel of length {}", length)
            }
        }
    }
}

/// Generate a grid holding the standard [`FLEET`].
pub fn generate_fleet_grid<R: Rng>(
    rng: &mut R,
    limits: &GeneratorLimits,
) -> Result<Grid, FleetError> {
    generate_grid_for(&FLEET, rng, limits)
}

/// Generate a grid holding `fleet`, restarting on a fresh grid whenever an
/// attempt runs out of room.
pub fn generate_grid_for<R: Rng>(
    fleet: &[VesselClass],
    rng: &mut R,
    limits: &GeneratorLimits,
) -> Result<Grid, FleetError> {
    for attempt in 1..=limits.grid_attempts {
        match populate(fleet, rng, limits) {
            Ok(grid) => {
                debug!("fleet of {} vessels placed on grid attempt {}", grid.vessels().len(), attempt);
                return Ok(grid);
            }
            Err(reason) => trace!("grid attempt {} abandoned: {}", attempt, reason),
        }
    }
    warn!("fleet placement exhausted after {} grid attempts", limits.grid_attempts);
    Err(FleetError::PlacementExhausted {
        grid_attempts: limits.grid_attempts,
    })
}

fn populate<R: Rng>(
    fleet: &[VesselClass],
    rng: &mut R,
    limits: &GeneratorLimits,
) -> Result<Grid, Abandoned> {
    let mut grid = Grid::new();
    for class in fleet {
        for _ in 0..class.count() {
            place_random(&mut grid, class.length(), rng, limits.attempts_per_vessel)?;
        }
    }
    Ok(grid)
}

fn place_random<R: Rng>(
    grid: &mut Grid,
    length: usize,
    rng: &mut R,
    attempts: usize,
) -> Result<Vessel, Abandoned> {
    for _ in 0..attempts {
        if grid.is_clearance_full() {
            return Err(Abandoned::ClearanceFull {
                placed: grid.vessels().len(),
            });
        }
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let vessel = Vessel::new(length, Coordinate::random(rng), orientation);
        if grid.place_vessel(&vessel) {
            return Ok(vessel);
        }
    }
    Err(Abandoned::OutOfAttempts { length })
}
