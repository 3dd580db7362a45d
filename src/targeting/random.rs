use log::trace;
use rand::rngs::SmallRng;

use crate::coordinate::Coordinate;
use crate::grid::GridView;

use super::Targeting;

/// Computer opponent: fires at a uniformly random cell, shot history ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomTargeting;

impl RandomTargeting {
    pub fn new() -> Self {
        Self
    }
}

impl Targeting for RandomTargeting {
    fn select_target(&mut self, rng: &mut SmallRng, _view: &GridView) -> Option<Coordinate> {
        let coord = Coordinate::random(rng);
        trace!("random targeting picked {}", coord);
        Some(coord)
    }
}
