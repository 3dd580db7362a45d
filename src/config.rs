//! Fixed game configuration: grid size, fleet composition and generator limits.

/// Side length of the square grid.
pub const GRID_SIZE: u8 = 6;

/// Number of cells on one grid.
pub const CELL_COUNT: usize = GRID_SIZE as usize * GRID_SIZE as usize;

/// One size class of the fleet: how long each vessel is and how many are required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VesselClass {
    length: usize,
    count: usize,
}

impl VesselClass {
    pub const fn new(length: usize, count: usize) -> Self {
        Self { length, count }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

pub const NUM_CLASSES: usize = 3;

/// Fleet placed on every grid, largest vessels first.
pub const FLEET: [VesselClass; NUM_CLASSES] = [
    VesselClass::new(3, 1),
    VesselClass::new(2, 2),
    VesselClass::new(1, 4),
];

/// Number of cells covered by a fleet.
pub const fn fleet_cells(fleet: &[VesselClass]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < fleet.len() {
        total += fleet[i].length * fleet[i].count;
        i += 1;
    }
    total
}

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = fleet_cells(&FLEET);

/// Bounds on the random fleet generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorLimits {
    /// Random placements tried for one vessel before the grid is abandoned.
    pub attempts_per_vessel: usize,
    /// Whole-grid restarts before generation gives up.
    pub grid_attempts: usize,
}

impl Default for GeneratorLimits {
    fn default() -> Self {
        Self {
            attempts_per_vessel: 500,
            grid_attempts: 1_000,
        }
    }
}

/// Environment variable read by [`crate::init_logging`].
pub const LOG_ENV: &str = "SEA_BATTLE_LOG";
