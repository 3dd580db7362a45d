use core::fmt;
use rand::Rng;

use crate::config::GRID_SIZE;

/// A 1-based `(row, col)` position.
///
/// Values outside the grid are representable; bounds are checked by the
/// [`Grid`](crate::Grid) that receives them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    row: i32,
    col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn col(&self) -> i32 {
        self.col
    }

    /// Uniformly random coordinate inside the grid.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let size = GRID_SIZE as i32;
        Self::new(rng.random_range(1..=size), rng.random_range(1..=size))
    }

    /// The coordinate shifted by `(d_row, d_col)`, saturating at the `i32` range.
    pub fn offset(&self, d_row: i32, d_col: i32) -> Self {
        Self::new(self.row.saturating_add(d_row), self.col.saturating_add(d_col))
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
