//! Common types: shot results and the errors raised by grids and the fleet generator.

use core::fmt;

/// Result of a shot that landed on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// The cell was empty water.
    Miss,
    /// The cell held an intact vessel segment.
    Hit,
}

/// Errors returned by grid and vessel operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Coordinate lies outside the grid.
    OutOfBounds { row: i32, col: i32 },
    /// The cell was already shot at.
    AlreadyTargeted { row: i32, col: i32 },
    /// Orientation symbol other than `V` or `H`.
    InvalidOrientation(char),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds { row, col } => {
                write!(f, "Cell ({}, {}) is outside the grid", row, col)
            }
            GridError::AlreadyTargeted { row, col } => {
                write!(f, "Cell ({}, {}) was already targeted", row, col)
            }
            GridError::InvalidOrientation(c) => {
                write!(f, "Invalid orientation {:?}, expected 'V' or 'H'", c)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GridError {}

/// Errors returned by the random fleet generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FleetError {
    /// Every grid attempt ran out of room before the fleet was complete.
    PlacementExhausted { grid_attempts: usize },
}

impl fmt::Display for FleetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FleetError::PlacementExhausted { grid_attempts } => write!(
                f,
                "Unable to place the fleet after {} grid attempts",
                grid_attempts
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FleetError {}
