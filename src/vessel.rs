//! Vessel definitions: orientation and the straight run of cells a vessel covers.

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::common::GridError;
use crate::coordinate::Coordinate;

/// Orientation of a vessel on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Cells run down the rows.
    Vertical,
    /// Cells run along the columns.
    Horizontal,
}

impl Orientation {
    /// Row and column step between consecutive cells.
    fn step(self) -> (i32, i32) {
        match self {
            Orientation::Vertical => (1, 0),
            Orientation::Horizontal => (0, 1),
        }
    }
}

impl TryFrom<char> for Orientation {
    type Error = GridError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'V' => Ok(Orientation::Vertical),
            'H' => Ok(Orientation::Horizontal),
            _ => Err(GridError::InvalidOrientation(c)),
        }
    }
}

impl FromStr for Orientation {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Orientation::try_from(c),
            (Some(c), Some(_)) => Err(GridError::InvalidOrientation(c)),
            (None, _) => Err(GridError::InvalidOrientation(' ')),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Vertical => write!(f, "V"),
            Orientation::Horizontal => write!(f, "H"),
        }
    }
}

/// A vessel: `length` cells starting at `origin` and running along `orientation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vessel {
    length: usize,
    origin: Coordinate,
    orientation: Orientation,
}

impl Vessel {
    pub fn new(length: usize, origin: Coordinate, orientation: Orientation) -> Self {
        Self {
            length,
            origin,
            orientation,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Cells covered by the vessel, origin first.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let origin = self.origin;
        let (dr, dc) = self.orientation.step();
        let length = i32::try_from(self.length).unwrap_or(i32::MAX);
        (0..length).map(move |i| origin.offset(dr * i, dc * i))
    }

    /// Cells covered by the vessel, collected.
    pub fn occupied_cells(&self) -> Vec<Coordinate> {
        self.cells().collect()
    }
}
