//! Grid state: vessel placement with clearance, shot resolution and views.

use alloc::vec::Vec;

use crate::bitboard::BitBoard;
use crate::common::{GridError, ShotResult};
use crate::config::GRID_SIZE;
use crate::coordinate::Coordinate;
use crate::vessel::Vessel;

const N: usize = GRID_SIZE as usize;

type BB = BitBoard<u64, N>;

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    Empty,
    ShipPresent,
    Miss,
    Hit,
}

impl CellState {
    /// Whether the cell has already been shot at.
    pub fn is_targeted(self) -> bool {
        matches!(self, CellState::Miss | CellState::Hit)
    }
}

/// Snapshot of a grid's cells, with vessels hidden unless revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridView {
    cells: [[CellState; N]; N],
}

impl GridView {
    /// Cell at a 1-based coordinate, `None` when out of bounds.
    pub fn cell(&self, coord: Coordinate) -> Option<CellState> {
        Grid::index(coord).ok().map(|(r, c)| self.cells[r][c])
    }

    /// Rows in order, row 1 first.
    pub fn rows(&self) -> &[[CellState; N]; N] {
        &self.cells
    }
}

/// A 6×6 grid holding one fleet and the shots fired at it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    ships: BB,
    hits: BB,
    misses: BB,
    clearance: BB,
    vessels: Vec<Vessel>,
}

impl Grid {
    /// Create an empty grid (no vessels, no shots).
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero-based bitboard index of a 1-based coordinate.
    fn index(coord: Coordinate) -> Result<(usize, usize), GridError> {
        if Self::is_out_of_bounds(coord) {
            return Err(GridError::OutOfBounds {
                row: coord.row(),
                col: coord.col(),
            });
        }
        Ok(((coord.row() - 1) as usize, (coord.col() - 1) as usize))
    }

    /// True if the row or column falls outside `1..=GRID_SIZE`.
    pub fn is_out_of_bounds(coord: Coordinate) -> bool {
        let size = GRID_SIZE as i32;
        !(1..=size).contains(&coord.row()) || !(1..=size).contains(&coord.col())
    }

    /// State of the cell at `coord`, `None` when out of bounds.
    pub fn cell(&self, coord: Coordinate) -> Option<CellState> {
        let (r, c) = Self::index(coord).ok()?;
        let state = if self.hits.get(r, c) {
            CellState::Hit
        } else if self.misses.get(r, c) {
            CellState::Miss
        } else if self.ships.get(r, c) {
            CellState::ShipPresent
        } else {
            CellState::Empty
        };
        Some(state)
    }

    /// Whether `coord` lies in the clearance ring of a placed vessel.
    pub fn is_in_clearance(&self, coord: Coordinate) -> bool {
        match Self::index(coord) {
            Ok((r, c)) => self.clearance.get(r, c),
            Err(_) => false,
        }
    }

    /// Number of cells currently forbidden for new vessels.
    pub fn clearance_len(&self) -> usize {
        self.clearance.count_ones()
    }

    /// True once no cell is left outside the clearance set.
    pub fn is_clearance_full(&self) -> bool {
        self.clearance.is_full()
    }

    /// Whether a vessel segment may go at `coord`.
    pub fn can_place(&self, coord: Coordinate) -> bool {
        self.cell(coord) == Some(CellState::Empty) && !self.is_in_clearance(coord)
    }

    /// Place `vessel` if it has at least one cell and every one of its cells
    /// passes [`Grid::can_place`].
    ///
    /// Either the whole vessel is placed and its neighbourhood added to the
    /// clearance set, or nothing changes and `false` is returned.
    pub fn place_vessel(&mut self, vessel: &Vessel) -> bool {
        if vessel.length() == 0 || !vessel.cells().all(|cell| self.can_place(cell)) {
            return false;
        }
        let mask: BB = vessel
            .cells()
            .filter_map(|cell| Self::index(cell).ok())
            .collect();
        self.ships |= mask;
        self.clearance |= mask.dilate();
        self.vessels.push(*vessel);
        true
    }

    /// Fire at `coord`.
    ///
    /// Empty water becomes a miss, an intact segment becomes a hit. Shots
    /// outside the grid or at a cell already shot are rejected unchanged.
    pub fn shoot(&mut self, coord: Coordinate) -> Result<ShotResult, GridError> {
        let (r, c) = Self::index(coord)?;
        if self.hits.get(r, c) || self.misses.get(r, c) {
            return Err(GridError::AlreadyTargeted {
                row: coord.row(),
                col: coord.col(),
            });
        }
        if self.ships.get(r, c) {
            self.hits.set(r, c);
            Ok(ShotResult::Hit)
        } else {
            self.misses.set(r, c);
            Ok(ShotResult::Miss)
        }
    }

    /// Number of vessel segments that have been hit.
    pub fn count_hits(&self) -> usize {
        self.hits.count_ones()
    }

    /// Number of cells covered by placed vessels, hit or not.
    pub fn ship_cells(&self) -> usize {
        self.ships.count_ones()
    }

    /// Number of vessel segments still intact.
    pub fn intact_cells(&self) -> usize {
        (self.ships & !self.hits).count_ones()
    }

    /// True once every placed vessel segment has been hit.
    pub fn is_defeated(&self) -> bool {
        self.ship_cells() > 0 && self.count_hits() == self.ship_cells()
    }

    /// Vessels in placement order.
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// Coordinates that have not been shot at yet, row-major.
    pub fn untargeted(&self) -> Vec<Coordinate> {
        let open = !(self.hits | self.misses);
        open.iter_set_bits()
            .map(|(r, c)| Coordinate::new(r as i32 + 1, c as i32 + 1))
            .collect()
    }

    /// Cell snapshot for rendering or targeting; `ShipPresent` reads as
    /// `Empty` unless `reveal_ships` is set.
    pub fn view(&self, reveal_ships: bool) -> GridView {
        let mut cells = [[CellState::Empty; N]; N];
        for (r, row) in cells.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                let coord = Coordinate::new(r as i32 + 1, c as i32 + 1);
                let state = self.cell(coord).unwrap_or(CellState::Empty);
                *cell = match state {
                    CellState::ShipPresent if !reveal_ships => CellState::Empty,
                    other => other,
                };
            }
        }
        GridView { cells }
    }
}
