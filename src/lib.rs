#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod combatant;
mod common;
mod config;
mod coordinate;
mod fleet;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
pub mod targeting;
#[cfg(feature = "std")]
pub mod ui;
mod vessel;

pub use bitboard::BitBoard;
pub use combatant::*;
pub use common::*;
pub use config::*;
pub use coordinate::Coordinate;
pub use fleet::{generate_fleet_grid, generate_grid_for};
pub use game::*;
pub use grid::{CellState, Grid, GridView};
#[cfg(feature = "std")]
pub use logging::{init_logging, LogFilter};
pub use targeting::{RandomTargeting, Targeting};
#[cfg(feature = "std")]
pub use targeting::{parse_coordinate, ConsoleTargeting, InputError};
pub use vessel::{Orientation, Vessel};
