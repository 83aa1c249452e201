//! **lattice-core**: sparse 2D grids for text-shaped puzzles and maps.
//!
//! This crate provides the foundational types used across the *lattice*
//! workspace: geometry primitives, a [`SpatialGrid`] whose cells hold stacks
//! of occupants, and region discovery (connected components with area,
//! perimeter and side counts).

pub mod error;
pub mod geom;
pub mod grid;
pub mod region;

pub use error::{Axis, GridError};
pub use geom::{Bounds, BoundsIter, Direction, Point};
pub use grid::{CellKey, DrawOptions, Locator, Neighborhood, Occupants, SpatialGrid};
pub use region::{Region, RegionReport};
