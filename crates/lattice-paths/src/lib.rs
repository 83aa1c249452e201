//! Direction-aware path searches over 2D grids.
//!
//! Searches run through [`PathSearch`], which owns its frontier and state
//! maps so repeated queries reuse their allocations:
//!
//! - **Dijkstra** with heading-dependent turn and move costs
//!   ([`PathSearch::find_paths`])
//! - **All optimal paths**, keeping every path that ties for the minimum
//!   cost ([`PathSearch::find_all_optimal_paths`])
//! - **A\*** between two positions with unit costs ([`PathSearch::astar_path`])
//!
//! Any [`SearchGrid`] can be searched: raw `Vec<Vec<T>>` arrays and
//! [`SpatialGrid`](lattice_core::SpatialGrid) implement it out of the box.
//!
//! ```
//! use lattice_paths::{Goal, PathSearch, SearchParams, Start};
//!
//! let grid: Vec<Vec<char>> = ["S.#", "..#", "..E"]
//!     .iter()
//!     .map(|row| row.chars().collect())
//!     .collect();
//! let params = SearchParams::new(Start::Marker('S'), Goal::Marker('E'))
//!     .free_space('.')
//!     .blocked_space('#');
//! let paths = PathSearch::new().find_paths(&grid, &params).unwrap();
//! assert_eq!(paths[0].cost, 4);
//! ```

mod astar;
mod dijkstra;
mod distance;
pub mod error;
mod neighbors;
mod observer;
mod optimal;
mod params;
mod queue;
mod search;
mod traits;

pub use distance::manhattan;
pub use error::{ConfigError, Endpoint, SearchError};
pub use neighbors::headings;
pub use observer::{NoopObserver, SearchObserver, TraceRecorder};
pub use optimal::optimal_tiles;
pub use params::{Goal, SearchParams, Start, TurnCost};
pub use queue::PriorityQueue;
pub use search::{Cost, PathNode, PathResult, PathSearch};
pub use traits::SearchGrid;
