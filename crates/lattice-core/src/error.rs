//! Errors raised by [`SpatialGrid`](crate::SpatialGrid) operations.

use std::fmt;

use crate::geom::{Bounds, Point};
use crate::grid::CellKey;

/// Which axis a row/column lookup addressed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row => f.write_str("row"),
            Self::Column => f.write_str("column"),
        }
    }
}

/// Errors that can occur when mutating or slicing a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// An item was placed outside the current bounds. `bounds` is `None`
    /// when the grid has no size yet.
    OutOfBounds { point: Point, bounds: Option<Bounds> },
    /// A cell key that numbers no position of the grid.
    UnknownKey { key: CellKey, cells: usize },
    /// More items were supplied than the grid has columns.
    DimensionMismatch { expected: usize, found: usize },
    /// A 1-based row or column index outside `[1, count]`.
    OutOfRange { axis: Axis, index: usize, count: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                point,
                bounds: Some(b),
            } => write!(f, "point {point} is outside grid bounds {b}"),
            Self::OutOfBounds {
                point,
                bounds: None,
            } => write!(f, "point {point} is outside an unsized grid"),
            Self::UnknownKey { key, cells } => {
                write!(f, "cell {key} does not exist in a grid of {cells} cells")
            }
            Self::DimensionMismatch { expected, found } => write!(
                f,
                "{found} items supplied to a grid with {expected} columns"
            ),
            Self::OutOfRange { axis, index, count } => {
                write!(f, "{axis} {index} is out of range 1..={count}")
            }
        }
    }
}

impl std::error::Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let e = GridError::OutOfBounds {
            point: Point::new(4, 1),
            bounds: Some(Bounds::from_max(Point::new(2, 2))),
        };
        assert_eq!(
            e.to_string(),
            "point (4, 1) is outside grid bounds [(0, 0)-(2, 2)]"
        );

        let e = GridError::OutOfRange {
            axis: Axis::Column,
            index: 0,
            count: 3,
        };
        assert_eq!(e.to_string(), "column 0 is out of range 1..=3");

        let e = GridError::DimensionMismatch {
            expected: 3,
            found: 5,
        };
        assert_eq!(e.to_string(), "5 items supplied to a grid with 3 columns");
    }
}
