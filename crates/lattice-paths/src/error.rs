use std::fmt;

use lattice_core::{Direction, Point};

use crate::search::Cost;

/// Which end of a search an error refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

/// Search parameters that cannot produce a meaningful search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The grid has no rows or no columns.
    EmptyGrid,
    /// `free_space` and `blocked_space` name the same value, leaving only
    /// the goal enterable.
    ConflictingSpaces,
    /// A move cost calculator returned zero or less.
    NonPositiveMoveCost { direction: Direction, cost: Cost },
    /// A turn cost (fixed or calculated) was negative.
    NegativeTurnCost { direction: Direction, cost: Cost },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => f.write_str("cannot search an empty grid"),
            Self::ConflictingSpaces => {
                f.write_str("free space and blocked space are the same value")
            }
            Self::NonPositiveMoveCost { direction, cost } => {
                write!(f, "move cost {cost} heading {direction} must be positive")
            }
            Self::NegativeTurnCost { direction, cost } => {
                write!(f, "turn cost {cost} heading {direction} must not be negative")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors returned by [`PathSearch`](crate::PathSearch) queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// A start/goal marker is absent from the grid (`pos: None`), or an
    /// explicit position lies outside it.
    NotFound {
        endpoint: Endpoint,
        pos: Option<Point>,
    },
    Configuration(ConfigError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound {
                endpoint,
                pos: None,
            } => write!(f, "{endpoint} marker not found in grid"),
            Self::NotFound {
                endpoint,
                pos: Some(p),
            } => write!(f, "{endpoint} position {p} is outside the grid"),
            Self::Configuration(e) => write!(f, "invalid search configuration: {e}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Configuration(e) => Some(e),
            Self::NotFound { .. } => None,
        }
    }
}

impl From<ConfigError> for SearchError {
    fn from(e: ConfigError) -> Self {
        Self::Configuration(e)
    }
}
