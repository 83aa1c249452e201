//! Search configuration: endpoints, passability and cost rules.

use std::fmt;

use lattice_core::{Direction, Point};

use crate::error::ConfigError;
use crate::search::Cost;

/// Where a search begins.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Start<T> {
    /// An explicit position, optionally with an initial heading. With a
    /// heading, the very first move can already be a turn.
    At {
        pos: Point,
        direction: Option<Direction>,
    },
    /// The first cell (row-major) holding this value.
    Marker(T),
}

impl<T> Start<T> {
    /// Start at `pos` with no heading.
    pub fn at(pos: Point) -> Self {
        Self::At {
            pos,
            direction: None,
        }
    }

    /// Start at `pos` already facing `direction`.
    pub fn facing(pos: Point, direction: Direction) -> Self {
        Self::At {
            pos,
            direction: Some(direction),
        }
    }
}

/// Where a search ends.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Goal<T> {
    At(Point),
    /// The first cell (row-major) holding this value. Every cell holding
    /// it is enterable regardless of the free/blocked rules.
    Marker(T),
}

/// Extra cost charged when a move changes heading.
pub enum TurnCost<'a> {
    Fixed(Cost),
    /// Called with the new heading.
    Calculated(Box<dyn Fn(Direction) -> Cost + 'a>),
}

impl fmt::Debug for TurnCost<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(c) => f.debug_tuple("TurnCost::Fixed").field(c).finish(),
            Self::Calculated(_) => f.write_str("TurnCost::Calculated(..)"),
        }
    }
}

/// Parameters of a [`PathSearch`](crate::PathSearch) query.
///
/// ```
/// use lattice_paths::{Goal, SearchParams, Start};
///
/// let params = SearchParams::new(Start::Marker('S'), Goal::Marker('E'))
///     .free_space('.')
///     .blocked_space('#')
///     .turn_cost(1000);
/// assert_eq!(params.blocked_space, Some('#'));
/// ```
pub struct SearchParams<'a, T> {
    pub start: Start<T>,
    pub goal: Goal<T>,
    /// When set, only cells holding this value (or the goal) are enterable.
    pub free_space: Option<T>,
    /// Cells holding this value are never enterable, unless they are the
    /// goal. Checked before `free_space`.
    pub blocked_space: Option<T>,
    turn_cost: TurnCost<'a>,
    move_cost: Option<Box<dyn Fn(Direction) -> Cost + 'a>>,
}

impl<'a, T> SearchParams<'a, T> {
    /// Uniform move cost 1, no turn cost, every cell enterable.
    pub fn new(start: Start<T>, goal: Goal<T>) -> Self {
        Self {
            start,
            goal,
            free_space: None,
            blocked_space: None,
            turn_cost: TurnCost::Fixed(0),
            move_cost: None,
        }
    }

    /// Set the free-space value (builder).
    pub fn free_space(mut self, v: T) -> Self {
        self.free_space = Some(v);
        self
    }

    /// Set the blocked-space value (builder).
    pub fn blocked_space(mut self, v: T) -> Self {
        self.blocked_space = Some(v);
        self
    }

    /// Charge a fixed `cost` for every change of heading (builder).
    pub fn turn_cost(mut self, cost: Cost) -> Self {
        self.turn_cost = TurnCost::Fixed(cost);
        self
    }

    /// Compute the turn cost from the new heading (builder).
    pub fn turn_cost_with(mut self, f: impl Fn(Direction) -> Cost + 'a) -> Self {
        self.turn_cost = TurnCost::Calculated(Box::new(f));
        self
    }

    /// Compute the cost of a step from its heading (builder). Must be
    /// positive.
    pub fn move_cost_with(mut self, f: impl Fn(Direction) -> Cost + 'a) -> Self {
        self.move_cost = Some(Box::new(f));
        self
    }

    pub(crate) fn move_cost_of(&self, direction: Direction) -> Result<Cost, ConfigError> {
        let cost = self.move_cost.as_ref().map_or(1, |f| f(direction));
        if cost <= 0 {
            return Err(ConfigError::NonPositiveMoveCost { direction, cost });
        }
        Ok(cost)
    }

    pub(crate) fn turn_cost_of(&self, direction: Direction) -> Result<Cost, ConfigError> {
        let cost = match &self.turn_cost {
            TurnCost::Fixed(c) => *c,
            TurnCost::Calculated(f) => f(direction),
        };
        if cost < 0 {
            return Err(ConfigError::NegativeTurnCost { direction, cost });
        }
        Ok(cost)
    }
}

impl<T: fmt::Debug> fmt::Debug for SearchParams<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchParams")
            .field("start", &self.start)
            .field("goal", &self.goal)
            .field("free_space", &self.free_space)
            .field("blocked_space", &self.blocked_space)
            .field("turn_cost", &self.turn_cost)
            .field("move_cost", &self.move_cost.as_ref().map(|_| ".."))
            .finish()
    }
}
