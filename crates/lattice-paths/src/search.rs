use std::collections::{HashMap, HashSet};

use lattice_core::{Direction, Point};

use crate::error::{ConfigError, Endpoint, SearchError};
use crate::neighbors::headings;
use crate::params::{Goal, SearchParams, Start};
use crate::queue::PriorityQueue;
use crate::traits::SearchGrid;

/// Accumulated path cost.
pub type Cost = i64;

/// A position reached with a given cost and heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: Cost,
    /// Heading of the last move; `None` only for the start node.
    pub direction: Option<Direction>,
}

pub(crate) type StateKey = (Point, Option<Direction>);

impl PathNode {
    /// The search state this node belongs to: the same position reached
    /// with different headings are distinct states.
    #[inline]
    pub fn state(&self) -> StateKey {
        (self.pos, self.direction)
    }
}

/// A complete path from start to goal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    /// Nodes from start to goal inclusive.
    pub path: Vec<PathNode>,
    /// Cost of the final node.
    pub cost: Cost,
}

impl PathResult {
    pub fn positions(&self) -> Vec<Point> {
        self.path.iter().map(|n| n.pos).collect()
    }
}

// ---------------------------------------------------------------------------
// Internal search bookkeeping
// ---------------------------------------------------------------------------

/// Arena entry: a node and the index of the node it was expanded from.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Link {
    pub(crate) node: PathNode,
    pub(crate) previous: Option<usize>,
}

/// Endpoints resolved against a grid.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Setup {
    pub(crate) start: PathNode,
    pub(crate) goal: Point,
}

// ---------------------------------------------------------------------------
// PathSearch
// ---------------------------------------------------------------------------

/// Reusable engine for direction-aware shortest-path queries.
///
/// `PathSearch` owns its frontier, node arena and state maps so repeated
/// queries reuse their allocations. It is not bound to a grid; each query
/// takes the grid and [`SearchParams`] to use.
#[derive(Default)]
pub struct PathSearch {
    pub(crate) arena: Vec<Link>,
    pub(crate) open: PriorityQueue<usize>,
    pub(crate) visited: HashSet<StateKey>,
    pub(crate) parents: HashMap<StateKey, usize>,
    pub(crate) best: HashMap<StateKey, Cost>,
    pub(crate) succ: Vec<PathNode>,
}

impl PathSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything from the previous query.
    pub(crate) fn reset(&mut self) {
        self.arena.clear();
        self.open.clear();
        self.visited.clear();
        self.parents.clear();
        self.best.clear();
        self.succ.clear();
    }

    /// Seed the arena and frontier with `start`.
    pub(crate) fn seed(&mut self, start: PathNode, priority: Cost) {
        self.arena.push(Link {
            node: start,
            previous: None,
        });
        self.open.enqueue(0, priority);
    }

    /// Add `node` reached from arena entry `from` and return its index.
    pub(crate) fn push(&mut self, node: PathNode, from: usize, priority: Cost) -> usize {
        let idx = self.arena.len();
        self.arena.push(Link {
            node,
            previous: Some(from),
        });
        self.open.enqueue(idx, priority);
        idx
    }

    /// Rebuild the path ending at arena entry `idx` by following arena links.
    pub(crate) fn trace_arena(&self, idx: usize) -> PathResult {
        let mut path = Vec::new();
        let mut cur = Some(idx);
        while let Some(i) = cur {
            let link = self.arena[i];
            path.push(link.node);
            cur = link.previous;
        }
        path.reverse();
        let cost = path.last().map_or(0, |n| n.cost);
        PathResult { path, cost }
    }

    /// Rebuild the path ending at `node` by following the settled-parent map.
    pub(crate) fn trace_parents(&self, node: PathNode) -> PathResult {
        let mut path = vec![node];
        let mut key = node.state();
        while let Some(&p) = self.parents.get(&key) {
            let prev = self.arena[p].node;
            path.push(prev);
            key = prev.state();
        }
        path.reverse();
        PathResult {
            path,
            cost: node.cost,
        }
    }
}

// ---------------------------------------------------------------------------
// Grid rules shared by the searches
// ---------------------------------------------------------------------------

/// Validate `params` against `grid` and locate both endpoints.
pub(crate) fn prepare<G>(grid: &G, params: &SearchParams<'_, G::Value>) -> Result<Setup, SearchError>
where
    G: SearchGrid + ?Sized,
{
    let d = grid.dimensions();
    if d.x <= 0 || d.y <= 0 {
        return Err(ConfigError::EmptyGrid.into());
    }
    if let (Some(free), Some(blocked)) = (&params.free_space, &params.blocked_space) {
        if free == blocked {
            return Err(ConfigError::ConflictingSpaces.into());
        }
    }

    let (start, direction) = match &params.start {
        Start::At { pos, direction } => {
            if !grid.contains(*pos) {
                return Err(SearchError::NotFound {
                    endpoint: Endpoint::Start,
                    pos: Some(*pos),
                });
            }
            (*pos, *direction)
        }
        Start::Marker(v) => {
            let pos = grid.find_value(v).ok_or(SearchError::NotFound {
                endpoint: Endpoint::Start,
                pos: None,
            })?;
            (pos, None)
        }
    };
    let goal = match &params.goal {
        Goal::At(pos) => {
            if !grid.contains(*pos) {
                return Err(SearchError::NotFound {
                    endpoint: Endpoint::Goal,
                    pos: Some(*pos),
                });
            }
            *pos
        }
        Goal::Marker(v) => grid.find_value(v).ok_or(SearchError::NotFound {
            endpoint: Endpoint::Goal,
            pos: None,
        })?,
    };

    Ok(Setup {
        start: PathNode {
            pos: start,
            cost: 0,
            direction,
        },
        goal,
    })
}

/// Whether a search may step onto `p`.
pub(crate) fn enterable<G>(grid: &G, params: &SearchParams<'_, G::Value>, goal: Point, p: Point) -> bool
where
    G: SearchGrid + ?Sized,
{
    if !grid.contains(p) {
        return false;
    }
    if p == goal {
        return true;
    }
    let Some(v) = grid.value_at(p) else {
        return false;
    };
    if matches!(&params.goal, Goal::Marker(m) if m == v) {
        return true;
    }
    if params.blocked_space.as_ref() == Some(v) {
        return false;
    }
    params.free_space.as_ref().is_none_or(|f| f == v)
}

/// Fill `out` with the nodes reachable in one move from `node`, in
/// [`headings`] order.
pub(crate) fn successors<G>(
    grid: &G,
    params: &SearchParams<'_, G::Value>,
    goal: Point,
    node: &PathNode,
    out: &mut Vec<PathNode>,
) -> Result<(), ConfigError>
where
    G: SearchGrid + ?Sized,
{
    out.clear();
    for d in headings(node.direction) {
        let next = node.pos.step(d);
        if !enterable(grid, params, goal, next) {
            continue;
        }
        let mut step = params.move_cost_of(d)?;
        if node.direction.is_some_and(|cur| cur != d) {
            step += params.turn_cost_of(d)?;
        }
        out.push(PathNode {
            pos: next,
            cost: node.cost + step,
            direction: Some(d),
        });
    }
    Ok(())
}
