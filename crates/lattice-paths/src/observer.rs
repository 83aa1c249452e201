//! Hooks for watching a search expand.

use std::collections::HashMap;
use std::fmt;

use lattice_core::Point;

use crate::search::PathNode;
use crate::traits::SearchGrid;

/// Receives every node a search puts on its frontier.
///
/// Observation never changes the outcome of a search.
pub trait SearchObserver {
    fn on_enqueue(&mut self, node: &PathNode);
}

impl<F: FnMut(&PathNode)> SearchObserver for F {
    fn on_enqueue(&mut self, node: &PathNode) {
        self(node)
    }
}

/// Observer that ignores everything.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {
    #[inline]
    fn on_enqueue(&mut self, _node: &PathNode) {}
}

/// Records enqueued nodes so the exploration can be drawn afterwards.
#[derive(Clone, Debug, Default)]
pub struct TraceRecorder {
    trail: Vec<PathNode>,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueued nodes, oldest first.
    pub fn trail(&self) -> &[PathNode] {
        &self.trail
    }

    /// Draw `grid` with each recorded position replaced by the arrow of the
    /// last heading it was reached with. Empty positions draw as spaces.
    pub fn render<G>(&self, grid: &G) -> String
    where
        G: SearchGrid + ?Sized,
        G::Value: fmt::Display,
    {
        let marks: HashMap<Point, char> = self
            .trail
            .iter()
            .filter_map(|n| n.direction.map(|d| (n.pos, d.token())))
            .collect();
        let d = grid.dimensions();
        let mut out = String::new();
        for y in 0..d.y {
            if y > 0 {
                out.push('\n');
            }
            for x in 0..d.x {
                let p = Point::new(x, y);
                match (marks.get(&p), grid.value_at(p)) {
                    (Some(ch), _) => out.push(*ch),
                    (None, Some(v)) => out.push_str(&v.to_string()),
                    (None, None) => out.push(' '),
                }
            }
        }
        out
    }
}

impl SearchObserver for TraceRecorder {
    fn on_enqueue(&mut self, node: &PathNode) {
        self.trail.push(*node);
    }
}
