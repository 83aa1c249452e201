use lattice_core::Point;

use crate::PathSearch;
use crate::error::{ConfigError, SearchError};
use crate::observer::{NoopObserver, SearchObserver};
use crate::params::SearchParams;
use crate::search::{PathNode, PathResult, prepare, successors};
use crate::traits::SearchGrid;

impl PathSearch {
    /// Direction-aware Dijkstra search from the start to the goal.
    ///
    /// Each `(position, heading)` state is settled once, at its cheapest
    /// cost. Every time a goal state settles, the path to it is rebuilt and
    /// recorded, so the result holds one path per heading the goal can be
    /// entered with, cheapest first. An empty vector means the goal is
    /// unreachable.
    pub fn find_paths<G>(
        &mut self,
        grid: &G,
        params: &SearchParams<'_, G::Value>,
    ) -> Result<Vec<PathResult>, SearchError>
    where
        G: SearchGrid + ?Sized,
    {
        self.find_paths_observed(grid, params, &mut NoopObserver)
    }

    /// Like [`find_paths`](Self::find_paths), reporting every enqueued node
    /// to `observer`.
    pub fn find_paths_observed<G, O>(
        &mut self,
        grid: &G,
        params: &SearchParams<'_, G::Value>,
        observer: &mut O,
    ) -> Result<Vec<PathResult>, SearchError>
    where
        G: SearchGrid + ?Sized,
        O: SearchObserver + ?Sized,
    {
        let setup = prepare(grid, params)?;
        self.reset();
        log::debug!(
            "dijkstra search from {} to {}",
            setup.start.pos,
            setup.goal
        );

        self.seed(setup.start, 0);
        let mut succ = std::mem::take(&mut self.succ);
        let mut results = Vec::new();
        let outcome = self.settle_all(grid, params, setup.goal, observer, &mut succ, &mut results);
        self.succ = succ;
        outcome?;

        log::debug!(
            "dijkstra search settled {} states, {} path(s) found",
            self.visited.len(),
            results.len()
        );
        Ok(results)
    }

    fn settle_all<G, O>(
        &mut self,
        grid: &G,
        params: &SearchParams<'_, G::Value>,
        goal: Point,
        observer: &mut O,
        succ: &mut Vec<PathNode>,
        results: &mut Vec<PathResult>,
    ) -> Result<(), ConfigError>
    where
        G: SearchGrid + ?Sized,
        O: SearchObserver + ?Sized,
    {
        while let Some(ci) = self.open.dequeue() {
            let current = self.arena[ci];
            let node = current.node;
            let key = node.state();
            if !self.visited.insert(key) {
                continue;
            }
            if let Some(prev) = current.previous {
                self.parents.insert(key, prev);
            }

            if node.pos == goal {
                log::trace!("goal reached heading {:?} at cost {}", node.direction, node.cost);
                results.push(self.trace_parents(node));
                continue;
            }

            successors(grid, params, goal, &node, succ)?;
            for next in succ.iter() {
                if self.visited.contains(&next.state()) {
                    continue;
                }
                self.push(*next, ci, next.cost);
                observer.on_enqueue(next);
            }
        }
        Ok(())
    }
}
