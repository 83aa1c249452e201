use std::collections::HashSet;

use lattice_core::Point;

use crate::PathSearch;
use crate::error::{ConfigError, SearchError};
use crate::observer::{NoopObserver, SearchObserver};
use crate::params::SearchParams;
use crate::search::{Cost, PathNode, PathResult, prepare, successors};
use crate::traits::SearchGrid;

impl PathSearch {
    /// Find every minimum-cost path from the start to the goal.
    ///
    /// Unlike [`find_paths`](Self::find_paths), a state may be expanded
    /// again when reached at a cost equal to its best, so paths that tie
    /// are all kept. All returned paths share the same cost; an empty
    /// vector means the goal is unreachable.
    pub fn find_all_optimal_paths<G>(
        &mut self,
        grid: &G,
        params: &SearchParams<'_, G::Value>,
    ) -> Result<Vec<PathResult>, SearchError>
    where
        G: SearchGrid + ?Sized,
    {
        self.find_all_optimal_paths_observed(grid, params, &mut NoopObserver)
    }

    /// Like [`find_all_optimal_paths`](Self::find_all_optimal_paths),
    /// reporting every enqueued node to `observer`.
    pub fn find_all_optimal_paths_observed<G, O>(
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
            "optimal path search from {} to {}",
            setup.start.pos,
            setup.goal
        );

        self.seed(setup.start, 0);
        let mut succ = std::mem::take(&mut self.succ);
        let outcome = self.expand_ties(grid, params, setup.goal, observer, &mut succ);
        self.succ = succ;
        let goals = outcome?;

        let results: Vec<PathResult> = goals.into_iter().map(|i| self.trace_arena(i)).collect();
        log::debug!(
            "optimal path search expanded {} nodes, {} path(s) at cost {:?}",
            self.arena.len(),
            results.len(),
            results.first().map(|r| r.cost)
        );
        Ok(results)
    }

    /// Run the search and return the arena indices of the cheapest goal
    /// nodes.
    fn expand_ties<G, O>(
        &mut self,
        grid: &G,
        params: &SearchParams<'_, G::Value>,
        goal: Point,
        observer: &mut O,
        succ: &mut Vec<PathNode>,
    ) -> Result<Vec<usize>, ConfigError>
    where
        G: SearchGrid + ?Sized,
        O: SearchObserver + ?Sized,
    {
        let mut cheapest: Option<Cost> = None;
        let mut goals = Vec::new();

        while let Some(ci) = self.open.dequeue() {
            let node = self.arena[ci].node;
            let key = node.state();
            if self.best.get(&key).is_some_and(|&b| node.cost > b) {
                continue;
            }
            self.best.insert(key, node.cost);

            if node.pos == goal {
                match cheapest {
                    Some(c) if node.cost > c => continue,
                    Some(c) if node.cost == c => {}
                    _ => goals.clear(),
                }
                log::trace!("optimal goal reached heading {:?} at cost {}", node.direction, node.cost);
                goals.push(ci);
                cheapest = Some(node.cost);
                continue;
            }

            successors(grid, params, goal, &node, succ)?;
            for next in succ.iter() {
                if cheapest.is_some_and(|c| next.cost > c) {
                    continue;
                }
                if self.best.get(&next.state()).is_some_and(|&b| next.cost > b) {
                    continue;
                }
                self.push(*next, ci, next.cost);
                observer.on_enqueue(next);
            }
        }
        Ok(goals)
    }
}

/// Every position lying on at least one of `results`.
pub fn optimal_tiles(results: &[PathResult]) -> HashSet<Point> {
    results
        .iter()
        .flat_map(|r| r.path.iter().map(|n| n.pos))
        .collect()
}
