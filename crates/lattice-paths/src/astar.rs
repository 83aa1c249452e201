use lattice_core::{Direction, Point};

use crate::PathSearch;
use crate::distance::manhattan;
use crate::search::{Cost, PathNode};
use crate::traits::SearchGrid;

impl PathSearch {
    /// Plain A* between two positions with unit step costs and no heading.
    ///
    /// `passable` decides which values may be entered; `from` itself is
    /// never checked. Returns the positions from `from` to `to` inclusive,
    /// or `None` if either lies outside the grid or no path exists.
    pub fn astar_path<G, F>(&mut self, grid: &G, from: Point, to: Point, passable: F) -> Option<Vec<Point>>
    where
        G: SearchGrid + ?Sized,
        F: Fn(&G::Value) -> bool,
    {
        if !grid.contains(from) || !grid.contains(to) {
            return None;
        }
        self.reset();
        log::debug!("astar search from {from} to {to}");

        let h = |p: Point| Cost::from(manhattan(p, to));
        self.seed(
            PathNode {
                pos: from,
                cost: 0,
                direction: None,
            },
            h(from),
        );
        self.best.insert((from, None), 0);

        while let Some(ci) = self.open.dequeue() {
            let node = self.arena[ci].node;
            if !self.visited.insert((node.pos, None)) {
                continue;
            }
            if node.pos == to {
                let path = self.trace_arena(ci).positions();
                log::debug!("astar search found a path of {} steps", path.len() - 1);
                return Some(path);
            }
            for d in Direction::CANONICAL {
                let next = node.pos.step(d);
                if !grid.value_at(next).is_some_and(|v| passable(v)) {
                    continue;
                }
                let key = (next, None);
                if self.visited.contains(&key) {
                    continue;
                }
                let g = node.cost + 1;
                if self.best.get(&key).is_some_and(|&b| b <= g) {
                    continue;
                }
                self.best.insert(key, g);
                let next = PathNode {
                    pos: next,
                    cost: g,
                    direction: Some(d),
                };
                self.push(next, ci, g + h(next.pos));
            }
        }
        log::debug!("astar search exhausted {} states without reaching {to}", self.visited.len());
        None
    }
}
