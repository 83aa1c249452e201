//! Region discovery: connected components of cells sharing an occupant.

use std::collections::HashSet;
use std::hash::Hash;

use crate::geom::Direction;
use crate::grid::{CellKey, SpatialGrid};

/// A maximal 4-connected set of cells holding the same occupant.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    /// Member cells, ascending.
    pub cells: Vec<CellKey>,
    pub area: usize,
    /// Number of exposed unit edges.
    pub perimeter: usize,
    /// Number of straight edge runs; collinear exposed edges facing the
    /// same way merge into one side.
    pub sides: usize,
}

impl Region {
    #[inline]
    pub fn contains(&self, key: CellKey) -> bool {
        self.cells.binary_search(&key).is_ok()
    }
}

/// All regions formed by one occupant value.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegionReport<T> {
    pub item: T,
    pub regions: Vec<Region>,
}

impl<T: PartialEq> SpatialGrid<T> {
    /// Partition every cell holding `item` into connected regions.
    ///
    /// Regions come out ordered by their lowest cell key.
    pub fn find_regions(&self, item: &T) -> RegionReport<T>
    where
        T: Clone,
    {
        let mut pending: Vec<CellKey> = self
            .find_points(item)
            .into_iter()
            .filter_map(|p| self.get_cell_key(p))
            .collect();
        let matching: HashSet<CellKey> = pending.iter().copied().collect();

        let mut regions = Vec::new();
        let mut stack = Vec::new();
        while let Some(&first) = pending.first() {
            let mut members = HashSet::new();
            members.insert(first);
            stack.clear();
            stack.push(first);
            while let Some(k) = stack.pop() {
                for (_, nk) in self.map_the_neighborhood(k).iter() {
                    if matching.contains(&nk) && members.insert(nk) {
                        stack.push(nk);
                    }
                }
            }

            let region = self.measure(members);
            pending.retain(|k| !region.contains(*k));
            regions.push(region);
        }

        log::debug!(
            "found {} regions over {} cells",
            regions.len(),
            matching.len()
        );
        RegionReport {
            item: item.clone(),
            regions,
        }
    }

    fn measure(&self, members: HashSet<CellKey>) -> Region {
        let mut exposed: HashSet<(CellKey, Direction)> = HashSet::new();
        for &k in &members {
            let n = self.map_the_neighborhood(k);
            for d in Direction::CANONICAL {
                if !n.get(d).is_some_and(|nk| members.contains(&nk)) {
                    exposed.insert((k, d));
                }
            }
        }

        // An edge starts a side unless the cell before it along the run
        // (left of a horizontal edge, above a vertical one) has the same
        // exposed edge.
        let sides = exposed
            .iter()
            .filter(|&&(k, d)| {
                let n = self.map_the_neighborhood(k);
                let prev = if d.is_vertical() { n.left } else { n.above };
                !prev.is_some_and(|pk| exposed.contains(&(pk, d)))
            })
            .count();

        let mut cells: Vec<CellKey> = members.into_iter().collect();
        cells.sort_unstable();
        Region {
            area: cells.len(),
            perimeter: exposed.len(),
            sides,
            cells,
        }
    }
}

impl<T: Eq + Hash + Clone> SpatialGrid<T> {
    /// Region reports for every distinct occupant, ordered by the first cell
    /// of each report.
    pub fn find_all_regions(&self) -> Vec<RegionReport<T>> {
        let mut reports: Vec<RegionReport<T>> = self
            .get_unique_items()
            .iter()
            .map(|item| self.find_regions(item))
            .collect();
        reports.sort_by_key(|r| r.regions.first().and_then(|g| g.cells.first().copied()));
        reports
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Point;
    use proptest::prelude::*;

    const SMALL: &str = "\
AAAA
BBCD
BBCC
EEEC";

    const LARGE: &str = "\
RRRRIICCFF
RRRRIICCCF
VVRRRCCFFF
VVRCCCJFFF
VVVVCJJCFE
VVIVCCJJEE
VVIIICJJEE
MIIIIIJJEE
MIIISIJEEE
MMMISSJEEE";

    fn fence_prices(text: &str) -> (usize, usize) {
        let g = SpatialGrid::from_chars(text);
        g.find_all_regions()
            .iter()
            .flat_map(|r| r.regions.iter())
            .fold((0, 0), |(a, b), r| {
                (a + r.area * r.perimeter, b + r.area * r.sides)
            })
    }

    #[test]
    fn single_cell_region() {
        let g = SpatialGrid::from_chars("ABA\nBBB");
        let report = g.find_regions(&'A');
        assert_eq!(report.regions.len(), 2);
        for r in &report.regions {
            assert_eq!(r.area, 1);
            assert_eq!(r.perimeter, 4);
            assert_eq!(r.sides, 4);
        }
    }

    #[test]
    fn solid_rectangle() {
        let g = SpatialGrid::from_chars("....\n.##.\n.##.\n.##.\n....");
        let report = g.find_regions(&'#');
        assert_eq!(report.regions.len(), 1);
        let r = &report.regions[0];
        assert_eq!(r.area, 6);
        assert_eq!(r.perimeter, 2 * (2 + 3));
        assert_eq!(r.sides, 4);
    }

    #[test]
    fn rectangle_touching_grid_edges() {
        let g = SpatialGrid::from_chars("xxx\nxxx");
        let r = &g.find_regions(&'x').regions[0];
        assert_eq!(r.perimeter, 10);
        assert_eq!(r.sides, 4);
    }

    #[test]
    fn small_garden() {
        let g = SpatialGrid::from_chars(SMALL);
        let c = &g.find_regions(&'C').regions[0];
        assert_eq!((c.area, c.perimeter, c.sides), (4, 10, 8));
        let e = &g.find_regions(&'E').regions[0];
        assert_eq!((e.area, e.perimeter, e.sides), (3, 8, 4));
        assert_eq!(fence_prices(SMALL), (140, 80));
    }

    #[test]
    fn region_with_holes() {
        let text = "\
OOOOO
OXOXO
OOOOO
OXOXO
OOOOO";
        let g = SpatialGrid::from_chars(text);
        let o = &g.find_regions(&'O').regions[0];
        assert_eq!(o.area, 21);
        assert_eq!(o.perimeter, 36);
        assert_eq!(o.sides, 20);
        assert_eq!(g.find_regions(&'X').regions.len(), 4);
        assert_eq!(fence_prices(text), (772, 436));
    }

    #[test]
    fn interlocked_e_shape() {
        let text = "EEEEE\nEXXXX\nEEEEE\nEXXXX\nEEEEE";
        assert_eq!(fence_prices(text).1, 236);
    }

    #[test]
    fn diagonal_touching_holes() {
        let text = "\
AAAAAA
AAABBA
AAABBA
ABBAAA
ABBAAA
AAAAAA";
        assert_eq!(fence_prices(text).1, 368);
    }

    #[test]
    fn larger_garden() {
        assert_eq!(fence_prices(LARGE), (1930, 1206));
    }

    #[test]
    fn stacked_occupants_join_regions() {
        let mut g = SpatialGrid::from_chars("a.a");
        g.put_item('a', Point::new(1, 0)).unwrap();
        let report = g.find_regions(&'a');
        assert_eq!(report.regions.len(), 1);
        assert_eq!(report.regions[0].cells, vec![CellKey(1), CellKey(2), CellKey(3)]);
    }

    #[test]
    fn missing_item_has_no_regions() {
        let g = SpatialGrid::from_chars(SMALL);
        let report = g.find_regions(&'Z');
        assert_eq!(report.item, 'Z');
        assert!(report.regions.is_empty());
    }

    fn arb_text() -> impl Strategy<Value = String> {
        (1usize..9, 1usize..9).prop_flat_map(|(w, h)| {
            prop::collection::vec(
                prop::collection::vec(prop::sample::select(vec!['A', 'B', 'C']), w),
                h,
            )
            .prop_map(|rows| {
                rows.iter()
                    .map(|r| r.iter().collect::<String>())
                    .collect::<Vec<_>>()
                    .join("\n")
            })
        })
    }

    proptest! {
        #[test]
        fn regions_partition_matching_cells(text in arb_text()) {
            let g = SpatialGrid::from_chars(&text);
            for item in ['A', 'B', 'C'] {
                let report = g.find_regions(&item);
                let total: usize = report.regions.iter().map(|r| r.area).sum();
                prop_assert_eq!(total, g.find_points(&item).len());

                let mut seen = HashSet::new();
                for r in &report.regions {
                    for k in &r.cells {
                        prop_assert!(seen.insert(*k));
                    }
                }
            }
        }

        #[test]
        fn sides_are_even_and_bounded(text in arb_text()) {
            let g = SpatialGrid::from_chars(&text);
            for report in g.find_all_regions() {
                for r in &report.regions {
                    prop_assert!(r.sides >= 4);
                    prop_assert_eq!(r.sides % 2, 0);
                    prop_assert!(r.sides <= r.perimeter);
                    prop_assert!(r.perimeter <= 4 * r.area);
                }
            }
        }
    }
}
