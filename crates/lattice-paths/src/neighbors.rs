use lattice_core::Direction;
use lattice_core::Direction::{East, North, South, West};

/// Order in which headings are tried after arriving with `from`.
///
/// The current heading always comes first; the start node (no heading)
/// uses [`Direction::CANONICAL`]. Only traversal order among equal costs
/// depends on this, never the minimum cost found.
pub fn headings(from: Option<Direction>) -> [Direction; 4] {
    match from {
        None => Direction::CANONICAL,
        Some(North) => [North, East, West, South],
        Some(South) => [South, East, West, North],
        Some(East) => [East, North, South, West],
        Some(West) => [West, North, South, East],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_heading_first_and_all_present() {
        for d in Direction::CANONICAL {
            let order = headings(Some(d));
            assert_eq!(order[0], d);
            assert_eq!(order[3], d.reverse());
            for other in Direction::CANONICAL {
                assert!(order.contains(&other));
            }
        }
        assert_eq!(headings(None), [North, South, East, West]);
    }
}
