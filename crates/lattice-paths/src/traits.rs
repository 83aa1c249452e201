use lattice_core::{Point, SpatialGrid};

/// Read access to a rectangular grid of values anchored at the origin.
///
/// Implemented for raw 2D arrays (`Vec<Vec<T>>`, `[Vec<T>]`) and for
/// [`SpatialGrid`], whose value at a position is its top occupant.
pub trait SearchGrid {
    type Value: PartialEq;

    /// Width and height as a `Point`.
    fn dimensions(&self) -> Point;

    /// Value at `p`, or `None` outside the grid or at an empty position.
    fn value_at(&self, p: Point) -> Option<&Self::Value>;

    /// First position (row-major) holding `v`.
    fn find_value(&self, v: &Self::Value) -> Option<Point> {
        let d = self.dimensions();
        (0..d.y)
            .flat_map(|y| (0..d.x).map(move |x| Point::new(x, y)))
            .find(|&p| self.value_at(p) == Some(v))
    }

    /// Whether `p` lies within [`dimensions`](Self::dimensions).
    fn contains(&self, p: Point) -> bool {
        let d = self.dimensions();
        p.x >= 0 && p.y >= 0 && p.x < d.x && p.y < d.y
    }
}

impl<T: PartialEq> SearchGrid for [Vec<T>] {
    type Value = T;

    /// As wide as the longest row.
    fn dimensions(&self) -> Point {
        let w = self.iter().map(Vec::len).max().unwrap_or(0);
        Point::new(w as i32, self.len() as i32)
    }

    fn value_at(&self, p: Point) -> Option<&T> {
        if p.x < 0 || p.y < 0 {
            return None;
        }
        self.get(p.y as usize)?.get(p.x as usize)
    }
}

impl<T: PartialEq> SearchGrid for Vec<Vec<T>> {
    type Value = T;

    fn dimensions(&self) -> Point {
        self.as_slice().dimensions()
    }

    fn value_at(&self, p: Point) -> Option<&T> {
        self.as_slice().value_at(p)
    }
}

impl<T: PartialEq> SearchGrid for SpatialGrid<T> {
    type Value = T;

    fn dimensions(&self) -> Point {
        Point::new(self.column_count() as i32, self.row_count() as i32)
    }

    fn value_at(&self, p: Point) -> Option<&T> {
        self.get_cell_items(p)?.first()
    }
}
