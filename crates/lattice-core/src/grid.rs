//! The [`SpatialGrid`] type: a sparse 2D grid whose cells hold zero or more
//! occupants.
//!
//! Positions are addressed either by [`Point`] or by a 1-based row-major
//! [`CellKey`] (`key = columns * y + x + 1`). A cell with no occupants has no
//! entry at all, so "absent" and "empty" are the same thing to every query.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use smallvec::{SmallVec, smallvec};

use crate::error::{Axis, GridError};
use crate::geom::{Bounds, Direction, Point};

/// Occupant list of a single cell, most recently put first.
pub type Occupants<T> = SmallVec<[T; 2]>;

// ---------------------------------------------------------------------------
// CellKey / Locator / Neighborhood
// ---------------------------------------------------------------------------

/// 1-based row-major cell number.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellKey(pub usize);

impl CellKey {
    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where to put or delete an item.
///
/// A [`Point`] is bounds-checked. A [`CellKey`] comes from the grid itself
/// (e.g. from [`SpatialGrid::map_the_neighborhood`]) and is trusted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Locator {
    Point(Point),
    Key(CellKey),
}

impl From<Point> for Locator {
    fn from(p: Point) -> Self {
        Self::Point(p)
    }
}

impl From<CellKey> for Locator {
    fn from(k: CellKey) -> Self {
        Self::Key(k)
    }
}

/// Keys of the four orthogonal neighbours of a cell; `None` at grid edges.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Neighborhood {
    pub above: Option<CellKey>,
    pub below: Option<CellKey>,
    pub left: Option<CellKey>,
    pub right: Option<CellKey>,
}

impl Neighborhood {
    /// Neighbour key in heading `dir`.
    #[inline]
    pub fn get(&self, dir: Direction) -> Option<CellKey> {
        match dir {
            Direction::North => self.above,
            Direction::South => self.below,
            Direction::East => self.right,
            Direction::West => self.left,
        }
    }

    /// Existing neighbours, in [`Direction::CANONICAL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, CellKey)> {
        let n = *self;
        Direction::CANONICAL
            .into_iter()
            .filter_map(move |d| n.get(d).map(|k| (d, k)))
    }
}

// ---------------------------------------------------------------------------
// DrawOptions
// ---------------------------------------------------------------------------

/// Options for [`SpatialGrid::draw_grid`].
#[derive(Clone, Debug)]
pub struct DrawOptions<T> {
    /// Only draw these items; everything else becomes the placeholder.
    pub filter: Option<Vec<T>>,
    /// Character drawn for empty or filtered-out cells.
    pub placeholder: char,
}

impl<T> Default for DrawOptions<T> {
    fn default() -> Self {
        Self {
            filter: None,
            placeholder: '.',
        }
    }
}

impl<T> DrawOptions<T> {
    /// Restrict drawing to `items` (builder).
    pub fn with_filter(mut self, items: Vec<T>) -> Self {
        self.filter = Some(items);
        self
    }

    /// Set the placeholder character (builder).
    pub fn with_placeholder(mut self, ch: char) -> Self {
        self.placeholder = ch;
        self
    }
}

// ---------------------------------------------------------------------------
// SpatialGrid
// ---------------------------------------------------------------------------

/// A sparse 2D grid mapping positions to stacks of occupants.
///
/// The grid owns its [`Bounds`]; they only grow (via [`add_row`]) except on
/// [`clear`], [`set_bounds`] or [`set_grid`], which also discard every cell.
///
/// [`add_row`]: SpatialGrid::add_row
/// [`clear`]: SpatialGrid::clear
/// [`set_bounds`]: SpatialGrid::set_bounds
/// [`set_grid`]: SpatialGrid::set_grid
#[derive(Debug, Clone)]
pub struct SpatialGrid<T> {
    bounds: Option<Bounds>,
    cells: HashMap<Point, Occupants<T>>,
    neighborhoods: RefCell<HashMap<CellKey, Neighborhood>>,
}

impl<T> Default for SpatialGrid<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SpatialGrid<T> {
    /// Create an empty grid with no rows and no columns.
    pub fn new() -> Self {
        Self {
            bounds: None,
            cells: HashMap::new(),
            neighborhoods: RefCell::new(HashMap::new()),
        }
    }

    /// Build a grid from delimited text.
    ///
    /// `input` is split into rows on `row_delim` and each row into tokens
    /// on `cell_delim` (an empty `cell_delim` yields one token per
    /// character). Every token goes through `parse`. The grid is as wide
    /// as the longest row; shorter rows leave their tail cells empty.
    pub fn from_text<F>(input: &str, row_delim: &str, cell_delim: &str, parse: F) -> Self
    where
        F: FnMut(&str) -> T,
    {
        let mut grid = Self::new();
        grid.set_grid(input, row_delim, cell_delim, parse);
        grid
    }

    /// Destructively re-initialise the grid from text. See
    /// [`from_text`](Self::from_text).
    pub fn set_grid<F>(&mut self, input: &str, row_delim: &str, cell_delim: &str, mut parse: F)
    where
        F: FnMut(&str) -> T,
    {
        self.clear();

        let input = if row_delim.is_empty() {
            input
        } else {
            input.strip_suffix(row_delim).unwrap_or(input)
        };
        if input.is_empty() {
            return;
        }

        let rows: Vec<Vec<T>> = tokens(input, row_delim)
            .into_iter()
            .map(|row| tokens(row, cell_delim).into_iter().map(&mut parse).collect())
            .collect();

        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        if width == 0 {
            return;
        }

        self.bounds = Some(Bounds::from_max(Point::new(
            width as i32 - 1,
            rows.len() as i32 - 1,
        )));
        for (y, row) in rows.into_iter().enumerate() {
            for (x, item) in row.into_iter().enumerate() {
                self.cells
                    .insert(Point::new(x as i32, y as i32), smallvec![item]);
            }
        }
    }

    /// Resize the grid to span the origin to `max`, discarding all cells.
    pub fn set_bounds(&mut self, max: Point) {
        self.cells.clear();
        self.bounds = Some(Bounds::from_max(max));
        self.neighborhoods.get_mut().clear();
    }

    /// Drop every cell and return to the unsized state.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.bounds = None;
        self.neighborhoods.get_mut().clear();
    }

    /// Current bounds, or `None` for a grid that has never been sized.
    #[inline]
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.bounds.map_or(0, Bounds::height)
    }

    #[inline]
    pub fn column_count(&self) -> usize {
        self.bounds.map_or(0, Bounds::width)
    }

    /// Number of addressable positions (`rows * columns`).
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.row_count() * self.column_count()
    }

    /// Number of positions holding at least one occupant.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no position holds an occupant.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` is inside the current bounds.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.is_some_and(|b| b.is_inside(p))
    }

    /// Enlarge the grid by one row, filling it from `items`.
    ///
    /// On an unsized grid the first row defines the column count.
    pub fn add_row<I>(&mut self, items: I) -> Result<(), GridError>
    where
        I: IntoIterator<Item = T>,
    {
        let items: Vec<T> = items.into_iter().collect();
        let (origin, y) = match self.bounds.as_mut() {
            None => {
                let width = items.len().max(1);
                let b = Bounds::from_max(Point::new(width as i32 - 1, 0));
                self.bounds = Some(b);
                (b.min(), 0)
            }
            Some(b) => {
                if items.len() > b.width() {
                    return Err(GridError::DimensionMismatch {
                        expected: b.width(),
                        found: items.len(),
                    });
                }
                b.put(Point::new(b.max_x(), b.max_y() + 1));
                (b.min(), b.max_y())
            }
        };
        for (i, item) in items.into_iter().enumerate() {
            self.cells
                .insert(Point::new(origin.x + i as i32, y), smallvec![item]);
        }
        self.neighborhoods.get_mut().clear();
        Ok(())
    }

    /// Occupants of each position in 1-based row `n`; empty slices for
    /// empty positions.
    pub fn get_row(&self, n: usize) -> Result<Vec<&[T]>, GridError> {
        let count = self.row_count();
        let b = match self.bounds {
            Some(b) if (1..=count).contains(&n) => b,
            _ => {
                return Err(GridError::OutOfRange {
                    axis: Axis::Row,
                    index: n,
                    count,
                });
            }
        };
        let y = b.min_y() + n as i32 - 1;
        Ok((b.min_x()..=b.max_x())
            .map(|x| self.slot(Point::new(x, y)))
            .collect())
    }

    /// Occupants of each position in 1-based column `n`; empty slices for
    /// empty positions.
    pub fn get_column(&self, n: usize) -> Result<Vec<&[T]>, GridError> {
        let count = self.column_count();
        let b = match self.bounds {
            Some(b) if (1..=count).contains(&n) => b,
            _ => {
                return Err(GridError::OutOfRange {
                    axis: Axis::Column,
                    index: n,
                    count,
                });
            }
        };
        let x = b.min_x() + n as i32 - 1;
        Ok((b.min_y()..=b.max_y())
            .map(|y| self.slot(Point::new(x, y)))
            .collect())
    }

    #[inline]
    fn slot(&self, p: Point) -> &[T] {
        self.get_cell_items(p).unwrap_or(&[])
    }

    /// Occupants at `p`, or `None` if the position is empty.
    #[inline]
    pub fn get_cell_items(&self, p: Point) -> Option<&[T]> {
        self.cells.get(&p).map(|v| v.as_slice())
    }

    /// Occupants at `key`, or `None` if the position is empty.
    pub fn get_cell_items_by_key(&self, key: CellKey) -> Option<&[T]> {
        self.point_of(key).and_then(|p| self.get_cell_items(p))
    }

    /// Key of the cell at `p`, or `None` outside the bounds.
    pub fn get_cell_key(&self, p: Point) -> Option<CellKey> {
        let b = self.bounds?;
        if !b.is_inside(p) {
            return None;
        }
        let x = (p.x - b.min_x()) as usize;
        let y = (p.y - b.min_y()) as usize;
        Some(CellKey(b.width() * y + x + 1))
    }

    /// Position of the cell numbered `key`, or `None` if no such cell.
    pub fn point_of(&self, key: CellKey) -> Option<Point> {
        let b = self.bounds?;
        if key.0 == 0 || key.0 > self.cell_count() {
            return None;
        }
        let i = key.0 - 1;
        let w = b.width();
        Some(Point::new(
            b.min_x() + (i % w) as i32,
            b.min_y() + (i / w) as i32,
        ))
    }

    fn resolve(&self, locator: Locator) -> Result<Point, GridError> {
        match locator {
            Locator::Point(p) if self.contains(p) => Ok(p),
            Locator::Point(p) => Err(GridError::OutOfBounds {
                point: p,
                bounds: self.bounds,
            }),
            Locator::Key(k) => self.point_of(k).ok_or(GridError::UnknownKey {
                key: k,
                cells: self.cell_count(),
            }),
        }
    }

    /// Put `item` on top of the stack at `locator`, creating the cell if
    /// needed.
    pub fn put_item(&mut self, item: T, locator: impl Into<Locator>) -> Result<(), GridError> {
        let p = self.resolve(locator.into())?;
        self.cells.entry(p).or_default().insert(0, item);
        Ok(())
    }

    /// Remove the first occurrence of `item` at `locator`. Returns whether
    /// anything was removed.
    pub fn delete_item(&mut self, item: &T, locator: impl Into<Locator>) -> bool
    where
        T: PartialEq,
    {
        let Ok(p) = self.resolve(locator.into()) else {
            return false;
        };
        let Some(list) = self.cells.get_mut(&p) else {
            return false;
        };
        let Some(i) = list.iter().position(|o| o == item) else {
            return false;
        };
        list.remove(i);
        if list.is_empty() {
            self.cells.remove(&p);
        }
        true
    }

    /// Empty the cell at `p`, returning what it held.
    pub fn delete_items(&mut self, p: Point) -> Option<Occupants<T>> {
        self.cells.remove(&p)
    }

    /// Orthogonal neighbour keys of `key`, without wrapping around edges.
    ///
    /// Results are cached until the grid dimensions change. An unknown key
    /// has no neighbours.
    pub fn map_the_neighborhood(&self, key: CellKey) -> Neighborhood {
        if let Some(n) = self.neighborhoods.borrow().get(&key) {
            return *n;
        }
        let cols = self.column_count();
        let total = self.cell_count();
        let k = key.0;
        if k == 0 || k > total {
            return Neighborhood::default();
        }
        let n = Neighborhood {
            above: (k > cols).then(|| CellKey(k - cols)),
            below: (k + cols <= total).then(|| CellKey(k + cols)),
            left: ((k - 1) % cols != 0).then(|| CellKey(k - 1)),
            right: (k % cols != 0).then(|| CellKey(k + 1)),
        };
        self.neighborhoods.borrow_mut().insert(key, n);
        n
    }

    /// Every occupied position with its occupants, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &[T])> {
        let mut entries: Vec<(Point, &[T])> =
            self.cells.iter().map(|(p, v)| (*p, v.as_slice())).collect();
        entries.sort_unstable_by_key(|(p, _)| *p);
        entries.into_iter()
    }

    /// Positions holding `item`, in row-major order.
    pub fn find_points(&self, item: &T) -> Vec<Point>
    where
        T: PartialEq,
    {
        let mut pts: Vec<Point> = self
            .cells
            .iter()
            .filter(|(_, v)| v.contains(item))
            .map(|(p, _)| *p)
            .collect();
        pts.sort_unstable();
        pts
    }

    /// First position (row-major) holding `item`.
    pub fn find_point(&self, item: &T) -> Option<Point>
    where
        T: PartialEq,
    {
        self.cells
            .iter()
            .filter(|(_, v)| v.contains(item))
            .map(|(p, _)| *p)
            .min()
    }

    /// Render the top occupant of every position, one text line per row.
    pub fn draw_grid(&self, opts: &DrawOptions<T>) -> String
    where
        T: fmt::Display + PartialEq,
    {
        let Some(b) = self.bounds else {
            return String::new();
        };
        let mut out = String::with_capacity(b.height() * (b.width() + 1));
        for y in b.min_y()..=b.max_y() {
            if y != b.min_y() {
                out.push('\n');
            }
            for x in b.min_x()..=b.max_x() {
                let top = self.slot(Point::new(x, y)).first();
                let shown = top.filter(|item| {
                    opts.filter
                        .as_ref()
                        .is_none_or(|allowed| allowed.contains(*item))
                });
                match shown {
                    Some(item) => out.push_str(&item.to_string()),
                    None => out.push(opts.placeholder),
                }
            }
        }
        out
    }
}

impl SpatialGrid<char> {
    /// Grid of characters from newline-separated text.
    pub fn from_chars(input: &str) -> Self {
        Self::from_text(input, "\n", "", |s| s.chars().next().unwrap_or(' '))
    }
}

impl<T: Eq + Hash + Clone> SpatialGrid<T> {
    /// Every distinct occupant currently present.
    pub fn get_unique_items(&self) -> HashSet<T> {
        self.cells.values().flatten().cloned().collect()
    }
}

impl<T: fmt::Display + PartialEq> fmt::Display for SpatialGrid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.draw_grid(&DrawOptions::default()))
    }
}

/// Split on `delim`, or into single characters when `delim` is empty.
fn tokens<'s>(s: &'s str, delim: &str) -> Vec<&'s str> {
    if delim.is_empty() {
        s.char_indices()
            .map(|(i, c)| &s[i..i + c.len_utf8()])
            .collect()
    } else {
        s.split(delim).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const FIELD: &str = "\
ab#c
d#ef
ghij";

    fn field() -> SpatialGrid<char> {
        SpatialGrid::from_chars(FIELD)
    }

    #[test]
    fn empty_grid_has_no_size() {
        let g: SpatialGrid<char> = SpatialGrid::new();
        assert_eq!(g.bounds(), None);
        assert_eq!(g.row_count(), 0);
        assert_eq!(g.column_count(), 0);
        assert!(g.get_unique_items().is_empty());
        assert_eq!(g.to_string(), "");
    }

    #[test]
    fn dimensions_match_input() {
        let g = field();
        assert_eq!(g.row_count(), 3);
        assert_eq!(g.column_count(), 4);
        assert_eq!(g.row_count() * g.column_count(), g.cell_count());
        assert_eq!(g.len(), 12);
    }

    #[test]
    fn set_grid_reinitialises() {
        let mut g = field();
        g.set_grid("xy\nzw\n", "\n", "", |s| s.chars().next().unwrap_or(' '));
        assert_eq!(g.row_count(), 2);
        assert_eq!(g.column_count(), 2);
        assert_eq!(g.find_points(&'a'), vec![]);
        assert_eq!(g.get_cell_items(Point::new(1, 1)), Some(&['w'][..]));
    }

    #[test]
    fn numeric_tokens_with_delimiters() {
        let g = SpatialGrid::from_text("1,2,3;40,5,6", ";", ",", |s| {
            s.parse::<u32>().unwrap_or(0)
        });
        assert_eq!(g.column_count(), 3);
        assert_eq!(g.get_cell_items(Point::new(0, 1)), Some(&[40][..]));
    }

    #[test]
    fn ragged_rows_leave_tail_empty() {
        let g = SpatialGrid::from_chars("abc\nd\nef");
        assert_eq!(g.column_count(), 3);
        assert_eq!(g.row_count(), 3);
        assert_eq!(g.get_cell_items(Point::new(1, 1)), None);
        let row = g.get_row(2).unwrap();
        assert_eq!(row, vec![&['d'][..], &[][..], &[][..]]);
        assert_eq!(g.to_string(), "abc\nd..\nef.");
    }

    #[test]
    fn rows_and_columns_match_array_lookup() {
        let g = field();
        let array: Vec<Vec<char>> = FIELD.lines().map(|l| l.chars().collect()).collect();
        for (i, row) in array.iter().enumerate() {
            let got: Vec<char> = g.get_row(i + 1).unwrap().concat();
            assert_eq!(&got, row);
        }
        for x in 0..4 {
            let col: Vec<char> = array.iter().map(|r| r[x]).collect();
            let got: Vec<char> = g.get_column(x + 1).unwrap().concat();
            assert_eq!(got, col);
        }
    }

    #[test]
    fn row_and_column_out_of_range() {
        let g = field();
        assert_eq!(
            g.get_row(0),
            Err(GridError::OutOfRange {
                axis: Axis::Row,
                index: 0,
                count: 3
            })
        );
        assert!(g.get_row(4).is_err());
        assert!(g.get_column(5).is_err());
        assert!(SpatialGrid::<char>::new().get_row(1).is_err());
    }

    #[test]
    fn put_and_delete_stack() {
        let mut g = field();
        let p = Point::new(1, 1);
        g.put_item('@', p).unwrap();
        assert_eq!(g.get_cell_items(p), Some(&['@', '#'][..]));
        assert!(g.delete_item(&'#', p));
        assert_eq!(g.get_cell_items(p), Some(&['@'][..]));
        assert!(!g.delete_item(&'#', p));
        assert!(g.delete_item(&'@', p));
        assert_eq!(g.get_cell_items(p), None);
        g.put_item('z', p).unwrap();
        assert_eq!(g.get_cell_items(p), Some(&['z'][..]));
    }

    #[test]
    fn delete_item_removes_one_occurrence() {
        let mut g = field();
        let p = Point::new(0, 0);
        g.put_item('a', p).unwrap();
        assert!(g.delete_item(&'a', p));
        assert_eq!(g.get_cell_items(p), Some(&['a'][..]));
    }

    #[test]
    fn delete_items_clears_cell() {
        let mut g = field();
        let p = Point::new(3, 0);
        let removed = g.delete_items(p).unwrap();
        assert_eq!(removed.as_slice(), &['c']);
        assert_eq!(g.get_cell_items(p), None);
        assert_eq!(g.get_column(4).unwrap()[0], &[] as &[char]);
    }

    #[test]
    fn put_item_outside_bounds_fails() {
        let mut g = field();
        let err = g.put_item('x', Point::new(4, 0)).unwrap_err();
        assert!(matches!(err, GridError::OutOfBounds { .. }));
        assert_eq!(g.bounds(), Some(Bounds::from_max(Point::new(3, 2))));
        assert!(matches!(
            g.put_item('x', CellKey(13)),
            Err(GridError::UnknownKey { .. })
        ));
    }

    #[test]
    fn put_item_by_key() {
        let mut g = field();
        g.put_item('!', CellKey(6)).unwrap();
        assert_eq!(g.get_cell_items(Point::new(1, 1)), Some(&['!', '#'][..]));
        assert_eq!(g.get_cell_items_by_key(CellKey(6)), Some(&['!', '#'][..]));
    }

    #[test]
    fn keys_and_points_are_inverse() {
        let g = field();
        assert_eq!(g.get_cell_key(Point::new(0, 0)), Some(CellKey(1)));
        assert_eq!(g.get_cell_key(Point::new(3, 2)), Some(CellKey(12)));
        assert_eq!(g.get_cell_key(Point::new(4, 2)), None);
        for p in g.bounds().unwrap() {
            let k = g.get_cell_key(p).unwrap();
            assert_eq!(g.point_of(k), Some(p));
        }
        assert_eq!(g.point_of(CellKey(0)), None);
        assert_eq!(g.point_of(CellKey(13)), None);
    }

    #[test]
    fn neighborhood_respects_edges() {
        let g = field();
        let corner = g.map_the_neighborhood(CellKey(1));
        assert_eq!(
            corner,
            Neighborhood {
                above: None,
                below: Some(CellKey(5)),
                left: None,
                right: Some(CellKey(2)),
            }
        );
        let right_edge = g.map_the_neighborhood(CellKey(8));
        assert_eq!(right_edge.right, None);
        assert_eq!(right_edge.left, Some(CellKey(7)));
        assert_eq!(right_edge.above, Some(CellKey(4)));
        assert_eq!(right_edge.below, Some(CellKey(12)));
        let bottom = g.map_the_neighborhood(CellKey(9));
        assert_eq!(bottom.below, None);
        assert_eq!(bottom.left, None);
        assert_eq!(g.map_the_neighborhood(CellKey(99)), Neighborhood::default());
    }

    #[test]
    fn neighborhood_cache_follows_new_rows() {
        let mut g = field();
        assert_eq!(g.map_the_neighborhood(CellKey(10)).below, None);
        g.add_row(['k', 'l']).unwrap();
        assert_eq!(g.map_the_neighborhood(CellKey(10)).below, Some(CellKey(14)));
    }

    #[test]
    fn add_row_grows_bounds() {
        let mut g = field();
        g.add_row(['w', 'x', 'y', 'z']).unwrap();
        assert_eq!(g.row_count(), 4);
        assert_eq!(g.get_row(4).unwrap().concat(), vec!['w', 'x', 'y', 'z']);
        g.add_row(std::iter::empty()).unwrap();
        assert_eq!(g.row_count(), 5);
        assert!(g.get_row(5).unwrap().iter().all(|s| s.is_empty()));
    }

    #[test]
    fn add_row_too_wide_fails() {
        let mut g = field();
        let err = g.add_row("vwxyz".chars()).unwrap_err();
        assert_eq!(
            err,
            GridError::DimensionMismatch {
                expected: 4,
                found: 5
            }
        );
        assert_eq!(g.row_count(), 3);
    }

    #[test]
    fn add_row_sizes_unsized_grid() {
        let mut g = SpatialGrid::new();
        g.add_row([1, 2, 3]).unwrap();
        g.add_row([4]).unwrap();
        assert_eq!(g.column_count(), 3);
        assert_eq!(g.row_count(), 2);
        assert_eq!(g.find_point(&4), Some(Point::new(0, 1)));
    }

    #[test]
    fn set_bounds_discards_content() {
        let mut g = field();
        g.set_bounds(Point::new(10, 6));
        assert!(g.is_empty());
        assert_eq!(g.column_count(), 11);
        assert_eq!(g.row_count(), 7);
        g.put_item('r', Point::new(10, 6)).unwrap();
        g.put_item('r', Point::new(10, 6)).unwrap();
        assert_eq!(g.get_cell_items(Point::new(10, 6)).map(<[char]>::len), Some(2));
    }

    #[test]
    fn unique_items_are_idempotent() {
        let g = field();
        let a = g.get_unique_items();
        let b = g.get_unique_items();
        assert_eq!(a, b);
        assert_eq!(a.len(), 11);
        assert!(a.contains(&'#'));
    }

    #[test]
    fn find_points_row_major() {
        let g = field();
        assert_eq!(g.find_points(&'#'), vec![Point::new(2, 0), Point::new(1, 1)]);
        assert_eq!(g.find_point(&'#'), Some(Point::new(2, 0)));
        assert_eq!(g.find_point(&'?'), None);
    }

    #[test]
    fn draw_round_trips_text() {
        let g = field();
        assert_eq!(g.to_string(), FIELD);
        let reparsed = SpatialGrid::from_chars(&g.draw_grid(&DrawOptions::default()));
        assert_eq!(reparsed.to_string(), FIELD);
    }

    #[test]
    fn draw_with_filter_and_placeholder() {
        let g = field();
        let opts = DrawOptions::default()
            .with_filter(vec!['#'])
            .with_placeholder(' ');
        assert_eq!(g.draw_grid(&opts), "  # \n #  \n    ");
    }

    #[test]
    fn iter_is_row_major() {
        let g = SpatialGrid::from_chars("ab\ncd");
        let order: Vec<char> = g.iter().map(|(_, items)| items[0]).collect();
        assert_eq!(order, vec!['a', 'b', 'c', 'd']);
    }

    fn arb_rows() -> impl Strategy<Value = Vec<Vec<char>>> {
        (1usize..8, 1usize..8).prop_flat_map(|(w, h)| {
            prop::collection::vec(
                prop::collection::vec(prop::sample::select(vec!['a', 'b', 'c']), w),
                h,
            )
        })
    }

    fn to_text(rows: &[Vec<char>]) -> String {
        rows.iter()
            .map(|r| r.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    proptest! {
        #[test]
        fn find_points_matches_full_scan(rows in arb_rows(), item in prop::sample::select(vec!['a', 'b', 'c'])) {
            let g = SpatialGrid::from_chars(&to_text(&rows));
            let mut naive = Vec::new();
            for (y, row) in rows.iter().enumerate() {
                for (x, ch) in row.iter().enumerate() {
                    if *ch == item {
                        naive.push(Point::new(x as i32, y as i32));
                    }
                }
            }
            prop_assert_eq!(g.find_points(&item), naive);
        }

        #[test]
        fn put_then_delete_restores_cell(rows in arb_rows(), x in 0i32..8, y in 0i32..8) {
            let mut g = SpatialGrid::from_chars(&to_text(&rows));
            let p = Point::new(x, y);
            let before: Option<Vec<char>> = g.get_cell_items(p).map(<[char]>::to_vec);
            match g.put_item('z', p) {
                Ok(()) => {
                    prop_assert!(g.get_cell_items(p).is_some_and(|s| s.contains(&'z')));
                    prop_assert!(g.delete_item(&'z', p));
                    prop_assert_eq!(g.get_cell_items(p).map(<[char]>::to_vec), before);
                }
                Err(_) => prop_assert!(!g.contains(p)),
            }
        }
    }
}
