//! Geometry primitives: [`Point`], [`Direction`] and [`Bounds`].

use std::fmt;
use std::ops::{Add, Mul, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer point. X grows right, Y grows down (row-major text layout).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Step one cell in `dir`.
    #[inline]
    pub fn step(self, dir: Direction) -> Self {
        self + dir.delta()
    }

    /// The four orthogonal neighbours in [`Direction::CANONICAL`] order.
    #[inline]
    pub fn neighbors_4(self) -> [Point; 4] {
        Direction::CANONICAL.map(|d| self.step(d))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    /// Row-major: rows first, then columns.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i32> for Point {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: i32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the four orthogonal headings.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Canonical order, used wherever no heading has been established yet.
    pub const CANONICAL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Unit step for this heading (north is `y - 1`).
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Self::North => Point::new(0, -1),
            Self::South => Point::new(0, 1),
            Self::East => Point::new(1, 0),
            Self::West => Point::new(-1, 0),
        }
    }

    /// Heading for a unit step, if `p` is one.
    pub fn from_delta(p: Point) -> Option<Self> {
        match (p.x, p.y) {
            (0, -1) => Some(Self::North),
            (0, 1) => Some(Self::South),
            (1, 0) => Some(Self::East),
            (-1, 0) => Some(Self::West),
            _ => None,
        }
    }

    /// Arrow token used when drawing headings.
    #[inline]
    pub const fn token(self) -> char {
        match self {
            Self::North => '^',
            Self::South => 'v',
            Self::East => '>',
            Self::West => '<',
        }
    }

    /// Inverse of [`token`](Self::token).
    pub fn from_token(ch: char) -> Option<Self> {
        match ch {
            '^' => Some(Self::North),
            'v' => Some(Self::South),
            '>' => Some(Self::East),
            '<' => Some(Self::West),
            _ => None,
        }
    }

    /// The opposite heading.
    #[inline]
    pub const fn reverse(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// Whether this heading runs along the vertical axis.
    #[inline]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::North | Self::South)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// An inclusive rectangle \[min, max\] that only grows.
///
/// Unlike a half-open range, both corners belong to the rectangle, so a
/// single-cell grid has `min == max`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    min: Point,
    max: Point,
}

impl Bounds {
    /// Create bounds from two corners, canonicalized so `min <= max` on
    /// each axis.
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Bounds spanning the origin to `max`.
    #[inline]
    pub fn from_max(max: Point) -> Self {
        Self::new(Point::ZERO, max)
    }

    #[inline]
    pub fn min(self) -> Point {
        self.min
    }

    #[inline]
    pub fn max(self) -> Point {
        self.max
    }

    #[inline]
    pub fn min_x(self) -> i32 {
        self.min.x
    }

    #[inline]
    pub fn min_y(self) -> i32 {
        self.min.y
    }

    #[inline]
    pub fn max_x(self) -> i32 {
        self.max.x
    }

    #[inline]
    pub fn max_y(self) -> i32 {
        self.max.y
    }

    /// Number of columns covered.
    #[inline]
    pub fn width(self) -> usize {
        (self.max.x - self.min.x + 1) as usize
    }

    /// Number of rows covered.
    #[inline]
    pub fn height(self) -> usize {
        (self.max.y - self.min.y + 1) as usize
    }

    /// Grow the rectangle to include `p`. Never shrinks.
    pub fn put(&mut self, p: Point) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    /// Reset both corners to the origin.
    pub fn clear(&mut self) {
        self.min = Point::ZERO;
        self.max = Point::ZERO;
    }

    /// Whether `p` lies inside (edges included).
    #[inline]
    pub fn is_inside(self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    #[inline]
    pub fn is_edge_x(self, p: Point) -> bool {
        p.x == self.min.x || p.x == self.max.x
    }

    #[inline]
    pub fn is_edge_y(self, p: Point) -> bool {
        p.y == self.min.y || p.y == self.max.y
    }

    /// Whether `p` sits on the outer ring of the rectangle.
    #[inline]
    pub fn is_edge(self, p: Point) -> bool {
        self.is_inside(p) && (self.is_edge_x(p) || self.is_edge_y(p))
    }

    /// Row-major iterator over every point in the rectangle.
    #[inline]
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Bounds {
    type Item = Point;
    type IntoIter = BoundsIter;
    #[inline]
    fn into_iter(self) -> BoundsIter {
        self.iter()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{}]", self.min, self.max)
    }
}

// ---------------------------------------------------------------------------
// BoundsIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the points in a [`Bounds`].
#[derive(Clone, Debug)]
pub struct BoundsIter {
    bounds: Bounds,
    cur: Point,
}

impl Iterator for BoundsIter {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.cur.y > self.bounds.max.y {
            return None;
        }
        let p = self.cur;
        self.cur.x += 1;
        if self.cur.x > self.bounds.max.x {
            self.cur.x = self.bounds.min.x;
            self.cur.y += 1;
        }
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.cur.y > self.bounds.max.y {
            return (0, Some(0));
        }
        let remaining_in_row = (self.bounds.max.x - self.cur.x + 1) as usize;
        let remaining_rows = (self.bounds.max.y - self.cur.y) as usize;
        let total = remaining_in_row + remaining_rows * self.bounds.width();
        (total, Some(total))
    }
}

impl ExactSizeIterator for BoundsIter {}
