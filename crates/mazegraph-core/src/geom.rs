//! Geometry primitives: [`Point`] and [`Range`].
//!
//! Maze cells are addressed by [`Point`]; a maze's extent is a [`Range`]
//! anchored at the origin.

use std::fmt;
use std::ops::Add;

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer point. X grows right, Y grows down, (0, 0) is the upper
/// left corner of a maze.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
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

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// Create a new range from two corners, canonicalized so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// Range `[0, width) × [0, height)`.
    #[inline]
    pub fn with_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width.max(0), height.max(0))
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    /// Total number of cells in the range.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.width() as usize) * (self.height() as usize)
    }

    /// Whether the range has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Whether `p` is inside the half-open range.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// Flat row-major index of `p`, or `None` if `p` is outside the range.
    #[inline]
    pub fn index(self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        let x = (p.x - self.min.x) as usize;
        let y = (p.y - self.min.y) as usize;
        Some(y * self.width() as usize + x)
    }

    /// Flat column-major index of `p`, the position of `p` in
    /// [`Range::iter_columns`], or `None` if `p` is outside the range.
    #[inline]
    pub fn column_index(self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        let x = (p.x - self.min.x) as usize;
        let y = (p.y - self.min.y) as usize;
        Some(x * self.height() as usize + y)
    }

    /// Row-major iterator over every point in the range.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            cur: self.min,
        }
    }

    /// Column-major iterator: x in the outer loop, y in the inner loop.
    #[inline]
    pub fn iter_columns(self) -> impl Iterator<Item = Point> {
        (self.min.x..self.max.x)
            .flat_map(move |x| (self.min.y..self.max.y).map(move |y| Point::new(x, y)))
    }
}

impl IntoIterator for Range {
    type Item = Point;
    type IntoIter = RangeIter;
    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// RangeIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the points in a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    cur: Point,
}

impl Iterator for RangeIter {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.cur.y >= self.range.max.y || self.range.is_empty() {
            return None;
        }
        let p = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.range.max.x {
            self.cur.x = self.range.min.x;
            self.cur.y += 1;
        }
        Some(p)
    }
}
