//! Grid geometry: [`Point`] and the rectangle type [`Range`].

use std::fmt;
use std::ops::{Add, Mul, Sub};

use crate::direction::Direction;

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// Integer grid coordinates, also used as a displacement.
///
/// X grows to the right and Y grows downward, so north is `(0, -1)`.
/// Points order row-major: by `y`, then by `x`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Self = Self::new(0, 0);

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The compass direction this displacement points towards, judged by
    /// the sign of each component: `(3, 0)` is east and `(2, -5)` north-east.
    /// The zero displacement has none.
    #[inline]
    pub fn direction(self) -> Option<Direction> {
        Direction::from_vector(Point::new(self.x.signum(), self.y.signum()))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
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

impl Add<Direction> for Point {
    type Output = Self;
    #[inline]
    fn add(self, d: Direction) -> Self {
        self + d.vector()
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
    fn mul(self, k: i32) -> Self {
        Self::new(self.x * k, self.y * k)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// Rectangle of grid points, `min` inclusive and `max` exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// Rectangle spanned by two corners, given in any order.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// `[0, size)` on both axes; empty for non-positive sizes.
    #[inline]
    pub fn square(size: i32) -> Self {
        let size = size.max(0);
        Self::new(0, 0, size, size)
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    /// Number of points inside.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        self.width() as usize * (self.max.y - self.min.y) as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.max.x <= self.min.x || self.max.y <= self.min.y
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (self.min.x..self.max.x).contains(&p.x) && (self.min.y..self.max.y).contains(&p.y)
    }

    /// Points in row-major order.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            next: (!self.is_empty()).then_some(self.min),
        }
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

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}

/// Row-major iterator over a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    next: Option<Point>,
}

impl Iterator for RangeIter {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let p = self.next?;
        let mut q = Point::new(p.x + 1, p.y);
        if q.x >= self.range.max.x {
            q = Point::new(self.range.min.x, p.y + 1);
        }
        self.next = (q.y < self.range.max.y).then_some(q);
        Some(p)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn point_and_range_round_trip() {
        let p = Point::new(-3, 12);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(serde_json::from_str::<Point>(&json).unwrap(), p);

        let r = Range::new(1, 2, 10, 20);
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(serde_json::from_str::<Range>(&json).unwrap(), r);
    }
}
