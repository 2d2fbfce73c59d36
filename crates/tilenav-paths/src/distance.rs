use tilenav_core::Point;

/// Fixed-point scale applied to euclidean costs so they fit in `i32`.
/// A one-tile cardinal step costs exactly `COST_SCALE`.
pub const COST_SCALE: i32 = 100;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Straight-line distance scaled by [`COST_SCALE`] and rounded.
///
/// Exact for horizontal and vertical spans; a diagonal step costs 141.
#[inline]
pub fn euclidean_cost(a: Point, b: Point) -> i32 {
    let dx = f64::from(a.x - b.x);
    let dy = f64::from(a.y - b.y);
    ((dx * dx + dy * dy).sqrt() * f64::from(COST_SCALE)).round() as i32
}
