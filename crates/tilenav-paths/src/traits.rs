use tilenav_core::Point;

/// A graph laid over grid points, described by its adjacency.
pub trait Pather {
    /// Push every point reachable from `p` in one hop onto `buf`, which the
    /// search has already emptied. Hops may span any distance.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// A [`Pather`] whose hops have a price.
pub trait WeightedPather: Pather {
    /// Price of the hop from `from` to its neighbour `to`; strictly positive.
    fn cost(&self, from: Point, to: Point) -> i32;
}

/// A [`WeightedPather`] that can also guess the remaining cost, as A* needs.
pub trait AstarPather: WeightedPather {
    /// Lower bound on the cost of any route from `from` to `to`.
    fn estimate(&self, from: Point, to: Point) -> i32;
}
