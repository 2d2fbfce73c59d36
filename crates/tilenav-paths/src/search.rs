use tilenav_core::{Point, Range};

// ---------------------------------------------------------------------------
// Internal node for A* priority-queue searches
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) f: i32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            f: UNREACHABLE,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Reference into the node array, ordered by `f` then by push order for use
/// in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
    /// Push counter; among equal `f`, earlier pushes pop first.
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Sentinel cost meaning "not reached".
pub const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// SearchSpace
// ---------------------------------------------------------------------------

/// Reusable A* state for every point of a grid rectangle.
///
/// Nodes are stamped with a generation counter, so starting a new query is
/// O(1): entries from earlier searches are simply ignored.
pub struct SearchSpace {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl SearchSpace {
    /// Create a new `SearchSpace` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        Self {
            rng,
            width: rng.width().max(0) as usize,
            nodes: vec![Node::default(); rng.len()],
            generation: 0,
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Replace the underlying range.
    ///
    /// If the new size fits within existing capacity the node array is kept
    /// and only the generation is bumped; otherwise it is reallocated.
    pub fn set_range(&mut self, rng: Range) {
        let new_len = rng.len();
        self.rng = rng;
        self.width = rng.width().max(0) as usize;

        if new_len <= self.nodes.len() {
            self.generation = self.generation.wrapping_add(1);
            return;
        }

        self.nodes.clear();
        self.nodes.resize(new_len, Node::default());
        self.generation = 0;
    }

    /// The grid rectangle being searched.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Accumulated cost to `p` found by the last search, or [`UNREACHABLE`]
    /// if `p` was not reached (or is outside the range).
    pub fn cost_at(&self, p: Point) -> i32 {
        match self.idx(p) {
            Some(i) if self.nodes[i].generation == self.generation => self.nodes[i].g,
            _ => UNREACHABLE,
        }
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn idx_round_trips_inside_range() {
        let space = SearchSpace::new(Range::new(2, 3, 7, 9));
        for p in space.range() {
            let i = space.idx(p).unwrap();
            assert_eq!(space.point(i), p);
        }
        assert_eq!(space.idx(Point::new(0, 0)), None);
        assert_eq!(space.idx(Point::new(7, 3)), None);
    }

    #[test]
    fn heap_pops_lowest_f_then_fifo() {
        let mut heap = BinaryHeap::new();
        heap.push(NodeRef { idx: 0, f: 5, seq: 0 });
        heap.push(NodeRef { idx: 1, f: 3, seq: 1 });
        heap.push(NodeRef { idx: 2, f: 5, seq: 2 });
        heap.push(NodeRef { idx: 3, f: 3, seq: 3 });
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|n| n.idx)).collect();
        assert_eq!(order, vec![1, 3, 0, 2]);
    }

    #[test]
    fn set_range_smaller_preserves_capacity() {
        let mut space = SearchSpace::new(Range::square(20));
        let cap = space.nodes.len();
        space.set_range(Range::square(5));
        assert_eq!(space.range(), Range::square(5));
        assert_eq!(space.nodes.len(), cap);
        assert_eq!(space.width, 5);
        assert!(space.generation > 0);
    }

    #[test]
    fn set_range_larger_reallocates() {
        let mut space = SearchSpace::new(Range::square(5));
        space.set_range(Range::square(20));
        assert_eq!(space.nodes.len(), 400);
        assert_eq!(space.generation, 0);
    }

    #[test]
    fn cost_at_ignores_stale_generations() {
        let mut space = SearchSpace::new(Range::square(4));
        let p = Point::new(1, 1);
        let i = space.idx(p).unwrap();
        space.nodes[i].g = 7;
        space.nodes[i].generation = space.generation;
        assert_eq!(space.cost_at(p), 7);
        space.generation += 1;
        assert_eq!(space.cost_at(p), UNREACHABLE);
        assert_eq!(space.cost_at(Point::new(9, 9)), UNREACHABLE);
    }
}
