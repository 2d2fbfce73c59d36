use std::collections::BinaryHeap;

use tilenav_core::Point;

use crate::distance;
use crate::search::{Node, NodeRef, SearchSpace};
use crate::traits::AstarPather;

impl SearchSpace {
    /// A* from `from` to `to` over the graph described by `pather`.
    ///
    /// Frontier entries with equal `f` are expanded in the order they were
    /// pushed, so a given pather always yields the same path. The result
    /// holds both endpoints; `None` means `to` cannot be reached or an
    /// endpoint lies outside the range.
    pub fn astar_path<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Option<Vec<Point>> {
        let start = self.idx(from)?;
        let goal = self.idx(to)?;
        if start == goal {
            return Some(vec![from]);
        }

        // A fresh stamp invalidates every node of earlier searches.
        self.generation = self.generation.wrapping_add(1);
        let stamp = self.generation;
        self.nodes[start] = Node {
            g: 0,
            f: pather.estimate(from, to),
            parent: usize::MAX,
            generation: stamp,
            open: true,
        };

        let mut seq: u64 = 0;
        let mut frontier = BinaryHeap::new();
        frontier.push(NodeRef {
            idx: start,
            f: self.nodes[start].f,
            seq,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut expanded = 0usize;

        let found = 'search: loop {
            let Some(NodeRef { idx: ci, .. }) = frontier.pop() else {
                break 'search false;
            };
            let node = &mut self.nodes[ci];
            if node.generation != stamp || !node.open {
                continue;
            }
            if ci == goal {
                break 'search true;
            }
            node.open = false;
            let g = node.g;
            let here = self.point(ci);
            expanded += 1;

            nbuf.clear();
            pather.neighbors(here, &mut nbuf);
            for &next in &nbuf {
                let Some(ni) = self.idx(next) else {
                    continue;
                };
                let tentative = g + pather.cost(here, next);
                let n = &mut self.nodes[ni];
                if n.generation == stamp && tentative >= n.g {
                    continue;
                }
                *n = Node {
                    g: tentative,
                    f: tentative + pather.estimate(next, to),
                    parent: ci,
                    generation: stamp,
                    open: true,
                };
                seq += 1;
                frontier.push(NodeRef { idx: ni, f: n.f, seq });
            }
        };

        self.nbuf = nbuf;
        log::trace!("astar {from} -> {to}: found={found}, expanded {expanded} nodes");
        found.then(|| self.walk_back(goal))
    }

    /// Follow parent links from `idx` back to the search origin.
    fn walk_back(&self, mut idx: usize) -> Vec<Point> {
        let mut path = Vec::new();
        while idx != usize::MAX {
            path.push(self.point(idx));
            idx = self.nodes[idx].parent;
        }
        path.reverse();
        path
    }
}

/// Expand a waypoint path into a step-by-step path visiting every tile.
///
/// Legs between aligned waypoints (same row, column or 45° diagonal) are
/// walked straight. Unaligned legs go diagonally first, then straight.
pub fn interpolate_path(waypoints: &[Point]) -> Vec<Point> {
    let Some(&last) = waypoints.last() else {
        return Vec::new();
    };
    let mut result = Vec::new();
    for window in waypoints.windows(2) {
        let (a, b) = (window[0], window[1]);
        let mut c = a;
        while let Some(d) = (b - c).direction() {
            result.push(c);
            c = c + d;
        }
    }
    result.push(last);
    result
}

/// Number of tile steps walked along a waypoint path.
///
/// For horizontal and vertical legs this is their Manhattan length.
pub fn path_length(waypoints: &[Point]) -> i32 {
    waypoints
        .windows(2)
        .map(|w| distance::chebyshev(w[0], w[1]))
        .sum()
}
