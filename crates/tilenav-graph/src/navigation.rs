//! Point location and shortest paths over the corridor graph.

use tilenav_core::Point;
use tilenav_paths::{
    AstarPather, COST_SCALE, Pather, SearchSpace, WeightedPather, chebyshev, euclidean_cost,
};

use crate::corridor::Edge;
use crate::tilemap::{TileId, TileMap};

/// Where a grid point sits relative to the corridor graph.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Location {
    /// The point is a graph node.
    Junction(TileId),
    /// The point lies strictly inside this corridor (canonical orientation).
    Corridor(Edge),
}

impl TileMap {
    /// Locate `p` on the graph: a node, the interior of a corridor, or
    /// `None` when `p` is off the grid or its tile is disconnected.
    pub fn locate(&self, p: Point) -> Option<Location> {
        let id = self.id(p)?;
        if self.graph.contains_node(id) {
            return Some(Location::Junction(id));
        }
        let axis = self.pass_through_axis(id)?;
        let edge = Edge::new(self.scan(id, axis.reverse()), self.scan(id, axis), axis);
        Some(Location::Corridor(edge.canonical()))
    }

    /// Whether both points lie on the graph, at a node or inside a
    /// corridor. A path query between points that fail this check returns
    /// `None` without searching.
    pub fn are_navigable(&self, a: Point, b: Point) -> bool {
        self.locate(a).is_some() && self.locate(b).is_some()
    }

    /// Number of tile steps spanned by a corridor.
    pub fn edge_length(&self, edge: Edge) -> i32 {
        chebyshev(self.position(edge.origin), self.position(edge.termination))
    }

    /// Positions strictly between the two endpoints of a corridor, walking
    /// from `edge.origin`.
    pub fn corridor_tiles(&self, edge: Edge) -> Vec<Point> {
        let end = self.position(edge.termination);
        let mut p = self.position(edge.origin) + edge.direction;
        let mut tiles = Vec::new();
        while p != end && self.contains(p) {
            tiles.push(p);
            p = p + edge.direction;
        }
        tiles
    }

    /// Shortest waypoint path from `a` to `b` over the corridor graph.
    ///
    /// Either endpoint may be a node or lie inside a corridor. Waypoints are
    /// the endpoints plus every node passed through; consecutive waypoints
    /// are joined by a straight corridor. `search` is resized to the map if
    /// needed and can be reused across queries.
    pub fn shortest_path(&self, search: &mut SearchSpace, a: Point, b: Point) -> Option<Vec<Point>> {
        let Some(start_loc) = self.locate(a) else {
            log::trace!("no path: start {a} is not navigable");
            return None;
        };
        let Some(goal_loc) = self.locate(b) else {
            log::trace!("no path: goal {b} is not navigable");
            return None;
        };
        if search.range() != self.bounds() {
            search.set_range(self.bounds());
        }
        let pather = CorridorPather {
            map: self,
            start: a,
            start_loc,
            goal: b,
            goal_loc,
        };
        search.astar_path(&pather, a, b)
    }
}

// ---------------------------------------------------------------------------
// CorridorPather
// ---------------------------------------------------------------------------

/// Exposes the corridor graph to the A* search, with the two query points
/// spliced in when they lie inside corridors.
struct CorridorPather<'a> {
    map: &'a TileMap,
    start: Point,
    start_loc: Location,
    goal: Point,
    goal_loc: Location,
}

impl CorridorPather<'_> {
    fn goal_on(&self, edge: Edge) -> bool {
        match self.goal_loc {
            Location::Corridor(g) => g.joins(edge.origin, edge.termination),
            Location::Junction(_) => false,
        }
    }
}

impl Pather for CorridorPather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        if p == self.start {
            if let Location::Corridor(edge) = self.start_loc {
                if self.goal_on(edge) {
                    buf.push(self.goal);
                }
                buf.push(self.map.position(edge.origin));
                buf.push(self.map.position(edge.termination));
                return;
            }
        }
        let Some(id) = self.map.id(p) else {
            return;
        };
        for edge in self.map.graph.exits(id) {
            if self.goal_on(edge) {
                buf.push(self.goal);
            }
            buf.push(self.map.position(edge.termination));
        }
    }
}

impl WeightedPather for CorridorPather<'_> {
    fn cost(&self, from: Point, to: Point) -> i32 {
        euclidean_cost(from, to)
    }
}

impl AstarPather for CorridorPather<'_> {
    fn estimate(&self, from: Point, to: Point) -> i32 {
        chebyshev(from, to) * COST_SCALE
    }
}
