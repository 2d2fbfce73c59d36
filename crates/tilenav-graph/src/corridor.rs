//! The derived junction/corridor graph.
//!
//! Nodes are tiles; each node has one exit slot per direction. An edge is
//! stored twice, at `origin[direction]` and at
//! `termination[direction.reverse()]`, so it can be followed from either end.

use std::collections::BTreeMap;
use std::fmt;

use tilenav_core::Direction;

use crate::tilemap::TileId;

// ---------------------------------------------------------------------------
// Edge
// ---------------------------------------------------------------------------

/// A straight corridor between two nodes.
///
/// Walking from `origin` in `direction` through pass-through tiles reaches
/// `termination`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub origin: TileId,
    pub termination: TileId,
    pub direction: Direction,
}

impl Edge {
    #[inline]
    pub fn new(origin: TileId, termination: TileId, direction: Direction) -> Self {
        Self {
            origin,
            termination,
            direction,
        }
    }

    /// The same corridor seen from the other end.
    #[inline]
    pub fn reversed(self) -> Self {
        Self::new(self.termination, self.origin, self.direction.reverse())
    }

    /// The orientation with the lower [`TileId`] as origin.
    #[inline]
    pub fn canonical(self) -> Self {
        if self.origin <= self.termination {
            self
        } else {
            self.reversed()
        }
    }

    /// The endpoint opposite `id`, if `id` is an endpoint.
    pub fn other(self, id: TileId) -> Option<TileId> {
        if id == self.origin {
            Some(self.termination)
        } else if id == self.termination {
            Some(self.origin)
        } else {
            None
        }
    }

    /// Whether the edge joins `a` and `b`, in either orientation.
    pub fn joins(self, a: TileId, b: TileId) -> bool {
        (self.origin == a && self.termination == b) || (self.origin == b && self.termination == a)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -{}-> {}", self.origin, self.direction, self.termination)
    }
}

// ---------------------------------------------------------------------------
// CorridorGraph
// ---------------------------------------------------------------------------

type Exits = [Option<TileId>; 8];

/// Junction nodes and the corridors joining them.
///
/// Invariants kept by every method: each stored edge appears at both of its
/// endpoints, both endpoints are nodes, a node has at most one edge per
/// direction, and no edge starts and ends at the same node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CorridorGraph {
    nodes: BTreeMap<TileId, Exits>,
}

impl CorridorGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every node and edge.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Register `id` as a node. Returns `false` if it already was one.
    pub fn add_node(&mut self, id: TileId) -> bool {
        if self.nodes.contains_key(&id) {
            return false;
        }
        log::trace!("add node {id}");
        self.nodes.insert(id, Exits::default());
        true
    }

    /// Remove `id` and every edge incident on it, from both ends.
    ///
    /// Neighbouring corridors are not spliced back together; returns `false`
    /// if `id` was not a node.
    pub fn remove_node(&mut self, id: TileId) -> bool {
        let Some(exits) = self.nodes.remove(&id) else {
            return false;
        };
        log::trace!("remove node {id}");
        for (i, target) in exits.iter().enumerate() {
            let Some(t) = *target else { continue };
            let back = Direction::ALL[i].reverse();
            if let Some(slots) = self.nodes.get_mut(&t) {
                if slots[back.index()] == Some(id) {
                    slots[back.index()] = None;
                }
            }
        }
        true
    }

    #[inline]
    pub fn contains_node(&self, id: TileId) -> bool {
        self.nodes.contains_key(&id)
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// All nodes in ascending [`TileId`] order.
    pub fn nodes(&self) -> impl Iterator<Item = TileId> + '_ {
        self.nodes.keys().copied()
    }

    /// The node reached by leaving `id` in direction `d`, if any.
    #[inline]
    pub fn exit(&self, id: TileId, d: Direction) -> Option<TileId> {
        self.nodes.get(&id).and_then(|slots| slots[d.index()])
    }

    /// Every edge leaving `id`, oriented with `id` as origin, in direction
    /// order.
    pub fn exits(&self, id: TileId) -> impl Iterator<Item = Edge> + '_ {
        self.nodes.get(&id).into_iter().flat_map(move |slots| {
            Direction::ALL
                .into_iter()
                .filter_map(move |d| slots[d.index()].map(|t| Edge::new(id, t, d)))
        })
    }

    /// Every edge once, in canonical orientation.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.nodes
            .keys()
            .flat_map(move |&id| self.exits(id))
            .filter(|e| e.origin < e.termination)
    }

    /// Store the corridor `origin --direction--> termination`.
    ///
    /// Both endpoints become nodes. Any edge already occupying either
    /// endpoint's slot is removed first. Self-loops are rejected and yield
    /// `false`.
    pub fn add_edge(&mut self, origin: TileId, termination: TileId, direction: Direction) -> bool {
        if origin == termination {
            log::trace!("rejecting self-loop at {origin} towards {direction}");
            return false;
        }
        let back = direction.reverse();
        if self.exit(origin, direction) == Some(termination)
            && self.exit(termination, back) == Some(origin)
        {
            return true;
        }
        if let Some(old) = self.remove_edge(origin, direction) {
            log::trace!("displacing {old}");
        }
        if let Some(old) = self.remove_edge(termination, back) {
            log::trace!("displacing {old}");
        }
        self.nodes.entry(origin).or_default()[direction.index()] = Some(termination);
        self.nodes.entry(termination).or_default()[back.index()] = Some(origin);
        log::trace!("add edge {}", Edge::new(origin, termination, direction));
        true
    }

    /// Remove the edge leaving `node` in direction `d`, from both ends.
    pub fn remove_edge(&mut self, node: TileId, d: Direction) -> Option<Edge> {
        let target = self.nodes.get_mut(&node)?[d.index()].take()?;
        let back = d.reverse();
        if let Some(slots) = self.nodes.get_mut(&target) {
            if slots[back.index()] == Some(node) {
                slots[back.index()] = None;
            }
        }
        let edge = Edge::new(node, target, d);
        log::trace!("remove edge {edge}");
        Some(edge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::*;

    const A: TileId = TileId(3);
    const B: TileId = TileId(7);
    const C: TileId = TileId(11);

    #[test]
    fn edges_are_visible_from_both_ends() {
        let mut g = CorridorGraph::new();
        assert!(g.add_edge(B, A, West));
        assert!(g.contains_node(A) && g.contains_node(B));
        assert_eq!(g.exit(B, West), Some(A));
        assert_eq!(g.exit(A, East), Some(B));
        assert_eq!(g.edge_count(), 1);
        // Reported canonically from the lower id.
        assert_eq!(g.edges().collect::<Vec<_>>(), vec![Edge::new(A, B, East)]);
    }

    #[test]
    fn add_edge_is_idempotent() {
        let mut g = CorridorGraph::new();
        g.add_edge(A, B, East);
        g.add_edge(A, B, East);
        g.add_edge(B, A, West);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.node_count(), 2);
    }

    #[test]
    fn self_loops_are_rejected() {
        let mut g = CorridorGraph::new();
        assert!(!g.add_edge(A, A, North));
        assert_eq!(g.node_count(), 0);
    }

    #[test]
    fn occupied_slots_are_displaced() {
        let mut g = CorridorGraph::new();
        g.add_edge(A, B, East);
        g.add_edge(A, C, East);
        assert_eq!(g.exit(A, East), Some(C));
        assert_eq!(g.exit(B, West), None);
        assert_eq!(g.edge_count(), 1);
        assert!(g.contains_node(B));
    }

    #[test]
    fn remove_edge_clears_the_mirror() {
        let mut g = CorridorGraph::new();
        g.add_edge(A, B, South);
        assert_eq!(g.remove_edge(B, North), Some(Edge::new(B, A, North)));
        assert_eq!(g.exit(A, South), None);
        assert_eq!(g.remove_edge(B, North), None);
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.node_count(), 2);
    }

    #[test]
    fn remove_node_drops_incident_edges() {
        let mut g = CorridorGraph::new();
        g.add_edge(A, B, East);
        g.add_edge(B, C, SouthEast);
        g.add_edge(A, C, South);
        assert!(g.remove_node(B));
        assert!(!g.remove_node(B));
        assert_eq!(g.exit(A, East), None);
        assert_eq!(g.exit(C, NorthWest), None);
        assert_eq!(g.edges().collect::<Vec<_>>(), vec![Edge::new(A, C, South)]);
    }

    #[test]
    fn add_node_is_idempotent() {
        let mut g = CorridorGraph::new();
        assert!(g.add_node(A));
        assert!(!g.add_node(A));
        assert_eq!(g.nodes().collect::<Vec<_>>(), vec![A]);
        assert_eq!(g.exits(A).count(), 0);
        g.clear();
        assert_eq!(g.node_count(), 0);
    }

    #[test]
    fn edge_helpers() {
        let e = Edge::new(B, A, West);
        assert_eq!(e.canonical(), Edge::new(A, B, East));
        assert_eq!(e.reversed().reversed(), e);
        assert_eq!(e.other(A), Some(B));
        assert_eq!(e.other(C), None);
        assert!(e.joins(A, B) && e.joins(B, A));
        assert!(!e.joins(A, C));
        assert_eq!(e.to_string(), "#7 -W-> #3");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn edge_round_trip() {
        let e = Edge::new(TileId(4), TileId(9), Direction::SouthWest);
        let json = serde_json::to_string(&e).unwrap();
        let back: Edge = serde_json::from_str(&json).unwrap();
        assert_eq!(e, back);
    }
}
