use thiserror::Error;
use tilenav_core::{Direction, Point};

use crate::tilemap::{TileId, TileMap};

/// A disagreement between the stored graph and the one implied by the
/// current tile masks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("tile {0} should be a node but is missing from the graph")]
    MissingNode(Point),
    #[error("tile {0} is stored as a node but is a pass-through or disconnected")]
    StrayNode(Point),
    #[error("edge {origin} -{direction}-> {termination} is stale: scanning reaches {scanned}")]
    StaleEdge {
        origin: Point,
        termination: Point,
        direction: Direction,
        scanned: Point,
    },
    #[error("node {node} has no edge towards {direction}, expected one to {expected}")]
    MissingEdge {
        node: Point,
        direction: Direction,
        expected: Point,
    },
    #[error("node {0} has an edge towards {1} that ends where it starts")]
    SelfLoop(Point, Direction),
    #[error("edge {origin} -{direction}-> {termination} is not mirrored at {termination}")]
    AsymmetricEdge {
        origin: Point,
        termination: Point,
        direction: Direction,
    },
    #[error("edge endpoint {0} is not a node")]
    DanglingEndpoint(Point),
}

impl TileMap {
    /// Check the stored graph against a fresh derivation from the masks.
    ///
    /// Node membership must match [`TileMap::is_node`] for every tile, and
    /// each node's exit in every direction must be exactly where
    /// [`TileMap::scan`] leads. Meant for tests and debugging; the first
    /// violation found is returned.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        for (i, tile) in self.tiles.iter().enumerate() {
            let id = TileId(i);
            match (self.is_node(id), self.graph.contains_node(id)) {
                (true, false) => return Err(InvariantViolation::MissingNode(tile.position())),
                (false, true) => return Err(InvariantViolation::StrayNode(tile.position())),
                _ => {}
            }
        }

        for id in self.graph.nodes() {
            let at = self.position(id);
            for d in Direction::ALL {
                let scanned = self.scan(id, d);
                let stored = self.graph.exit(id, d);
                if let Some(t) = stored {
                    if t == id {
                        return Err(InvariantViolation::SelfLoop(at, d));
                    }
                    if !self.graph.contains_node(t) {
                        return Err(InvariantViolation::DanglingEndpoint(self.position(t)));
                    }
                    if self.graph.exit(t, d.reverse()) != Some(id) {
                        return Err(InvariantViolation::AsymmetricEdge {
                            origin: at,
                            termination: self.position(t),
                            direction: d,
                        });
                    }
                    if t != scanned {
                        return Err(InvariantViolation::StaleEdge {
                            origin: at,
                            termination: self.position(t),
                            direction: d,
                            scanned: self.position(scanned),
                        });
                    }
                } else if scanned != id {
                    return Err(InvariantViolation::MissingEdge {
                        node: at,
                        direction: d,
                        expected: self.position(scanned),
                    });
                }
            }
        }
        Ok(())
    }
}
