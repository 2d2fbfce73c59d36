use tilenav_core::{Direction, Directions, Point};

use crate::tilemap::{TileId, TileMap};

/// A single grid cell and the directions it declares passable.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    position: Point,
    pub(crate) connections: Directions,
}

impl Tile {
    pub(crate) fn new(position: Point) -> Self {
        Self {
            position,
            connections: Directions::NONE,
        }
    }

    /// Grid position of the tile.
    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    /// The tile's declared connection mask.
    #[inline]
    pub fn connections(&self) -> Directions {
        self.connections
    }

    /// Whether the declared mask alone makes this tile a junction: it
    /// branches, turns, dead-ends or is empty.
    #[inline]
    pub fn is_junction(&self) -> bool {
        self.connections.is_junction()
    }
}

// ---------------------------------------------------------------------------
// Reciprocity and scanning
// ---------------------------------------------------------------------------

impl TileMap {
    #[inline]
    pub(crate) fn mask(&self, id: TileId) -> Directions {
        self.tiles[id.0].connections
    }

    /// Whether `id` is reciprocally connected in direction `d`: it declares
    /// `d` and the neighbour that way declares the reverse.
    pub fn reciprocates(&self, id: TileId, d: Direction) -> bool {
        if !self.mask(id).has(d) {
            return false;
        }
        self.neighbor(id, d)
            .is_some_and(|n| self.mask(n).has(d.reverse()))
    }

    /// The directions of `id` that are reciprocated by a neighbour.
    pub fn links(&self, id: TileId) -> Directions {
        self.mask(id)
            .iter()
            .filter(|&d| self.reciprocates(id, d))
            .collect()
    }

    /// If `id` is a straight tile reciprocated at both ends, the axis it
    /// carries (as the lower-indexed direction).
    pub(crate) fn pass_through_axis(&self, id: TileId) -> Option<Direction> {
        let axis = self.mask(id).straight_axis()?;
        (self.reciprocates(id, axis) && self.reciprocates(id, axis.reverse())).then_some(axis)
    }

    /// Whether the tile at `id` is a node of the corridor graph.
    ///
    /// Every connected tile is a node except a straight pass-through whose
    /// two links are both reciprocated: that tile lies inside a corridor.
    /// A straight tile at the open end of a chain is therefore a node too.
    pub fn is_node(&self, id: TileId) -> bool {
        !self.mask(id).is_empty() && self.pass_through_axis(id).is_none()
    }

    /// Walk from `id` in direction `dir` along the reciprocal chain.
    ///
    /// Stops at the grid edge, at a neighbour that does not declare the
    /// reverse direction, or on reaching a junction tile, and returns the
    /// last tile reached. Returns `id` itself when no step can be taken.
    pub fn scan(&self, id: TileId, dir: Direction) -> TileId {
        let mut current = id;
        if !self.mask(current).has(dir) {
            return current;
        }
        let back = dir.reverse();
        loop {
            let Some(next) = self.neighbor(current, dir) else {
                return current;
            };
            if !self.mask(next).has(back) {
                return current;
            }
            current = next;
            if self.mask(current).is_junction() {
                return current;
            }
        }
    }
}
