//! Incremental graph maintenance.
//!
//! Changing one tile's mask can only change the node status of that tile
//! and of its immediate neighbours, and only on the axes the old or new
//! mask touches. [`TileMap::connect`] therefore tears down the edges that
//! run through or next to the tile on those axes, stores the mask, and
//! rebuilds the same neighbourhood by scanning. The resulting graph depends
//! only on the current masks, never on the order of the edits.

use tilenav_core::{Direction, Directions, Point};

use crate::tilemap::{TileId, TileMap};

impl TileMap {
    /// Set the connection mask of the tile at `p` and repair the graph.
    ///
    /// Removed directions re-scan the chain on the far side and reconnect
    /// it to whatever it now reaches. Returns `false`, leaving the map
    /// untouched, if `p` is off the grid.
    pub fn connect(&mut self, p: Point, mask: Directions) -> bool {
        let Some(id) = self.id(p) else {
            log::warn!("ignoring connect at {p}: outside {}x{} map", self.size, self.size);
            return false;
        };
        let old = self.mask(id);
        if old == mask {
            return true;
        }
        log::debug!(
            "connect {p}: {old} -> {mask} (removed {}, added {})",
            old.difference(mask),
            mask.difference(old)
        );

        let touched = old | mask;
        let axes = Direction::AXES.into_iter().filter(move |&a| touched.touches_axis(a));

        let mut stale = Vec::new();
        for axis in axes.clone() {
            self.collect_axis_edges(id, axis, &mut stale);
        }
        for (node, d) in stale {
            self.graph.remove_edge(node, d);
        }

        self.tiles[id.0].connections = mask;

        self.sync_node(id);
        for axis in axes.clone() {
            for d in [axis, axis.reverse()] {
                if let Some(n) = self.neighbor(id, d) {
                    self.sync_node(n);
                }
            }
        }
        for axis in axes {
            self.link_axis(id, axis);
        }
        true
    }

    /// Clear every connection of the tile at `p`.
    ///
    /// Equivalent to `connect(p, Directions::NONE)`.
    pub fn disconnect(&mut self, p: Point) -> bool {
        self.connect(p, Directions::NONE)
    }

    /// Edge slots on `axis` that depend on the tile at `id`: the corridor
    /// through it, its own exits, and the exits leading away from it at its
    /// two neighbours.
    fn collect_axis_edges(&self, id: TileId, axis: Direction, out: &mut Vec<(TileId, Direction)>) {
        if self.pass_through_axis(id) == Some(axis) {
            out.push((self.scan(id, axis.reverse()), axis));
        } else if self.graph.contains_node(id) {
            for d in [axis, axis.reverse()] {
                if self.graph.exit(id, d).is_some() {
                    out.push((id, d));
                }
            }
        }
        for d in [axis, axis.reverse()] {
            let Some(n) = self.neighbor(id, d) else { continue };
            if self.graph.exit(n, d).is_some() {
                out.push((n, d));
            }
        }
    }

    fn sync_node(&mut self, id: TileId) {
        if self.is_node(id) {
            self.graph.add_node(id);
        } else {
            self.graph.remove_node(id);
        }
    }

    /// Rebuild the edges collected by `collect_axis_edges` from the current
    /// masks.
    fn link_axis(&mut self, id: TileId, axis: Direction) {
        if self.pass_through_axis(id) == Some(axis) {
            let from = self.scan(id, axis.reverse());
            let to = self.scan(id, axis);
            self.graph.add_edge(from, to, axis);
        } else if self.is_node(id) {
            for d in [axis, axis.reverse()] {
                self.link_from(id, d);
            }
        }
        for d in [axis, axis.reverse()] {
            let Some(n) = self.neighbor(id, d) else { continue };
            if self.is_node(n) {
                self.link_from(n, d);
            }
        }
    }

    fn link_from(&mut self, id: TileId, d: Direction) {
        let t = self.scan(id, d);
        if t != id {
            self.graph.add_edge(id, t, d);
        }
    }
}
