use std::fmt;

use tilenav_core::{Direction, Directions, Point, Range};

use crate::corridor::CorridorGraph;
use crate::tile::Tile;

/// Identity of a tile: its row-major index in the owning [`TileMap`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileId(pub usize);

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A fixed-size square grid of tiles together with the corridor graph
/// derived from their connections.
///
/// The map owns every [`Tile`] in a flat arena; tiles never point back at
/// the map; all neighbour access goes through [`TileMap::id`] and
/// [`TileMap::neighbor`].
#[derive(Clone, Debug)]
pub struct TileMap {
    pub(crate) size: i32,
    pub(crate) tiles: Vec<Tile>,
    pub(crate) graph: CorridorGraph,
}

impl TileMap {
    /// Create a `size` × `size` map with every tile disconnected.
    ///
    /// A non-positive size yields an empty map in which every position is
    /// out of bounds.
    pub fn new(size: i32) -> Self {
        let size = size.max(0);
        let tiles = Range::square(size).iter().map(Tile::new).collect();
        Self {
            size,
            tiles,
            graph: CorridorGraph::new(),
        }
    }

    /// Side length of the grid.
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// The grid rectangle `[0, size)²`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::square(self.size)
    }

    /// Whether `p` lies on the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// Identity of the tile at `p`, or `None` if `p` is off the grid.
    #[inline]
    pub fn id(&self, p: Point) -> Option<TileId> {
        if !self.contains(p) {
            return None;
        }
        Some(TileId((p.y * self.size + p.x) as usize))
    }

    /// Grid position of a tile.
    ///
    /// # Panics
    ///
    /// If `id` was not produced by this map.
    #[inline]
    pub fn position(&self, id: TileId) -> Point {
        self.tiles[id.0].position()
    }

    /// The tile at `p`, or `None` if `p` is off the grid.
    pub fn tile(&self, p: Point) -> Option<&Tile> {
        self.id(p).map(|id| &self.tiles[id.0])
    }

    /// The tile with identity `id`.
    ///
    /// # Panics
    ///
    /// If `id` was not produced by this map.
    #[inline]
    pub fn tile_by_id(&self, id: TileId) -> &Tile {
        &self.tiles[id.0]
    }

    /// All tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// The neighbour of `id` one step in direction `d`, if on the grid.
    #[inline]
    pub fn neighbor(&self, id: TileId, d: Direction) -> Option<TileId> {
        self.id(self.position(id) + d)
    }

    /// Read access to the derived junction/corridor graph.
    #[inline]
    pub fn graph(&self) -> &CorridorGraph {
        &self.graph
    }

    /// Disconnect every tile and drop the whole graph.
    pub fn clear(&mut self) {
        log::debug!(
            "clearing {}x{} map ({} nodes, {} edges)",
            self.size,
            self.size,
            self.graph.node_count(),
            self.graph.edge_count()
        );
        for tile in &mut self.tiles {
            tile.connections = Directions::NONE;
        }
        self.graph.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_row_major() {
        let map = TileMap::new(4);
        assert_eq!(map.id(Point::new(0, 0)), Some(TileId(0)));
        assert_eq!(map.id(Point::new(3, 0)), Some(TileId(3)));
        assert_eq!(map.id(Point::new(1, 2)), Some(TileId(9)));
        assert_eq!(map.position(TileId(9)), Point::new(1, 2));
        assert_eq!(map.tiles().count(), 16);
    }

    #[test]
    fn out_of_bounds_lookups() {
        let map = TileMap::new(4);
        assert!(map.tile(Point::new(4, 0)).is_none());
        assert!(map.tile(Point::new(0, -1)).is_none());
        assert_eq!(map.id(Point::new(-1, 2)), None);
        let corner = map.id(Point::new(3, 3)).unwrap();
        assert_eq!(map.neighbor(corner, Direction::East), None);
        assert_eq!(map.neighbor(corner, Direction::SouthWest), None);
        assert_eq!(
            map.neighbor(corner, Direction::NorthWest),
            map.id(Point::new(2, 2))
        );
    }

    #[test]
    #[should_panic]
    fn position_of_a_foreign_id_panics() {
        let small = TileMap::new(2);
        let big = TileMap::new(8);
        let far = big.id(Point::new(7, 7)).unwrap();
        small.position(far);
    }

    #[test]
    fn empty_map() {
        let map = TileMap::new(0);
        assert_eq!(map.tiles().count(), 0);
        assert!(map.tile(Point::ZERO).is_none());
        let negative = TileMap::new(-5);
        assert_eq!(negative.size(), 0);
    }

    #[test]
    fn clear_resets_masks_and_graph() {
        let mut map = TileMap::new(6);
        for x in 1..5 {
            map.connect(Point::new(x, 2), Directions::E | Directions::W);
        }
        map.connect(Point::new(2, 4), Directions::N);
        assert!(map.graph().node_count() > 0);

        map.clear();
        assert_eq!(map.graph().node_count(), 0);
        assert_eq!(map.graph().edge_count(), 0);
        assert!(map.tiles().all(|t| t.connections().is_empty()));
        assert_eq!(map.validate(), Ok(()));
    }
}
