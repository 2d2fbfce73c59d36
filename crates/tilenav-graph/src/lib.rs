//! Junction/corridor graph over a square tile grid.
//!
//! Every tile declares, through a [`Directions`](tilenav_core::Directions)
//! mask, which of its eight neighbours it treats as passable. A connection
//! only counts when the neighbour declares the opposite direction too. From
//! those local declarations the [`TileMap`] derives a sparse
//! [`CorridorGraph`]: tiles that branch, turn or dead-end become nodes, and
//! straight runs between them collapse into single edges.
//!
//! The graph is kept up to date incrementally by [`TileMap::connect`], the
//! only mutation entry point. Shortest paths are answered over the graph by
//! [`TileMap::shortest_path`].
//!
//! ```
//! use tilenav_core::{Directions, Point};
//! use tilenav_graph::TileMap;
//! use tilenav_paths::SearchSpace;
//!
//! let mut map = TileMap::new(8);
//! for x in 1..=5 {
//!     map.connect(Point::new(x, 3), Directions::E | Directions::W);
//! }
//! assert_eq!(map.graph().edge_count(), 1);
//!
//! let mut search = SearchSpace::new(map.bounds());
//! let path = map.shortest_path(&mut search, Point::new(2, 3), Point::new(5, 3));
//! assert_eq!(path, Some(vec![Point::new(2, 3), Point::new(5, 3)]));
//! ```

mod connect;
mod corridor;
pub mod layouts;
mod navigation;
mod tile;
mod tilemap;
mod validate;

pub use corridor::{CorridorGraph, Edge};
pub use navigation::Location;
pub use tile::Tile;
pub use tilemap::{TileId, TileMap};
pub use validate::InvariantViolation;
