//! Ready-made maps, used by the demos and the tests.

use tilenav_core::{Directions, Point};

use crate::tilemap::TileMap;

const EW: Directions = Directions(Directions::E.0 | Directions::W.0);
const NS: Directions = Directions(Directions::N.0 | Directions::S.0);

/// Side length of the [`looped`] map.
pub const LOOPED_SIZE: i32 = 12;

/// A 12×12 map with an inner loop hanging off the top row of an outer
/// one, built tile by tile with some masks overwritten along the way. The
/// drawing spans (2,2) to (10,10):
///
/// ```text
///   +-+- -+-+
///   | |   | |
///   | |   | |
///   | |   | |
///   | |   | |
///   | +---+ |
///   |       |
///   |       |
///   +-------+
/// ```
///
/// The top row is cut at (6,2), leaving (5,2) and (7,2) as dead ends.
pub fn looped() -> TileMap {
    let mut map = TileMap::new(LOOPED_SIZE);
    let mut set = |x: i32, y: i32, m: Directions| {
        map.connect(Point::new(x, y), m);
    };

    for x in 2..11 {
        set(x, 2, EW);
    }
    set(4, 2, EW | Directions::S);
    set(8, 2, EW | Directions::S);

    for y in 3..7 {
        set(4, y, NS);
    }
    set(4, 7, Directions::N | Directions::E);
    for x in 5..8 {
        set(x, 7, EW);
    }
    set(8, 7, Directions::N | Directions::W);
    for y in 3..7 {
        set(8, y, NS);
    }

    set(6, 2, Directions::NONE);

    for y in 3..10 {
        set(2, y, NS);
        set(10, y, NS);
    }
    for x in 3..10 {
        set(x, 10, EW);
    }
    set(2, 2, Directions::E | Directions::S);
    set(10, 2, Directions::S | Directions::W);
    set(2, 10, Directions::N | Directions::E);
    set(10, 10, Directions::N | Directions::W);

    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looped_is_consistent() {
        let map = looped();
        assert_eq!(map.size(), LOOPED_SIZE);
        assert_eq!(map.validate(), Ok(()));
        assert_eq!(map.graph().node_count(), 10);
        assert_eq!(map.graph().edge_count(), 10);
        assert!(map.tile(Point::new(6, 2)).unwrap().connections().is_empty());
    }
}
