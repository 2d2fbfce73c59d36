//! Text rendering for the corridor demos.
//!
//! Demonstrates: building a map tile by tile, inspecting the derived
//! junction/corridor graph, and drawing a shortest path over it.

use tilenav_core::{Direction, Point};
use tilenav_graph::TileMap;

// Glyphs
const GLYPH_EMPTY: char = '.';
const GLYPH_NODE: char = 'o';
const GLYPH_PATH: char = '*';

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn glyph(map: &TileMap, p: Point) -> char {
    let Some(tile) = map.tile(p) else {
        return ' ';
    };
    let mask = tile.connections();
    if mask.is_empty() {
        return GLYPH_EMPTY;
    }
    if map.id(p).is_some_and(|id| map.graph().contains_node(id)) {
        return GLYPH_NODE;
    }
    match mask.straight_axis() {
        Some(Direction::North) => '|',
        Some(Direction::NorthEast) => '/',
        Some(Direction::East) => '-',
        Some(Direction::SouthEast) => '\\',
        _ => '?',
    }
}

/// Draw the map one character per tile, overlaying `steps` with `*`.
pub fn render(map: &TileMap, steps: &[Point]) -> String {
    let mut out = String::new();
    for p in map.bounds() {
        let ch = if steps.contains(&p) {
            GLYPH_PATH
        } else {
            glyph(map, p)
        };
        out.push(ch);
        if p.x == map.size() - 1 {
            out.push('\n');
        }
    }
    out
}

/// One line per corridor: endpoints, heading and length.
pub fn describe_edges(map: &TileMap) -> String {
    map.graph()
        .edges()
        .map(|edge| {
            format!(
                "{} -> {} heading {} ({} tiles)\n",
                map.position(edge.origin),
                map.position(edge.termination),
                edge.direction,
                map.edge_length(edge)
            )
        })
        .collect()
}

/// Parse `"x,y"` into a point.
pub fn parse_point(s: &str) -> Option<Point> {
    let (x, y) = s.split_once(',')?;
    Some(Point::new(x.trim().parse().ok()?, y.trim().parse().ok()?))
}
