//! Build the looped corridor layout, list its graph and draw a path.
//!
//! Run: cargo run --bin corridors [-- FROM TO]
//!
//! `FROM` and `TO` are `x,y` pairs and default to `2,2` and `10,2`.
//! Set `RUST_LOG=debug` to watch each tile update, or `trace` for every
//! node and edge change.

use env_logger::Env;
use tilenav_core::Point;
use tilenav_demos::{describe_edges, parse_point, render};
use tilenav_graph::layouts;
use tilenav_paths::{SearchSpace, interpolate_path, path_length};

fn point_arg(arg: Option<String>, default: Point) -> Result<Point, String> {
    match arg {
        None => Ok(default),
        Some(s) => parse_point(&s).ok_or_else(|| format!("expected x,y but got {s:?}")),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let from = point_arg(args.next(), Point::new(2, 2))?;
    let to = point_arg(args.next(), Point::new(10, 2))?;

    let map = layouts::looped();
    map.validate()?;
    log::info!(
        "{} nodes, {} corridors",
        map.graph().node_count(),
        map.graph().edge_count()
    );

    print!("{}", describe_edges(&map));
    println!();

    let mut search = SearchSpace::new(map.bounds());
    match map.shortest_path(&mut search, from, to) {
        Some(path) => {
            let waypoints: Vec<String> = path.iter().map(|p| p.to_string()).collect();
            println!("{}", waypoints.join(" -> "));
            println!("{} steps", path_length(&path));
            println!();
            print!("{}", render(&map, &interpolate_path(&path)));
        }
        None => {
            println!("no path from {from} to {to}");
            print!("{}", render(&map, &[]));
        }
    }
    Ok(())
}
