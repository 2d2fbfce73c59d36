//! Shortest-path search for graphs whose nodes are grid points.
//!
//! Neighbours need not be adjacent cells: a [`Pather`] may link any two
//! points of the searched [`Range`](tilenav_core::Range), which is how corridor
//! graphs jump straight from one junction to the next.
//!
//! Searches run through [`SearchSpace`], which owns and reuses its node
//! arrays so that repeated queries incur no allocations after warm-up.
//!
//! # Trait hierarchy
//!
//! | Trait | Role |
//! |---|---|
//! | [`Pather`] | neighbour enumeration |
//! | [`WeightedPather`] : [`Pather`] | positive edge costs |
//! | [`AstarPather`] : [`WeightedPather`] | admissible estimate, required by A* |

mod astar;
mod distance;
mod search;
mod traits;

pub use astar::{interpolate_path, path_length};
pub use distance::{COST_SCALE, chebyshev, euclidean_cost, manhattan};
pub use search::{SearchSpace, UNREACHABLE};
pub use traits::{AstarPather, Pather, WeightedPather};
