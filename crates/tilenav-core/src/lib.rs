//! **tilenav-core** — value types shared by the *tilenav* crates.
//!
//! This crate provides integer grid geometry ([`Point`], [`Range`]) and the
//! eight-way direction model ([`Direction`], [`Directions`]) used to declare
//! which neighbours of a tile are passable.

pub mod direction;
pub mod geom;

pub use direction::{Direction, Directions};
pub use geom::{Point, Range};
