//! The eight-way direction model: [`Direction`] and the [`Directions`] bitmask.
//!
//! Bits are laid out clockwise from north, so the opposite of any direction
//! (or of a whole mask) is a rotation by four bits:
//!
//! ```text
//!   NW(7)  N(0)  NE(1)
//!   W(6)    .    E(2)
//!   SW(5)  S(4)  SE(3)
//! ```

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

use crate::geom::Point;

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// One of the eight compass directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Direction {
    North = 0,
    NorthEast = 1,
    East = 2,
    SouthEast = 3,
    South = 4,
    SouthWest = 5,
    West = 6,
    NorthWest = 7,
}

impl Direction {
    /// All directions in bit order (clockwise from north).
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// One direction per axis: N–S, NE–SW, E–W and SE–NW.
    pub const AXES: [Direction; 4] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
    ];

    /// Bit position of this direction (0..8).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The single-bit mask for this direction.
    #[inline]
    pub const fn bit(self) -> Directions {
        Directions(1 << self as u8)
    }

    /// The opposite direction.
    #[inline]
    pub const fn reverse(self) -> Self {
        Self::ALL[(self as usize + 4) % 8]
    }

    /// Unit step for this direction.
    #[inline]
    pub const fn vector(self) -> Point {
        match self {
            Direction::North => Point::new(0, -1),
            Direction::NorthEast => Point::new(1, -1),
            Direction::East => Point::new(1, 0),
            Direction::SouthEast => Point::new(1, 1),
            Direction::South => Point::new(0, 1),
            Direction::SouthWest => Point::new(-1, 1),
            Direction::West => Point::new(-1, 0),
            Direction::NorthWest => Point::new(-1, -1),
        }
    }

    /// The direction whose unit step is exactly `v`.
    pub fn from_vector(v: Point) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.vector() == v)
    }

    /// Whether this is one of the four diagonal directions.
    #[inline]
    pub const fn is_diagonal(self) -> bool {
        self as u8 % 2 == 1
    }

    /// Both directions of this direction's axis as a mask.
    #[inline]
    pub const fn axis(self) -> Directions {
        Directions(self.bit().0 | self.reverse().bit().0)
    }

    /// Short compass label ("N", "NE", ...).
    pub const fn label(self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::NorthEast => "NE",
            Direction::East => "E",
            Direction::SouthEast => "SE",
            Direction::South => "S",
            Direction::SouthWest => "SW",
            Direction::West => "W",
            Direction::NorthWest => "NW",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Directions
// ---------------------------------------------------------------------------

/// Bitmask of passable directions declared by a tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Directions(pub u8);

impl Directions {
    pub const NONE: Self = Self(0);
    pub const N: Self = Self(1 << 0);
    pub const NE: Self = Self(1 << 1);
    pub const E: Self = Self(1 << 2);
    pub const SE: Self = Self(1 << 3);
    pub const S: Self = Self(1 << 4);
    pub const SW: Self = Self(1 << 5);
    pub const W: Self = Self(1 << 6);
    pub const NW: Self = Self(1 << 7);
    pub const CARDINAL: Self = Self(0b0101_0101);
    pub const ALL: Self = Self(0xFF);

    /// Whether this mask contains all the bits from `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Whether the mask has the bit for `d`.
    #[inline]
    pub const fn has(self, d: Direction) -> bool {
        self.contains(d.bit())
    }

    /// Whether the mask is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of set directions.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// The mask with every direction replaced by its opposite.
    #[inline]
    pub const fn reverse(self) -> Self {
        Self(self.0.rotate_left(4))
    }

    /// Bits in `self` that are not in `other`.
    #[inline]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Whether any bit lies on the axis of `d`.
    #[inline]
    pub const fn touches_axis(self, d: Direction) -> bool {
        self.0 & d.axis().0 != 0
    }

    /// If the mask is exactly two opposite directions, the lower-indexed one
    /// (so `N|S` gives `North`, `E|W` gives `East`).
    pub fn straight_axis(self) -> Option<Direction> {
        if self.count() != 2 {
            return None;
        }
        Direction::AXES.into_iter().find(|d| self == d.axis())
    }

    /// A mask is a junction when it branches, dead-ends or turns: anything
    /// other than exactly two opposite directions.
    #[inline]
    pub fn is_junction(self) -> bool {
        self.straight_axis().is_none()
    }

    /// Set directions in bit order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.has(*d))
    }
}

impl From<Direction> for Directions {
    #[inline]
    fn from(d: Direction) -> Self {
        d.bit()
    }
}

impl FromIterator<Direction> for Directions {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        iter.into_iter().fold(Self::NONE, |m, d| m | d.bit())
    }
}

impl BitOr for Directions {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Directions {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Directions {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl Not for Directions {
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self(!self.0)
    }
}

impl fmt::Display for Directions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        for (i, d) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            f.write_str(d.label())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_is_an_involution() {
        for d in Direction::ALL {
            assert_eq!(d.reverse().reverse(), d);
            assert_ne!(d.reverse(), d);
            assert_eq!(d.reverse().vector(), d.vector() * -1);
            assert_eq!(d.bit().reverse(), d.reverse().bit());
        }
    }

    #[test]
    fn bits_match_named_constants() {
        assert_eq!(Direction::North.bit(), Directions::N);
        assert_eq!(Direction::SouthEast.bit(), Directions::SE);
        assert_eq!(Direction::West.bit(), Directions::W);
        assert_eq!(Direction::NorthWest.bit(), Directions::NW);
        let cardinal: Directions = [
            Direction::North,
            Direction::East,
            Direction::South,
            Direction::West,
        ]
        .into_iter()
        .collect();
        assert_eq!(cardinal, Directions::CARDINAL);
    }

    #[test]
    fn from_vector_only_accepts_unit_steps() {
        for d in Direction::ALL {
            assert_eq!(Direction::from_vector(d.vector()), Some(d));
        }
        assert_eq!(Direction::from_vector(Point::new(2, 0)), None);
        assert_eq!(Direction::from_vector(Point::ZERO), None);
    }

    #[test]
    fn straight_and_junction_masks() {
        assert_eq!((Directions::N | Directions::S).straight_axis(), Some(Direction::North));
        assert_eq!((Directions::E | Directions::W).straight_axis(), Some(Direction::East));
        assert_eq!((Directions::NE | Directions::SW).straight_axis(), Some(Direction::NorthEast));
        assert_eq!((Directions::SE | Directions::NW).straight_axis(), Some(Direction::SouthEast));

        assert!(!(Directions::E | Directions::W).is_junction());
        // Turns, dead ends, branches and the empty mask are all junctions.
        assert!((Directions::N | Directions::E).is_junction());
        assert!(Directions::E.is_junction());
        assert!((Directions::N | Directions::E | Directions::S).is_junction());
        assert!(Directions::NONE.is_junction());
    }

    #[test]
    fn mask_set_operations() {
        let old = Directions::N | Directions::E;
        let new = Directions::E | Directions::S;
        assert_eq!(old.difference(new), Directions::N);
        assert_eq!(new.difference(old), Directions::S);
        assert_eq!(old & new, Directions::E);
        assert_eq!(!Directions::ALL, Directions::NONE);
        assert!(new.touches_axis(Direction::North));
        assert!(!new.touches_axis(Direction::NorthEast));
        assert_eq!(old.iter().collect::<Vec<_>>(), vec![Direction::North, Direction::East]);
    }

    #[test]
    fn display_lists_labels() {
        assert_eq!((Directions::N | Directions::SW).to_string(), "N|SW");
        assert_eq!(Directions::NONE.to_string(), "-");
        assert_eq!(Direction::SouthEast.to_string(), "SE");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn directions_round_trip() {
        let m = Directions::N | Directions::E | Directions::SW;
        let json = serde_json::to_string(&m).unwrap();
        let back: Directions = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);

        let d = Direction::NorthWest;
        let json = serde_json::to_string(&d).unwrap();
        let back: Direction = serde_json::from_str(&json).unwrap();
        assert_eq!(d, back);
    }
}
