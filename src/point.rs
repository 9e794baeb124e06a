use std::{
    fmt,
    hash::{Hash, Hasher},
    ops::{Add, Sub},
};

use nalgebra as na;

use crate::P2;

/// An immutable 2d coordinate. Compares and hashes by value.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Point(P2);

impl Point {
    /// Create a new point from its coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self(P2::new(x, y))
    }

    /// Get the x coordinate
    pub fn x(&self) -> f64 {
        self.0.x
    }

    /// Get the y coordinate
    pub fn y(&self) -> f64 {
        self.0.y
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Point) -> f64 {
        na::distance(&self.0, &other.0)
    }

    /// Half of each coordinate, used when quartering a size vector
    pub(crate) fn halved(&self) -> Self {
        Self(self.0 / 2.)
    }
}

impl Default for Point {
    fn default() -> Self {
        Self(P2::origin())
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Self(self.0 + rhs.0.coords)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Self(P2::from(self.0 - rhs.0))
    }
}

// NaN coordinates are left to the caller to avoid.
impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // -0.0 == 0.0, so both must hash alike
        for c in [self.0.x, self.0.y] {
            let c = if c == 0. { 0. } else { c };
            c.to_bits().hash(state);
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pos({}, {})", self.0.x, self.0.y)
    }
}

impl From<P2> for Point {
    fn from(p: P2) -> Self {
        Self(p)
    }
}

impl From<Point> for P2 {
    fn from(p: Point) -> Self {
        p.0
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
