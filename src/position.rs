use std::fmt;
use std::ops::{Add, Sub};

use serde::Serialize;

/// Grid position in logical cell coordinates.
///
/// Also used as a displacement vector (the snake's per-move delta).
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Creates a position from its coordinates.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the scalar (dot) product of both vectors.
    ///
    /// Products are exact in `i64`; only the sum of two `i32::MIN` squares wraps.
    #[must_use]
    pub fn dot(self, other: Self) -> i64 {
        let x = i64::from(self.x) * i64::from(other.x);
        let y = i64::from(self.y) * i64::from(other.y);
        x.wrapping_add(y)
    }

    /// Returns the Euclidean length of the vector.
    #[must_use]
    pub fn length(self) -> f64 {
        f64::from(self.x).hypot(f64::from(self.y))
    }
}

impl Add for Position {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x.wrapping_add(other.x),
            y: self.y.wrapping_add(other.y),
        }
    }
}

impl Sub for Position {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x.wrapping_sub(other.x),
            y: self.y.wrapping_sub(other.y),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position [{} | {}]", self.x, self.y)
    }
}
