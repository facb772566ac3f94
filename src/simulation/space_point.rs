//! Integer points in 3-space
//!
//! `SpacePoint` is the value type used for both positions and velocities.
//! It wraps an `nalgebra` integer vector (`NVec3i`) and adds the few
//! operations the discrete gravity model needs:
//! - componentwise `+` / `-`
//! - the L1 (Manhattan) norm `|x| + |y| + |z|`
//! - a per-axis signum, used to pull a planet one unit towards another body
//!
//! Arithmetic wraps on overflow, in debug and release builds alike.

use std::fmt;
use std::ops::{Add, Sub};

use nalgebra::Vector3;

pub type NVec3i = Vector3<i64>;

/// Largest coordinate magnitude a body may start with
pub const MAX_COORDINATE: i64 = i32::MAX as i64;

/// Sign of an integer: `-1`, `0` or `1`
pub fn signum(n: i64) -> i64 {
    n.signum()
}

/// Immutable point (or displacement) with integer coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpacePoint(NVec3i);

impl SpacePoint {
    pub fn new(x: i64, y: i64, z: i64) -> Self {
        Self(NVec3i::new(x, y, z))
    }

    /// The point `(0, 0, 0)`
    pub fn origin() -> Self {
        Self(NVec3i::zeros())
    }

    pub fn x(&self) -> i64 {
        self.0.x
    }

    pub fn y(&self) -> i64 {
        self.0.y
    }

    pub fn z(&self) -> i64 {
        self.0.z
    }

    /// Manhattan norm `|x| + |y| + |z|`
    ///
    /// Never negative for points whose coordinates stay within a few
    /// [`MAX_COORDINATE`]s; beyond that the sum wraps.
    pub fn norm(&self) -> i64 {
        self.0
            .iter()
            .fold(0i64, |acc, c| acc.wrapping_add(c.wrapping_abs()))
    }

    /// True if every coordinate lies in `-MAX_COORDINATE..=MAX_COORDINATE`
    pub fn is_within_bounds(&self) -> bool {
        self.0.iter().all(|c| c.unsigned_abs() <= MAX_COORDINATE as u64)
    }

    /// Applies [`signum`] to every coordinate
    pub fn signum(&self) -> Self {
        Self(self.0.map(signum))
    }

    /// Per-axis unit step from `self` towards `other`
    ///
    /// Each coordinate is `signum(other - self)`. The difference saturates
    /// instead of wrapping, which keeps its sign right near `i64::MIN`/`i64::MAX`.
    pub fn direction_to(&self, other: &SpacePoint) -> Self {
        Self(other.0.zip_map(&self.0, |o, s| o.saturating_sub(s))).signum()
    }
}

impl From<[i64; 3]> for SpacePoint {
    fn from(c: [i64; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }
}

impl Add for SpacePoint {
    type Output = SpacePoint;

    fn add(self, rhs: SpacePoint) -> SpacePoint {
        Self(self.0.zip_map(&rhs.0, i64::wrapping_add))
    }
}

impl Sub for SpacePoint {
    type Output = SpacePoint;

    fn sub(self, rhs: SpacePoint) -> SpacePoint {
        Self(self.0.zip_map(&rhs.0, i64::wrapping_sub))
    }
}

impl fmt::Display for SpacePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0.x, self.0.y, self.0.z)
    }
}
