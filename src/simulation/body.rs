//! Celestial bodies
//!
//! A [`Body`] is either a [`Star`] or a [`Planet`]. Both carry a non-empty
//! name and a position; only planets have a velocity, so only planets can
//! be pulled around by gravity. Stars are fixed reference points.
//!
//! Fields are private: a body's position and velocity change only through
//! [`Planet::gravitate_towards`] and [`Planet::apply_velocity`].

use std::fmt;

use serde::Deserialize;

use crate::error::{SimError, SimResult};
use crate::simulation::space_point::SpacePoint;

/// Tag for the two body variants
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    #[serde(rename = "star")]
    Star,

    #[serde(rename = "planet")]
    Planet,
}

impl fmt::Display for BodyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodyKind::Star => f.write_str("Star"),
            BodyKind::Planet => f.write_str("Planet"),
        }
    }
}

fn checked_name(name: impl Into<String>) -> SimResult<String> {
    let name = name.into();
    if name.is_empty() {
        return Err(SimError::EmptyName);
    }
    Ok(name)
}

fn checked_position(name: &str, position: SpacePoint) -> SimResult<SpacePoint> {
    if !position.is_within_bounds() {
        return Err(SimError::CoordinateOutOfRange {
            name: name.to_string(),
            position,
        });
    }
    Ok(position)
}

/// A star: never moves, has no energy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Star {
    name: String,
    position: SpacePoint,
}

impl Star {
    pub fn new(name: impl Into<String>, position: SpacePoint) -> SimResult<Self> {
        let name = checked_name(name)?;
        let position = checked_position(&name, position)?;
        Ok(Self { name, position })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> SpacePoint {
        self.position
    }
}

/// A planet: starts at rest and drifts under the unit-step gravity rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Planet {
    name: String,
    position: SpacePoint,
    velocity: SpacePoint,
}

impl Planet {
    /// New planet at `position` with zero velocity
    pub fn new(name: impl Into<String>, position: SpacePoint) -> SimResult<Self> {
        let name = checked_name(name)?;
        let position = checked_position(&name, position)?;
        Ok(Self {
            name,
            position,
            velocity: SpacePoint::origin(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> SpacePoint {
        self.position
    }

    pub fn velocity(&self) -> SpacePoint {
        self.velocity
    }

    /// Kinetic energy: the norm of the velocity
    pub fn kinetic_energy(&self) -> i64 {
        self.velocity.norm()
    }

    /// Potential energy: the norm of the position
    pub fn potential_energy(&self) -> i64 {
        self.position.norm()
    }

    /// Kinetic times potential energy, wrapping on overflow
    pub fn energy(&self) -> i64 {
        self.kinetic_energy().wrapping_mul(self.potential_energy())
    }

    /// Pulls the velocity one unit per axis towards `other`
    ///
    /// Distance and mass play no role: each axis changes by `-1`, `0` or `+1`.
    pub fn gravitate_towards(&mut self, other: &Body) {
        self.accelerate(self.pull_towards(other));
    }

    /// Velocity change `gravitate_towards(other)` would apply, without applying it
    pub fn pull_towards(&self, other: &Body) -> SpacePoint {
        self.position.direction_to(&other.position())
    }

    /// Moves the planet by its current velocity
    ///
    /// Must run once per step, after every `gravitate_towards` of that step.
    pub fn apply_velocity(&mut self) {
        self.position = self.position + self.velocity;
    }

    pub(crate) fn accelerate(&mut self, delta: SpacePoint) {
        self.velocity = self.velocity + delta;
    }
}

/// A celestial body
///
/// Inside a [`System`](crate::simulation::system::System) bodies are kept
/// sorted by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Star(Star),
    Planet(Planet),
}

impl Body {
    /// Builds a body of the given kind
    ///
    /// Rejects an empty name and any coordinate beyond
    /// [`MAX_COORDINATE`](crate::simulation::space_point::MAX_COORDINATE).
    pub fn new(kind: BodyKind, name: impl Into<String>, position: SpacePoint) -> SimResult<Self> {
        match kind {
            BodyKind::Star => Star::new(name, position).map(Body::Star),
            BodyKind::Planet => Planet::new(name, position).map(Body::Planet),
        }
    }

    pub fn kind(&self) -> BodyKind {
        match self {
            Body::Star(_) => BodyKind::Star,
            Body::Planet(_) => BodyKind::Planet,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Body::Star(s) => s.name(),
            Body::Planet(p) => p.name(),
        }
    }

    pub fn position(&self) -> SpacePoint {
        match self {
            Body::Star(s) => s.position(),
            Body::Planet(p) => p.position(),
        }
    }

    pub fn potential_energy(&self) -> i64 {
        self.position().norm()
    }

    /// Stars contribute nothing, planets contribute kinetic * potential
    pub fn energy(&self) -> i64 {
        match self {
            Body::Star(_) => 0,
            Body::Planet(p) => p.energy(),
        }
    }

    pub fn as_planet(&self) -> Option<&Planet> {
        match self {
            Body::Planet(p) => Some(p),
            Body::Star(_) => None,
        }
    }
}

impl From<Star> for Body {
    fn from(s: Star) -> Self {
        Body::Star(s)
    }
}

impl From<Planet> for Body {
    fn from(p: Planet) -> Self {
        Body::Planet(p)
    }
}

impl fmt::Display for Star {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Star, name: {}, pos: {}", self.name, self.position)
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Planet, name: {}, pos: {}, vel: {}",
            self.name, self.position, self.velocity
        )
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Body::Star(s) => fmt::Display::fmt(s, f),
            Body::Planet(p) => fmt::Display::fmt(p, f),
        }
    }
}
