//! Gravitation laws for the discrete simulation
//!
//! A law looks at a frozen [`System`] and writes one velocity change per
//! body into an output buffer. It never mutates the system, which is what
//! lets the integrator guarantee that every planet sees pre-step positions.

use crate::simulation::body::Body;
use crate::simulation::space_point::SpacePoint;
use crate::simulation::system::System;

/// Source of velocity changes operating on a [`System`]
/// Implementations add their contribution into `out[i]` for each body `i`
pub trait Attraction {
    fn velocity_deltas(&self, sys: &System, out: &mut [SpacePoint]);
}

/// Unit-step gravity
///
/// Every other body pulls a planet by `signum(other - self)` on each axis,
/// whatever the distance. Stars feel nothing: their entry stays untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitStepGravity;

impl Attraction for UnitStepGravity {
    fn velocity_deltas(&self, sys: &System, out: &mut [SpacePoint]) {
        let bodies = sys.bodies();

        for (i, bi) in bodies.iter().enumerate() {
            let planet = match bi {
                Body::Planet(p) => p,
                Body::Star(_) => continue,
            };

            // all ordered pairs (i, j), j != i
            for (j, bj) in bodies.iter().enumerate() {
                if i != j {
                    out[i] = out[i] + planet.pull_towards(bj);
                }
            }
        }
    }
}
