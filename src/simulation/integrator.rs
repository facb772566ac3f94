//! Fixed-step integrator for the discrete system
//!
//! One step is a kick followed by a drift:
//! 1. kick: every velocity changes by what the [`Attraction`] law computes
//!    from the positions as they stand before the step
//! 2. drift: every planet moves by its (new) velocity, exactly once

use tracing::trace;

use crate::simulation::body::Body;
use crate::simulation::forces::Attraction;
use crate::simulation::space_point::SpacePoint;
use crate::simulation::system::System;

/// Advance `sys` by one step under `law`
pub fn unit_step(sys: &mut System, law: &dyn Attraction) {
    let n = sys.len();
    if n == 0 { // no bodies, only the clock moves
        sys.tick();
        return;
    }

    // dv[i] holds the velocity change of body i, computed while the system
    // is only borrowed immutably
    let mut dv = vec![SpacePoint::origin(); n];
    law.velocity_deltas(&*sys, &mut dv);

    // Kick: v_n+1 = v_n + dv
    for (b, d) in sys.bodies_mut().iter_mut().zip(dv.iter()) {
        if let Body::Planet(p) = b {
            p.accelerate(*d);
        }
    }

    // Drift: x_n+1 = x_n + v_n+1
    for b in sys.bodies_mut().iter_mut() {
        match b {
            Body::Planet(p) => p.apply_velocity(),
            Body::Star(_) => {}
        }
    }

    sys.tick();
    trace!(step = sys.steps(), bodies = n, "integrated step");
}
