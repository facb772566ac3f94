use std::time::Instant;

use crate::error::SimResult;
use crate::simulation::body::{Body, BodyKind};
use crate::simulation::space_point::SpacePoint;
use crate::simulation::system::System;

/// Helper to build a manual System of size `n`
/// Every tenth body is a star, the rest are planets; positions are
/// deterministic, no rand needed
pub fn make_system(n: usize) -> SimResult<System> {
    let mut sys = System::new();

    for i in 0..n {
        let i_f = i as f64;
        let x = SpacePoint::new(
            ((i_f * 0.37).sin() * 500.0) as i64,
            ((i_f * 0.13).cos() * 500.0) as i64,
            ((i_f * 0.07).sin() * 500.0) as i64,
        );
        let kind = if i % 10 == 0 { BodyKind::Star } else { BodyKind::Planet };

        // zero-padded names keep insertion cheap and unique
        sys.add_body(Body::new(kind, format!("body-{i:06}"), x)?)?;
    }

    Ok(sys)
}

/// Benchmark System::step for a range of n
/// Paste output directly into excel to graph
pub fn bench_step_curve() -> SimResult<()> {
    println!("N,step_ms");

    for n in (100..=2000).step_by(100) {
        // Small n: average over a few steps to smooth noise
        let steps = if n <= 800 { 5 } else { 1 };

        let mut sys = make_system(n)?;

        // Warm-up one step
        sys.step();

        let t0 = Instant::now();
        for _ in 0..steps {
            sys.step();
        }
        let elapsed = t0.elapsed().as_secs_f64() * 1000.0; // ms total
        let ms = elapsed / steps as f64;

        println!("{},{:.6}", n, ms);
    }

    Ok(())
}
