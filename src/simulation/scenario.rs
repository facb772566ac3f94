//! Build fully-initialized simulation scenarios from input
//!
//! A [`Scenario`] bundles the system state with the number of steps to run.
//! It is built either from parsed text descriptors or from a YAML-facing
//! [`ScenarioConfig`]; both paths insert bodies one by one so the first
//! duplicate name aborts the build. Rejected records are logged at WARN
//! before the error is returned.

use tracing::{debug, info, warn};

use crate::configuration::config::ScenarioConfig;
use crate::configuration::descriptor::{parse_descriptors, BodyDescriptor};
use crate::error::{SimError, SimResult};
use crate::simulation::system::System;

#[derive(Debug, Clone)]
pub struct Scenario {
    pub system: System,
    pub steps: u64, // steps still to run
}

impl Scenario {
    pub fn from_descriptors<I>(descriptors: I, steps: u64) -> SimResult<Self>
    where
        I: IntoIterator<Item = BodyDescriptor>,
    {
        let mut system = System::new();
        for (i, d) in descriptors.into_iter().enumerate() {
            let name = d.name.clone();
            if let Err(e) = d.into_body().and_then(|b| system.add_body(b)) {
                warn!(record = i + 1, name = %name, error = %e, "rejected body");
                return Err(e);
            }
        }
        debug!(bodies = system.len(), steps, "scenario built");

        Ok(Self { system, steps })
    }

    pub fn from_config(cfg: ScenarioConfig) -> SimResult<Self> {
        let steps = cfg.simulation.steps;
        Self::from_descriptors(cfg.descriptors(), steps)
    }

    /// Parses a `<P|S> name x y z` token stream
    ///
    /// A text input carries no step count of its own, so `steps` is required.
    pub fn from_text(text: &str, steps: Option<u64>) -> SimResult<Self> {
        let steps = steps.ok_or(SimError::MissingSteps)?;
        let descriptors = parse_descriptors(text).inspect_err(|e| {
            warn!(error = %e, "rejected input");
        })?;
        Self::from_descriptors(descriptors, steps)
    }

    /// Replaces the step count when one is given
    pub fn override_steps(&mut self, steps: Option<u64>) {
        if let Some(steps) = steps {
            self.steps = steps;
        }
    }

    /// Runs the remaining steps
    pub fn run(&mut self) {
        info!(bodies = self.system.len(), steps = self.steps, "running simulation");
        while self.steps > 0 {
            self.system.step();
            self.steps -= 1;
        }
        info!(total_energy = self.system.total_energy(), "simulation finished");
    }
}
