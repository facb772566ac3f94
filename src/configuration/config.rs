//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`SimulationConfig`] – run options (number of steps)
//! - [`BodyConfig`]       – kind, name and initial position of each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! simulation:
//!   steps: 10              # may be overridden on the command line
//!
//! bodies:
//!   - kind: star           # "star" or "planet"
//!     name: Sun
//!     position: [0, 0, 0]
//!   - kind: planet
//!     name: Earth
//!     position: [3, 0, 0]
//! ```
//!
//! Bodies start at rest; planets gain velocity only by simulation.

use std::io::Read;

use serde::Deserialize;

use crate::configuration::descriptor::BodyDescriptor;
use crate::simulation::body::BodyKind;

/// Run options
#[derive(Deserialize, Debug, Clone, Default)]
pub struct SimulationConfig {
    #[serde(default)]
    pub steps: u64, // number of steps to run
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub kind: BodyKind, // star or planet
    pub name: String, // unique, non-empty
    pub position: [i64; 3], // initial position
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub simulation: SimulationConfig, // run options
    pub bodies: Vec<BodyConfig>, // bodies in any order
}

impl ScenarioConfig {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_reader(reader)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Body descriptors in file order
    pub fn descriptors(&self) -> Vec<BodyDescriptor> {
        self.bodies
            .iter()
            .map(|bc| BodyDescriptor {
                kind: bc.kind,
                name: bc.name.clone(),
                position: bc.position.into(),
            })
            .collect()
    }
}
