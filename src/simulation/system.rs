//! The astronomical system: a name-sorted set of bodies
//!
//! Bodies live in a single `Vec` kept sorted by name with no duplicates.
//! Lookups and insertions go through [`System::search`], a binary search that
//! returns the index of a present name, or `-(insertion_point) - 1` for an
//! absent one.

use std::fmt;

use tracing::debug;

use crate::error::{SimError, SimResult};
use crate::simulation::body::Body;
use crate::simulation::forces::{Attraction, UnitStepGravity};
use crate::simulation::integrator::unit_step;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct System {
    bodies: Vec<Body>, // sorted by name, names unique
    steps: u64, // steps performed so far
}

impl System {
    /// Empty system
    pub fn new() -> Self {
        Self::default()
    }

    /// Binary search for `name`
    ///
    /// Returns the index of the body called `name` if present, otherwise
    /// `-(insertion_point) - 1`, so the result is non-negative iff found.
    pub fn search(&self, name: &str) -> isize {
        // The answer, if present, is always in [lo, hi)
        let mut lo = 0usize;
        let mut hi = self.bodies.len();

        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            match self.bodies[mid].name().cmp(name) {
                std::cmp::Ordering::Less => lo = mid + 1,
                std::cmp::Ordering::Greater => hi = mid,
                std::cmp::Ordering::Equal => return mid as isize,
            }
        }

        -(lo as isize) - 1
    }

    /// Inserts `body` at its sorted position and returns that index
    ///
    /// Fails with [`SimError::DuplicateBody`] if the name is taken; the
    /// system is left untouched in that case.
    pub fn add_body(&mut self, body: impl Into<Body>) -> SimResult<usize> {
        let body = body.into();
        let found = self.search(body.name());
        if found >= 0 {
            return Err(SimError::DuplicateBody(body.name().to_string()));
        }

        let index = (-found - 1) as usize;
        debug!(name = body.name(), kind = %body.kind(), index, "adding body");
        self.bodies.insert(index, body);
        Ok(index)
    }

    /// Advances the system by one step of unit-step gravity
    pub fn step(&mut self) {
        self.step_with(&UnitStepGravity);
    }

    /// Advances the system by one step under an arbitrary law
    pub fn step_with(&mut self, law: &dyn Attraction) {
        unit_step(self, law);
    }

    /// Sum of every body's energy, wrapping on overflow
    pub fn total_energy(&self) -> i64 {
        self.bodies
            .iter()
            .fold(0i64, |acc, b| acc.wrapping_add(b.energy()))
    }

    pub fn position_of(&self, name: &str) -> Option<usize> {
        usize::try_from(self.search(name)).ok()
    }

    pub fn get(&self, name: &str) -> Option<&Body> {
        self.position_of(name).map(|i| &self.bodies[i])
    }

    /// Bodies in name order
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Number of steps performed so far
    pub fn steps(&self) -> u64 {
        self.steps
    }

    // Slice, not the Vec: no insertion or removal around add_body
    pub(crate) fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub(crate) fn tick(&mut self) {
        self.steps += 1;
    }
}

impl fmt::Display for System {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.bodies {
            writeln!(f, "{b}")?;
        }
        writeln!(f, "Total Energy: {}", self.total_energy())
    }
}
