// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Numerical integration for the rigid-body core
//!
//! Each frame is split into equal sub-steps no longer than the fixed step,
//! and an [`Integrator`] advances every movable body through one sub-step at
//! a time. Collision resolution runs between sub-steps, so shorter sub-steps
//! mean less tunnelling and smaller penetrations to correct.
//!
//! # Integrators
//!
//! - **Damped explicit Euler** ([`EulerIntegrator`]): gravity, then a
//!   multiplicative velocity damping, then position from the new velocity.
//!
//! # Timestep Guidelines
//!
//! - Frames are clamped to `max_frame_delta` before splitting, so a hitch
//!   never runs more than `ceil(max_frame_delta / fixed_step)` sub-steps
//! - Damping is applied per sub-step, so total damping per frame depends on
//!   the sub-step count rather than elapsed time

use glam::DVec3;

use crate::body::Body;
use crate::error::{PhysicsError, Result};

mod euler;

pub use euler::EulerIntegrator;

/// How one frame delta is split into sub-steps
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubSteps {
    /// Number of sub-steps to run
    pub count: usize,
    /// Length of each sub-step (seconds)
    pub dt: f64,
}

impl SubSteps {
    /// Plan the sub-steps for a frame delta
    ///
    /// Zero, negative and non-finite deltas plan no work. Positive deltas are
    /// clamped to `max_delta` and split into `max(1, ceil(delta / fixed_step))`
    /// equal sub-steps.
    pub fn plan(delta: f64, fixed_step: f64, max_delta: f64) -> Self {
        if !(delta > 0.0 && delta.is_finite()) {
            return SubSteps { count: 0, dt: 0.0 };
        }
        let delta = delta.min(max_delta);
        let count = ((delta / fixed_step).ceil() as usize).max(1);
        SubSteps {
            count,
            dt: delta / count as f64,
        }
    }

    /// Whether the plan runs no sub-steps
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Total simulated time covered by the plan
    pub fn total(&self) -> f64 {
        self.dt * self.count as f64
    }
}

/// Calculate total kinetic energy of a set of bodies
///
/// KE = Σ 0.5 * m * v², fixed bodies contribute nothing.
pub fn calculate_total_kinetic_energy<'a, I>(bodies: I) -> f64
where
    I: IntoIterator<Item = &'a Body>,
{
    bodies.into_iter().map(Body::kinetic_energy).sum()
}

/// Trait for the per-sub-step motion update
///
/// An integrator moves every non-fixed body through one sub-step under a
/// uniform gravity. It must never touch bodies whose inverse mass is zero.
pub trait Integrator: Send + Sync {
    /// Get the name of this integrator
    fn name(&self) -> &str;

    /// Validate a sub-step length for stability
    ///
    /// Extremely small sub-steps lose precision and large ones let bodies
    /// tunnel through each other between resolver passes.
    fn validate_timestep(&self, dt: f64) -> Result<()> {
        if dt <= 0.0 || !dt.is_finite() {
            return Err(PhysicsError::InvalidConfig(format!(
                "Invalid timestep: {}. Must be positive and finite.",
                dt
            )));
        }

        if dt < 1e-9 {
            return Err(PhysicsError::InvalidConfig(format!(
                "Timestep {} is extremely small and may cause precision loss with f64",
                dt
            )));
        }

        if dt > 1.0 {
            return Err(PhysicsError::InvalidConfig(format!(
                "Timestep {} is large and will let bodies pass through each other",
                dt
            )));
        }

        Ok(())
    }

    /// Advance every movable body by `dt` under `gravity`
    ///
    /// Returns the number of bodies moved.
    fn integrate(&self, bodies: &mut [Body], gravity: DVec3, dt: f64) -> usize;
}
