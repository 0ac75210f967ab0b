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
//! Damped explicit Euler integrator
//!
//! # Algorithm
//!
//! For every body with non-zero inverse mass, one sub-step of length `dt`:
//!
//! ```text
//! v ← (v + g*dt) * damping
//! x ← x + v*dt
//! ```
//!
//! Position uses the already-updated velocity. The damping factor is applied
//! once per sub-step and is not scaled by `dt`; it is a cheap stand-in for
//! air drag rather than a physical drag model.
//!
//! # Properties
//!
//! - **First-order accurate**: local error O(dt²)
//! - **Dissipative**: with damping < 1, speed decays geometrically
//! - **Order-independent**: each body is updated from its own state only,
//!   so the parallel and sequential paths give identical results

use glam::DVec3;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::Integrator;
use crate::body::Body;
use crate::config::DEFAULT_LINEAR_DAMPING;

/// Body count above which the parallel path is used
#[cfg(feature = "parallel")]
const PARALLEL_THRESHOLD: usize = 2048;

/// Explicit Euler integrator with per-sub-step linear damping
///
/// # Example
///
/// ```
/// use rigid_physics::integration::{EulerIntegrator, Integrator};
///
/// let integrator = EulerIntegrator::new(0.999);
/// assert_eq!(integrator.damping(), 0.999);
/// assert_eq!(integrator.name(), "Damped Euler");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EulerIntegrator {
    damping: f64,
}

impl EulerIntegrator {
    /// Create an integrator with the given per-sub-step damping factor
    ///
    /// # Panics
    ///
    /// Panics if damping is not in `(0, 1]`
    pub fn new(damping: f64) -> Self {
        assert!(
            damping > 0.0 && damping <= 1.0,
            "Damping must lie in (0, 1]"
        );
        EulerIntegrator { damping }
    }

    /// Per-sub-step velocity multiplier
    pub fn damping(&self) -> f64 {
        self.damping
    }

    #[inline]
    fn advance(&self, body: &mut Body, gravity: DVec3, dt: f64) {
        body.velocity += gravity * dt;
        body.velocity *= self.damping;
        body.position += body.velocity * dt;
    }

    fn integrate_sequential(&self, bodies: &mut [Body], gravity: DVec3, dt: f64) -> usize {
        let mut moved = 0;
        for body in bodies.iter_mut() {
            if body.is_fixed() {
                continue;
            }
            self.advance(body, gravity, dt);
            moved += 1;
        }
        moved
    }

    #[cfg(feature = "parallel")]
    fn integrate_parallel(&self, bodies: &mut [Body], gravity: DVec3, dt: f64) -> usize {
        bodies
            .par_iter_mut()
            .filter(|body| !body.is_fixed())
            .map(|body| {
                self.advance(body, gravity, dt);
                1
            })
            .sum()
    }
}

impl Default for EulerIntegrator {
    fn default() -> Self {
        EulerIntegrator::new(DEFAULT_LINEAR_DAMPING)
    }
}

impl Integrator for EulerIntegrator {
    fn name(&self) -> &str {
        "Damped Euler"
    }

    fn integrate(&self, bodies: &mut [Body], gravity: DVec3, dt: f64) -> usize {
        #[cfg(feature = "parallel")]
        {
            if bodies.len() >= PARALLEL_THRESHOLD {
                return self.integrate_parallel(bodies, gravity, dt);
            }
        }

        self.integrate_sequential(bodies, gravity, dt)
    }
}
