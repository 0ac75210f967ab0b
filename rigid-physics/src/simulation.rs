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
//! Simulation facade
//!
//! [`Simulation`] owns the registry, the integrator and the resolver, and is
//! the single entry point a host drives once per frame:
//!
//! ```
//! use glam::DVec3;
//! use rigid_physics::{presets, Simulation};
//!
//! let mut sim = Simulation::new();
//! sim.add_body(presets::anchor_box(DVec3::new(0.0, 1.0, 0.0), DVec3::ONE).unwrap());
//! let ball = sim.add_body(presets::sphere(DVec3::new(3.0, 3.0, 0.0), DVec3::ZERO).unwrap());
//!
//! for _ in 0..60 {
//!     sim.step(1.0 / 60.0);
//! }
//! assert!(sim.body(ball).unwrap().position().y < 3.0);
//! ```
//!
//! Every method takes `&self` or `&mut self`; a host that wants to share a
//! simulation across threads wraps it in its own lock and holds the lock for
//! the whole `step`.

use glam::DVec3;

use crate::body::{Body, BodyHandle};
use crate::collision::{CollisionResolver, ContactCounts};
use crate::config::SimulationConfig;
use crate::error::Result;
use crate::integration::{calculate_total_kinetic_energy, EulerIntegrator, Integrator, SubSteps};
use crate::registry::BodyRegistry;

/// A self-contained rigid-body world
#[derive(Debug, Clone)]
pub struct Simulation<I = EulerIntegrator> {
    config: SimulationConfig,
    gravity: DVec3,
    registry: BodyRegistry,
    integrator: I,
    resolver: CollisionResolver,
    elapsed: f64,
    last_contacts: ContactCounts,
}

impl Simulation<EulerIntegrator> {
    /// Create an empty simulation with the default configuration
    pub fn new() -> Self {
        let config = SimulationConfig::default();
        Self::assemble(config, EulerIntegrator::new(config.linear_damping))
    }

    /// Create an empty simulation with a validated configuration
    pub fn with_config(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Self::with_integrator(config, EulerIntegrator::new(config.linear_damping))
    }
}

impl Default for Simulation<EulerIntegrator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Integrator> Simulation<I> {
    /// Create an empty simulation driven by a custom integrator
    ///
    /// The integrator replaces the damped Euler update; `linear_damping` in
    /// the configuration is then only used by integrators that read it.
    pub fn with_integrator(config: SimulationConfig, integrator: I) -> Result<Self> {
        config.validate()?;
        integrator.validate_timestep(config.fixed_step)?;
        Ok(Self::assemble(config, integrator))
    }

    fn assemble(config: SimulationConfig, integrator: I) -> Self {
        Simulation {
            config,
            gravity: DVec3::new(0.0, config.gravity, 0.0),
            registry: BodyRegistry::new(),
            integrator,
            resolver: CollisionResolver::new(config.ground_friction),
            elapsed: 0.0,
            last_contacts: ContactCounts::default(),
        }
    }

    /// Configuration this simulation was built with
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The integrator in use
    pub fn integrator(&self) -> &I {
        &self.integrator
    }

    /// Vertical gravity component (m/s²)
    pub fn gravity(&self) -> f64 {
        self.gravity.y
    }

    /// Replace gravity with `(0, y, 0)`
    ///
    /// Non-finite values are ignored and the previous gravity is kept.
    pub fn set_gravity(&mut self, y: f64) {
        if !y.is_finite() {
            tracing::warn!(gravity = y, "ignoring non-finite gravity");
            return;
        }
        self.gravity = DVec3::new(0.0, y, 0.0);
    }

    /// Register a body and return its handle
    pub fn add_body(&mut self, body: Body) -> BodyHandle {
        self.registry.add(body)
    }

    /// Remove a body; a no-op returning `None` if it is not registered
    pub fn remove_body(&mut self, handle: BodyHandle) -> Option<Body> {
        self.registry.remove(handle)
    }

    /// Current state of one body
    pub fn body(&self, handle: BodyHandle) -> Option<&Body> {
        self.registry.get(handle)
    }

    /// Owned snapshot of every live body, in insertion order
    ///
    /// The snapshot is detached: later steps, adds and removes do not change it.
    pub fn bodies(&self) -> Vec<(BodyHandle, Body)> {
        self.registry.snapshot()
    }

    /// Read-only access to the registry
    pub fn registry(&self) -> &BodyRegistry {
        &self.registry
    }

    /// Number of live bodies
    pub fn body_count(&self) -> usize {
        self.registry.len()
    }

    /// Remove every body, fixed ones included
    pub fn clear(&mut self) {
        self.registry.clear();
        tracing::debug!("all bodies cleared");
    }

    /// Remove every movable body, keeping fixed scenery in place
    pub fn clear_dynamic(&mut self) {
        self.registry.retain(|_, body| body.is_fixed());
        tracing::debug!(remaining = self.registry.len(), "dynamic bodies cleared");
    }

    /// Total simulated time (seconds), after frame clamping
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Total kinetic energy of all movable bodies
    pub fn kinetic_energy(&self) -> f64 {
        calculate_total_kinetic_energy(self.registry.bodies())
    }

    /// Contacts resolved during the most recent non-empty `step`
    pub fn last_contacts(&self) -> ContactCounts {
        self.last_contacts
    }

    /// Advance the simulation by a frame delta (seconds)
    ///
    /// The delta is clamped to `max_frame_delta` and split into equal
    /// sub-steps no longer than `fixed_step`. Each sub-step integrates every
    /// movable body and then resolves ground and pairwise contacts. Zero,
    /// negative and non-finite deltas do nothing.
    pub fn step(&mut self, delta: f64) {
        if !delta.is_finite() {
            tracing::warn!(delta, "ignoring non-finite frame delta");
            return;
        }
        if delta > self.config.max_frame_delta {
            tracing::debug!(
                delta,
                max = self.config.max_frame_delta,
                "clamping frame delta"
            );
        }

        let plan = SubSteps::plan(delta, self.config.fixed_step, self.config.max_frame_delta);
        if plan.is_empty() {
            return;
        }

        let _span = tracing::trace_span!(
            "step",
            delta,
            sub_steps = plan.count,
            bodies = self.registry.len()
        )
        .entered();

        let gravity = self.gravity;
        let mut contacts = ContactCounts::default();
        for _ in 0..plan.count {
            let bodies = self.registry.bodies_mut();
            self.integrator.integrate(bodies, gravity, plan.dt);
            contacts += self.resolver.resolve(bodies);
        }

        self.elapsed += plan.total();
        self.last_contacts = contacts;
        tracing::trace!(
            ground = contacts.ground,
            sphere_sphere = contacts.sphere_sphere,
            sphere_box = contacts.sphere_box,
            "contacts resolved"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::presets;
    use crate::error::PhysicsError;

    #[test]
    fn test_new_simulation() {
        let sim = Simulation::new();
        assert_eq!(sim.body_count(), 0);
        assert_eq!(sim.gravity(), -9.81);
        assert_eq!(sim.elapsed(), 0.0);
        assert_eq!(sim.integrator().name(), "Damped Euler");
    }

    #[test]
    fn test_with_config_validates() {
        let bad = SimulationConfig::new().with_fixed_step(0.0);
        assert!(matches!(
            Simulation::with_config(bad),
            Err(PhysicsError::InvalidConfig(_))
        ));

        let huge_step = SimulationConfig::new().with_fixed_step(2.0).with_max_frame_delta(4.0);
        assert!(Simulation::with_config(huge_step).is_err());

        let moon = SimulationConfig::new().with_gravity(-1.62);
        assert_eq!(Simulation::with_config(moon).unwrap().gravity(), -1.62);
    }

    #[test]
    fn test_set_gravity() {
        let mut sim = Simulation::new();
        sim.set_gravity(-3.0);
        assert_eq!(sim.gravity(), -3.0);
        sim.set_gravity(f64::NAN);
        assert_eq!(sim.gravity(), -3.0);
    }

    #[test]
    fn test_empty_step_is_noop() {
        let mut sim = Simulation::new();
        sim.step(1.0 / 60.0);
        assert_eq!(sim.body_count(), 0);
        assert!(sim.elapsed() > 0.0);
    }

    #[test]
    fn test_zero_and_negative_delta_do_nothing() {
        let mut sim = Simulation::new();
        let ball = sim.add_body(presets::sphere(DVec3::new(0.0, 5.0, 0.0), DVec3::X).unwrap());
        let before = *sim.body(ball).unwrap();

        sim.step(0.0);
        sim.step(-0.5);
        sim.step(f64::NAN);

        assert_eq!(*sim.body(ball).unwrap(), before);
        assert_eq!(sim.elapsed(), 0.0);
    }

    #[test]
    fn test_elapsed_is_clamped() {
        let mut sim = Simulation::new();
        sim.step(1.0);
        assert!((sim.elapsed() - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_clear_dynamic_keeps_anchor() {
        let mut sim = Simulation::new();
        let anchor = sim.add_body(presets::anchor_box(DVec3::new(0.0, 1.0, 0.0), DVec3::ONE).unwrap());
        sim.add_body(presets::sphere(DVec3::new(0.0, 5.0, 0.0), DVec3::ZERO).unwrap());
        sim.add_body(presets::crate_box(DVec3::new(2.0, 5.0, 0.0), DVec3::ZERO).unwrap());

        sim.clear_dynamic();
        assert_eq!(sim.body_count(), 1);
        assert!(sim.body(anchor).is_some());

        sim.clear();
        assert_eq!(sim.body_count(), 0);
    }

    #[test]
    fn test_last_contacts_reports_ground() {
        let mut sim = Simulation::new();
        sim.add_body(presets::sphere(DVec3::new(0.0, 0.5, 0.0), DVec3::ZERO).unwrap());
        sim.step(1.0 / 60.0);
        assert_eq!(sim.last_contacts().ground, 1);
    }

    #[test]
    fn test_simulation_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<Simulation>();
    }
}
