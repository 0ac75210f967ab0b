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
//! Simulation tuning parameters
//!
//! The defaults give a lively tabletop-scale scene at 60 Hz. Every
//! knob can be overridden with the builder-style `with_*` methods, and
//! [`SimulationConfig::validate`] rejects values that would break the
//! integrator or the contact model.

use crate::error::{PhysicsError, Result};

/// Standard gravity along -Y (m/s²)
pub const DEFAULT_GRAVITY: f64 = -9.81;

/// Fixed sub-step length (seconds)
pub const DEFAULT_FIXED_STEP: f64 = 1.0 / 60.0;

/// Largest frame delta a single `step` will simulate (seconds)
pub const DEFAULT_MAX_FRAME_DELTA: f64 = 0.05;

/// Velocity multiplier applied once per sub-step
pub const DEFAULT_LINEAR_DAMPING: f64 = 0.999;

/// Tangential velocity multiplier applied on ground contact
pub const DEFAULT_GROUND_FRICTION: f64 = 0.9;

/// Configuration for a [`Simulation`](crate::Simulation)
///
/// # Examples
///
/// ```
/// use rigid_physics::SimulationConfig;
///
/// let config = SimulationConfig::default()
///     .with_gravity(-1.62)
///     .with_fixed_step(1.0 / 120.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    /// Initial vertical gravity (m/s²)
    pub gravity: f64,
    /// Sub-step length used to partition each frame (seconds)
    pub fixed_step: f64,
    /// Frame deltas above this are clamped (seconds)
    pub max_frame_delta: f64,
    /// Per-sub-step velocity multiplier, in `(0, 1]`
    pub linear_damping: f64,
    /// Per-contact multiplier on X/Z velocity for ground contacts, in `[0, 1]`
    pub ground_friction: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            gravity: DEFAULT_GRAVITY,
            fixed_step: DEFAULT_FIXED_STEP,
            max_frame_delta: DEFAULT_MAX_FRAME_DELTA,
            linear_damping: DEFAULT_LINEAR_DAMPING,
            ground_friction: DEFAULT_GROUND_FRICTION,
        }
    }
}

impl SimulationConfig {
    /// Create a configuration with the default tuning
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial vertical gravity
    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the fixed sub-step length
    pub fn with_fixed_step(mut self, fixed_step: f64) -> Self {
        self.fixed_step = fixed_step;
        self
    }

    /// Set the frame delta clamp
    pub fn with_max_frame_delta(mut self, max_frame_delta: f64) -> Self {
        self.max_frame_delta = max_frame_delta;
        self
    }

    /// Set the per-sub-step linear damping factor
    pub fn with_linear_damping(mut self, linear_damping: f64) -> Self {
        self.linear_damping = linear_damping;
        self
    }

    /// Set the ground friction factor
    pub fn with_ground_friction(mut self, ground_friction: f64) -> Self {
        self.ground_friction = ground_friction;
        self
    }

    /// Check every field against its allowed range
    pub fn validate(&self) -> Result<()> {
        if !self.gravity.is_finite() {
            return Err(PhysicsError::InvalidConfig(format!(
                "gravity must be finite, got {}",
                self.gravity
            )));
        }
        if !(self.fixed_step > 0.0 && self.fixed_step.is_finite()) {
            return Err(PhysicsError::InvalidConfig(format!(
                "fixed_step must be positive and finite, got {}",
                self.fixed_step
            )));
        }
        if !(self.max_frame_delta > 0.0 && self.max_frame_delta.is_finite()) {
            return Err(PhysicsError::InvalidConfig(format!(
                "max_frame_delta must be positive and finite, got {}",
                self.max_frame_delta
            )));
        }
        if !(self.linear_damping > 0.0 && self.linear_damping <= 1.0) {
            return Err(PhysicsError::InvalidConfig(format!(
                "linear_damping must lie in (0, 1], got {}",
                self.linear_damping
            )));
        }
        if !(0.0..=1.0).contains(&self.ground_friction) {
            return Err(PhysicsError::InvalidConfig(format!(
                "ground_friction must lie in [0, 1], got {}",
                self.ground_friction
            )));
        }
        Ok(())
    }

    /// Upper bound on sub-steps a single `step` call can run
    pub fn max_sub_steps(&self) -> usize {
        (self.max_frame_delta / self.fixed_step).ceil().max(1.0) as usize
    }
}
