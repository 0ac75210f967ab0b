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
//! Rigid body record and its builder
//!
//! Hosts describe a body once through [`BodyBuilder`]; after that the
//! simulation owns position and velocity, and the host only reads them.

use glam::DVec3;

use super::components::{Mass, Shape};
use crate::error::{PhysicsError, Result};

/// A simulated sphere or axis-aligned box
///
/// Fields are read through accessors. Only the simulation mutates position
/// and velocity once the body is registered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub(crate) shape: Shape,
    pub(crate) position: DVec3,
    pub(crate) velocity: DVec3,
    pub(crate) mass: Mass,
    pub(crate) restitution: f64,
}

impl Body {
    /// Start building a sphere of the given radius
    pub fn sphere(radius: f64) -> BodyBuilder {
        BodyBuilder::new(Shape::Sphere { radius })
    }

    /// Start building an axis-aligned box with the given half extents
    pub fn cuboid(half_extents: DVec3) -> BodyBuilder {
        BodyBuilder::new(Shape::Box { half_extents })
    }

    /// Collision shape
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// World-space centre
    pub fn position(&self) -> DVec3 {
        self.position
    }

    /// World-space linear velocity
    pub fn velocity(&self) -> DVec3 {
        self.velocity
    }

    /// Mass properties
    pub fn mass(&self) -> Mass {
        self.mass
    }

    /// Inverse mass, zero for fixed bodies
    pub fn inverse_mass(&self) -> f64 {
        self.mass.inverse()
    }

    /// Bounciness coefficient in `[0, 1]`
    pub fn restitution(&self) -> f64 {
        self.restitution
    }

    /// Whether this body is immovable
    pub fn is_fixed(&self) -> bool {
        self.mass.is_immovable()
    }

    /// Kinetic energy, 0.5 * m * v², zero for fixed bodies
    pub fn kinetic_energy(&self) -> f64 {
        if self.is_fixed() {
            return 0.0;
        }
        0.5 * self.mass.value() * self.velocity.length_squared()
    }

    /// Check position and velocity are finite
    pub fn is_valid(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }
}

/// Validating builder for [`Body`]
///
/// Defaults: origin position, zero velocity, 1 kg, per-shape restitution.
///
/// # Examples
///
/// ```
/// use glam::DVec3;
/// use rigid_physics::Body;
///
/// let ball = Body::sphere(0.5)
///     .position(DVec3::new(0.0, 3.0, 0.0))
///     .restitution(0.5)
///     .build()
///     .unwrap();
/// assert_eq!(ball.position().y, 3.0);
///
/// let anchor = Body::cuboid(DVec3::ONE).fixed().build().unwrap();
/// assert!(anchor.is_fixed());
/// assert_eq!(anchor.restitution(), 0.2);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BodyBuilder {
    shape: Shape,
    position: DVec3,
    velocity: DVec3,
    mass: Option<f64>,
    fixed: bool,
    restitution: Option<f64>,
}

impl BodyBuilder {
    /// Start a builder for the given shape
    pub fn new(shape: Shape) -> Self {
        BodyBuilder {
            shape,
            position: DVec3::ZERO,
            velocity: DVec3::ZERO,
            mass: None,
            fixed: false,
            restitution: None,
        }
    }

    /// Initial world-space centre
    pub fn position(mut self, position: DVec3) -> Self {
        self.position = position;
        self
    }

    /// Initial linear velocity
    pub fn velocity(mut self, velocity: DVec3) -> Self {
        self.velocity = velocity;
        self
    }

    /// Mass in kilograms
    pub fn mass(mut self, mass: f64) -> Self {
        self.mass = Some(mass);
        self.fixed = false;
        self
    }

    /// Make the body immovable
    pub fn fixed(mut self) -> Self {
        self.fixed = true;
        self.mass = None;
        self
    }

    /// Override the per-shape default restitution
    pub fn restitution(mut self, restitution: f64) -> Self {
        self.restitution = Some(restitution);
        self
    }

    /// Validate the parameters and produce the body
    pub fn build(self) -> Result<Body> {
        if !self.shape.is_valid() {
            return Err(match self.shape {
                Shape::Sphere { radius } => PhysicsError::InvalidRadius(radius),
                Shape::Box { half_extents } => PhysicsError::InvalidHalfExtents(half_extents),
            });
        }
        if !self.position.is_finite() {
            return Err(PhysicsError::NonFiniteVector {
                field: "position",
                value: self.position,
            });
        }
        if !self.velocity.is_finite() {
            return Err(PhysicsError::NonFiniteVector {
                field: "velocity",
                value: self.velocity,
            });
        }

        let mass = if self.fixed {
            Mass::immovable()
        } else {
            let value = self.mass.unwrap_or(1.0);
            Mass::try_new(value).ok_or(PhysicsError::InvalidMass(value))?
        };

        let restitution = self
            .restitution
            .unwrap_or_else(|| self.shape.default_restitution());
        if !(0.0..=1.0).contains(&restitution) {
            return Err(PhysicsError::InvalidRestitution(restitution));
        }

        // A fixed body never moves, so any velocity it was given is dropped.
        let velocity = if self.fixed { DVec3::ZERO } else { self.velocity };

        Ok(Body {
            shape: self.shape,
            position: self.position,
            velocity,
            mass,
            restitution,
        })
    }
}
