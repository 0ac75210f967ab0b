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
//! Mass and collision shape value types
//!
//! Both types keep their invariants at construction: a [`Mass`] is either
//! finite and positive or immovable, and a [`Shape`] carries exactly the size
//! parameters of its variant.

use glam::DVec3;

/// Restitution used for spheres when none is given
pub const DEFAULT_SPHERE_RESTITUTION: f64 = 0.4;

/// Restitution used for boxes when none is given
pub const DEFAULT_BOX_RESTITUTION: f64 = 0.2;

/// Mass of a body, stored as its inverse
///
/// An inverse of zero marks an immovable (fixed) body. Such a body behaves as
/// if it had infinite mass: gravity, ground contact and collision impulses
/// never move it.
///
/// # Examples
///
/// ```
/// use rigid_physics::Mass;
///
/// let mass = Mass::new(2.0);
/// assert_eq!(mass.inverse(), 0.5);
/// assert!(!mass.is_immovable());
///
/// let anchor = Mass::immovable();
/// assert_eq!(anchor.inverse(), 0.0);
/// assert_eq!(anchor.value(), f64::INFINITY);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mass {
    inverse: f64,
}

impl Mass {
    /// Create a mass from a value in kilograms
    ///
    /// # Panics
    ///
    /// Panics if the mass is not positive and finite. For fallible
    /// construction, use `try_new`.
    pub fn new(value: f64) -> Self {
        assert!(value > 0.0 && value.is_finite(), "Mass must be positive and finite");
        Mass { inverse: 1.0 / value }
    }

    /// Try to create a mass from a value in kilograms
    ///
    /// Returns `None` if the value is zero, negative, NaN or infinite.
    pub fn try_new(value: f64) -> Option<Self> {
        if value > 0.0 && value.is_finite() {
            Some(Mass { inverse: 1.0 / value })
        } else {
            None
        }
    }

    /// Create an immovable mass (treated as infinite mass)
    pub fn immovable() -> Self {
        Mass { inverse: 0.0 }
    }

    /// Get the mass value, `f64::INFINITY` for immovable bodies
    pub fn value(&self) -> f64 {
        if self.is_immovable() {
            f64::INFINITY
        } else {
            1.0 / self.inverse
        }
    }

    /// Get the inverse mass (1/m), zero for immovable bodies
    pub fn inverse(&self) -> f64 {
        self.inverse
    }

    /// Check if this is an immovable body
    pub fn is_immovable(&self) -> bool {
        self.inverse == 0.0
    }
}

impl Default for Mass {
    fn default() -> Self {
        Mass::new(1.0)
    }
}

/// Collision geometry of a body
///
/// Boxes are axis-aligned; rotational state is not simulated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// A sphere centred on the body position
    Sphere {
        /// Sphere radius
        radius: f64,
    },
    /// An axis-aligned box centred on the body position
    Box {
        /// Half widths along X, Y and Z
        half_extents: DVec3,
    },
}

impl Shape {
    /// Restitution applied when the host does not supply one
    pub fn default_restitution(&self) -> f64 {
        match self {
            Shape::Sphere { .. } => DEFAULT_SPHERE_RESTITUTION,
            Shape::Box { .. } => DEFAULT_BOX_RESTITUTION,
        }
    }

    /// Distance from the centre to the lowest point of the shape
    pub fn bottom_extent(&self) -> f64 {
        match self {
            Shape::Sphere { radius } => *radius,
            Shape::Box { half_extents } => half_extents.y,
        }
    }

    /// Check the size parameters are positive and finite
    pub fn is_valid(&self) -> bool {
        match self {
            Shape::Sphere { radius } => *radius > 0.0 && radius.is_finite(),
            Shape::Box { half_extents } => {
                half_extents.is_finite() && half_extents.cmpgt(DVec3::ZERO).all()
            }
        }
    }

    /// Short lowercase name, used in log output
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Sphere { .. } => "sphere",
            Shape::Box { .. } => "box",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mass_creation() {
        let mass = Mass::new(4.0);
        assert_eq!(mass.value(), 4.0);
        assert_eq!(mass.inverse(), 0.25);
    }

    #[test]
    fn test_mass_try_new() {
        assert_eq!(Mass::try_new(10.0).map(|m| m.value()), Some(10.0));
        assert!(Mass::try_new(0.0).is_none());
        assert!(Mass::try_new(-1.0).is_none());
        assert!(Mass::try_new(f64::NAN).is_none());
        assert!(Mass::try_new(f64::INFINITY).is_none());
    }

    #[test]
    #[should_panic(expected = "Mass must be positive and finite")]
    fn test_mass_zero_panics() {
        Mass::new(0.0);
    }

    #[test]
    #[should_panic(expected = "Mass must be positive and finite")]
    fn test_mass_nan_panics() {
        Mass::new(f64::NAN);
    }

    #[test]
    fn test_mass_immovable() {
        let immovable = Mass::immovable();
        assert!(immovable.is_immovable());
        assert_eq!(immovable.inverse(), 0.0);
        assert!(immovable.value().is_infinite());
        assert!(!Mass::default().is_immovable());
    }

    #[test]
    fn test_shape_defaults() {
        let sphere = Shape::Sphere { radius: 0.5 };
        let cube = Shape::Box { half_extents: DVec3::splat(0.5) };
        assert_eq!(sphere.default_restitution(), 0.4);
        assert_eq!(cube.default_restitution(), 0.2);
        assert_eq!(sphere.kind(), "sphere");
        assert_eq!(cube.kind(), "box");
    }

    #[test]
    fn test_shape_bottom_extent() {
        assert_eq!(Shape::Sphere { radius: 0.75 }.bottom_extent(), 0.75);
        let slab = Shape::Box { half_extents: DVec3::new(2.0, 0.25, 1.0) };
        assert_eq!(slab.bottom_extent(), 0.25);
    }

    #[test]
    fn test_shape_validation() {
        assert!(Shape::Sphere { radius: 1.0 }.is_valid());
        assert!(!Shape::Sphere { radius: 0.0 }.is_valid());
        assert!(!Shape::Sphere { radius: f64::NAN }.is_valid());
        assert!(Shape::Box { half_extents: DVec3::ONE }.is_valid());
        assert!(!Shape::Box { half_extents: DVec3::new(1.0, 0.0, 1.0) }.is_valid());
        assert!(!Shape::Box { half_extents: DVec3::new(1.0, f64::INFINITY, 1.0) }.is_valid());
    }
}
