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
//! Ready-made bodies for the falling-shapes scene
//!
//! The scene spawns bouncy half-metre spheres, heavier half-metre crates and one
//! fixed anchor box standing on the floor. Hosts are free to ignore these.

use glam::DVec3;

use super::rigid_body::Body;
use crate::error::Result;

/// Radius of a spawned sphere
pub const SPHERE_RADIUS: f64 = 0.5;
/// Mass of a spawned sphere
pub const SPHERE_MASS: f64 = 1.0;
/// Restitution of a spawned sphere
pub const SPHERE_RESTITUTION: f64 = 0.5;

/// Half extent of a spawned crate along every axis
pub const CRATE_HALF_EXTENT: f64 = 0.5;
/// Mass of a spawned crate
pub const CRATE_MASS: f64 = 2.0;
/// Restitution of a spawned crate
pub const CRATE_RESTITUTION: f64 = 0.3;

/// A dynamic sphere as spawned by the scene
pub fn sphere(position: DVec3, velocity: DVec3) -> Result<Body> {
    Body::sphere(SPHERE_RADIUS)
        .position(position)
        .velocity(velocity)
        .mass(SPHERE_MASS)
        .restitution(SPHERE_RESTITUTION)
        .build()
}

/// A dynamic crate as spawned by the scene
pub fn crate_box(position: DVec3, velocity: DVec3) -> Result<Body> {
    Body::cuboid(DVec3::splat(CRATE_HALF_EXTENT))
        .position(position)
        .velocity(velocity)
        .mass(CRATE_MASS)
        .restitution(CRATE_RESTITUTION)
        .build()
}

/// A fixed box, typically resting on the ground as an obstacle
pub fn anchor_box(position: DVec3, half_extents: DVec3) -> Result<Body> {
    Body::cuboid(half_extents).position(position).fixed().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::Shape;

    #[test]
    fn test_sphere_preset() {
        let body = sphere(DVec3::new(1.0, 6.0, -2.0), DVec3::X).unwrap();
        assert_eq!(body.shape(), &Shape::Sphere { radius: 0.5 });
        assert_eq!(body.mass().value(), 1.0);
        assert_eq!(body.restitution(), 0.5);
        assert_eq!(body.velocity(), DVec3::X);
    }

    #[test]
    fn test_crate_preset() {
        let body = crate_box(DVec3::new(0.0, 8.0, 0.0), DVec3::ZERO).unwrap();
        assert_eq!(body.inverse_mass(), 0.5);
        assert_eq!(body.restitution(), 0.3);
    }

    #[test]
    fn test_anchor_preset() {
        let body = anchor_box(DVec3::new(0.0, 1.0, 0.0), DVec3::ONE).unwrap();
        assert!(body.is_fixed());
        assert_eq!(body.restitution(), 0.2);
    }
}
