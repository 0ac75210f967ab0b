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
//! Ground plane contact
//!
//! The ground is the implicit plane `y = 0`. Only the lowest point of each
//! shape is tested; boxes are axis-aligned so their bottom face is flat.

use crate::body::Body;

/// Height of the ground plane
pub const GROUND_HEIGHT: f64 = 0.0;

/// Push a body out of the ground and bounce it
///
/// When the lowest point of the body is below the plane, the body is lifted
/// to rest exactly on it, a downward vertical velocity is reflected and
/// scaled by the body's restitution, and horizontal velocity is scaled by
/// `friction`. Fixed bodies are left alone.
///
/// Returns whether a contact was resolved.
pub fn resolve_ground_contact(body: &mut Body, friction: f64) -> bool {
    if body.is_fixed() {
        return false;
    }

    let extent = body.shape.bottom_extent();
    if body.position.y - extent >= GROUND_HEIGHT {
        return false;
    }

    body.position.y = GROUND_HEIGHT + extent;
    if body.velocity.y < 0.0 {
        body.velocity.y = -body.velocity.y * body.restitution;
    }
    body.velocity.x *= friction;
    body.velocity.z *= friction;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    #[test]
    fn test_sphere_bounce() {
        let mut ball = Body::sphere(0.5)
            .position(DVec3::new(0.0, 0.4, 0.0))
            .velocity(DVec3::new(1.0, -2.0, -1.0))
            .build()
            .unwrap();
        assert!(resolve_ground_contact(&mut ball, 0.9));
        assert_eq!(ball.position().y, 0.5);
        assert!((ball.velocity().y - 0.8).abs() < 1e-12);
        assert_eq!(ball.velocity().x, 0.9);
        assert_eq!(ball.velocity().z, -0.9);
    }

    #[test]
    fn test_box_uses_half_height() {
        let mut crate_box = Body::cuboid(DVec3::new(2.0, 0.25, 2.0))
            .position(DVec3::new(0.0, 0.1, 0.0))
            .velocity(DVec3::new(0.0, -1.0, 0.0))
            .build()
            .unwrap();
        assert!(resolve_ground_contact(&mut crate_box, 0.9));
        assert_eq!(crate_box.position().y, 0.25);
        assert!((crate_box.velocity().y - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_rising_body_keeps_velocity() {
        let mut ball = Body::sphere(1.0)
            .position(DVec3::new(0.0, 0.5, 0.0))
            .velocity(DVec3::new(0.0, 3.0, 0.0))
            .build()
            .unwrap();
        assert!(resolve_ground_contact(&mut ball, 0.9));
        assert_eq!(ball.position().y, 1.0);
        assert_eq!(ball.velocity().y, 3.0);
    }

    #[test]
    fn test_clear_of_ground_untouched() {
        let mut ball = Body::sphere(0.5)
            .position(DVec3::new(0.0, 0.5, 0.0))
            .velocity(DVec3::new(1.0, -1.0, 0.0))
            .build()
            .unwrap();
        let before = ball;
        assert!(!resolve_ground_contact(&mut ball, 0.9));
        assert_eq!(ball, before);
    }

    #[test]
    fn test_fixed_body_skipped() {
        let mut sunk = Body::cuboid(DVec3::ONE)
            .position(DVec3::new(0.0, -3.0, 0.0))
            .fixed()
            .build()
            .unwrap();
        let before = sunk;
        assert!(!resolve_ground_contact(&mut sunk, 0.9));
        assert_eq!(sunk, before);
    }
}
