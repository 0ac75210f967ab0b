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
//! Pairwise overlap tests
//!
//! Each test returns a [`Contact`] whose normal points from the first body
//! to the second, or `None` when the shapes do not overlap. Box-box pairs
//! are not tested.

use glam::DVec3;

use super::contact::Contact;

/// Squared-distance floor for a sphere centre inside or on a box
///
/// The distance is clamped to `sqrt(MIN_SPHERE_BOX_DIST_SQ)` before it is
/// used as a divisor.
pub const MIN_SPHERE_BOX_DIST_SQ: f64 = 1e-6;

/// Overlap between sphere A and sphere B
///
/// Coincident centres have no usable normal and report no contact. Spheres
/// that exactly touch do not overlap.
pub fn sphere_sphere(center_a: DVec3, radius_a: f64, center_b: DVec3, radius_b: f64) -> Option<Contact> {
    let diff = center_b - center_a;
    let dist = diff.length();
    let reach = radius_a + radius_b;
    if dist == 0.0 || dist >= reach {
        return None;
    }
    Some(Contact::new(diff * (1.0 / dist), reach - dist))
}

/// Closest point of an axis-aligned box to `point`
pub fn closest_point_on_box(point: DVec3, center: DVec3, half_extents: DVec3) -> DVec3 {
    point.clamp(center - half_extents, center + half_extents)
}

/// Overlap between an axis-aligned box (A) and a sphere (B)
///
/// The normal points from the closest point on the box towards the sphere
/// centre. A sphere that exactly touches the box counts as a contact with
/// zero penetration. When the centre lies inside the box the offset is zero
/// and so is the normal, leaving only a no-op resolution.
pub fn box_sphere(box_center: DVec3, half_extents: DVec3, sphere_center: DVec3, radius: f64) -> Option<Contact> {
    let closest = closest_point_on_box(sphere_center, box_center, half_extents);
    let diff = sphere_center - closest;
    let dist_sq = diff.length_squared();
    if dist_sq > radius * radius {
        return None;
    }
    let dist = dist_sq.max(MIN_SPHERE_BOX_DIST_SQ).sqrt();
    Some(Contact::new(diff / dist, radius - dist))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_sphere_overlap() {
        let contact = sphere_sphere(DVec3::ZERO, 0.5, DVec3::new(0.8, 0.0, 0.0), 0.5).unwrap();
        assert!((contact.normal - DVec3::X).length() < 1e-12);
        assert!((contact.penetration - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_sphere_sphere_apart_or_touching() {
        assert!(sphere_sphere(DVec3::ZERO, 0.5, DVec3::new(2.0, 0.0, 0.0), 0.5).is_none());
        assert!(sphere_sphere(DVec3::ZERO, 0.5, DVec3::new(1.0, 0.0, 0.0), 0.5).is_none());
    }

    #[test]
    fn test_sphere_sphere_coincident_skipped() {
        let center = DVec3::new(1.0, 2.0, 3.0);
        assert!(sphere_sphere(center, 0.5, center, 0.5).is_none());
    }

    #[test]
    fn test_closest_point_on_box() {
        let center = DVec3::new(0.0, 1.0, 0.0);
        let closest = closest_point_on_box(DVec3::new(3.0, 1.5, -4.0), center, DVec3::ONE);
        assert_eq!(closest, DVec3::new(1.0, 1.5, -1.0));

        let inside = DVec3::new(0.2, 0.8, 0.1);
        assert_eq!(closest_point_on_box(inside, center, DVec3::ONE), inside);
    }

    #[test]
    fn test_box_sphere_face_contact() {
        // Sphere resting slightly into the top face of a unit box.
        let contact = box_sphere(
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::ONE,
            DVec3::new(0.0, 2.4, 0.0),
            0.5,
        )
        .unwrap();
        assert!((contact.normal - DVec3::Y).length() < 1e-12);
        assert!((contact.penetration - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_box_sphere_edge_contact() {
        let contact = box_sphere(DVec3::ZERO, DVec3::ONE, DVec3::new(1.3, 1.4, 0.0), 0.6).unwrap();
        assert!((contact.normal - DVec3::new(0.6, 0.8, 0.0)).length() < 1e-12);
        assert!((contact.penetration - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_box_sphere_miss() {
        assert!(box_sphere(DVec3::ZERO, DVec3::ONE, DVec3::new(0.0, 2.0, 0.0), 0.5).is_none());
    }

    #[test]
    fn test_box_sphere_center_inside_floors_distance() {
        let contact = box_sphere(DVec3::ZERO, DVec3::ONE, DVec3::new(0.1, 0.2, 0.3), 0.5).unwrap();
        assert_eq!(contact.normal, DVec3::ZERO);
        assert!((contact.penetration - (0.5 - 1e-3)).abs() < 1e-12);
        assert!(contact.penetration.is_finite());
    }
}
