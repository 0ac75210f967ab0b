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
//! Collision detection and response
//!
//! After every integration sub-step the resolver runs two passes over the
//! registry, in order:
//!
//! 1. **Ground**: every movable body is lifted out of the plane `y = 0`
//!    and bounced.
//! 2. **Pairs**: every unordered pair `(i, j)` with `i < j` in insertion
//!    order is tested (sphere-sphere, sphere-box) and resolved immediately.
//!
//! There is no broad phase; the pair pass is O(n²). Because a body may take
//! part in several pairs within one pass and each pair sees the effects of
//! the previous ones, results depend on insertion order. That is accepted:
//! the same order always gives the same result.

mod contact;
mod ground;
mod narrow_phase;

pub use contact::{resolve_contact, Contact};
pub use ground::{resolve_ground_contact, GROUND_HEIGHT};
pub use narrow_phase::{box_sphere, closest_point_on_box, sphere_sphere, MIN_SPHERE_BOX_DIST_SQ};

use std::ops::AddAssign;

use crate::body::{Body, Shape};
use crate::config::DEFAULT_GROUND_FRICTION;

/// Number of contacts resolved, per kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactCounts {
    /// Body-ground contacts
    pub ground: usize,
    /// Sphere-sphere contacts
    pub sphere_sphere: usize,
    /// Sphere-box contacts
    pub sphere_box: usize,
}

impl ContactCounts {
    /// Sum over every kind
    pub fn total(&self) -> usize {
        self.ground + self.sphere_sphere + self.sphere_box
    }
}

impl AddAssign for ContactCounts {
    fn add_assign(&mut self, other: Self) {
        self.ground += other.ground;
        self.sphere_sphere += other.sphere_sphere;
        self.sphere_box += other.sphere_box;
    }
}

/// Runs the ground and pairwise passes over a slice of bodies
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResolver {
    ground_friction: f64,
}

impl CollisionResolver {
    /// Create a resolver with the given ground friction factor
    ///
    /// # Panics
    ///
    /// Panics if friction is not in `[0, 1]`
    pub fn new(ground_friction: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&ground_friction),
            "Ground friction must lie in [0, 1]"
        );
        CollisionResolver { ground_friction }
    }

    /// Tangential velocity multiplier for ground contacts
    pub fn ground_friction(&self) -> f64 {
        self.ground_friction
    }

    /// Resolve all contacts for one sub-step
    pub fn resolve(&self, bodies: &mut [Body]) -> ContactCounts {
        let mut counts = ContactCounts::default();

        for body in bodies.iter_mut() {
            if resolve_ground_contact(body, self.ground_friction) {
                counts.ground += 1;
            }
        }

        for i in 0..bodies.len() {
            let (head, tail) = bodies.split_at_mut(i + 1);
            let a = &mut head[i];
            for b in tail.iter_mut() {
                resolve_pair(a, b, &mut counts);
            }
        }

        counts
    }
}

impl Default for CollisionResolver {
    fn default() -> Self {
        CollisionResolver::new(DEFAULT_GROUND_FRICTION)
    }
}

fn resolve_pair(a: &mut Body, b: &mut Body, counts: &mut ContactCounts) {
    match (a.shape, b.shape) {
        (Shape::Sphere { radius: radius_a }, Shape::Sphere { radius: radius_b }) => {
            if let Some(contact) = sphere_sphere(a.position, radius_a, b.position, radius_b) {
                if resolve_contact(a, b, &contact) {
                    counts.sphere_sphere += 1;
                }
            }
        }
        (Shape::Sphere { radius }, Shape::Box { half_extents }) => {
            if let Some(contact) = box_sphere(b.position, half_extents, a.position, radius) {
                if resolve_contact(b, a, &contact) {
                    counts.sphere_box += 1;
                }
            }
        }
        (Shape::Box { half_extents }, Shape::Sphere { radius }) => {
            if let Some(contact) = box_sphere(a.position, half_extents, b.position, radius) {
                if resolve_contact(a, b, &contact) {
                    counts.sphere_box += 1;
                }
            }
        }
        // Box-box contacts are not simulated.
        (Shape::Box { .. }, Shape::Box { .. }) => {}
    }
}
