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
//! Contact resolution shared by every body-body pair
//!
//! A contact is a unit normal pointing from body A towards body B plus the
//! penetration depth along it. Resolution first pushes the bodies apart in
//! proportion to their inverse masses, then applies an impulse along the
//! normal if they are still approaching.

use glam::DVec3;

use crate::body::Body;

/// Penetrating contact between two bodies
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit normal pointing from body A to body B
    pub normal: DVec3,
    /// Overlap depth along the normal
    pub penetration: f64,
}

impl Contact {
    /// Create a contact from a normal and a penetration depth
    pub fn new(normal: DVec3, penetration: f64) -> Self {
        Contact { normal, penetration }
    }
}

/// Separate two bodies and apply the collision impulse
///
/// Body A moves against the normal and body B along it, each by its share of
/// `inverse_mass / total_inverse_mass` of the penetration. If the bodies are
/// already separating along the normal no impulse is applied; otherwise the
/// impulse magnitude is `-(1 + e) * v_n / total_inverse_mass` with
/// `e = min(restitution_a, restitution_b)`. Fixed bodies are never moved.
///
/// Returns `false` without touching either body when both are fixed.
pub fn resolve_contact(a: &mut Body, b: &mut Body, contact: &Contact) -> bool {
    let inv_a = a.inverse_mass();
    let inv_b = b.inverse_mass();
    let total = inv_a + inv_b;
    if total == 0.0 {
        return false;
    }

    let n = contact.normal;
    let penetration = contact.penetration;
    if inv_a != 0.0 {
        a.position += n * (-penetration * (inv_a / total));
    }
    if inv_b != 0.0 {
        b.position += n * (penetration * (inv_b / total));
    }

    let vel_along_normal = (b.velocity - a.velocity).dot(n);
    if vel_along_normal > 0.0 {
        return true;
    }

    let e = a.restitution.min(b.restitution);
    let j = -(1.0 + e) * vel_along_normal / total;
    let impulse = n * j;
    if inv_a != 0.0 {
        a.velocity += impulse * -inv_a;
    }
    if inv_b != 0.0 {
        b.velocity += impulse * inv_b;
    }
    true
}
