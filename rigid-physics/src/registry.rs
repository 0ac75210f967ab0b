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
//! Body registry
//!
//! The registry owns every body of one simulation, in insertion order. It is
//! the only storage the integrator and the collision resolver see: both walk
//! the bodies as a contiguous slice, and handles stay in a parallel vector.

use crate::body::{Body, BodyHandle};

/// Insertion-ordered collection of rigid bodies
///
/// Removal preserves the relative order of the remaining bodies, which keeps
/// pairwise resolution order stable across removals.
#[derive(Debug, Clone, Default)]
pub struct BodyRegistry {
    next_handle: u64,
    handles: Vec<BodyHandle>,
    bodies: Vec<Body>,
}

impl BodyRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a body at the end and return its handle
    pub fn add(&mut self, body: Body) -> BodyHandle {
        let handle = BodyHandle::new(self.next_handle);
        self.next_handle += 1;
        self.handles.push(handle);
        self.bodies.push(body);
        tracing::debug!(
            %handle,
            shape = body.shape().kind(),
            fixed = body.is_fixed(),
            count = self.bodies.len(),
            "body added"
        );
        handle
    }

    /// Remove a body by handle
    ///
    /// Returns `None` if the handle is unknown or already removed.
    pub fn remove(&mut self, handle: BodyHandle) -> Option<Body> {
        let index = self.index_of(handle)?;
        self.handles.remove(index);
        let body = self.bodies.remove(index);
        tracing::debug!(%handle, count = self.bodies.len(), "body removed");
        Some(body)
    }

    /// Look up a body by handle
    pub fn get(&self, handle: BodyHandle) -> Option<&Body> {
        self.index_of(handle).map(|index| &self.bodies[index])
    }

    /// Check if a handle refers to a live body
    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.index_of(handle).is_some()
    }

    /// Number of live bodies
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether the registry holds no bodies
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Iterate over live bodies in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (BodyHandle, &Body)> {
        self.handles.iter().copied().zip(self.bodies.iter())
    }

    /// Owned copy of the live set, unaffected by later adds or removes
    pub fn snapshot(&self) -> Vec<(BodyHandle, Body)> {
        self.handles.iter().copied().zip(self.bodies.iter().copied()).collect()
    }

    /// Keep only the bodies for which `keep` returns true
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(BodyHandle, &Body) -> bool,
    {
        let mut index = 0;
        while index < self.bodies.len() {
            if keep(self.handles[index], &self.bodies[index]) {
                index += 1;
            } else {
                self.handles.remove(index);
                self.bodies.remove(index);
            }
        }
    }

    /// Remove every body
    ///
    /// Handles keep counting up, so handles issued before the clear never
    /// match bodies added afterwards.
    pub fn clear(&mut self) {
        self.handles.clear();
        self.bodies.clear();
    }

    /// Read-only view of the bodies in insertion order
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub(crate) fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    // Handles are issued in increasing order and removal keeps order, so the
    // handle vector is always sorted.
    fn index_of(&self, handle: BodyHandle) -> Option<usize> {
        self.handles.binary_search(&handle).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    fn sphere_at(x: f64) -> Body {
        Body::sphere(0.5).position(DVec3::new(x, 1.0, 0.0)).build().unwrap()
    }

    #[test]
    fn test_registry_lifecycle() {
        let mut registry = BodyRegistry::new();
        assert!(registry.is_empty());

        let a = registry.add(sphere_at(0.0));
        let b = registry.add(sphere_at(1.0));
        assert_eq!(registry.len(), 2);
        assert!(registry.contains(a));
        assert_ne!(a, b);

        let removed = registry.remove(a).unwrap();
        assert_eq!(removed.position().x, 0.0);
        assert_eq!(registry.len(), 1);
        assert!(!registry.contains(a));
        assert!(registry.contains(b));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut registry = BodyRegistry::new();
        let a = registry.add(sphere_at(0.0));
        assert!(registry.remove(a).is_some());
        assert!(registry.remove(a).is_none());
        assert!(registry.remove(BodyHandle::new(99)).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_removal_preserves_order() {
        let mut registry = BodyRegistry::new();
        let handles: Vec<_> = (0..4).map(|i| registry.add(sphere_at(i as f64))).collect();
        registry.remove(handles[1]);

        let xs: Vec<f64> = registry.iter().map(|(_, b)| b.position().x).collect();
        assert_eq!(xs, vec![0.0, 2.0, 3.0]);
        assert_eq!(registry.get(handles[3]).unwrap().position().x, 3.0);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut registry = BodyRegistry::new();
        let a = registry.add(sphere_at(0.0));
        let snapshot = registry.snapshot();

        registry.add(sphere_at(1.0));
        registry.remove(a);

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].0, a);
    }

    #[test]
    fn test_handles_not_reused_after_clear() {
        let mut registry = BodyRegistry::new();
        let a = registry.add(sphere_at(0.0));
        registry.clear();
        assert!(registry.is_empty());

        let b = registry.add(sphere_at(0.0));
        assert_ne!(a, b);
        assert!(registry.get(a).is_none());
    }

    #[test]
    fn test_retain() {
        let mut registry = BodyRegistry::new();
        registry.add(Body::cuboid(DVec3::ONE).fixed().build().unwrap());
        registry.add(sphere_at(0.0));
        registry.add(sphere_at(1.0));

        registry.retain(|_, body| body.is_fixed());
        assert_eq!(registry.len(), 1);
        assert!(registry.bodies()[0].is_fixed());
    }
}
