//! Rigid body data model
//!
//! - [`Body`]: shape, kinematic state, mass and restitution of one object
//! - [`BodyBuilder`]: validating construction with per-shape defaults
//! - [`BodyHandle`]: registry-issued identity
//! - [`presets`]: spheres, crates and the anchor box of the falling-shapes scene

mod components;
mod handle;
pub mod presets;
mod rigid_body;

pub use components::{Mass, Shape, DEFAULT_BOX_RESTITUTION, DEFAULT_SPHERE_RESTITUTION};
pub use handle::BodyHandle;
pub use rigid_body::{Body, BodyBuilder};
