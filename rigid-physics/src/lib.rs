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
//! # Rigid Physics
//!
//! A lightweight rigid-body core for small interactive scenes: spheres and
//! axis-aligned boxes falling under gravity onto a ground plane and bouncing
//! off each other.
//!
//! ## Features
//!
//! - **Sub-stepped Euler integration**: each frame is clamped and split into
//!   fixed-size sub-steps with per-sub-step linear damping
//! - **Contact resolution**: ground plane, sphere-sphere and sphere-box
//!   contacts with positional correction and restitution impulses
//! - **Fixed bodies**: infinite-mass scenery that nothing can move
//! - **Owned worlds**: every [`Simulation`] is an independent value; there is
//!   no global state
//! - **Parallelization**: optional Rayon integration for large body counts
//!
//! Rotational dynamics, broad-phase acceleration, box-box contacts and
//! continuous collision detection are intentionally absent.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use rigid_physics::{Body, Simulation};
//!
//! let mut sim = Simulation::new();
//! let ball = sim.add_body(
//!     Body::sphere(0.5)
//!         .position(DVec3::new(0.0, 3.0, 0.0))
//!         .restitution(0.5)
//!         .build()
//!         .unwrap(),
//! );
//!
//! sim.step(1.0 / 60.0);
//! let y = sim.body(ball).unwrap().position().y;
//! assert!(y < 3.0);
//! ```

#![warn(missing_docs)]

/// Rigid body data model
pub mod body;

/// Collision detection and response
pub mod collision;

/// Simulation tuning parameters
pub mod config;

/// Error types
pub mod error;

/// Numerical integration methods
pub mod integration;

/// Insertion-ordered body storage
pub mod registry;

/// The per-frame simulation facade
pub mod simulation;

pub use body::{presets, Body, BodyBuilder, BodyHandle, Mass, Shape};
pub use config::SimulationConfig;
pub use error::PhysicsError;
pub use registry::BodyRegistry;
pub use simulation::Simulation;
