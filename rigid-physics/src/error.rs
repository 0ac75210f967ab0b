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
//! Error types
//!
//! Only body construction and configuration can fail. Once a body is in a
//! simulation, every operation is total.

use glam::DVec3;

/// Errors raised while building bodies or validating configuration
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PhysicsError {
    /// Sphere radius was zero, negative, NaN or infinite
    #[error("sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    /// One or more box half extents was zero, negative, NaN or infinite
    #[error("box half extents must be positive and finite, got {0}")]
    InvalidHalfExtents(DVec3),

    /// Mass was zero, negative, NaN or infinite
    #[error("mass must be positive and finite, got {0} (use a fixed body for infinite mass)")]
    InvalidMass(f64),

    /// Restitution fell outside `[0, 1]`
    #[error("restitution must lie in [0, 1], got {0}")]
    InvalidRestitution(f64),

    /// A position or velocity had a NaN or infinite component
    #[error("{field} must be finite, got {value}")]
    NonFiniteVector {
        /// Which vector was rejected
        field: &'static str,
        /// The offending value
        value: DVec3,
    },

    /// A simulation configuration value was out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, PhysicsError>;
