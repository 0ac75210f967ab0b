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
//! Basic example: a single ball dropped onto the floor
//!
//! Prints the ball's height every tenth of a second so the bounces and the
//! final rest on the ground plane are easy to follow.
//!
//! # Running
//!
//! ```bash
//! cargo run --example basic
//! ```

use glam::DVec3;
use rigid_physics::{Body, PhysicsError, Simulation};

const FRAME: f64 = 1.0 / 60.0;

fn main() -> Result<(), PhysicsError> {
    println!("Rigid Physics - Ball Drop");
    println!("=========================\n");

    let mut sim = Simulation::new();
    let ball = sim.add_body(
        Body::sphere(0.5)
            .position(DVec3::new(0.0, 3.0, 0.0))
            .restitution(0.5)
            .build()?,
    );
    println!("Dropping {} from 3.0 m (gravity {} m/s²)\n", ball, sim.gravity());

    println!("{:>6}  {:>8}  {:>8}", "t (s)", "y (m)", "vy (m/s)");
    for frame in 0..=180 {
        if frame % 6 == 0 {
            if let Some(body) = sim.body(ball) {
                println!(
                    "{:>6.2}  {:>8.4}  {:>8.4}",
                    sim.elapsed(),
                    body.position().y,
                    body.velocity().y
                );
            }
        }
        sim.step(FRAME);
    }

    println!("\nKinetic energy after {:.1} s: {:.6} J", sim.elapsed(), sim.kinetic_energy());
    Ok(())
}
