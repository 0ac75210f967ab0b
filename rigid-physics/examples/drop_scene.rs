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
//! Falling-shapes scene
//!
//! A fixed anchor box sits on the floor while six spheres and two crates
//! rain down from random positions around it. The scene is driven at 60 Hz
//! and a summary line is printed every half second. It showcases:
//!
//! - The sphere, crate and anchor presets
//! - Deterministic scattering from a seed
//! - Contact counts and kinetic energy as the pile settles
//!
//! # Running
//!
//! ```bash
//! # Run for 5 seconds with the default seed
//! cargo run --example drop_scene
//!
//! # Run longer with a different layout
//! cargo run --example drop_scene -- --duration 12 --seed 7
//!
//! # Show per-step tracing output
//! RUST_LOG=rigid_physics=trace cargo run --example drop_scene
//! ```

use glam::DVec3;
use rigid_physics::{presets, PhysicsError, Simulation};

const FRAME: f64 = 1.0 / 60.0;

/// Simple LCG for reproducible layouts
struct SimpleRng {
    state: u64,
}

/// Maximum value for 53-bit mantissa (2^53) used in float conversion
const F64_MANTISSA_MAX: f64 = 9007199254740992.0;

impl SimpleRng {
    fn new(seed: u64) -> Self {
        SimpleRng { state: seed }
    }

    fn next_f64(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.state >> 11) as f64 / F64_MANTISSA_MAX
    }

    fn range(&mut self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.next_f64()
    }

    fn spawn_point(&mut self) -> (DVec3, DVec3) {
        let position = DVec3::new(self.range(-3.0, 3.0), self.range(6.0, 10.0), self.range(-3.0, 3.0));
        let velocity = DVec3::new(self.range(-1.0, 1.0), self.range(-1.0, 1.0), self.range(-1.0, 1.0));
        (position, velocity)
    }
}

struct SceneArgs {
    duration: f64,
    seed: u64,
}

impl Default for SceneArgs {
    fn default() -> Self {
        SceneArgs {
            duration: 5.0,
            seed: 12345,
        }
    }
}

fn parse_args() -> SceneArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut scene = SceneArgs::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--duration" => {
                if i + 1 < args.len() {
                    match args[i + 1].parse::<f64>() {
                        Ok(value) if value > 0.0 => scene.duration = value,
                        _ => eprintln!("Warning: Invalid duration '{}', using default 5.0 s", args[i + 1]),
                    }
                    i += 2;
                } else {
                    eprintln!("Error: --duration requires an argument");
                    std::process::exit(1);
                }
            }
            "--seed" => {
                if i + 1 < args.len() {
                    match args[i + 1].parse::<u64>() {
                        Ok(value) => scene.seed = value,
                        Err(_) => eprintln!("Warning: Invalid seed '{}', using default 12345", args[i + 1]),
                    }
                    i += 2;
                } else {
                    eprintln!("Error: --seed requires an argument");
                    std::process::exit(1);
                }
            }
            _ => {
                i += 1;
            }
        }
    }

    scene
}

fn main() -> Result<(), PhysicsError> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("==========================================================");
    println!("              Falling Shapes Scene");
    println!("==========================================================");
    println!();

    let scene = parse_args();
    println!("Scene Configuration:");
    println!("  Duration: {:.1} s", scene.duration);
    println!("  Random seed: {}", scene.seed);
    println!();

    let mut sim = Simulation::new();
    let mut rng = SimpleRng::new(scene.seed);
    sim.add_body(presets::anchor_box(DVec3::new(0.0, 1.0, 0.0), DVec3::ONE)?);
    for _ in 0..6 {
        let (position, velocity) = rng.spawn_point();
        sim.add_body(presets::sphere(position, velocity)?);
    }
    for _ in 0..2 {
        let (position, velocity) = rng.spawn_point();
        sim.add_body(presets::crate_box(position, velocity)?);
    }
    println!("Spawned {} bodies\n", sim.body_count());

    println!(
        "{:>6}  {:>10}  {:>8}  {:>8}  {:>8}",
        "t (s)", "KE (J)", "ground", "sph-sph", "sph-box"
    );
    let frames = (scene.duration / FRAME).round() as usize;
    for frame in 1..=frames {
        sim.step(FRAME);
        if frame % 30 == 0 {
            let contacts = sim.last_contacts();
            println!(
                "{:>6.2}  {:>10.4}  {:>8}  {:>8}  {:>8}",
                sim.elapsed(),
                sim.kinetic_energy(),
                contacts.ground,
                contacts.sphere_sphere,
                contacts.sphere_box
            );
        }
    }

    println!("\nFinal positions:");
    for (handle, body) in sim.bodies() {
        let p = body.position();
        println!(
            "  {:<9} {:<6} ({:>6.3}, {:>6.3}, {:>6.3}){}",
            handle.to_string(),
            body.shape().kind(),
            p.x,
            p.y,
            p.z,
            if body.is_fixed() { "  fixed" } else { "" }
        );
    }

    sim.clear_dynamic();
    println!("\nAfter clearing dynamic bodies: {} remain", sim.body_count());
    Ok(())
}
