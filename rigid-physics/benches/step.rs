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
//! Benchmarks for the simulation step
//!
//! These benchmarks measure:
//! - Full `step` cost (integration plus contacts) for growing body counts
//! - Integration alone, sequential against the parallel path
//! - The O(n²) contact pass on its own

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use glam::DVec3;
use rigid_physics::collision::CollisionResolver;
use rigid_physics::integration::{EulerIntegrator, Integrator};
use rigid_physics::{presets, Body, Simulation};

const FRAME: f64 = 1.0 / 60.0;

// Simple LCG so every run benchmarks the same layout
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        SimpleRng { state: seed }
    }

    fn next_f64(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.state >> 11) as f64 / 9007199254740992.0
    }

    fn range(&mut self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.next_f64()
    }
}

// Spread bodies over a floor area that grows with the count
fn scatter(count: usize, seed: u64) -> Vec<Body> {
    let mut rng = SimpleRng::new(seed);
    let extent = (count as f64).sqrt() * 1.5;
    let mut bodies = vec![presets::anchor_box(DVec3::new(0.0, 1.0, 0.0), DVec3::ONE).unwrap()];
    for i in 1..count {
        let position = DVec3::new(
            rng.range(-extent, extent),
            rng.range(0.5, 10.0),
            rng.range(-extent, extent),
        );
        let velocity = DVec3::new(rng.range(-0.5, 0.5), rng.range(-0.5, 0.5), rng.range(-0.5, 0.5));
        let body = if i % 4 == 0 {
            presets::crate_box(position, velocity)
        } else {
            presets::sphere(position, velocity)
        };
        bodies.push(body.unwrap());
    }
    bodies
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulation_step");

    for body_count in [10, 100, 500].iter() {
        group.throughput(Throughput::Elements(*body_count as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(body_count),
            body_count,
            |b, &body_count| {
                let mut sim = Simulation::new();
                for body in scatter(body_count, 42) {
                    sim.add_body(body);
                }

                b.iter(|| sim.step(black_box(FRAME)));
            },
        );
    }

    group.finish();
}

fn bench_integration(c: &mut Criterion) {
    let mut group = c.benchmark_group("integration");
    let gravity = DVec3::new(0.0, -9.81, 0.0);
    let integrator = EulerIntegrator::default();

    for body_count in [1_000, 10_000].iter() {
        group.throughput(Throughput::Elements(*body_count as u64));

        group.bench_with_input(
            BenchmarkId::new("euler", body_count),
            body_count,
            |b, &body_count| {
                let mut bodies = scatter(body_count, 7);
                b.iter(|| integrator.integrate(black_box(&mut bodies), gravity, FRAME));
            },
        );
    }

    group.finish();
}

fn bench_contacts(c: &mut Criterion) {
    let mut group = c.benchmark_group("contacts");
    group.sample_size(20); // the pair pass is quadratic
    let resolver = CollisionResolver::default();

    for body_count in [100, 500, 1_000].iter() {
        group.throughput(Throughput::Elements(*body_count as u64));

        group.bench_with_input(
            BenchmarkId::new("all_pairs", body_count),
            body_count,
            |b, &body_count| {
                let mut bodies = scatter(body_count, 99);
                b.iter(|| black_box(resolver.resolve(black_box(&mut bodies))));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_step, bench_integration, bench_contacts);
criterion_main!(benches);
