/*
 * Arena Benchmark
 *
 * Measures the cost of the pieces of a simulation tick as the boid count
 * grows: neighbor discovery (sequential and parallel), the flocking force
 * calculation, and the full step including movement and wraparound.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::time::Duration;

use boid_arena::{Arena, ArenaConfig, FrameRecorder};

fn populated_arena(boids: usize, parallel: bool) -> Arena {
    let config = ArenaConfig {
        width: 800.0,
        height: 600.0,
        rng_seed: Some(0x5EED),
        parallel_neighbors: parallel,
        ..ArenaConfig::default()
    };
    let mut arena = Arena::from_config(&config).expect("benchmark configuration is valid");
    arena.populate(boids);
    arena
}

// Benchmark neighbor discovery with and without rayon
fn bench_neighborhoods(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighborhoods");

    for num_boids in [100, 500, 1000].iter() {
        let sequential = populated_arena(*num_boids, false);
        group.bench_with_input(BenchmarkId::new("sequential", num_boids), num_boids, |b, _| {
            b.iter(|| black_box(sequential.neighborhoods()));
        });

        let parallel = populated_arena(*num_boids, true);
        group.bench_with_input(BenchmarkId::new("parallel", num_boids), num_boids, |b, _| {
            b.iter(|| black_box(parallel.neighborhoods()));
        });
    }

    group.finish();
}

// Benchmark the flocking force calculation for a single crowded boid
fn bench_force_calculations(c: &mut Criterion) {
    let mut group = c.benchmark_group("force_calculations");

    for num_neighbors in [4, 16, 64].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(num_neighbors), num_neighbors, |b, &n| {
            let mut arena = populated_arena(0, false);
            for i in 0..=n {
                let angle = i as f32 * 0.7;
                arena.add_boid(400.0 + 12.0 * angle.cos(), 300.0 + 12.0 * angle.sin());
            }
            let (first, rest) = arena.boids().split_first().expect("arena has boids");
            let neighbors: Vec<_> = rest.iter().collect();
            let mut boid = first.clone();

            b.iter(|| {
                boid.flock(black_box(&neighbors));
                black_box(boid.acceleration);
            });
        });
    }

    group.finish();
}

// Benchmark the full step, plus rendering into a recorder
fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");

    for num_boids in [100, 500, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(num_boids), num_boids, |b, &n| {
            let mut arena = populated_arena(n, false);
            let mut recorder = FrameRecorder::new(arena.width(), arena.height());

            b.iter(|| {
                arena.step();
                arena.render(&mut recorder);
                black_box(recorder.commands.len());
            });
        });
    }

    group.finish();
}

// Configure the benchmarks
criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_neighborhoods, bench_force_calculations, bench_step
}

criterion_main!(benches);
