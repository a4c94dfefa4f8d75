/*
 * Arena Module
 *
 * The arena owns every boid and advances the simulation one tick at a time.
 * A tick runs in four phases that never interleave:
 * 1. Neighbor discovery: every other boid within neighbor_distance
 * 2. Steering: flock with neighbors, otherwise cruise to the wander target
 * 3. Movement: integrate with a shared per-tick speed cap
 * 4. Toroidal wrap: boids leaving one edge come back on the opposite edge
 *
 * Steering reads a snapshot taken before phase 2, and nobody moves until
 * everybody has steered, so the outcome does not depend on iteration order.
 */

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, trace, warn};

use crate::boid::Boid;
use crate::clock::{ClockState, StepClock};
use crate::config::{self, ArenaConfig, CROWDED_CELLS, DEFAULT_FRAMERATE, NEIGHBOR_CELLS};
use crate::error::ArenaError;
use crate::renderer;
use crate::surface::Surface;
use crate::vector::Vector2D;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArenaState {
    Idle,
    Running,
}

/// Snapshot of what the boids are doing, for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArenaStats {
    pub boids: usize,
    pub flocking: usize,
    pub cruising: usize,
    pub ticks: u64,
}

pub struct Arena {
    width: f32,
    height: f32,
    cell_size: f32,
    max_speed: f32,
    neighbor_distance: f32,
    crowded_distance: f32,
    tick_seconds: f32,
    boids: Vec<Boid>,
    wander_target: Option<Vector2D>,
    parallel_neighbors: bool,
    clock: StepClock,
    rng: StdRng,
    ticks: u64,
    flocking: usize,
}

impl Arena {
    pub fn new(width: f32, height: f32, cell_size: f32, max_speed: f32) -> Result<Self, ArenaError> {
        Self::with_rng(width, height, cell_size, max_speed, StdRng::from_entropy())
    }

    // Size the arena to match `surface`.
    pub fn for_surface(
        surface: &impl Surface,
        cell_size: f32,
        max_speed: f32,
    ) -> Result<Self, ArenaError> {
        let (width, height) = surface.size();
        Self::new(width, height, cell_size, max_speed)
    }

    pub fn from_config(config: &ArenaConfig) -> Result<Self, ArenaError> {
        config.validate()?;

        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut arena = Self::with_rng(
            config.width,
            config.height,
            config.cell_size,
            config.max_speed,
            rng,
        )?;
        arena.tick_seconds = config.tick_seconds();
        arena.parallel_neighbors = config.parallel_neighbors;
        Ok(arena)
    }

    fn with_rng(
        width: f32,
        height: f32,
        cell_size: f32,
        max_speed: f32,
        rng: StdRng,
    ) -> Result<Self, ArenaError> {
        config::validate_scale(width, height, cell_size, max_speed)?;

        Ok(Self {
            width,
            height,
            cell_size,
            max_speed,
            neighbor_distance: NEIGHBOR_CELLS * cell_size,
            crowded_distance: CROWDED_CELLS * cell_size,
            tick_seconds: 1.0 / DEFAULT_FRAMERATE,
            boids: Vec::new(),
            wander_target: None,
            parallel_neighbors: false,
            clock: StepClock::new(),
            rng,
            ticks: 0,
            flocking: 0,
        })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    pub fn neighbor_distance(&self) -> f32 {
        self.neighbor_distance
    }

    pub fn crowded_distance(&self) -> f32 {
        self.crowded_distance
    }

    pub fn tick_seconds(&self) -> f32 {
        self.tick_seconds
    }

    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub fn boids_mut(&mut self) -> &mut [Boid] {
        &mut self.boids
    }

    pub fn wander_target(&self) -> Option<Vector2D> {
        self.wander_target
    }

    pub fn set_parallel_neighbors(&mut self, enabled: bool) {
        self.parallel_neighbors = enabled;
    }

    pub fn state(&self) -> ArenaState {
        match self.clock.state() {
            ClockState::Idle => ArenaState::Idle,
            ClockState::Running { .. } => ArenaState::Running,
        }
    }

    pub fn tick_interval(&self) -> Option<Duration> {
        self.clock.interval()
    }

    pub fn stats(&self) -> ArenaStats {
        let cruising = self.boids.iter().filter(|boid| boid.is_cruising()).count();
        ArenaStats {
            boids: self.boids.len(),
            flocking: self.flocking,
            cruising,
            ticks: self.ticks,
        }
    }

    // Distance a boid may cover in one tick
    pub fn max_delta(&self) -> f32 {
        self.cell_size * self.max_speed * self.tick_seconds
    }

    // Start ticking `framerate` times per second. Calling this while running
    // replaces the current schedule.
    pub fn simulate(&mut self, framerate: f32) -> Result<(), ArenaError> {
        let was_running = self.clock.is_running();
        let interval = self.clock.start(framerate)?;

        if was_running {
            warn!(framerate, "simulation already running, replacing its schedule");
        }

        self.tick_seconds = 1.0 / framerate;
        debug!(framerate, interval_ms = interval.as_secs_f64() * 1000.0, "simulation started");
        Ok(())
    }

    // Stop ticking; harmless when already idle
    pub fn pause(&mut self) {
        if self.clock.stop() {
            debug!(ticks = self.ticks, "simulation paused");
        }
    }

    // Advance the clock by `elapsed` and run every tick that came due.
    // Returns the number of steps taken.
    pub fn update(&mut self, elapsed: Duration) -> u32 {
        let due = self.clock.advance(elapsed);
        for _ in 0..due {
            self.step();
        }
        due
    }

    // Add a boid at (x, y) with a random velocity in [-1, 1] on each axis.
    pub fn add_boid(&mut self, x: f32, y: f32) -> &mut Boid {
        let index = self.boids.len();
        self.boids.push(Boid::new(x, y, self.crowded_distance, &mut self.rng));
        trace!(x, y, boids = self.boids.len(), "boid added");

        &mut self.boids[index]
    }

    // Scatter `count` boids uniformly over the arena
    pub fn populate(&mut self, count: usize) {
        self.boids.reserve(count);
        for _ in 0..count {
            let x = self.rng.gen_range(0.0..self.width);
            let y = self.rng.gen_range(0.0..self.height);
            self.add_boid(x, y);
        }
        debug!(count, total = self.boids.len(), "arena populated");
    }

    // Indices of every other boid within `neighbor_distance` of each boid.
    pub fn neighborhoods(&self) -> Vec<Vec<usize>> {
        let boids = &self.boids;
        let radius = self.neighbor_distance;

        let find = |(i, boid): (usize, &Boid)| -> Vec<usize> {
            boids
                .iter()
                .enumerate()
                .filter(|&(j, other)| j != i && boid.position.distance_to(other.position) <= radius)
                .map(|(j, _)| j)
                .collect()
        };

        if self.parallel_neighbors {
            boids.par_iter().enumerate().map(&find).collect()
        } else {
            boids.iter().enumerate().map(&find).collect()
        }
    }

    pub fn step(&mut self) {
        let neighborhoods = self.neighborhoods();
        let snapshot = self.boids.clone();

        let Self {
            boids,
            rng,
            wander_target,
            width,
            height,
            ..
        } = self;

        let mut flocking = 0;
        for (index, (boid, neighbor_indices)) in boids.iter_mut().zip(&neighborhoods).enumerate() {
            if neighbor_indices.is_empty() {
                // Even-indexed loners pick a fresh wander target for everyone
                if index % 2 == 0 || wander_target.is_none() {
                    *wander_target = Some(random_point(rng, *width, *height));
                }
                if let Some(target) = *wander_target {
                    boid.cruise(target);
                }
            } else {
                let neighbors: Vec<&Boid> = neighbor_indices.iter().map(|&j| &snapshot[j]).collect();
                boid.flock(&neighbors);
                flocking += 1;
            }
        }

        let max_delta = self.max_delta();
        for boid in &mut self.boids {
            boid.advance(max_delta);
        }

        for boid in &mut self.boids {
            boid.position = wrap(boid.position, self.width, self.height);
        }

        self.ticks += 1;
        self.flocking = flocking;
        trace!(
            tick = self.ticks,
            flocking,
            cruising = self.boids.len() - flocking,
            "arena stepped"
        );
    }

    pub fn render(&self, surface: &mut impl Surface) {
        renderer::draw_arena(self, surface);
    }
}

fn random_point(rng: &mut StdRng, width: f32, height: f32) -> Vector2D {
    Vector2D::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height))
}

/// Wrap a position onto the torus `[0, width) x [0, height)`.
pub fn wrap(position: Vector2D, width: f32, height: f32) -> Vector2D {
    Vector2D::new(wrap_axis(position.x, width), wrap_axis(position.y, height))
}

fn wrap_axis(value: f32, extent: f32) -> f32 {
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}
