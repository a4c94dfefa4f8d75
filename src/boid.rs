/*
 * Boid Module
 *
 * This module defines the Boid struct and its behavior.
 * A boid with neighbors flocks by combining three rules:
 * 1. Separation: Move away from crowded neighbors
 * 2. Alignment: Match the average velocity of neighbors
 * 3. Cohesion: Steer towards the average position of neighbors
 * A boid without neighbors cruises towards a wander target instead.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::vector::Vector2D;

/// Turning-rate cap applied by `steer`, independent of the speed limit.
pub const STEERING_LIMIT: f32 = 0.1;

// Separation counts twice as much as alignment and cohesion
const SEPARATION_WEIGHT: f32 = 2.0;

#[derive(Debug, Clone)]
pub struct Boid {
    pub position: Vector2D,
    pub velocity: Vector2D,
    pub acceleration: Vector2D,
    pub crowded_distance: f32,
    pub color: Rgb<u8>,
    cruise_target: Option<Vector2D>,
}

impl Boid {
    pub fn new(x: f32, y: f32, crowded_distance: f32, rng: &mut impl Rng) -> Self {
        // Random initial velocity
        let vx = rng.gen_range(-1.0..=1.0);
        let vy = rng.gen_range(-1.0..=1.0);

        Self {
            position: Vector2D::new(x, y),
            velocity: Vector2D::new(vx, vy),
            acceleration: Vector2D::ZERO,
            crowded_distance,
            color: BLACK,
            cruise_target: None,
        }
    }

    pub fn cruise_target(&self) -> Option<Vector2D> {
        self.cruise_target
    }

    pub fn is_cruising(&self) -> bool {
        self.cruise_target.is_some()
    }

    // Direction the glyph points in
    pub fn heading(&self) -> f32 {
        self.velocity.angle()
    }

    // Steer gently towards `target`: the offset from our position, capped at
    // [`STEERING_LIMIT`].
    pub fn steer(&self, target: Vector2D) -> Vector2D {
        let mut desired = target;
        desired.subtract(self.position).clamp_magnitude(STEERING_LIMIT);
        desired
    }

    // Push away from neighbors closer than `crowded_distance`.
    //
    // Each crowded neighbor contributes a unit vector pointing away from it,
    // rescaled by the distance to it, so nearer neighbors push *less*. The
    // sum is averaged over every neighbor, not just the crowded ones.
    pub fn separate(&self, neighbors: &[&Boid]) -> Vector2D {
        let mut sum = Vector2D::ZERO;
        let mut crowded = 0;

        for other in neighbors {
            let distance = self.position.distance_to(other.position);

            if distance < self.crowded_distance {
                let mut away = self.position;
                away.subtract(other.position).normalize().scale(distance);
                sum.add(away);
                crowded += 1;
            }
        }

        if crowded > 0 {
            sum.divide(neighbors.len() as f32);
        }

        sum
    }

    // Average velocity of all neighbors
    pub fn align(&self, neighbors: &[&Boid]) -> Vector2D {
        let mut sum = Vector2D::ZERO;

        for other in neighbors {
            sum.add(other.velocity);
        }

        if !neighbors.is_empty() {
            sum.divide(neighbors.len() as f32);
        }

        sum
    }

    // Steer towards the average position of all neighbors
    pub fn cohere(&self, neighbors: &[&Boid]) -> Vector2D {
        if neighbors.is_empty() {
            return Vector2D::ZERO;
        }

        let mut center = Vector2D::ZERO;
        for other in neighbors {
            center.add(other.position);
        }
        center.divide(neighbors.len() as f32);

        self.steer(center)
    }

    // Replace the acceleration with the flocking response to `neighbors`
    // and leave cruise mode.
    pub fn flock(&mut self, neighbors: &[&Boid]) {
        let mut acceleration = self.velocity;

        let mut separation = self.separate(neighbors);
        separation.scale(SEPARATION_WEIGHT);

        acceleration
            .add(separation)
            .add(self.align(neighbors))
            .add(self.cohere(neighbors));

        self.acceleration = acceleration;
        self.cruise_target = None;
    }

    // Head for `point` if we have no cruise target yet, otherwise keep
    // heading for the target we already committed to.
    pub fn cruise(&mut self, point: Vector2D) {
        let target = *self.cruise_target.get_or_insert(point);
        self.acceleration = self.steer(target);
    }

    // Integrate acceleration into velocity (capped at max_delta) and position
    pub fn advance(&mut self, max_delta: f32) {
        self.velocity.add(self.acceleration).clamp_magnitude(max_delta);
        self.position.add(self.velocity);
    }
}
