/*
 * Vector Module
 *
 * This module defines the Vector2D value type used for boid positions,
 * velocities and accelerations. Mutating operations work in place and
 * return the receiver so they can be chained:
 *
 *     diff.subtract(other).normalize().scale(distance);
 */

use nannou::prelude::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2D {
    pub x: f32,
    pub y: f32,
}

impl Vector2D {
    pub const ZERO: Vector2D = Vector2D { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    // Euclidean norm
    pub fn magnitude(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    // Orientation of the vector in radians, in the canvas frame.
    //
    // Computed as `-atan2(-y, x)`, which matches `atan2(y, x)` everywhere
    // except for the sign of zero on the negative x axis.
    pub fn angle(&self) -> f32 {
        -(-self.y).atan2(self.x)
    }

    pub fn add(&mut self, other: Vector2D) -> &mut Self {
        self.x += other.x;
        self.y += other.y;
        self
    }

    pub fn subtract(&mut self, other: Vector2D) -> &mut Self {
        self.x -= other.x;
        self.y -= other.y;
        self
    }

    pub fn scale(&mut self, n: f32) -> &mut Self {
        self.x *= n;
        self.y *= n;
        self
    }

    // Callers guarantee a non-zero divisor
    pub fn divide(&mut self, n: f32) -> &mut Self {
        self.x /= n;
        self.y /= n;
        self
    }

    // Scale to unit length; a zero vector stays at rest
    pub fn normalize(&mut self) -> &mut Self {
        let magnitude = self.magnitude();
        if magnitude > 0.0 {
            self.divide(magnitude);
        }
        self
    }

    // Shrink the vector to `max` if it is longer, otherwise leave it alone
    pub fn clamp_magnitude(&mut self, max: f32) -> &mut Self {
        if self.magnitude() > max {
            self.normalize().scale(max);
        }
        self
    }

    // Straight-line distance; it does not look through the toroidal wrap
    pub fn distance_to(&self, other: Vector2D) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<Vector2D> for Vec2 {
    fn from(v: Vector2D) -> Self {
        Vec2::new(v.x, v.y)
    }
}

impl From<Vec2> for Vector2D {
    fn from(v: Vec2) -> Self {
        Vector2D::new(v.x, v.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPSILON: f32 = 1e-4;

    #[test]
    fn magnitude_is_euclidean_norm() {
        assert!((Vector2D::new(3.0, 4.0).magnitude() - 5.0).abs() < EPSILON);
        assert_eq!(Vector2D::ZERO.magnitude(), 0.0);
    }

    #[test]
    fn operations_chain_on_the_receiver() {
        let mut v = Vector2D::new(1.0, 2.0);
        v.add(Vector2D::new(1.0, 1.0))
            .subtract(Vector2D::new(0.0, 1.0))
            .scale(3.0)
            .divide(2.0);
        assert_eq!(v, Vector2D::new(3.0, 3.0));
    }

    #[test]
    fn normalize_leaves_zero_vector_at_rest() {
        let mut v = Vector2D::ZERO;
        v.normalize();
        assert_eq!(v, Vector2D::ZERO);
        assert!(!v.x.is_nan() && !v.y.is_nan());
    }

    #[test]
    fn normalize_produces_unit_length() {
        let mut v = Vector2D::new(-7.0, 24.0);
        v.normalize();
        assert!((v.magnitude() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn clamp_magnitude_never_exceeds_max() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let original = Vector2D::new(rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0));
            let max = rng.gen_range(0.01..20.0);
            let mut clamped = original;
            clamped.clamp_magnitude(max);

            assert!(clamped.magnitude() <= max + EPSILON);
            if original.magnitude() <= max {
                assert_eq!(clamped, original);
            }
        }
    }

    #[test]
    fn clamp_magnitude_of_zero_vector_is_noop() {
        let mut v = Vector2D::ZERO;
        v.clamp_magnitude(0.0);
        assert_eq!(v, Vector2D::ZERO);
    }

    #[test]
    fn distance_is_symmetric_and_zero_for_equal_points() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let a = Vector2D::new(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0));
            let b = Vector2D::new(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0));
            assert_eq!(a.distance_to(b), b.distance_to(a));
            assert!(a.distance_to(b) >= 0.0);
            assert_eq!(a.distance_to(a), 0.0);
        }
    }

    #[test]
    fn angle_matches_atan2_on_axes() {
        assert!((Vector2D::new(1.0, 0.0).angle()).abs() < EPSILON);
        assert!((Vector2D::new(0.0, 1.0).angle() - FRAC_PI_2).abs() < EPSILON);
        assert!((Vector2D::new(0.0, -1.0).angle() + FRAC_PI_2).abs() < EPSILON);
        assert!((Vector2D::new(-1.0, 0.0).angle().abs() - PI).abs() < EPSILON);
    }
}
