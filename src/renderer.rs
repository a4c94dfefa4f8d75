/*
 * Renderer Module
 *
 * This module draws a frame of the arena onto a Surface:
 * - Clear the surface
 * - Pencil in the grid, one line every cell_size pixels
 * - Stroke every boid as an arrowhead pointing along its velocity
 */

use nannou::prelude::*;
use std::f32::consts::FRAC_PI_2;

use crate::arena::Arena;
use crate::boid::Boid;
use crate::surface::Surface;
use crate::vector::Vector2D;

// #eeeeee, light enough to sit behind the boids
pub fn grid_color() -> Rgb<u8> {
    rgb(238, 238, 238)
}

pub fn draw_arena(arena: &Arena, surface: &mut impl Surface) {
    surface.clear();
    draw_grid(surface, arena.cell_size());

    for boid in arena.boids() {
        draw_boid(surface, boid, arena.cell_size());
    }
}

/// Vertical lines at `x = 0.5 + i * cell_size` up to `width + 0.5`, then
/// horizontal lines the same way. The half-pixel offset keeps one-pixel
/// strokes crisp.
pub fn draw_grid(surface: &mut impl Surface, cell_size: f32) {
    let (width, height) = surface.size();
    let color = grid_color();

    for x in grid_offsets(width, cell_size) {
        surface.line(Vector2D::new(x, 0.0), Vector2D::new(x, height), color);
    }

    for y in grid_offsets(height, cell_size) {
        surface.line(Vector2D::new(0.0, y), Vector2D::new(width, y), color);
    }
}

fn grid_offsets(extent: f32, cell_size: f32) -> impl Iterator<Item = f32> {
    let count = (extent / cell_size).floor() as usize;
    (0..=count).map(move |i| 0.5 + i as f32 * cell_size)
}

pub fn draw_boid(surface: &mut impl Surface, boid: &Boid, length: f32) {
    let points = glyph_points(boid.position, boid.heading(), length);
    surface.polygon(&points, boid.color);
}

/// Outline of a boid glyph centered on `center` and pointing along
/// `heading`, in drawing order: front, right wing, dent, left wing.
pub fn glyph_points(center: Vector2D, heading: f32, length: f32) -> [Vector2D; 4] {
    let half_length = length / 2.0;
    let half_width = 3.0 / 8.0 * length;

    let forward = Vector2D::new(heading.cos(), heading.sin());
    let across = Vector2D::new((heading + FRAC_PI_2).cos(), (heading + FRAC_PI_2).sin());

    let along = |distance: f32| {
        let mut point = forward;
        point.scale(distance).add(center);
        point
    };

    let front = along(half_length);
    let rear = along(-half_length);
    let dent = along(-0.75 * half_length);

    let mut right = across;
    right.scale(half_width).add(rear);

    let mut left = across;
    left.scale(-half_width).add(rear);

    [front, right, dent, left]
}
