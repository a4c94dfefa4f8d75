/*
 * Surface Module
 *
 * The drawing surface the arena renders onto. Arena coordinates follow the
 * canvas convention: origin at the top-left corner, y pointing down.
 *
 * Two surfaces are provided:
 * - NannouSurface maps canvas coordinates into a nannou Draw, whose origin
 *   is the window center with y pointing up
 * - FrameRecorder keeps the draw calls as a list of commands
 */

use nannou::prelude::*;

use crate::vector::Vector2D;

pub trait Surface {
    // Canvas size as (width, height) in pixels.
    fn size(&self) -> (f32, f32);

    fn clear(&mut self);

    fn line(&mut self, from: Vector2D, to: Vector2D, color: Rgb<u8>);

    // Stroke a closed polygon through `points`.
    fn polygon(&mut self, points: &[Vector2D], color: Rgb<u8>);
}

// Convert a canvas point into nannou window coordinates
pub fn canvas_to_window(point: Vector2D, width: f32, height: f32) -> Vec2 {
    vec2(point.x - width / 2.0, height / 2.0 - point.y)
}

// Convert a nannou window point into canvas coordinates
pub fn window_to_canvas(point: Vec2, width: f32, height: f32) -> Vector2D {
    Vector2D::new(point.x + width / 2.0, height / 2.0 - point.y)
}

pub struct NannouSurface<'a> {
    draw: &'a Draw,
    width: f32,
    height: f32,
}

impl<'a> NannouSurface<'a> {
    pub fn new(draw: &'a Draw, width: f32, height: f32) -> Self {
        Self { draw, width, height }
    }

    fn to_window(&self, point: Vector2D) -> Vec2 {
        canvas_to_window(point, self.width, self.height)
    }
}

impl Surface for NannouSurface<'_> {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.draw.background().color(WHITE);
    }

    fn line(&mut self, from: Vector2D, to: Vector2D, color: Rgb<u8>) {
        self.draw
            .line()
            .start(self.to_window(from))
            .end(self.to_window(to))
            .weight(1.0)
            .color(color);
    }

    fn polygon(&mut self, points: &[Vector2D], color: Rgb<u8>) {
        let points: Vec<Vec2> = points.iter().map(|&p| self.to_window(p)).collect();
        self.draw
            .polyline()
            .weight(1.0)
            .points_closed(points)
            .color(color);
    }
}

#[derive(Debug, Clone)]
pub enum DrawCommand {
    Clear,
    Line {
        from: Vector2D,
        to: Vector2D,
        color: Rgb<u8>,
    },
    Polygon {
        points: Vec<Vector2D>,
        color: Rgb<u8>,
    },
}

/// A surface that records what was drawn instead of drawing it.
#[derive(Debug, Clone)]
pub struct FrameRecorder {
    width: f32,
    height: f32,
    pub commands: Vec<DrawCommand>,
}

impl FrameRecorder {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    pub fn lines(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::Line { .. }))
            .count()
    }

    pub fn polygons(&self) -> impl Iterator<Item = &[Vector2D]> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Polygon { points, .. } => Some(points.as_slice()),
            _ => None,
        })
    }
}

impl Surface for FrameRecorder {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    // Clearing starts a new frame
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn line(&mut self, from: Vector2D, to: Vector2D, color: Rgb<u8>) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }

    fn polygon(&mut self, points: &[Vector2D], color: Rgb<u8>) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_corners_map_to_window_corners() {
        let top_left = canvas_to_window(Vector2D::new(0.0, 0.0), 800.0, 600.0);
        assert_eq!(top_left, vec2(-400.0, 300.0));

        let bottom_right = canvas_to_window(Vector2D::new(800.0, 600.0), 800.0, 600.0);
        assert_eq!(bottom_right, vec2(400.0, -300.0));
    }

    #[test]
    fn window_to_canvas_inverts_canvas_to_window() {
        let point = Vector2D::new(123.0, 456.0);
        let window = canvas_to_window(point, 640.0, 480.0);
        assert_eq!(window_to_canvas(window, 640.0, 480.0), point);
    }

    #[test]
    fn recorder_clear_starts_a_new_frame() {
        let mut recorder = FrameRecorder::new(10.0, 10.0);
        recorder.line(Vector2D::ZERO, Vector2D::new(1.0, 1.0), BLACK);
        recorder.clear();
        recorder.polygon(&[Vector2D::ZERO, Vector2D::new(1.0, 0.0)], BLACK);

        assert!(matches!(recorder.commands[0], DrawCommand::Clear));
        assert_eq!(recorder.lines(), 0);
        assert_eq!(recorder.polygons().count(), 1);
    }
}
