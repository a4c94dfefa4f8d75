/*
 * Input Module
 *
 * The only interaction is seeding: a left click outside the status window
 * drops a new boid at the cursor. Raw window events are forwarded to egui.
 */

use nannou::prelude::*;
use nannou::winit::event::{MouseButton, WindowEvent};
use tracing::debug;

use crate::app::Model;
use crate::surface::window_to_canvas;

pub fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left || model.egui.ctx().is_pointer_over_area() {
        return;
    }

    let position = window_to_canvas(
        app.mouse.position(),
        model.arena.width(),
        model.arena.height(),
    );

    // Clicks can land in the window margin outside the canvas
    if position.x < 0.0
        || position.y < 0.0
        || position.x >= model.arena.width()
        || position.y >= model.arena.height()
    {
        return;
    }

    model.arena.add_boid(position.x, position.y);
    debug!(x = position.x, y = position.y, "boid seeded from click");
}

pub fn raw_window_event(_app: &App, model: &mut Model, event: &WindowEvent) {
    model.egui.handle_raw_event(event);
}
