/*
 * Application Module
 *
 * This module wires the arena into a nannou application:
 * - model: opens a window sized to the arena, seeds boids and starts ticking
 * - update: feeds frame time into the arena clock and refreshes the overlay
 * - view: renders the arena, then the overlay
 */

use std::sync::OnceLock;

use nannou::prelude::*;
use nannou_egui::Egui;
use tracing::{error, info, warn};

use crate::arena::Arena;
use crate::config::ArenaConfig;
use crate::debug::DebugInfo;
use crate::error::ArenaError;
use crate::input;
use crate::surface::NannouSurface;
use crate::ui;

// nannou's model function takes no arguments, so the launch settings wait here
static LAUNCH_CONFIG: OnceLock<ArenaConfig> = OnceLock::new();

pub struct Model {
    pub arena: Arena,
    pub egui: Egui,
    pub debug_info: DebugInfo,
}

/// Validate `config` and hand control to the nannou event loop.
pub fn run(config: ArenaConfig) -> Result<(), ArenaError> {
    config.validate()?;

    if LAUNCH_CONFIG.set(config).is_err() {
        warn!("application already launched, keeping the first configuration");
    }

    nannou::app(model).update(update).run();
    Ok(())
}

pub fn model(app: &App) -> Model {
    let config = LAUNCH_CONFIG.get().cloned().unwrap_or_default();

    let window_id = app
        .new_window()
        .title("Boid Arena")
        .size(config.width as u32, config.height as u32)
        .resizable(false)
        .view(view)
        .mouse_pressed(input::mouse_pressed)
        .raw_event(input::raw_window_event)
        .build()
        .expect("failed to build the arena window");

    let window = app.window(window_id).expect("arena window closed during setup");
    let egui = Egui::from_window(&window);

    let mut arena = Arena::from_config(&config).expect("configuration is validated before launch");
    arena.populate(config.initial_boids);

    if let Err(err) = arena.simulate(config.framerate) {
        error!(%err, "could not start the simulation");
    }

    info!(
        width = config.width,
        height = config.height,
        cell_size = config.cell_size,
        boids = arena.boids().len(),
        "arena ready"
    );

    Model {
        arena,
        egui,
        debug_info: DebugInfo::default(),
    }
}

pub fn update(app: &App, model: &mut Model, update: Update) {
    model.egui.set_elapsed_time(update.since_start);

    let steps = model.arena.update(update.since_last);
    model.debug_info.record_frame(app.fps(), update.since_last, steps);

    let stats = model.arena.stats();
    ui::update_ui(&mut model.egui, model.arena.state(), &stats, &model.debug_info);
}

pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();

    let mut surface = NannouSurface::new(&draw, model.arena.width(), model.arena.height());
    model.arena.render(&mut surface);

    if let Err(err) = draw.to_frame(app, &frame) {
        warn!(error = ?err, "failed to draw the arena");
    }

    if let Err(err) = model.egui.draw_to_frame(&frame) {
        warn!(error = ?err, "failed to draw the overlay");
    }
}
