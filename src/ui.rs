/*
 * UI Module
 *
 * A read-only egui status window drawn over the arena. It reports frame
 * timing and what the boids are doing; it does not change the simulation.
 */

use nannou_egui::{egui, Egui};

use crate::arena::{ArenaState, ArenaStats};
use crate::debug::DebugInfo;

pub fn update_ui(egui: &mut Egui, state: ArenaState, stats: &ArenaStats, debug_info: &DebugInfo) {
    let ctx = egui.begin_frame();

    egui::Window::new("Arena")
        .default_pos([10.0, 10.0])
        .resizable(false)
        .show(&ctx, |ui| {
            ui.label(format!("State: {}", state_label(state)));
            ui.label(format!("Ticks: {}", stats.ticks));

            ui.separator();

            ui.label(format!("Boids: {}", stats.boids));
            ui.label(format!("Flocking: {}", stats.flocking));
            ui.label(format!("Cruising: {}", stats.cruising));

            ui.separator();

            ui.label(format!("FPS: {:.1}", debug_info.fps));
            ui.label(format!("Frame time: {:.2} ms", debug_info.frame_time_ms()));
            ui.label(format!("Steps this frame: {}", debug_info.steps_per_frame));

            ui.separator();
            ui.label("Click anywhere to add a boid");
        });
}

fn state_label(state: ArenaState) -> &'static str {
    match state {
        ArenaState::Idle => "paused",
        ArenaState::Running => "running",
    }
}
