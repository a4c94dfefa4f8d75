/*
 * Boid Arena - Module Definitions
 *
 * This file defines the module structure for the boid arena. The simulation
 * core (vector, boid, arena, clock) has no windowing state; the remaining
 * modules put it on screen with nannou.
 */

// Re-export key components for easier access
pub use arena::{Arena, ArenaState, ArenaStats};
pub use boid::Boid;
pub use clock::StepClock;
pub use config::ArenaConfig;
pub use error::ArenaError;
pub use surface::{DrawCommand, FrameRecorder, NannouSurface, Surface};
pub use vector::Vector2D;

// Define modules
pub mod app;
pub mod arena;
pub mod boid;
pub mod clock;
pub mod config;
pub mod debug;
pub mod error;
pub mod input;
pub mod renderer;
pub mod surface;
pub mod ui;
pub mod vector;
