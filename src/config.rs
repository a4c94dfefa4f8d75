/*
 * Configuration Module
 *
 * This module defines the ArenaConfig struct that holds the fixed scale
 * parameters of an arena. Every field has a default, so a JSON file only
 * needs to name the values it overrides:
 *
 *     { "width": 1024, "height": 768, "initial_boids": 120 }
 */

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::clock;
use crate::error::ArenaError;

/// Framerate assumed for manual stepping before `simulate` is called.
pub const DEFAULT_FRAMERATE: f32 = 30.0;

// Spatial scale of the behaviors, in multiples of the cell size
pub const NEIGHBOR_CELLS: f32 = 4.0;
pub const CROWDED_CELLS: f32 = 1.6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Canvas width in pixels.
    pub width: f32,
    /// Canvas height in pixels.
    pub height: f32,
    /// Grid cell size in pixels; also the length of a boid glyph.
    pub cell_size: f32,
    /// Top speed in cells per second.
    pub max_speed: f32,
    /// Simulation ticks per second.
    pub framerate: f32,
    /// Boids scattered at random when the application starts.
    pub initial_boids: usize,
    /// Optional RNG seed for reproducible runs.
    pub rng_seed: Option<u64>,
    /// Find neighbors on the rayon thread pool.
    pub parallel_neighbors: bool,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            cell_size: 10.0,
            max_speed: 10.0,
            framerate: DEFAULT_FRAMERATE,
            initial_boids: 60,
            rng_seed: None,
            parallel_neighbors: false,
        }
    }
}

impl ArenaConfig {
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ArenaError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ArenaError> {
        let config: ArenaConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ArenaError> {
        validate_scale(self.width, self.height, self.cell_size, self.max_speed)?;
        clock::tick_interval(self.framerate)?;
        Ok(())
    }

    pub fn neighbor_distance(&self) -> f32 {
        NEIGHBOR_CELLS * self.cell_size
    }

    pub fn crowded_distance(&self) -> f32 {
        CROWDED_CELLS * self.cell_size
    }

    pub fn tick_seconds(&self) -> f32 {
        1.0 / self.framerate
    }
}

pub(crate) fn validate_scale(
    width: f32,
    height: f32,
    cell_size: f32,
    max_speed: f32,
) -> Result<(), ArenaError> {
    if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
        return Err(ArenaError::InvalidConfig(
            "arena dimensions must be positive",
        ));
    }
    if !cell_size.is_finite() || cell_size <= 0.0 {
        return Err(ArenaError::InvalidConfig("cell_size must be positive"));
    }
    if !max_speed.is_finite() || max_speed < 0.0 {
        return Err(ArenaError::InvalidConfig(
            "max_speed must be non-negative",
        ));
    }
    Ok(())
}
