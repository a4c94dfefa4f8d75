/*
 * Error Module
 *
 * Errors raised while building an arena or starting its clock. The step
 * loop itself has no failure modes.
 */

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArenaError {
    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
    /// The simulation framerate must be positive and finite.
    #[error("framerate must be a positive finite number, got {0}")]
    InvalidFramerate(f32),
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] serde_json::Error),
}
