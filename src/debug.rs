/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct holding frame timing metrics
 * shown in the status overlay:
 * - FPS (frames per second)
 * - Frame time
 * - Simulation steps run during the last frame
 */

use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub steps_per_frame: u32,
}

impl DebugInfo {
    pub fn record_frame(&mut self, fps: f32, frame_time: Duration, steps: u32) {
        self.fps = fps;
        self.frame_time = frame_time;
        self.steps_per_frame = steps;
    }

    pub fn frame_time_ms(&self) -> f64 {
        self.frame_time.as_secs_f64() * 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_frame_overwrites_previous_metrics() {
        let mut info = DebugInfo::default();
        info.record_frame(60.0, Duration::from_millis(16), 2);
        info.record_frame(30.0, Duration::from_millis(33), 1);

        assert_eq!(info.fps, 30.0);
        assert_eq!(info.steps_per_frame, 1);
        assert!((info.frame_time_ms() - 33.0).abs() < 1e-9);
    }
}
