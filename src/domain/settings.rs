//! Physics tuning
//!
//! All magnitudes are "per frame": the values were tuned against a
//! browser repainting at ~60 Hz, and one frame is the unit time step.

use serde::{Deserialize, Serialize};

use crate::core::utils::random::DEFAULT_SEED;
use crate::core::Vec2;

/// Downward pull added to every particle's velocity each frame
pub const DEFAULT_GRAVITY: Vec2 = Vec2::new(0.0, 0.01);
/// Per-frame velocity retention on each axis
pub const DEFAULT_FRICTION: f64 = 0.99;
/// Velocity kick of one arrow-key press
pub const DEFAULT_IMPULSE: f64 = 0.1;
pub const DEFAULT_STAR_COUNT: u32 = 100;
/// Side of a star square, in pixels
pub const DEFAULT_STAR_SIZE: f64 = 2.0;

/// The fixed time step: one frame
pub const NOMINAL_STEP: f64 = 1.0;
/// Refresh rate the per-frame magnitudes were tuned for
pub const REFERENCE_FPS: f64 = 60.0;
/// Longest step taken after a stall (tab in background etc.), in frames
pub const MAX_STEP_FRAMES: f64 = 4.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsSettings {
    pub gravity: Vec2,
    pub friction: f64,
    pub impulse: f64,
    pub star_count: u32,
    pub star_size: f64,
    /// Scale each step by measured frame time instead of assuming one frame
    pub frame_rate_compensation: bool,
    pub seed: u32,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            friction: DEFAULT_FRICTION,
            impulse: DEFAULT_IMPULSE,
            star_count: DEFAULT_STAR_COUNT,
            star_size: DEFAULT_STAR_SIZE,
            frame_rate_compensation: false,
            seed: DEFAULT_SEED,
        }
    }
}

/// Convert the gap between two animation-frame timestamps (ms) into a step in frames
pub fn step_from_elapsed_ms(elapsed_ms: f64) -> f64 {
    if !elapsed_ms.is_finite() || elapsed_ms <= 0.0 {
        return 0.0;
    }
    (elapsed_ms * REFERENCE_FPS / 1000.0).min(MAX_STEP_FRAMES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_reference_frame_is_one_step() {
        let step = step_from_elapsed_ms(1000.0 / REFERENCE_FPS);
        assert!((step - NOMINAL_STEP).abs() < 1e-12);
    }

    #[test]
    fn long_stalls_are_clamped() {
        assert_eq!(step_from_elapsed_ms(10_000.0), MAX_STEP_FRAMES);
    }

    #[test]
    fn bogus_elapsed_times_give_no_step() {
        assert_eq!(step_from_elapsed_ms(-5.0), 0.0);
        assert_eq!(step_from_elapsed_ms(f64::NAN), 0.0);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let s: PhysicsSettings = serde_json::from_str(r#"{"friction": 0.5}"#).unwrap();
        assert_eq!(s.friction, 0.5);
        assert_eq!(s.gravity, DEFAULT_GRAVITY);
        assert_eq!(s.star_count, DEFAULT_STAR_COUNT);
        assert!(!s.frame_rate_compensation);
    }
}
