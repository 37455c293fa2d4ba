//! Ragdoll Engine - a particle/joint stick figure for the browser canvas
//!
//! Six point masses, five distance joints, gravity, friction and arrow-key
//! impulses, drawn over a twinkling starfield.
//!
//! Layout:
//! - core/        - Vec2, console logging, xorshift RNG
//! - domain/      - particles, joints, tuning, JSON scene description
//! - systems/     - starfield, constraint pass, integration pass, arrow keys
//! - render/      - `Surface` trait with canvas / recording / null backends
//! - simulation/  - `WorldCore` frame loop and the JS `World` facade
//! - app          - browser bootstrap (wasm32 only)

// Logging macros are used everywhere below, so this goes first.
#[macro_use]
pub mod core;
pub mod domain;
pub mod render;
pub mod systems;
pub mod simulation;
#[cfg(target_arch = "wasm32")]
pub mod app;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Ragdoll engine v{} initialized", version());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::Vec2;
pub use domain::{Joint, JointOutcome, Particle, ParticleId, PhysicsSettings, SceneConfig};
pub use render::{DrawCall, NullSurface, RecordingSurface, Surface};
pub use simulation::{PerfStats, World, WorldCore};
pub use systems::input::Direction;

#[cfg(target_arch = "wasm32")]
pub use app::{start, start_on, start_with_config};
