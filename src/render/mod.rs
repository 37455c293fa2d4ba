//! Drawing targets for the frame tick
//!
//! - surface   - `Surface` trait, `NullSurface`, per-frame `DrawErrors`
//! - recording - draw-call recorder
//! - canvas    - `CanvasRenderingContext2d` backend (wasm32)

mod surface;
mod recording;
#[cfg(target_arch = "wasm32")]
mod canvas;

pub use surface::{DrawErrors, NullSurface, Surface, WHITE};
pub use recording::{DrawCall, RecordingSurface};
#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
