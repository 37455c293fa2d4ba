//! Starfield backdrop
//!
//! Not persistent: every frame scatters a fresh set of dots, which is
//! what gives the twinkle.

use crate::core::utils::random::next_unit;
use crate::render::{DrawErrors, Surface, WHITE};

/// Draw `count` square stars of side `size` at uniform positions in
/// [0, width) x [0, height). Returns how many were placed; draw failures
/// go to `errors`.
pub fn draw_stars<S: Surface + ?Sized>(
    surface: &mut S,
    rng_state: &mut u32,
    count: u32,
    size: f64,
    errors: &mut DrawErrors,
) -> u32 {
    let width = surface.width();
    let height = surface.height();
    for _ in 0..count {
        let x = next_unit(rng_state) * width;
        let y = next_unit(rng_state) * height;
        errors.record(surface.fill_rect(x, y, size, size, WHITE));
    }
    count
}
