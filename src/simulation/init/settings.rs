use crate::core::Vec2;

use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn set_gravity(world: &mut WorldCore, x: f64, y: f64) {
    world.settings.gravity = Vec2::new(x, y);
}

pub(super) fn set_friction(world: &mut WorldCore, friction: f64) {
    world.settings.friction = friction;
}

pub(super) fn set_impulse_strength(world: &mut WorldCore, impulse: f64) {
    world.settings.impulse = impulse;
}

pub(super) fn set_star_count(world: &mut WorldCore, count: u32) {
    world.settings.star_count = count;
}

pub(super) fn set_frame_rate_compensation(world: &mut WorldCore, enabled: bool) {
    world.settings.frame_rate_compensation = enabled;
    // Don't measure across the time compensation was off.
    world.last_timestamp_ms = None;
}

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &WorldCore) -> PerfStats {
    world.perf_stats.clone()
}
