use crate::domain::settings::{step_from_elapsed_ms, NOMINAL_STEP};
use crate::render::{DrawErrors, NullSurface, Surface};
use crate::systems::physics::{integrate_and_draw_particles, resolve_and_draw_joints};
use crate::systems::starfield::draw_stars;

use super::{PerfTimer, WorldCore};

fn sanitize_step(dt: f64) -> f64 {
    if dt.is_finite() && dt > 0.0 { dt } else { 0.0 }
}

pub(super) fn step_for_timestamp(world: &mut WorldCore, timestamp_ms: f64) -> f64 {
    if !world.settings.frame_rate_compensation {
        return NOMINAL_STEP;
    }
    let dt = match world.last_timestamp_ms {
        Some(last) => step_from_elapsed_ms(timestamp_ms - last),
        // First callback: nothing to measure against yet
        None => NOMINAL_STEP,
    };
    world.last_timestamp_ms = Some(timestamp_ms);
    dt
}

pub(super) fn step_headless(world: &mut WorldCore, dt: f64) {
    let mut surface = NullSurface::new(world.width as f64, world.height as f64);
    if let Err(e) = tick(world, &mut surface, dt) {
        console_error!("headless step failed: {}", e);
    }
}

/// One frame: clear, stars, joints, particles
///
/// A failed draw call never cuts the frame short: both physics passes
/// always run and `frame` always advances. The first draw error (if any)
/// is returned at the end.
pub(super) fn tick<S: Surface + ?Sized>(
    world: &mut WorldCore,
    surface: &mut S,
    dt: f64,
) -> Result<(), String> {
    let dt = sanitize_step(dt);
    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };
    let mut errors = DrawErrors::default();

    errors.record(surface.clear());

    // === BACKDROP ===
    let stars = draw_stars(
        surface,
        &mut world.rng_state,
        world.settings.star_count,
        world.settings.star_size,
        &mut errors,
    );

    // === JOINTS ===
    // Drawn before particles so the circles sit on top of the lines.
    let pass = resolve_and_draw_joints(&world.joints, &mut world.particles, surface, &mut errors);
    if pass.degenerate > 0 && !world.degenerate_warned {
        console_warn!(
            "frame {}: {} joint(s) with coincident endpoints skipped",
            world.frame,
            pass.degenerate
        );
        world.degenerate_warned = true;
    }

    // === PARTICLES ===
    let gravity = world.settings.gravity;
    let friction = world.settings.friction;
    let integrated = integrate_and_draw_particles(
        &mut world.particles,
        gravity,
        friction,
        dt,
        surface,
        &mut errors,
    );

    if perf_on {
        world.perf_stats.joints_resolved = pass.resolved;
        world.perf_stats.joints_degenerate = pass.degenerate;
        world.perf_stats.particles_integrated = integrated;
        world.perf_stats.stars_drawn = stars;
        world.perf_stats.frame = world.frame;
        if let Some(start) = step_start {
            world.perf_stats.step_ms = start.elapsed_ms();
        }
    }

    world.frame += 1;
    errors.into_result()
}
