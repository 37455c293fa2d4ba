use crate::core::Vec2;
use crate::domain::Particle;
use crate::render::{DrawErrors, Surface};

/// Gravity, integration and drawing for every particle, in list order.
/// Returns how many particles were integrated; draw failures go to `errors`.
pub fn integrate_and_draw_particles<S: Surface + ?Sized>(
    particles: &mut [Particle],
    gravity: Vec2,
    friction: f64,
    dt: f64,
    surface: &mut S,
    errors: &mut DrawErrors,
) -> u32 {
    let force = gravity * dt;
    for particle in particles.iter_mut() {
        particle.apply_force(force.x, force.y);
        particle.advance(dt, friction);
        errors.record(particle.draw(surface));
    }
    particles.len() as u32
}
