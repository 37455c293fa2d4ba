use crate::core::Vec2;
use crate::render::{Surface, WHITE};

use super::settings::{DEFAULT_FRICTION, NOMINAL_STEP};

/// A point mass: position and velocity, no rotation, no mass
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    /// Velocity in pixels per frame
    pub vel: Vec2,
    /// Only used for drawing
    pub radius: f64,
}

impl Particle {
    /// A particle at rest
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        Self {
            pos: Vec2::new(x, y),
            vel: Vec2::zero(),
            radius,
        }
    }

    /// Add to velocity; position is untouched until the next `update`
    pub fn apply_force(&mut self, fx: f64, fy: f64) {
        self.vel += Vec2::new(fx, fy);
    }

    /// One fixed frame: move by velocity, then damp it
    pub fn update(&mut self) {
        self.advance(NOMINAL_STEP, DEFAULT_FRICTION);
    }

    /// Explicit Euler over `dt` frames with exponential damping
    pub fn advance(&mut self, dt: f64, friction: f64) {
        self.pos += self.vel * dt;
        self.vel = self.vel * friction.powf(dt);
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), String> {
        surface.circle(self.pos, self.radius, WHITE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCall, RecordingSurface};

    #[test]
    fn apply_force_only_touches_velocity() {
        let mut p = Particle::new(10.0, 20.0, 5.0);
        p.apply_force(0.5, -0.25);
        p.apply_force(0.5, -0.25);
        assert_eq!(p.vel, Vec2::new(1.0, -0.5));
        assert_eq!(p.pos, Vec2::new(10.0, 20.0));
    }

    #[test]
    fn update_moves_by_pre_call_velocity_then_damps() {
        let mut p = Particle::new(400.0, 300.0, 5.0);
        p.vel = Vec2::new(2.0, -3.0);
        let before = p;

        p.update();

        assert_eq!(p.pos, before.pos + before.vel);
        assert!((p.vel.x - 2.0 * 0.99).abs() < 1e-12);
        assert!((p.vel.y + 3.0 * 0.99).abs() < 1e-12);
        assert!(p.vel.length() < before.vel.length());
    }

    #[test]
    fn update_at_rest_stays_at_rest() {
        let mut p = Particle::new(1.0, 1.0, 5.0);
        p.update();
        assert_eq!(p.pos, Vec2::new(1.0, 1.0));
        assert_eq!(p.vel, Vec2::zero());
    }

    #[test]
    fn two_half_steps_damp_like_one_full_step() {
        let mut full = Particle::new(0.0, 0.0, 1.0);
        full.vel = Vec2::new(1.0, 1.0);
        let mut halves = full;

        full.advance(1.0, 0.99);
        halves.advance(0.5, 0.99);
        halves.advance(0.5, 0.99);

        assert!((full.vel.x - halves.vel.x).abs() < 1e-12);
    }

    #[test]
    fn no_clamping_off_screen() {
        let mut p = Particle::new(-1.0e6, 5.0e6, 5.0);
        p.vel = Vec2::new(-100.0, 100.0);
        p.update();
        assert_eq!(p.pos, Vec2::new(-1.0e6 - 100.0, 5.0e6 + 100.0));
    }

    #[test]
    fn draws_a_white_circle_at_position() {
        let p = Particle::new(3.0, 4.0, 5.0);
        let mut s = RecordingSurface::new(100.0, 100.0);
        p.draw(&mut s).unwrap();
        assert_eq!(
            s.calls(),
            &[DrawCall::Circle {
                center: Vec2::new(3.0, 4.0),
                radius: 5.0,
                color: WHITE.to_string(),
            }]
        );
    }
}
