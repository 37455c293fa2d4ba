use crate::render::{Surface, WHITE};

use super::particle::Particle;

/// Index into the scene's particle arena
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ParticleId(pub usize);

/// Below this separation the correction axis is undefined
pub const JOINT_EPSILON: f64 = 1e-9;

/// What a single `Joint::update` did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JointOutcome {
    /// Already at rest length; nothing moved
    Satisfied,
    /// Endpoints pushed/pulled half the error each
    Corrected,
    /// Endpoints coincide; skipped this frame
    Degenerate,
}

/// Fixed-length distance constraint between two particles
///
/// Holds ids, not the particles: any particle may sit in several joints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Joint {
    pub a: ParticleId,
    pub b: ParticleId,
    /// Rest length
    pub length: f64,
}

impl Joint {
    pub fn new(a: ParticleId, b: ParticleId, length: f64) -> Self {
        Self { a, b, length }
    }

    pub fn current_length(&self, particles: &[Particle]) -> f64 {
        particles[self.a.0].pos.distance(particles[self.b.0].pos)
    }

    /// One relaxation pass: split the length error evenly between both ends
    /// along the axis joining them.
    ///
    /// Exact only for a joint that shares no particle; chains of joints
    /// converge over several frames instead.
    pub fn update(&self, particles: &mut [Particle]) -> JointOutcome {
        let delta = particles[self.b.0].pos - particles[self.a.0].pos;
        let distance = delta.length();
        if distance < JOINT_EPSILON {
            return JointOutcome::Degenerate;
        }

        let difference = self.length - distance;
        if difference == 0.0 {
            return JointOutcome::Satisfied;
        }

        let percent = difference / distance / 2.0;
        let offset = delta * percent;

        particles[self.a.0].pos -= offset;
        particles[self.b.0].pos += offset;
        JointOutcome::Corrected
    }

    pub fn draw<S: Surface + ?Sized>(
        &self,
        particles: &[Particle],
        surface: &mut S,
    ) -> Result<(), String> {
        surface.line(particles[self.a.0].pos, particles[self.b.0].pos, WHITE)
    }
}
