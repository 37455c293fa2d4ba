use crate::domain::{Joint, JointOutcome, Particle};
use crate::render::{DrawErrors, Surface};

/// Counts from one constraint pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConstraintPass {
    pub resolved: u32,
    pub degenerate: u32,
}

/// Resolve every joint once, in list order, drawing each right after its
/// correction. Later joints see earlier joints' corrections.
///
/// A failed draw is recorded in `errors`; every joint is still resolved.
pub fn resolve_and_draw_joints<S: Surface + ?Sized>(
    joints: &[Joint],
    particles: &mut [Particle],
    surface: &mut S,
    errors: &mut DrawErrors,
) -> ConstraintPass {
    let mut pass = ConstraintPass::default();
    for joint in joints {
        match joint.update(particles) {
            JointOutcome::Degenerate => pass.degenerate += 1,
            JointOutcome::Satisfied | JointOutcome::Corrected => pass.resolved += 1,
        }
        errors.record(joint.draw(particles, surface));
    }
    pass
}
