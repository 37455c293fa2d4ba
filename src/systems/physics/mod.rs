//! Per-frame physics passes
//!
//! Each pass draws as it goes, so layering follows evaluation order:
//! joints first, particles on top.

mod constraints;
mod forces;

pub use constraints::{resolve_and_draw_joints, ConstraintPass};
pub use forces::integrate_and_draw_particles;
