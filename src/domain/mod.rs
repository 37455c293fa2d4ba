//! Scene model: particles, joints, tuning and the JSON scene description

pub mod content;
pub mod joint;
pub mod particle;
pub mod settings;

pub use content::{JointSpec, ParticleSpec, Scene, SceneConfig};
pub use joint::{Joint, JointOutcome, ParticleId, JOINT_EPSILON};
pub use particle::Particle;
pub use settings::PhysicsSettings;
