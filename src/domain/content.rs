use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::joint::{Joint, ParticleId};
use super::particle::Particle;
use super::settings::PhysicsSettings;

pub const DEFAULT_RADIUS: f64 = 5.0;

fn default_radius() -> f64 {
    DEFAULT_RADIUS
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParticleSpec {
    pub key: String,
    pub x: f64,
    pub y: f64,
    #[serde(default = "default_radius")]
    pub radius: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JointSpec {
    pub a: String,
    pub b: String,
    pub length: f64,
}

/// Scene description: particles by key, joints naming those keys, and
/// which particle the arrow keys push
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    #[serde(default)]
    pub settings: PhysicsSettings,
    pub particles: Vec<ParticleSpec>,
    #[serde(default)]
    pub joints: Vec<JointSpec>,
    pub controlled: String,
}

/// Resolved scene: index-addressed arenas ready for simulation
#[derive(Clone, Debug)]
pub struct Scene {
    pub particles: Vec<Particle>,
    pub joints: Vec<Joint>,
    pub controlled: ParticleId,
    pub keys: Vec<String>,
}

impl SceneConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: SceneConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| e.to_string())
    }

    /// The stick figure: torso in the middle, head above, arms beside, legs below.
    /// Every joint hangs off the torso.
    pub fn ragdoll() -> Self {
        let p = |key: &str, x: f64, y: f64| ParticleSpec {
            key: key.to_string(),
            x,
            y,
            radius: DEFAULT_RADIUS,
        };
        let j = |a: &str, b: &str, length: f64| JointSpec {
            a: a.to_string(),
            b: b.to_string(),
            length,
        };
        Self {
            settings: PhysicsSettings::default(),
            particles: vec![
                p("torso", 400.0, 300.0),
                p("head", 400.0, 270.0),
                p("left_arm", 390.0, 300.0),
                p("right_arm", 410.0, 300.0),
                p("left_leg", 395.0, 330.0),
                p("right_leg", 405.0, 330.0),
            ],
            joints: vec![
                j("torso", "head", 30.0),
                j("torso", "left_arm", 20.0),
                j("torso", "right_arm", 20.0),
                j("torso", "left_leg", 20.0),
                j("torso", "right_leg", 20.0),
            ],
            controlled: "torso".to_string(),
        }
    }

    /// Keys must be unique, every reference must resolve, and radii must be
    /// finite and non-negative (the canvas rejects anything else).
    /// Lengths and positions are taken as given.
    pub fn validate(&self) -> Result<(), String> {
        self.key_index().map(|_| ())
    }

    pub fn build(&self) -> Result<Scene, String> {
        let index = self.key_index()?;
        let resolve = |key: &str| -> Result<ParticleId, String> {
            index
                .get(key)
                .copied()
                .ok_or_else(|| format!("unknown particle '{}'", key))
        };

        let particles = self
            .particles
            .iter()
            .map(|p| Particle::new(p.x, p.y, p.radius))
            .collect();
        let joints = self
            .joints
            .iter()
            .map(|j| Ok(Joint::new(resolve(&j.a)?, resolve(&j.b)?, j.length)))
            .collect::<Result<Vec<_>, String>>()?;

        Ok(Scene {
            particles,
            joints,
            controlled: resolve(&self.controlled)?,
            keys: self.particles.iter().map(|p| p.key.clone()).collect(),
        })
    }

    fn key_index(&self) -> Result<HashMap<&str, ParticleId>, String> {
        let mut index = HashMap::with_capacity(self.particles.len());
        for (i, p) in self.particles.iter().enumerate() {
            if !p.radius.is_finite() || p.radius < 0.0 {
                return Err(format!("particle '{}' has invalid radius {}", p.key, p.radius));
            }
            if index.insert(p.key.as_str(), ParticleId(i)).is_some() {
                return Err(format!("duplicate particle key '{}'", p.key));
            }
        }
        for (i, j) in self.joints.iter().enumerate() {
            for key in [&j.a, &j.b] {
                if !index.contains_key(key.as_str()) {
                    return Err(format!("joint {} references unknown particle '{}'", i, key));
                }
            }
        }
        if !index.contains_key(self.controlled.as_str()) {
            return Err(format!("controlled particle '{}' does not exist", self.controlled));
        }
        Ok(index)
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::ragdoll()
    }
}
