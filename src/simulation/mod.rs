//! World - the ragdoll scene and its frame loop
//!
//! Owns the particle and joint arenas; joints address particles by
//! `ParticleId`, so there is one owner for every particle and no aliasing.
//!
//! Per tick, in order:
//! - clear the surface
//! - scatter the starfield
//! - resolve + draw every joint
//! - gravity + integrate + draw every particle

use crate::core::Vec2;
use crate::domain::{Joint, Particle, ParticleId, PhysicsSettings, SceneConfig};
use crate::render::Surface;
use crate::systems::input::Direction;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::World;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// Default drawable size, matching the canvas the figure was laid out on
pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;

/// The simulation world
pub struct WorldCore {
    width: u32,
    height: u32,

    particles: Vec<Particle>,
    joints: Vec<Joint>,
    keys: Vec<String>,
    controlled: ParticleId,

    // Settings
    settings: PhysicsSettings,

    // State
    frame: u64,
    rng_state: u32,
    last_timestamp_ms: Option<f64>,
    degenerate_warned: bool,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    /// The default ragdoll on a `width` x `height` surface
    pub fn new(width: u32, height: u32) -> Self {
        init::create_ragdoll_world(width, height)
    }

    pub fn from_config(config: &SceneConfig, width: u32, height: u32) -> Result<Self, String> {
        init::create_world_core(config, width, height)
    }

    pub fn from_config_json(json: &str, width: u32, height: u32) -> Result<Self, String> {
        let config = SceneConfig::from_json(json)?;
        Self::from_config(&config, width, height)
    }

    pub fn width(&self) -> u32 { self.width }

    pub fn height(&self) -> u32 { self.height }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn particle_count(&self) -> usize { self.particles.len() }

    pub fn joint_count(&self) -> usize { self.joints.len() }

    pub fn particles(&self) -> &[Particle] { &self.particles }

    pub fn joints(&self) -> &[Joint] { &self.joints }

    pub fn particle(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.get(id.0)
    }

    /// Id of the particle the arrow keys push (the torso by default)
    pub fn controlled(&self) -> ParticleId { self.controlled }

    pub fn controlled_particle(&self) -> &Particle {
        &self.particles[self.controlled.0]
    }

    pub fn id_of(&self, key: &str) -> Option<ParticleId> {
        self.keys.iter().position(|k| k == key).map(ParticleId)
    }

    pub fn settings(&self) -> &PhysicsSettings { &self.settings }

    // === SETTINGS ===

    pub fn set_gravity(&mut self, x: f64, y: f64) {
        settings::set_gravity(self, x, y);
    }

    pub fn set_friction(&mut self, friction: f64) {
        settings::set_friction(self, friction);
    }

    pub fn set_impulse_strength(&mut self, impulse: f64) {
        settings::set_impulse_strength(self, impulse);
    }

    pub fn set_star_count(&mut self, count: u32) {
        settings::set_star_count(self, count);
    }

    pub fn set_frame_rate_compensation(&mut self, enabled: bool) {
        settings::set_frame_rate_compensation(self, enabled);
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === INPUT ===

    /// Add a velocity impulse to the controlled particle
    pub fn apply_impulse(&mut self, fx: f64, fy: f64) {
        commands::apply_impulse(self, fx, fy);
    }

    /// Push the controlled particle one impulse in `direction`
    pub fn push(&mut self, direction: Direction) {
        commands::push(self, direction);
    }

    /// Feed a `KeyboardEvent.key`; returns true if it was an arrow key
    pub fn handle_key(&mut self, key: &str) -> bool {
        commands::handle_key(self, key)
    }

    // === FRAME LOOP ===

    /// One fixed-step tick drawn onto `surface`
    ///
    /// Physics and the frame counter advance even when a draw call fails;
    /// the first draw error is returned afterwards.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<(), String> {
        step::tick(self, surface, crate::domain::settings::NOMINAL_STEP)
    }

    /// One tick of `dt` frames drawn onto `surface`
    pub fn tick_by<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        dt: f64,
    ) -> Result<(), String> {
        step::tick(self, surface, dt)
    }

    /// One tick for an animation-frame callback at `timestamp_ms`
    ///
    /// Fixed step unless frame-rate compensation is on, in which case the
    /// step is the time since the previous callback.
    pub fn tick_at<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        timestamp_ms: f64,
    ) -> Result<(), String> {
        let dt = step::step_for_timestamp(self, timestamp_ms);
        step::tick(self, surface, dt)
    }

    /// Headless fixed-step tick
    pub fn step(&mut self) {
        step::step_headless(self, crate::domain::settings::NOMINAL_STEP);
    }

    /// Headless tick of `dt` frames
    pub fn step_by(&mut self, dt: f64) {
        step::step_headless(self, dt);
    }

    // === RENDER EXTRACT ===

    /// Flat [x0, y0, x1, y1, ...] in particle order
    pub fn positions(&self) -> Vec<f64> {
        render_extract::positions(self)
    }

    /// Flat [a0, b0, a1, b1, ...] particle indices in joint order
    pub fn joint_endpoints(&self) -> Vec<u32> {
        render_extract::joint_endpoints(self)
    }

    pub fn controlled_position(&self) -> Vec2 {
        self.controlled_particle().pos
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
