use wasm_bindgen::prelude::*;

use super::perf_stats::PerfStats;
use super::WorldCore;
use crate::domain::ParticleId;

/// JS handle for driving the simulation from a JS-owned loop
///
/// `start()` runs the whole thing on a canvas by itself; this is for
/// hosts that want to step and draw on their own.
#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// The default ragdoll on a `width` x `height` surface
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            core: WorldCore::new(width, height),
        }
    }

    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str, width: u32, height: u32) -> Result<World, JsValue> {
        let core = WorldCore::from_config_json(json, width, height)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> usize { self.core.particle_count() }

    #[wasm_bindgen(getter)]
    pub fn joint_count(&self) -> usize { self.core.joint_count() }

    /// Index of the arrow-key-controlled particle
    #[wasm_bindgen(getter)]
    pub fn controlled(&self) -> usize { self.core.controlled().0 }

    pub fn particle_x(&self, idx: usize) -> f64 {
        self.core.particle(ParticleId(idx)).map_or(f64::NAN, |p| p.pos.x)
    }

    pub fn particle_y(&self, idx: usize) -> f64 {
        self.core.particle(ParticleId(idx)).map_or(f64::NAN, |p| p.pos.y)
    }

    pub fn particle_radius(&self, idx: usize) -> f64 {
        self.core.particle(ParticleId(idx)).map_or(f64::NAN, |p| p.radius)
    }

    /// Flat [x0, y0, x1, y1, ...] (Float64Array on the JS side)
    pub fn positions(&self) -> Vec<f64> {
        self.core.positions()
    }

    /// Flat [a0, b0, a1, b1, ...] particle indices per joint
    pub fn joint_endpoints(&self) -> Vec<u32> {
        self.core.joint_endpoints()
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn set_gravity(&mut self, x: f64, y: f64) {
        self.core.set_gravity(x, y);
    }

    pub fn set_friction(&mut self, friction: f64) {
        self.core.set_friction(friction);
    }

    pub fn set_impulse_strength(&mut self, impulse: f64) {
        self.core.set_impulse_strength(impulse);
    }

    pub fn set_star_count(&mut self, count: u32) {
        self.core.set_star_count(count);
    }

    pub fn set_frame_rate_compensation(&mut self, enabled: bool) {
        self.core.set_frame_rate_compensation(enabled);
    }

    /// Feed a `KeyboardEvent.key`; true when it was an arrow key
    pub fn key_down(&mut self, key: &str) -> bool {
        self.core.handle_key(key)
    }

    pub fn apply_impulse(&mut self, fx: f64, fy: f64) {
        self.core.apply_impulse(fx, fy);
    }

    /// Advance one fixed frame (no drawing)
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Advance `dt` frames (no drawing)
    pub fn step_by(&mut self, dt: f64) {
        self.core.step_by(dt);
    }
}
