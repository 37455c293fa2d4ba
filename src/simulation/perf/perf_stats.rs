use wasm_bindgen::prelude::*;

/// Snapshot of the last tick
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) joints_resolved: u32,
    pub(super) joints_degenerate: u32,
    pub(super) particles_integrated: u32,
    pub(super) stars_drawn: u32,
    pub(super) frame: u64,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn joints_resolved(&self) -> u32 { self.joints_resolved }
    #[wasm_bindgen(getter)]
    pub fn joints_degenerate(&self) -> u32 { self.joints_degenerate }
    #[wasm_bindgen(getter)]
    pub fn particles_integrated(&self) -> u32 { self.particles_integrated }
    #[wasm_bindgen(getter)]
    pub fn stars_drawn(&self) -> u32 { self.stars_drawn }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
}
