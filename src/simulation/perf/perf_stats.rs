use wasm_bindgen::prelude::*;

/// Timings and work counters of the last `step` (zeros when perf is off).
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) current_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) relax_ms: f64,
    pub(super) drag_ms: f64,
    pub(super) pairs_tested: u32,
    pub(super) contacts_resolved: u32,
    pub(super) body_count: u32,
    pub(super) vertex_count: u32,
    pub(super) constraint_count: u32,
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
    pub fn current_ms(&self) -> f64 { self.current_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn relax_ms(&self) -> f64 { self.relax_ms }
    #[wasm_bindgen(getter)]
    pub fn drag_ms(&self) -> f64 { self.drag_ms }
    #[wasm_bindgen(getter)]
    pub fn pairs_tested(&self) -> u32 { self.pairs_tested }
    #[wasm_bindgen(getter)]
    pub fn contacts_resolved(&self) -> u32 { self.contacts_resolved }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 { self.vertex_count }
    #[wasm_bindgen(getter)]
    pub fn constraint_count(&self) -> u32 { self.constraint_count }
}
