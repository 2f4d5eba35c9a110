use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

use crate::domain::{EnvironmentMode, Preset, SceneKind};

use super::perf_stats::PerfStats;
use super::WorldCore;

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create an empty world with the pool preset
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            core: WorldCore::new(width, height),
        }
    }

    /// `preset` is `"pool"` or `"cupola"`
    #[wasm_bindgen(js_name = newWithPreset)]
    pub fn new_with_preset(width: f32, height: f32, preset: &str) -> Result<World, JsValue> {
        let preset = Preset::from_name(preset).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self {
            core: WorldCore::with_preset(width, height, preset),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn gravity(&self) -> f32 { self.core.gravity() }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize { self.core.body_count() }

    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> usize { self.core.vertex_count() }

    // === SCENE ===

    /// Populate with `"pool"`, `"cupola"` or `"empty"` at the current size
    pub fn init_scene(&mut self, scene: &str) -> Result<(), JsValue> {
        let scene = SceneKind::from_name(scene).map_err(|e| JsValue::from_str(&e))?;
        let (w, h) = (self.core.width(), self.core.height());
        self.core.init_scene(w, h, scene);
        Ok(())
    }

    /// Rebuild the current scene
    pub fn reset(&mut self) {
        self.core.reset();
    }

    pub fn set_seed(&mut self, seed: u32) {
        self.core.set_seed(seed);
    }

    /// Returns a 1-based body handle, or 0 when the body was rejected
    pub fn spawn_rectangle(&mut self, x: f32, y: f32, w: f32, h: f32, mass: f32, color: &str) -> u32 {
        match self.core.create_rectangle(x, y, w, h, mass, color) {
            Ok(id) => id as u32 + 1,
            Err(e) => {
                console_warn!("spawn_rectangle rejected: {}", e);
                0
            }
        }
    }

    /// Returns a 1-based body handle, or 0 when the body was rejected
    pub fn spawn_circle(&mut self, cx: f32, cy: f32, radius: f32, sides: u32, mass: f32, color: &str) -> u32 {
        match self.core.create_circle(cx, cy, radius, sides, mass, color) {
            Ok(id) => id as u32 + 1,
            Err(e) => {
                console_warn!("spawn_circle rejected: {}", e);
                0
            }
        }
    }

    /// Fill color of a body, by 0-based index
    pub fn body_color(&self, index: usize) -> Option<String> {
        self.core.bodies().get(index).map(|b| b.color.clone())
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    // === FRAME ===

    /// Advance one frame; pass the `requestAnimationFrame` timestamp
    pub fn step(&mut self, now_ms: f64) {
        self.core.step(now_ms);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.core.resize(width, height);
    }

    // === POINTER ===

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.core.pointer_move(x, y);
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.core.pointer_down(x, y);
    }

    /// Button release or pointer leaving the canvas
    pub fn pointer_up(&mut self) {
        self.core.pointer_up();
    }

    // === GRAVITY / MODE ===

    pub fn set_gravity(&mut self, target: f32, duration_ms: f64) {
        self.core.set_gravity(target, duration_ms);
    }

    /// `true` for buoyant (no gravity, ambient current), `false` for gravity
    pub fn set_mode(&mut self, buoyant: bool) {
        let mode = if buoyant {
            EnvironmentMode::Buoyant
        } else {
            EnvironmentMode::Gravity
        };
        self.core.set_mode(mode);
    }

    #[wasm_bindgen(getter)]
    pub fn buoyant(&self) -> bool {
        self.core.mode() == EnvironmentMode::Buoyant
    }

    // === SETTINGS ===

    pub fn load_settings_json(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_settings_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    pub fn get_settings_json(&self) -> String {
        self.core.settings_json()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    // === RENDER ===

    /// Paint every body (and the drag line) into a 2D canvas context
    pub fn draw(&self, ctx: &CanvasRenderingContext2d) {
        let mut ctx = ctx.clone();
        self.core.draw(&mut ctx);
    }

    /// Refresh the outline buffer; returns its length in floats
    pub fn extract_outlines(&mut self) -> usize {
        self.core.extract_outlines()
    }

    /// Pointer to the outline buffer (valid until the next extract)
    pub fn outline_ptr(&self) -> *const f32 {
        self.core.outline_ptr()
    }

    pub fn outline_len(&self) -> usize {
        self.core.outline_len()
    }
}

impl World {
    pub fn core(&self) -> &WorldCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut WorldCore {
        &mut self.core
    }
}
