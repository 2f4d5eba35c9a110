//! World - Verlet soft-body simulation for one canvas
//!
//! The world owns every body plus the flattened point-mass and constraint
//! lists the per-frame passes iterate over. It only orchestrates:
//!
//! - step/     - frame pipeline (integration, relaxation, collision)
//! - pointer/  - drag picking, drag pull and the ambient current
//! - tween/    - gravity transitions between presentation modes
//! - bodies/   - body factories and validation
//! - scenes/   - built-in layouts for the pool and cupola pages
//! - render/   - canvas drawing and flat outline export for JS
//! - host/     - DOM event + animation frame binding (wasm32 only)

use crate::domain::{EngineSettings, EnvironmentMode, Preset, SceneKind};
use crate::math::Vec2;
use crate::physics::{Body, BodyId, Constraint, PointMass};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "bodies/bodies.rs"]
mod bodies;
#[path = "step/integrate.rs"]
mod integrate;
#[path = "step/relax.rs"]
mod relax;
#[path = "step/step.rs"]
mod step;
#[path = "pointer/pointer.rs"]
mod pointer;
#[path = "tween/gravity_tween.rs"]
mod gravity_tween;
#[path = "scenes/scenes.rs"]
mod scenes;
#[path = "render/surface.rs"]
mod surface;
#[path = "render/render_extract.rs"]
mod render_extract;
#[cfg(target_arch = "wasm32")]
#[path = "host/host.rs"]
mod host;
mod facade;

pub use bodies::BodyDef;
pub use facade::World;
pub use gravity_tween::GravityTween;
#[cfg(target_arch = "wasm32")]
pub use host::Simulation;
pub use perf_stats::PerfStats;
pub use pointer::PointerState;
pub use scenes::{CupolaScene, PoolScene, SceneLayout};
pub use surface::RasterSurface;

use perf_timer::PerfTimer;

/// The simulation world
pub struct WorldCore {
    bodies: Vec<Body>,
    vertices: Vec<PointMass>,
    constraints: Vec<Constraint>,

    // Settings
    settings: EngineSettings,
    preset: Preset,
    width: f32,
    height: f32,

    // Interaction
    pointer: PointerState,
    drag: Option<usize>,
    gravity_tween: GravityTween,
    mode: EnvironmentMode,

    // State
    scene: SceneKind,
    layout: Option<Box<dyn SceneLayout>>,
    rng_seed: u32,
    rng_state: u32,
    frame: u64,

    // Render export
    outline_buffer: Vec<f32>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    /// Create an empty world using the pool preset
    pub fn new(width: f32, height: f32) -> Self {
        init::create_world_core(width, height, Preset::Pool)
    }

    pub fn with_preset(width: f32, height: f32, preset: Preset) -> Self {
        init::create_world_core(width, height, preset)
    }

    pub fn width(&self) -> f32 { self.width }

    pub fn height(&self) -> f32 { self.height }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn preset(&self) -> Preset { self.preset }

    pub fn mode(&self) -> EnvironmentMode { self.mode }

    pub fn scene(&self) -> SceneKind { self.scene }

    pub fn bodies(&self) -> &[Body] { &self.bodies }

    pub fn vertices(&self) -> &[PointMass] { &self.vertices }

    pub fn constraints(&self) -> &[Constraint] { &self.constraints }

    pub fn body_count(&self) -> usize { self.bodies.len() }

    pub fn vertex_count(&self) -> usize { self.vertices.len() }

    pub fn pointer(&self) -> PointerState { self.pointer }

    /// Point-mass currently pulled by the pointer
    pub fn drag_target(&self) -> Option<usize> { self.drag }

    // === SETTINGS ===

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: EngineSettings) -> Result<(), String> {
        settings::set_settings(self, settings)
    }

    pub fn load_settings_json(&mut self, json: &str) -> Result<(), String> {
        settings::load_settings_json(self, json)
    }

    pub fn settings_json(&self) -> String {
        self.settings.to_json()
    }

    pub fn gravity(&self) -> f32 {
        self.settings.gravity
    }

    /// Tween gravity to `target`; the tween starts on the next `step`.
    /// A non-positive duration applies `target` immediately.
    pub fn set_gravity(&mut self, target: f32, duration_ms: f64) {
        settings::set_gravity(self, target, duration_ms, None);
    }

    /// Same as `set_gravity` with an explicit start timestamp
    pub fn set_gravity_at(&mut self, target: f32, duration_ms: f64, now_ms: f64) {
        settings::set_gravity(self, target, duration_ms, Some(now_ms));
    }

    pub fn gravity_tween(&self) -> &GravityTween {
        &self.gravity_tween
    }

    /// Switch presentation mode (tweens gravity, toggles the ambient current)
    pub fn set_mode(&mut self, mode: EnvironmentMode) {
        settings::set_mode(self, mode);
    }

    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    pub fn get_perf_stats(&self) -> PerfStats {
        self.perf_stats.clone()
    }

    // === BODIES ===

    pub fn add_body(&mut self, def: BodyDef) -> Result<BodyId, String> {
        bodies::add_body(self, def)
    }

    /// Rectangle with its top-left corner at (x, y)
    pub fn create_rectangle(&mut self, x: f32, y: f32, w: f32, h: f32, mass: f32, color: &str) -> Result<BodyId, String> {
        bodies::create_rectangle(self, x, y, w, h, mass, color)
    }

    /// Regular polygon approximating a circle; `sides == 0` means 10
    pub fn create_circle(&mut self, cx: f32, cy: f32, radius: f32, sides: u32, mass: f32, color: &str) -> Result<BodyId, String> {
        bodies::create_circle(self, cx, cy, radius, sides, mass, color)
    }

    /// Remove every body and any drag in progress
    pub fn clear(&mut self) {
        bodies::clear(self);
    }

    // === SCENES ===

    /// Resize the canvas and populate it with a built-in layout
    pub fn init_scene(&mut self, width: f32, height: f32, scene: SceneKind) {
        scenes::init_scene(self, width, height, scene);
    }

    /// Clear and populate with a caller-supplied layout. The world keeps
    /// the layout so `reset` rebuilds it.
    pub fn populate_with(&mut self, layout: impl SceneLayout + 'static) {
        scenes::populate_with(self, Box::new(layout));
    }

    /// Rebuild the current scene (built-in or custom) from its seed
    pub fn reset(&mut self) {
        scenes::reset(self);
    }

    pub fn set_seed(&mut self, seed: u32) {
        init::set_seed(self, seed);
    }

    /// Uniform random float in `[lo, lo + span)` from the world's RNG
    pub fn random_range(&mut self, lo: f32, span: f32) -> f32 {
        crate::utils::random::range_f32(&mut self.rng_state, lo, span)
    }

    // === FRAME ===

    /// Advance one animation frame. `now_ms` is the host's frame timestamp.
    pub fn step(&mut self, now_ms: f64) {
        step::step(self, now_ms);
    }

    /// Run the configured number of relaxation + collision passes
    pub fn relax_and_collide(&mut self) {
        relax::relax_and_collide(self);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    // === POINTER ===

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        pointer::pointer_move(self, x, y);
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        pointer::pointer_down(self, x, y);
    }

    /// Release (also used when the pointer leaves the canvas)
    pub fn pointer_up(&mut self) {
        pointer::pointer_up(self);
    }

    // === RENDER ===

    pub fn draw(&self, surface: &mut dyn RasterSurface) {
        render_extract::draw(self, surface);
    }

    /// Write every outline into the flat export buffer; returns its length
    pub fn extract_outlines(&mut self) -> usize {
        render_extract::extract_outlines(self)
    }

    pub fn outline_ptr(&self) -> *const f32 {
        self.outline_buffer.as_ptr()
    }

    pub fn outline_len(&self) -> usize {
        self.outline_buffer.len()
    }

    pub fn outline_buffer(&self) -> &[f32] {
        &self.outline_buffer
    }

    pub fn body_centroid(&self, id: BodyId) -> Option<Vec2> {
        self.bodies.get(id).map(|b| b.centroid(&self.vertices))
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
