//! Buoyancy Engine - Verlet soft-body simulation in WASM
//!
//! Point-masses tied by distance constraints form polygon bodies that
//! collide through a separating-axis test. Gravity tweens between a buoyant
//! and a gravity mode; the pointer drags bodies or stirs an ambient current.
//!
//! Architecture:
//! - utils/       - logging macros, RNG
//! - math/        - 2D vector
//! - physics/     - point-masses, constraints, bodies, SAT collision
//! - domain/      - settings, presets, scene vocabulary
//! - simulation/  - world orchestration, scenes, rendering, JS facade

// Macros first so every later module can log
#[macro_use]
pub mod utils;
pub mod math;
pub mod physics;
pub mod domain;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(feature = "parallel")]
pub use wasm_bindgen_rayon::init_thread_pool;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("buoyancy engine {} initialized", version());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::{EngineSettings, EnvironmentMode, Preset, SceneKind};
pub use math::Vec2;
pub use simulation::{BodyDef, World, WorldCore};
#[cfg(target_arch = "wasm32")]
pub use simulation::Simulation;
