use crate::domain::{EnvironmentMode, Preset, SceneKind};

use super::gravity_tween::GravityTween;
use super::perf_stats::PerfStats;
use super::pointer::PointerState;
use super::WorldCore;

const DEFAULT_SEED: u32 = 12345;

pub(super) fn create_world_core(width: f32, height: f32, preset: Preset) -> WorldCore {
    WorldCore {
        bodies: Vec::new(),
        vertices: Vec::new(),
        constraints: Vec::new(),
        settings: preset.settings(),
        preset,
        width,
        height,
        pointer: PointerState::default(),
        drag: None,
        gravity_tween: GravityTween::idle(),
        mode: EnvironmentMode::Buoyant,
        scene: SceneKind::Empty,
        layout: None,
        rng_seed: DEFAULT_SEED,
        rng_state: DEFAULT_SEED,
        frame: 0,
        outline_buffer: Vec::with_capacity(1024),
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}

pub(super) fn set_seed(world: &mut WorldCore, seed: u32) {
    // xorshift32 is stuck at zero
    let seed = if seed == 0 { DEFAULT_SEED } else { seed };
    world.rng_seed = seed;
    world.rng_state = seed;
}
