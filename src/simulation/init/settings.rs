use crate::domain::{EngineSettings, EnvironmentMode};

use super::WorldCore;

pub(super) fn set_settings(world: &mut WorldCore, settings: EngineSettings) -> Result<(), String> {
    settings.validate()?;
    // Incoming gravity wins over a transition in flight
    world.gravity_tween.cancel();
    world.settings = settings;
    Ok(())
}

/// Apply a partial settings object over the world's current settings.
pub(super) fn load_settings_json(world: &mut WorldCore, json: &str) -> Result<(), String> {
    let patch: serde_json::Value = serde_json::from_str(json).map_err(|e| e.to_string())?;
    let sets_gravity = patch.get("gravity").is_some();
    let settings = world.settings.merge_value(patch)?;
    if sets_gravity {
        world.gravity_tween.cancel();
    }
    world.settings = settings;
    Ok(())
}

pub(super) fn set_gravity(world: &mut WorldCore, target: f32, duration_ms: f64, now_ms: Option<f64>) {
    world.gravity_tween.cancel();
    if duration_ms.is_nan() || duration_ms <= 0.0 {
        world.settings.gravity = target;
        return;
    }
    world
        .gravity_tween
        .begin(world.settings.gravity, target, duration_ms, now_ms);
}

pub(super) fn set_mode(world: &mut WorldCore, mode: EnvironmentMode) {
    world.mode = mode;
    let (target, duration) = match mode {
        EnvironmentMode::Buoyant => (0.0, world.settings.to_buoyant_ms),
        EnvironmentMode::Gravity => (world.settings.mode_gravity, world.settings.to_gravity_ms),
    };
    set_gravity(world, target, duration, None);
}

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}
