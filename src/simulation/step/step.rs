use crate::domain::EnvironmentMode;

use super::integrate::integrate_all;
use super::pointer::{apply_ambient_current, apply_drag, pick_drag_target};
use super::relax::relax_and_collide;
use super::{PerfTimer, WorldCore};

pub(super) fn step(world: &mut WorldCore, now_ms: f64) {
    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
        world.perf_stats.body_count = world.bodies.len() as u32;
        world.perf_stats.vertex_count = world.vertices.len() as u32;
        world.perf_stats.constraint_count = world.constraints.len() as u32;
    }
    let step_start = PerfTimer::start_if(perf_on);

    // === GRAVITY TWEEN ===
    if let Some(g) = world.gravity_tween.sample(now_ms) {
        world.settings.gravity = g;
    }

    // === AMBIENT CURRENT ===
    // Only in buoyant mode, and never while the button is held
    let t0 = PerfTimer::start_if(perf_on);
    if world.mode == EnvironmentMode::Buoyant && !world.pointer.is_down {
        apply_ambient_current(world);
    }
    world.perf_stats.current_ms = PerfTimer::elapsed_ms_or_zero(t0);

    // === INTEGRATION ===
    let t0 = PerfTimer::start_if(perf_on);
    integrate_all(world);
    world.perf_stats.integrate_ms = PerfTimer::elapsed_ms_or_zero(t0);

    // === RELAXATION + COLLISION ===
    let t0 = PerfTimer::start_if(perf_on);
    let counts = relax_and_collide(world);
    world.perf_stats.relax_ms = PerfTimer::elapsed_ms_or_zero(t0);
    if perf_on {
        world.perf_stats.pairs_tested = counts.pairs_tested;
        world.perf_stats.contacts_resolved = counts.contacts_resolved;
    }

    // === POINTER DRAG ===
    let t0 = PerfTimer::start_if(perf_on);
    pick_drag_target(world);
    apply_drag(world);
    world.perf_stats.drag_ms = PerfTimer::elapsed_ms_or_zero(t0);

    world.frame += 1;
    world.perf_stats.step_ms = PerfTimer::elapsed_ms_or_zero(step_start);
}
