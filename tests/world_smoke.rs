use buoyancy_engine::{EnvironmentMode, Preset, SceneKind, World, WorldCore};

#[test]
fn facade_pool_scene_runs() {
    let mut world = World::new(800.0, 600.0);
    world.init_scene("pool").unwrap();
    assert_eq!(world.body_count(), 71);

    world.enable_perf_metrics(true);
    for i in 0..30 {
        world.step(i as f64 * 16.0);
    }
    let stats = world.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.body_count(), 71);
    assert_eq!(world.frame(), 30);
}

#[test]
fn facade_spawn_handles() {
    let mut world = World::new(600.0, 400.0);
    assert_eq!(world.spawn_rectangle(10.0, 10.0, 40.0, 30.0, 4.0, "#fff"), 1);
    assert_eq!(world.spawn_circle(200.0, 200.0, 20.0, 0, 2.0, "#0ff"), 2);
    // Rejected bodies report 0 and leave the world untouched
    assert_eq!(world.spawn_circle(200.0, 200.0, 20.0, 8, -1.0, "#0ff"), 0);
    assert_eq!(world.body_count(), 2);
    assert_eq!(world.vertex_count(), 14);
    assert_eq!(world.body_color(1).as_deref(), Some("#0ff"));
    assert_eq!(world.body_color(5), None);
}

#[test]
fn facade_mode_toggle_reaches_target_gravity() {
    let mut world = World::new_with_preset(600.0, 400.0, "cupola").unwrap();
    assert!(world.buoyant());
    world.set_mode(false);
    world.step(100.0);
    world.step(800.0);
    assert_eq!(world.gravity(), 0.12);
    world.set_mode(true);
    world.step(900.0);
    world.step(1100.0);
    assert_eq!(world.gravity(), 0.0);
}

#[test]
fn facade_outline_buffer() {
    let mut world = World::new(600.0, 400.0);
    world.spawn_rectangle(100.0, 100.0, 50.0, 50.0, 1.0, "#fff");
    let len = world.extract_outlines();
    assert_eq!(len, 10);
    assert_eq!(world.outline_len(), 10);
    assert!(!world.outline_ptr().is_null());
}

#[test]
fn settings_round_trip_through_json() {
    let mut world = World::new(600.0, 400.0);
    let json = world.get_settings_json();
    assert!(json.contains("\"mouseRadius\":80.0"));
    world.load_settings_json(r#"{"mouseRadius": 40, "iterations": 3}"#.to_string()).unwrap();
    assert_eq!(world.core().settings().mouse_radius, 40.0);
    assert_eq!(world.core().settings().iterations, 3);
}

#[test]
fn core_cupola_scene_under_gravity() {
    let mut core = WorldCore::with_preset(700.0, 500.0, Preset::Cupola);
    core.init_scene(700.0, 500.0, SceneKind::Cupola);
    core.set_mode(EnvironmentMode::Gravity);
    for i in 0..240 {
        core.step(i as f64 * 16.0);
    }
    assert_eq!(core.gravity(), 0.12);
    for v in core.vertices() {
        assert!(v.position.is_finite());
        // Collision pushes may briefly overshoot the clamped walls
        assert!((-50.0..=550.0).contains(&v.position.y));
    }
}
