#![cfg(target_arch = "wasm32")]

use buoyancy_engine::World;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn unknown_names_are_js_errors() {
    assert!(World::new_with_preset(400.0, 300.0, "moon").is_err());
    let mut world = World::new(400.0, 300.0);
    assert!(world.init_scene("garden").is_err());
    assert!(world.load_settings_json("{\"iterations\": 0}".to_string()).is_err());
}

#[wasm_bindgen_test]
fn steps_in_the_browser_clock() {
    let mut world = World::new(400.0, 300.0);
    world.init_scene("cupola").unwrap();
    world.enable_perf_metrics(true);
    world.step(js_sys::Date::now());
    assert!(world.get_perf_stats().pairs_tested() > 0);
}
