//! Browser smoke tests: `wasm-pack test --headless --firefox packages/engine`
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use life_engine::Life;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn blinker_oscillates_through_the_facade() {
    let mut life = Life::new(5, 5).expect("valid dimensions");
    for col in 1..=3 {
        life.set_alive(2, col, true).expect("in range");
    }
    life.step();
    assert!(life.is_alive(1, 2).expect("in range"));
    assert!(!life.is_alive(2, 1).expect("in range"));
    assert_eq!(life.streak(2, 2).expect("in range"), 1);
}

#[wasm_bindgen_test]
fn out_of_range_throws() {
    let mut life = Life::new(3, 3).expect("valid dimensions");
    assert!(life.is_alive(3, 0).is_err());
    assert!(life.set_alive(0, 3, true).is_err());
    assert!(Life::new(0, 3).is_err());
}

#[wasm_bindgen_test]
fn config_and_patterns_from_js() {
    let mut life = Life::from_config(r#"{ "width": 16, "height": 16 }"#).expect("config");
    assert!(life.pattern_names().iter().any(|name| name == "Glider"));
    assert_eq!(life.apply_pattern("Glider", 0, 0, true).expect("pattern"), 5);
    assert_eq!(life.population(), 5);
}

#[wasm_bindgen_test]
fn init_is_idempotent() {
    life_engine::init();
    life_engine::init();
    assert_eq!(life_engine::version(), env!("CARGO_PKG_VERSION"));
}
