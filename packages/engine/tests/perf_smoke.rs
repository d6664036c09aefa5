use life_engine::Life;

#[test]
fn perf_smoke_step() {
    let mut life = Life::new(128, 64).expect("valid dimensions");
    life.randomize();
    let stats = life.step();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.generation(), 1);
    assert_eq!(stats.population(), life.population());
}

#[test]
fn perf_smoke_many_steps_on_large_board() {
    let mut life = Life::new(512, 512).expect("valid dimensions");
    life.reseed(99);
    life.randomize();
    let stats = life.step_n(10);
    assert_eq!(life.generation(), 10);
    assert_eq!(stats.generation(), 10);
    assert!(!life.extract_colors().is_null());
    assert_eq!(life.colors_len_bytes(), 512 * 512 * 4);
}
