use life_engine::{Cell, Coord, LifeCore, LifeError, STREAK_UNSET};

fn live_set(core: &LifeCore) -> Vec<Coord> {
    let mut cells: Vec<Coord> = core.grid().live_cells().collect();
    cells.sort_by_key(|c| (c.row, c.col));
    cells
}

#[test]
fn beacon_blinks_with_period_two() {
    let mut core = LifeCore::new(10, 10).expect("grid");
    core.apply_pattern("Beacon", Coord::new(3, 3), true).expect("pattern");
    let start = live_set(&core);
    assert_eq!(start.len(), 8);

    let first = core.step();
    assert_eq!(first.population(), 6);
    core.step();
    assert_eq!(live_set(&core), start);
}

#[test]
fn toad_population_alternates() {
    let mut core = LifeCore::new(8, 8).expect("grid");
    core.apply_pattern("toad", Coord::new(3, 2), true).expect("pattern");
    for _ in 0..4 {
        assert_eq!(core.step().population(), 6);
    }
    assert!(core.last_stats().cycle_detected());
}

#[test]
fn pulsar_has_period_three() {
    let mut core = LifeCore::new(17, 17).expect("grid");
    core.apply_pattern("Pulsar", Coord::new(2, 2), true).expect("pattern");
    let start = core.grid().alive_checksum();

    core.step();
    assert_ne!(core.grid().alive_checksum(), start);
    core.step_n(2);
    assert_eq!(core.grid().alive_checksum(), start);
}

#[test]
fn lwss_crosses_the_seam_intact() {
    let mut core = LifeCore::new(12, 12).expect("grid");
    core.apply_pattern("LWSS", Coord::new(4, 6), true).expect("pattern");

    // One full lap of a 12-wide torus at c/2 takes 24 generations
    let start = live_set(&core);
    core.step_n(24);
    assert_eq!(live_set(&core), start);
}

#[test]
fn errors_leave_the_board_intact() {
    let mut core = LifeCore::new(4, 4).expect("grid");
    core.set_alive(3, 3, true).expect("in range");
    let before = core.checksum();

    assert!(matches!(core.get(4, 4), Err(LifeError::IndexOutOfBounds { .. })));
    assert!(matches!(core.set_alive(4, 0, false), Err(LifeError::IndexOutOfBounds { .. })));
    assert!(matches!(core.load_cells(&[0; 3]), Err(LifeError::DimensionMismatch { .. })));
    assert_eq!(core.checksum(), before);
    assert_eq!(core.get(3, 3), Ok(Cell::NEWBORN));
}

#[test]
fn set_dead_resets_streak_regardless_of_age() {
    let mut core = LifeCore::new(6, 6).expect("grid");
    core.apply_pattern("block", Coord::new(1, 1), true).expect("pattern");
    core.step_n(5);
    assert_eq!(core.get(1, 1).expect("cell").streak(), Some(5));

    core.set_alive(1, 1, false).expect("in range");
    assert_eq!(core.get(1, 1).expect("cell").alive_streak, STREAK_UNSET);
}
