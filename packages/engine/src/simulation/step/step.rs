use tracing::trace;

use super::{LifeCore, PerfTimer, StepStats};

pub(super) fn step(core: &mut LifeCore) -> StepStats {
    let timer = PerfTimer::start();

    let transition = core.grid.step();
    core.generation += 1;
    let cycle_detected = core.history.record(core.grid.alive_checksum());

    let stats = StepStats {
        step_ms: timer.elapsed_ms(),
        generation: core.generation,
        population: core.grid.population(),
        births: transition.births,
        deaths: transition.deaths,
        cycle_detected,
    };
    trace!(
        generation = stats.generation,
        population = stats.population,
        births = stats.births,
        deaths = stats.deaths,
        cycle_detected,
        "step"
    );

    core.last_stats = stats;
    stats
}

pub(super) fn step_n(core: &mut LifeCore, n: u32) -> StepStats {
    for _ in 0..n {
        step(core);
    }
    core.last_stats
}
