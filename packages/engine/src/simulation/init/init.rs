use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use crate::config::LifeConfig;
use crate::error::Result;
use crate::grid::Grid;

use super::history::ChecksumHistory;
use super::step_stats::StepStats;
use super::LifeCore;

pub(super) fn create_life_core(config: &LifeConfig) -> Result<LifeCore> {
    config.palette.validate()?;
    let grid = Grid::new(config.width, config.height)?;
    let history = ChecksumHistory::starting_at(grid.alive_checksum());

    let mut core = LifeCore {
        grid,
        highlighted: None,
        generation: 0,
        seed: config.seed,
        rng: ChaCha8Rng::seed_from_u64(config.seed),
        history,
        last_stats: StepStats::default(),
        palette: config.palette,
        colors: Vec::new(),
    };

    if config.randomize_on_start {
        core.randomize();
    }

    debug!(
        width = config.width,
        height = config.height,
        seed = config.seed,
        randomized = config.randomize_on_start,
        "life core created"
    );
    Ok(core)
}

pub(super) fn create_from_json(json: &str) -> Result<LifeCore> {
    let config = LifeConfig::from_json(json).map_err(|err| {
        warn!(%err, "rejected life config");
        err
    })?;
    create_life_core(&config)
}
