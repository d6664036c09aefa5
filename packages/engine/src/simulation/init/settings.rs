use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::domain::palette::AgePalette;
use crate::error::Result;

use super::LifeCore;

pub(super) fn reseed(core: &mut LifeCore, seed: u64) {
    core.seed = seed;
    core.rng = ChaCha8Rng::seed_from_u64(seed);
    debug!(seed, "rng reseeded");
}

pub(super) fn palette(core: &LifeCore) -> AgePalette {
    core.palette
}

pub(super) fn set_palette(core: &mut LifeCore, palette: AgePalette) -> Result<()> {
    palette.validate()?;
    core.palette = palette;
    Ok(())
}
