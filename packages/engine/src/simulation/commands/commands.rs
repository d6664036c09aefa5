use rand::RngCore;
use tracing::debug;

use crate::cell::Coord;
use crate::domain::patterns;
use crate::error::{LifeError, Result};

use super::{LifeCore, StepStats};

/// Seed cycle detection with the board as it is now.
fn restart_history(core: &mut LifeCore) {
    let hash = core.grid.alive_checksum();
    core.history.restart(hash);
}

/// Forget run-level state after the board is replaced wholesale.
fn reset_run(core: &mut LifeCore) {
    core.generation = 0;
    restart_history(core);
    core.last_stats = StepStats::default();
}

pub(super) fn set_alive(core: &mut LifeCore, row: u32, col: u32, alive: bool) -> Result<()> {
    core.grid.set_alive(row, col, alive)?;
    restart_history(core);
    Ok(())
}

pub(super) fn toggle(core: &mut LifeCore, row: u32, col: u32) -> Result<bool> {
    let alive = !core.grid.get(row, col)?.alive;
    set_alive(core, row, col, alive)?;
    Ok(alive)
}

pub(super) fn clear(core: &mut LifeCore) {
    core.grid.clear();
    reset_run(core);
}

pub(super) fn randomize(core: &mut LifeCore) {
    core.grid.randomize_with(&mut core.rng);
    reset_run(core);
}

pub(super) fn randomize_with<R: RngCore + ?Sized>(core: &mut LifeCore, rng: &mut R) {
    core.grid.randomize_with(rng);
    reset_run(core);
}

pub(super) fn apply_pattern(
    core: &mut LifeCore,
    name: &str,
    origin: Coord,
    clear_first: bool,
) -> Result<usize> {
    let pattern = patterns::find(name).ok_or_else(|| LifeError::UnknownPattern(name.to_string()))?;

    if clear_first {
        clear(core);
    }
    let stamped = core.grid.stamp(origin, pattern.cells.iter().copied());
    restart_history(core);

    debug!(pattern = pattern.name, row = origin.row, col = origin.col, clear_first, "pattern applied");
    Ok(stamped)
}

pub(super) fn load_cells(core: &mut LifeCore, cells: &[u8]) -> Result<()> {
    core.grid.load_alive(cells)?;
    reset_run(core);
    Ok(())
}

pub(super) fn load_plaintext(core: &mut LifeCore, text: &str, origin: Coord) -> usize {
    let stamped = core.grid.stamp(origin, patterns::parse_plaintext(text));
    restart_history(core);
    stamped
}

pub(super) fn set_highlighted(core: &mut LifeCore, coord: Option<Coord>) {
    core.highlighted = coord;
}
