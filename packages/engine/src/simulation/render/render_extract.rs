#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::LifeCore;

/// Fill the color buffer from the current generation.
/// PARALLEL: per-pixel fill with Rayon when the feature is enabled
pub(super) fn extract_colors(core: &mut LifeCore) -> &[u32] {
    let size = core.grid.size();
    let palette = core.palette;
    core.colors.resize(size, palette.background);

    let grid = &core.grid;
    #[cfg(feature = "parallel")]
    {
        core.colors
            .par_iter_mut()
            .enumerate()
            .for_each(|(idx, pixel)| *pixel = palette.cell_color(grid.cell_idx(idx)));
    }
    #[cfg(not(feature = "parallel"))]
    {
        for (idx, pixel) in core.colors.iter_mut().enumerate() {
            *pixel = palette.cell_color(grid.cell_idx(idx));
        }
    }

    // Highlight overlay; an out-of-range coordinate is simply not drawn
    if let Some(coord) = core.highlighted {
        if let Ok(idx) = core.grid.checked_index(coord.row, coord.col) {
            core.colors[idx] = palette.highlight;
        }
    }

    &core.colors
}

pub(super) fn colors_len_bytes(core: &LifeCore) -> usize {
    core.colors.len() * std::mem::size_of::<u32>()
}
