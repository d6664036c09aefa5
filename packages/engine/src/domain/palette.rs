//! Age palette - maps a cell's streak to an ABGR pixel
//!
//! Colors are ABGR packed (little-endian: 0xAABBGGRR -> bytes [RR,GG,BB,AA])
//! so the buffer can be copied straight into canvas ImageData.
//! Older cells fade: alpha drops by `fade_step` per generation, clamped to
//! `[min_alpha, max_alpha]`.

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use crate::error::{LifeError, Result};

// RGB(10,10,10) with alpha=255
pub const BG_COLOR: u32 = 0xFF0A0A0A;
// RGB(255,255,0) with alpha=255
pub const HIGHLIGHT_COLOR: u32 = 0xFF00FFFF;

#[inline]
pub const fn pack_abgr(r: u8, g: u8, b: u8, a: u8) -> u32 {
    ((a as u32) << 24) | ((b as u32) << 16) | ((g as u32) << 8) | (r as u32)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgePalette {
    pub alive_rgb: [u8; 3],
    pub background: u32,
    pub highlight: u32,
    pub max_alpha: u8,
    pub min_alpha: u8,
    pub fade_step: u8,
}

impl Default for AgePalette {
    fn default() -> Self {
        AgePalette {
            alive_rgb: [90, 90, 90],
            background: BG_COLOR,
            highlight: HIGHLIGHT_COLOR,
            max_alpha: 255,
            min_alpha: 64,
            fade_step: 16,
        }
    }
}

impl AgePalette {
    pub fn validate(&self) -> Result<()> {
        if self.min_alpha > self.max_alpha {
            return Err(LifeError::Config(format!(
                "min_alpha {} exceeds max_alpha {}",
                self.min_alpha, self.max_alpha
            )));
        }
        Ok(())
    }

    pub fn alpha_for_streak(&self, streak: i32) -> u8 {
        let age = streak.max(0) as u32;
        let faded = (self.max_alpha as u32).saturating_sub(age.saturating_mul(self.fade_step as u32));
        faded.clamp(self.min_alpha as u32, self.max_alpha as u32) as u8
    }

    pub fn cell_color(&self, cell: Cell) -> u32 {
        if !cell.alive {
            return self.background;
        }
        let [r, g, b] = self.alive_rgb;
        pack_abgr(r, g, b, self.alpha_for_streak(cell.alive_streak))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_fades_then_clamps() {
        let palette = AgePalette::default();
        assert_eq!(palette.alpha_for_streak(0), 255);
        assert_eq!(palette.alpha_for_streak(1), 239);
        assert_eq!(palette.alpha_for_streak(20), 64);
        assert_eq!(palette.alpha_for_streak(i32::MAX), 64);

        let mut last = u8::MAX;
        for age in 0..40 {
            let alpha = palette.alpha_for_streak(age);
            assert!(alpha <= last);
            last = alpha;
        }
    }

    #[test]
    fn dead_cells_use_background() {
        let palette = AgePalette::default();
        assert_eq!(palette.cell_color(Cell::DEAD), BG_COLOR);
        assert_eq!(palette.cell_color(Cell::NEWBORN), pack_abgr(90, 90, 90, 255));
    }

    #[test]
    fn inverted_alpha_range_is_rejected() {
        let palette = AgePalette { min_alpha: 200, max_alpha: 100, ..AgePalette::default() };
        assert!(matches!(palette.validate(), Err(LifeError::Config(_))));
    }
}
