//! LifeCore - orchestration over the toroidal Grid
//!
//! The grid owns the cells and the transition rule. LifeCore adds what a
//! shell needs around it:
//! - generation counter and checksum history (cycle detection)
//! - seeded RNG so `randomize()` is reproducible
//! - the highlighted coordinate (display only, never read by `step()`)
//! - render extraction into an ABGR color buffer
//!
//! `Life` in facade.rs is the wasm-bindgen wrapper the JS shell talks to.
//! Every mutating call takes `&mut self`; callers sharing a core across
//! threads wrap it in their own lock.

use rand::RngCore;
use rand_chacha::ChaCha8Rng;

use crate::cell::{Cell, Coord};
use crate::config::LifeConfig;
use crate::domain::palette::AgePalette;
use crate::error::Result;
use crate::grid::Grid;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/step_stats.rs"]
mod step_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/history.rs"]
mod history;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::Life;
pub use step_stats::StepStats;

use history::ChecksumHistory;
use perf_timer::PerfTimer;

/// The simulation
#[derive(Debug, Clone)]
pub struct LifeCore {
    grid: Grid,
    highlighted: Option<Coord>,

    // State
    generation: u64,
    seed: u64,
    rng: ChaCha8Rng,
    history: ChecksumHistory,
    last_stats: StepStats,

    // Render hints
    palette: AgePalette,
    colors: Vec<u32>,
}

impl LifeCore {
    /// Create an all-dead board with default settings
    pub fn new(width: u32, height: u32) -> Result<Self> {
        init::create_life_core(&LifeConfig { width, height, ..LifeConfig::default() })
    }

    pub fn from_config(config: &LifeConfig) -> Result<Self> {
        init::create_life_core(config)
    }

    pub fn from_config_json(json: &str) -> Result<Self> {
        init::create_from_json(json)
    }

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn height(&self) -> u32 { self.grid.height() }

    pub fn size(&self) -> usize { self.grid.size() }

    pub fn generation(&self) -> u64 { self.generation }

    pub fn population(&self) -> u32 { self.grid.population() }

    pub fn grid(&self) -> &Grid { &self.grid }

    pub fn seed(&self) -> u64 { self.seed }

    // === Cell API ===

    pub fn get(&self, row: u32, col: u32) -> Result<Cell> {
        self.grid.get(row, col)
    }

    pub fn set_alive(&mut self, row: u32, col: u32, alive: bool) -> Result<()> {
        commands::set_alive(self, row, col, alive)
    }

    /// Flip one cell; returns its new state
    pub fn toggle(&mut self, row: u32, col: u32) -> Result<bool> {
        commands::toggle(self, row, col)
    }

    pub fn neighbor_count(&self, row: u32, col: u32) -> Result<u8> {
        self.grid.neighbor_count(row, col)
    }

    // === Board-wide commands ===

    /// Kill every cell and reset the generation counter
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Fill from the core's seeded RNG
    pub fn randomize(&mut self) {
        commands::randomize(self)
    }

    /// Fill from a caller-supplied RNG
    pub fn randomize_with<R: RngCore + ?Sized>(&mut self, rng: &mut R) {
        commands::randomize_with(self, rng)
    }

    pub fn reseed(&mut self, seed: u64) {
        settings::reseed(self, seed)
    }

    /// Stamp a named pattern at `origin` (wraps around edges)
    pub fn apply_pattern(&mut self, name: &str, origin: Coord, clear_first: bool) -> Result<usize> {
        commands::apply_pattern(self, name, origin, clear_first)
    }

    pub fn load_cells(&mut self, cells: &[u8]) -> Result<()> {
        commands::load_cells(self, cells)
    }

    pub fn load_plaintext(&mut self, text: &str, origin: Coord) -> usize {
        commands::load_plaintext(self, text, origin)
    }

    // === Highlight ===

    pub fn set_highlighted(&mut self, coord: Option<Coord>) {
        commands::set_highlighted(self, coord)
    }

    pub fn highlighted(&self) -> Option<Coord> {
        self.highlighted
    }

    // === Stepping ===

    /// Advance one generation
    pub fn step(&mut self) -> StepStats {
        step::step(self)
    }

    pub fn step_n(&mut self, n: u32) -> StepStats {
        step::step_n(self, n)
    }

    /// Stats of the most recent step (zeros before the first one)
    pub fn last_stats(&self) -> StepStats {
        self.last_stats
    }

    pub fn checksum(&self) -> u64 {
        self.grid.checksum()
    }

    // === Render API ===

    pub fn palette(&self) -> AgePalette {
        settings::palette(self)
    }

    pub fn set_palette(&mut self, palette: AgePalette) -> Result<()> {
        settings::set_palette(self, palette)
    }

    /// Refresh and return the ABGR color buffer
    pub fn extract_colors(&mut self) -> &[u32] {
        render_extract::extract_colors(self)
    }

    pub fn colors_len_bytes(&self) -> usize {
        render_extract::colors_len_bytes(self)
    }

    /// Get pointer to alive plane (for JS rendering)
    pub fn alive_ptr(&self) -> *const u8 {
        self.grid.alive_ptr()
    }

    /// Get pointer to streak plane (for JS age shading)
    pub fn streak_ptr(&self) -> *const i32 {
        self.grid.streak_ptr()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
