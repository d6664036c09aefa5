use wasm_bindgen::prelude::*;

use crate::cell::Coord;
use crate::domain::palette::AgePalette;
use crate::domain::patterns;
use crate::error::LifeError;

use super::step_stats::StepStats;
use super::LifeCore;

fn js_error(err: LifeError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct Life {
    core: LifeCore,
}

#[wasm_bindgen]
impl Life {
    /// Create an all-dead board; throws on a zero dimension
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Result<Life, JsValue> {
        let core = LifeCore::new(width, height).map_err(js_error)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: &str) -> Result<Life, JsValue> {
        let core = LifeCore::from_config_json(json).map_err(js_error)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u64 { self.core.generation() }

    #[wasm_bindgen(getter)]
    pub fn population(&self) -> u32 { self.core.population() }

    #[wasm_bindgen(getter)]
    pub fn seed(&self) -> u64 { self.core.seed() }

    // === CELL API ===

    pub fn is_alive(&self, row: u32, col: u32) -> Result<bool, JsValue> {
        let cell = self.core.get(row, col).map_err(js_error)?;
        Ok(cell.alive)
    }

    /// Generations alive, -1 for a dead cell
    pub fn streak(&self, row: u32, col: u32) -> Result<i32, JsValue> {
        let cell = self.core.get(row, col).map_err(js_error)?;
        Ok(cell.alive_streak)
    }

    pub fn set_alive(&mut self, row: u32, col: u32, alive: bool) -> Result<(), JsValue> {
        self.core.set_alive(row, col, alive).map_err(js_error)
    }

    /// Flip a cell (click handler); returns the new state
    pub fn toggle(&mut self, row: u32, col: u32) -> Result<bool, JsValue> {
        self.core.toggle(row, col).map_err(js_error)
    }

    pub fn neighbor_count(&self, row: u32, col: u32) -> Result<u8, JsValue> {
        self.core.neighbor_count(row, col).map_err(js_error)
    }

    // === BOARD API ===

    pub fn clear(&mut self) {
        self.core.clear();
    }

    pub fn randomize(&mut self) {
        self.core.randomize();
    }

    pub fn reseed(&mut self, seed: u64) {
        self.core.reseed(seed);
    }

    pub fn apply_pattern(&mut self, name: &str, row: u32, col: u32, clear_first: bool) -> Result<u32, JsValue> {
        let stamped = self
            .core
            .apply_pattern(name, Coord::new(row, col), clear_first)
            .map_err(js_error)?;
        Ok(u32::try_from(stamped).unwrap_or(u32::MAX))
    }

    pub fn pattern_names(&self) -> Vec<String> {
        patterns::names().map(str::to_string).collect()
    }

    /// Replace the board from a row-major byte array (nonzero = alive)
    pub fn load_cells(&mut self, cells: &[u8]) -> Result<(), JsValue> {
        self.core.load_cells(cells).map_err(js_error)
    }

    pub fn load_plaintext(&mut self, text: &str, row: u32, col: u32) -> u32 {
        let stamped = self.core.load_plaintext(text, Coord::new(row, col));
        u32::try_from(stamped).unwrap_or(u32::MAX)
    }

    // === HIGHLIGHT API ===

    pub fn set_highlighted(&mut self, row: u32, col: u32) {
        self.core.set_highlighted(Some(Coord::new(row, col)));
    }

    pub fn clear_highlighted(&mut self) {
        self.core.set_highlighted(None);
    }

    pub fn highlighted_row(&self) -> Option<u32> {
        self.core.highlighted().map(|c| c.row)
    }

    pub fn highlighted_col(&self) -> Option<u32> {
        self.core.highlighted().map(|c| c.col)
    }

    // === STEP API ===

    /// Step the simulation forward one generation
    pub fn step(&mut self) -> StepStats {
        self.core.step()
    }

    pub fn step_n(&mut self, n: u32) -> StepStats {
        self.core.step_n(n)
    }

    pub fn last_step_stats(&self) -> StepStats {
        self.core.last_stats()
    }

    pub fn checksum(&self) -> u64 {
        self.core.checksum()
    }

    // === RENDERING API ===
    // Pointers move on every step (double buffer swap); re-read them each frame.

    /// Get pointer to alive plane (Uint8Array view, width*height bytes)
    pub fn alive_ptr(&self) -> *const u8 {
        self.core.alive_ptr()
    }

    /// Get pointer to streak plane (Int32Array view, width*height words)
    pub fn streak_ptr(&self) -> *const i32 {
        self.core.streak_ptr()
    }

    pub fn cells_len(&self) -> usize {
        self.core.size()
    }

    /// Refresh the ABGR color buffer and return its pointer
    pub fn extract_colors(&mut self) -> *const u32 {
        self.core.extract_colors().as_ptr()
    }

    pub fn colors_len_bytes(&self) -> usize {
        self.core.colors_len_bytes()
    }

    pub fn set_palette_json(&mut self, json: &str) -> Result<(), JsValue> {
        let palette: AgePalette = serde_json::from_str(json)
            .map_err(|e| js_error(e.into()))?;
        self.core.set_palette(palette).map_err(js_error)
    }
}
