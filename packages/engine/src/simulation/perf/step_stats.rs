use wasm_bindgen::prelude::*;

/// Snapshot of the most recent `step()`
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepStats {
    pub(super) step_ms: f64,
    pub(super) generation: u64,
    pub(super) population: u32,
    pub(super) births: u32,
    pub(super) deaths: u32,
    pub(super) cycle_detected: bool,
}

#[wasm_bindgen]
impl StepStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u64 { self.generation }
    #[wasm_bindgen(getter)]
    pub fn population(&self) -> u32 { self.population }
    #[wasm_bindgen(getter)]
    pub fn births(&self) -> u32 { self.births }
    #[wasm_bindgen(getter)]
    pub fn deaths(&self) -> u32 { self.deaths }

    /// The alive plane repeated one of the last few generations
    #[wasm_bindgen(getter)]
    pub fn cycle_detected(&self) -> bool { self.cycle_detected }
}
