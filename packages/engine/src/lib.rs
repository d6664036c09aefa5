//! Life Engine - Conway's Game of Life on a toroidal grid, compiled to WASM
//!
//! The engine owns the board and the transition rule. Drawing, input and
//! the animation timer live in the JS shell, which calls `step()` on an
//! interval and reads cell state back for display.
//!
//! Architecture:
//! - domain/      - Cell values, the B3/S23 rule, patterns, age palette
//! - spatial/     - Double-buffered SoA grid
//! - simulation/  - LifeCore orchestration + wasm facade
//! - config       - JSON configuration
//! - error        - Error taxonomy

pub mod config;
pub mod domain;
pub mod error;
pub mod simulation;
pub mod spatial;

// Compatibility re-exports (short paths for shell code and tests)
pub use spatial::grid;
pub use domain::cell;
pub use domain::patterns;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

#[cfg(target_arch = "wasm32")]
fn install_logger() {
    use std::sync::Once;

    static LOGGER: Once = Once::new();
    LOGGER.call_once(tracing_wasm::set_as_global_default);
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    #[cfg(target_arch = "wasm32")]
    {
        install_logger();
        web_sys::console::log_1(&"🦀 Life WASM Engine initialized!".into());
    }
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use cell::{Cell, Coord, STREAK_UNSET};
pub use config::LifeConfig;
pub use domain::palette::AgePalette;
pub use error::{LifeError, Result};
pub use simulation::{Life, LifeCore, StepStats};
