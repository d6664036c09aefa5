//! Spatial storage for the board.

pub mod grid;
