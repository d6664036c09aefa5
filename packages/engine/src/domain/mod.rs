//! Domain values: cells, the transition rule, seed patterns and the age palette.

pub mod cell;
pub mod palette;
pub mod patterns;
pub mod rules;
