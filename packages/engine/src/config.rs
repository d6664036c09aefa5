//! LifeConfig - JSON settings handed over by the shell at startup

use serde::{Deserialize, Serialize};

use crate::domain::palette::AgePalette;
use crate::error::Result;
use crate::grid::Grid;

pub const DEFAULT_SIZE: u32 = 32;
pub const DEFAULT_SEED: u64 = 12345;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    pub width: u32,
    pub height: u32,
    pub seed: u64,
    /// Fill the board with random cells right after construction.
    pub randomize_on_start: bool,
    pub palette: AgePalette,
}

impl Default for LifeConfig {
    fn default() -> Self {
        LifeConfig {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            seed: DEFAULT_SEED,
            randomize_on_start: false,
            palette: AgePalette::default(),
        }
    }
}

impl LifeConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: LifeConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        Grid::check_dimensions(self.width, self.height)?;
        self.palette.validate()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LifeError;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = LifeConfig::from_json(r#"{ "width": 64 }"#).expect("config");
        assert_eq!(config.width, 64);
        assert_eq!(config.height, DEFAULT_SIZE);
        assert_eq!(config.seed, DEFAULT_SEED);
        assert_eq!(config.palette, AgePalette::default());
    }

    #[test]
    fn zero_dimension_is_rejected() {
        let err = LifeConfig::from_json(r#"{ "width": 0, "height": 8 }"#).unwrap_err();
        assert_eq!(err, LifeError::InvalidDimension { width: 0, height: 8 });
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = LifeConfig::from_json("{ width: }").unwrap_err();
        assert!(matches!(err, LifeError::Config(_)));
    }

    #[test]
    fn json_round_trips() {
        let config = LifeConfig { width: 10, height: 7, seed: 99, randomize_on_start: true, ..LifeConfig::default() };
        let json = config.to_json().expect("serializable");
        assert!(json.contains(r#""randomize_on_start":true"#));
        assert_eq!(LifeConfig::from_json(&json).expect("config"), config);
    }
}
