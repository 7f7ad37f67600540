use crate::config::{parse_config_str, ExtractionConfig};
use crate::error::BhujalError;

const KARNAL_WATER_LEVEL_TOML: &str = include_str!("../../../../presets/karnal-water-level.toml");

/// Available predefined extraction configs.
pub const PRESETS: &[&str] = &["karnal"];

/// Load a predefined extraction config by name.
pub fn load_preset(name: &str) -> Result<ExtractionConfig, BhujalError> {
    match name {
        "karnal" => parse_config_str(KARNAL_WATER_LEVEL_TOML),
        _ => Err(BhujalError::ConfigInvalid(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}
