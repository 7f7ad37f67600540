pub mod config;
pub mod extract;
pub mod import;
pub mod store;

use bhujal_core::config::builtin;
use bhujal_core::config::ExtractionConfig;
use bhujal_core::error::BhujalError;
use std::path::PathBuf;

/// A custom config file wins over the named preset.
pub fn resolve_config(
    config_file: Option<PathBuf>,
    preset: &str,
) -> Result<ExtractionConfig, BhujalError> {
    match config_file {
        Some(path) => bhujal_core::config::load_config(&path),
        None => builtin::load_preset(preset),
    }
}
