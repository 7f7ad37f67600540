pub mod builtin;

use crate::error::BhujalError;
use crate::extraction::PageRange;
use crate::model::{PlaceType, TimestampEntry};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// What to do with a data line whose location label is empty once the
/// `-PZ` suffix is gone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyNamePolicy {
    /// Emit the record with an empty name.
    #[default]
    Keep,
    /// Drop the line.
    Skip,
}

/// Everything an extraction run needs to know about the source report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// District name written to every record.
    pub district: String,
    /// Token that marks a line as belonging to the district.
    pub marker: String,
    /// Parameter name the readings are stored under.
    pub parameter: String,
    pub unit: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub place_type: PlaceType,
    #[serde(default)]
    pub empty_names: EmptyNamePolicy,
    /// Inclusive, 0-indexed window of pages holding the table.
    pub pages: PageRange,
    /// Reporting periods, most recent first.
    pub timestamps: Vec<TimestampEntry>,
}

impl ExtractionConfig {
    pub fn to_toml_string(&self) -> Result<String, BhujalError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Load an extraction config from a TOML file.
pub fn load_config(path: &Path) -> Result<ExtractionConfig, BhujalError> {
    let content = std::fs::read_to_string(path).map_err(|e| BhujalError::ConfigLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_config(&content, path)
}

/// Parse an extraction config from a TOML string.
pub fn parse_config(content: &str, source: &Path) -> Result<ExtractionConfig, BhujalError> {
    let config: ExtractionConfig =
        toml::from_str(content).map_err(|e| BhujalError::ConfigLoad {
            path: source.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_config(&config)?;
    Ok(config)
}

/// Parse an extraction config from a TOML string (no file path context).
pub fn parse_config_str(content: &str) -> Result<ExtractionConfig, BhujalError> {
    let config: ExtractionConfig =
        toml::from_str(content).map_err(|e| BhujalError::ConfigInvalid(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validate that a config is usable for extraction.
pub fn validate_config(config: &ExtractionConfig) -> Result<(), BhujalError> {
    if config.district.trim().is_empty() {
        return Err(BhujalError::ConfigInvalid("district must not be empty".into()));
    }

    if config.marker.trim().is_empty() {
        return Err(BhujalError::ConfigInvalid("marker must not be empty".into()));
    }

    if config.parameter.trim().is_empty() {
        return Err(BhujalError::ConfigInvalid(
            "parameter must not be empty".into(),
        ));
    }

    if config.pages.start > config.pages.end {
        return Err(BhujalError::ConfigInvalid(format!(
            "page range start {} is after end {}",
            config.pages.start, config.pages.end
        )));
    }

    if config.timestamps.is_empty() {
        return Err(BhujalError::ConfigInvalid(
            "timestamps must not be empty".into(),
        ));
    }

    for pair in config.timestamps.windows(2) {
        if pair[1].date >= pair[0].date {
            return Err(BhujalError::ConfigInvalid(format!(
                "timestamps must be most recent first: {} ({}) is listed before {} ({})",
                pair[0].label, pair[0].date, pair[1].label, pair[1].date
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"
        district = "Karnal"
        marker = "KARNAL"
        parameter = "Water Level"
        unit = "m bgl"

        [pages]
        start = 0
        end = 3

        [[timestamps]]
        date = "2023-01-01"
        label = "2023/Jan"

        [[timestamps]]
        date = "2022-11-01"
        label = "2022/Nov"
    "#;

    #[test]
    fn test_parse_valid_config() {
        let config = parse_config_str(VALID).unwrap();
        assert_eq!(config.district, "Karnal");
        assert_eq!(config.pages, PageRange::new(0, 3));
        assert_eq!(config.timestamps.len(), 2);
        assert_eq!(config.status, "");
        assert_eq!(config.place_type, PlaceType::Village);
        assert_eq!(config.empty_names, EmptyNamePolicy::Keep);
    }

    #[test]
    fn test_out_of_order_timestamps_rejected() {
        let toml = VALID
            .replace("2023-01-01", "2021-01-01");
        assert!(matches!(
            parse_config_str(&toml),
            Err(BhujalError::ConfigInvalid(_))
        ));
    }

    #[test]
    fn test_inverted_page_range_rejected() {
        let toml = VALID.replace("start = 0", "start = 9");
        assert!(parse_config_str(&toml).is_err());
    }

    #[test]
    fn test_empty_marker_rejected() {
        let toml = VALID.replace("marker = \"KARNAL\"", "marker = \"  \"");
        assert!(parse_config_str(&toml).is_err());
    }

    #[test]
    fn test_missing_field_reports_path() {
        let err = parse_config("district = \"Karnal\"", Path::new("custom.toml")).unwrap_err();
        assert!(err.to_string().contains("custom.toml"));
    }

    #[test]
    fn test_toml_output_parses_back() {
        let config = parse_config_str(VALID).unwrap();
        let text = config.to_toml_string().unwrap();
        assert_eq!(parse_config_str(&text).unwrap(), config);
    }
}
