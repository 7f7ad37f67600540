use regex::Regex;
use std::sync::LazyLock;

/// Piezometer suffix: "-PZ", " - pz", "-  PZ".
static PIEZOMETER_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*-\s*PZ").expect("piezometer suffix pattern is valid"));

/// Turn a raw location label into a place name.
///
/// "Village1-PZ" -> "Village1". Idempotent.
pub fn clean_location(raw: &str) -> String {
    PIEZOMETER_SUFFIX.replace_all(raw, "").trim().to_string()
}
