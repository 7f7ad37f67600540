/// Parse the leading serial-number column of a data row.
///
/// Accepts an optional sign and surrounding whitespace, nothing else.
pub fn parse_serial(s: &str) -> Option<i64> {
    s.trim().parse().ok()
}

/// Parse a depth column.
///
/// Handles formats like:
/// - "9.8" -> 9.8
/// - "12" -> 12.0
/// - "-0.45" -> -0.45 (artesian wells report levels above ground)
/// - "1e1" -> 10.0
///
/// Dry-well markers ("Dry", "-", "*") and non-finite values yield None, so
/// the column scan moves past a "nan" or "inf" cell to an earlier period.
pub fn parse_depth(s: &str) -> Option<f64> {
    let value: f64 = s.trim().parse().ok()?;
    value.is_finite().then_some(value)
}
