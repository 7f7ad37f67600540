use bhujal_core::model::{ExtractedRecord, Place, Reading};
use std::fmt::Write;

pub fn format_records(records: &[ExtractedRecord]) -> String {
    let mut out = String::new();
    if records.is_empty() {
        out.push_str("No records found.\n");
        return out;
    }

    let max_name = column_width(records.iter().map(|r| r.name.chars().count()), "Location");
    let _ = writeln!(
        out,
        "  {:<width$}  {:>8}  {}",
        "Location",
        "Depth",
        "Sampled",
        width = max_name
    );
    for r in records {
        let _ = writeln!(
            out,
            "  {:<width$}  {:>8}  {}",
            r.name,
            format!("{} m", r.depth),
            r.sample_date,
            width = max_name
        );
    }
    out
}

pub fn format_places(places: &[Place]) -> String {
    let mut out = String::new();
    if places.is_empty() {
        out.push_str("No places found.\n");
        return out;
    }

    let max_name = column_width(places.iter().map(|p| p.name.chars().count()), "Name");
    let _ = writeln!(
        out,
        "  {:>5}  {:<width$}  {:<8}  {}",
        "Id",
        "Name",
        "Type",
        "District",
        width = max_name
    );
    for p in places {
        let _ = writeln!(
            out,
            "  {:>5}  {:<width$}  {:<8}  {}",
            p.id,
            p.name,
            p.place_type.to_string(),
            p.district,
            width = max_name
        );
    }
    out
}

pub fn format_readings(readings: &[Reading]) -> String {
    let mut out = String::new();
    if readings.is_empty() {
        out.push_str("No readings stored for this place.\n");
        return out;
    }

    let max_param = column_width(readings.iter().map(|r| r.parameter.chars().count()), "Parameter");
    let _ = writeln!(
        out,
        "  {:<width$}  {:>10}  {:<8}  {:<8}  {}",
        "Parameter",
        "Value",
        "Unit",
        "Status",
        "Sampled",
        width = max_param
    );
    for r in readings {
        let _ = writeln!(
            out,
            "  {:<width$}  {:>10}  {:<8}  {:<8}  {}",
            r.parameter,
            r.value,
            r.unit,
            r.display_status(),
            r.sample_date,
            width = max_param
        );
    }
    out
}

fn column_width(lengths: impl Iterator<Item = usize>, header: &str) -> usize {
    lengths.max().unwrap_or(0).max(header.chars().count())
}
