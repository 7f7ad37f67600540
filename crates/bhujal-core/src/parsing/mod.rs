pub mod location;
pub mod values;

use std::fmt;

use crate::config::{EmptyNamePolicy, ExtractionConfig};
use crate::extraction::lines::{reconstruct_lines, Line};
use crate::extraction::PageWords;
use crate::model::ExtractedRecord;
use location::clean_location;
use values::{parse_depth, parse_serial};

/// Why a reconstructed line did not produce a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NoMarker,
    NoSerial,
    NoLocation,
    EmptyName,
    NoDepth,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            SkipReason::NoMarker => "no district marker",
            SkipReason::NoSerial => "first token is not a serial number",
            SkipReason::NoLocation => "no location after district marker",
            SkipReason::EmptyName => "location name is empty",
            SkipReason::NoDepth => "no numeric value in aligned columns",
        };
        f.write_str(reason)
    }
}

/// Extract depth records from the pages of a report.
///
/// Pages are read in the order given, lines top to bottom. Lines that are
/// not district data rows are skipped.
pub fn extract_records(pages: &[PageWords], config: &ExtractionConfig) -> Vec<ExtractedRecord> {
    let mut records = Vec::new();

    for page in pages {
        let lines = reconstruct_lines(page);
        let before = records.len();

        for line in &lines {
            match interpret_line(&line.tokens, config) {
                Ok(record) => {
                    tracing::debug!(
                        page = page.page_index,
                        name = %record.name,
                        depth = record.depth,
                        date = %record.sample_date,
                        "extracted record"
                    );
                    records.push(record);
                }
                Err(SkipReason::NoMarker) => {}
                Err(reason) => log_skip(line, reason),
            }
        }

        tracing::debug!(
            page = page.page_index,
            lines = lines.len(),
            records = records.len() - before,
            "scanned page"
        );
    }

    tracing::info!(
        district = %config.district,
        records = records.len(),
        "extraction finished"
    );
    records
}

fn log_skip(line: &Line, reason: SkipReason) {
    tracing::debug!(
        page = line.page_index,
        y = line.y,
        line = %line.text(),
        %reason,
        "skipped line"
    );
}

/// Interpret one reconstructed line as a district data row.
///
/// Layout: `<serial> ... <MARKER> <location> <value_0> <value_1> ...`, where
/// `value_i` belongs to `config.timestamps[i]`. The aligned columns are
/// scanned from the last one backwards and the first that parses wins.
///
/// A line qualifies when any token equals the marker ignoring case, but the
/// location is taken after the first token that matches it exactly.
pub fn interpret_line(
    tokens: &[String],
    config: &ExtractionConfig,
) -> Result<ExtractedRecord, SkipReason> {
    if !tokens.iter().any(|t| t.eq_ignore_ascii_case(&config.marker)) {
        return Err(SkipReason::NoMarker);
    }

    tokens
        .first()
        .and_then(|t| parse_serial(t))
        .ok_or(SkipReason::NoSerial)?;

    // Any case qualifies the row, but only the exact marker anchors the columns.
    let marker_index = tokens
        .iter()
        .position(|t| t == &config.marker)
        .ok_or(SkipReason::NoLocation)?;
    let raw_location = tokens.get(marker_index + 1).ok_or(SkipReason::NoLocation)?;
    let values = &tokens[marker_index + 2..];

    let name = clean_location(raw_location);
    if name.is_empty() && config.empty_names == EmptyNamePolicy::Skip {
        return Err(SkipReason::EmptyName);
    }

    let aligned = values.len().min(config.timestamps.len());
    let (depth, timestamp) = (0..aligned)
        .rev()
        .find_map(|i| parse_depth(&values[i]).map(|d| (d, &config.timestamps[i])))
        .ok_or(SkipReason::NoDepth)?;

    Ok(ExtractedRecord {
        name,
        district: config.district.clone(),
        place_type: config.place_type,
        depth,
        sample_date: timestamp.date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::{PageRange, Word};
    use crate::model::{PlaceType, TimestampEntry};
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn config(dates: &[&str]) -> ExtractionConfig {
        ExtractionConfig {
            district: "Karnal".into(),
            marker: "KARNAL".into(),
            pages: PageRange::new(0, 0),
            parameter: "Water Level".into(),
            unit: "m bgl".into(),
            status: String::new(),
            place_type: PlaceType::Village,
            empty_names: EmptyNamePolicy::Keep,
            timestamps: dates
                .iter()
                .map(|d| TimestampEntry::new(date(d), *d))
                .collect(),
        }
    }

    fn four_periods() -> ExtractionConfig {
        config(&["2023-01-01", "2022-11-01", "2022-08-01", "2022-06-01"])
    }

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_last_aligned_column_wins() {
        let cfg = config(&["2023-01-01", "2022-11-01"]);
        let record =
            interpret_line(&tokens(&["1", "KARNAL", "Village1-PZ", "10.2", "9.8"]), &cfg).unwrap();
        assert_eq!(record.name, "Village1");
        assert_eq!(record.district, "Karnal");
        assert_eq!(record.place_type, PlaceType::Village);
        assert_eq!(record.depth, 9.8);
        assert_eq!(record.sample_date, date("2022-11-01"));
    }

    #[test]
    fn test_scan_stops_at_first_parse_from_the_end() {
        let record = interpret_line(
            &tokens(&["7", "KARNAL", "Kunjpura", "12.5", "8.3", "x", "4.1"]),
            &four_periods(),
        )
        .unwrap();
        assert_eq!(record.depth, 4.1);
        assert_eq!(record.sample_date, date("2022-06-01"));
    }

    #[test]
    fn test_unparseable_tail_falls_back_to_earlier_column() {
        let record = interpret_line(
            &tokens(&["7", "KARNAL", "Kunjpura", "12.5", "8.3", "Dry", "-"]),
            &four_periods(),
        )
        .unwrap();
        assert_eq!(record.depth, 8.3);
        assert_eq!(record.sample_date, date("2022-11-01"));
    }

    #[test]
    fn test_non_finite_tail_falls_back_to_earlier_column() {
        let record = interpret_line(
            &tokens(&["7", "KARNAL", "Kunjpura", "12.5", "8.3", "6.1", "nan"]),
            &four_periods(),
        )
        .unwrap();
        assert_eq!(record.depth, 6.1);
        assert_eq!(record.sample_date, date("2022-08-01"));
    }

    #[test]
    fn test_extra_columns_beyond_timestamps_ignored() {
        let cfg = config(&["2023-01-01", "2022-11-01"]);
        let record = interpret_line(
            &tokens(&["3", "KARNAL", "Indri", "5.0", "6.0", "7.0", "8.0"]),
            &cfg,
        )
        .unwrap();
        assert_eq!(record.depth, 6.0);
        assert_eq!(record.sample_date, date("2022-11-01"));
    }

    #[test]
    fn test_no_numeric_column_yields_nothing() {
        let result = interpret_line(
            &tokens(&["7", "KARNAL", "Kunjpura", "x", "x", "x", "x"]),
            &four_periods(),
        );
        assert_eq!(result, Err(SkipReason::NoDepth));
    }

    #[test]
    fn test_missing_marker_any_case() {
        let result = interpret_line(&tokens(&["1", "PANIPAT", "Israna", "4.0"]), &four_periods());
        assert_eq!(result, Err(SkipReason::NoMarker));
    }

    #[test]
    fn test_marker_in_other_case_only_has_no_location() {
        let result = interpret_line(
            &tokens(&["4", "Karnal", "Nilokheri", "5.0"]),
            &four_periods(),
        );
        assert_eq!(result, Err(SkipReason::NoLocation));
    }

    #[test]
    fn test_location_follows_exact_marker() {
        let record = interpret_line(
            &tokens(&["1", "Karnal", "KARNAL", "Indri-PZ", "5.0"]),
            &four_periods(),
        )
        .unwrap();
        assert_eq!(record.name, "Indri");
        assert_eq!(record.depth, 5.0);
        assert_eq!(record.sample_date, date("2023-01-01"));
    }

    #[test]
    fn test_non_numeric_serial_rejected() {
        let result = interpret_line(
            &tokens(&["District:", "KARNAL", "Total", "112"]),
            &four_periods(),
        );
        assert_eq!(result, Err(SkipReason::NoSerial));
    }

    #[test]
    fn test_marker_at_end_has_no_location() {
        let result = interpret_line(&tokens(&["4", "KARNAL"]), &four_periods());
        assert_eq!(result, Err(SkipReason::NoLocation));
    }

    #[test]
    fn test_empty_name_policy() {
        let line = tokens(&["5", "KARNAL", "-PZ", "3.3"]);
        let mut cfg = four_periods();
        assert_eq!(interpret_line(&line, &cfg).unwrap().name, "");

        cfg.empty_names = EmptyNamePolicy::Skip;
        assert_eq!(interpret_line(&line, &cfg), Err(SkipReason::EmptyName));
    }

    #[test]
    fn test_extract_records_across_pages() {
        let cfg = config(&["2023-01-01", "2022-11-01"]);
        let pages = vec![
            PageWords {
                page_index: 67,
                words: vec![
                    Word::new(10.0, 50.0, "S.No."),
                    Word::new(40.0, 50.0, "District"),
                    Word::new(90.0, 50.0, "Location"),
                    Word::new(200.0, 80.0, "9.8"),
                    Word::new(150.0, 80.0, "10.2"),
                    Word::new(40.0, 80.0, "KARNAL"),
                    Word::new(10.0, 80.02, "1"),
                    Word::new(90.0, 79.98, "Village1-PZ"),
                ],
            },
            PageWords {
                page_index: 68,
                words: vec![
                    Word::new(10.0, 50.0, "2"),
                    Word::new(40.0, 50.0, "PANIPAT"),
                    Word::new(90.0, 50.0, "Israna"),
                    Word::new(150.0, 50.0, "3.0"),
                    Word::new(10.0, 70.0, "3"),
                    Word::new(40.0, 70.0, "KARNAL"),
                    Word::new(90.0, 70.0, "Nilokheri"),
                    Word::new(150.0, 70.0, "14.1"),
                ],
            },
        ];

        let records = extract_records(&pages, &cfg);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Village1");
        assert_eq!(records[0].depth, 9.8);
        assert_eq!(records[0].sample_date, date("2022-11-01"));
        assert_eq!(records[1].name, "Nilokheri");
        assert_eq!(records[1].sample_date, date("2023-01-01"));
    }

    #[test]
    fn test_every_record_date_is_configured() {
        let cfg = four_periods();
        let lines = [
            tokens(&["1", "KARNAL", "A", "1.0"]),
            tokens(&["2", "KARNAL", "B", "1.0", "2.0", "3.0"]),
            tokens(&["3", "KARNAL", "C", "x", "2.0", "x", "x", "9.9"]),
        ];
        for line in &lines {
            let record = interpret_line(line, &cfg).unwrap();
            assert!(cfg.timestamps.iter().any(|t| t.date == record.sample_date));
        }
    }
}
