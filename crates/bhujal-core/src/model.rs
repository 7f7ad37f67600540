use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A known reporting period. Column `i` of a data line belongs to the
/// `i`-th entry of the configured list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampEntry {
    pub date: NaiveDate,
    pub label: String,
}

impl TimestampEntry {
    pub fn new(date: NaiveDate, label: impl Into<String>) -> Self {
        TimestampEntry {
            date,
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceType {
    #[default]
    Village,
    Town,
}

impl fmt::Display for PlaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceType::Village => write!(f, "village"),
            PlaceType::Town => write!(f, "town"),
        }
    }
}

impl PlaceType {
    pub fn from_str_loose(s: &str) -> Option<PlaceType> {
        match s.trim().to_lowercase().as_str() {
            "village" => Some(PlaceType::Village),
            "town" => Some(PlaceType::Town),
            _ => None,
        }
    }
}

/// One depth reading recovered from a district data line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedRecord {
    pub name: String,
    pub district: String,
    pub place_type: PlaceType,
    pub depth: f64,
    pub sample_date: NaiveDate,
}

pub type PlaceId = u64;

/// A named monitoring location, unique per (name, district).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: PlaceId,
    pub name: String,
    pub district: String,
    pub place_type: PlaceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_hi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district_hi: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub place_id: PlaceId,
    pub parameter: String,
    pub value: f64,
    pub unit: String,
    pub status: String,
    pub sample_date: NaiveDate,
}

impl Reading {
    /// Status as shown to users; an empty status counts as safe.
    pub fn display_status(&self) -> &str {
        let status = self.status.trim();
        if status.is_empty() {
            "Safe"
        } else {
            status
        }
    }
}
