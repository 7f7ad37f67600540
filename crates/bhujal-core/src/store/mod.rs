pub mod json_file;
pub mod memory;
mod state;

use crate::config::ExtractionConfig;
use crate::error::BhujalError;
use crate::model::{ExtractedRecord, Place, PlaceId, PlaceType, Reading};

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Persistence for places and their readings.
///
/// Writes between `begin` and `commit` form one unit of work; `rollback`
/// restores the state seen at `begin`.
pub trait GroundwaterStore {
    fn begin(&mut self) -> Result<(), BhujalError>;

    fn commit(&mut self) -> Result<(), BhujalError>;

    /// Discard everything written since `begin`. No-op without a transaction.
    fn rollback(&mut self);

    /// Remove every reading of `parameter` taken at a place in `district`.
    /// Returns the number of readings removed.
    fn delete_all(&mut self, district: &str, parameter: &str) -> Result<usize, BhujalError>;

    /// Get or create the place keyed by `(name, district)`.
    ///
    /// An existing place keeps its stored attributes; `place_type` only
    /// applies to newly created places.
    fn upsert_place(
        &mut self,
        name: &str,
        district: &str,
        place_type: PlaceType,
    ) -> Result<PlaceId, BhujalError>;

    fn insert_reading(&mut self, reading: Reading) -> Result<(), BhujalError>;

    /// Places in `district` (case-insensitive), optionally of one type, by name.
    fn places(
        &self,
        district: &str,
        place_type: Option<PlaceType>,
    ) -> Result<Vec<Place>, BhujalError>;

    /// Readings of one place, newest sample first.
    fn readings_for_place(&self, place_id: PlaceId) -> Result<Vec<Reading>, BhujalError>;
}

/// Replace all readings of the configured district/parameter with `records`.
///
/// Runs as one transaction: on any error the store is rolled back and the
/// previous readings stay in place. Returns the number of readings written.
pub fn replace_readings<S: GroundwaterStore + ?Sized>(
    store: &mut S,
    config: &ExtractionConfig,
    records: &[ExtractedRecord],
) -> Result<usize, BhujalError> {
    store.begin()?;

    let result = write_readings(store, config, records).and_then(|count| {
        store.commit()?;
        Ok(count)
    });

    if let Err(e) = &result {
        tracing::warn!(
            district = %config.district,
            parameter = %config.parameter,
            error = %e,
            "rolling back reading replacement"
        );
        store.rollback();
    }

    result
}

fn write_readings<S: GroundwaterStore + ?Sized>(
    store: &mut S,
    config: &ExtractionConfig,
    records: &[ExtractedRecord],
) -> Result<usize, BhujalError> {
    let removed = store.delete_all(&config.district, &config.parameter)?;
    tracing::info!(
        district = %config.district,
        parameter = %config.parameter,
        removed,
        "deleted previous readings"
    );

    let mut count = 0;
    for record in records {
        let place_id = store.upsert_place(&record.name, &record.district, record.place_type)?;
        store.insert_reading(Reading {
            place_id,
            parameter: config.parameter.clone(),
            value: record.depth,
            unit: config.unit.clone(),
            status: config.status.clone(),
            sample_date: record.sample_date,
        })?;
        count += 1;
    }

    Ok(count)
}
