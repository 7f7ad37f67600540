use bhujal_core::error::BhujalError;
use bhujal_core::model::{PlaceId, PlaceType};
use bhujal_core::store::{GroundwaterStore, JsonFileStore};
use std::path::PathBuf;

use crate::output;

pub fn places(
    store_file: PathBuf,
    district: &str,
    place_type: Option<PlaceType>,
    output_format: &str,
) -> Result<(), BhujalError> {
    let store = JsonFileStore::open(store_file)?;
    let places = store.places(district, place_type)?;

    match output_format {
        "json" => output::json::print(&places)?,
        _ => print!("{}", output::table::format_places(&places)),
    }
    Ok(())
}

pub fn readings(
    store_file: PathBuf,
    place_id: PlaceId,
    output_format: &str,
) -> Result<(), BhujalError> {
    let store = JsonFileStore::open(store_file)?;
    let readings = store.readings_for_place(place_id)?;

    match output_format {
        "json" => output::json::print(&readings)?,
        _ => print!("{}", output::table::format_readings(&readings)),
    }
    Ok(())
}
