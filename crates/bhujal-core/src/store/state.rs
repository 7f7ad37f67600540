use serde::{Deserialize, Serialize};

use crate::error::BhujalError;
use crate::model::{Place, PlaceId, PlaceType, Reading};

/// Places and readings as held by the in-process stores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct StoreState {
    #[serde(default)]
    pub places: Vec<Place>,
    #[serde(default)]
    pub readings: Vec<Reading>,
}

impl StoreState {
    pub fn place(&self, id: PlaceId) -> Option<&Place> {
        self.places.iter().find(|p| p.id == id)
    }

    pub fn delete_all(&mut self, district: &str, parameter: &str) -> usize {
        let places = &self.places;
        let before = self.readings.len();
        self.readings.retain(|r| {
            let in_district = places
                .iter()
                .any(|p| p.id == r.place_id && p.district == district);
            !(in_district && r.parameter == parameter)
        });
        before - self.readings.len()
    }

    pub fn upsert_place(&mut self, name: &str, district: &str, place_type: PlaceType) -> PlaceId {
        if let Some(existing) = self
            .places
            .iter()
            .find(|p| p.name == name && p.district == district)
        {
            return existing.id;
        }

        let id = self.places.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        self.places.push(Place {
            id,
            name: name.to_string(),
            district: district.to_string(),
            place_type,
            name_hi: None,
            district_hi: None,
        });
        id
    }

    pub fn insert_reading(&mut self, reading: Reading) -> Result<(), BhujalError> {
        if self.place(reading.place_id).is_none() {
            return Err(BhujalError::UnknownPlace(reading.place_id));
        }
        self.readings.push(reading);
        Ok(())
    }

    pub fn places(&self, district: &str, place_type: Option<PlaceType>) -> Vec<Place> {
        let mut found: Vec<Place> = self
            .places
            .iter()
            .filter(|p| p.district.eq_ignore_ascii_case(district))
            .filter(|p| place_type.map_or(true, |t| p.place_type == t))
            .cloned()
            .collect();
        found.sort_by(|a, b| a.name.cmp(&b.name));
        found
    }

    pub fn readings_for_place(&self, place_id: PlaceId) -> Result<Vec<Reading>, BhujalError> {
        if self.place(place_id).is_none() {
            return Err(BhujalError::UnknownPlace(place_id));
        }
        let mut found: Vec<Reading> = self
            .readings
            .iter()
            .filter(|r| r.place_id == place_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| b.sample_date.cmp(&a.sample_date));
        Ok(found)
    }
}
