use crate::error::BhujalError;
use crate::model::{Place, PlaceId, PlaceType, Reading};
use crate::store::state::StoreState;
use crate::store::GroundwaterStore;

/// In-process store. Transactions keep a snapshot of the state at `begin`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: StoreState,
    snapshot: Option<StoreState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from places that already exist, e.g. with localized names.
    pub fn with_places(places: Vec<Place>) -> Self {
        MemoryStore {
            state: StoreState {
                places,
                readings: Vec::new(),
            },
            snapshot: None,
        }
    }

    pub fn all_places(&self) -> &[Place] {
        &self.state.places
    }

    pub fn all_readings(&self) -> &[Reading] {
        &self.state.readings
    }

    pub fn in_transaction(&self) -> bool {
        self.snapshot.is_some()
    }

    pub(crate) fn from_state(state: StoreState) -> Self {
        MemoryStore {
            state,
            snapshot: None,
        }
    }

    pub(crate) fn state(&self) -> &StoreState {
        &self.state
    }
}

impl GroundwaterStore for MemoryStore {
    fn begin(&mut self) -> Result<(), BhujalError> {
        if self.snapshot.is_some() {
            return Err(BhujalError::Store("transaction already open".into()));
        }
        self.snapshot = Some(self.state.clone());
        Ok(())
    }

    fn commit(&mut self) -> Result<(), BhujalError> {
        self.snapshot
            .take()
            .map(|_| ())
            .ok_or_else(|| BhujalError::Store("commit without an open transaction".into()))
    }

    fn rollback(&mut self) {
        if let Some(snapshot) = self.snapshot.take() {
            self.state = snapshot;
        }
    }

    fn delete_all(&mut self, district: &str, parameter: &str) -> Result<usize, BhujalError> {
        Ok(self.state.delete_all(district, parameter))
    }

    fn upsert_place(
        &mut self,
        name: &str,
        district: &str,
        place_type: PlaceType,
    ) -> Result<PlaceId, BhujalError> {
        Ok(self.state.upsert_place(name, district, place_type))
    }

    fn insert_reading(&mut self, reading: Reading) -> Result<(), BhujalError> {
        self.state.insert_reading(reading)
    }

    fn places(
        &self,
        district: &str,
        place_type: Option<PlaceType>,
    ) -> Result<Vec<Place>, BhujalError> {
        Ok(self.state.places(district, place_type))
    }

    fn readings_for_place(&self, place_id: PlaceId) -> Result<Vec<Reading>, BhujalError> {
        self.state.readings_for_place(place_id)
    }
}
