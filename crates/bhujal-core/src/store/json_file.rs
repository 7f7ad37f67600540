use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::BhujalError;
use crate::model::{Place, PlaceId, PlaceType, Reading};
use crate::store::memory::MemoryStore;
use crate::store::state::StoreState;
use crate::store::GroundwaterStore;

/// Store backed by a single JSON file.
///
/// The whole state is loaded on open. `commit` writes a temp file next to
/// the target and renames it over the target, so readers only ever see the
/// state before or after a transaction.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    inner: MemoryStore,
}

impl JsonFileStore {
    /// Open the store at `path`; a missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, BhujalError> {
        let path = path.into();
        let state = if path.exists() {
            let file = std::fs::File::open(&path)?;
            serde_json::from_reader(BufReader::new(file))?
        } else {
            StoreState::default()
        };
        Ok(JsonFileStore {
            path,
            inner: MemoryStore::from_state(state),
        })
    }

    fn persist(&self) -> Result<(), BhujalError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmpfile = tempfile::NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmpfile, self.inner.state())?;
        tmpfile.write_all(b"\n")?;
        tmpfile.as_file().sync_all()?;
        tmpfile.persist(&self.path).map_err(|e| e.error)?;
        tracing::debug!(path = %self.path.display(), "store written");
        Ok(())
    }
}

impl GroundwaterStore for JsonFileStore {
    fn begin(&mut self) -> Result<(), BhujalError> {
        self.inner.begin()
    }

    fn commit(&mut self) -> Result<(), BhujalError> {
        if !self.inner.in_transaction() {
            return Err(BhujalError::Store("commit without an open transaction".into()));
        }
        // The snapshot stays until the file is on disk so a failed write can roll back.
        self.persist()?;
        self.inner.commit()
    }

    fn rollback(&mut self) {
        self.inner.rollback();
    }

    fn delete_all(&mut self, district: &str, parameter: &str) -> Result<usize, BhujalError> {
        self.inner.delete_all(district, parameter)
    }

    fn upsert_place(
        &mut self,
        name: &str,
        district: &str,
        place_type: PlaceType,
    ) -> Result<PlaceId, BhujalError> {
        self.inner.upsert_place(name, district, place_type)
    }

    fn insert_reading(&mut self, reading: Reading) -> Result<(), BhujalError> {
        self.inner.insert_reading(reading)
    }

    fn places(
        &self,
        district: &str,
        place_type: Option<PlaceType>,
    ) -> Result<Vec<Place>, BhujalError> {
        self.inner.places(district, place_type)
    }

    fn readings_for_place(&self, place_id: PlaceId) -> Result<Vec<Reading>, BhujalError> {
        self.inner.readings_for_place(place_id)
    }
}
