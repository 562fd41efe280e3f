//! A file-backed store of donor records.
//!
//! The [`DonorStore`] owns the mapping of donor id to [`Donor`] and knows how
//! to read and write the whole collection as a single JSON file. It performs
//! no uniqueness enforcement on insertion; that is the service layer's job.

use std::{collections::HashMap, io, path::Path};

use crate::domain::Donor;

/// Keyed collection of donor records, serializable to a single JSON file.
///
/// The persisted format is a map of donor id to record
/// (`{"D001": {"donor_id": "D001", "name": ..., "blood_type": "O+"}}`),
/// matching the pre-existing donor file layout. There is no schema version
/// field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DonorStore {
    donors: HashMap<String, Donor>,
}

impl DonorStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record keyed by its donor id.
    ///
    /// Silently overwrites an existing record with the same id. Callers that
    /// need uniqueness must check with [`Self::get`] first.
    pub fn add(&mut self, donor: Donor) {
        self.donors.insert(donor.id().to_string(), donor);
    }

    /// Exact-match lookup by donor id.
    #[must_use]
    pub fn get(&self, donor_id: &str) -> Option<&Donor> {
        self.donors.get(donor_id)
    }

    /// Iterate over all records, in arbitrary order.
    pub fn donors(&self) -> impl Iterator<Item = &Donor> {
        self.donors.values()
    }

    /// The number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.donors.len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.donors.is_empty()
    }

    /// Serialize the entire collection to `path`, replacing any existing
    /// content.
    ///
    /// The write is a plain full-file write; atomicity is not guaranteed.
    ///
    /// # Errors
    ///
    /// Returns a [`SaveError`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), SaveError> {
        let json = serde_json::to_string_pretty(&self.donors).map_err(SaveError::Serialize)?;
        std::fs::write(path, json).map_err(SaveError::Io)?;
        tracing::debug!("Saved {} donor(s) to {}", self.donors.len(), path.display());
        Ok(())
    }

    /// Load a store from the JSON file at `path`.
    ///
    /// A missing file is not an error: it is the recoverable first-run
    /// condition and yields an empty store. A file that exists but cannot be
    /// read or parsed is a hard failure and must never silently produce an
    /// empty store.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if the file exists but cannot be read, or
    /// [`LoadError::Malformed`] if its content is not the expected JSON map.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(
                    "No donor file at {}, starting with an empty store",
                    path.display()
                );
                return Ok(Self::new());
            }
            Err(e) => return Err(LoadError::Io(e)),
        };

        let donors: HashMap<String, Donor> =
            serde_json::from_str(&content).map_err(LoadError::Malformed)?;
        Ok(Self { donors })
    }
}

/// Error loading the donor file.
///
/// A missing file is *not* represented here; [`DonorStore::load`] treats it
/// as an empty store.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file exists but could not be read.
    #[error("failed to read donor file: {0}")]
    Io(#[from] io::Error),

    /// The file content is not a valid donor collection.
    #[error("donor file is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Error saving the donor file.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    /// The collection could not be serialized.
    #[error("failed to serialize donor records: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The file could not be written.
    #[error("failed to write donor file: {0}")]
    Io(#[source] io::Error),
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use tempfile::TempDir;

    use super::*;
    use crate::domain::BloodType;

    fn donor(id: &str, name: &str, blood_type: BloodType) -> Donor {
        Donor::new(id.to_string(), name.to_string(), blood_type)
    }

    #[test]
    fn add_overwrites_existing_key() {
        let mut store = DonorStore::new();
        store.add(donor("D1", "Asha", BloodType::OPos));
        store.add(donor("D1", "Asha K", BloodType::OPos));

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("D1").unwrap().name(), "Asha K");
    }

    #[test]
    fn get_missing_key_returns_none() {
        let store = DonorStore::new();
        assert!(store.get("nope").is_none());
    }

    #[test]
    fn save_then_load_reproduces_records() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("donors.json");

        let mut store = DonorStore::new();
        store.add(donor("D1", "Asha", BloodType::OPos));
        store.add(donor("D2", "Ben", BloodType::AbNeg));
        store.add(donor("D3", "Chloe", BloodType::BPos));
        store.save(&path).unwrap();

        let loaded = DonorStore::load(&path).unwrap();

        // same ids regardless of iteration order
        let ids: BTreeSet<_> = loaded.donors().map(Donor::id).collect();
        assert_eq!(ids, BTreeSet::from(["D1", "D2", "D3"]));
        assert_eq!(loaded, store);
    }

    #[test]
    fn load_missing_file_yields_empty_store() {
        let tmp = TempDir::new().unwrap();
        let store = DonorStore::load(&tmp.path().join("absent.json")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn load_malformed_file_is_an_error_not_an_empty_store() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("donors.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = DonorStore::load(&path);
        assert!(matches!(result, Err(LoadError::Malformed(_))));
    }

    #[test]
    fn load_wrong_shape_is_malformed() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("donors.json");
        std::fs::write(&path, r#"["a", "list", "not", "a", "map"]"#).unwrap();

        assert!(matches!(
            DonorStore::load(&path),
            Err(LoadError::Malformed(_))
        ));
    }

    #[test]
    fn persisted_format_matches_original_layout() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("donors.json");

        let mut store = DonorStore::new();
        store.add(donor("D1", "Asha", BloodType::OPos));
        store.save(&path).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["D1"]["donor_id"], "D1");
        assert_eq!(raw["D1"]["name"], "Asha");
        assert_eq!(raw["D1"]["blood_type"], "O+");
    }
}
