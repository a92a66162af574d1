use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::error::StoreError;
use super::persist::{read_records, write_records};

/// Highest star rating a track can carry.
pub const MAX_RATING: u8 = 5;

/// Per-track metadata as stored in the JSON library file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRecord {
    /// User-assigned identifier. Empty means "unset".
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub rating: u8,
    /// Records written by a plain catalog scan have no play count yet.
    #[serde(default)]
    pub play_count: u32,
}

impl TrackRecord {
    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }
}

/// The metadata store, bound to the file it mirrors.
#[derive(Debug)]
pub struct MetadataStore {
    path: PathBuf,
    records: BTreeMap<String, TrackRecord>,
}

impl MetadataStore {
    /// Load the store from `path`. A missing file yields an empty store that
    /// will be created on the first save.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let records = if path.exists() {
            read_records(&path)?
        } else {
            debug!(path = %path.display(), "no library file yet, starting empty");
            BTreeMap::new()
        };
        info!(path = %path.display(), tracks = records.len(), "library loaded");
        Ok(Self { path, records })
    }

    /// Write every record back to disk.
    pub fn save(&self) -> Result<(), StoreError> {
        write_records(&self.path, &self.records)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, filename: &str) -> Option<&TrackRecord> {
        self.records.get(filename)
    }

    /// Iterate `(filename, record)` pairs in filename order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TrackRecord)> {
        self.records.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Find the track whose `id` is exactly `id`. Filenames are not matched,
    /// and tracks without an id are never found.
    pub fn find_by_id(&self, id: &str) -> Option<(&str, &TrackRecord)> {
        self.iter()
            .find(|(_, record)| record.has_id() && record.id == id)
    }

    /// Insert an empty record for `filename` unless one exists.
    ///
    /// Returns `true` when a record was inserted. Does not persist.
    pub fn ensure_entry(&mut self, filename: &str) -> bool {
        if self.records.contains_key(filename) {
            return false;
        }
        self.records
            .insert(filename.to_string(), TrackRecord::default());
        true
    }

    /// Replace the user-editable fields of `filename` and persist.
    ///
    /// A non-empty `id` must not belong to any other track. The play count
    /// is carried over untouched.
    pub fn update_track(
        &mut self,
        filename: &str,
        id: &str,
        artist: &str,
        rating: u8,
    ) -> Result<(), StoreError> {
        if !self.records.contains_key(filename) {
            return Err(StoreError::UnknownTrack(filename.to_string()));
        }
        if rating > MAX_RATING {
            return Err(StoreError::InvalidRating(rating));
        }
        if !id.is_empty()
            && self
                .iter()
                .any(|(name, record)| name != filename && record.id == id)
        {
            return Err(StoreError::DuplicateId(id.to_string()));
        }

        if let Some(record) = self.records.get_mut(filename) {
            record.id = id.to_string();
            record.artist = artist.to_string();
            record.rating = rating;
        }
        info!(track = filename, id, "track metadata updated");
        self.save()
    }

    /// Bump the play count of `filename` by one and persist.
    ///
    /// Unknown filenames are ignored.
    pub fn increment_play_count(&mut self, filename: &str) -> Result<(), StoreError> {
        let Some(record) = self.records.get_mut(filename) else {
            debug!(track = filename, "play count not bumped, track not in library");
            return Ok(());
        };
        record.play_count = record.play_count.saturating_add(1);
        debug!(track = filename, play_count = record.play_count, "play count bumped");
        self.save()
    }
}
