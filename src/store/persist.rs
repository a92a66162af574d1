//! Whole-file JSON read/write for the metadata store.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use super::error::StoreError;
use super::model::TrackRecord;

pub(super) fn read_records(path: &Path) -> Result<BTreeMap<String, TrackRecord>, StoreError> {
    let raw = fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub(super) fn write_records(
    path: &Path,
    records: &BTreeMap<String, TrackRecord>,
) -> Result<(), StoreError> {
    // Four-space indent, same layout as existing library files.
    let mut buf = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    records.serialize(&mut ser)?;

    fs::write(path, buf).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })
}
