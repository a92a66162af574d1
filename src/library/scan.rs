use std::path::Path;

use tracing::{info, warn};
use walkdir::WalkDir;

use crate::config::LibrarySettings;
use crate::store::{MetadataStore, StoreError};

fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

/// List the playable files under `dir`, as paths relative to `dir`.
///
/// The relative path is what the store uses as a key, so for a flat folder
/// it is just the filename. Results are sorted.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Vec<String> {
    let mut walker = WalkDir::new(dir).follow_links(true).min_depth(1);
    // Non-recursive = only the root directory.
    if !settings.recursive {
        walker = walker.max_depth(1);
    }

    let mut files: Vec<String> = walker
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file() || entry.path().is_file())
        .filter(|entry| is_audio_file(entry.path(), settings))
        .filter_map(|entry| {
            entry
                .path()
                .strip_prefix(dir)
                .ok()
                .and_then(|rel| rel.to_str())
                .map(|rel| rel.replace('\\', "/"))
        })
        .collect();

    files.sort();
    files
}

/// Scan `dir` and make sure every file found has a store record.
///
/// New files get an empty record. The store is saved once afterwards.
/// A missing directory is not an error: the catalog is just empty.
pub fn sync(
    store: &mut MetadataStore,
    dir: &Path,
    settings: &LibrarySettings,
) -> Result<Vec<String>, StoreError> {
    if !dir.is_dir() {
        warn!(dir = %dir.display(), "tracks directory not found");
        return Ok(Vec::new());
    }

    let files = scan(dir, settings);
    let added = files
        .iter()
        .filter(|name| store.ensure_entry(name))
        .count();
    store.save()?;

    info!(dir = %dir.display(), files = files.len(), added, "catalog synced");
    Ok(files)
}

/// Display name of a track: its filename without the extension.
pub fn song_name(filename: &str) -> &str {
    Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename)
}
