use super::*;
use std::fs;
use tempfile::tempdir;

fn record(id: &str, artist: &str, rating: u8, play_count: u32) -> TrackRecord {
    TrackRecord {
        id: id.into(),
        artist: artist.into(),
        rating,
        play_count,
    }
}

fn seeded_store(dir: &std::path::Path) -> MetadataStore {
    let path = dir.join("track_data.json");
    fs::write(
        &path,
        r#"{
    "a.mp3": {"id": "1", "artist": "X", "rating": 3, "play_count": 0},
    "b.mp3": {"id": "2", "artist": "Y", "rating": 5, "play_count": 7},
    "c.mp3": {"id": "", "artist": "", "rating": 0}
}"#,
    )
    .unwrap();
    MetadataStore::load(path).unwrap()
}

#[test]
fn load_missing_file_yields_empty_store() {
    let dir = tempdir().unwrap();
    let store = MetadataStore::load(dir.path().join("nope.json")).unwrap();
    assert!(store.is_empty());
    assert!(!dir.path().join("nope.json").exists());
}

#[test]
fn load_defaults_missing_play_count_to_zero() {
    let dir = tempdir().unwrap();
    let store = seeded_store(dir.path());
    assert_eq!(store.len(), 3);
    assert_eq!(store.get("c.mp3"), Some(&TrackRecord::default()));
    assert_eq!(store.get("b.mp3"), Some(&record("2", "Y", 5, 7)));
}

#[test]
fn load_reports_malformed_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("track_data.json");
    fs::write(&path, "{ not json").unwrap();
    let err = MetadataStore::load(&path).unwrap_err();
    assert!(matches!(err, StoreError::Parse { .. }));
}

#[test]
fn save_writes_pretty_json_with_all_fields() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("track_data.json");
    let mut store = MetadataStore::load(&path).unwrap();
    store.ensure_entry("song.mp3");
    store.save().unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\n    \"song.mp3\": {\n        \"id\": \"\""));
    assert!(raw.contains("\"play_count\": 0"));

    let reloaded = MetadataStore::load(&path).unwrap();
    assert_eq!(reloaded.get("song.mp3"), Some(&TrackRecord::default()));
}

#[test]
fn find_by_id_matches_ids_not_filenames() {
    let dir = tempdir().unwrap();
    let store = seeded_store(dir.path());

    let (name, rec) = store.find_by_id("2").unwrap();
    assert_eq!(name, "b.mp3");
    assert_eq!(rec.artist, "Y");

    assert!(store.find_by_id("b.mp3").is_none());
    assert!(store.find_by_id("9").is_none());
    // exact match only
    assert!(store.find_by_id(" 1").is_none());
    // c.mp3 has no id yet
    assert!(store.find_by_id("").is_none());
}

#[test]
fn ensure_entry_does_not_overwrite() {
    let dir = tempdir().unwrap();
    let mut store = seeded_store(dir.path());
    assert!(!store.ensure_entry("a.mp3"));
    assert_eq!(store.get("a.mp3").unwrap().id, "1");
    assert!(store.ensure_entry("d.mp3"));
    assert_eq!(store.len(), 4);
}

#[test]
fn increment_play_count_persists_to_disk() {
    let dir = tempdir().unwrap();
    let mut store = seeded_store(dir.path());

    store.increment_play_count("b.mp3").unwrap();
    store.increment_play_count("c.mp3").unwrap();

    let reloaded = MetadataStore::load(store.path()).unwrap();
    assert_eq!(reloaded.get("b.mp3").unwrap().play_count, 8);
    assert_eq!(reloaded.get("c.mp3").unwrap().play_count, 1);
}

#[test]
fn increment_play_count_ignores_unknown_tracks() {
    let dir = tempdir().unwrap();
    let mut store = seeded_store(dir.path());
    store.increment_play_count("ghost.mp3").unwrap();
    assert!(store.get("ghost.mp3").is_none());
}

#[test]
fn update_track_preserves_play_count_and_persists() {
    let dir = tempdir().unwrap();
    let mut store = seeded_store(dir.path());

    store.update_track("b.mp3", "20", "Z", 4).unwrap();

    let reloaded = MetadataStore::load(store.path()).unwrap();
    assert_eq!(reloaded.get("b.mp3"), Some(&record("20", "Z", 4, 7)));
}

#[test]
fn update_track_rejects_id_used_by_another_track() {
    let dir = tempdir().unwrap();
    let mut store = seeded_store(dir.path());

    let err = store.update_track("c.mp3", "1", "", 0).unwrap_err();
    assert!(matches!(err, StoreError::DuplicateId(ref id) if id == "1"));
    assert_eq!(err.to_string(), "The ID is already used.");
    assert_eq!(store.get("c.mp3").unwrap().id, "");

    // Re-saving a track with its own id is fine.
    store.update_track("a.mp3", "1", "X2", 2).unwrap();
    assert_eq!(store.get("a.mp3").unwrap().artist, "X2");
}

#[test]
fn update_track_allows_many_unset_ids() {
    let dir = tempdir().unwrap();
    let mut store = seeded_store(dir.path());
    store.update_track("a.mp3", "", "X", 3).unwrap();
    store.update_track("b.mp3", "", "Y", 5).unwrap();
    assert!(!store.get("a.mp3").unwrap().has_id());
    assert!(!store.get("b.mp3").unwrap().has_id());
}

#[test]
fn update_track_rejects_bad_rating_and_unknown_track() {
    let dir = tempdir().unwrap();
    let mut store = seeded_store(dir.path());

    assert!(matches!(
        store.update_track("a.mp3", "1", "X", 6),
        Err(StoreError::InvalidRating(6))
    ));
    assert!(matches!(
        store.update_track("zzz.mp3", "5", "X", 1),
        Err(StoreError::UnknownTrack(_))
    ));
}

#[test]
fn save_failure_is_reported() {
    let dir = tempdir().unwrap();
    // Parent directory does not exist, so the write has to fail.
    let path = dir.path().join("missing").join("track_data.json");
    let mut store = MetadataStore::load(&path).unwrap();
    store.ensure_entry("a.mp3");
    assert!(matches!(store.save(), Err(StoreError::Write { .. })));
}
