use super::*;
use crate::config::LibrarySettings;
use crate::store::MetadataStore;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn scan_filters_by_extension_case_insensitive_and_sorts() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("b.MP3"), b"not a real mp3").unwrap();
    fs::write(dir.path().join("a.mp3"), b"not a real mp3").unwrap();
    fs::write(dir.path().join("c.txt"), b"ignore me").unwrap();
    fs::write(dir.path().join("d.ogg"), b"not configured").unwrap();

    let files = scan(dir.path(), &LibrarySettings::default());
    assert_eq!(files, vec!["a.mp3".to_string(), "b.MP3".to_string()]);
}

#[test]
fn scan_is_flat_unless_recursive() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("root.mp3"), b"x").unwrap();
    let sub = dir.path().join("sub");
    fs::create_dir_all(&sub).unwrap();
    fs::write(sub.join("child.mp3"), b"x").unwrap();

    let flat = scan(dir.path(), &LibrarySettings::default());
    assert_eq!(flat, vec!["root.mp3".to_string()]);

    let settings = LibrarySettings {
        recursive: true,
        ..LibrarySettings::default()
    };
    let deep = scan(dir.path(), &settings);
    assert_eq!(deep, vec!["root.mp3".to_string(), "sub/child.mp3".to_string()]);
}

#[test]
fn scan_accepts_dotted_extension_settings() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.flac"), b"x").unwrap();
    let settings = LibrarySettings {
        extensions: vec![".FLAC".into()],
        ..LibrarySettings::default()
    };
    assert_eq!(scan(dir.path(), &settings), vec!["a.flac".to_string()]);
}

#[test]
fn sync_inserts_missing_records_without_touching_existing_ones() {
    let dir = tempdir().unwrap();
    let tracks = dir.path().join("Tracks");
    fs::create_dir_all(&tracks).unwrap();
    fs::write(tracks.join("old.mp3"), b"x").unwrap();
    fs::write(tracks.join("new.mp3"), b"x").unwrap();

    let data = dir.path().join("track_data.json");
    fs::write(
        &data,
        r#"{"old.mp3": {"id": "4", "artist": "A", "rating": 2, "play_count": 3}}"#,
    )
    .unwrap();

    let mut store = MetadataStore::load(&data).unwrap();
    let files = sync(&mut store, &tracks, &LibrarySettings::default()).unwrap();
    assert_eq!(files, vec!["new.mp3".to_string(), "old.mp3".to_string()]);

    let reloaded = MetadataStore::load(&data).unwrap();
    assert_eq!(reloaded.len(), 2);
    let old = reloaded.get("old.mp3").unwrap();
    assert_eq!(old.id, "4");
    assert_eq!(old.play_count, 3);
    let new = reloaded.get("new.mp3").unwrap();
    assert_eq!(new.id, "");
    assert_eq!(new.artist, "");
    assert_eq!(new.rating, 0);
}

#[test]
fn sync_keeps_records_for_files_that_disappeared() {
    let dir = tempdir().unwrap();
    let tracks = dir.path().join("Tracks");
    fs::create_dir_all(&tracks).unwrap();

    let data = dir.path().join("track_data.json");
    fs::write(&data, r#"{"gone.mp3": {"id": "1", "artist": "", "rating": 1}}"#).unwrap();

    let mut store = MetadataStore::load(&data).unwrap();
    let files = sync(&mut store, &tracks, &LibrarySettings::default()).unwrap();
    assert!(files.is_empty());
    assert!(store.get("gone.mp3").is_some());
}

#[test]
fn sync_with_missing_directory_is_empty_and_does_not_write() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("track_data.json");
    let mut store = MetadataStore::load(&data).unwrap();

    let files = sync(&mut store, &dir.path().join("nope"), &LibrarySettings::default()).unwrap();
    assert!(files.is_empty());
    assert!(!data.exists());
}

#[test]
fn song_name_strips_extension() {
    assert_eq!(song_name("Blue Monday.mp3"), "Blue Monday");
    assert_eq!(song_name("sub/track.mp3"), "track");
    assert_eq!(song_name("noext"), "noext");
    assert_eq!(Path::new(song_name("a.b.mp3")), Path::new("a.b"));
}
