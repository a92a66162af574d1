use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::audio::PlaybackEngine;
use crate::library::song_name;
use crate::store::{MetadataStore, TrackRecord};

use super::error::SessionError;
use super::progress::Progress;

/// A queued track: its filename plus the metadata it had when it was added.
///
/// The record is a snapshot. Later edits in the store do not show up here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistEntry {
    pub filename: String,
    pub record: TrackRecord,
}

impl PlaylistEntry {
    /// One line of the playlist listing, e.g. `1. 7 Song by Artist ***`.
    /// `position` is 1-based.
    pub fn listing_line(&self, position: usize) -> String {
        let artist = if self.record.artist.trim().is_empty() {
            "Unknown Artist"
        } else {
            self.record.artist.as_str()
        };
        let stars = "*".repeat(usize::from(self.record.rating));
        format!(
            "{position}. {} {} by {artist} {stars}",
            self.record.id,
            song_name(&self.filename)
        )
        .trim_end()
        .to_string()
    }
}

/// The playback queue of the playlist view.
///
/// Invariant: `playing` implies `cursor` points at an entry.
pub struct PlaylistSession<E: PlaybackEngine> {
    engine: E,
    tracks_dir: PathBuf,
    entries: Vec<PlaylistEntry>,
    cursor: Option<usize>,
    playing: bool,
    /// Whether the engine currently holds a file.
    loaded: bool,
    duration: Duration,
    progress: Progress,
}

impl<E: PlaybackEngine> PlaylistSession<E> {
    /// Start an empty session that resolves filenames against `tracks_dir`.
    pub fn new(engine: E, tracks_dir: impl Into<PathBuf>) -> Self {
        Self {
            engine,
            tracks_dir: tracks_dir.into(),
            entries: Vec::new(),
            cursor: None,
            playing: false,
            loaded: false,
            duration: Duration::ZERO,
            progress: Progress::default(),
        }
    }

    #[cfg(test)]
    pub(crate) fn entries(&self) -> &[PlaylistEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn current(&self) -> Option<&PlaylistEntry> {
        self.cursor.and_then(|i| self.entries.get(i))
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether a track has been loaded into the engine and not stopped since.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Length of the last loaded track.
    #[cfg(test)]
    pub(crate) fn duration(&self) -> Duration {
        self.duration
    }

    /// Last readout published by `tick`.
    pub fn progress(&self) -> Progress {
        self.progress
    }

    #[cfg(test)]
    pub(crate) fn engine(&self) -> &E {
        &self.engine
    }

    #[cfg(test)]
    pub(crate) fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// The playlist listing, one line per entry, in playback order.
    pub fn listing(&self) -> Vec<String> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| entry.listing_line(i + 1))
            .collect()
    }

    /// Append the track whose id is exactly `id`.
    pub fn add(&mut self, store: &MetadataStore, id: &str) -> Result<&PlaylistEntry, SessionError> {
        let Some((filename, record)) = store.find_by_id(id) else {
            debug!(id, "no track with this id");
            return Err(SessionError::IdNotFound(id.to_string()));
        };

        self.entries.push(PlaylistEntry {
            filename: filename.to_string(),
            record: record.clone(),
        });
        debug!(id, track = filename, len = self.entries.len(), "added to playlist");

        let last = self.entries.len() - 1;
        Ok(&self.entries[last])
    }

    /// Empty the playlist and stop whatever is loaded.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
        self.stop_engine();
        debug!("playlist cleared");
    }

    /// Start the playlist from its first entry.
    pub fn play(&mut self, store: &mut MetadataStore) -> Result<(), SessionError> {
        if self.entries.is_empty() {
            return Err(SessionError::EmptyPlaylist);
        }
        self.cursor = Some(0);
        self.load_and_play(store, 0)
    }

    /// Load entry `index` into the engine and start it, bumping its play count.
    ///
    /// Out-of-range indices are ignored. When the file is missing or cannot
    /// be decoded, nothing but the cursor (if the caller moved it) changes.
    pub fn load_and_play(
        &mut self,
        store: &mut MetadataStore,
        index: usize,
    ) -> Result<(), SessionError> {
        let Some(entry) = self.entries.get(index) else {
            return Ok(());
        };
        let filename = entry.filename.clone();
        let path = self.track_path(&filename);

        if !path.exists() {
            warn!(path = %path.display(), "track file not found");
            return Err(SessionError::TrackFileNotFound(path));
        }

        self.engine.load(&path)?;
        self.engine.play();
        self.duration = self.engine.track_duration(&path);
        self.playing = true;
        self.loaded = true;
        self.progress = Progress::new(Duration::ZERO, self.duration);
        info!(track = %filename, index, duration_secs = self.duration.as_secs(), "playing");

        store.increment_play_count(&filename)?;
        Ok(())
    }

    /// Step back one entry. Does nothing at the start of the playlist.
    pub fn back(&mut self, store: &mut MetadataStore) -> Result<(), SessionError> {
        match self.cursor {
            Some(i) if i > 0 => {
                self.cursor = Some(i - 1);
                self.load_and_play(store, i - 1)
            }
            _ => Ok(()),
        }
    }

    /// Step forward one entry, wrapping from the last entry to the first.
    pub fn next(&mut self, store: &mut MetadataStore) -> Result<(), SessionError> {
        if self.entries.is_empty() {
            return Ok(());
        }
        let next = match self.cursor {
            Some(i) if i + 1 < self.entries.len() => i + 1,
            _ => 0,
        };
        self.cursor = Some(next);
        self.load_and_play(store, next)
    }

    /// Pause when playing, resume otherwise. Ignored until a track is loaded.
    pub fn toggle_pause(&mut self) {
        if !self.loaded {
            return;
        }
        if self.playing {
            self.engine.pause();
            self.playing = false;
        } else {
            self.engine.unpause();
            self.playing = true;
        }
        debug!(playing = self.playing, "toggled pause");
    }

    /// Refresh the timer readout from the engine.
    ///
    /// Meant to be called on a fixed period whatever the state; returns the
    /// new readout, or `None` when nothing is playing.
    pub fn tick(&mut self) -> Option<Progress> {
        if !self.playing {
            return None;
        }
        self.progress = Progress::new(self.engine.elapsed(), self.duration);
        Some(self.progress)
    }

    /// Close the session, stopping playback, and hand the engine back.
    pub fn into_engine(mut self) -> E {
        self.stop_engine();
        self.engine
    }

    fn track_path(&self, filename: &str) -> PathBuf {
        self.tracks_dir.join(filename)
    }

    fn stop_engine(&mut self) {
        if self.loaded {
            self.engine.stop();
            info!("playback stopped");
        }
        self.loaded = false;
        self.playing = false;
        self.progress = Progress::default();
    }
}
