//! Application model types: `App`, `View` and `Status`.
//!
//! `App` replaces screen-to-screen navigation with an in-process view state
//! machine. The playlist session only exists while the playlist view is open;
//! leaving the view stops playback and returns the audio engine to the app.

use std::path::PathBuf;

use tracing::{debug, error, info};

use crate::audio::PlaybackEngine;
use crate::session::{PlaylistSession, Progress, SessionError};
use crate::store::{MAX_RATING, MetadataStore, StoreError, TrackRecord};

use super::form::TrackForm;

/// Which screen is showing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Menu,
    CreateTrackList,
    UpdateTracks,
}

/// Entries of the main menu, in display order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuItem {
    CreateTrackList,
    UpdateTracks,
    Quit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 3] = [Self::CreateTrackList, Self::UpdateTracks, Self::Quit];

    pub fn label(self) -> &'static str {
        match self {
            Self::CreateTrackList => "Create Track List",
            Self::UpdateTracks => "Update Tracks",
            Self::Quit => "Quit",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// One-line message shown to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Status {
    pub text: String,
    pub kind: StatusKind,
}

impl Status {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Info,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Error,
        }
    }
}

/// The main application model.
pub struct App<E: PlaybackEngine> {
    pub view: View,
    pub store: MetadataStore,
    /// Playable files found by the last catalog sync.
    pub catalog: Vec<String>,
    pub status: Option<Status>,

    /// Highlighted entry of the main menu.
    pub menu_selected: usize,

    /// Digits typed into the "Enter Track ID" box.
    pub id_input: String,

    /// Selected row of the track table (index into `store.iter()`).
    pub selected_row: Option<usize>,
    pub form: TrackForm,

    tracks_dir: PathBuf,
    /// Held here while no playlist session is open.
    engine: Option<E>,
    session: Option<PlaylistSession<E>>,
    quit: bool,
}

impl<E: PlaybackEngine> App<E> {
    pub fn new(
        store: MetadataStore,
        catalog: Vec<String>,
        tracks_dir: impl Into<PathBuf>,
        engine: E,
    ) -> Self {
        Self {
            view: View::Menu,
            store,
            catalog,
            status: None,
            menu_selected: 0,
            id_input: String::new(),
            selected_row: None,
            form: TrackForm::default(),
            tracks_dir: tracks_dir.into(),
            engine: Some(engine),
            session: None,
            quit: false,
        }
    }

    pub fn session(&self) -> Option<&PlaylistSession<E>> {
        self.session.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Switch to `view`, opening or closing the playlist session as needed.
    pub fn open_view(&mut self, view: View) {
        if view == self.view {
            return;
        }
        if self.view == View::CreateTrackList {
            self.close_session();
        }

        self.status = None;
        match view {
            View::Menu => {}
            View::CreateTrackList => {
                self.id_input.clear();
                if let Some(engine) = self.engine.take() {
                    self.session = Some(PlaylistSession::new(engine, self.tracks_dir.clone()));
                }
            }
            View::UpdateTracks => {
                self.selected_row = None;
                self.form = TrackForm::default();
            }
        }

        debug!(from = ?self.view, to = ?view, "view changed");
        self.view = view;
    }

    /// Leave the current view for the menu.
    pub fn go_back(&mut self) {
        self.open_view(View::Menu);
    }

    /// Stop playback before exit.
    pub fn shutdown(&mut self) {
        self.close_session();
    }

    fn close_session(&mut self) {
        if let Some(session) = self.session.take() {
            self.engine = Some(session.into_engine());
        }
    }

    // Menu

    pub fn menu_next(&mut self) {
        self.menu_selected = (self.menu_selected + 1) % MenuItem::ALL.len();
    }

    pub fn menu_prev(&mut self) {
        self.menu_selected = (self.menu_selected + MenuItem::ALL.len() - 1) % MenuItem::ALL.len();
    }

    pub fn activate(&mut self, item: MenuItem) {
        match item {
            MenuItem::CreateTrackList => self.open_view(View::CreateTrackList),
            MenuItem::UpdateTracks => self.open_view(View::UpdateTracks),
            MenuItem::Quit => self.request_quit(),
        }
    }

    pub fn activate_selected(&mut self) {
        let item = MenuItem::ALL[self.menu_selected.min(MenuItem::ALL.len() - 1)];
        self.activate(item);
    }

    // Create Track List

    /// Type into the id box. Anything but a digit is dropped.
    pub fn push_id_char(&mut self, c: char) {
        if c.is_ascii_digit() {
            self.id_input.push(c);
        }
    }

    pub fn pop_id_char(&mut self) {
        self.id_input.pop();
    }

    /// Add the track whose id is in the id box to the playlist.
    pub fn add_to_playlist(&mut self) {
        self.status = None;
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if let Err(e) = session.add(&self.store, self.id_input.trim()) {
            self.status = Some(Status::error(e.to_string()));
        }
    }

    pub fn clear_playlist(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.clear();
        }
    }

    pub fn play_playlist(&mut self) -> Result<(), StoreError> {
        let result = match self.session.as_mut() {
            Some(session) => session.play(&mut self.store),
            None => Ok(()),
        };
        self.report(result)
    }

    pub fn back(&mut self) -> Result<(), StoreError> {
        let result = match self.session.as_mut() {
            Some(session) => session.back(&mut self.store),
            None => Ok(()),
        };
        self.report(result)
    }

    pub fn next(&mut self) -> Result<(), StoreError> {
        let result = match self.session.as_mut() {
            Some(session) => session.next(&mut self.store),
            None => Ok(()),
        };
        self.report(result)
    }

    pub fn toggle_pause(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.toggle_pause();
        }
    }

    /// Periodic refresh of the timer readout.
    pub fn tick(&mut self) -> Option<Progress> {
        self.session.as_mut().and_then(|s| s.tick())
    }

    /// Show recoverable session errors as status text; pass store failures on.
    fn report(&mut self, result: Result<(), SessionError>) -> Result<(), StoreError> {
        match result {
            Ok(()) => Ok(()),
            Err(SessionError::Store(e)) => {
                error!(error = %e, "could not save library");
                Err(e)
            }
            Err(e) => {
                self.status = Some(Status::error(e.to_string()));
                Ok(())
            }
        }
    }

    // Update Tracks

    /// Rows of the track table, in display order.
    pub fn rows(&self) -> Vec<(&str, &TrackRecord)> {
        self.store.iter().collect()
    }

    /// Select row `index` and copy its values into the form.
    pub fn select_row(&mut self, index: usize) {
        let Some((_, record)) = self.store.iter().nth(index) else {
            return;
        };
        let record = record.clone();
        self.selected_row = Some(index);
        self.form.fill(&record);
    }

    pub fn select_next_row(&mut self) {
        let len = self.store.len();
        if len == 0 {
            return;
        }
        let next = match self.selected_row {
            Some(i) if i + 1 < len => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.select_row(next);
    }

    pub fn select_prev_row(&mut self) {
        if self.store.is_empty() {
            return;
        }
        let prev = match self.selected_row {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.select_row(prev);
    }

    /// Save the form into the selected track.
    ///
    /// Validation problems end up in the status line; only a failed write is
    /// returned as an error.
    pub fn update_track(&mut self) -> Result<(), StoreError> {
        let Some(filename) = self
            .selected_row
            .and_then(|i| self.store.iter().nth(i))
            .map(|(name, _)| name.to_string())
        else {
            self.status = Some(Status::error("No track selected."));
            return Ok(());
        };

        let Ok(rating) = self.form.rating.trim().parse::<u8>() else {
            self.status = Some(Status::error(format!(
                "Rating must be between 0 and {MAX_RATING}."
            )));
            return Ok(());
        };
        let id = self.form.id.trim().to_string();

        match self
            .store
            .update_track(&filename, &id, &self.form.artist, rating)
        {
            Ok(()) => {
                info!(track = %filename, "track updated from form");
                self.status = Some(Status::info("Track updated successfully!"));
                Ok(())
            }
            Err(e) if e.is_validation() => {
                self.status = Some(Status::error(e.to_string()));
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "could not save library");
                Err(e)
            }
        }
    }
}
