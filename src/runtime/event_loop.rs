use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::debug;

use crate::app::{App, MenuItem, View};
use crate::audio::PlaybackEngine;
use crate::config;
use crate::store::StoreError;
use crate::ui;

/// Main terminal event loop: draws, handles input and refreshes the playback
/// timer every `playback.tick_ms`. Returns `Ok(())` when shutdown is requested.
pub fn run<E: PlaybackEngine>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App<E>,
) -> Result<(), Box<dyn std::error::Error>> {
    let tick_rate = Duration::from_millis(settings.playback.tick_ms);
    let mut last_tick = Instant::now();

    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, app, &settings.ui))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key_event(key, app)?;
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}

/// Apply one key press to `app`. Only a failed library write is an error.
pub(super) fn handle_key_event<E: PlaybackEngine>(
    key: KeyEvent,
    app: &mut App<E>,
) -> Result<(), StoreError> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        debug!("ctrl-c");
        app.request_quit();
        return Ok(());
    }

    match app.view {
        View::Menu => handle_menu_key(key, app),
        View::CreateTrackList => handle_playlist_key(key, app)?,
        View::UpdateTracks => handle_update_key(key, app)?,
    }
    Ok(())
}

fn handle_menu_key<E: PlaybackEngine>(key: KeyEvent, app: &mut App<E>) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.menu_next(),
        KeyCode::Char('k') | KeyCode::Up => app.menu_prev(),
        KeyCode::Enter => app.activate_selected(),
        KeyCode::Char('1') => app.activate(MenuItem::CreateTrackList),
        KeyCode::Char('2') => app.activate(MenuItem::UpdateTracks),
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        _ => {}
    }
}

fn handle_playlist_key<E: PlaybackEngine>(
    key: KeyEvent,
    app: &mut App<E>,
) -> Result<(), StoreError> {
    match key.code {
        KeyCode::Esc => app.go_back(),
        KeyCode::Char(c) if c.is_ascii_digit() => app.push_id_char(c),
        KeyCode::Backspace => app.pop_id_char(),
        KeyCode::Enter => app.add_to_playlist(),
        KeyCode::Char('c') => app.clear_playlist(),
        KeyCode::Char('p') => app.play_playlist()?,
        KeyCode::Char('h') | KeyCode::Left => app.back()?,
        KeyCode::Char('l') | KeyCode::Right => app.next()?,
        KeyCode::Char(' ') => app.toggle_pause(),
        _ => {}
    }
    Ok(())
}

fn handle_update_key<E: PlaybackEngine>(
    key: KeyEvent,
    app: &mut App<E>,
) -> Result<(), StoreError> {
    match key.code {
        KeyCode::Esc => app.go_back(),
        KeyCode::Down => app.select_next_row(),
        KeyCode::Up => app.select_prev_row(),
        KeyCode::Tab => app.form.focus = app.form.focus.next(),
        KeyCode::BackTab => app.form.focus = app.form.focus.prev(),
        KeyCode::Backspace => app.form.pop_char(),
        KeyCode::Enter => app.update_track()?,
        KeyCode::Char(c) => app.form.push_char(c),
        _ => {}
    }
    Ok(())
}
