//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`. Drawing
//! reads the `App` model only; all state changes happen in the event loop.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{
        Block, Borders, Cell, Gauge, List, ListItem, ListState, Padding, Paragraph, Row, Table,
        TableState, Wrap,
    },
};

use crate::app::{App, FormField, MenuItem, StatusKind, View};
use crate::audio::PlaybackEngine;
use crate::config::UiSettings;
use crate::library::song_name;

const LEFT_PAD: Padding = Padding {
    left: 1,
    right: 0,
    top: 0,
    bottom: 0,
};

/// Render the controls help text for `view`.
fn controls_text(view: View) -> String {
    let pairs: &[(&str, &str)] = match view {
        View::Menu => &[
            ("j/k", "up/down"),
            ("enter", "open"),
            ("1/2", "create list/update tracks"),
            ("q", "quit"),
        ],
        View::CreateTrackList => &[
            ("0-9", "track id"),
            ("enter", "add"),
            ("p", "play"),
            ("h/l", "back/next"),
            ("space", "pause/resume"),
            ("c", "clear"),
            ("esc", "menu"),
        ],
        View::UpdateTracks => &[
            ("up/down", "select track"),
            ("tab", "next field"),
            ("enter", "update"),
            ("esc", "menu"),
        ],
    };
    pairs
        .iter()
        .map(|(k, v)| format!("[{k}] {v}"))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Render the entire UI into the provided `frame` using `app` state and settings.
pub fn draw<E: PlaybackEngine>(frame: &mut Frame, app: &App<E>, ui_settings: &UiSettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" jukebox ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Status line
    let (text, style) = match &app.status {
        Some(status) => {
            let color = match status.kind {
                StatusKind::Info => Color::Green,
                StatusKind::Error => Color::Red,
            };
            (status.text.as_str(), Style::default().fg(color))
        }
        None => ("", Style::default()),
    };
    let status_par = Paragraph::new(text)
        .style(style)
        .block(Block::bordered().padding(LEFT_PAD).title(" status "))
        .wrap(Wrap { trim: true });
    frame.render_widget(status_par, chunks[1]);

    match app.view {
        View::Menu => draw_menu(frame, app, chunks[2]),
        View::CreateTrackList => draw_playlist(frame, app, chunks[2]),
        View::UpdateTracks => draw_update(frame, app, chunks[2]),
    }

    let footer = Paragraph::new(controls_text(app.view))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(LEFT_PAD),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[3]);
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(5);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width: width.min(r.width),
        height: height.min(r.height),
    }
}

fn draw_menu<E: PlaybackEngine>(frame: &mut Frame, app: &App<E>, area: Rect) {
    let items: Vec<ListItem> = MenuItem::ALL
        .iter()
        .map(|item| ListItem::new(item.label()))
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" menu "))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.menu_selected));
    frame.render_stateful_widget(list, centered_rect_sized(32, 7, area), &mut state);
}

fn draw_playlist<E: PlaybackEngine>(frame: &mut Frame, app: &App<E>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(area);

    let input = Paragraph::new(app.id_input.as_str())
        .block(Block::bordered().padding(LEFT_PAD).title(" Enter Track ID "));
    frame.render_widget(input, chunks[0]);

    let Some(session) = app.session() else {
        return;
    };

    if session.is_empty() {
        let hint = Paragraph::new("Playlist is empty. Type a track ID and press enter.")
            .style(Style::default().add_modifier(Modifier::DIM))
            .block(Block::bordered().padding(LEFT_PAD).title(" playlist "));
        frame.render_widget(hint, chunks[1]);
    } else {
        let items: Vec<ListItem> = session.listing().into_iter().map(ListItem::new).collect();
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" playlist ({}) ", session.len())),
            )
            .highlight_style(Style::default().add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");
        let mut state = ListState::default();
        state.select(session.cursor());
        frame.render_stateful_widget(list, chunks[1], &mut state);
    }

    let progress = session.progress();
    let title = match session.current() {
        Some(entry) if session.is_loaded() => {
            let state = if session.is_playing() {
                "Playing"
            } else {
                "Paused"
            };
            format!(" {state}: {} ", song_name(&entry.filename))
        }
        _ => " Stopped ".to_string(),
    };
    let gauge = Gauge::default()
        .block(Block::bordered().title(title))
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(progress.ratio)
        .label(format!(
            "{} / {}",
            progress.elapsed_text(),
            progress.total_text()
        ));
    frame.render_widget(gauge, chunks[2]);
}

fn draw_update<E: PlaybackEngine>(frame: &mut Frame, app: &App<E>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(32)])
        .split(area);

    let header = Row::new(["ID", "Song Name", "Artist", "Rating", "Play Count"])
        .style(Style::default().add_modifier(Modifier::BOLD));
    let rows: Vec<Row> = app
        .rows()
        .into_iter()
        .map(|(filename, record)| {
            Row::new([
                Cell::from(record.id.clone()),
                Cell::from(song_name(filename).to_string()),
                Cell::from(record.artist.clone()),
                Cell::from(record.rating.to_string()),
                Cell::from(record.play_count.to_string()),
            ])
        })
        .collect();
    let table = Table::new(
        rows,
        [
            Constraint::Length(6),
            Constraint::Fill(2),
            Constraint::Fill(1),
            Constraint::Length(6),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" tracks ({} on disk) ", app.catalog.len())),
    )
    .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut state = TableState::default();
    state.select(app.selected_row);
    frame.render_stateful_widget(table, chunks[0], &mut state);

    let form_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(chunks[1]);

    let fields = [
        (FormField::Id, " ID ", app.form.id.as_str()),
        (FormField::Artist, " Artist ", app.form.artist.as_str()),
        (FormField::Rating, " Rating (0-5) ", app.form.rating.as_str()),
    ];
    for (i, (field, title, value)) in fields.into_iter().enumerate() {
        let border = if app.form.focus == field {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let input = Paragraph::new(value).block(
            Block::bordered()
                .border_style(border)
                .padding(LEFT_PAD)
                .title(title),
        );
        frame.render_widget(input, form_chunks[i]);
    }
}
