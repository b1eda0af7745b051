//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, Gauge, List, ListItem, Padding, Paragraph, Wrap},
};
use std::time::Duration;

use crate::app::{App, PromptKind};
use crate::config::UiSettings;
use crate::player::{AudioEngine, Status, Transport};

/// Format a `Duration` as `MM:SS`.
pub fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Format an optional track duration; unknown durations render as `--:--`.
fn format_track_duration(d: Option<Duration>) -> String {
    match d {
        Some(d) => format_mmss(d),
        None => "--:--".to_string(),
    }
}

/// Build the `elapsed / total` time text for the status line.
fn time_text<E: AudioEngine>(app: &App, transport: &Transport<E>, ui: &UiSettings) -> String {
    let total = app.playlist.current().and_then(|t| t.duration);
    format!(
        "{}{}{}",
        format_mmss(transport.elapsed()),
        ui.time_separator,
        format_track_duration(total)
    )
}

fn status_text<E: AudioEngine>(app: &App, transport: &Transport<E>, ui: &UiSettings) -> String {
    let mut parts: Vec<String> = Vec::new();

    match transport.status() {
        Status::Stopped => parts.push("Stopped".to_string()),
        Status::Playing | Status::Paused => {
            let state = if transport.status() == Status::Playing {
                "Playing"
            } else {
                "Paused"
            };
            parts.push(state.to_string());
            if let Some(track) = app.playlist.current() {
                parts.push(format!(
                    "Song: {} [{}]",
                    track.display,
                    time_text(app, transport, ui)
                ));
            }
        }
    }

    parts.push(format!(
        "Volume: {}%",
        (transport.volume() * 100.0).round() as u32
    ));
    parts.push(format!("Tracks: {}", app.playlist.len()));

    parts.join(" • ")
}

/// The second status line: an active prompt wins over the last notice.
fn message_text(app: &App) -> String {
    if let Some(prompt) = &app.prompt {
        let label = match prompt.kind {
            PromptKind::AddFile => "Add file path",
            PromptKind::AddFolder => "Add folder path",
        };
        return format!("{}: {}_", label, prompt.input);
    }
    app.notice.clone().unwrap_or_default()
}

fn controls_text(app: &App) -> String {
    if app.prompt.is_some() {
        return "[enter] confirm | [esc] cancel | [backspace] delete".to_string();
    }
    [
        "[j/k] select",
        "[enter] play selected",
        "[space/p] play/pause",
        "[x] stop",
        "[h/l] prev/next",
        "[-/+] volume",
        "[a] add file",
        "[d] add folder",
        "[c] clear",
        "[q] quit",
    ]
    .join(" | ")
}

/// Render the entire UI into the provided `frame`.
pub fn draw<E: AudioEngine>(
    frame: &mut Frame,
    app: &App,
    transport: &Transport<E>,
    ui_settings: &UiSettings,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
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
                .title(" cadenza ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Status box: playback line plus prompt/notice line.
    let status = format!(
        "{}\n{}",
        status_text(app, transport, ui_settings),
        message_text(app)
    );
    let status_par = Paragraph::new(status)
        .block(
            Block::bordered()
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                })
                .title(" status "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(status_par, chunks[1]);

    // Progress gauge: elapsed over total when a duration is known.
    let total = app.playlist.current().and_then(|t| t.duration);
    let ratio = match (transport.status(), total) {
        (Status::Stopped, _) | (_, None) => 0.0,
        (_, Some(total)) if total.is_zero() => 0.0,
        (_, Some(total)) => (transport.elapsed().as_secs_f64() / total.as_secs_f64()).min(1.0),
    };
    let gauge_label = if transport.status() == Status::Stopped {
        format!("00:00{}00:00", ui_settings.time_separator)
    } else {
        time_text(app, transport, ui_settings)
    };
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" progress "))
        .ratio(ratio)
        .label(gauge_label);
    frame.render_widget(gauge, chunks[2]);

    // Playlist table: index, file name, duration. The playing row gets a
    // marker; the UI highlight tracks `app.selected`.
    {
        let cursor = app.playlist.cursor();
        let active = transport.status() != Status::Stopped;
        let items: Vec<ListItem> = app
            .playlist
            .tracks()
            .iter()
            .enumerate()
            .map(|(i, track)| {
                let marker = if active && i == cursor { "▶" } else { " " };
                ListItem::new(format!(
                    "{} {:>3}  {:<48}  {:>6}",
                    marker,
                    i + 1,
                    track.display,
                    format_track_duration(track.duration)
                ))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" playlist (#  file  length) "),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut state = ratatui::widgets::ListState::default();
        if app.has_tracks() {
            state.select(Some(app.selected));
        }
        frame.render_stateful_widget(list, chunks[3], &mut state);
    }

    // Footer
    let footer = Paragraph::new(controls_text(app))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[4]);
}
