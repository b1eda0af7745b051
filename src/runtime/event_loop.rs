use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, Prompt, PromptKind};
use crate::config::Settings;
use crate::error::PlayerError;
use crate::player::{AudioEngine, Transport};
use crate::ui;

const TICK: Duration = Duration::from_millis(50);

/// Main terminal event loop: draws the UI on every tick, auto-advances
/// finished tracks and dispatches key events. Returns when quit is
/// requested.
pub fn run<E: AudioEngine>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &Settings,
    app: &mut App,
    transport: &mut Transport<E>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        if let Err(e) = transport.tick(&mut app.playlist) {
            app.set_notice(e.to_string());
        }

        terminal.draw(|f| ui::draw(f, app, transport, &settings.ui))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, app, transport)? {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Surface a recoverable transport error as a notice; on success, keep the
/// highlight on the playing track.
fn report(app: &mut App, result: Result<(), PlayerError>) {
    match result {
        Ok(()) => {
            app.selected = app.playlist.cursor();
            app.notice = None;
        }
        Err(e) => app.set_notice(e.to_string()),
    }
}

fn handle_key_event<E: AudioEngine>(
    key: KeyEvent,
    settings: &Settings,
    app: &mut App,
    transport: &mut Transport<E>,
) -> Result<bool, Box<dyn std::error::Error>> {
    if app.prompt.is_some() {
        match key.code {
            KeyCode::Esc => app.cancel_prompt(),
            KeyCode::Backspace => app.pop_prompt_char(),
            KeyCode::Enter => {
                if let Some(prompt) = app.take_prompt() {
                    commit_prompt(prompt, settings, app);
                }
            }
            KeyCode::Char(c) => {
                if !c.is_control() {
                    app.push_prompt_char(c);
                }
            }
            _ => {}
        }
        return Ok(false);
    }

    match key.code {
        KeyCode::Char('q') => {
            transport.stop();
            return Ok(true);
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.select_next();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.select_prev();
        }
        KeyCode::Enter => {
            if app.has_tracks() {
                let selected = app.selected;
                let result = transport.play_selected(&mut app.playlist, selected);
                report(app, result);
            }
        }
        KeyCode::Char('p') | KeyCode::Char(' ') => {
            let result = transport.toggle_play_pause(&app.playlist);
            report(app, result);
        }
        KeyCode::Char('x') => {
            transport.stop();
            app.notice = None;
        }
        KeyCode::Char('l') => {
            let result = transport.next(&mut app.playlist);
            report(app, result);
        }
        KeyCode::Char('h') => {
            let result = transport.previous(&mut app.playlist);
            report(app, result);
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            transport.set_volume(transport.volume() + settings.audio.volume_step);
        }
        KeyCode::Char('-') => {
            transport.set_volume(transport.volume() - settings.audio.volume_step);
        }
        KeyCode::Char('a') => {
            app.open_prompt(PromptKind::AddFile);
        }
        KeyCode::Char('d') => {
            app.open_prompt(PromptKind::AddFolder);
        }
        KeyCode::Char('c') => {
            transport.clear(&mut app.playlist);
            app.clamp_selected();
            app.set_notice("playlist cleared");
        }
        _ => {}
    }

    Ok(false)
}

/// Apply a committed path prompt to the playlist.
fn commit_prompt(prompt: Prompt, settings: &Settings, app: &mut App) {
    let input = prompt.input.trim();
    if input.is_empty() {
        return;
    }
    let path = PathBuf::from(input);

    match prompt.kind {
        PromptKind::AddFile => {
            if !path.is_file() {
                app.set_notice(format!("no such file: {input}"));
                return;
            }
            // Duplicates are a silent no-op, matching the store contract.
            if app.playlist.add(path) {
                app.set_notice(format!("added {input}"));
            }
        }
        PromptKind::AddFolder => {
            match app
                .playlist
                .add_folder(&path, &settings.library.extensions)
            {
                Ok(added) => app.set_notice(format!("added {added} files")),
                Err(e) => app.set_notice(e.to_string()),
            }
        }
    }
    app.clamp_selected();
}
