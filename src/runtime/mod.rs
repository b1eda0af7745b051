use std::env;
use std::path::Path;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::config::{self, Settings};
use crate::error::PlayerError;
use crate::player::{RodioEngine, Transport};
use crate::playlist::Playlist;

mod event_loop;

/// Set up a file-backed tracing subscriber next to the config file.
///
/// The terminal belongs to ratatui, so logs go to `cadenza.log` with ANSI
/// off. Any failure here is swallowed; the player runs fine unlogged.
fn init_logging() {
    let Some(dir) = config::default_config_dir() else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = std::fs::File::create(dir.join("cadenza.log")) else {
        return;
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,cadenza=info"));
    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_env_filter(filter)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn load_settings() -> Settings {
    match Settings::load() {
        Ok(settings) => match settings.validate() {
            Ok(()) => settings,
            Err(reason) => {
                tracing::warn!(%reason, "invalid settings, using defaults");
                Settings::default()
            }
        },
        Err(e) => {
            tracing::warn!(error = %e, "failed to load settings, using defaults");
            Settings::default()
        }
    }
}

/// Pre-populate the playlist from an optional starting directory argument.
fn seed_playlist(app: &mut App, settings: &Settings) {
    let Some(dir) = env::args().nth(1) else {
        return;
    };

    match app
        .playlist
        .add_folder(Path::new(&dir), &settings.library.extensions)
    {
        Ok(added) => app.set_notice(format!("added {added} files from {dir}")),
        Err(PlayerError::NoMatchingFiles(_)) => {
            app.set_notice(format!("no audio files in {dir}"));
        }
        Err(e) => app.set_notice(format!("cannot read {dir}: {e}")),
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let settings = load_settings();

    let engine = RodioEngine::new()?;
    let mut transport = Transport::new(engine, settings.audio.initial_volume);
    let mut app = App::new(Playlist::new());
    seed_playlist(&mut app, &settings);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app, &mut transport);

    // Best-effort shutdown: playback stops and the terminal is restored
    // even when the loop errored.
    transport.stop();
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}
