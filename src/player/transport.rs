use std::time::{Duration, Instant};

use crate::error::PlayerError;
use crate::playlist::Playlist;

use super::engine::AudioEngine;

/// The playback status of the transport.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// Transport controller: owns the engine, drives the playlist cursor.
///
/// Elapsed time is wall-clock bookkeeping (`started_at` + `accumulated`),
/// not an engine position query. It runs while Playing, freezes while
/// Paused and resets on every (re)load.
pub struct Transport<E> {
    engine: E,
    status: Status,
    volume: f32,
    started_at: Option<Instant>,
    accumulated: Duration,
}

impl<E: AudioEngine> Transport<E> {
    pub fn new(mut engine: E, initial_volume: f32) -> Self {
        let volume = initial_volume.clamp(0.0, 1.0);
        engine.set_volume(volume);

        Self {
            engine,
            status: Status::Stopped,
            volume,
            started_at: None,
            accumulated: Duration::ZERO,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Wall-clock playback time for the current track.
    pub fn elapsed(&self) -> Duration {
        self.accumulated
            + self
                .started_at
                .map_or(Duration::ZERO, |started| started.elapsed())
    }

    fn load_and_play(&mut self, playlist: &Playlist) -> Result<(), PlayerError> {
        // The status only moves once the engine accepted the file; a failed
        // load leaves the transport claiming whatever it claimed before.
        let Some(track) = playlist.current() else {
            return Ok(());
        };

        self.engine.load(&track.path).inspect_err(
            |e| tracing::warn!(path = %track.path.display(), error = %e, "load failed"),
        )?;
        self.engine.play();

        self.status = Status::Playing;
        self.started_at = Some(Instant::now());
        self.accumulated = Duration::ZERO;
        tracing::info!(track = %track.display, "playing");
        Ok(())
    }

    /// Stopped: start the cursor track. Playing: pause. Paused: resume.
    pub fn toggle_play_pause(&mut self, playlist: &Playlist) -> Result<(), PlayerError> {
        match self.status {
            Status::Stopped => {
                if playlist.is_empty() {
                    return Err(PlayerError::EmptyPlaylist);
                }
                self.load_and_play(playlist)
            }
            Status::Playing => {
                self.engine.pause();
                if let Some(started) = self.started_at.take() {
                    self.accumulated += started.elapsed();
                }
                self.status = Status::Paused;
                Ok(())
            }
            Status::Paused => {
                self.engine.resume();
                self.started_at = Some(Instant::now());
                self.status = Status::Playing;
                Ok(())
            }
        }
    }

    /// Stop playback. Idempotent; a no-op while already Stopped.
    pub fn stop(&mut self) {
        self.engine.stop();
        self.status = Status::Stopped;
        self.started_at = None;
        self.accumulated = Duration::ZERO;
    }

    /// Advance the cursor. While Stopped only the cursor moves; while
    /// Playing or Paused the new track starts playing (skipping while
    /// paused resumes playback, matching the reference player).
    pub fn next(&mut self, playlist: &mut Playlist) -> Result<(), PlayerError> {
        if playlist.is_empty() {
            return Ok(());
        }
        playlist.advance();
        if self.status == Status::Stopped {
            return Ok(());
        }
        self.load_and_play(playlist)
    }

    /// Symmetric to `next`, cursor retreats with wrap-around.
    pub fn previous(&mut self, playlist: &mut Playlist) -> Result<(), PlayerError> {
        if playlist.is_empty() {
            return Ok(());
        }
        playlist.retreat();
        if self.status == Status::Stopped {
            return Ok(());
        }
        self.load_and_play(playlist)
    }

    /// Select `index` and play it, from any state.
    pub fn play_selected(
        &mut self,
        playlist: &mut Playlist,
        index: usize,
    ) -> Result<(), PlayerError> {
        playlist.select(index)?;
        self.load_and_play(playlist)
    }

    /// Clamp to `[0.0, 1.0]` and apply immediately; never changes status.
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        self.engine.set_volume(self.volume);
    }

    /// Stop playback, then empty the playlist. The ordering matters: the
    /// engine must not be left holding a track the list no longer has.
    pub fn clear(&mut self, playlist: &mut Playlist) {
        if self.status != Status::Stopped {
            self.stop();
        }
        playlist.clear();
        tracing::info!("playlist cleared");
    }

    /// Poll tick: when the current track has played out, move to the next
    /// one. A failed reload stops the transport instead of looping on the
    /// bad file.
    pub fn tick(&mut self, playlist: &mut Playlist) -> Result<(), PlayerError> {
        if self.status != Status::Playing || !self.engine.is_finished() {
            return Ok(());
        }

        if playlist.is_empty() {
            self.stop();
            return Ok(());
        }

        playlist.advance();
        self.load_and_play(playlist).inspect_err(|_| self.stop())
    }
}
