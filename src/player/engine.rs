use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("cannot decode audio: {0}")]
    Decode(String),

    #[error("no audio output device: {0}")]
    NoDevice(String),
}

/// The external playback engine, seen through the narrow surface the
/// transport needs. Kept as a trait so the state machine is testable
/// without an output device.
pub trait AudioEngine {
    /// Prepare `path` for playback, replacing any current stream.
    ///
    /// On failure the current stream must be left untouched: a rejected
    /// file must not silence whatever was already playing.
    fn load(&mut self, path: &Path) -> Result<(), EngineError>;
    fn play(&mut self);
    fn pause(&mut self);
    fn resume(&mut self);
    /// Stop and drop the current stream. Idempotent.
    fn stop(&mut self);
    /// Apply an output volume in `[0.0, 1.0]`; carried over to later loads.
    fn set_volume(&mut self, volume: f32);
    /// Whether the current stream has played out. `false` with no stream.
    fn is_finished(&self) -> bool;
}

/// rodio-backed engine: one output stream, at most one sink at a time.
pub struct RodioEngine {
    stream: OutputStream,
    sink: Option<Sink>,
    volume: f32,
}

impl RodioEngine {
    pub fn new() -> Result<Self, EngineError> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| EngineError::NoDevice(e.to_string()))?;
        // rodio logs to stderr when OutputStream is dropped. That's useful in
        // debugging, but noisy for a TUI app.
        stream.log_on_drop(false);

        Ok(Self {
            stream,
            sink: None,
            volume: 1.0,
        })
    }
}

impl AudioEngine for RodioEngine {
    fn load(&mut self, path: &Path) -> Result<(), EngineError> {
        let file = File::open(path)?;
        let source = Decoder::new(BufReader::new(file))
            .map_err(|e| EngineError::Decode(e.to_string()))?;

        // Build the replacement sink first; only a successful decode may
        // tear down the old stream.
        let sink = Sink::connect_new(self.stream.mixer());
        sink.append(source);
        sink.pause();
        sink.set_volume(self.volume);

        if let Some(old) = self.sink.take() {
            old.stop();
        }
        self.sink = Some(sink);
        Ok(())
    }

    fn play(&mut self) {
        if let Some(s) = &self.sink {
            s.play();
        }
    }

    fn pause(&mut self) {
        if let Some(s) = &self.sink {
            s.pause();
        }
    }

    fn resume(&mut self) {
        if let Some(s) = &self.sink {
            s.play();
        }
    }

    fn stop(&mut self) {
        if let Some(s) = self.sink.take() {
            s.stop();
        }
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        if let Some(s) = &self.sink {
            s.set_volume(volume);
        }
    }

    fn is_finished(&self) -> bool {
        self.sink.as_ref().map(|s| s.empty()).unwrap_or(false)
    }
}
