//! Error types surfaced to the user as notices.
//!
//! Every variant here is recoverable: the event loop catches the error at
//! the call site, shows it in the status area and carries on.

use std::path::PathBuf;

use thiserror::Error;

use crate::player::EngineError;

#[derive(Debug, Error)]
pub enum PlayerError {
    /// A transport action was attempted with no tracks loaded.
    #[error("playlist is empty")]
    EmptyPlaylist,

    /// The engine failed to load or play a file.
    #[error("playback failed: {0}")]
    Playback(#[from] EngineError),

    /// A folder add found no files with a matching audio extension.
    #[error("no matching audio files in {}", .0.display())]
    NoMatchingFiles(PathBuf),

    /// A track index outside the playlist range.
    #[error("track index {index} out of range (playlist has {len} tracks)")]
    OutOfRange { index: usize, len: usize },

    #[error("{0}")]
    Io(#[from] std::io::Error),
}
