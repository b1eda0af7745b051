use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::PlayerError;

use super::scan::{list_audio_files, probe_duration};

#[derive(Clone)]
pub struct Track {
    pub path: PathBuf,
    /// The file's base name, shown in the playlist table.
    pub display: String,
    /// `None` when the duration probe failed (unreadable or untagged file).
    pub duration: Option<Duration>,
}

impl Track {
    pub fn new(path: PathBuf) -> Self {
        let display = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("UNKNOWN")
            .to_string();
        let duration = probe_duration(&path);

        Self {
            path,
            display,
            duration,
        }
    }
}

/// Ordered track list plus a cursor pointing at the current track.
///
/// The cursor is only meaningful while the playlist is non-empty; advancing
/// and retreating wrap modulo the track count.
#[derive(Default)]
pub struct Playlist {
    tracks: Vec<Track>,
    cursor: usize,
}

impl Playlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The track under the cursor, `None` when the playlist is empty.
    pub fn current(&self) -> Option<&Track> {
        self.tracks.get(self.cursor)
    }

    /// Append a track for `path`, probing its duration. Duplicate paths are
    /// a silent no-op; returns whether the track was added.
    pub fn add(&mut self, path: PathBuf) -> bool {
        if self.tracks.iter().any(|t| t.path == path) {
            return false;
        }

        let track = Track::new(path);
        tracing::debug!(path = %track.path.display(), "track added");
        self.tracks.push(track);
        true
    }

    /// Add every audio file directly inside `dir` (non-recursive), matching
    /// `extensions` case-insensitively, in file-name order.
    ///
    /// Returns the number of tracks actually added; files already in the
    /// playlist are skipped. A directory with no matching files at all is
    /// reported as `NoMatchingFiles`, distinct from an unreadable directory.
    pub fn add_folder(
        &mut self,
        dir: &Path,
        extensions: &[String],
    ) -> Result<usize, PlayerError> {
        let matched = list_audio_files(dir, extensions)?;
        if matched.is_empty() {
            return Err(PlayerError::NoMatchingFiles(dir.to_path_buf()));
        }

        let mut added = 0;
        for path in matched {
            if self.add(path) {
                added += 1;
            }
        }

        tracing::info!(dir = %dir.display(), added, "folder added to playlist");
        Ok(added)
    }

    /// Empty the playlist and reset the cursor. Callers must stop playback
    /// first; `Transport::clear` enforces that ordering.
    pub fn clear(&mut self) {
        self.tracks.clear();
        self.cursor = 0;
    }

    /// Point the cursor at `index`.
    pub fn select(&mut self, index: usize) -> Result<(), PlayerError> {
        if index >= self.tracks.len() {
            return Err(PlayerError::OutOfRange {
                index,
                len: self.tracks.len(),
            });
        }
        self.cursor = index;
        Ok(())
    }

    /// Move the cursor forward, wrapping. No-op on an empty playlist.
    pub fn advance(&mut self) {
        if !self.tracks.is_empty() {
            self.cursor = (self.cursor + 1) % self.tracks.len();
        }
    }

    /// Move the cursor backward, wrapping. No-op on an empty playlist.
    pub fn retreat(&mut self) {
        if !self.tracks.is_empty() {
            self.cursor = (self.cursor + self.tracks.len() - 1) % self.tracks.len();
        }
    }
}
