use std::path::{Path, PathBuf};
use std::time::Duration;

use lofty::file::AudioFile;
use walkdir::WalkDir;

use crate::error::PlayerError;

fn is_audio_file(path: &Path, extensions: &[String]) -> bool {
    let exts: Vec<String> = extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

/// List the audio files directly inside `dir`, sorted by file name.
///
/// Sorting makes the add order deterministic; raw directory order is
/// platform-defined.
pub(super) fn list_audio_files(
    dir: &Path,
    extensions: &[String],
) -> Result<Vec<PathBuf>, PlayerError> {
    let mut matched: Vec<PathBuf> = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = entry.map_err(|e| {
            PlayerError::Io(
                e.into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("directory walk failed")),
            )
        })?;

        let path = entry.path();
        if path.is_file() && is_audio_file(path, extensions) {
            matched.push(path.to_path_buf());
        }
    }

    matched.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(matched)
}

/// Read the track length from the file's tags/properties.
///
/// Failure is tolerated as "unknown": corrupt or unreadable files still get
/// a playlist row, they just show no duration.
pub fn probe_duration(path: &Path) -> Option<Duration> {
    lofty::read_from_path(path)
        .ok()
        .map(|tagged| tagged.properties().duration())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_audio_file_matches_extensions_case_insensitive() {
        let exts = vec!["mp3".to_string(), "ogg".to_string()];
        assert!(is_audio_file(Path::new("/tmp/a.mp3"), &exts));
        assert!(is_audio_file(Path::new("/tmp/a.MP3"), &exts));
        assert!(is_audio_file(Path::new("/tmp/a.ogg"), &exts));
        assert!(!is_audio_file(Path::new("/tmp/a.flac"), &exts));
        assert!(!is_audio_file(Path::new("/tmp/a.txt"), &exts));
        assert!(!is_audio_file(Path::new("/tmp/a"), &exts));
    }

    #[test]
    fn is_audio_file_tolerates_dotted_or_padded_extension_config() {
        let exts = vec![".mp3".to_string(), " wav ".to_string(), "".to_string()];
        assert!(is_audio_file(Path::new("/tmp/a.mp3"), &exts));
        assert!(is_audio_file(Path::new("/tmp/a.wav"), &exts));
        assert!(!is_audio_file(Path::new("/tmp/a.ogg"), &exts));
    }

    #[test]
    fn probe_duration_fails_soft_on_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not-audio.mp3");
        std::fs::write(&path, b"not a real mp3").unwrap();
        assert!(probe_duration(&path).is_none());
    }
}
