//! Transcript artifacts persisted between pipeline stages.
//!
//! Every chunk's transcription is written to disk before merging, so a failed
//! rewrite still leaves the raw transcripts behind. All artifacts are plain
//! UTF-8 text.

use crate::defaults;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// The text produced by transcribing exactly one `MediaChunk`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptUnit {
    pub text: String,
    /// Sequence index of the chunk this text came from.
    pub chunk_index: usize,
    pub path: PathBuf,
}

impl TranscriptUnit {
    /// Persist transcript text and return the unit describing it.
    pub fn write(text: String, chunk_index: usize, path: PathBuf) -> Result<Self> {
        fs::write(&path, &text)?;
        Ok(Self {
            text,
            chunk_index,
            path,
        })
    }
}

/// The final merged report, terminal artifact of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub text: String,
    pub path: PathBuf,
}

impl Report {
    /// Persist the report text and return the artifact.
    pub fn write(text: String, path: PathBuf) -> Result<Self> {
        fs::write(&path, &text)?;
        Ok(Self { text, path })
    }
}

/// Where the transcript for a chunk goes: `transcription_{stem}.txt`, in the
/// destination directory when given, otherwise next to the chunk itself.
pub fn transcript_path(chunk_path: &Path, destination: Option<&Path>) -> PathBuf {
    let dir = destination
        .map(Path::to_path_buf)
        .unwrap_or_else(|| parent_or_cwd(chunk_path));
    let stem = chunk_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "audio".to_string());
    dir.join(format!("{}{}.txt", defaults::TRANSCRIPT_PREFIX, stem))
}

/// Where the final report goes: `optimized_{first transcript's file name}`,
/// in the destination directory when given, otherwise next to that transcript.
pub fn report_path(first_transcript: &Path, destination: Option<&Path>) -> PathBuf {
    let dir = destination
        .map(Path::to_path_buf)
        .unwrap_or_else(|| parent_or_cwd(first_transcript));
    let name = first_transcript
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "transcript.txt".to_string());
    dir.join(format!("{}{}", defaults::REPORT_PREFIX, name))
}

fn parent_or_cwd(path: &Path) -> PathBuf {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn transcript_path_defaults_next_to_chunk() {
        let path = transcript_path(Path::new("/data/meeting_000.mp3"), None);
        assert_eq!(path, PathBuf::from("/data/transcription_meeting_000.txt"));
    }

    #[test]
    fn transcript_path_honors_destination() {
        let path = transcript_path(
            Path::new("/data/meeting_000.mp3"),
            Some(Path::new("/reports")),
        );
        assert_eq!(
            path,
            PathBuf::from("/reports/transcription_meeting_000.txt")
        );
    }

    #[test]
    fn transcript_path_replaces_audio_extension() {
        let path = transcript_path(Path::new("talk.ogg"), None);
        assert_eq!(path, PathBuf::from("./transcription_talk.txt"));
    }

    #[test]
    fn report_path_prefixes_transcript_name() {
        let path = report_path(Path::new("/data/transcription_meeting_000.txt"), None);
        assert_eq!(
            path,
            PathBuf::from("/data/optimized_transcription_meeting_000.txt")
        );
    }

    #[test]
    fn report_path_honors_destination() {
        let path = report_path(
            Path::new("/data/transcription_meeting_000.txt"),
            Some(Path::new("/reports")),
        );
        assert_eq!(
            path,
            PathBuf::from("/reports/optimized_transcription_meeting_000.txt")
        );
    }

    #[test]
    fn transcript_unit_write_persists_text() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("transcription_a.txt");

        let unit = TranscriptUnit::write("hello there".to_string(), 2, path.clone()).unwrap();

        assert_eq!(unit.chunk_index, 2);
        assert_eq!(unit.path, path);
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello there");
    }

    #[test]
    fn report_write_persists_text() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("optimized_a.txt");

        let report = Report::write("first\n\nsecond".to_string(), path.clone()).unwrap();

        assert_eq!(report.path, path);
        assert_eq!(fs::read_to_string(&path).unwrap(), "first\n\nsecond");
    }
}
