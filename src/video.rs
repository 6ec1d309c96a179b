//! Audio extraction from video containers.
//!
//! Runs one ffmpeg pass that drops the video stream and encodes the audio
//! track as mp3, producing an input the rest of the pipeline handles like any
//! other audio file. Only invoked on the video code path.

use crate::defaults;
use crate::error::{Result, VoxbriefError};
use crate::exec::CommandRunner;
use std::fs;
use std::path::{Path, PathBuf};

/// Whether a path looks like a video file, judged by extension.
pub fn is_video_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .is_some_and(|ext| defaults::VIDEO_EXTENSIONS.contains(&ext.as_str()))
}

/// Extract the audio track of `video_path` into an mp3 next to the source.
///
/// # Errors
///
/// * `SourceNotFoundOrEmpty` when the video is missing or zero-length.
/// * `ExtractionFailed` with ffmpeg's stderr when the transcode exits non-zero.
pub fn extract_audio(video_path: &Path, runner: &dyn CommandRunner) -> Result<PathBuf> {
    let exists_nonempty = fs::metadata(video_path).map(|m| m.len() > 0).unwrap_or(false);
    if !exists_nonempty {
        return Err(VoxbriefError::SourceNotFoundOrEmpty {
            path: video_path.display().to_string(),
        });
    }

    let audio_path = video_path.with_extension("mp3");

    let input = video_path.to_string_lossy();
    let output = audio_path.to_string_lossy();
    let args = [
        "-y",
        "-i",
        input.as_ref(),
        "-vn",
        "-acodec",
        "libmp3lame",
        "-b:a",
        defaults::EXTRACT_AUDIO_BITRATE,
        output.as_ref(),
    ];

    let result = runner.run("ffmpeg", &args)?;
    if !result.success {
        return Err(VoxbriefError::ExtractionFailed {
            message: result.stderr,
        });
    }

    Ok(audio_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::RunOutput;
    use std::sync::Mutex;
    use tempfile::TempDir;

    struct RecordingRunner {
        calls: Mutex<Vec<Vec<String>>>,
        success: bool,
    }

    impl RecordingRunner {
        fn new(success: bool) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                success,
            }
        }
    }

    impl CommandRunner for RecordingRunner {
        fn run(&self, command: &str, args: &[&str]) -> Result<RunOutput> {
            assert_eq!(command, "ffmpeg");
            self.calls
                .lock()
                .unwrap()
                .push(args.iter().map(|s| s.to_string()).collect());
            Ok(RunOutput {
                success: self.success,
                stdout: String::new(),
                stderr: if self.success {
                    String::new()
                } else {
                    "could not find codec parameters".to_string()
                },
            })
        }
    }

    #[test]
    fn detects_video_extensions_case_insensitively() {
        assert!(is_video_path(Path::new("talk.mp4")));
        assert!(is_video_path(Path::new("talk.MOV")));
        assert!(is_video_path(Path::new("/a/b/talk.webm")));
        assert!(!is_video_path(Path::new("talk.mp3")));
        assert!(!is_video_path(Path::new("talk.wav")));
        assert!(!is_video_path(Path::new("talk")));
    }

    #[test]
    fn extracts_to_sibling_mp3() {
        let dir = TempDir::new().unwrap();
        let video = dir.path().join("standup.mp4");
        fs::write(&video, b"not really a video").unwrap();

        let runner = RecordingRunner::new(true);
        let audio = extract_audio(&video, &runner).unwrap();

        assert_eq!(audio, dir.path().join("standup.mp3"));
        let calls = runner.calls.lock().unwrap();
        let args = &calls[0];
        assert!(args.iter().any(|a| a == "-vn"));
        assert!(args.iter().any(|a| a == "libmp3lame"));
        assert!(args.iter().any(|a| a == defaults::EXTRACT_AUDIO_BITRATE));
    }

    #[test]
    fn missing_video_is_rejected() {
        let dir = TempDir::new().unwrap();
        let result = extract_audio(&dir.path().join("gone.mp4"), &RecordingRunner::new(true));
        assert!(matches!(
            result,
            Err(VoxbriefError::SourceNotFoundOrEmpty { .. })
        ));
    }

    #[test]
    fn extraction_failure_carries_diagnostic() {
        let dir = TempDir::new().unwrap();
        let video = dir.path().join("standup.mp4");
        fs::write(&video, b"junk").unwrap();

        let result = extract_audio(&video, &RecordingRunner::new(false));
        match result {
            Err(VoxbriefError::ExtractionFailed { message }) => {
                assert!(message.contains("could not find codec parameters"));
            }
            other => panic!("Expected ExtractionFailed, got {:?}", other),
        }
    }
}
