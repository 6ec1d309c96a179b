//! Audio partitioning into upload-safe chunks.
//!
//! Files below the size threshold pass through untouched. Larger files are
//! split by ffmpeg into stream-copied segments that each decode independently,
//! collected in sequence order for the transcription stage.

use crate::defaults;
use crate::error::{Result, VoxbriefError};
use crate::exec::CommandRunner;
use std::fs;
use std::path::{Path, PathBuf};

/// An ordered reference to one contiguous slice of audio content,
/// materialized as a standalone file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaChunk {
    pub path: PathBuf,
    /// 0-based position within the source audio.
    pub index: usize,
    pub size_bytes: u64,
}

/// Derive the target segment duration from the chunk size threshold.
///
/// One minute of audio per MiB of budget. The formula is a rough heuristic;
/// individual segments may exceed or fall under the byte threshold and
/// callers must tolerate that.
pub fn segment_seconds(max_chunk_bytes: u64) -> u64 {
    (max_chunk_bytes / 1024 / 1024) * defaults::SEGMENT_SECONDS_PER_MIB
}

/// Split an audio file into chunks below `max_chunk_bytes`.
///
/// Files smaller than the threshold are returned as a single chunk referencing
/// the original path; no files are created in that case. Otherwise ffmpeg
/// splits the audio into `{stem}_chunks/{stem}_NNN{ext}` siblings via stream
/// copy (`-break_non_keyframes` keeps every segment independently decodable),
/// returned in ascending sequence order.
///
/// # Errors
///
/// * `SourceNotFoundOrEmpty` when the file is missing or zero-length.
/// * `SplitFailed` with ffmpeg's stderr when the segmenter exits non-zero.
///   Partial chunk files, if any, are left on disk; the run is not re-entered
///   after a failure.
pub fn partition(
    audio_path: &Path,
    max_chunk_bytes: u64,
    runner: &dyn CommandRunner,
) -> Result<Vec<MediaChunk>> {
    if max_chunk_bytes == 0 {
        return Err(VoxbriefError::ConfigInvalidValue {
            key: "chunking.max_chunk_mib".to_string(),
            message: "must be positive".to_string(),
        });
    }

    let size = source_size(audio_path)?;

    // Common path: nothing to split, hand back the original file.
    if size < max_chunk_bytes {
        return Ok(vec![MediaChunk {
            path: audio_path.to_path_buf(),
            index: 0,
            size_bytes: size,
        }]);
    }

    let stem = audio_path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| {
            VoxbriefError::Other(format!(
                "Audio path has no usable file name: {}",
                audio_path.display()
            ))
        })?;
    let ext = audio_path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e))
        .unwrap_or_default();

    let output_dir = audio_path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(format!("{}_chunks", stem));
    fs::create_dir_all(&output_dir)?;

    let pattern = output_dir.join(format!("{}_%03d{}", stem, ext));
    let segment_time = segment_seconds(max_chunk_bytes).to_string();

    let input = audio_path.to_string_lossy();
    let output = pattern.to_string_lossy();
    let args = [
        "-i",
        input.as_ref(),
        "-f",
        "segment",
        "-segment_time",
        &segment_time,
        "-c",
        "copy",
        "-break_non_keyframes",
        "1",
        "-reset_timestamps",
        "1",
        output.as_ref(),
    ];

    let result = runner.run("ffmpeg", &args)?;
    if !result.success {
        return Err(VoxbriefError::SplitFailed {
            diagnostic: result.stderr,
        });
    }

    collect_chunks(&output_dir, stem, &ext)
}

/// List the produced chunk files in sequence order.
///
/// The zero-padded index suffix makes lexical filename order equal chunk order.
fn collect_chunks(output_dir: &Path, stem: &str, ext: &str) -> Result<Vec<MediaChunk>> {
    let prefix = format!("{}_", stem);
    let mut paths: Vec<PathBuf> = fs::read_dir(output_dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|name| {
                    name.starts_with(&prefix) && (ext.is_empty() || name.ends_with(ext))
                })
        })
        .collect();
    paths.sort();

    if paths.is_empty() {
        return Err(VoxbriefError::SplitFailed {
            diagnostic: format!("segmenter produced no chunk files in {}", output_dir.display()),
        });
    }

    paths
        .into_iter()
        .enumerate()
        .map(|(index, path)| {
            let size_bytes = fs::metadata(&path)?.len();
            Ok(MediaChunk {
                path,
                index,
                size_bytes,
            })
        })
        .collect()
}

/// Size of the source file, rejecting missing or empty inputs.
fn source_size(path: &Path) -> Result<u64> {
    let not_found = || VoxbriefError::SourceNotFoundOrEmpty {
        path: path.display().to_string(),
    };
    let size = fs::metadata(path).map_err(|_| not_found())?.len();
    if size == 0 {
        return Err(not_found());
    }
    Ok(size)
}
