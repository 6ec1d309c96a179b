//! Default configuration constants for voxbrief.
//!
//! This module provides shared constants used across different configuration types
//! to ensure consistency and eliminate duplication.

/// Default maximum chunk size in MiB.
///
/// Audio files below this size are uploaded whole; larger files are split
/// before transcription. 20 MiB keeps every upload comfortably under the
/// transcription API's 25 MB request limit.
pub const MAX_CHUNK_SIZE_MIB: u64 = 20;

/// Seconds of audio per MiB of chunk budget when deriving segment duration.
///
/// The split target duration is `max_chunk_mib * 60` seconds. This is an
/// approximation only: segments are cut on stream-copy boundaries and may land
/// above or below the byte threshold.
pub const SEGMENT_SECONDS_PER_MIB: u64 = 60;

/// Default token budget for one rewrite call's input text.
///
/// Transcripts are packed greedily into batches whose summed token counts stay
/// within this budget, leaving the rest of the model's context window for the
/// rewritten output.
pub const TOKEN_BUDGET: usize = 4000;

/// Filename prefix for per-chunk transcript files.
pub const TRANSCRIPT_PREFIX: &str = "transcription_";

/// Filename prefix for the final merged report.
pub const REPORT_PREFIX: &str = "optimized_";

/// Default transcription model.
pub const TRANSCRIBE_MODEL: &str = "whisper-1";

/// Fallback transcription model, tried once when the primary model fails.
pub const TRANSCRIBE_FALLBACK_MODEL: &str = "gpt-4o-mini-transcribe";

/// Default rewrite model. Also fixes the tokenizer used for budget counting.
pub const REWRITE_MODEL: &str = "gpt-4";

/// Default API base URL.
pub const API_BASE_URL: &str = "https://api.openai.com/v1";

/// File extensions treated as video input, checked case-insensitively.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "mkv", "avi", "webm"];

/// Bitrate for audio extracted from video.
pub const EXTRACT_AUDIO_BITRATE: &str = "128k";

/// Convert a size in MiB to bytes.
pub const fn mib_to_bytes(mib: u64) -> u64 {
    mib * 1024 * 1024
}
