//! voxbrief - Audio and video conversations to polished text reports
//!
//! Splits large recordings into upload-safe chunks, transcribes each chunk
//! remotely, and merges the transcripts into one rewritten report.

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::let_underscore_must_use)]

pub mod app;
pub mod audio;
pub mod cli;
pub mod config;
pub mod defaults;
pub mod diagnostics;
pub mod error;
pub mod exec;
pub mod merge;
pub mod remote;
pub mod tokens;
pub mod transcript;
pub mod video;

// Pipeline entry points
pub use app::{BriefOptions, BriefResult, run_brief, run_brief_with};

// Core types (partition → transcribe → merge)
pub use audio::{MediaChunk, partition};
pub use merge::{merge_transcripts, pack_batches};
pub use transcript::{Report, TranscriptUnit};

// Collaborator seams (system implementations and mocks)
pub use exec::{CommandRunner, SystemCommandRunner};
pub use remote::rewrite::{MockRewriter, RemoteRewriter, Rewriter};
pub use remote::transcribe::{MockTranscriber, RemoteTranscriber, Transcriber};
pub use tokens::{GptTokenCounter, TokenCounter};

// Error handling
pub use error::{Result, VoxbriefError};

// Config
pub use config::Config;

/// Build version string with optional git commit hash.
///
/// Returns `"0.1.2+abc1234"` when git hash is available, `"0.1.2"` otherwise.
pub fn version_string() -> String {
    let version = env!("CARGO_PKG_VERSION");
    match option_env!("GIT_HASH") {
        Some(hash) if !hash.is_empty() => format!("{}+{}", version, hash),
        _ => version.to_string(),
    }
}
