//! Pipeline entry point.
//!
//! Orchestrates the complete media-to-report flow:
//! extract → partition → transcribe → merge

use crate::audio::partition;
use crate::config::Config;
use crate::defaults;
use crate::error::{Result, VoxbriefError};
use crate::exec::{CommandRunner, SystemCommandRunner};
use crate::merge::merge_transcripts;
use crate::remote::client::ApiClient;
use crate::remote::rewrite::{RemoteRewriter, Rewriter};
use crate::remote::transcribe::{RemoteTranscriber, Transcriber};
use crate::tokens::{GptTokenCounter, TokenCounter};
use crate::transcript::{Report, TranscriptUnit, report_path, transcript_path};
use crate::video::{extract_audio, is_video_path};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Options for one pipeline run, resolved from CLI arguments.
#[derive(Debug, Clone, Default)]
pub struct BriefOptions {
    /// Directory for transcripts and the report. Defaults to the input's
    /// directory.
    pub destination: Option<PathBuf>,
    /// Treat the source as video even when the extension is not recognized.
    pub force_video: bool,
    /// Suppress status messages.
    pub quiet: bool,
    /// Verbosity level (0=default, 1=per-chunk paths).
    pub verbosity: u8,
}

/// Outcome of processing a single media source.
#[derive(Debug)]
pub struct BriefResult {
    pub source_path: PathBuf,
    pub audio_path: PathBuf,
    pub extracted_audio: bool,
    pub transcripts: Vec<TranscriptUnit>,
    pub report: Report,
}

/// Run the full pipeline with the system collaborators.
///
/// The API client is constructed here, once per run, and shared by the
/// transcription and rewrite collaborators. The video extractor and splitter
/// only touch ffmpeg on the code paths that need it.
pub async fn run_brief(config: &Config, source: &Path, options: &BriefOptions) -> Result<BriefResult> {
    let client = Arc::new(ApiClient::new(&config.api)?);
    let transcriber = RemoteTranscriber::new(
        client.clone(),
        config.api.transcribe_model.clone(),
        config.api.transcribe_fallback_model.clone(),
    );
    let rewriter = RemoteRewriter::new(client, config.api.rewrite_model.clone());
    let counter = GptTokenCounter::new()?;
    let runner = SystemCommandRunner::new();

    run_brief_with(config, source, options, &runner, &transcriber, &rewriter, &counter).await
}

/// Run the full pipeline with explicit collaborators.
///
/// Chunks are transcribed strictly in sequence order; transcripts are
/// persisted before merging so a failed rewrite leaves them behind. The
/// report is written only after every batch rewrite succeeded.
pub async fn run_brief_with(
    config: &Config,
    source: &Path,
    options: &BriefOptions,
    runner: &dyn CommandRunner,
    transcriber: &dyn Transcriber,
    rewriter: &dyn Rewriter,
    counter: &dyn TokenCounter,
) -> Result<BriefResult> {
    let source_ok = fs::metadata(source).map(|m| m.len() > 0).unwrap_or(false);
    if !source_ok {
        return Err(VoxbriefError::SourceNotFoundOrEmpty {
            path: source.display().to_string(),
        });
    }

    let destination = resolve_destination(options.destination.as_deref())?;

    let needs_extraction = options.force_video || is_video_path(source);
    let audio_path = if needs_extraction {
        if !options.quiet {
            eprintln!("Extracting audio from video: {}", source.display());
        }
        let audio = extract_audio(source, runner)?;
        if !options.quiet {
            eprintln!("Audio extracted to: {}", audio.display());
        }
        audio
    } else {
        source.to_path_buf()
    };

    let max_chunk_bytes = defaults::mib_to_bytes(config.chunking.max_chunk_mib);
    let chunks = partition(&audio_path, max_chunk_bytes, runner)?;
    if !options.quiet {
        eprintln!("Processing {} audio chunk(s)", chunks.len());
    }

    let progress = if !options.quiet && chunks.len() > 1 {
        let pb = ProgressBar::new(chunks.len() as u64);
        pb.set_style(
            // hardcoded template, always valid
            #[allow(clippy::expect_used)]
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} chunks")
                .expect("hardcoded progress bar template")
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let mut transcripts = Vec::with_capacity(chunks.len());
    for chunk in &chunks {
        let text = transcriber.transcribe(&chunk.path).await?;
        let path = transcript_path(&chunk.path, destination.as_deref());
        let unit = TranscriptUnit::write(text, chunk.index, path)?;
        if options.verbosity >= 1 {
            eprintln!("Transcript written to: {}", unit.path.display());
        }
        if let Some(ref pb) = progress {
            pb.inc(1);
        }
        transcripts.push(unit);
    }
    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    if !options.quiet && let Some(parent) = transcripts[0].path.parent() {
        eprintln!("All transcripts saved to: {}", parent.display());
    }

    let report_text =
        merge_transcripts(&transcripts, config.merge.token_budget, counter, rewriter).await?;
    let path = report_path(&transcripts[0].path, destination.as_deref());
    let report = Report::write(report_text, path)?;

    Ok(BriefResult {
        source_path: source.to_path_buf(),
        audio_path,
        extracted_audio: needs_extraction,
        transcripts,
        report,
    })
}

/// Validate and create the destination directory when one is given.
fn resolve_destination(destination: Option<&Path>) -> Result<Option<PathBuf>> {
    let Some(dest) = destination else {
        return Ok(None);
    };
    if dest.exists() && !dest.is_dir() {
        return Err(VoxbriefError::Other(format!(
            "Destination must be a directory: {}",
            dest.display()
        )));
    }
    fs::create_dir_all(dest)?;
    Ok(Some(dest.to_path_buf()))
}
