//! Command-line interface for voxbrief
//!
//! Provides argument parsing using clap derive macros.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Turn audio and video recordings into polished text reports
#[derive(Parser, Debug)]
#[command(
    name = "voxbrief",
    version,
    about = "Turn audio and video recordings into polished text reports"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the audio or video file to process
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Destination directory for transcripts and the report
    /// (default: directory of PATH)
    #[arg(value_name = "DIR")]
    pub destination: Option<PathBuf>,

    /// Treat PATH as a video and extract the audio track first
    #[arg(long)]
    pub video: bool,

    /// Maximum chunk size in MiB before the audio is split
    #[arg(long, value_name = "MIB")]
    pub max_chunk_mib: Option<u64>,

    /// Token budget for one rewrite call's input text
    #[arg(long, value_name = "TOKENS")]
    pub token_budget: Option<usize>,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suppress output (quiet mode)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose output (-v: per-chunk artifact paths)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check external dependencies and credentials
    Check,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_path() {
        let cli = Cli::parse_from(["voxbrief", "meeting.mp3"]);
        assert_eq!(cli.path, Some(PathBuf::from("meeting.mp3")));
        assert!(cli.destination.is_none());
        assert!(!cli.video);
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_path_with_destination() {
        let cli = Cli::parse_from(["voxbrief", "meeting.mp3", "out"]);
        assert_eq!(cli.path, Some(PathBuf::from("meeting.mp3")));
        assert_eq!(cli.destination, Some(PathBuf::from("out")));
    }

    #[test]
    fn parses_video_flag_and_overrides() {
        let cli = Cli::parse_from([
            "voxbrief",
            "--video",
            "--max-chunk-mib",
            "10",
            "--token-budget",
            "2000",
            "talk.mp4",
        ]);
        assert!(cli.video);
        assert_eq!(cli.max_chunk_mib, Some(10));
        assert_eq!(cli.token_budget, Some(2000));
    }

    #[test]
    fn parses_check_subcommand() {
        let cli = Cli::parse_from(["voxbrief", "check"]);
        assert!(matches!(cli.command, Some(Commands::Check)));
    }

    #[test]
    fn verbose_flag_counts() {
        let cli = Cli::parse_from(["voxbrief", "-vv", "meeting.mp3"]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn cli_asserts() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
