//! External command execution with a testable seam.
//!
//! The Partitioner and the video extractor both shell out to ffmpeg. The
//! `CommandRunner` trait keeps that boundary mockable so the pipeline can be
//! tested without ffmpeg installed.

use crate::error::{Result, VoxbriefError};
use std::process::Command;

/// Captured output of a finished external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutput {
    /// True when the command exited with status 0.
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl RunOutput {
    /// Construct a successful output, mainly useful in tests.
    pub fn ok() -> Self {
        Self {
            success: true,
            stdout: String::new(),
            stderr: String::new(),
        }
    }
}

/// Trait for running external commands.
///
/// Object-safe, Send + Sync for use in concurrent contexts.
/// A non-zero exit status is reported through `RunOutput::success`, not as an
/// error, so call sites can attach their own diagnostic context.
pub trait CommandRunner: Send + Sync {
    /// Run a command to completion and capture its output.
    ///
    /// Returns an error only when the command could not be spawned at all.
    fn run(&self, command: &str, args: &[&str]) -> Result<RunOutput>;
}

/// Production command runner using std::process::Command.
#[derive(Debug, Clone, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, command: &str, args: &[&str]) -> Result<RunOutput> {
        let output = Command::new(command).args(args).output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                VoxbriefError::ToolNotFound {
                    tool: command.to_string(),
                }
            } else {
                VoxbriefError::Other(format!("Failed to execute {}: {}", command, e))
            }
        })?;

        Ok(RunOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}
