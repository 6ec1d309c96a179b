//! Speech-to-text collaborator.

use crate::error::{Result, VoxbriefError};
use crate::remote::client::ApiClient;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Trait for transcribing one audio chunk to text.
///
/// This trait allows swapping implementations (remote API vs mock).
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe the audio file at `chunk_path` to plain text.
    async fn transcribe(&self, chunk_path: &Path) -> Result<String>;
}

/// Remote transcriber with a one-shot model fallback.
///
/// Tries the primary model first; if that call fails for any reason, retries
/// once with the fallback model and surfaces that result. The fallback is the
/// collaborator's own concern; callers see a single attempt.
pub struct RemoteTranscriber {
    client: Arc<ApiClient>,
    model: String,
    fallback_model: String,
}

impl RemoteTranscriber {
    pub fn new(client: Arc<ApiClient>, model: String, fallback_model: String) -> Self {
        Self {
            client,
            model,
            fallback_model,
        }
    }
}

#[async_trait]
impl Transcriber for RemoteTranscriber {
    async fn transcribe(&self, chunk_path: &Path) -> Result<String> {
        match self.client.transcribe_file(&self.model, chunk_path).await {
            Ok(text) => Ok(text),
            Err(primary_err) => {
                eprintln!(
                    "voxbrief: transcription with '{}' failed ({}), retrying with '{}'",
                    self.model, primary_err, self.fallback_model
                );
                self.client
                    .transcribe_file(&self.fallback_model, chunk_path)
                    .await
            }
        }
    }
}

/// Mock transcriber for testing.
///
/// Returns queued responses in order and records which chunks were submitted.
#[derive(Debug, Default)]
pub struct MockTranscriber {
    responses: Mutex<VecDeque<Result<String>>>,
    calls: Mutex<Vec<PathBuf>>,
}

impl MockTranscriber {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response.
    pub fn push_response(self, text: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(text.to_string()));
        self
    }

    /// Queue a failure.
    pub fn push_failure(self, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(VoxbriefError::Transcription {
                message: message.to_string(),
            }));
        self
    }

    /// Chunk paths submitted so far, in call order.
    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transcriber for MockTranscriber {
    async fn transcribe(&self, chunk_path: &Path) -> Result<String> {
        self.calls.lock().unwrap().push(chunk_path.to_path_buf());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok("mock transcription".to_string()))
    }
}
