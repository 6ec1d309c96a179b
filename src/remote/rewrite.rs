//! Text rewrite collaborator.

use crate::error::{Result, VoxbriefError};
use crate::remote::client::ApiClient;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// System prompt for the rewrite call. The output contract the merger relies
/// on is only the blank-line paragraph separation.
pub const REWRITE_SYSTEM_PROMPT: &str = "Please verify, optionally correct and organize \
the following text into a coherent and well-structured format with clear, distinct \
paragraphs. Each paragraph should have a logical flow and connection to the next, \
maintaining consistency and clarity throughout the text. Paragraphs should be \
delimited with an empty line.";

/// Trait for reorganizing a batch of transcript text.
#[async_trait]
pub trait Rewriter: Send + Sync {
    /// Rewrite `text` into coherent paragraphs.
    async fn rewrite(&self, text: &str) -> Result<String>;
}

/// Remote rewriter backed by the chat completion endpoint.
pub struct RemoteRewriter {
    client: Arc<ApiClient>,
    model: String,
}

impl RemoteRewriter {
    pub fn new(client: Arc<ApiClient>, model: String) -> Self {
        Self { client, model }
    }
}

#[async_trait]
impl Rewriter for RemoteRewriter {
    async fn rewrite(&self, text: &str) -> Result<String> {
        self.client
            .chat_completion(&self.model, REWRITE_SYSTEM_PROMPT, text)
            .await
    }
}

/// Mock rewriter for testing.
///
/// Echoes the input with an optional prefix, or fails when configured to.
/// Pure, so repeated merges over the same input stay byte-identical.
#[derive(Debug, Default)]
pub struct MockRewriter {
    prefix: String,
    should_fail: bool,
    calls: Mutex<Vec<String>>,
}

impl MockRewriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a marker to every rewritten batch.
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.to_string();
        self
    }

    /// Configure the mock to fail on rewrite.
    pub fn with_failure(mut self) -> Self {
        self.should_fail = true;
        self
    }

    /// Batch texts submitted so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Rewriter for MockRewriter {
    async fn rewrite(&self, text: &str) -> Result<String> {
        self.calls.lock().unwrap().push(text.to_string());
        if self.should_fail {
            return Err(VoxbriefError::Rewrite {
                message: "mock rewrite failure".to_string(),
            });
        }
        Ok(format!("{}{}", self.prefix, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_echoes_with_prefix() {
        let rewriter = MockRewriter::new().with_prefix("ok: ");
        assert_eq!(rewriter.rewrite("raw text").await.unwrap(), "ok: raw text");
        assert_eq!(rewriter.calls(), vec!["raw text".to_string()]);
    }

    #[tokio::test]
    async fn mock_failure_surfaces() {
        let rewriter = MockRewriter::new().with_failure();
        let result = rewriter.rewrite("raw text").await;
        assert!(matches!(result, Err(VoxbriefError::Rewrite { .. })));
        // The attempt is still recorded
        assert_eq!(rewriter.call_count(), 1);
    }

    #[test]
    fn system_prompt_mentions_paragraph_separation() {
        assert!(REWRITE_SYSTEM_PROMPT.contains("empty line"));
    }

    #[test]
    fn rewriter_trait_is_object_safe() {
        let _rewriter: Box<dyn Rewriter> = Box::new(MockRewriter::new());
    }
}
