//! Token counting for the rewrite budget.

use crate::error::{Result, VoxbriefError};
use tiktoken_rs::CoreBPE;

/// Trait for counting tokens in transcript text.
///
/// The batching result is only deterministic for a fixed counter, so one
/// counter instance is built per run and shared across all units.
pub trait TokenCounter: Send + Sync {
    /// Number of tokens the text occupies in the rewrite model's input.
    fn count(&self, text: &str) -> usize;
}

/// Token counter using the GPT-4 family encoding (cl100k_base).
///
/// Matches the tokenizer of the default rewrite model, so the budget check
/// reflects what the remote call will actually see.
pub struct GptTokenCounter {
    bpe: CoreBPE,
}

impl GptTokenCounter {
    /// Load the encoding tables. Cheap enough to do once per run.
    pub fn new() -> Result<Self> {
        let bpe = tiktoken_rs::cl100k_base()
            .map_err(|e| VoxbriefError::Other(format!("Failed to load tokenizer: {}", e)))?;
        Ok(Self { bpe })
    }
}

impl TokenCounter for GptTokenCounter {
    fn count(&self, text: &str) -> usize {
        self.bpe.encode_ordinary(text).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_counts_zero() {
        let counter = GptTokenCounter::new().unwrap();
        assert_eq!(counter.count(""), 0);
    }

    #[test]
    fn counting_is_deterministic() {
        let counter = GptTokenCounter::new().unwrap();
        let text = "The quick brown fox jumps over the lazy dog.";
        assert_eq!(counter.count(text), counter.count(text));
    }

    #[test]
    fn longer_text_counts_more_tokens() {
        let counter = GptTokenCounter::new().unwrap();
        let short = counter.count("hello");
        let long = counter.count("hello hello hello hello hello");
        assert!(short >= 1);
        assert!(long > short);
    }

    #[test]
    fn common_words_tokenize_compactly() {
        let counter = GptTokenCounter::new().unwrap();
        // One common word is a single token; a short sentence stays close to
        // its word count.
        assert_eq!(counter.count("hello"), 1);
        let sentence = counter.count("this is a short sentence");
        assert!(sentence >= 5 && sentence <= 7, "got {}", sentence);
    }

    #[test]
    fn counter_is_object_safe() {
        let counter: Box<dyn TokenCounter> = Box::new(GptTokenCounter::new().unwrap());
        assert_eq!(counter.count(""), 0);
    }
}
