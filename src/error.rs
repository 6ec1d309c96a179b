//! Error types for voxbrief.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VoxbriefError {
    // Configuration errors
    #[error("Configuration file not found at {path}")]
    ConfigFileNotFound { path: String },

    #[error("Invalid configuration value for {key}: {message}")]
    ConfigInvalidValue { key: String, message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    #[error(
        "API key not set. Set api.api_key in the config file or the OPENAI_API_KEY environment variable"
    )]
    ApiKeyMissing,

    // Media preparation errors
    #[error("Media file not found or empty: {path}")]
    SourceNotFoundOrEmpty { path: String },

    #[error("External tool not found: {tool}")]
    ToolNotFound { tool: String },

    #[error("Audio extraction failed: {message}")]
    ExtractionFailed { message: String },

    #[error("Audio split failed: {diagnostic}")]
    SplitFailed { diagnostic: String },

    // Pipeline errors
    #[error("No transcripts to merge")]
    EmptyInput,

    #[error("Transcription failed: {message}")]
    Transcription { message: String },

    #[error("Rewrite failed: {message}")]
    Rewrite { message: String },

    // General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error for cases not covered above
    #[error("{0}")]
    Other(String),
}

// Type alias for convenience
pub type Result<T> = std::result::Result<T, VoxbriefError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_config_file_not_found_display() {
        let error = VoxbriefError::ConfigFileNotFound {
            path: "/path/to/config.toml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found at /path/to/config.toml"
        );
    }

    #[test]
    fn test_config_invalid_value_display() {
        let error = VoxbriefError::ConfigInvalidValue {
            key: "chunking.max_chunk_mib".to_string(),
            message: "must be positive".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration value for chunking.max_chunk_mib: must be positive"
        );
    }

    #[test]
    fn test_api_key_missing_mentions_env_var() {
        let error = VoxbriefError::ApiKeyMissing;
        assert!(error.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_source_not_found_or_empty_display() {
        let error = VoxbriefError::SourceNotFoundOrEmpty {
            path: "/tmp/missing.mp3".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Media file not found or empty: /tmp/missing.mp3"
        );
    }

    #[test]
    fn test_tool_not_found_display() {
        let error = VoxbriefError::ToolNotFound {
            tool: "ffmpeg".to_string(),
        };
        assert_eq!(error.to_string(), "External tool not found: ffmpeg");
    }

    #[test]
    fn test_split_failed_carries_diagnostic() {
        let error = VoxbriefError::SplitFailed {
            diagnostic: "Invalid data found when processing input".to_string(),
        };
        assert!(
            error
                .to_string()
                .contains("Invalid data found when processing input")
        );
    }

    #[test]
    fn test_empty_input_display() {
        assert_eq!(
            VoxbriefError::EmptyInput.to_string(),
            "No transcripts to merge"
        );
    }

    #[test]
    fn test_transcription_display() {
        let error = VoxbriefError::Transcription {
            message: "server returned 500".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Transcription failed: server returned 500"
        );
    }

    #[test]
    fn test_rewrite_display() {
        let error = VoxbriefError::Rewrite {
            message: "response contained no choices".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Rewrite failed: response contained no choices"
        );
    }

    #[test]
    fn test_other_display() {
        let error = VoxbriefError::Other("unexpected error".to_string());
        assert_eq!(error.to_string(), "unexpected error");
    }

    #[test]
    fn test_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error: VoxbriefError = io_error.into();
        assert!(error.to_string().contains("file not found"));
    }

    #[test]
    fn test_from_toml_error() {
        let toml_str = "invalid = toml = syntax";
        let toml_error = toml::from_str::<toml::Value>(toml_str).unwrap_err();
        let error: VoxbriefError = toml_error.into();
        assert!(error.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<i32> {
            Ok(42)
        }
        assert_eq!(returns_result().unwrap(), 42);
    }

    #[test]
    fn test_error_source_chain_io() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let error: VoxbriefError = io_error.into();

        let error_trait: &dyn std::error::Error = &error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<VoxbriefError>();
        assert_sync::<VoxbriefError>();
    }
}
