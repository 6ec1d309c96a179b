//! HTTP client for the transcription and rewrite API.

use crate::config::ApiConfig;
use crate::error::{Result, VoxbriefError};
use serde::Deserialize;
use std::path::Path;

/// Client for an OpenAI-compatible API, constructed once per run.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    text: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

impl ApiClient {
    /// Build a client from configuration.
    ///
    /// Fails with `ApiKeyMissing` when no key is configured, before any
    /// network or filesystem work happens.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or(VoxbriefError::ApiKeyMissing)?;

        Ok(Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Upload an audio file for transcription and return the recognized text.
    pub async fn transcribe_file(&self, model: &str, audio_path: &Path) -> Result<String> {
        let transcription_error = |message: String| VoxbriefError::Transcription { message };

        let bytes = tokio::fs::read(audio_path).await.map_err(|e| {
            transcription_error(format!("Failed to read {}: {}", audio_path.display(), e))
        })?;
        let file_name = audio_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "audio".to_string());

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("application/octet-stream")
            .map_err(|e| transcription_error(format!("Failed to build upload: {}", e)))?;
        let form = reqwest::multipart::Form::new()
            .text("model", model.to_string())
            .part("file", part);

        let response = self
            .http
            .post(format!("{}/audio/transcriptions", self.base_url))
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| transcription_error(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(transcription_error(format!(
                "API returned status {}: {}",
                status,
                body.trim()
            )));
        }

        let parsed: TranscriptionResponse = response
            .json()
            .await
            .map_err(|e| transcription_error(format!("Failed to parse response: {}", e)))?;
        Ok(parsed.text)
    }

    /// Run one chat completion and return the first choice's content.
    pub async fn chat_completion(
        &self,
        model: &str,
        system_prompt: &str,
        user_text: &str,
    ) -> Result<String> {
        let rewrite_error = |message: String| VoxbriefError::Rewrite { message };

        let body = serde_json::json!({
            "model": model,
            "messages": [
                { "role": "system", "content": system_prompt },
                { "role": "user", "content": user_text },
            ],
        });

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| rewrite_error(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(rewrite_error(format!(
                "API returned status {}: {}",
                status,
                body.trim()
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| rewrite_error(format!("Failed to parse response: {}", e)))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| rewrite_error("response contained no choices".to_string()))
    }
}
