use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart;

use crate::application::ports::{Transcriber, TranscriptionError};
use crate::domain::{AudioBlob, Transcript};

pub struct OpenAiWhisperClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    timeout: Duration,
}

impl OpenAiWhisperClient {
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: Option<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            model: model.unwrap_or_else(|| "whisper-1".to_string()),
            timeout,
        }
    }
}

#[async_trait]
impl Transcriber for OpenAiWhisperClient {
    async fn transcribe(&self, audio: &AudioBlob) -> Result<Transcript, TranscriptionError> {
        let url = format!("{}/audio/transcriptions", self.base_url);

        let file_part = multipart::Part::bytes(audio.bytes().to_vec())
            .file_name(audio.file_name())
            .mime_str(audio.mime())
            .map_err(|e| TranscriptionError::Request(format!("mime: {}", e)))?;

        let form = multipart::Form::new()
            .text("model", self.model.clone())
            .text("response_format", "text")
            .part("file", file_part);

        tracing::debug!(
            model = %self.model,
            format = %audio.format(),
            bytes = audio.len(),
            "sending audio for transcription"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| TranscriptionError::Request(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriptionError::Api { status, body });
        }

        let text = response
            .text()
            .await
            .map_err(|e| TranscriptionError::Request(format!("body: {}", e)))?;

        let transcript = Transcript::new(text.trim());
        if transcript.is_empty() {
            return Err(TranscriptionError::EmptyTranscript);
        }

        tracing::info!(chars = transcript.as_str().len(), "transcription completed");
        Ok(transcript)
    }
}
