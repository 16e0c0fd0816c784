use async_trait::async_trait;

use crate::domain::{AudioBlob, Transcript};

#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, audio: &AudioBlob) -> Result<Transcript, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("transcription request failed: {0}")]
    Request(String),
    #[error("transcription api returned status {status}: {body}")]
    Api { status: u16, body: String },
    #[error("transcription produced no text")]
    EmptyTranscript,
}

impl TranscriptionError {
    /// Transport failures and server-side errors are worth one retry;
    /// client errors and empty results are not.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Request(_) => true,
            Self::Api { status, .. } => *status >= 500 || *status == 429,
            Self::EmptyTranscript => false,
        }
    }
}
