use async_trait::async_trait;

use crate::domain::{AudioBlob, CondensedText, VoiceModelId};

/// Two-phase voice cloning: create an ephemeral model from a sample, speak
/// text with it, then delete it. Creation and deletion are split out so the
/// orchestrator can guarantee release on every exit path.
#[async_trait]
pub trait VoiceCloner: Send + Sync {
    async fn create_voice(
        &self,
        sample: &AudioBlob,
        label: &str,
    ) -> Result<VoiceModelId, CloningError>;

    async fn synthesize(
        &self,
        voice: &VoiceModelId,
        text: &CondensedText,
    ) -> Result<AudioBlob, SynthesisError>;

    async fn delete_voice(&self, voice: &VoiceModelId) -> Result<(), CloningError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CloningError {
    #[error("voice cloning request failed: {0}")]
    Request(String),
    #[error("voice cloning api returned status {status}: {body}")]
    Api { status: u16, body: String },
    #[error("voice cloning response carried no voice id (status {status}): {body}")]
    MissingVoiceId { status: u16, body: String },
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("synthesis request failed: {0}")]
    Request(String),
    #[error("synthesis api returned status {status}: {body}")]
    Api { status: u16, body: String },
    #[error("synthesis produced no audio")]
    EmptyAudio,
}

impl SynthesisError {
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Request(_) => true,
            Self::Api { status, .. } => *status >= 500 || *status == 429,
            Self::EmptyAudio => false,
        }
    }
}
