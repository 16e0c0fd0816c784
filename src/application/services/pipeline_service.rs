use std::sync::Arc;

use crate::application::ports::{
    AudioNormalizer, CloningError, CondensationError, Condenser, FormatError, SynthesisError,
    Transcriber, TranscriptionError, VoiceCloner,
};
use crate::application::services::VoiceModelGuard;
use crate::domain::{AudioBlob, CondensedText, Transcript, VoiceModelId};

/// Label attached to the ephemeral voice on the remote service.
const VOICE_LABEL: &str = "temp-voice";

/// Sequences the four stages of a run: normalize, transcribe, condense,
/// clone-and-synthesize. Short-circuits on the first stage failure and
/// never returns partial audio.
pub struct PipelineService {
    normalizer: Arc<dyn AudioNormalizer>,
    transcriber: Arc<dyn Transcriber>,
    condenser: Arc<dyn Condenser>,
    cloner: Arc<dyn VoiceCloner>,
}

impl PipelineService {
    pub fn new(
        normalizer: Arc<dyn AudioNormalizer>,
        transcriber: Arc<dyn Transcriber>,
        condenser: Arc<dyn Condenser>,
        cloner: Arc<dyn VoiceCloner>,
    ) -> Self {
        Self {
            normalizer,
            transcriber,
            condenser,
            cloner,
        }
    }

    pub async fn run(&self, input: AudioBlob) -> Result<AudioBlob, PipelineError> {
        let normalized = self.normalizer.normalize(input.clone())?;
        tracing::debug!(
            format = %normalized.format(),
            bytes = normalized.len(),
            "audio normalized"
        );

        let transcript = self.transcribe_with_retry(&normalized).await?;
        tracing::info!(chars = transcript.as_str().len(), "voice note transcribed");

        let condensed = self.condenser.condense(&transcript).await?;
        tracing::info!(chars = condensed.as_str().len(), "transcript condensed");

        // The original bytes, not the normalized blob, are the cloning
        // sample: normalization must not alter the acoustic fingerprint.
        let voice_id = self.cloner.create_voice(&input, VOICE_LABEL).await?;
        tracing::debug!(voice_id = %voice_id, "ephemeral voice created");

        let guard = VoiceModelGuard::new(Arc::clone(&self.cloner), voice_id);
        let outcome = self.synthesize_with_retry(guard.id(), &condensed).await;
        guard.release().await;

        let audio = outcome?;
        tracing::info!(bytes = audio.len(), format = %audio.format(), "reply synthesized");
        Ok(audio)
    }

    /// Transcription is the most latency-variable call; one bounded retry
    /// on transient failure. The call is idempotent so a blind resend is safe.
    async fn transcribe_with_retry(
        &self,
        audio: &AudioBlob,
    ) -> Result<Transcript, TranscriptionError> {
        match self.transcriber.transcribe(audio).await {
            Err(e) if e.is_transient() => {
                tracing::warn!(error = %e, "transcription failed, retrying once");
                self.transcriber.transcribe(audio).await
            }
            other => other,
        }
    }

    /// Retried only once a voice id is already held: retrying the create
    /// phase could orphan a model, retrying synthesis against a known id
    /// cannot.
    async fn synthesize_with_retry(
        &self,
        voice: &VoiceModelId,
        text: &CondensedText,
    ) -> Result<AudioBlob, SynthesisError> {
        match self.cloner.synthesize(voice, text).await {
            Err(e) if e.is_transient() => {
                tracing::warn!(error = %e, "synthesis failed, retrying once");
                self.cloner.synthesize(voice, text).await
            }
            other => other,
        }
    }
}

/// One classified failure per run; wraps the stage error without
/// downgrading it.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("normalize: {0}")]
    Format(#[from] FormatError),
    #[error("transcribe: {0}")]
    Transcription(#[from] TranscriptionError),
    #[error("condense: {0}")]
    Condensation(#[from] CondensationError),
    #[error("clone: {0}")]
    Cloning(#[from] CloningError),
    #[error("synthesize: {0}")]
    Synthesis(#[from] SynthesisError),
}

impl PipelineError {
    /// Which stage failed, for caller-facing messaging.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Format(_) => "normalize",
            Self::Transcription(_) => "transcribe",
            Self::Condensation(_) => "condense",
            Self::Cloning(_) => "clone",
            Self::Synthesis(_) => "synthesize",
        }
    }
}
