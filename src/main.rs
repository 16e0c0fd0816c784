use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;

use revoice::application::services::PipelineService;
use revoice::config::Settings;
use revoice::domain::AudioBlob;
use revoice::infrastructure::audio::SignatureNormalizer;
use revoice::infrastructure::llm::OpenAiCondenser;
use revoice::infrastructure::observability::{TracingConfig, init_tracing};
use revoice::infrastructure::transcription::OpenAiWhisperClient;
use revoice::infrastructure::tts::{ElevenLabsClient, VoiceShaping};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Missing credentials are fatal here, before any pipeline work.
    let settings = Settings::from_env().context("configuration")?;

    init_tracing(TracingConfig::from(&settings.logging));

    let input_path: PathBuf = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: revoice <voice-note-file>")?;

    let input_bytes = std::fs::read(&input_path)
        .with_context(|| format!("reading {}", input_path.display()))?;

    let normalizer = Arc::new(SignatureNormalizer);
    let transcriber = Arc::new(OpenAiWhisperClient::new(
        settings.openai.api_key.clone(),
        settings.openai.base_url.clone(),
        settings.openai.transcription_model.clone(),
        settings.timeouts.transcription,
    ));
    let condenser = Arc::new(OpenAiCondenser::new(
        settings.openai.api_key.clone(),
        settings.openai.base_url.clone(),
        settings.openai.chat_model.clone(),
        settings.openai.directive.clone(),
        settings.openai.temperature,
        settings.timeouts.condensation,
    ));
    let cloner = Arc::new(ElevenLabsClient::new(
        settings.elevenlabs.api_key.clone(),
        settings.elevenlabs.base_url.clone(),
        settings.elevenlabs.model_id.clone(),
        VoiceShaping {
            stability: settings.elevenlabs.stability,
            similarity_boost: settings.elevenlabs.similarity_boost,
            style: settings.elevenlabs.style,
            use_speaker_boost: settings.elevenlabs.speaker_boost,
        },
        settings.timeouts.voice_create,
        settings.timeouts.synthesis,
    ));

    let pipeline = PipelineService::new(normalizer, transcriber, condenser, cloner);

    let reply = pipeline
        .run(AudioBlob::new(input_bytes))
        .await
        .context("pipeline run")?;

    let output_path = input_path.with_extension("reply.mp3");
    std::fs::write(&output_path, reply.bytes())
        .with_context(|| format!("writing {}", output_path.display()))?;

    tracing::info!(
        output = %output_path.display(),
        bytes = reply.len(),
        "condensed reply written"
    );

    Ok(())
}
