use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart;
use serde::{Deserialize, Serialize};

use crate::application::ports::{CloningError, SynthesisError, VoiceCloner};
use crate::domain::{AudioBlob, AudioFormat, CondensedText, VoiceModelId};

/// Voice-shaping parameters sent with every synthesis request. Defaults
/// favor faithful timbre reproduction over expressive variation.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct VoiceShaping {
    pub stability: f32,
    pub similarity_boost: f32,
    pub style: f32,
    pub use_speaker_boost: bool,
}

impl Default for VoiceShaping {
    fn default() -> Self {
        Self {
            stability: 0.6,
            similarity_boost: 1.0,
            style: 0.0,
            use_speaker_boost: true,
        }
    }
}

pub struct ElevenLabsClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model_id: String,
    shaping: VoiceShaping,
    create_timeout: Duration,
    synthesis_timeout: Duration,
}

#[derive(Deserialize)]
struct AddVoiceResponse {
    voice_id: Option<String>,
}

#[derive(Serialize)]
struct TtsRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceShaping,
}

impl ElevenLabsClient {
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model_id: Option<String>,
        shaping: VoiceShaping,
        create_timeout: Duration,
        synthesis_timeout: Duration,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.elevenlabs.io".to_string()),
            model_id: model_id.unwrap_or_else(|| "eleven_multilingual_v2".to_string()),
            shaping,
            create_timeout,
            synthesis_timeout,
        }
    }
}

#[async_trait]
impl VoiceCloner for ElevenLabsClient {
    async fn create_voice(
        &self,
        sample: &AudioBlob,
        label: &str,
    ) -> Result<VoiceModelId, CloningError> {
        let url = format!("{}/v1/voices/add", self.base_url);

        // The filename tells the server which decoder to use for the sample.
        let file_part = multipart::Part::bytes(sample.bytes().to_vec())
            .file_name(sample.file_name())
            .mime_str(sample.mime())
            .map_err(|e| CloningError::Request(format!("mime: {}", e)))?;

        let form = multipart::Form::new()
            .text("name", label.to_string())
            .part("files", file_part);

        tracing::debug!(
            format = %sample.format(),
            bytes = sample.len(),
            "uploading voice sample"
        );

        let response = self
            .client
            .post(&url)
            .header("xi-api-key", &self.api_key)
            .multipart(form)
            .timeout(self.create_timeout)
            .send()
            .await
            .map_err(|e| CloningError::Request(format!("request: {}", e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| CloningError::Request(format!("body: {}", e)))?;

        if !(200..300).contains(&status) {
            return Err(CloningError::Api { status, body });
        }

        let voice_id = serde_json::from_str::<AddVoiceResponse>(&body)
            .ok()
            .and_then(|r| r.voice_id)
            .ok_or(CloningError::MissingVoiceId { status, body })?;

        Ok(VoiceModelId::new(voice_id))
    }

    async fn synthesize(
        &self,
        voice: &VoiceModelId,
        text: &CondensedText,
    ) -> Result<AudioBlob, SynthesisError> {
        let url = format!("{}/v1/text-to-speech/{}", self.base_url, voice);

        let request_body = TtsRequest {
            text: text.as_str(),
            model_id: &self.model_id,
            voice_settings: self.shaping,
        };

        tracing::debug!(voice_id = %voice, chars = text.as_str().len(), "synthesizing speech");

        let response = self
            .client
            .post(&url)
            .header("xi-api-key", &self.api_key)
            .header("Accept", "audio/mpeg")
            .json(&request_body)
            .timeout(self.synthesis_timeout)
            .send()
            .await
            .map_err(|e| SynthesisError::Request(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(SynthesisError::Api { status, body });
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| SynthesisError::Request(format!("body: {}", e)))?;

        if audio.is_empty() {
            return Err(SynthesisError::EmptyAudio);
        }

        Ok(AudioBlob::with_format(audio, AudioFormat::Mp3))
    }

    async fn delete_voice(&self, voice: &VoiceModelId) -> Result<(), CloningError> {
        let url = format!("{}/v1/voices/{}", self.base_url, voice);

        let response = self
            .client
            .delete(&url)
            .header("xi-api-key", &self.api_key)
            .timeout(self.create_timeout)
            .send()
            .await
            .map_err(|e| CloningError::Request(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(CloningError::Api { status, body });
        }

        Ok(())
    }
}
