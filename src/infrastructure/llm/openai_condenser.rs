use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{CondensationError, Condenser};
use crate::domain::{CondensedText, Transcript};

/// Style directive for the paraphrase. Output length is steered here, not
/// enforced afterwards.
pub const DEFAULT_DIRECTIVE: &str = "\
You rewrite voice-note transcripts as the sender. Rewrite the transcript as a \
single first-person paragraph of 2-5 short sentences, keeping the sender's \
tone and turns of phrase. Pick out the handful of details that matter and drop \
the rest. If the original opened with a greeting, keep one. Never switch out \
of the first person and never add information that was not in the original.";

pub struct OpenAiCondenser {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    directive: String,
    temperature: f32,
    timeout: Duration,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl OpenAiCondenser {
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: Option<String>,
        directive: Option<String>,
        temperature: f32,
        timeout: Duration,
    ) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            model: model.unwrap_or_else(|| "gpt-4o-mini".to_string()),
            directive: directive.unwrap_or_else(|| DEFAULT_DIRECTIVE.to_string()),
            temperature,
            timeout,
        }
    }
}

#[async_trait]
impl Condenser for OpenAiCondenser {
    async fn condense(&self, transcript: &Transcript) -> Result<CondensedText, CondensationError> {
        let url = format!("{}/chat/completions", self.base_url);

        let request_body = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: self.directive.clone(),
                },
                ChatMessage {
                    role: "user",
                    content: transcript.as_str().to_string(),
                },
            ],
            temperature: self.temperature,
        };

        tracing::debug!(model = %self.model, chars = transcript.as_str().len(), "condensing transcript");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| CondensationError::Request(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(CondensationError::Api { status, body });
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| CondensationError::Request(format!("body: {}", e)))?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();

        let condensed = CondensedText::new(content.trim());
        if condensed.is_empty() {
            return Err(CondensationError::EmptyCompletion);
        }

        Ok(condensed)
    }
}
