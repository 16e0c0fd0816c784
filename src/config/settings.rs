use std::time::Duration;

/// Everything the pipeline needs, resolved once at process start. Business
/// logic never reads the environment directly; adapters receive values from
/// here by reference.
#[derive(Debug, Clone)]
pub struct Settings {
    pub openai: OpenAiSettings,
    pub elevenlabs: ElevenLabsSettings,
    pub timeouts: TimeoutSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone)]
pub struct OpenAiSettings {
    pub api_key: String,
    pub base_url: Option<String>,
    pub transcription_model: Option<String>,
    pub chat_model: Option<String>,
    pub directive: Option<String>,
    pub temperature: f32,
}

#[derive(Debug, Clone)]
pub struct ElevenLabsSettings {
    pub api_key: String,
    pub base_url: Option<String>,
    pub model_id: Option<String>,
    pub stability: f32,
    pub similarity_boost: f32,
    pub style: f32,
    pub speaker_boost: bool,
}

#[derive(Debug, Clone)]
pub struct TimeoutSettings {
    pub transcription: Duration,
    pub condensation: Duration,
    pub voice_create: Duration,
    pub synthesis: Duration,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub environment: String,
    pub json_format: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("required environment variable {0} is not set")]
    MissingVar(&'static str),
    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigurationError> {
        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup. Split out from
    /// `from_env` so tests can inject values without touching process
    /// environment.
    pub fn from_source<F>(get: F) -> Result<Self, ConfigurationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let openai = OpenAiSettings {
            api_key: require(&get, "OPENAI_API_KEY")?,
            base_url: get("OPENAI_BASE_URL"),
            transcription_model: get("TRANSCRIPTION_MODEL"),
            chat_model: get("CHAT_MODEL"),
            directive: get("CONDENSE_DIRECTIVE"),
            temperature: parse_or(&get, "CONDENSE_TEMPERATURE", 0.3)?,
        };

        let elevenlabs = ElevenLabsSettings {
            api_key: require(&get, "ELEVENLABS_API_KEY")?,
            base_url: get("ELEVENLABS_BASE_URL"),
            model_id: get("TTS_MODEL_ID"),
            stability: unit_interval(&get, "VOICE_STABILITY", 0.6)?,
            similarity_boost: unit_interval(&get, "VOICE_SIMILARITY_BOOST", 1.0)?,
            style: unit_interval(&get, "VOICE_STYLE", 0.0)?,
            speaker_boost: parse_or(&get, "VOICE_SPEAKER_BOOST", true)?,
        };

        let timeouts = TimeoutSettings {
            transcription: Duration::from_secs(parse_or(&get, "TRANSCRIPTION_TIMEOUT_SECS", 60)?),
            condensation: Duration::from_secs(parse_or(&get, "CONDENSATION_TIMEOUT_SECS", 30)?),
            voice_create: Duration::from_secs(parse_or(&get, "VOICE_CREATE_TIMEOUT_SECS", 60)?),
            synthesis: Duration::from_secs(parse_or(&get, "SYNTHESIS_TIMEOUT_SECS", 120)?),
        };

        let logging = LoggingSettings {
            environment: get("APP_ENV").unwrap_or_else(|| "development".to_string()),
            json_format: get("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
        };

        Ok(Self {
            openai,
            elevenlabs,
            timeouts,
            logging,
        })
    }
}

fn require<F>(get: &F, var: &'static str) -> Result<String, ConfigurationError>
where
    F: Fn(&str) -> Option<String>,
{
    match get(var) {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigurationError::MissingVar(var)),
    }
}

fn parse_or<F, T>(get: &F, var: &'static str, default: T) -> Result<T, ConfigurationError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match get(var) {
        Some(raw) => raw.parse().map_err(|e: T::Err| ConfigurationError::Invalid {
            var,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}

fn unit_interval<F>(get: &F, var: &'static str, default: f32) -> Result<f32, ConfigurationError>
where
    F: Fn(&str) -> Option<String>,
{
    let value: f32 = parse_or(get, var, default)?;
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigurationError::Invalid {
            var,
            reason: format!("{} is outside 0..=1", value),
        });
    }
    Ok(value)
}
