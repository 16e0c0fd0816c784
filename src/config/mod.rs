mod settings;

pub use settings::{
    ConfigurationError, ElevenLabsSettings, LoggingSettings, OpenAiSettings, Settings,
    TimeoutSettings,
};
