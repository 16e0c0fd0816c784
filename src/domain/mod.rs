mod audio_blob;
mod audio_format;
mod condensed_text;
mod transcript;
mod voice_model_id;

pub use audio_blob::AudioBlob;
pub use audio_format::AudioFormat;
pub use condensed_text::CondensedText;
pub use transcript::Transcript;
pub use voice_model_id::VoiceModelId;
