mod elevenlabs_client;

pub use elevenlabs_client::{ElevenLabsClient, VoiceShaping};
