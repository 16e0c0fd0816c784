mod expiring_audio_store;

pub use expiring_audio_store::ExpiringAudioStore;
