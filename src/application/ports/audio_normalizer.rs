use crate::domain::AudioBlob;

/// Produces a blob the transcription client can submit.
///
/// Implementations may re-encode locally or pass bytes through and rely on
/// the remote service's own decoding; either way the output tag must match
/// the transcription client's declared input contract.
pub trait AudioNormalizer: Send + Sync {
    fn normalize(&self, blob: AudioBlob) -> Result<AudioBlob, FormatError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("empty audio payload")]
    EmptyAudio,
    #[error("audio could not be decoded: {0}")]
    Undecodable(String),
}
