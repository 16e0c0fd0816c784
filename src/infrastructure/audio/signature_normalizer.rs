use crate::application::ports::{AudioNormalizer, FormatError};
use crate::domain::{AudioBlob, AudioFormat};

/// Pass-through normalizer: rejects empty payloads, re-derives the format
/// tag from the byte signature, and submits the original container bytes
/// unchanged. The transcription service performs its own decoding, keyed
/// off the filename/MIME hint carried by the tag.
pub struct SignatureNormalizer;

impl AudioNormalizer for SignatureNormalizer {
    fn normalize(&self, blob: AudioBlob) -> Result<AudioBlob, FormatError> {
        if blob.is_empty() {
            return Err(FormatError::EmptyAudio);
        }

        let detected = AudioFormat::detect(blob.bytes());
        if detected == AudioFormat::Unknown {
            tracing::warn!(
                bytes = blob.len(),
                "unrecognized audio signature, passing through best-effort"
            );
        }

        if detected == blob.format() {
            Ok(blob)
        } else {
            Ok(AudioBlob::with_format(blob.into_bytes(), detected))
        }
    }
}
