use bytes::Bytes;

use super::AudioFormat;

/// Immutable audio payload plus its inferred format tag.
///
/// A blob is never mutated in place; every transformation produces a new
/// blob. The tag always reflects the actual leading-byte signature, not
/// whatever the transport claimed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioBlob {
    bytes: Bytes,
    format: AudioFormat,
}

impl AudioBlob {
    /// Wrap raw bytes, sniffing the format from the leading signature.
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        let bytes = bytes.into();
        let format = AudioFormat::detect(&bytes);
        Self { bytes, format }
    }

    /// Wrap bytes whose format is already known (e.g. a synthesis response
    /// declared as MP3 by the remote service).
    pub fn with_format(bytes: impl Into<Bytes>, format: AudioFormat) -> Self {
        Self {
            bytes: bytes.into(),
            format,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Bytes {
        self.bytes
    }

    pub fn format(&self) -> AudioFormat {
        self.format
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn file_name(&self) -> &'static str {
        self.format.file_name()
    }

    pub fn mime(&self) -> &'static str {
        self.format.mime()
    }
}
