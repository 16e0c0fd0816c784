use std::fmt;

/// Container/codec family inferred from a payload's leading bytes.
///
/// Detection is signature-based only; filenames and transport headers are
/// not trusted. Anything that matches no known magic is `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioFormat {
    OggOpus,
    Mp4,
    Mp3,
    Wav,
    Unknown,
}

impl AudioFormat {
    pub fn detect(bytes: &[u8]) -> Self {
        if bytes.starts_with(b"OggS") {
            return Self::OggOpus;
        }
        if bytes.len() >= 12 && &bytes[4..8] == b"ftyp" {
            return Self::Mp4;
        }
        if bytes.len() >= 12 && bytes.starts_with(b"RIFF") && &bytes[8..12] == b"WAVE" {
            return Self::Wav;
        }
        if bytes.starts_with(b"ID3") {
            return Self::Mp3;
        }
        // Bare MPEG audio frame: 11-bit sync run at the start.
        if bytes.len() >= 2 && bytes[0] == 0xFF && bytes[1] & 0xE0 == 0xE0 {
            return Self::Mp3;
        }
        Self::Unknown
    }

    /// Filename hint handed to remote decoders so they can pick a codec.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::OggOpus => "voice.ogg",
            Self::Mp4 => "voice.m4a",
            Self::Mp3 => "voice.mp3",
            Self::Wav => "voice.wav",
            Self::Unknown => "voice.bin",
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            Self::OggOpus => "audio/ogg",
            Self::Mp4 => "audio/mp4",
            Self::Mp3 => "audio/mpeg",
            Self::Wav => "audio/wav",
            Self::Unknown => "application/octet-stream",
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::OggOpus => "ogg-opus",
            Self::Mp4 => "mp4",
            Self::Mp3 => "mp3",
            Self::Wav => "wav",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}
