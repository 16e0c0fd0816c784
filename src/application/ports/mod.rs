mod audio_normalizer;
mod condenser;
mod transcriber;
mod voice_cloner;

pub use audio_normalizer::{AudioNormalizer, FormatError};
pub use condenser::{CondensationError, Condenser};
pub use transcriber::{Transcriber, TranscriptionError};
pub use voice_cloner::{CloningError, SynthesisError, VoiceCloner};
