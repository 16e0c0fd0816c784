use std::fmt;

/// Opaque identifier of a remote ephemeral voice model.
///
/// Valid only within the pipeline run that created it; the run must release
/// the model on every exit path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VoiceModelId(String);

impl VoiceModelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VoiceModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
