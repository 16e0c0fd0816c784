use std::fmt;

/// First-person paraphrase of a transcript, a few sentences long.
///
/// Length is a soft target enforced by the condensation directive; this
/// type does not re-validate sentence count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CondensedText(String);

impl CondensedText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for CondensedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
