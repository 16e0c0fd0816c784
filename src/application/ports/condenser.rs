use async_trait::async_trait;

use crate::domain::{CondensedText, Transcript};

#[async_trait]
pub trait Condenser: Send + Sync {
    async fn condense(&self, transcript: &Transcript) -> Result<CondensedText, CondensationError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CondensationError {
    #[error("condensation request failed: {0}")]
    Request(String),
    #[error("condensation api returned status {status}: {body}")]
    Api { status: u16, body: String },
    #[error("condensation produced no text")]
    EmptyCompletion,
}
