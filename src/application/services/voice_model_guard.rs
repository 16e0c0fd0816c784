use std::sync::Arc;

use crate::application::ports::VoiceCloner;
use crate::domain::VoiceModelId;

/// Scoped ownership of a remote voice model.
///
/// Holds the id from creation until release and guarantees exactly one
/// delete attempt per model: `release` on the normal paths, `Drop` when the
/// run is cancelled mid-flight. Delete failures are logged, never returned,
/// so they cannot mask the synthesis outcome.
pub struct VoiceModelGuard {
    cloner: Arc<dyn VoiceCloner>,
    id: VoiceModelId,
    released: bool,
}

impl VoiceModelGuard {
    pub fn new(cloner: Arc<dyn VoiceCloner>, id: VoiceModelId) -> Self {
        Self {
            cloner,
            id,
            released: false,
        }
    }

    pub fn id(&self) -> &VoiceModelId {
        &self.id
    }

    /// Delete the model, best-effort. Marks the guard released up front so
    /// Drop does not issue a second delete, even if this future is cancelled
    /// mid-call.
    pub async fn release(mut self) {
        self.released = true;
        match self.cloner.delete_voice(&self.id).await {
            Ok(()) => tracing::debug!(voice_id = %self.id, "voice model released"),
            Err(e) => {
                tracing::warn!(voice_id = %self.id, error = %e, "failed to release voice model")
            }
        }
    }
}

impl Drop for VoiceModelGuard {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        let cloner = Arc::clone(&self.cloner);
        let id = self.id.clone();
        // A dropped-but-unreleased guard means the run was cancelled; the
        // delete still has to happen, detached from the dead run.
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    if let Err(e) = cloner.delete_voice(&id).await {
                        tracing::warn!(
                            voice_id = %id,
                            error = %e,
                            "failed to release voice model after cancellation"
                        );
                    }
                });
            }
            Err(_) => {
                tracing::warn!(voice_id = %id, "voice model leaked: no runtime for cleanup");
            }
        }
    }
}
