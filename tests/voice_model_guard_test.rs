use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use revoice::application::ports::{CloningError, SynthesisError, VoiceCloner};
use revoice::application::services::VoiceModelGuard;
use revoice::domain::{AudioBlob, CondensedText, VoiceModelId};

struct DeleteCountingCloner {
    delete_calls: AtomicUsize,
    fail_delete: bool,
}

impl DeleteCountingCloner {
    fn new(fail_delete: bool) -> Arc<Self> {
        Arc::new(Self {
            delete_calls: AtomicUsize::new(0),
            fail_delete,
        })
    }
}

#[async_trait]
impl VoiceCloner for DeleteCountingCloner {
    async fn create_voice(
        &self,
        _sample: &AudioBlob,
        _label: &str,
    ) -> Result<VoiceModelId, CloningError> {
        Ok(VoiceModelId::new("voice-guard"))
    }

    async fn synthesize(
        &self,
        _voice: &VoiceModelId,
        _text: &CondensedText,
    ) -> Result<AudioBlob, SynthesisError> {
        Err(SynthesisError::EmptyAudio)
    }

    async fn delete_voice(&self, _voice: &VoiceModelId) -> Result<(), CloningError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_delete {
            Err(CloningError::Api {
                status: 500,
                body: "delete failed".into(),
            })
        } else {
            Ok(())
        }
    }
}

#[tokio::test]
async fn given_live_guard_when_reading_id_then_returns_the_created_id() {
    let cloner = DeleteCountingCloner::new(false);
    let guard = VoiceModelGuard::new(cloner.clone(), VoiceModelId::new("voice-guard"));

    assert_eq!(guard.id().as_str(), "voice-guard");

    guard.release().await;
}

#[tokio::test]
async fn given_released_guard_when_dropped_then_no_second_delete_is_issued() {
    let cloner = DeleteCountingCloner::new(false);
    let guard = VoiceModelGuard::new(cloner.clone(), VoiceModelId::new("voice-guard"));

    guard.release().await;

    // Give any stray Drop-spawned cleanup a chance to run before counting.
    for _ in 0..50 {
        tokio::task::yield_now().await;
    }
    assert_eq!(cloner.delete_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn given_unreleased_guard_when_dropped_then_delete_is_spawned_once() {
    let cloner = DeleteCountingCloner::new(false);
    let guard = VoiceModelGuard::new(cloner.clone(), VoiceModelId::new("voice-guard"));

    drop(guard);

    for _ in 0..1000 {
        if cloner.delete_calls.load(Ordering::SeqCst) > 0 {
            break;
        }
        tokio::task::yield_now().await;
    }
    assert_eq!(cloner.delete_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn given_failing_delete_when_releasing_then_failure_is_swallowed() {
    let cloner = DeleteCountingCloner::new(true);
    let guard = VoiceModelGuard::new(cloner.clone(), VoiceModelId::new("voice-guard"));

    // Release returns unit either way; the delete error must not escape.
    guard.release().await;

    assert_eq!(cloner.delete_calls.load(Ordering::SeqCst), 1);
}
