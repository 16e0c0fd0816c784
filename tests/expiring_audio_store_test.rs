use std::time::Duration;

use revoice::domain::AudioBlob;
use revoice::infrastructure::storage::ExpiringAudioStore;

fn mp3_blob() -> AudioBlob {
    AudioBlob::new(b"\xFF\xFB\x90\x00reply".to_vec())
}

#[tokio::test(start_paused = true)]
async fn given_fresh_entry_when_fetching_then_returns_audio() {
    let store = ExpiringAudioStore::new(Duration::from_secs(300));

    let id = store.insert(mp3_blob());

    assert_eq!(store.fetch(&id), Some(mp3_blob()));
}

#[tokio::test(start_paused = true)]
async fn given_expired_entry_when_fetching_then_returns_none_and_removes_it() {
    let store = ExpiringAudioStore::new(Duration::from_secs(300));
    let id = store.insert(mp3_blob());

    tokio::time::advance(Duration::from_secs(301)).await;

    assert_eq!(store.fetch(&id), None);
    assert!(store.is_empty());
}

#[tokio::test(start_paused = true)]
async fn given_entry_just_before_expiry_when_fetching_then_still_readable() {
    let store = ExpiringAudioStore::new(Duration::from_secs(300));
    let id = store.insert(mp3_blob());

    tokio::time::advance(Duration::from_secs(299)).await;

    assert!(store.fetch(&id).is_some());
}

#[tokio::test(start_paused = true)]
async fn given_mixed_ages_when_sweeping_then_only_expired_entries_are_reclaimed() {
    let store = ExpiringAudioStore::new(Duration::from_secs(300));
    let old = store.insert(mp3_blob());

    tokio::time::advance(Duration::from_secs(200)).await;
    let young = store.insert(mp3_blob());

    tokio::time::advance(Duration::from_secs(150)).await;

    assert_eq!(store.sweep(), 1);
    assert_eq!(store.fetch(&old), None);
    assert!(store.fetch(&young).is_some());
}

#[tokio::test(start_paused = true)]
async fn given_expired_entries_when_inserting_then_they_are_reclaimed_in_passing() {
    let store = ExpiringAudioStore::new(Duration::from_secs(300));
    store.insert(mp3_blob());

    tokio::time::advance(Duration::from_secs(301)).await;
    let fresh = store.insert(mp3_blob());

    assert_eq!(store.len(), 1);
    assert!(store.fetch(&fresh).is_some());
}

#[tokio::test(start_paused = true)]
async fn given_unknown_id_when_fetching_then_returns_none() {
    let store = ExpiringAudioStore::new(Duration::from_secs(300));

    assert_eq!(store.fetch(&uuid::Uuid::new_v4()), None);
}
