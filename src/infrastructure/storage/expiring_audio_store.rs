use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use tokio::time::Instant;
use uuid::Uuid;

use crate::domain::AudioBlob;

/// Short-lived in-memory cache for produced replies, for callers that must
/// host the result under an opaque id (e.g. a media URL handed to a
/// messaging provider).
///
/// Expiry is an explicit timestamp on each entry, not a detached timer:
/// expired entries are unreadable immediately and reclaimed on insert, on
/// access, or by `sweep`.
pub struct ExpiringAudioStore {
    entries: Mutex<HashMap<Uuid, Entry>>,
    ttl: Duration,
}

struct Entry {
    audio: AudioBlob,
    expires_at: Instant,
}

impl ExpiringAudioStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    pub fn insert(&self, audio: AudioBlob) -> Uuid {
        let id = Uuid::new_v4();
        let now = Instant::now();
        let mut entries = self.entries.lock().expect("store lock poisoned");
        entries.retain(|_, e| e.expires_at > now);
        entries.insert(
            id,
            Entry {
                audio,
                expires_at: now + self.ttl,
            },
        );
        id
    }

    /// Returns the entry if it exists and has not expired; an expired entry
    /// is removed on the spot.
    pub fn fetch(&self, id: &Uuid) -> Option<AudioBlob> {
        let now = Instant::now();
        let mut entries = self.entries.lock().expect("store lock poisoned");
        match entries.get(id) {
            Some(e) if e.expires_at > now => Some(e.audio.clone()),
            Some(_) => {
                entries.remove(id);
                None
            }
            None => None,
        }
    }

    /// Drop all expired entries, returning how many were reclaimed.
    pub fn sweep(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.lock().expect("store lock poisoned");
        let before = entries.len();
        entries.retain(|_, e| e.expires_at > now);
        before - entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().expect("store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
