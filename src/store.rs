// Single-slot holder for the latest snapshot

use crate::models::StatusSnapshot;
use tokio::sync::RwLock;

/// Holds at most one snapshot. One writer (the sampler) replaces the value
/// wholesale; any number of readers clone it without blocking each other.
pub struct SnapshotStore {
    slot: RwLock<Option<StatusSnapshot>>,
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self {
            slot: RwLock::new(None),
        }
    }

    /// Replaces the held snapshot. Readers observe either the old or the new
    /// value in full, never a mix of fields.
    pub async fn publish(&self, snapshot: StatusSnapshot) {
        *self.slot.write().await = Some(snapshot);
    }

    /// The latest snapshot, or `None` before the first publish.
    pub async fn current(&self) -> Option<StatusSnapshot> {
        self.slot.read().await.clone()
    }
}
