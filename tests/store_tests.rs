// Snapshot store tests: idempotent reads, atomic replacement under concurrency

use statusd::models::StatusSnapshot;
use statusd::store::SnapshotStore;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// All fields derived from one seed, so a torn read is detectable.
fn snapshot_for(seed: u64) -> StatusSnapshot {
    StatusSnapshot {
        cpu_usage: (seed % 100) as f64,
        memory_used: seed,
        memory_total: seed * 2,
        network_in: seed * 3,
        network_out: seed * 4,
    }
}

#[tokio::test]
async fn test_current_is_none_before_first_publish() {
    let store = SnapshotStore::new();
    assert!(store.current().await.is_none());
}

#[tokio::test]
async fn test_current_is_idempotent() {
    let store = SnapshotStore::new();
    store.publish(snapshot_for(7)).await;
    let first = store.current().await.unwrap();
    let second = store.current().await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_publish_replaces_snapshot_wholesale() {
    let store = SnapshotStore::new();
    store.publish(snapshot_for(1)).await;
    store.publish(snapshot_for(2)).await;
    assert_eq!(store.current().await.unwrap(), snapshot_for(2));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_readers_never_observe_torn_snapshot() {
    let store = Arc::new(SnapshotStore::new());
    let done = Arc::new(AtomicBool::new(false));

    let mut readers = Vec::new();
    for _ in 0..4 {
        let store = store.clone();
        let done = done.clone();
        readers.push(tokio::spawn(async move {
            while !done.load(Ordering::Relaxed) {
                if let Some(s) = store.current().await {
                    let seed = s.memory_used;
                    assert_eq!(s.memory_total, seed * 2, "torn read: memory_total");
                    assert_eq!(s.network_in, seed * 3, "torn read: network_in");
                    assert_eq!(s.network_out, seed * 4, "torn read: network_out");
                    assert_eq!(s.cpu_usage, (seed % 100) as f64, "torn read: cpu_usage");
                }
                tokio::task::yield_now().await;
            }
        }));
    }

    for seed in 1..=500 {
        store.publish(snapshot_for(seed)).await;
        tokio::task::yield_now().await;
    }
    done.store(true, Ordering::Relaxed);
    for reader in readers {
        reader.await.unwrap();
    }
    assert_eq!(store.current().await.unwrap(), snapshot_for(500));
}
