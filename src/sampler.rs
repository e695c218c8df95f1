// Background sampling task: probe, compute network deltas, publish.
// Probes run on the blocking pool; the task owns its delta baseline privately
// and communicates outward only by publishing snapshots to the store.

use crate::models::{InterfaceCounterMap, InterfaceCounters, StatusSnapshot};
use crate::provider::{MetricsProvider, ProviderError};
use crate::store::SnapshotStore;
use std::sync::Arc;
use tokio::time::{Duration, interval};

/// Provider, store, and shutdown for the sampler.
pub struct SamplerDeps<P: MetricsProvider> {
    pub provider: Arc<P>,
    pub store: Arc<SnapshotStore>,
    pub shutdown_rx: tokio::sync::oneshot::Receiver<()>,
}

/// Sampler timing and logging config.
/// Stats logging uses real-time intervals, independent of sample_interval_ms.
pub struct SamplerConfig {
    pub sample_interval_ms: u64,
    /// How often to log app stats (real seconds).
    pub stats_log_interval_secs: u64,
}

/// Sums per-interface deltas between two cumulative counter readings.
///
/// An empty `prev` means no baseline yet; the result is (0, 0) rather than a
/// spurious since-boot spike. Only interfaces present in both readings
/// contribute. A counter that went backwards (interface reset) clamps that
/// direction's delta to zero for the interval.
pub fn network_delta(prev: &InterfaceCounterMap, current: &[InterfaceCounters]) -> (u64, u64) {
    if prev.is_empty() {
        return (0, 0);
    }
    let mut network_in: u64 = 0;
    let mut network_out: u64 = 0;
    for counter in current {
        if let Some(p) = prev.get(&counter.name) {
            network_in += counter.bytes_recv.saturating_sub(p.bytes_recv);
            network_out += counter.bytes_sent.saturating_sub(p.bytes_sent);
        }
    }
    (network_in, network_out)
}

/// Runs one full probe pass and builds the snapshot plus the next baseline.
/// Any probe failure discards the whole sample; nothing partial is returned.
pub async fn sample<P: MetricsProvider>(
    provider: Arc<P>,
    prev_counters: &InterfaceCounterMap,
) -> Result<(StatusSnapshot, InterfaceCounterMap), ProviderError> {
    let prev = prev_counters.clone();
    tokio::task::spawn_blocking(move || {
        let cpu_usage = provider.cpu_percent()?;
        let memory = provider.virtual_memory()?;
        let counters = provider.network_counters()?;

        let (network_in, network_out) = network_delta(&prev, &counters);
        let current: InterfaceCounterMap = counters
            .into_iter()
            .map(|c| (c.name.clone(), c))
            .collect();

        Ok((
            StatusSnapshot {
                cpu_usage,
                memory_used: memory.used,
                memory_total: memory.total,
                network_in,
                network_out,
            },
            current,
        ))
    })
    .await
    .map_err(|e| ProviderError::Join(e.to_string()))?
}

pub fn spawn<P: MetricsProvider>(
    deps: SamplerDeps<P>,
    config: SamplerConfig,
) -> tokio::task::JoinHandle<()> {
    let SamplerDeps {
        provider,
        store,
        mut shutdown_rx,
    } = deps;
    let SamplerConfig {
        sample_interval_ms,
        stats_log_interval_secs,
    } = config;

    tokio::spawn(async move {
        let mut tick = interval(Duration::from_millis(sample_interval_ms));
        tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        let mut stats_log_tick = interval(Duration::from_secs(stats_log_interval_secs));
        stats_log_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        let mut prev_counters = InterfaceCounterMap::new();
        let mut samples_published_total: u64 = 0;

        let sampler_span = tracing::span!(tracing::Level::DEBUG, "sampler", sample_interval_ms);
        let _guard = sampler_span.enter();

        loop {
            tokio::select! {
                _ = tick.tick() => {
                    match sample(provider.clone(), &prev_counters).await {
                        Ok((snapshot, current)) => {
                            store.publish(snapshot).await;
                            prev_counters = current;
                            samples_published_total += 1;
                        }
                        Err(e) => {
                            // Last snapshot and baseline stay intact; the next
                            // success computes its delta across the gap.
                            tracing::warn!(
                                error = %e,
                                operation = "sample",
                                "sample failed"
                            );
                        }
                    }
                }
                _ = &mut shutdown_rx => {
                    tracing::debug!("Sampler shutting down");
                    break;
                }
                _ = stats_log_tick.tick() => {
                    tracing::info!(samples_published_total, "app stats");
                }
            }
        }
    })
}
