// Host metrics probes via sysinfo

use crate::models::{InterfaceCounters, MemoryStats};
use sysinfo::{Networks, System};
use thiserror::Error;

/// A metrics probe failed. The whole sample is discarded; the sampler keeps
/// serving the last good snapshot.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("cpu probe failed: {0}")]
    Cpu(String),

    #[error("memory probe failed: {0}")]
    Memory(String),

    #[error("network probe failed: {0}")]
    Network(String),

    #[error("probe task join: {0}")]
    Join(String),
}

/// Source of instantaneous host metrics. Methods may block on OS calls; the
/// sampler runs them on the blocking pool.
pub trait MetricsProvider: Send + Sync + 'static {
    /// Global CPU utilization, percent in [0, 100].
    fn cpu_percent(&self) -> Result<f64, ProviderError>;

    /// Used/total physical memory in bytes.
    fn virtual_memory(&self) -> Result<MemoryStats, ProviderError>;

    /// Cumulative per-interface byte counters since boot.
    fn network_counters(&self) -> Result<Vec<InterfaceCounters>, ProviderError>;
}

pub struct SysinfoProvider {
    sys: std::sync::Mutex<System>,
    networks: std::sync::Mutex<Networks>,
}

impl Default for SysinfoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SysinfoProvider {
    /// Primes CPU and network state so the first sample reads real deltas.
    pub fn new() -> Self {
        let mut sys = System::new_all();
        sys.refresh_all();
        let networks = Networks::new_with_refreshed_list();
        Self {
            sys: std::sync::Mutex::new(sys),
            networks: std::sync::Mutex::new(networks),
        }
    }
}

impl MetricsProvider for SysinfoProvider {
    fn cpu_percent(&self) -> Result<f64, ProviderError> {
        let mut sys = self
            .sys
            .lock()
            .map_err(|e| ProviderError::Cpu(format!("sysinfo lock poisoned: {e}")))?;
        sys.refresh_cpu_all();
        Ok((sys.global_cpu_usage() as f64).clamp(0.0, 100.0))
    }

    fn virtual_memory(&self) -> Result<MemoryStats, ProviderError> {
        let mut sys = self
            .sys
            .lock()
            .map_err(|e| ProviderError::Memory(format!("sysinfo lock poisoned: {e}")))?;
        sys.refresh_memory();
        let total = sys.total_memory();
        let used = total.saturating_sub(sys.available_memory());
        Ok(MemoryStats { used, total })
    }

    fn network_counters(&self) -> Result<Vec<InterfaceCounters>, ProviderError> {
        let mut networks = self
            .networks
            .lock()
            .map_err(|e| ProviderError::Network(format!("sysinfo networks lock poisoned: {e}")))?;
        networks.refresh(true);
        Ok(networks
            .list()
            .iter()
            .map(|(name, data)| InterfaceCounters {
                name: name.clone(),
                bytes_recv: data.total_received(),
                bytes_sent: data.total_transmitted(),
            })
            .collect())
    }
}
