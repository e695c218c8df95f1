// Wire and probe data models

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One published metrics record. `network_in`/`network_out` are bytes moved
/// during the most recent sampling interval, not cumulative totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub cpu_usage: f64,
    pub memory_used: u64,
    pub memory_total: u64,
    pub network_in: u64,
    pub network_out: u64,
}

/// Memory probe result, in bytes. `used <= total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryStats {
    pub used: u64,
    pub total: u64,
}

/// Cumulative byte counters for one network interface at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceCounters {
    pub name: String,
    pub bytes_recv: u64,
    pub bytes_sent: u64,
}

/// Per-interface counters keyed by interface name; the sampler's private
/// delta baseline, replaced wholesale on every successful sample.
pub type InterfaceCounterMap = HashMap<String, InterfaceCounters>;
