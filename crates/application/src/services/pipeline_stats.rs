use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Counters updated by the packet pipeline. Clones share the same counters.
#[derive(Clone, Default)]
pub struct PipelineStats {
    packets_seen: Arc<AtomicU64>,

    packets_rejected: Arc<AtomicU64>,

    rows_emitted: Arc<AtomicU64>,

    records_suppressed: Arc<AtomicU64>,

    degraded_fingerprints: Arc<AtomicU64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStatsSnapshot {
    pub packets_seen: u64,
    pub packets_rejected: u64,
    pub rows_emitted: u64,
    pub records_suppressed: u64,
    pub degraded_fingerprints: u64,
}

impl PipelineStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_packet(&self) {
        self.packets_seen.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejected(&self) {
        self.packets_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rows(&self, rows: u64) {
        self.rows_emitted.fetch_add(rows, Ordering::Relaxed);
    }

    pub fn record_suppressed(&self) {
        self.records_suppressed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_degraded_fingerprint(&self) {
        self.degraded_fingerprints.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> PipelineStatsSnapshot {
        PipelineStatsSnapshot {
            packets_seen: self.packets_seen.load(Ordering::Relaxed),
            packets_rejected: self.packets_rejected.load(Ordering::Relaxed),
            rows_emitted: self.rows_emitted.load(Ordering::Relaxed),
            records_suppressed: self.records_suppressed.load(Ordering::Relaxed),
            degraded_fingerprints: self.degraded_fingerprints.load(Ordering::Relaxed),
        }
    }
}

impl std::fmt::Debug for PipelineStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PipelineStats").field(&self.snapshot()).finish()
    }
}
