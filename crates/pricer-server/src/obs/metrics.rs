//! Running request statistics behind `/metrics`.
//!
//! Count and latency sum live in one struct behind one lock, so a snapshot
//! always sees both halves of the same update.

use parking_lot::Mutex;
use serde::Serialize;

/// Point-in-time view returned by `/metrics`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    pub total_requests: u64,
    #[serde(rename = "average_latency_sec")]
    pub average_latency_seconds: f64,
}

#[derive(Debug, Default)]
struct Totals {
    requests: u64,
    latency_seconds: f64,
}

#[derive(Debug, Default)]
pub struct MetricsAggregator {
    totals: Mutex<Totals>,
}

impl MetricsAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one request and add its latency.
    pub fn record(&self, latency_seconds: f64) {
        let mut t = self.totals.lock();
        t.requests += 1;
        t.latency_seconds += latency_seconds;
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let t = self.totals.lock();
        let average_latency_seconds = if t.requests > 0 {
            t.latency_seconds / t.requests as f64
        } else {
            0.0
        };
        MetricsSnapshot {
            total_requests: t.requests,
            average_latency_seconds,
        }
    }
}
