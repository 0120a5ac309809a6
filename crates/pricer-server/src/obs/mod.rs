//! In-process request metrics.
//!
//! One shared aggregator counts model-invoked `/predict` calls and their
//! cumulative model latency. The `/metrics` handler reads snapshots.

pub mod metrics;

pub use metrics::{MetricsAggregator, MetricsSnapshot};
