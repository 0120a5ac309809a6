//! pricer server library entry.
//!
//! This crate wires config loading, the model pipeline, the prediction
//! invoker, and the metrics aggregator into an axum router. It is consumed by
//! the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod error;
pub mod model;
pub mod obs;
pub mod ops;
pub mod predict;
pub mod router;
