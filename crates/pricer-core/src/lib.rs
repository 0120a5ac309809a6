//! pricer core: record schema, validation, model contract and error types.
//!
//! This crate defines the input contract and error surface shared by the
//! HTTP server, the model implementations and test tooling. It carries no
//! transport or runtime dependencies.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Malformed input always surfaces as `ValidationError`/`PricerError`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod model;
pub mod record;

/// Shared result type.
pub use error::{ModelError, PricerError, Result, ValidationError};
pub use model::{FeatureRow, FeatureValue, PriceModel};
pub use record::{validate, HouseRecord, OceanProximity};
