//! `/predict` pipeline: validated record -> timed model call -> metrics.

pub mod handler;
pub mod invoker;

pub use invoker::{invoke, Invocation, PredictionResult};
