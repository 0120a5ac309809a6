//! Prediction invoker.
//!
//! Shapes the record into a one-row `FeatureRow`, times only the model call,
//! and turns every model failure (error, panic, non-finite output) into
//! `ModelError`.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::{Duration, Instant};

use serde::Serialize;

use pricer_core::error::ModelError;
use pricer_core::model::{FeatureRow, PriceModel};
use pricer_core::record::HouseRecord;

/// Successful prediction as returned to the client.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionResult {
    pub predicted_price: f64,
    #[serde(rename = "latency_sec")]
    pub latency_seconds: f64,
}

/// Outcome of one model call plus its measured duration.
#[derive(Debug)]
pub struct Invocation {
    pub latency: Duration,
    pub outcome: Result<f64, ModelError>,
}

impl Invocation {
    pub fn latency_seconds(&self) -> f64 {
        self.latency.as_secs_f64()
    }

    pub fn into_result(self) -> Result<PredictionResult, ModelError> {
        let latency_seconds = self.latency.as_secs_f64();
        self.outcome.map(|predicted_price| PredictionResult {
            predicted_price,
            latency_seconds,
        })
    }
}

pub fn invoke(model: &dyn PriceModel, record: &HouseRecord) -> Invocation {
    let row = FeatureRow::from(record);

    let start = Instant::now();
    let raw = catch_unwind(AssertUnwindSafe(|| model.predict(&row)));
    let latency = start.elapsed();

    let outcome = match raw {
        Ok(Ok(v)) if v.is_finite() => Ok(v),
        Ok(Ok(v)) => Err(ModelError::new(format!("model returned non-finite value {v}"))),
        Ok(Err(e)) => Err(e),
        Err(payload) => Err(ModelError::new(format!(
            "model panicked: {}",
            panic_message(payload.as_ref())
        ))),
    };

    Invocation { latency, outcome }
}

pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
