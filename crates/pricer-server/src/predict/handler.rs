use axum::{extract::State, Json};
use bytes::Bytes;
use serde_json::Value;

use pricer_core::error::{PricerError, ValidationError};
use pricer_core::record;

use crate::app_state::AppState;
use crate::error::ApiError;

use super::invoker::{self, PredictionResult};

/// `POST /predict`.
///
/// Validation failures never reach the model and are not counted. Every call
/// that reaches the model is recorded, whether it succeeds or not.
pub async fn predict(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PredictionResult>, ApiError> {
    let raw: Value = serde_json::from_slice(&body)
        .map_err(|e| ValidationError::new("body", format!("invalid JSON: {e}")))?;
    let record = record::validate(&raw)?;

    tracing::info!(input = ?record, "predict request");

    let model = state.model();
    let invocation = tokio::task::spawn_blocking(move || invoker::invoke(model.as_ref(), &record))
        .await
        .map_err(|e| PricerError::Internal(format!("model task failed: {e}")))?;

    state.metrics().record(invocation.latency_seconds());

    match invocation.into_result() {
        Ok(res) => {
            tracing::info!(
                predicted_price = res.predicted_price,
                latency_sec = format_args!("{:.4}", res.latency_seconds),
                "prediction served"
            );
            Ok(Json(res))
        }
        Err(e) => {
            tracing::error!(error = %e, "prediction error");
            Err(e.into())
        }
    }
}
