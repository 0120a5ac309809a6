//! Stub models and request helpers shared by server tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use pricer_core::error::ModelError;
use pricer_core::model::{FeatureRow, PriceModel};
use pricer_server::{app_state::AppState, router};

/// Always predicts the same price.
pub struct FixedModel(pub f64);

impl PriceModel for FixedModel {
    fn name(&self) -> &str {
        "fixed"
    }
    fn predict(&self, _row: &FeatureRow) -> Result<f64, ModelError> {
        Ok(self.0)
    }
}

/// Rejects every row.
pub struct FailingModel;

impl PriceModel for FailingModel {
    fn name(&self) -> &str {
        "failing"
    }
    fn predict(&self, _row: &FeatureRow) -> Result<f64, ModelError> {
        Err(ModelError::new("feature shape mismatch"))
    }
}

/// Panics inside the model call.
pub struct PanickingModel;

impl PriceModel for PanickingModel {
    fn name(&self) -> &str {
        "panicking"
    }
    fn predict(&self, _row: &FeatureRow) -> Result<f64, ModelError> {
        panic!("index out of bounds in tree 17")
    }
}

/// Returns NaN.
pub struct NanModel;

impl PriceModel for NanModel {
    fn name(&self) -> &str {
        "nan"
    }
    fn predict(&self, _row: &FeatureRow) -> Result<f64, ModelError> {
        Ok(f64::NAN)
    }
}

pub fn app_with(model: impl PriceModel + 'static) -> Router {
    router::build_router(AppState::new(Arc::new(model)))
}

pub fn example_record() -> Value {
    json!({
        "longitude": -122.23,
        "latitude": 37.88,
        "housing_median_age": 41,
        "total_rooms": 880,
        "total_bedrooms": 129,
        "population": 322,
        "households": 126,
        "median_income": 8.3252,
        "rooms_per_household": 7.0,
        "bedrooms_per_room": 0.15,
        "population_per_household": 2.5,
        "ocean_proximity": "NEAR OCEAN"
    })
}

pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_raw(app: &Router, body: impl Into<Body>) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri("/predict")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();
    send(app, req).await
}

pub async fn predict(app: &Router, record: &Value) -> (StatusCode, Value) {
    post_raw(app, record.to_string()).await
}

pub async fn total_requests(app: &Router) -> u64 {
    get(app, "/metrics").await.1["total_requests"].as_u64().unwrap()
}
