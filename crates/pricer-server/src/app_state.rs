//! Shared application state.
//!
//! An `AppState` only exists once a model is loaded, so the router can never
//! serve traffic without one.

use std::sync::Arc;

use pricer_core::error::Result;
use pricer_core::model::PriceModel;

use crate::config::ServiceConfig;
use crate::model;
use crate::obs::MetricsAggregator;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    model: Arc<dyn PriceModel>,
    metrics: MetricsAggregator,
}

impl AppState {
    pub fn new(model: Arc<dyn PriceModel>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                model,
                metrics: MetricsAggregator::new(),
            }),
        }
    }

    /// Load the configured model artifact and build state around it.
    pub fn from_config(cfg: &ServiceConfig) -> Result<Self> {
        let model = model::load_from_file(&cfg.model.path)?;
        tracing::info!(model = model.name(), path = %cfg.model.path.display(), "model loaded");
        Ok(Self::new(model))
    }

    pub fn model(&self) -> Arc<dyn PriceModel> {
        Arc::clone(&self.inner.model)
    }

    pub fn metrics(&self) -> &MetricsAggregator {
        &self.inner.metrics
    }
}
