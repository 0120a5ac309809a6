//! Model artifact loading.
//!
//! The service ships one model family, a standardized linear pipeline stored
//! as JSON. Loading happens once at startup; any failure is fatal.

pub mod linear;

use std::path::Path;
use std::sync::Arc;

use pricer_core::error::Result;
use pricer_core::model::PriceModel;

pub use linear::LinearPipeline;

pub fn load_from_file(path: impl AsRef<Path>) -> Result<Arc<dyn PriceModel>> {
    let pipeline = LinearPipeline::from_file(path)?;
    Ok(Arc::new(pipeline))
}
