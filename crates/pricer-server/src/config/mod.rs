//! Service config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use pricer_core::error::{PricerError, Result};

pub use schema::{ModelSection, ServerSection, ServiceConfig};

/// Env var overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "PRICER_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "pricer.yaml";

pub fn load_from_file(path: impl AsRef<Path>) -> Result<ServiceConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path)
        .map_err(|e| PricerError::Config(format!("read {} failed: {e}", path.display())))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServiceConfig> {
    let cfg: ServiceConfig = serde_yaml::from_str(s)
        .map_err(|e| PricerError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
