use std::net::SocketAddr;
use std::path::PathBuf;

use serde::Deserialize;
use pricer_core::error::{PricerError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    pub model: ModelSection,
}

impl ServiceConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(PricerError::Config(format!(
                "unsupported config version {}",
                self.version
            )));
        }
        self.server.validate()?;
        self.model.validate()?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            PricerError::Config(format!("server.listen must be a socket address: {e}"))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8000".into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelSection {
    pub path: PathBuf,
}

impl ModelSection {
    pub fn validate(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Err(PricerError::Config("model.path must not be empty".into()));
        }
        Ok(())
    }
}
