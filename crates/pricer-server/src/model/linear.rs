//! Standardized linear regression pipeline.
//!
//! price = intercept + sum(coef_i * (x_i - mean_i) / scale_i) + effect[category]
//!
//! Shape problems in the artifact are rejected at load time. Rows that do not
//! fit the artifact (missing column, unseen category) fail at predict time with
//! `ModelError`.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use pricer_core::error::{ModelError, PricerError, Result};
use pricer_core::model::{FeatureRow, PriceModel};
use pricer_core::record::{CATEGORY_FIELD, NUMERIC_FIELDS};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Artifact {
    name: String,
    features: Vec<String>,
    #[serde(default)]
    scaler: Option<Scaler>,
    coefficients: Vec<f64>,
    intercept: f64,
    category_column: String,
    category_effects: HashMap<String, f64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Scaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

#[derive(Debug, Clone)]
struct Term {
    column: String,
    mean: f64,
    scale: f64,
    coef: f64,
}

#[derive(Debug, Clone)]
pub struct LinearPipeline {
    name: String,
    terms: Vec<Term>,
    intercept: f64,
    category_column: String,
    category_effects: HashMap<String, f64>,
}

fn load_err(msg: impl Into<String>) -> PricerError {
    PricerError::ModelLoad(msg.into())
}

impl LinearPipeline {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let s = fs::read_to_string(path)
            .map_err(|e| load_err(format!("read {} failed: {e}", path.display())))?;
        Self::from_json(&s)
    }

    pub fn from_json(s: &str) -> Result<Self> {
        let a: Artifact =
            serde_json::from_str(s).map_err(|e| load_err(format!("invalid artifact: {e}")))?;
        Self::build(a)
    }

    fn build(a: Artifact) -> Result<Self> {
        if a.features.is_empty() {
            return Err(load_err("features must not be empty"));
        }
        if a.coefficients.len() != a.features.len() {
            return Err(load_err(format!(
                "{} coefficients for {} features",
                a.coefficients.len(),
                a.features.len()
            )));
        }
        if let Some(f) = a.features.iter().find(|f| !NUMERIC_FIELDS.contains(&f.as_str())) {
            return Err(load_err(format!("unknown feature column: {f}")));
        }
        if a.category_column != CATEGORY_FIELD {
            return Err(load_err(format!(
                "unknown category column: {}",
                a.category_column
            )));
        }

        let n = a.features.len();
        let (mean, scale) = match a.scaler {
            Some(sc) => {
                if sc.mean.len() != n || sc.scale.len() != n {
                    return Err(load_err("scaler length does not match features"));
                }
                if sc.scale.iter().any(|s| *s == 0.0) {
                    return Err(load_err("scaler.scale must not contain zero"));
                }
                (sc.mean, sc.scale)
            }
            None => (vec![0.0; n], vec![1.0; n]),
        };

        let all_finite = std::iter::once(a.intercept)
            .chain(a.coefficients.iter().copied())
            .chain(mean.iter().copied())
            .chain(scale.iter().copied())
            .chain(a.category_effects.values().copied())
            .all(f64::is_finite);
        if !all_finite {
            return Err(load_err("artifact contains non-finite numbers"));
        }

        let terms = a
            .features
            .into_iter()
            .zip(a.coefficients)
            .zip(mean.into_iter().zip(scale))
            .map(|((column, coef), (mean, scale))| Term {
                column,
                mean,
                scale,
                coef,
            })
            .collect();

        let category_effects = a
            .category_effects
            .into_iter()
            .map(|(k, v)| (k.trim().to_uppercase(), v))
            .collect();

        Ok(Self {
            name: a.name,
            terms,
            intercept: a.intercept,
            category_column: a.category_column,
            category_effects,
        })
    }
}

impl PriceModel for LinearPipeline {
    fn name(&self) -> &str {
        &self.name
    }

    fn predict(&self, row: &FeatureRow) -> std::result::Result<f64, ModelError> {
        let mut y = self.intercept;
        for t in &self.terms {
            let x = row
                .numeric(&t.column)
                .ok_or_else(|| ModelError::new(format!("missing numeric column: {}", t.column)))?;
            y += t.coef * (x - t.mean) / t.scale;
        }

        let cat = row.categorical(&self.category_column).ok_or_else(|| {
            ModelError::new(format!("missing categorical column: {}", self.category_column))
        })?;
        let effect = self.category_effects.get(cat).ok_or_else(|| {
            ModelError::new(format!(
                "unknown category '{cat}' for column {}",
                self.category_column
            ))
        })?;

        Ok(y + effect)
    }
}
