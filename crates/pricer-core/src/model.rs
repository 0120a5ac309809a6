//! Model contract and the one-row tabular input handed to it.

use crate::error::ModelError;
use crate::record::{HouseRecord, CATEGORY_FIELD};

/// Cell value of a [`FeatureRow`].
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureValue {
    Numeric(f64),
    Categorical(String),
}

/// One row of named columns, in training-schema order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureRow {
    columns: Vec<(String, FeatureValue)>,
}

impl FeatureRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: FeatureValue) {
        self.columns.push((name.into(), value));
    }

    pub fn get(&self, name: &str) -> Option<&FeatureValue> {
        self.columns.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn numeric(&self, name: &str) -> Option<f64> {
        match self.get(name)? {
            FeatureValue::Numeric(v) => Some(*v),
            FeatureValue::Categorical(_) => None,
        }
    }

    pub fn categorical(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            FeatureValue::Categorical(s) => Some(s.as_str()),
            FeatureValue::Numeric(_) => None,
        }
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl From<&HouseRecord> for FeatureRow {
    fn from(rec: &HouseRecord) -> Self {
        let mut row = FeatureRow::new();
        for (name, v) in rec.numeric_columns() {
            row.push(name, FeatureValue::Numeric(v));
        }
        row.push(
            CATEGORY_FIELD,
            FeatureValue::Categorical(rec.ocean_proximity.as_str().to_string()),
        );
        row
    }
}

/// A loaded regression pipeline. Implementations may fail on rows they cannot
/// handle; they must not hold per-request state.
pub trait PriceModel: Send + Sync {
    fn name(&self) -> &str;
    fn predict(&self, row: &FeatureRow) -> Result<f64, ModelError>;
}
