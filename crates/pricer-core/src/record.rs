//! Housing record schema and validation.
//!
//! Rules:
//! - Every field is required; `null` counts as missing.
//! - Numeric fields accept JSON numbers or numeric strings, must be finite and
//!   inside their bound.
//! - `ocean_proximity` is trimmed and uppercased before the category check.
//! - Fields are checked in schema order and the first violation is reported.
//! - Unknown extra fields are ignored.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ValidationError;

/// Allowed `ocean_proximity` categories (normalized form).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OceanProximity {
    #[serde(rename = "NEAR BAY")]
    NearBay,
    #[serde(rename = "INLAND")]
    Inland,
    #[serde(rename = "NEAR OCEAN")]
    NearOcean,
    #[serde(rename = "ISLAND")]
    Island,
    #[serde(rename = "1H OCEAN")]
    OneHourOcean,
}

impl OceanProximity {
    pub const ALL: [OceanProximity; 5] = [
        OceanProximity::NearBay,
        OceanProximity::Inland,
        OceanProximity::NearOcean,
        OceanProximity::Island,
        OceanProximity::OneHourOcean,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OceanProximity::NearBay => "NEAR BAY",
            OceanProximity::Inland => "INLAND",
            OceanProximity::NearOcean => "NEAR OCEAN",
            OceanProximity::Island => "ISLAND",
            OceanProximity::OneHourOcean => "1H OCEAN",
        }
    }

    /// Case-insensitive lookup. Returns `None` for anything outside the set.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_uppercase();
        Self::ALL.into_iter().find(|c| c.as_str() == normalized)
    }
}

impl fmt::Display for OceanProximity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One validated housing-feature input. Only [`validate`] builds it from raw input,
/// so every instance satisfies the field bounds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HouseRecord {
    pub longitude: f64,
    pub latitude: f64,
    pub housing_median_age: f64,
    pub total_rooms: f64,
    pub total_bedrooms: f64,
    pub population: f64,
    pub households: f64,
    pub median_income: f64,
    pub rooms_per_household: f64,
    pub bedrooms_per_room: f64,
    pub population_per_household: f64,
    pub ocean_proximity: OceanProximity,
}

/// Numeric bound of a field.
#[derive(Debug, Clone, Copy)]
enum Bound {
    Range(f64, f64),
    NonNegative,
}

impl Bound {
    fn check(self, v: f64) -> Result<(), String> {
        match self {
            Bound::Range(lo, hi) if !(lo..=hi).contains(&v) => {
                Err(format!("must be between {lo} and {hi}"))
            }
            Bound::NonNegative if v < 0.0 => Err("must be >= 0".into()),
            _ => Ok(()),
        }
    }
}

/// Column order of the training-time schema.
pub const NUMERIC_FIELDS: [&str; 11] = [
    "longitude",
    "latitude",
    "housing_median_age",
    "total_rooms",
    "total_bedrooms",
    "population",
    "households",
    "median_income",
    "rooms_per_household",
    "bedrooms_per_room",
    "population_per_household",
];

pub const CATEGORY_FIELD: &str = "ocean_proximity";

fn bound_of(field: &str) -> Bound {
    match field {
        "longitude" => Bound::Range(-180.0, 180.0),
        "latitude" => Bound::Range(-90.0, 90.0),
        _ => Bound::NonNegative,
    }
}

fn required<'a>(obj: &'a Map<String, Value>, field: &str) -> Result<&'a Value, ValidationError> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(ValidationError::new(field, "field required")),
        Some(v) => Ok(v),
    }
}

fn numeric(obj: &Map<String, Value>, field: &str) -> Result<f64, ValidationError> {
    let v = match required(obj, field)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite())
    .ok_or_else(|| ValidationError::new(field, "must be a finite number"))?;

    bound_of(field)
        .check(v)
        .map_err(|reason| ValidationError::new(field, reason))?;
    Ok(v)
}

fn category(obj: &Map<String, Value>) -> Result<OceanProximity, ValidationError> {
    let raw = required(obj, CATEGORY_FIELD)?
        .as_str()
        .ok_or_else(|| ValidationError::new(CATEGORY_FIELD, "must be a string"))?;
    OceanProximity::parse(raw)
        .ok_or_else(|| ValidationError::new(CATEGORY_FIELD, "not in allowed set"))
}

/// Validate a raw JSON body into a [`HouseRecord`].
pub fn validate(raw: &Value) -> Result<HouseRecord, ValidationError> {
    let obj = raw
        .as_object()
        .ok_or_else(|| ValidationError::new("body", "expected a JSON object"))?;

    let mut nums = [0.0_f64; NUMERIC_FIELDS.len()];
    for (slot, field) in nums.iter_mut().zip(NUMERIC_FIELDS) {
        *slot = numeric(obj, field)?;
    }
    let ocean_proximity = category(obj)?;

    let [longitude, latitude, housing_median_age, total_rooms, total_bedrooms, population, households, median_income, rooms_per_household, bedrooms_per_room, population_per_household] =
        nums;

    Ok(HouseRecord {
        longitude,
        latitude,
        housing_median_age,
        total_rooms,
        total_bedrooms,
        population,
        households,
        median_income,
        rooms_per_household,
        bedrooms_per_room,
        population_per_household,
        ocean_proximity,
    })
}

impl HouseRecord {
    /// Numeric columns in training-schema order.
    pub fn numeric_columns(&self) -> [(&'static str, f64); NUMERIC_FIELDS.len()] {
        [
            ("longitude", self.longitude),
            ("latitude", self.latitude),
            ("housing_median_age", self.housing_median_age),
            ("total_rooms", self.total_rooms),
            ("total_bedrooms", self.total_bedrooms),
            ("population", self.population),
            ("households", self.households),
            ("median_income", self.median_income),
            ("rooms_per_household", self.rooms_per_household),
            ("bedrooms_per_room", self.bedrooms_per_room),
            ("population_per_household", self.population_per_household),
        ]
    }
}
