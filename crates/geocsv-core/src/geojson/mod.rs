//! Minimal GeoJSON-like structures and per-feature classification.
//!
//! Only the fields the extractor reads are modelled. Anything the input gets
//! wrong at the feature level is a [`FeatureAnomaly`], never a hard error.

mod shape;
mod value;

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;

pub use shape::CoordinateShape;
pub use value::ValueSource;

/// One entry of `features`. Every field is optional; presence is checked explicitly.
#[derive(Debug, Deserialize)]
pub struct RawFeature {
    #[serde(default)]
    pub geometry: Option<RawGeometry>,
    #[serde(default)]
    pub properties: Option<RawProperties>,
}

#[derive(Debug, Deserialize)]
pub struct RawGeometry {
    /// Left untyped: its shape decides how the feature is flattened.
    #[serde(default)]
    pub coordinates: Option<Value>,
}

/// `None` only when the key is absent; an explicit `null` is `Some(Value::Null)`.
#[derive(Debug, Deserialize)]
pub struct RawProperties {
    #[serde(default, deserialize_with = "present")]
    pub mmi: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub value: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Flattened output record: one value at one position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueCoordinate {
    pub value: f64,
    /// `[longitude, latitude]`
    pub coordinates: [f64; 2],
}

impl ValueCoordinate {
    pub fn new(value: f64, coordinates: [f64; 2]) -> Self {
        Self { value, coordinates }
    }

    pub fn longitude(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn latitude(&self) -> f64 {
        self.coordinates[1]
    }
}

/// Why a feature produced no records.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureAnomaly {
    /// Entry could not be read as a feature object.
    Malformed(String),
    MissingGeometry,
    MissingCoordinates,
    MissingProperties,
    /// Neither `mmi` nor `value` is present.
    MissingValue,
    /// `field` is present but not a number.
    NonNumericValue { field: &'static str },
    CoordinatesNotArray,
    /// Coordinates are an array but neither a pair nor a ring of pairs.
    UnexpectedShape,
}

impl fmt::Display for FeatureAnomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureAnomaly::Malformed(e) => write!(f, "malformed feature: {}", e),
            FeatureAnomaly::MissingGeometry => write!(f, "'geometry' missing in feature"),
            FeatureAnomaly::MissingCoordinates => write!(f, "'coordinates' missing in geometry"),
            FeatureAnomaly::MissingProperties => write!(f, "'properties' missing in feature"),
            FeatureAnomaly::MissingValue => write!(f, "no value found in properties"),
            FeatureAnomaly::NonNumericValue { field } => {
                write!(f, "properties.{} is not a number", field)
            }
            FeatureAnomaly::CoordinatesNotArray => write!(f, "'coordinates' is not an array"),
            FeatureAnomaly::UnexpectedShape => write!(f, "unexpected coordinates format"),
        }
    }
}

/// Reads a JSON number as a finite `f64`.
pub(crate) fn as_number(v: &Value) -> Option<f64> {
    v.as_f64().filter(|n| n.is_finite())
}
