//! Coordinate shape detection: a single position or the first ring of a
//! nested geometry.

use serde_json::Value;

use super::{as_number, FeatureAnomaly};

#[derive(Debug, Clone, PartialEq)]
pub enum CoordinateShape {
    /// `[lon, lat]`
    Flat([f64; 2]),
    /// Positions of `coordinates[0]`, in order.
    Ring(Vec<[f64; 2]>),
}

impl CoordinateShape {
    /// Decides the shape once from the raw `coordinates` value.
    ///
    /// A two-number array is `Flat`. An array whose first element is an array
    /// of positions is `Ring`; further rings/lines are not read. Ring positions
    /// may carry extra ordinates (altitude), which are dropped.
    pub fn classify(coordinates: &Value) -> Result<Self, FeatureAnomaly> {
        let items = coordinates
            .as_array()
            .ok_or(FeatureAnomaly::CoordinatesNotArray)?;

        if let Some(pair) = position(items) {
            return Ok(CoordinateShape::Flat(pair));
        }

        match items.first().and_then(Value::as_array) {
            Some(ring) => ring
                .iter()
                .map(|p| p.as_array().and_then(|p| ring_position(p)))
                .collect::<Option<Vec<_>>>()
                .map(CoordinateShape::Ring)
                .ok_or(FeatureAnomaly::UnexpectedShape),
            None => Err(FeatureAnomaly::UnexpectedShape),
        }
    }

    pub fn into_positions(self) -> Vec<[f64; 2]> {
        match self {
            CoordinateShape::Flat(pair) => vec![pair],
            CoordinateShape::Ring(ring) => ring,
        }
    }
}

fn position(items: &[Value]) -> Option<[f64; 2]> {
    match items {
        [lon, lat] => Some([as_number(lon)?, as_number(lat)?]),
        _ => None,
    }
}

fn ring_position(items: &[Value]) -> Option<[f64; 2]> {
    match items {
        [lon, lat, ..] => Some([as_number(lon)?, as_number(lat)?]),
        _ => None,
    }
}
