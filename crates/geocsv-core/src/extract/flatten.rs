//! Feature collection → `ValueCoordinate` records.

use serde::Deserialize;
use serde_json::Value;

use super::ExtractError;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::geojson::{CoordinateShape, FeatureAnomaly, RawFeature, ValueCoordinate, ValueSource};

/// Parses `body` as JSON and flattens it. See [`flatten_document`].
pub fn extract_from_str(
    body: &str,
    diag: &dyn DiagnosticSink,
) -> Result<Vec<ValueCoordinate>, ExtractError> {
    let doc: Value = serde_json::from_str(body)?;
    flatten_document(&doc, diag)
}

/// Flattens every usable feature of `doc`, in document order.
///
/// A missing `features` field yields an empty result and a warning. Bad
/// features are reported and skipped; a `null` document or a non-array
/// `features` is an error.
pub fn flatten_document(
    doc: &Value,
    diag: &dyn DiagnosticSink,
) -> Result<Vec<ValueCoordinate>, ExtractError> {
    if doc.is_null() {
        return Err(ExtractError::NullDocument);
    }
    let features = match doc.get("features") {
        None | Some(Value::Null) => {
            diag.warn(Diagnostic::MissingFeatures);
            return Ok(Vec::new());
        }
        Some(Value::Array(features)) => features,
        Some(_) => return Err(ExtractError::FeaturesNotArray),
    };

    let mut records = Vec::new();
    for (index, feature) in features.iter().enumerate() {
        match flatten_feature(feature) {
            Ok(mut recs) => records.append(&mut recs),
            Err(anomalies) => {
                for anomaly in anomalies {
                    diag.warn(Diagnostic::Feature { index, anomaly });
                }
            }
        }
    }

    tracing::debug!(
        features = features.len(),
        records = records.len(),
        "flattened feature collection"
    );
    Ok(records)
}

/// Records for one feature, or every reason it yields none.
///
/// Value and coordinate problems are reported independently, so a feature can
/// carry both a value anomaly and a shape anomaly.
pub fn flatten_feature(feature: &Value) -> Result<Vec<ValueCoordinate>, Vec<FeatureAnomaly>> {
    let raw = RawFeature::deserialize(feature)
        .map_err(|e| vec![FeatureAnomaly::Malformed(e.to_string())])?;

    let geometry = raw
        .geometry
        .ok_or_else(|| vec![FeatureAnomaly::MissingGeometry])?;
    let coordinates = geometry
        .coordinates
        .ok_or_else(|| vec![FeatureAnomaly::MissingCoordinates])?;
    let properties = raw
        .properties
        .ok_or_else(|| vec![FeatureAnomaly::MissingProperties])?;

    match (
        ValueSource::select(&properties),
        CoordinateShape::classify(&coordinates),
    ) {
        (Ok(value), Ok(shape)) => {
            let value = value.get();
            Ok(shape
                .into_positions()
                .into_iter()
                .map(|pos| ValueCoordinate::new(value, pos))
                .collect())
        }
        (Err(value_anomaly), Ok(_)) => Err(vec![value_anomaly]),
        (Ok(_), Err(shape_anomaly)) => Err(vec![shape_anomaly]),
        (Err(value_anomaly), Err(shape_anomaly)) => Err(vec![value_anomaly, shape_anomaly]),
    }
}
