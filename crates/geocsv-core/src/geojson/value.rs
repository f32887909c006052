//! Value selection from feature properties: `mmi` wins over `value` whenever
//! the key is present, even if it holds `null`.

use serde_json::Value;

use super::{as_number, FeatureAnomaly, RawProperties};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueSource {
    Mmi(f64),
    Value(f64),
}

impl ValueSource {
    pub fn select(properties: &RawProperties) -> Result<Self, FeatureAnomaly> {
        match (&properties.mmi, &properties.value) {
            (Some(mmi), _) => numeric(mmi, "mmi").map(ValueSource::Mmi),
            (None, Some(value)) => numeric(value, "value").map(ValueSource::Value),
            (None, None) => Err(FeatureAnomaly::MissingValue),
        }
    }

    pub fn get(self) -> f64 {
        match self {
            ValueSource::Mmi(v) | ValueSource::Value(v) => v,
        }
    }
}

fn numeric(v: &Value, field: &'static str) -> Result<f64, FeatureAnomaly> {
    as_number(v).ok_or(FeatureAnomaly::NonNumericValue { field })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn props(v: serde_json::Value) -> RawProperties {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn mmi_takes_precedence() {
        let p = props(json!({"mmi": 5.5, "value": 2}));
        assert_eq!(ValueSource::select(&p), Ok(ValueSource::Mmi(5.5)));
    }

    #[test]
    fn falls_back_to_value() {
        let p = props(json!({"value": 2}));
        let v = ValueSource::select(&p).unwrap();
        assert_eq!(v, ValueSource::Value(2.0));
        assert_eq!(v.get(), 2.0);
    }

    #[test]
    fn zero_is_a_value() {
        let p = props(json!({"mmi": 0}));
        assert_eq!(ValueSource::select(&p), Ok(ValueSource::Mmi(0.0)));
    }

    #[test]
    fn missing_both() {
        let p = props(json!({"units": "mmi"}));
        assert_eq!(ValueSource::select(&p), Err(FeatureAnomaly::MissingValue));
    }

    #[test]
    fn null_mmi_does_not_fall_back() {
        let p = props(json!({"mmi": null, "value": 4}));
        assert_eq!(
            ValueSource::select(&p),
            Err(FeatureAnomaly::NonNumericValue { field: "mmi" })
        );
    }

    #[test]
    fn non_numeric_mmi_does_not_fall_back() {
        let p = props(json!({"mmi": "V", "value": 5}));
        assert_eq!(
            ValueSource::select(&p),
            Err(FeatureAnomaly::NonNumericValue { field: "mmi" })
        );
    }
}
