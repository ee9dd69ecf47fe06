//! Deserialized shape of a NASA POWER monthly point payload.
//!
//! Only the `properties.parameter` path is of interest; everything else in the
//! response (geometry, header, metadata) is ignored. Missing levels act as
//! empty maps so a structurally thin payload flattens to zero rows instead of
//! failing.

use serde::Deserialize;
use std::collections::BTreeMap;

/// One parameter's time series, keyed by 6-digit "YYYYMM" strings in ascending
/// order. Values may be null in the source payload.
pub type ParameterSeries = BTreeMap<String, Option<f64>>;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MonthlyPointResponse {
    #[serde(default)]
    pub properties: PointProperties,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PointProperties {
    #[serde(default)]
    pub parameter: BTreeMap<String, ParameterSeries>,
}

impl MonthlyPointResponse {
    /// Returns the named parameter series, if the payload carries it.
    pub fn parameter(&self, name: &str) -> Option<&ParameterSeries> {
        self.properties.parameter.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_nested_parameter_series() {
        let payload: MonthlyPointResponse = serde_json::from_value(json!({
            "type": "Feature",
            "geometry": {"type": "Point", "coordinates": [41.42, 38.33, 1100.0]},
            "properties": {
                "parameter": {
                    "T2M": {"201401": 3.1, "201402": 4.7},
                    "PRECTOT": {"201401": 88.2, "201402": null}
                }
            }
        }))
        .expect("payload should deserialize");

        let t2m = payload.parameter("T2M").expect("T2M series");
        assert_eq!(t2m.get("201401").copied().flatten(), Some(3.1));

        let prectot = payload.parameter("PRECTOT").expect("PRECTOT series");
        assert_eq!(prectot.get("201402").copied().flatten(), None);
    }

    #[test]
    fn missing_properties_acts_as_empty() {
        let payload: MonthlyPointResponse =
            serde_json::from_value(json!({"type": "Feature"})).expect("payload should deserialize");
        assert!(payload.parameter("T2M").is_none());
    }

    #[test]
    fn series_keys_iterate_in_ascending_order() {
        let payload: MonthlyPointResponse = serde_json::from_value(json!({
            "properties": {
                "parameter": {
                    "T2M": {"201412": 1.0, "201401": 2.0, "201406": 3.0}
                }
            }
        }))
        .expect("payload should deserialize");

        let keys: Vec<&str> = payload
            .parameter("T2M")
            .expect("T2M series")
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["201401", "201406", "201412"]);
    }
}
