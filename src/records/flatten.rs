use crate::districts::source::District;
use crate::power_api::response::MonthlyPointResponse;
use crate::records::monthly_record::{parse_monthly_key, MonthlyKeyError, MonthlyRecord};

/// Name of the temperature series in the payload.
pub const TEMPERATURE_PARAMETER: &str = "T2M";
/// Name of the precipitation series in the payload.
pub const PRECIPITATION_PARAMETER: &str = "PRECTOT";

/// Flattens one point payload into per-month records for its district.
///
/// The temperature series drives the iteration; precipitation is joined by key
/// and left empty where the two series disagree, so a month present only in
/// the precipitation series is dropped. A missing series behaves as an empty
/// one. Pure transform; record order follows the temperature key order.
pub fn flatten_monthly_point(
    payload: &MonthlyPointResponse,
    district: &District,
) -> Result<Vec<MonthlyRecord>, MonthlyKeyError> {
    let Some(temperature) = payload.parameter(TEMPERATURE_PARAMETER) else {
        return Ok(Vec::new());
    };
    let precipitation = payload.parameter(PRECIPITATION_PARAMETER);

    let mut records = Vec::with_capacity(temperature.len());
    for (key, t2m) in temperature {
        let (year, month) = parse_monthly_key(key)?;
        let prectot = precipitation
            .and_then(|series| series.get(key))
            .copied()
            .flatten();
        records.push(MonthlyRecord {
            province_name: district.province_name.clone(),
            district_name: district.district_name.clone(),
            lat: district.lat,
            lon: district.lon,
            year,
            month,
            t2m: *t2m,
            prectot,
        });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sason() -> District {
        District {
            province_name: "Batman".to_string(),
            district_name: "Sason".to_string(),
            lat: 38.33,
            lon: 41.42,
        }
    }

    fn payload(value: serde_json::Value) -> MonthlyPointResponse {
        serde_json::from_value(value).expect("payload should deserialize")
    }

    #[test]
    fn joins_precipitation_by_key_and_leaves_gaps_empty() {
        let payload = payload(json!({
            "properties": {
                "parameter": {
                    "T2M": {"201401": 10.5, "201403": 12.0},
                    "PRECTOT": {"201401": 5.0}
                }
            }
        }));

        let records = flatten_monthly_point(&payload, &sason()).expect("flatten should succeed");

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].year, 2014);
        assert_eq!(records[0].month, 1);
        assert_eq!(records[0].t2m, Some(10.5));
        assert_eq!(records[0].prectot, Some(5.0));
        assert_eq!(records[1].year, 2014);
        assert_eq!(records[1].month, 3);
        assert_eq!(records[1].t2m, Some(12.0));
        assert_eq!(records[1].prectot, None);
    }

    #[test]
    fn drops_months_present_only_in_precipitation() {
        let payload = payload(json!({
            "properties": {
                "parameter": {
                    "T2M": {"201402": 4.0},
                    "PRECTOT": {"201401": 90.0, "201402": 61.5}
                }
            }
        }));

        let records = flatten_monthly_point(&payload, &sason()).expect("flatten should succeed");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].month, 2);
        assert_eq!(records[0].prectot, Some(61.5));
    }

    #[test]
    fn missing_temperature_series_yields_no_records() {
        let payload = payload(json!({
            "properties": {
                "parameter": {
                    "PRECTOT": {"201401": 90.0}
                }
            }
        }));

        let records = flatten_monthly_point(&payload, &sason()).expect("flatten should succeed");
        assert!(records.is_empty());
    }

    #[test]
    fn missing_precipitation_series_yields_empty_values() {
        let payload = payload(json!({
            "properties": {
                "parameter": {
                    "T2M": {"201401": 10.5}
                }
            }
        }));

        let records = flatten_monthly_point(&payload, &sason()).expect("flatten should succeed");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].t2m, Some(10.5));
        assert_eq!(records[0].prectot, None);
    }

    #[test]
    fn records_carry_the_district_identity() {
        let payload = payload(json!({
            "properties": {
                "parameter": {
                    "T2M": {"202306": 21.9}
                }
            }
        }));

        let records = flatten_monthly_point(&payload, &sason()).expect("flatten should succeed");
        assert_eq!(records[0].province_name, "Batman");
        assert_eq!(records[0].district_name, "Sason");
        assert_eq!(records[0].lat, 38.33);
        assert_eq!(records[0].lon, 41.42);
    }

    #[test]
    fn records_follow_ascending_key_order() {
        let payload = payload(json!({
            "properties": {
                "parameter": {
                    "T2M": {"201412": 1.0, "201401": 2.0, "201406": 3.0}
                }
            }
        }));

        let records = flatten_monthly_point(&payload, &sason()).expect("flatten should succeed");
        let months: Vec<u32> = records.iter().map(|r| r.month).collect();
        assert_eq!(months, [1, 6, 12]);
    }

    #[test]
    fn malformed_key_is_an_error() {
        let payload = payload(json!({
            "properties": {
                "parameter": {
                    "T2M": {"2014": 1.0}
                }
            }
        }));

        let err = flatten_monthly_point(&payload, &sason()).expect_err("bad key must fail");
        assert_eq!(err.key, "2014");
    }

    #[test]
    fn null_measurements_flatten_to_empty_values() {
        let payload = payload(json!({
            "properties": {
                "parameter": {
                    "T2M": {"201401": null},
                    "PRECTOT": {"201401": null}
                }
            }
        }));

        let records = flatten_monthly_point(&payload, &sason()).expect("flatten should succeed");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].t2m, None);
        assert_eq!(records[0].prectot, None);
    }
}
