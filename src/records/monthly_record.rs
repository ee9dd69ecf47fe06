use thiserror::Error;

/// One flattened district-month observation.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyRecord {
    pub province_name: String,
    pub district_name: String,
    pub lat: f64,
    pub lon: f64,
    pub year: i32,
    pub month: u32,
    pub t2m: Option<f64>,
    pub prectot: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid monthly key '{key}', expected a 6-digit YYYYMM value")]
pub struct MonthlyKeyError {
    pub key: String,
}

/// Splits a 6-digit "YYYYMM" key into (year, month).
///
/// The month is not range-checked beyond digit parsing; the source API also
/// emits aggregate keys (month 13 for the annual mean) and those pass through
/// unchanged.
pub fn parse_monthly_key(key: &str) -> Result<(i32, u32), MonthlyKeyError> {
    if key.len() != 6 || !key.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MonthlyKeyError {
            key: key.to_string(),
        });
    }
    let year = key[..4].parse().map_err(|_| MonthlyKeyError {
        key: key.to_string(),
    })?;
    let month = key[4..].parse().map_err(|_| MonthlyKeyError {
        key: key.to_string(),
    })?;
    Ok((year, month))
}
