use crate::districts::error::DistrictSourceError;
use polars::prelude::*;
use std::path::Path;

/// Columns the district file must carry. Checked before any network activity.
pub const REQUIRED_COLUMNS: [&str; 4] = ["province_name", "district_name", "lat", "lon"];

/// One administrative district with its representative coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct District {
    pub province_name: String,
    pub district_name: String,
    pub lat: f64,
    pub lon: f64,
}

/// Loads the ordered district list from a headered CSV file.
///
/// Rows come back in file order. Duplicate (province, district) pairs are kept
/// as-is; deduplication is left to downstream consumers.
pub fn load_districts(path: &Path) -> Result<Vec<District>, DistrictSourceError> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| DistrictSourceError::CsvRead(path.to_path_buf(), e))?
        .finish()
        .map_err(|e| DistrictSourceError::CsvRead(path.to_path_buf(), e))?;

    let names = df.get_column_names();
    for column in REQUIRED_COLUMNS {
        if !names.iter().any(|name| name.as_str() == column) {
            return Err(DistrictSourceError::MissingColumn {
                path: path.to_path_buf(),
                column,
            });
        }
    }

    let provinces = string_column(&df, "province_name")?;
    let district_names = string_column(&df, "district_name")?;
    let lats = float_column(&df, "lat")?;
    let lons = float_column(&df, "lon")?;

    let mut districts = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        districts.push(District {
            province_name: required_value(provinces.get(row), "province_name", row)?.to_string(),
            district_name: required_value(district_names.get(row), "district_name", row)?
                .to_string(),
            lat: required_value(lats.get(row), "lat", row)?,
            lon: required_value(lons.get(row), "lon", row)?,
        });
    }

    Ok(districts)
}

fn string_column(df: &DataFrame, column: &'static str) -> Result<StringChunked, DistrictSourceError> {
    df.column(column)
        .and_then(|c| c.str().cloned())
        .map_err(|source| DistrictSourceError::ColumnRead { column, source })
}

fn float_column(df: &DataFrame, column: &'static str) -> Result<Float64Chunked, DistrictSourceError> {
    df.column(column)
        .and_then(|c| c.cast(&DataType::Float64))
        .and_then(|c| c.f64().cloned())
        .map_err(|source| DistrictSourceError::ColumnRead { column, source })
}

fn required_value<T>(
    value: Option<T>,
    column: &'static str,
    row: usize,
) -> Result<T, DistrictSourceError> {
    value.ok_or(DistrictSourceError::MissingValue { column, row })
}
