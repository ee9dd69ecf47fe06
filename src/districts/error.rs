use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DistrictSourceError {
    #[error("Failed to read district file '{0}'")]
    CsvRead(PathBuf, #[source] PolarsError),

    #[error("District file '{path}' is missing required column '{column}'")]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("Failed to read column '{column}' from the district file")]
    ColumnRead {
        column: &'static str,
        #[source]
        source: PolarsError,
    },

    #[error("Empty value in column '{column}' at row {row} of the district file")]
    MissingValue { column: &'static str, row: usize },
}
