use crate::districts::error::DistrictSourceError;
use crate::power_api::error::PowerApiError;
use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NasaPowerError {
    #[error(transparent)]
    DistrictSource(#[from] DistrictSourceError),

    #[error(transparent)]
    PowerApi(#[from] PowerApiError),

    #[error("Failed to load configuration")]
    Configuration(#[from] config::ConfigError),

    #[error("Failed to assemble the output table")]
    TableAssembly(#[source] PolarsError),

    #[error("Failed to create output directory '{0}'")]
    OutputDirCreation(PathBuf, #[source] std::io::Error),

    #[error("I/O error writing output file '{0}'")]
    OutputWriteIo(PathBuf, #[source] std::io::Error),

    #[error("Encoding error writing output file '{0}'")]
    OutputWritePolars(PathBuf, #[source] PolarsError),
}
