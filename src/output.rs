use crate::error::NasaPowerError;
use crate::records::monthly_record::MonthlyRecord;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Assembles the accumulated records into the output table, in record order.
pub fn records_to_dataframe(records: &[MonthlyRecord]) -> Result<DataFrame, NasaPowerError> {
    df!(
        "province_name" => records.iter().map(|r| r.province_name.as_str()).collect::<Vec<_>>(),
        "district_name" => records.iter().map(|r| r.district_name.as_str()).collect::<Vec<_>>(),
        "lat" => records.iter().map(|r| r.lat).collect::<Vec<_>>(),
        "lon" => records.iter().map(|r| r.lon).collect::<Vec<_>>(),
        "year" => records.iter().map(|r| r.year).collect::<Vec<_>>(),
        "month" => records.iter().map(|r| r.month).collect::<Vec<_>>(),
        "t2m" => records.iter().map(|r| r.t2m).collect::<Vec<_>>(),
        "prectot" => records.iter().map(|r| r.prectot).collect::<Vec<_>>(),
    )
    .map_err(NasaPowerError::TableAssembly)
}

/// Writes the table as CSV, creating parent directories as needed and
/// overwriting any prior file at the path.
pub fn write_csv(df: &mut DataFrame, path: &Path) -> Result<(), NasaPowerError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| NasaPowerError::OutputDirCreation(parent.to_path_buf(), e))?;
        }
    }

    let file =
        File::create(path).map_err(|e| NasaPowerError::OutputWriteIo(path.to_path_buf(), e))?;
    CsvWriter::new(file)
        .include_header(true)
        .finish(df)
        .map_err(|e| NasaPowerError::OutputWritePolars(path.to_path_buf(), e))?;
    Ok(())
}
