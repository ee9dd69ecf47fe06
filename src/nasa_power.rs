//! Batch collection of NASA POWER monthly climate data for a district list.
//!
//! The run is strictly sequential: district N+1 is not started until district
//! N's fetch, including all of its retries and sleeps, has completed. Output
//! is written once at the very end; there is no checkpointing.

use crate::config::Settings;
use crate::districts::source::District;
use crate::error::NasaPowerError;
use crate::output::{records_to_dataframe, write_csv};
use crate::power_api::client::PowerClient;
use crate::records::flatten::flatten_monthly_point;
use crate::records::monthly_record::MonthlyRecord;
use log::{info, warn};
use std::path::PathBuf;
use tokio::time::sleep;

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// The combined table was written to `path` with `rows` records.
    Written { path: PathBuf, rows: usize },
    /// Every district came up empty; nothing was written.
    NoData,
}

/// The batch orchestrator: fetches every district in source order and
/// persists the combined monthly table.
pub struct NasaPower {
    client: PowerClient,
    settings: Settings,
}

impl NasaPower {
    pub fn new(settings: Settings) -> Result<Self, NasaPowerError> {
        let client = PowerClient::from_settings(&settings)?;
        Ok(NasaPower { client, settings })
    }

    /// Runs the fetch loop and returns the accumulated records.
    ///
    /// A district whose fetch budget is exhausted, or whose payload carries an
    /// undecodable month key, contributes zero records and the loop moves on.
    /// Each district's retry allowance is independent.
    pub async fn collect(&self, districts: &[District]) -> Vec<MonthlyRecord> {
        let mut rows = Vec::new();

        for (index, district) in districts.iter().enumerate() {
            info!(
                "[{}/{}] {} - {}",
                index + 1,
                districts.len(),
                district.province_name,
                district.district_name
            );

            // Fixed courtesy delay so back-to-back requests don't trip the
            // service's rate limiting.
            sleep(self.settings.pacing_delay()).await;

            let Some(payload) = self
                .client
                .fetch_monthly()
                .latitude(district.lat)
                .longitude(district.lon)
                .start_year(self.settings.start_year)
                .end_year(self.settings.end_year)
                .call()
                .await
            else {
                warn!(
                    "No data for {} - {}, skipping district",
                    district.province_name, district.district_name
                );
                continue;
            };

            match flatten_monthly_point(&payload, district) {
                Ok(records) => rows.extend(records),
                Err(e) => warn!(
                    "Discarding payload for {} - {}: {e}",
                    district.province_name, district.district_name
                ),
            }
        }

        rows
    }

    /// Full run: collect every district, then persist the combined table.
    ///
    /// An empty accumulation is terminal but non-erroring: no file is written
    /// and [`RunOutcome::NoData`] is returned.
    pub async fn run(&self, districts: &[District]) -> Result<RunOutcome, NasaPowerError> {
        let rows = self.collect(districts).await;
        if rows.is_empty() {
            return Ok(RunOutcome::NoData);
        }

        let mut df = records_to_dataframe(&rows)?;
        write_csv(&mut df, &self.settings.output_path)?;
        info!(
            "Wrote {} rows to {}",
            rows.len(),
            self.settings.output_path.display()
        );

        Ok(RunOutcome::Written {
            path: self.settings.output_path.clone(),
            rows: rows.len(),
        })
    }
}
