use config::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Monthly point endpoint of the NASA POWER API.
pub const DEFAULT_ENDPOINT: &str = "https://power.larc.nasa.gov/api/temporal/monthly/point";

/// Immutable run configuration for the collector.
///
/// All knobs live here so the orchestrator and fetcher can be constructed
/// without touching process-wide state. [`Settings::default`] carries the
/// reference deployment values; [`get_configuration`] layers `POWER_`-prefixed
/// environment variables on top (e.g. `POWER_DISTRICTS_PATH`,
/// `POWER_START_YEAR`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// CSV file with the district list (`province_name, district_name, lat, lon`).
    pub districts_path: PathBuf,
    /// Destination of the combined monthly dataset. Overwritten on each run.
    pub output_path: PathBuf,
    /// Monthly point endpoint to query.
    pub endpoint: String,
    /// First year of the requested window (inclusive).
    pub start_year: i32,
    /// Last year of the requested window (inclusive).
    pub end_year: i32,
    /// Per-attempt HTTP timeout in seconds.
    pub request_timeout_secs: u64,
    /// Total attempts per point before it is given up.
    pub fetch_attempts: u32,
    /// Fixed sleep between attempts, in seconds. No backoff growth.
    pub retry_delay_secs: u64,
    /// Fixed courtesy sleep before each district's request, in seconds.
    pub pacing_delay_secs: u64,
}

impl Settings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_secs(self.retry_delay_secs)
    }

    pub fn pacing_delay(&self) -> Duration {
        Duration::from_secs(self.pacing_delay_secs)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            districts_path: PathBuf::from("data/interim/districts_base.csv"),
            output_path: PathBuf::from("data/raw/climate_nasa_power/districts_monthly_2014_2023.csv"),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            start_year: 2014,
            end_year: 2023,
            request_timeout_secs: 60,
            fetch_attempts: 3,
            retry_delay_secs: 5,
            pacing_delay_secs: 1,
        }
    }
}

/// Builds [`Settings`] from the defaults plus `POWER_`-prefixed environment
/// variables.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let defaults = Config::try_from(&Settings::default())?;

    Config::builder()
        .add_source(defaults)
        .add_source(config::Environment::with_prefix("POWER").try_parsing(true))
        .build()?
        .try_deserialize()
}
