mod config;
mod districts;
mod error;
mod nasa_power;
mod output;
mod power_api;
mod records;

pub use error::NasaPowerError;
pub use nasa_power::*;

pub use config::{get_configuration, Settings, DEFAULT_ENDPOINT};

pub use districts::error::DistrictSourceError;
pub use districts::source::{load_districts, District, REQUIRED_COLUMNS};

pub use power_api::client::{PowerClient, COMMUNITY, REQUESTED_PARAMETERS};
pub use power_api::error::PowerApiError;
pub use power_api::response::{MonthlyPointResponse, ParameterSeries, PointProperties};

pub use records::flatten::{flatten_monthly_point, PRECIPITATION_PARAMETER, TEMPERATURE_PARAMETER};
pub use records::monthly_record::{parse_monthly_key, MonthlyKeyError, MonthlyRecord};

pub use output::{records_to_dataframe, write_csv};
