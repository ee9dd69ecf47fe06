use crate::config::Settings;
use crate::power_api::error::PowerApiError;
use crate::power_api::response::MonthlyPointResponse;
use bon::bon;
use log::warn;
use reqwest::Client;
use std::time::Duration;
use tokio::time::sleep;

/// Climate variables requested for every point: monthly mean temperature at
/// 2 m and total precipitation.
pub const REQUESTED_PARAMETERS: &str = "T2M,PRECTOT";
/// Community profile sent with every request.
pub const COMMUNITY: &str = "AG";
const RESPONSE_FORMAT: &str = "JSON";

/// HTTP client for the NASA POWER monthly point endpoint.
///
/// A fetch makes up to `fetch_attempts` tries with a fixed `retry_delay` sleep
/// between them, then gives the point up. Failures never escape to the caller;
/// an exhausted budget comes back as `None` and is reported through `log`.
pub struct PowerClient {
    http: Client,
    endpoint: String,
    fetch_attempts: u32,
    retry_delay: Duration,
}

#[bon]
impl PowerClient {
    pub fn new(
        endpoint: String,
        request_timeout: Duration,
        fetch_attempts: u32,
        retry_delay: Duration,
    ) -> Result<Self, PowerApiError> {
        let http = Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(PowerApiError::ClientBuild)?;
        Ok(PowerClient {
            http,
            endpoint,
            fetch_attempts,
            retry_delay,
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, PowerApiError> {
        PowerClient::new(
            settings.endpoint.clone(),
            settings.request_timeout(),
            settings.fetch_attempts,
            settings.retry_delay(),
        )
    }

    /// Fetches the monthly T2M/PRECTOT series for one coordinate over the
    /// given year window (both years inclusive).
    ///
    /// Any network error, non-2xx status, or undecodable 2xx body consumes one
    /// attempt. Returns `None` once the attempt budget is spent.
    #[builder]
    pub async fn fetch_monthly(
        &self,
        latitude: f64,
        longitude: f64,
        start_year: i32,
        end_year: i32,
    ) -> Option<MonthlyPointResponse> {
        for attempt in 1..=self.fetch_attempts {
            match self
                .request_monthly(latitude, longitude, start_year, end_year)
                .await
            {
                Ok(payload) => return Some(payload),
                Err(e) => {
                    warn!(
                        "NASA POWER request failed (lat={latitude}, lon={longitude}), attempt {attempt}/{}: {e}",
                        self.fetch_attempts
                    );
                    if attempt < self.fetch_attempts {
                        sleep(self.retry_delay).await;
                    }
                }
            }
        }

        warn!("No NASA POWER data obtained (lat={latitude}, lon={longitude}), point will be skipped");
        None
    }

    async fn request_monthly(
        &self,
        latitude: f64,
        longitude: f64,
        start_year: i32,
        end_year: i32,
    ) -> Result<MonthlyPointResponse, PowerApiError> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("parameters", REQUESTED_PARAMETERS.to_string()),
                ("community", COMMUNITY.to_string()),
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("start", start_year.to_string()),
                ("end", end_year.to_string()),
                ("format", RESPONSE_FORMAT.to_string()),
            ])
            .send()
            .await
            .map_err(|e| PowerApiError::NetworkRequest(self.endpoint.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                return Err(if let Some(status) = e.status() {
                    PowerApiError::HttpStatus {
                        url: self.endpoint.clone(),
                        status,
                        source: e,
                    }
                } else {
                    PowerApiError::NetworkRequest(self.endpoint.clone(), e)
                });
            }
        };

        response
            .json::<MonthlyPointResponse>()
            .await
            .map_err(|e| PowerApiError::JsonDecode(self.endpoint.clone(), e))
    }
}
