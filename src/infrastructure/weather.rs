// src/infrastructure/weather.rs
use reqwest::Client;
use tracing::debug;

use crate::constants::WEATHER_FETCH_ERROR;
use crate::domain::{DomainError, WeatherReport};

/// Typed HTTP client for the weather endpoint. Every failure mode, from an
/// unknown city (HTTP 404) to a transport error, collapses into the same
/// widget-local message.
pub struct WeatherClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl WeatherClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client: Client::new(),
        }
    }

    pub async fn by_city(&self, city: &str) -> Result<WeatherReport, DomainError> {
        self.fetch(&[("q", city.trim().to_string())]).await
    }

    pub async fn by_coords(&self, lat: f64, lon: f64) -> Result<WeatherReport, DomainError> {
        self.fetch(&[("lat", lat.to_string()), ("lon", lon.to_string())])
            .await
    }

    async fn fetch(&self, params: &[(&str, String)]) -> Result<WeatherReport, DomainError> {
        let url = format!("{}/weather", self.base_url);
        debug!(url, ?params, "Fetching weather");
        let resp = self
            .client
            .get(&url)
            .query(params)
            .query(&[("appid", self.api_key.as_str()), ("units", "metric")])
            .send()
            .await
            .map_err(|e| {
                debug!(error = %e, "Weather request failed");
                fetch_failure()
            })?;

        if !resp.status().is_success() {
            debug!(status = %resp.status(), "Weather endpoint returned non-success");
            return Err(fetch_failure());
        }

        resp.json::<WeatherReport>().await.map_err(|e| {
            debug!(error = %e, "Weather response failed to decode");
            fetch_failure()
        })
    }
}

fn fetch_failure() -> DomainError {
    DomainError::FetchFailed(WEATHER_FETCH_ERROR.to_string())
}
