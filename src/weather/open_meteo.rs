//! Open-Meteo forecast client

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use super::{ForecastProvider, forecast_query};
use crate::GatewayError;
use crate::config::GatewayConfig;

const USER_AGENT: &str = concat!("crclimate/", env!("CARGO_PKG_VERSION"));

/// Calls `{base_url}/forecast` with the fixed variable set. One client is
/// shared by all requests.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: Client,
    base_url: String,
}

impl OpenMeteoClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .with_context(|| "Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn from_config(config: &GatewayConfig) -> Result<Self> {
        Self::new(config.forecast_base_url.clone(), config.forecast_timeout())
    }

    fn forecast_url(&self) -> String {
        format!("{}/forecast", self.base_url)
    }
}

#[async_trait]
impl ForecastProvider for OpenMeteoClient {
    #[instrument(skip(self))]
    async fn forecast(&self, lat: f64, lon: f64) -> Result<Value> {
        let url = self.forecast_url();
        debug!("Open-Meteo request URL: {}", url);
        let start_time = Instant::now();

        let response = self
            .client
            .get(&url)
            .query(&forecast_query(lat, lon))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::upstream(format!(
                "{status} for url: {}",
                response.url()
            ))
            .into());
        }

        let data: Value = response
            .json()
            .await
            .with_context(|| "Failed to parse Open-Meteo forecast response")?;

        let elapsed = start_time.elapsed();
        info!("Retrieved forecast in {:.3}s", elapsed.as_secs_f64());
        if elapsed.as_secs() > 5 {
            warn!("Slow forecast response: {:.3}s", elapsed.as_secs_f64());
        }

        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> OpenMeteoClient {
        OpenMeteoClient::new(format!("{}/v1", server.uri()), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_forecast_sends_fixed_parameters() {
        let mock_server = MockServer::start().await;
        let body = json!({"latitude": 9.93, "longitude": -84.09, "current": {"temperature_2m": 22.4}});

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .and(query_param("latitude", "9.9281"))
            .and(query_param("longitude", "-84.0907"))
            .and(query_param("timezone", "auto"))
            .and(query_param(
                "current",
                "temperature_2m,apparent_temperature,relative_humidity_2m,precipitation,wind_speed_10m,wind_direction_10m,weather_code",
            ))
            .and(query_param(
                "hourly",
                "temperature_2m,precipitation_probability,relative_humidity_2m,cloud_cover,wind_speed_10m,weather_code",
            ))
            .and(query_param(
                "daily",
                "weather_code,temperature_2m_max,temperature_2m_min,precipitation_sum,precipitation_probability_max,sunrise,sunset,wind_speed_10m_max",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let data = client_for(&mock_server)
            .forecast(9.9281, -84.0907)
            .await
            .unwrap();
        assert_eq!(data, body);
    }

    #[tokio::test]
    async fn test_forecast_error_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": true,
                "reason": "Latitude must be in range of -90 to 90°."
            })))
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server)
            .forecast(120.0, 0.0)
            .await
            .unwrap_err()
            .to_string();
        assert!(err.contains("400"), "Error should mention 400 status: {}", err);
    }

    #[tokio::test]
    async fn test_forecast_malformed_json() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server).forecast(9.0, -84.0).await.unwrap_err();
        assert!(err.to_string().contains("Failed to parse Open-Meteo"));
    }
}
