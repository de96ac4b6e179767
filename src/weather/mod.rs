//! Forecast provider seam and the fixed upstream request parameters

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

pub mod open_meteo;

pub use open_meteo::OpenMeteoClient;

pub const CURRENT_VARIABLES: [&str; 7] = [
    "temperature_2m",
    "apparent_temperature",
    "relative_humidity_2m",
    "precipitation",
    "wind_speed_10m",
    "wind_direction_10m",
    "weather_code",
];

pub const HOURLY_VARIABLES: [&str; 6] = [
    "temperature_2m",
    "precipitation_probability",
    "relative_humidity_2m",
    "cloud_cover",
    "wind_speed_10m",
    "weather_code",
];

pub const DAILY_VARIABLES: [&str; 8] = [
    "weather_code",
    "temperature_2m_max",
    "temperature_2m_min",
    "precipitation_sum",
    "precipitation_probability_max",
    "sunrise",
    "sunset",
    "wind_speed_10m_max",
];

/// Query parameters sent with every forecast request
#[must_use]
pub fn forecast_query(lat: f64, lon: f64) -> Vec<(&'static str, String)> {
    vec![
        ("latitude", lat.to_string()),
        ("longitude", lon.to_string()),
        ("current", CURRENT_VARIABLES.join(",")),
        ("hourly", HOURLY_VARIABLES.join(",")),
        ("daily", DAILY_VARIABLES.join(",")),
        ("timezone", "auto".to_string()),
    ]
}

/// Source of raw forecast payloads
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    /// Fetch the forecast for a coordinate pair as an opaque JSON document
    async fn forecast(&self, lat: f64, lon: f64) -> Result<Value>;
}
