use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    response::Json,
    routing::get,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::{
    diagnostics::DatabaseDescriptor,
    models::{LOCATIONS, Location, WeatherEnvelope, find_by_city},
    weather::ForecastProvider,
};

pub const HELLO_MESSAGE: &str = "Pura vida! Backend listo.";

/// Shared, read-only request state
#[derive(Clone)]
pub struct AppState {
    pub forecast: Arc<dyn ForecastProvider>,
    pub database: Option<DatabaseDescriptor>,
}

impl AppState {
    pub fn new(forecast: Arc<dyn ForecastProvider>, database: Option<DatabaseDescriptor>) -> Self {
        Self { forecast, database }
    }
}

#[derive(Serialize)]
pub struct Message {
    pub message: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct CoordinatesQuery {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Deserialize)]
pub struct CityQuery {
    pub city: String,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/locations", get(get_locations))
        .route("/weather", get(get_weather))
        .route("/weather/by-city", get(get_weather_by_city))
        .route("/hello", get(hello))
}

async fn get_locations() -> Json<&'static [Location]> {
    Json(LOCATIONS.as_slice())
}

#[instrument(skip(state))]
async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<CoordinatesQuery>,
) -> Json<WeatherEnvelope> {
    let result = state.forecast.forecast(query.lat, query.lon).await;
    if let Err(err) = &result {
        warn!("Forecast for {}, {} failed: {:#}", query.lat, query.lon, err);
    }
    Json(WeatherEnvelope::from_upstream(result))
}

#[instrument(skip(state))]
async fn get_weather_by_city(
    State(state): State<AppState>,
    Query(query): Query<CityQuery>,
) -> Json<WeatherEnvelope> {
    let Some(location) = find_by_city(&query.city) else {
        debug!("No location matches city {:?}", query.city);
        return Json(WeatherEnvelope::city_not_found());
    };

    info!(
        "Resolved {:?} to {} ({})",
        query.city,
        location.name,
        location.format_coordinates()
    );

    match state.forecast.forecast(location.lat, location.lon).await {
        Ok(data) => Json(WeatherEnvelope::located(*location, data)),
        Err(err) => {
            warn!("Forecast for {} failed: {:#}", location.slug, err);
            Json(WeatherEnvelope::from_upstream(Err(err)))
        }
    }
}

async fn hello() -> Json<Message> {
    Json(Message {
        message: HELLO_MESSAGE,
    })
}
