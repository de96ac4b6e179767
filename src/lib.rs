//! Costa Rica Climate API
//!
//! An HTTP gateway that serves a curated list of Costa Rican locations and
//! proxies weather queries to the Open-Meteo forecast API.

pub mod api;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod models;
pub mod telemetry;
pub mod weather;
pub mod web;

pub use api::AppState;
pub use config::GatewayConfig;
pub use diagnostics::{DatabaseDescriptor, DiagnosticReport};
pub use error::GatewayError;
pub use models::{LOCATIONS, Location, WeatherEnvelope};
pub use weather::{ForecastProvider, OpenMeteoClient};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
