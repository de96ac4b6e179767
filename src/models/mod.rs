//! Data models for the Costa Rica Climate API
//!
//! - Location: the curated location table and slug lookup
//! - Envelope: the response wrapper for weather endpoints

pub mod envelope;
pub mod location;

pub use envelope::WeatherEnvelope;
pub use location::{LOCATIONS, Location, find_by_city, slugify};
