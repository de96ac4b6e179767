//! Curated Costa Rican locations and city slug lookup

use serde::Serialize;

/// A curated location with coordinates and its lookup slug
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct Location {
    /// Display name
    pub name: &'static str,
    /// Province the location belongs to
    pub region: &'static str,
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lon: f64,
    /// Unique lowercase, hyphenated key
    pub slug: &'static str,
}

impl Location {
    const fn new(
        name: &'static str,
        region: &'static str,
        lat: f64,
        lon: f64,
        slug: &'static str,
    ) -> Self {
        Self {
            name,
            region,
            lat,
            lon,
            slug,
        }
    }

    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.lat, self.lon)
    }
}

/// Provinces and key cities, in display order
pub static LOCATIONS: [Location; 9] = [
    Location::new("San José", "San José", 9.9281, -84.0907, "san-jose"),
    Location::new("Alajuela", "Alajuela", 10.0163, -84.2116, "alajuela"),
    Location::new("Heredia", "Heredia", 9.9986, -84.1170, "heredia"),
    Location::new("Cartago", "Cartago", 9.8644, -83.9194, "cartago"),
    Location::new("Puntarenas", "Puntarenas", 9.9763, -84.8384, "puntarenas"),
    Location::new("Limón", "Limón", 9.9907, -83.0360, "limon"),
    Location::new("Liberia (Guanacaste)", "Guanacaste", 10.6340, -85.4377, "liberia"),
    Location::new("Quepos", "Puntarenas", 9.4319, -84.1616, "quepos"),
    Location::new("Puerto Viejo", "Limón", 9.6563, -82.7547, "puerto-viejo"),
];

/// Derive the lookup slug for a city name: lowercase, spaces become hyphens,
/// Spanish accents fold to plain ASCII letters.
#[must_use]
pub fn slugify(city: &str) -> String {
    city.to_lowercase()
        .chars()
        .map(|c| match c {
            ' ' => '-',
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' | 'ü' => 'u',
            'ñ' => 'n',
            other => other,
        })
        .collect()
}

/// First location whose slug matches the slug derived from `city`
#[must_use]
pub fn find_by_city(city: &str) -> Option<&'static Location> {
    let slug = slugify(city);
    LOCATIONS.iter().find(|location| location.slug == slug)
}
