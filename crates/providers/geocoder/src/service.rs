use thiserror::Error;

use waypost_widget_api::LatLng;

/// Connection settings for one address-matching service endpoint.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GeocodingConfig {
    /// Base URL of the address-matching service.
    pub address_url: String,
    /// API key sent with every request.
    pub key: String,
}

impl GeocodingConfig {
    #[must_use]
    pub fn new(address_url: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            address_url: address_url.into(),
            key: key.into(),
        }
    }
}

/// One hit returned by the address-matching service.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GeocodeHit {
    pub name: String,
    pub address: String,
    pub location: LatLng,
}

impl GeocodeHit {
    #[must_use]
    pub fn new(name: impl Into<String>, address: impl Into<String>, location: LatLng) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            location,
        }
    }
}

/// Errors from the address-matching service itself.
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("geocoding request failed: {reason}")]
    Request { reason: String },

    #[error("geocoding response could not be decoded: {reason}")]
    Decode { reason: String },
}

/// Port to the address-matching service.
///
/// The production implementation lives with the host (the network layer is
/// out of scope here); [`TableGeocoder`] provides an in-memory stand-in for
/// tests and embedding demos.
pub trait Geocoder {
    /// Resolve `keyword` to zero or more hits within `city`.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError`] when the service fails outright; an empty hit
    /// list is a successful response.
    fn geocode(
        &self,
        keyword: &str,
        city: &str,
        service: &GeocodingConfig,
    ) -> Result<Vec<GeocodeHit>, GeocodeError>;
}

#[derive(Debug, Clone)]
struct TableEntry {
    city: String,
    hit: GeocodeHit,
}

/// In-memory geocoder backed by a fixed lookup table.
///
/// Matches case-insensitively on hit-name substrings, scoped to the queried
/// city. A query equal to the city name returns the city's first entry, which
/// makes the table usable for locating cities themselves.
#[derive(Debug, Clone, Default)]
pub struct TableGeocoder {
    entries: Vec<TableEntry>,
}

impl TableGeocoder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one hit under `city`.
    #[must_use]
    pub fn with_entry(mut self, city: impl Into<String>, hit: GeocodeHit) -> Self {
        self.entries.push(TableEntry {
            city: city.into(),
            hit,
        });
        self
    }
}

impl Geocoder for TableGeocoder {
    fn geocode(
        &self,
        keyword: &str,
        city: &str,
        _service: &GeocodingConfig,
    ) -> Result<Vec<GeocodeHit>, GeocodeError> {
        let keyword = keyword.to_lowercase();
        let mut hits: Vec<GeocodeHit> = self
            .entries
            .iter()
            .filter(|entry| entry.city.eq_ignore_ascii_case(city))
            .filter(|entry| entry.hit.name.to_lowercase().contains(&keyword))
            .map(|entry| entry.hit.clone())
            .collect();

        if hits.is_empty() && city.eq_ignore_ascii_case(keyword.trim()) {
            hits.extend(
                self.entries
                    .iter()
                    .find(|entry| entry.city.eq_ignore_ascii_case(city))
                    .map(|entry| entry.hit.clone()),
            );
        }

        Ok(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> GeocodingConfig {
        GeocodingConfig::new("https://geocode.invalid/v1", "test-key")
    }

    #[test]
    fn matches_are_scoped_to_the_city() {
        let geocoder = TableGeocoder::new()
            .with_entry(
                "Lisbon",
                GeocodeHit::new("Harbor Market", "Dock 4", LatLng::new(38.7, -9.1)),
            )
            .with_entry(
                "Oslo",
                GeocodeHit::new("Harbor Office", "Pier 1", LatLng::new(59.9, 10.7)),
            );

        let hits = geocoder.geocode("harbor", "Lisbon", &service()).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Harbor Market");
    }

    #[test]
    fn city_name_query_falls_back_to_first_entry() {
        let geocoder = TableGeocoder::new().with_entry(
            "Oslo",
            GeocodeHit::new("Harbor Office", "Pier 1", LatLng::new(59.9, 10.7)),
        );

        let hits = geocoder.geocode("Oslo", "Oslo", &service()).unwrap();
        assert_eq!(hits.len(), 1);
    }
}
