pub mod cities;
pub mod provider;
pub mod service;

pub use cities::{CityPresetError, CityPresets};
pub use provider::{GeocodeProvider, PROVIDER_ID, descriptor};
pub use service::{GeocodeError, GeocodeHit, Geocoder, GeocodingConfig, TableGeocoder};
