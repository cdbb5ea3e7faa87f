use std::sync::Arc;

use indexmap::IndexMap;
use log::warn;

use waypost_widget_api::{
    Feature, FeatureId, LatLng, ProviderDescriptor, ProviderUi, ResultKind, ResultRecord,
    ResultSet, SearchFailure, SearchProvider, SearchQuery, SearchScope,
};

use crate::cities::CityPresets;
use crate::service::{Geocoder, GeocodingConfig};

pub const PROVIDER_ID: &str = "geocode";

static GEOCODE_DESCRIPTOR: ProviderDescriptor = ProviderDescriptor {
    id: PROVIDER_ID,
    ui: ProviderUi {
        tab_label: "Search city",
        hint: "Pick a city, then search for places and addresses.",
    },
};

#[must_use]
pub fn descriptor() -> &'static ProviderDescriptor {
    &GEOCODE_DESCRIPTOR
}

/// Search provider backed by the city address-matching service.
pub struct GeocodeProvider {
    geocoder: Arc<dyn Geocoder>,
    default_service: Option<GeocodingConfig>,
    city_services: IndexMap<String, GeocodingConfig>,
    presets: CityPresets,
}

impl GeocodeProvider {
    /// Create a provider over `geocoder`, optionally with a service used for
    /// every city that has no dedicated override.
    #[must_use]
    pub fn new(geocoder: Arc<dyn Geocoder>, default_service: Option<GeocodingConfig>) -> Self {
        Self {
            geocoder,
            default_service,
            city_services: IndexMap::new(),
            presets: CityPresets::builtin().clone(),
        }
    }

    /// Configure a dedicated service endpoint for one city.
    #[must_use]
    pub fn with_city_service(mut self, city: impl Into<String>, service: GeocodingConfig) -> Self {
        self.city_services.insert(city.into(), service);
        self
    }

    /// Replace the builtin city presets.
    #[must_use]
    pub fn with_presets(mut self, presets: CityPresets) -> Self {
        self.presets = presets;
        self
    }

    #[must_use]
    pub fn presets(&self) -> &CityPresets {
        &self.presets
    }

    fn service_for(&self, city: &str) -> Option<&GeocodingConfig> {
        self.city_services
            .iter()
            .find(|(configured, _)| configured.eq_ignore_ascii_case(city))
            .map(|(_, service)| service)
            .or(self.default_service.as_ref())
    }

    /// Resolve the position of a city itself, for camera pans.
    ///
    /// # Errors
    ///
    /// [`SearchFailure::CityServiceMissing`] when no service covers the city,
    /// [`SearchFailure::GeocodeNoMatch`] when the city cannot be located.
    pub fn locate_city(&self, city: &str) -> Result<LatLng, SearchFailure> {
        let service = self
            .service_for(city)
            .ok_or(SearchFailure::CityServiceMissing)?;
        let hits = self
            .geocoder
            .geocode(city, city, service)
            .unwrap_or_else(|err| {
                warn!("city lookup for '{city}' failed: {err}");
                Vec::new()
            });
        hits.first()
            .map(|hit| hit.location)
            .ok_or(SearchFailure::GeocodeNoMatch)
    }
}

impl SearchProvider for GeocodeProvider {
    fn descriptor(&self) -> &'static ProviderDescriptor {
        &GEOCODE_DESCRIPTOR
    }

    fn search(&self, query: &SearchQuery) -> Result<ResultSet, SearchFailure> {
        let SearchScope::City(city) = &query.scope else {
            debug_assert!(false, "geocode provider invoked with a layer scope");
            return Err(SearchFailure::GeocodeNoMatch);
        };

        let service = self
            .service_for(city)
            .ok_or(SearchFailure::CityServiceMissing)?;

        let hits = self
            .geocoder
            .geocode(&query.keyword, city, service)
            .unwrap_or_else(|err| {
                warn!("geocoding '{}' in {city} failed: {err}", query.keyword);
                Vec::new()
            });
        if hits.is_empty() {
            return Err(SearchFailure::GeocodeNoMatch);
        }

        let mut records = Vec::with_capacity(hits.len());
        let mut features = Vec::with_capacity(hits.len());
        for hit in hits {
            let id = FeatureId::allocate();
            records.push(ResultRecord::geocoded(&hit.name, &hit.address, id));
            features.push(
                Feature::point(id, hit.location)
                    .with_property("name", &hit.name)
                    .with_property("address", &hit.address),
            );
        }

        Ok(ResultSet::new(ResultKind::Geocoded, records, features))
    }
}
