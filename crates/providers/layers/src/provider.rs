use std::sync::{Arc, RwLock, RwLockReadGuard};

use log::warn;

use waypost_widget_api::{
    ProviderDescriptor, ProviderUi, ResultKind, ResultRecord, ResultSet, SearchFailure,
    SearchProvider, SearchQuery, SearchScope,
};

use crate::matcher::match_attributes;
use crate::store::LayerStore;

pub const PROVIDER_ID: &str = "layers";

static LAYER_DESCRIPTOR: ProviderDescriptor = ProviderDescriptor {
    id: PROVIDER_ID,
    ui: ProviderUi {
        tab_label: "Search layer",
        hint: "Pick a loaded layer, then search its attribute values.",
    },
};

#[must_use]
pub fn descriptor() -> &'static ProviderDescriptor {
    &LAYER_DESCRIPTOR
}

/// Search provider filtering the attribute values of loaded vector layers.
pub struct LayerSearchProvider {
    store: Arc<RwLock<LayerStore>>,
}

impl LayerSearchProvider {
    #[must_use]
    pub fn new(store: Arc<RwLock<LayerStore>>) -> Self {
        Self { store }
    }

    fn store(&self) -> RwLockReadGuard<'_, LayerStore> {
        // A poisoning panic cannot leave the store half-updated; keep serving.
        match self.store.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl SearchProvider for LayerSearchProvider {
    fn descriptor(&self) -> &'static ProviderDescriptor {
        &LAYER_DESCRIPTOR
    }

    fn search(&self, query: &SearchQuery) -> Result<ResultSet, SearchFailure> {
        let SearchScope::Layer(layer_name) = &query.scope else {
            debug_assert!(false, "layer provider invoked with a city scope");
            return Err(SearchFailure::LayerNoMatch);
        };

        let store = self.store();
        let Some(layer) = store.layer(layer_name) else {
            warn!("search requested against unknown layer '{layer_name}'");
            return Err(SearchFailure::LayerNoMatch);
        };

        let matches = match_attributes(layer, &query.keyword);
        if matches.is_empty() {
            return Err(SearchFailure::LayerNoMatch);
        }

        let mut records = Vec::with_capacity(matches.len());
        let mut features = Vec::with_capacity(matches.len());
        for matched in matches {
            let feature = &layer.features()[matched.feature_index];
            records.push(ResultRecord::layer_filtered(
                matched.attribute,
                matched.value,
                feature.geometry,
                feature.id,
            ));
            features.push(feature.clone());
        }

        Ok(ResultSet::new(ResultKind::LayerFiltered, records, features))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SearchLayer;
    use waypost_widget_api::{Feature, FeatureId, GeometryKind, LatLng};

    fn store() -> Arc<RwLock<LayerStore>> {
        let mut layers = LayerStore::new();
        layers.add_layer(SearchLayer::new(
            "districts",
            vec![
                Feature::point(FeatureId::new(1), LatLng::new(0.0, 0.0))
                    .with_property("name", "Old Town"),
                Feature::point(FeatureId::new(2), LatLng::new(1.0, 1.0))
                    .with_property("name", "Harbor"),
            ],
        ));
        Arc::new(RwLock::new(layers))
    }

    #[test]
    fn search_builds_layer_filtered_records() {
        let provider = LayerSearchProvider::new(store());
        let query = SearchQuery::new("Harbor", SearchScope::Layer("districts".to_string()));
        let set = provider.search(&query).unwrap();

        assert_eq!(set.origin, ResultKind::LayerFiltered);
        assert_eq!(set.records[0].display_primary, "name: Harbor");
        assert_eq!(set.records[0].filter_key, "Harbor");
        assert_eq!(set.records[0].geometry, GeometryKind::Point);
        assert_eq!(set.records[0].feature, set.features[0].id);
    }

    #[test]
    fn unmatched_keyword_surfaces_as_layer_no_match() {
        let provider = LayerSearchProvider::new(store());
        let query = SearchQuery::new("zzzz", SearchScope::Layer("districts".to_string()));
        assert_eq!(
            provider.search(&query).unwrap_err(),
            SearchFailure::LayerNoMatch
        );
    }

    #[test]
    fn unknown_layer_surfaces_as_layer_no_match() {
        let provider = LayerSearchProvider::new(store());
        let query = SearchQuery::new("Harbor", SearchScope::Layer("missing".to_string()));
        assert_eq!(
            provider.search(&query).unwrap_err(),
            SearchFailure::LayerNoMatch
        );
    }
}
