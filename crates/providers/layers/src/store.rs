use indexmap::IndexMap;

use waypost_widget_api::{Bounds, Feature};

/// A loaded vector layer whose attribute values can be searched.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchLayer {
    name: String,
    features: Vec<Feature>,
}

impl SearchLayer {
    #[must_use]
    pub fn new(name: impl Into<String>, features: Vec<Feature>) -> Self {
        Self {
            name: name.into(),
            features,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Aggregate extent of every feature in the layer, if any.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        let mut features = self.features.iter();
        let mut bounds = features.next()?.bounds;
        for feature in features {
            bounds.extend_bounds(&feature.bounds);
        }
        Some(bounds)
    }
}

/// Registry of searchable layers, keyed by name in insertion order.
#[derive(Debug, Clone, Default)]
pub struct LayerStore {
    layers: IndexMap<String, SearchLayer>,
}

impl LayerStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a layer, replacing any existing layer with the same name.
    pub fn add_layer(&mut self, layer: SearchLayer) {
        self.layers.insert(layer.name.clone(), layer);
    }

    /// Layer names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.layers.keys().map(String::as_str)
    }

    #[must_use]
    pub fn layer(&self, name: &str) -> Option<&SearchLayer> {
        self.layers.get(name)
    }

    /// Aggregate extent of the named layer.
    #[must_use]
    pub fn bounds_of(&self, name: &str) -> Option<Bounds> {
        self.layers.get(name).and_then(SearchLayer::bounds)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waypost_widget_api::{FeatureId, LatLng};

    fn layer() -> SearchLayer {
        SearchLayer::new(
            "stations",
            vec![
                Feature::point(FeatureId::new(1), LatLng::new(1.0, 2.0)),
                Feature::point(FeatureId::new(2), LatLng::new(3.0, 4.0)),
            ],
        )
    }

    #[test]
    fn bounds_cover_every_feature() {
        let bounds = layer().bounds().unwrap();
        assert_eq!(bounds.south_west(), LatLng::new(1.0, 2.0));
        assert_eq!(bounds.north_east(), LatLng::new(3.0, 4.0));
    }

    #[test]
    fn same_named_layer_is_replaced() {
        let mut store = LayerStore::new();
        store.add_layer(layer());
        store.add_layer(SearchLayer::new("stations", Vec::new()));

        assert_eq!(store.len(), 1);
        assert!(store.layer("stations").unwrap().features().is_empty());
        assert!(store.bounds_of("stations").is_none());
    }

    #[test]
    fn names_keep_insertion_order() {
        let mut store = LayerStore::new();
        store.add_layer(SearchLayer::new("roads", Vec::new()));
        store.add_layer(SearchLayer::new("parks", Vec::new()));
        let names: Vec<&str> = store.names().collect();
        assert_eq!(names, vec!["roads", "parks"]);
    }
}
