use crate::feature::{Feature, FeatureId};
use crate::geo::GeometryKind;

/// How a result record was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ResultKind {
    /// Resolved by the city address-matching service.
    Geocoded,
    /// Matched against the attribute values of a loaded vector layer.
    LayerFiltered,
}

/// One search or geocode hit shown in the result list.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ResultRecord {
    pub kind: ResultKind,
    pub geometry: GeometryKind,
    /// Primary display line: the place name, or `"<attribute>: <value>"`.
    pub display_primary: String,
    /// Secondary display line, only present for geocoded hits (the address).
    pub display_secondary: Option<String>,
    /// Value used to match this record back to its map feature.
    ///
    /// Should be unique within one result set; duplicates make the linkage
    /// ambiguous and every matching feature reacts to a selection.
    pub filter_key: String,
    pub feature: FeatureId,
}

impl ResultRecord {
    /// Build a record for a geocoded point hit.
    #[must_use]
    pub fn geocoded(
        name: impl Into<String>,
        address: impl Into<String>,
        feature: FeatureId,
    ) -> Self {
        let name = name.into();
        Self {
            kind: ResultKind::Geocoded,
            geometry: GeometryKind::Point,
            filter_key: name.clone(),
            display_primary: name,
            display_secondary: Some(address.into()),
            feature,
        }
    }

    /// Build a record for a layer feature matched on one of its attributes.
    #[must_use]
    pub fn layer_filtered(
        attribute: impl Into<String>,
        value: impl Into<String>,
        geometry: GeometryKind,
        feature: FeatureId,
    ) -> Self {
        let value = value.into();
        Self {
            kind: ResultKind::LayerFiltered,
            geometry,
            display_primary: format!("{}: {value}", attribute.into()),
            display_secondary: None,
            filter_key: value,
            feature,
        }
    }
}

/// A complete search result: the ordered records plus the features the map
/// view should render for them.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ResultSet {
    pub origin: ResultKind,
    pub records: Vec<ResultRecord>,
    pub features: Vec<Feature>,
}

impl ResultSet {
    #[must_use]
    pub fn new(origin: ResultKind, records: Vec<ResultRecord>, features: Vec<Feature>) -> Self {
        Self {
            origin,
            records,
            features,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether every record carries a distinct filter key.
    #[must_use]
    pub fn has_unique_filter_keys(&self) -> bool {
        let mut seen = std::collections::HashSet::with_capacity(self.records.len());
        self.records
            .iter()
            .all(|record| seen.insert(record.filter_key.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geocoded_record_uses_name_as_filter_key() {
        let record = ResultRecord::geocoded("Central Station", "1 Plaza Way", FeatureId::new(3));
        assert_eq!(record.kind, ResultKind::Geocoded);
        assert_eq!(record.filter_key, "Central Station");
        assert_eq!(record.display_primary, "Central Station");
        assert_eq!(record.display_secondary.as_deref(), Some("1 Plaza Way"));
    }

    #[test]
    fn layer_record_formats_attribute_pair() {
        let record = ResultRecord::layer_filtered(
            "district",
            "Old Town",
            GeometryKind::Polygon,
            FeatureId::new(4),
        );
        assert_eq!(record.display_primary, "district: Old Town");
        assert_eq!(record.filter_key, "Old Town");
        assert!(record.display_secondary.is_none());
    }

    #[test]
    fn duplicate_filter_keys_are_detected() {
        let records = vec![
            ResultRecord::layer_filtered("kind", "park", GeometryKind::Polygon, FeatureId::new(1)),
            ResultRecord::layer_filtered("kind", "park", GeometryKind::Polygon, FeatureId::new(2)),
        ];
        let set = ResultSet::new(ResultKind::LayerFiltered, records, Vec::new());
        assert!(!set.has_unique_filter_keys());
    }
}
