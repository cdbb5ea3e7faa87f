use std::sync::atomic::{AtomicU64, Ordering};

use indexmap::IndexMap;

use crate::geo::{Bounds, GeometryKind, LatLng};

static NEXT_FEATURE_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identity of a renderable map feature.
///
/// The map view owns the feature itself; the widget only refers to it by id
/// when restyling, opening popups, or removing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct FeatureId(u64);

impl FeatureId {
    /// Wrap an externally assigned id.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Allocate a process-unique id for a feature created on this side.
    #[must_use]
    pub fn allocate() -> Self {
        Self(NEXT_FEATURE_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// A positioned map feature handed to the map view for rendering.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Feature {
    pub id: FeatureId,
    pub geometry: GeometryKind,
    /// Representative position: the point itself, or a path's label anchor.
    pub anchor: LatLng,
    pub bounds: Bounds,
    /// Attribute table shown in the feature's info popup, in source order.
    pub properties: IndexMap<String, String>,
}

impl Feature {
    /// Create a point feature whose bounds collapse to its anchor.
    #[must_use]
    pub fn point(id: FeatureId, anchor: LatLng) -> Self {
        Self {
            id,
            geometry: GeometryKind::Point,
            anchor,
            bounds: Bounds::of(anchor),
            properties: IndexMap::new(),
        }
    }

    /// Create a feature with an explicit geometry and extent.
    #[must_use]
    pub fn with_bounds(id: FeatureId, geometry: GeometryKind, bounds: Bounds) -> Self {
        Self {
            id,
            geometry,
            anchor: bounds.center(),
            bounds,
            properties: IndexMap::new(),
        }
    }

    /// Attach an attribute to the feature's property table.
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Look up a property value by attribute name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }
}
