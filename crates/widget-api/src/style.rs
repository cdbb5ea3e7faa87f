use crate::geo::GeometryKind;

/// Icon definition applied to point-like features.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MarkerIcon {
    /// Style class resolved by the host's stylesheet.
    pub class_name: String,
    /// Pixel offset from the feature position to the icon's anchor point.
    pub icon_anchor: (f64, f64),
}

impl MarkerIcon {
    #[must_use]
    pub fn new(class_name: impl Into<String>, icon_anchor: (f64, f64)) -> Self {
        Self {
            class_name: class_name.into(),
            icon_anchor,
        }
    }
}

/// Stroke and fill styling applied to line and polygon features.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PathStyle {
    pub color: String,
    pub fill_color: String,
    pub weight: u32,
    pub opacity: f64,
    pub fill_opacity: f64,
}

/// Visual treatment of a single feature.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum FeatureStyle {
    Marker(MarkerIcon),
    Path(PathStyle),
}

/// The default and selected looks for search result features.
///
/// Hosts may override individual variants; the stock palette renders unselected
/// results in blue and the selected result in red.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HighlightPalette {
    pub default_marker: MarkerIcon,
    pub selected_marker: MarkerIcon,
    pub default_path: PathStyle,
    pub selected_path: PathStyle,
}

impl Default for HighlightPalette {
    fn default() -> Self {
        Self {
            default_marker: MarkerIcon::new("default-marker-icon", (12.5, 0.0)),
            selected_marker: MarkerIcon::new("select-marker-icon", (15.0, 0.0)),
            default_path: PathStyle {
                color: "blue".to_string(),
                fill_color: "blue".to_string(),
                weight: 1,
                opacity: 1.0,
                fill_opacity: 0.6,
            },
            selected_path: PathStyle {
                color: "red".to_string(),
                fill_color: "red".to_string(),
                weight: 1,
                opacity: 1.0,
                fill_opacity: 0.2,
            },
        }
    }
}

impl HighlightPalette {
    /// Resolve the style for a feature of the given geometry.
    #[must_use]
    pub fn style_for(&self, geometry: GeometryKind, selected: bool) -> FeatureStyle {
        match (geometry.is_point_like(), selected) {
            (true, false) => FeatureStyle::Marker(self.default_marker.clone()),
            (true, true) => FeatureStyle::Marker(self.selected_marker.clone()),
            (false, false) => FeatureStyle::Path(self.default_path.clone()),
            (false, true) => FeatureStyle::Path(self.selected_path.clone()),
        }
    }
}
