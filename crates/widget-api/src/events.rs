use thiserror::Error;

use crate::geo::{Bounds, LatLng};
use crate::record::ResultSet;

/// What the keyword is searched against.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SearchScope {
    /// Address geocoding within the named city.
    City(String),
    /// Attribute search over the named vector layer.
    Layer(String),
}

/// Commands the widget sends outward across the view-model boundary.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum WidgetCommand {
    Search { keyword: String, scope: SearchScope },
    PanToCity(String),
    PanToLayer(String),
}

/// Notifications the widget receives back from the view-model.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum SearchEvent {
    ResultsReady(ResultSet),
    SearchFailed(SearchFailure),
}

/// A requested camera move against the map view.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum CameraRequest {
    FlyTo(LatLng),
    FitBounds(Bounds),
}

/// Advisory search failures surfaced to the user as a message-box notice.
///
/// The `Display` text is the user-facing message; nothing here is fatal and
/// re-searching recovers in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, serde::Serialize, serde::Deserialize)]
pub enum SearchFailure {
    #[error("no address match was found for the search keyword")]
    GeocodeNoMatch,
    #[error("no geocoding service is configured for the current city")]
    CityServiceMissing,
    #[error("no vector feature matched the search keyword")]
    LayerNoMatch,
}
