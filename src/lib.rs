//! Core crate exports for embedding the waypost map search control.
//!
//! The root module primarily re-exports the widget, its view-model, and the
//! port types so that hosts can wire a map view and a geocoding service
//! without digging through the module hierarchy.

pub mod app_dirs;
pub mod config;
pub mod viewmodel;
pub mod widget;

pub use config::{ControlPosition, Orientation, WidgetConfig};
pub use viewmodel::{Reaction, SearchViewModel};
pub use widget::{FeatureLinkage, SearchControl, SearchWidget};

pub use waypost_provider_geocoder::{
    CityPresets, GeocodeHit, GeocodeProvider, Geocoder, GeocodingConfig, TableGeocoder,
};
pub use waypost_provider_layers::{LayerStore, SearchLayer};
pub use waypost_view::{MessageBox, PAGE_SIZE, ResultItem, ResultsPager};
pub use waypost_widget_api::{
    Bounds, CameraRequest, Feature, FeatureId, FeatureStyle, GeometryKind, HighlightPalette,
    LatLng, MapPort, ProviderRegistry, ResultKind, ResultRecord, ResultSet, SearchEvent,
    SearchFailure, SearchScope, WidgetCommand,
};
