pub mod events;
pub mod feature;
pub mod geo;
pub mod ports;
pub mod record;
pub mod registry;
pub mod style;

pub use events::{CameraRequest, SearchEvent, SearchFailure, SearchScope, WidgetCommand};
pub use feature::{Feature, FeatureId};
pub use geo::{Bounds, GeometryKind, LatLng};
pub use ports::{MapPort, ProviderDescriptor, ProviderUi, SearchProvider, SearchQuery};
pub use record::{ResultKind, ResultRecord, ResultSet};
pub use registry::ProviderRegistry;
pub use style::{FeatureStyle, HighlightPalette, MarkerIcon, PathStyle};

use thiserror::Error;

/// Errors that can occur when mutating the [`ProviderRegistry`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProviderRegistryError {
    /// A provider attempted to register an identifier that already exists in the registry.
    #[error("search provider id '{id}' is already registered")]
    DuplicateId { id: &'static str },
}
