use crate::events::{SearchFailure, SearchScope};
use crate::feature::{Feature, FeatureId};
use crate::geo::{Bounds, LatLng};
use crate::record::ResultSet;
use crate::style::FeatureStyle;

/// Static UI metadata contributed by a search provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderUi {
    /// Label shown on the provider's selector tab.
    pub tab_label: &'static str,
    /// Short usage hint for the provider's page.
    pub hint: &'static str,
}

/// Identifies a search provider and the tab it contributes.
#[derive(Debug, PartialEq, Eq)]
pub struct ProviderDescriptor {
    pub id: &'static str,
    pub ui: ProviderUi,
}

/// One keyword search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub keyword: String,
    pub scope: SearchScope,
}

impl SearchQuery {
    #[must_use]
    pub fn new(keyword: impl Into<String>, scope: SearchScope) -> Self {
        Self {
            keyword: keyword.into(),
            scope,
        }
    }
}

/// A source of search results: the geocoding service or a layer filter.
///
/// Implementations run synchronously on the calling thread; a search either
/// returns a complete [`ResultSet`] or a [`SearchFailure`], never a partial
/// result.
pub trait SearchProvider {
    fn descriptor(&self) -> &'static ProviderDescriptor;

    /// Execute the query and assemble the result set.
    ///
    /// # Errors
    ///
    /// Returns the advisory [`SearchFailure`] matching the empty outcome.
    fn search(&self, query: &SearchQuery) -> Result<ResultSet, SearchFailure>;
}

/// Operations the widget needs from the hosting map view.
///
/// The map owns the features; the widget refers to them by id. All calls are
/// fire-and-forget: the widget never reads map state back.
pub trait MapPort {
    /// Add a collection of positioned features to the map.
    fn add_features(&mut self, features: &[Feature]);

    /// Remove previously added features from the map.
    fn remove_features(&mut self, ids: &[FeatureId]);

    /// Change the visual style of a single feature.
    fn set_style(&mut self, id: FeatureId, style: &FeatureStyle);

    /// Open the info popup anchored to a feature.
    fn open_popup(&mut self, id: FeatureId);

    /// Close any open popup.
    fn close_popup(&mut self);

    /// Animate the camera to a single point.
    fn fly_to(&mut self, target: LatLng);

    /// Move the camera so the extent is fully visible.
    fn fit_bounds(&mut self, bounds: Bounds);

    /// Suspend or resume the map's own pointer interactions while the
    /// pointer is over the widget.
    fn set_interactions_enabled(&mut self, enabled: bool);
}
