//! Services widget commands against the registered search providers.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::debug;

use waypost_provider_geocoder::GeocodeProvider;
use waypost_provider_layers::{LayerSearchProvider, LayerStore, SearchLayer};
use waypost_widget_api::{
	CameraRequest, ProviderDescriptor, ProviderRegistry, ProviderRegistryError, SearchEvent,
	SearchFailure, SearchProvider, SearchQuery, SearchScope, WidgetCommand,
};

/// What the view-model asks the widget to do in response to a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Reaction {
	/// Feed this notification back into the control.
	Event(SearchEvent),
	/// Move the map camera.
	Camera(CameraRequest),
}

/// The business side of the control: owns the provider registry, the layer
/// store, and the geocoding provider, and services [`WidgetCommand`]s
/// synchronously on the calling thread.
pub struct SearchViewModel {
	registry: ProviderRegistry,
	geocode: Option<Arc<GeocodeProvider>>,
	store: Arc<RwLock<LayerStore>>,
}

impl SearchViewModel {
	/// Build a view-model; pass `None` to disable the geocoding page.
	///
	/// # Errors
	///
	/// Returns a [`ProviderRegistryError`] if the builtin providers cannot be
	/// registered.
	pub fn new(geocode: Option<GeocodeProvider>) -> Result<Self, ProviderRegistryError> {
		let store = Arc::new(RwLock::new(LayerStore::new()));
		let mut registry = ProviderRegistry::new();
		let geocode = geocode.map(Arc::new);
		if let Some(provider) = &geocode {
			let provider: Arc<dyn SearchProvider> = provider.clone();
			registry.register_arc(provider)?;
		}
		registry.register(LayerSearchProvider::new(Arc::clone(&store)))?;

		Ok(Self {
			registry,
			geocode,
			store,
		})
	}

	/// Descriptors of the registered providers, in tab order.
	pub fn descriptors(&self) -> impl Iterator<Item = &'static ProviderDescriptor> + '_ {
		self.registry.descriptors()
	}

	/// City sections for the picker; empty when geocoding is disabled.
	#[must_use]
	pub fn city_groups(&self) -> Vec<(String, Vec<String>)> {
		let Some(geocode) = &self.geocode else {
			return Vec::new();
		};
		geocode
			.presets()
			.groups()
			.map(|(label, cities)| (label.to_string(), cities.to_vec()))
			.collect()
	}

	/// Register a searchable layer; returns its name for the layer picker.
	pub fn add_search_layer(&self, layer: SearchLayer) -> String {
		let name = layer.name().to_string();
		self.store_write().add_layer(layer);
		debug!("registered search layer '{name}'");
		name
	}

	/// Names of the registered search layers.
	#[must_use]
	pub fn layer_names(&self) -> Vec<String> {
		self.store_read().names().map(str::to_string).collect()
	}

	/// Service one command, producing at most one reaction.
	pub fn handle(&self, command: WidgetCommand) -> Option<Reaction> {
		match command {
			WidgetCommand::Search { keyword, scope } => {
				Some(Reaction::Event(self.search(keyword, scope)))
			}
			WidgetCommand::PanToCity(city) => Some(self.pan_to_city(&city)),
			WidgetCommand::PanToLayer(layer) => self.pan_to_layer(&layer),
		}
	}

	fn search(&self, keyword: String, scope: SearchScope) -> SearchEvent {
		let provider_id = match &scope {
			SearchScope::City(_) => waypost_provider_geocoder::PROVIDER_ID,
			SearchScope::Layer(_) => waypost_provider_layers::PROVIDER_ID,
		};
		let Some(provider) = self.registry.provider_by_id(provider_id) else {
			let failure = match &scope {
				SearchScope::City(_) => SearchFailure::CityServiceMissing,
				SearchScope::Layer(_) => SearchFailure::LayerNoMatch,
			};
			return SearchEvent::SearchFailed(failure);
		};

		match provider.search(&SearchQuery { keyword, scope }) {
			Ok(set) => SearchEvent::ResultsReady(set),
			Err(failure) => SearchEvent::SearchFailed(failure),
		}
	}

	fn pan_to_city(&self, city: &str) -> Reaction {
		let Some(geocode) = &self.geocode else {
			return Reaction::Event(SearchEvent::SearchFailed(SearchFailure::CityServiceMissing));
		};
		match geocode.locate_city(city) {
			Ok(location) => Reaction::Camera(CameraRequest::FlyTo(location)),
			Err(failure) => Reaction::Event(SearchEvent::SearchFailed(failure)),
		}
	}

	fn pan_to_layer(&self, layer: &str) -> Option<Reaction> {
		let Some(bounds) = self.store_read().bounds_of(layer) else {
			debug!("layer '{layer}' has no extent to pan to");
			return None;
		};
		let camera = if bounds.is_single_point() {
			CameraRequest::FlyTo(bounds.center())
		} else {
			CameraRequest::FitBounds(bounds)
		};
		Some(Reaction::Camera(camera))
	}

	fn store_read(&self) -> RwLockReadGuard<'_, LayerStore> {
		match self.store.read() {
			Ok(guard) => guard,
			Err(poisoned) => poisoned.into_inner(),
		}
	}

	fn store_write(&self) -> RwLockWriteGuard<'_, LayerStore> {
		match self.store.write() {
			Ok(guard) => guard,
			Err(poisoned) => poisoned.into_inner(),
		}
	}
}
