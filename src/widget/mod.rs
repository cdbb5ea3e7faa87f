//! The assembled search widget: control state wired to a map and view-model.

mod control;
mod linkage;

pub use control::SearchControl;
pub use linkage::FeatureLinkage;

use waypost_provider_layers::SearchLayer;
use waypost_view::ResultItem;
use waypost_widget_api::{CameraRequest, MapPort, WidgetCommand};

use crate::config::WidgetConfig;
use crate::viewmodel::{Reaction, SearchViewModel};

/// The search control bound to one map view and one view-model.
///
/// All operations run synchronously to completion on the calling thread:
/// a command either produces a camera move or loops straight back into the
/// control as a search event.
pub struct SearchWidget<M: MapPort> {
	map: M,
	control: SearchControl,
	viewmodel: SearchViewModel,
}

impl<M: MapPort> SearchWidget<M> {
	/// Wire the control over `map` using the view-model's providers.
	#[must_use]
	pub fn new(map: M, viewmodel: SearchViewModel, config: &WidgetConfig) -> Self {
		let descriptors = viewmodel.descriptors().collect();
		let control = SearchControl::new(
			descriptors,
			viewmodel.city_groups(),
			viewmodel.layer_names(),
			config.palette.clone(),
		);
		Self {
			map,
			control,
			viewmodel,
		}
	}

	/// Replace the keyword input text.
	pub fn set_keyword(&mut self, text: impl Into<String>) {
		self.control.input_mut().set_text(text);
	}

	/// Submit the current keyword; returns the rendered first result page.
	pub fn submit_search(&mut self) -> Vec<ResultItem> {
		let command = self.control.submit_search(&mut self.map);
		self.dispatch(command)
	}

	/// Pick a city by picker coordinates.
	pub fn choose_city(&mut self, group: usize, index: usize) {
		let command = self.control.choose_city(group, index);
		self.dispatch(command);
	}

	/// Pick a layer by picker index.
	pub fn choose_layer(&mut self, index: usize) {
		let command = self.control.choose_layer(index, &mut self.map);
		self.dispatch(command);
	}

	/// Follow a pager link, rendering that page.
	pub fn go_to_page(&mut self, page: usize) -> Vec<ResultItem> {
		self.control.go_to_page(page, &mut self.map)
	}

	/// React to a click on a result item.
	pub fn select_result(&mut self, filter_key: &str) {
		self.control.select_result(filter_key, &mut self.map);
	}

	/// Drop the current result set and its map association.
	pub fn clear_search_result(&mut self) {
		self.control.clear_search_result(&mut self.map);
	}

	/// React to the input's clear button.
	pub fn clear_input(&mut self) {
		self.control.clear_input(&mut self.map);
	}

	/// Register a searchable layer with the view-model and the layer page.
	pub fn add_search_layer(&mut self, layer: SearchLayer) {
		let name = self.viewmodel.add_search_layer(layer);
		self.control.register_layer(name);
	}

	/// Suspend map interactions while the pointer is over the control.
	pub fn pointer_entered(&mut self) {
		self.control.pointer_entered(&mut self.map);
	}

	/// Resume map interactions when the pointer leaves the control.
	pub fn pointer_left(&mut self) {
		self.control.pointer_left(&mut self.map);
	}

	fn dispatch(&mut self, command: Option<WidgetCommand>) -> Vec<ResultItem> {
		let Some(command) = command else {
			return Vec::new();
		};
		match self.viewmodel.handle(command) {
			Some(Reaction::Event(event)) => self.control.handle_event(event, &mut self.map),
			Some(Reaction::Camera(camera)) => {
				match camera {
					CameraRequest::FlyTo(target) => self.map.fly_to(target),
					CameraRequest::FitBounds(bounds) => self.map.fit_bounds(bounds),
				}
				Vec::new()
			}
			None => Vec::new(),
		}
	}

	#[must_use]
	pub fn control(&self) -> &SearchControl {
		&self.control
	}

	pub fn control_mut(&mut self) -> &mut SearchControl {
		&mut self.control
	}

	#[must_use]
	pub fn viewmodel(&self) -> &SearchViewModel {
		&self.viewmodel
	}

	#[must_use]
	pub fn map(&self) -> &M {
		&self.map
	}

	pub fn map_mut(&mut self) -> &mut M {
		&mut self.map
	}
}
