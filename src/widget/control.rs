//! Aggregate view state for the search control.

use log::debug;

use waypost_view::{
	CityPicker, KeywordInput, LayerPicker, MessageBox, PagerBar, ResultItem, ResultsPager,
	SourceTabs,
};
use waypost_widget_api::{
	HighlightPalette, MapPort, ProviderDescriptor, SearchEvent, SearchScope, WidgetCommand,
};

use super::linkage::FeatureLinkage;

/// Header text shown before any layer has been chosen.
const LAYER_PLACEHOLDER: &str = "Select a search layer";

/// The widget's face: input, pickers, message box, result pager, and the
/// map linkage, bundled into one state container.
///
/// Methods return the [`WidgetCommand`]s to forward across the view-model
/// boundary; the control never performs a search itself.
pub struct SearchControl {
	/// Label of the drop-down header: the active city or layer.
	header_label: String,
	input: KeywordInput,
	message: MessageBox,
	tabs: SourceTabs,
	city_picker: CityPicker,
	layer_picker: LayerPicker,
	pager_bar: PagerBar,
	pager: ResultsPager,
	linkage: FeatureLinkage,
	/// What the next submitted keyword is searched against.
	scope: SearchScope,
	/// Whether the result panel is shown.
	results_open: bool,
}

impl SearchControl {
	/// Assemble the control from the registered providers and picker data.
	#[must_use]
	pub fn new(
		descriptors: Vec<&'static ProviderDescriptor>,
		city_groups: Vec<(String, Vec<String>)>,
		layer_names: Vec<String>,
		palette: HighlightPalette,
	) -> Self {
		let first_city = city_groups
			.iter()
			.flat_map(|(_, cities)| cities.iter())
			.next()
			.cloned();
		let header_label = first_city
			.clone()
			.unwrap_or_else(|| LAYER_PLACEHOLDER.to_string());
		let scope = SearchScope::City(first_city.unwrap_or_default());

		Self {
			header_label,
			input: KeywordInput::default(),
			message: MessageBox::new(),
			tabs: SourceTabs::from_descriptors(descriptors),
			city_picker: CityPicker::new(city_groups),
			layer_picker: LayerPicker::new(layer_names),
			pager_bar: PagerBar::new(),
			pager: ResultsPager::new(),
			linkage: FeatureLinkage::new(palette),
			scope,
			results_open: false,
		}
	}

	/// Submit the current keyword against the active scope.
	///
	/// Closes open panels and drops any previous result first. A blank
	/// keyword only raises a message-box notice; no other state changes.
	pub fn submit_search(&mut self, map: &mut dyn MapPort) -> Option<WidgetCommand> {
		self.tabs.close();
		self.message.close();
		self.clear_search_result(map);

		let keyword = match self.input.submit() {
			Ok(keyword) => keyword,
			Err(err) => {
				self.message.show(err.to_string());
				return None;
			}
		};
		debug!("submitting search for '{keyword}'");
		Some(WidgetCommand::Search {
			keyword,
			scope: self.scope.clone(),
		})
	}

	/// Pick a city from the city page.
	///
	/// Updates the header and scope and asks the view-model to pan there.
	pub fn choose_city(&mut self, group: usize, index: usize) -> Option<WidgetCommand> {
		self.city_picker.select_group(group);
		let city = self.city_picker.choose(index)?.to_string();
		self.message.close();
		self.tabs.close();
		self.header_label = city.clone();
		self.scope = SearchScope::City(city.clone());
		Some(WidgetCommand::PanToCity(city))
	}

	/// Pick a layer from the layer page.
	///
	/// Any previous result is cleared before switching, matching the
	/// source-selection flow.
	pub fn choose_layer(&mut self, index: usize, map: &mut dyn MapPort) -> Option<WidgetCommand> {
		self.clear_search_result(map);
		let layer = self.layer_picker.check(index)?.to_string();
		self.message.close();
		self.tabs.close();
		self.header_label = layer.clone();
		self.scope = SearchScope::Layer(layer.clone());
		Some(WidgetCommand::PanToLayer(layer))
	}

	/// Route a view-model notification into the pager, linkage, and message
	/// box. Returns the rendered first page for ready results.
	pub fn handle_event(&mut self, event: SearchEvent, map: &mut dyn MapPort) -> Vec<ResultItem> {
		match event {
			SearchEvent::ResultsReady(set) => {
				if set.is_empty() {
					debug!("ignoring empty result set; failures arrive as events");
					return Vec::new();
				}
				self.linkage.load(&set, map);
				self.pager.load(set.records);
				self.pager_bar.set_page_count(self.pager.page_count());
				self.results_open = true;
				self.render_page(1, map)
			}
			SearchEvent::SearchFailed(failure) => {
				self.message.show(failure.to_string());
				Vec::new()
			}
		}
	}

	/// Follow a pager link. Stale page numbers are ignored.
	pub fn go_to_page(&mut self, page: usize, map: &mut dyn MapPort) -> Vec<ResultItem> {
		if !self.pager_bar.select(page) {
			debug!("ignoring out-of-range page link {page}");
			return Vec::new();
		}
		self.render_page(page, map)
	}

	fn render_page(&mut self, page: usize, map: &mut dyn MapPort) -> Vec<ResultItem> {
		let items = self.pager.render_page(page);
		// Rendering always runs a linkage pass for the page's first record.
		if let Some(key) = self.pager.selected_filter_key() {
			self.linkage
				.select_by_filter_key(key, self.pager.records(), map);
		}
		items
	}

	/// React to a click on a result item.
	pub fn select_result(&mut self, filter_key: &str, map: &mut dyn MapPort) {
		if self.pager.select_by_key(filter_key) {
			self.linkage
				.select_by_filter_key(filter_key, self.pager.records(), map);
		}
	}

	/// Drop the current result set, its map association, and the pager links.
	pub fn clear_search_result(&mut self, map: &mut dyn MapPort) {
		self.linkage.clear(map);
		self.pager.clear();
		self.pager_bar.reset();
		self.results_open = false;
	}

	/// React to the input's clear button.
	pub fn clear_input(&mut self, map: &mut dyn MapPort) {
		self.clear_search_result(map);
		self.input.clear();
	}

	/// Suspend map interactions while the pointer is over the control.
	pub fn pointer_entered(&self, map: &mut dyn MapPort) {
		map.set_interactions_enabled(false);
	}

	/// Resume map interactions when the pointer leaves the control.
	pub fn pointer_left(&self, map: &mut dyn MapPort) {
		map.set_interactions_enabled(true);
	}

	/// Offer a newly registered layer in the layer page.
	pub fn register_layer(&mut self, name: impl Into<String>) {
		self.layer_picker.push(name);
	}

	#[must_use]
	pub fn header_label(&self) -> &str {
		&self.header_label
	}

	#[must_use]
	pub fn scope(&self) -> &SearchScope {
		&self.scope
	}

	#[must_use]
	pub fn results_open(&self) -> bool {
		self.results_open
	}

	#[must_use]
	pub fn input(&self) -> &KeywordInput {
		&self.input
	}

	pub fn input_mut(&mut self) -> &mut KeywordInput {
		&mut self.input
	}

	#[must_use]
	pub fn message(&self) -> &MessageBox {
		&self.message
	}

	pub fn message_mut(&mut self) -> &mut MessageBox {
		&mut self.message
	}

	#[must_use]
	pub fn tabs(&self) -> &SourceTabs {
		&self.tabs
	}

	pub fn tabs_mut(&mut self) -> &mut SourceTabs {
		&mut self.tabs
	}

	#[must_use]
	pub fn city_picker(&self) -> &CityPicker {
		&self.city_picker
	}

	pub fn city_picker_mut(&mut self) -> &mut CityPicker {
		&mut self.city_picker
	}

	#[must_use]
	pub fn layer_picker(&self) -> &LayerPicker {
		&self.layer_picker
	}

	#[must_use]
	pub fn pager(&self) -> &ResultsPager {
		&self.pager
	}

	#[must_use]
	pub fn pager_bar(&self) -> &PagerBar {
		&self.pager_bar
	}

	#[must_use]
	pub fn linkage(&self) -> &FeatureLinkage {
		&self.linkage
	}
}
