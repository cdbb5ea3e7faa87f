//! Selector state: provider tabs, city/layer pickers, and the pager bar.

use waypost_widget_api::ProviderDescriptor;

/// One tab contributed by a search provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceTab {
	pub id: &'static str,
	pub label: &'static str,
	pub hint: &'static str,
}

/// The tabbed drop-down switching between search sources.
///
/// Mirrors the drop-down panel: it opens over the map, and picking an entry
/// in either page closes it.
#[derive(Debug, Default)]
pub struct SourceTabs {
	tabs: Vec<SourceTab>,
	active: usize,
	open: bool,
}

impl SourceTabs {
	/// Build the tab row from the registered provider descriptors.
	#[must_use]
	pub fn from_descriptors<'a>(
		descriptors: impl IntoIterator<Item = &'a ProviderDescriptor>,
	) -> Self {
		let tabs = descriptors
			.into_iter()
			.map(|descriptor| SourceTab {
				id: descriptor.id,
				label: descriptor.ui.tab_label,
				hint: descriptor.ui.hint,
			})
			.collect();
		Self {
			tabs,
			active: 0,
			open: false,
		}
	}

	#[must_use]
	pub fn tabs(&self) -> &[SourceTab] {
		&self.tabs
	}

	/// Switch the active tab; out-of-range indices are ignored.
	pub fn select(&mut self, index: usize) {
		if index < self.tabs.len() {
			self.active = index;
		}
	}

	#[must_use]
	pub fn active(&self) -> Option<&SourceTab> {
		self.tabs.get(self.active)
	}

	pub fn toggle_open(&mut self) {
		self.open = !self.open;
	}

	pub fn close(&mut self) {
		self.open = false;
	}

	#[must_use]
	pub fn is_open(&self) -> bool {
		self.open
	}
}

/// Grouped city sections with an active group and a chosen city.
#[derive(Debug, Default)]
pub struct CityPicker {
	groups: Vec<(String, Vec<String>)>,
	active_group: usize,
	chosen: Option<(usize, usize)>,
}

impl CityPicker {
	#[must_use]
	pub fn new(groups: Vec<(String, Vec<String>)>) -> Self {
		Self {
			groups,
			active_group: 0,
			chosen: None,
		}
	}

	/// Section labels in configured order.
	pub fn section_labels(&self) -> impl Iterator<Item = &str> + '_ {
		self.groups.iter().map(|(label, _)| label.as_str())
	}

	/// Switch the visible section; out-of-range indices are ignored.
	pub fn select_group(&mut self, index: usize) {
		if index < self.groups.len() {
			self.active_group = index;
		}
	}

	/// Cities of the currently visible section.
	#[must_use]
	pub fn active_cities(&self) -> &[String] {
		match self.groups.get(self.active_group) {
			Some((_, cities)) => cities.as_slice(),
			None => &[],
		}
	}

	/// Choose a city from the visible section, returning its name.
	pub fn choose(&mut self, index: usize) -> Option<&str> {
		let (_, cities) = self.groups.get(self.active_group)?;
		let city = cities.get(index)?;
		self.chosen = Some((self.active_group, index));
		Some(city.as_str())
	}

	#[must_use]
	pub fn chosen_city(&self) -> Option<&str> {
		let (group, index) = self.chosen?;
		self.groups
			.get(group)
			.and_then(|(_, cities)| cities.get(index))
			.map(String::as_str)
	}
}

/// Single-choice list of searchable layers (the radio rows).
#[derive(Debug, Default)]
pub struct LayerPicker {
	names: Vec<String>,
	checked: Option<usize>,
}

impl LayerPicker {
	#[must_use]
	pub fn new(names: Vec<String>) -> Self {
		Self {
			names,
			checked: None,
		}
	}

	/// Append a newly registered layer to the list.
	pub fn push(&mut self, name: impl Into<String>) {
		self.names.push(name.into());
	}

	#[must_use]
	pub fn names(&self) -> &[String] {
		&self.names
	}

	/// Check a layer row, returning its name.
	pub fn check(&mut self, index: usize) -> Option<&str> {
		let name = self.names.get(index)?;
		self.checked = Some(index);
		Some(name.as_str())
	}

	#[must_use]
	pub fn checked_name(&self) -> Option<&str> {
		self.checked
			.and_then(|index| self.names.get(index))
			.map(String::as_str)
	}
}

/// 1-based page links under the result list.
#[derive(Debug, Default)]
pub struct PagerBar {
	page_count: usize,
	active: usize,
}

impl PagerBar {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Rebuild the links for a new result set, activating page 1.
	pub fn set_page_count(&mut self, page_count: usize) {
		self.page_count = page_count;
		self.active = usize::from(page_count > 0);
	}

	/// Remove all links.
	pub fn reset(&mut self) {
		self.page_count = 0;
		self.active = 0;
	}

	#[must_use]
	pub fn page_count(&self) -> usize {
		self.page_count
	}

	/// Page numbers to render as links.
	pub fn pages(&self) -> impl Iterator<Item = usize> {
		1..=self.page_count
	}

	/// Activate a page link; returns whether the page exists.
	pub fn select(&mut self, page: usize) -> bool {
		if (1..=self.page_count).contains(&page) {
			self.active = page;
			true
		} else {
			false
		}
	}

	#[must_use]
	pub fn active_page(&self) -> Option<usize> {
		(self.active > 0).then_some(self.active)
	}
}
