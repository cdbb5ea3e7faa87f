//! Attribute table shown in a feature's info popup.

use waypost_widget_api::Feature;

/// Ordered `(attribute, value)` rows for the popup body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeTable {
	rows: Vec<(String, String)>,
}

impl AttributeTable {
	/// Collect the feature's properties in their source order.
	#[must_use]
	pub fn from_feature(feature: &Feature) -> Self {
		let rows = feature
			.properties
			.iter()
			.map(|(name, value)| (name.clone(), value.clone()))
			.collect();
		Self { rows }
	}

	#[must_use]
	pub fn rows(&self) -> &[(String, String)] {
		&self.rows
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}
}
