//! Render models for individual result-list entries.

use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

use waypost_widget_api::{GeometryKind, ResultRecord};

/// Display-width budget for a result label before it is truncated.
pub const MAX_LABEL_WIDTH: usize = 48;

/// Icon class shown next to a result, derived from the feature geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultIcon {
	Marker,
	Line,
	Polygon,
}

impl ResultIcon {
	#[must_use]
	pub const fn for_geometry(geometry: GeometryKind) -> Self {
		match geometry {
			GeometryKind::Point | GeometryKind::MultiPoint => Self::Marker,
			GeometryKind::LineString | GeometryKind::MultiLineString => Self::Line,
			GeometryKind::Polygon | GeometryKind::MultiPolygon => Self::Polygon,
		}
	}
}

/// One rendered result-list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultItem {
	pub icon: ResultIcon,
	pub primary: String,
	pub secondary: Option<String>,
	/// Carries the record's filter key so clicks can run the linkage pass.
	pub filter_key: String,
	pub selected: bool,
}

impl ResultItem {
	/// Build the render model for one record.
	#[must_use]
	pub fn from_record(record: &ResultRecord, selected: bool) -> Self {
		Self {
			icon: ResultIcon::for_geometry(record.geometry),
			primary: truncate_label(&record.display_primary, MAX_LABEL_WIDTH),
			secondary: record
				.display_secondary
				.as_deref()
				.map(|text| truncate_label(text, MAX_LABEL_WIDTH)),
			filter_key: record.filter_key.clone(),
			selected,
		}
	}
}

/// Truncate `text` to `max_width` display columns, ellipsized.
fn truncate_label(text: &str, max_width: usize) -> String {
	if text.width() <= max_width {
		return text.to_string();
	}
	let (truncated, _) = text.unicode_truncate(max_width.saturating_sub(1));
	format!("{truncated}…")
}
