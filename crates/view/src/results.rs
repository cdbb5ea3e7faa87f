//! Paginated result-list state and its page-boundary arithmetic.

use log::warn;

use waypost_widget_api::ResultRecord;

use crate::items::ResultItem;

/// Fixed number of result items per page.
pub const PAGE_SIZE: usize = 8;

/// Owns the current result records, the page arithmetic over them, and the
/// single selected record.
///
/// Rendering a page is never passive: it moves the selection to the first
/// record of that page, and the caller must follow up with a map-linkage pass
/// for [`ResultsPager::selected_filter_key`]. The pager itself never touches
/// the map, which keeps the render/select cycle from re-entering itself.
#[derive(Debug, Default)]
pub struct ResultsPager {
	records: Vec<ResultRecord>,
	/// Index of the selected record, held directly rather than looked up
	/// from rendered output.
	selected: Option<usize>,
}

impl ResultsPager {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Replace the current result set and reset the selection.
	///
	/// An empty sequence is a precondition violation by the caller (empty
	/// outcomes surface as failure notices upstream); it is logged and
	/// ignored. Returns whether the set was replaced.
	pub fn load(&mut self, records: Vec<ResultRecord>) -> bool {
		if records.is_empty() {
			warn!("ignoring empty result set; empty outcomes surface as notices");
			return false;
		}
		self.records = records;
		self.selected = None;
		true
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.records.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	#[must_use]
	pub fn records(&self) -> &[ResultRecord] {
		&self.records
	}

	/// Number of pages at [`PAGE_SIZE`] records per page.
	#[must_use]
	pub fn page_count(&self) -> usize {
		self.records.len().div_ceil(PAGE_SIZE)
	}

	/// Half-open record range `[start, end)` covered by a 1-based page.
	///
	/// Out-of-range pages are a caller contract violation: debug builds
	/// assert, release builds clamp into the valid range.
	#[must_use]
	pub fn page_bounds(&self, page: usize) -> (usize, usize) {
		let last = self.page_count().max(1);
		debug_assert!(
			(1..=last).contains(&page),
			"page {page} out of range 1..={last}"
		);
		let page = page.clamp(1, last);

		let len = self.records.len();
		if page == 1 && len < PAGE_SIZE {
			(0, len)
		} else if page * PAGE_SIZE > len {
			(PAGE_SIZE * (page - 1), len)
		} else {
			(PAGE_SIZE * (page - 1), page * PAGE_SIZE)
		}
	}

	/// Produce the render items for a 1-based page.
	///
	/// Side effect: the first record of the page becomes the selected record
	/// and its item is marked selected.
	pub fn render_page(&mut self, page: usize) -> Vec<ResultItem> {
		if self.records.is_empty() {
			return Vec::new();
		}
		let (start, end) = self.page_bounds(page);
		self.selected = Some(start);
		self.records[start..end]
			.iter()
			.enumerate()
			.map(|(offset, record)| ResultItem::from_record(record, offset == 0))
			.collect()
	}

	/// Move the selection to the first record matching `filter_key`.
	///
	/// Scans the entire result set, not only the rendered page. Returns
	/// whether a record matched.
	pub fn select_by_key(&mut self, filter_key: &str) -> bool {
		match self
			.records
			.iter()
			.position(|record| record.filter_key == filter_key)
		{
			Some(index) => {
				self.selected = Some(index);
				true
			}
			None => false,
		}
	}

	#[must_use]
	pub fn selected_record(&self) -> Option<&ResultRecord> {
		self.selected.and_then(|index| self.records.get(index))
	}

	#[must_use]
	pub fn selected_filter_key(&self) -> Option<&str> {
		self.selected_record()
			.map(|record| record.filter_key.as_str())
	}

	/// Drop all records and the selection.
	pub fn clear(&mut self) {
		self.records.clear();
		self.selected = None;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use waypost_widget_api::{FeatureId, GeometryKind, ResultRecord};

	fn sample_records(count: usize) -> Vec<ResultRecord> {
		(0..count)
			.map(|i| {
				ResultRecord::layer_filtered(
					"name",
					format!("feature-{i}"),
					GeometryKind::Point,
					FeatureId::new(i as u64),
				)
			})
			.collect()
	}

	fn loaded(count: usize) -> ResultsPager {
		let mut pager = ResultsPager::new();
		assert!(pager.load(sample_records(count)));
		pager
	}

	#[test]
	fn empty_load_is_ignored() {
		let mut pager = loaded(3);
		assert!(!pager.load(Vec::new()));
		assert_eq!(pager.len(), 3, "previous records must survive");
	}

	#[test]
	fn page_count_is_ceiling_division() {
		assert_eq!(loaded(1).page_count(), 1);
		assert_eq!(loaded(8).page_count(), 1);
		assert_eq!(loaded(9).page_count(), 2);
		assert_eq!(loaded(16).page_count(), 2);
		assert_eq!(loaded(17).page_count(), 3);
	}

	#[test]
	fn short_first_page_covers_whole_set() {
		assert_eq!(loaded(5).page_bounds(1), (0, 5));
	}

	#[test]
	fn middle_page_spans_a_full_page() {
		assert_eq!(loaded(20).page_bounds(2), (8, 16));
	}

	#[test]
	fn last_page_ends_at_record_count() {
		assert_eq!(loaded(20).page_bounds(3), (16, 20));
	}

	#[test]
	fn pages_partition_the_record_range() {
		for count in 1..=40 {
			let pager = loaded(count);
			let mut covered = 0;
			for page in 1..=pager.page_count() {
				let (start, end) = pager.page_bounds(page);
				assert_eq!(start, covered, "pages must not overlap or skip");
				assert!(end > start, "pages must be non-empty");
				covered = end;
			}
			assert_eq!(covered, count, "pages must cover every record");
		}
	}

	#[test]
	fn render_selects_first_record_of_page() {
		let mut pager = loaded(20);
		let items = pager.render_page(2);
		assert_eq!(items.len(), 8);
		assert!(items[0].selected);
		assert!(items[1..].iter().all(|item| !item.selected));
		assert_eq!(pager.selected_filter_key(), Some("feature-8"));
	}

	#[test]
	fn select_by_key_scans_beyond_current_page() {
		let mut pager = loaded(20);
		pager.render_page(1);
		assert!(pager.select_by_key("feature-17"));
		assert_eq!(pager.selected_filter_key(), Some("feature-17"));
		assert!(!pager.select_by_key("missing"));
		assert_eq!(pager.selected_filter_key(), Some("feature-17"));
	}

	#[test]
	fn out_of_range_page_clamps_in_release() {
		let pager = loaded(9);
		if cfg!(debug_assertions) {
			return;
		}
		assert_eq!(pager.page_bounds(5), (8, 9));
		assert_eq!(pager.page_bounds(0), (0, 8));
	}

	#[test]
	fn clear_drops_records_and_selection() {
		let mut pager = loaded(3);
		pager.render_page(1);
		pager.clear();
		assert!(pager.is_empty());
		assert!(pager.selected_filter_key().is_none());
		assert_eq!(pager.page_count(), 0);
	}
}
