//! Synchronizes the selected result with the highlighted map features.

use log::{debug, warn};

use waypost_widget_api::{
	Bounds, Feature, FeatureId, HighlightPalette, MapPort, ResultKind, ResultRecord, ResultSet,
};

/// Owns the association between the active result set and the map.
///
/// The linkage holds direct references to the features it added and to the
/// ones currently styled as selected; it never queries the map for state.
/// The selection pass only restyles and moves the camera, so it cannot
/// re-enter the render cycle that triggered it.
#[derive(Debug, Default)]
pub struct FeatureLinkage {
	features: Vec<Feature>,
	origin: Option<ResultKind>,
	selected: Vec<FeatureId>,
	palette: HighlightPalette,
}

impl FeatureLinkage {
	#[must_use]
	pub fn new(palette: HighlightPalette) -> Self {
		Self {
			palette,
			..Self::default()
		}
	}

	/// Track a new result set and add its features to the map.
	///
	/// Callers clear the previous set first; loading does not remove stale
	/// features on its own.
	pub fn load(&mut self, set: &ResultSet, map: &mut dyn MapPort) {
		if !set.has_unique_filter_keys() {
			warn!("result set contains duplicate filter keys; selection will update every match");
		}
		self.features = set.features.clone();
		self.origin = Some(set.origin);
		self.selected.clear();
		map.add_features(&self.features);
	}

	/// Select every feature whose record matches `filter_key`.
	///
	/// Deselects the previous selection, restyles and pops up each match,
	/// then moves the camera to the aggregate bounds of the whole result
	/// layer: a single-point extent is flown to, anything else is fitted.
	pub fn select_by_filter_key(
		&mut self,
		filter_key: &str,
		records: &[ResultRecord],
		map: &mut dyn MapPort,
	) {
		for id in std::mem::take(&mut self.selected) {
			if let Some(feature) = self.feature(id) {
				map.set_style(id, &self.palette.style_for(feature.geometry, false));
			}
		}

		let matches: Vec<FeatureId> = records
			.iter()
			.filter(|record| record.filter_key == filter_key)
			.map(|record| record.feature)
			.collect();
		if matches.is_empty() {
			debug!("no feature matches filter key '{filter_key}'");
			return;
		}

		for &id in &matches {
			if let Some(feature) = self.feature(id) {
				map.set_style(id, &self.palette.style_for(feature.geometry, true));
				map.open_popup(id);
			}
		}
		self.selected = matches;

		// The camera follows the whole result layer, not the matched subset.
		if let Some(bounds) = self.aggregate_bounds() {
			if bounds.is_single_point() {
				map.fly_to(bounds.center());
			} else {
				map.fit_bounds(bounds);
			}
		}
	}

	/// Detach the result set from the map.
	///
	/// Geocoded results are transient overlays and are removed outright;
	/// layer-filtered results belong to a layer the user is still browsing,
	/// so their features stay and only lose the highlight styling. A second
	/// call is a no-op.
	pub fn clear(&mut self, map: &mut dyn MapPort) {
		let Some(origin) = self.origin.take() else {
			return;
		};
		map.close_popup();
		match origin {
			ResultKind::Geocoded => {
				let ids: Vec<FeatureId> = self.features.iter().map(|feature| feature.id).collect();
				map.remove_features(&ids);
			}
			ResultKind::LayerFiltered => {
				for feature in &self.features {
					map.set_style(
						feature.id,
						&self.palette.style_for(feature.geometry, false),
					);
				}
			}
		}
		self.features.clear();
		self.selected.clear();
	}

	#[must_use]
	pub fn is_active(&self) -> bool {
		self.origin.is_some()
	}

	/// Features currently styled as selected.
	#[must_use]
	pub fn selected_ids(&self) -> &[FeatureId] {
		&self.selected
	}

	fn feature(&self, id: FeatureId) -> Option<&Feature> {
		self.features.iter().find(|feature| feature.id == id)
	}

	fn aggregate_bounds(&self) -> Option<Bounds> {
		let mut features = self.features.iter();
		let mut bounds = features.next()?.bounds;
		for feature in features {
			bounds.extend_bounds(&feature.bounds);
		}
		Some(bounds)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use waypost_widget_api::{FeatureStyle, LatLng, ResultSet};

	#[derive(Debug, PartialEq)]
	enum MapOp {
		Add(usize),
		Remove(usize),
		Style(FeatureId, bool),
		Popup(FeatureId),
		ClosePopup,
		FlyTo(LatLng),
		FitBounds(Bounds),
	}

	#[derive(Default)]
	struct RecordingMap {
		ops: Vec<MapOp>,
	}

	fn is_selected(style: &FeatureStyle) -> bool {
		match style {
			FeatureStyle::Marker(icon) => icon.class_name == "select-marker-icon",
			FeatureStyle::Path(path) => path.color == "red",
		}
	}

	impl MapPort for RecordingMap {
		fn add_features(&mut self, features: &[Feature]) {
			self.ops.push(MapOp::Add(features.len()));
		}

		fn remove_features(&mut self, ids: &[FeatureId]) {
			self.ops.push(MapOp::Remove(ids.len()));
		}

		fn set_style(&mut self, id: FeatureId, style: &FeatureStyle) {
			self.ops.push(MapOp::Style(id, is_selected(style)));
		}

		fn open_popup(&mut self, id: FeatureId) {
			self.ops.push(MapOp::Popup(id));
		}

		fn close_popup(&mut self) {
			self.ops.push(MapOp::ClosePopup);
		}

		fn fly_to(&mut self, target: LatLng) {
			self.ops.push(MapOp::FlyTo(target));
		}

		fn fit_bounds(&mut self, bounds: Bounds) {
			self.ops.push(MapOp::FitBounds(bounds));
		}

		fn set_interactions_enabled(&mut self, _enabled: bool) {}
	}

	fn geocoded_set(positions: &[LatLng]) -> ResultSet {
		let mut records = Vec::new();
		let mut features = Vec::new();
		for (index, position) in positions.iter().enumerate() {
			let id = FeatureId::allocate();
			records.push(ResultRecord::geocoded(
				format!("hit-{index}"),
				"somewhere",
				id,
			));
			features.push(Feature::point(id, *position));
		}
		ResultSet::new(ResultKind::Geocoded, records, features)
	}

	#[test]
	fn selection_restyles_match_and_fits_layer_bounds() {
		let set = geocoded_set(&[LatLng::new(0.0, 0.0), LatLng::new(2.0, 2.0)]);
		let mut map = RecordingMap::default();
		let mut linkage = FeatureLinkage::default();

		linkage.load(&set, &mut map);
		linkage.select_by_filter_key("hit-1", &set.records, &mut map);

		let selected_id = set.records[1].feature;
		assert!(map.ops.contains(&MapOp::Style(selected_id, true)));
		assert!(map.ops.contains(&MapOp::Popup(selected_id)));
		// Two distinct points: the camera fits, it does not fly.
		assert!(
			map.ops
				.iter()
				.any(|op| matches!(op, MapOp::FitBounds(_)))
		);
		assert_eq!(linkage.selected_ids(), &[selected_id]);
	}

	#[test]
	fn single_point_layer_flies_instead_of_fitting() {
		let position = LatLng::new(41.0, 2.0);
		let set = geocoded_set(&[position]);
		let mut map = RecordingMap::default();
		let mut linkage = FeatureLinkage::default();

		linkage.load(&set, &mut map);
		linkage.select_by_filter_key("hit-0", &set.records, &mut map);

		assert!(map.ops.contains(&MapOp::FlyTo(position)));
		assert!(!map.ops.iter().any(|op| matches!(op, MapOp::FitBounds(_))));
	}

	#[test]
	fn reselection_deselects_the_previous_feature() {
		let set = geocoded_set(&[LatLng::new(0.0, 0.0), LatLng::new(2.0, 2.0)]);
		let mut map = RecordingMap::default();
		let mut linkage = FeatureLinkage::default();

		linkage.load(&set, &mut map);
		linkage.select_by_filter_key("hit-0", &set.records, &mut map);
		map.ops.clear();
		linkage.select_by_filter_key("hit-1", &set.records, &mut map);

		let first = set.records[0].feature;
		let second = set.records[1].feature;
		assert!(map.ops.contains(&MapOp::Style(first, false)));
		assert!(map.ops.contains(&MapOp::Style(second, true)));
		assert_eq!(linkage.selected_ids(), &[second]);
	}

	#[test]
	fn duplicate_keys_select_every_match() {
		let first = FeatureId::allocate();
		let second = FeatureId::allocate();
		let records = vec![
			ResultRecord::layer_filtered(
				"kind",
				"park",
				waypost_widget_api::GeometryKind::Polygon,
				first,
			),
			ResultRecord::layer_filtered(
				"kind",
				"park",
				waypost_widget_api::GeometryKind::Polygon,
				second,
			),
		];
		let features = vec![
			Feature::with_bounds(
				first,
				waypost_widget_api::GeometryKind::Polygon,
				Bounds::new(LatLng::new(0.0, 0.0), LatLng::new(1.0, 1.0)),
			),
			Feature::with_bounds(
				second,
				waypost_widget_api::GeometryKind::Polygon,
				Bounds::new(LatLng::new(2.0, 2.0), LatLng::new(3.0, 3.0)),
			),
		];
		let set = ResultSet::new(ResultKind::LayerFiltered, records, features);

		let mut map = RecordingMap::default();
		let mut linkage = FeatureLinkage::default();
		linkage.load(&set, &mut map);
		linkage.select_by_filter_key("park", &set.records, &mut map);

		assert_eq!(linkage.selected_ids(), &[first, second]);
		assert!(map.ops.contains(&MapOp::Style(first, true)));
		assert!(map.ops.contains(&MapOp::Style(second, true)));
	}

	#[test]
	fn clear_removes_geocoded_overlays() {
		let set = geocoded_set(&[LatLng::new(0.0, 0.0), LatLng::new(2.0, 2.0)]);
		let mut map = RecordingMap::default();
		let mut linkage = FeatureLinkage::default();

		linkage.load(&set, &mut map);
		map.ops.clear();
		linkage.clear(&mut map);

		assert_eq!(map.ops, vec![MapOp::ClosePopup, MapOp::Remove(2)]);
		assert!(!linkage.is_active());
	}

	#[test]
	fn clear_keeps_layer_features_with_default_style() {
		let id = FeatureId::allocate();
		let records = vec![ResultRecord::layer_filtered(
			"name",
			"Harbor",
			waypost_widget_api::GeometryKind::Point,
			id,
		)];
		let features = vec![Feature::point(id, LatLng::new(1.0, 1.0))];
		let set = ResultSet::new(ResultKind::LayerFiltered, records, features);

		let mut map = RecordingMap::default();
		let mut linkage = FeatureLinkage::default();
		linkage.load(&set, &mut map);
		map.ops.clear();
		linkage.clear(&mut map);

		assert_eq!(map.ops, vec![MapOp::ClosePopup, MapOp::Style(id, false)]);
	}

	#[test]
	fn second_clear_is_a_no_op() {
		let set = geocoded_set(&[LatLng::new(0.0, 0.0)]);
		let mut map = RecordingMap::default();
		let mut linkage = FeatureLinkage::default();

		linkage.load(&set, &mut map);
		linkage.clear(&mut map);
		let ops_after_first = map.ops.len();
		linkage.clear(&mut map);

		assert_eq!(map.ops.len(), ops_after_first);
	}
}
