/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Create a coordinate from latitude and longitude degrees.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A rectangular geographic extent used for camera fitting.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Bounds {
    south_west: LatLng,
    north_east: LatLng,
}

impl Bounds {
    /// Create a bounds from its south-west and north-east corners.
    #[must_use]
    pub fn new(south_west: LatLng, north_east: LatLng) -> Self {
        let mut bounds = Self::of(south_west);
        bounds.extend(north_east);
        bounds
    }

    /// Create a degenerate bounds covering a single point.
    #[must_use]
    pub const fn of(point: LatLng) -> Self {
        Self {
            south_west: point,
            north_east: point,
        }
    }

    /// Grow the bounds to include `point`.
    pub fn extend(&mut self, point: LatLng) {
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.south_west.lng = self.south_west.lng.min(point.lng);
        self.north_east.lat = self.north_east.lat.max(point.lat);
        self.north_east.lng = self.north_east.lng.max(point.lng);
    }

    /// Grow the bounds to include `other` entirely.
    pub fn extend_bounds(&mut self, other: &Bounds) {
        self.extend(other.south_west);
        self.extend(other.north_east);
    }

    /// Whether both corners coincide, i.e. the extent collapses to one point.
    ///
    /// Camera logic flies to the point instead of fitting a zero-area box.
    #[must_use]
    pub fn is_single_point(&self) -> bool {
        self.south_west.lat == self.north_east.lat && self.south_west.lng == self.north_east.lng
    }

    /// Whether `point` lies within the bounds, corners included.
    #[must_use]
    pub fn contains(&self, point: LatLng) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng <= self.north_east.lng
    }

    /// Midpoint of the extent.
    #[must_use]
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }

    #[must_use]
    pub const fn south_west(&self) -> LatLng {
        self.south_west
    }

    #[must_use]
    pub const fn north_east(&self) -> LatLng {
        self.north_east
    }
}

/// Geometry shape of a map feature, used to pick the display icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum GeometryKind {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
}

impl GeometryKind {
    /// Whether the geometry is rendered as a positioned marker rather than a path.
    #[must_use]
    pub const fn is_point_like(self) -> bool {
        matches!(self, Self::Point | Self::MultiPoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extend_grows_in_all_directions() {
        let mut bounds = Bounds::of(LatLng::new(10.0, 20.0));
        bounds.extend(LatLng::new(-5.0, 25.0));
        bounds.extend(LatLng::new(12.0, 15.0));

        assert_eq!(bounds.south_west(), LatLng::new(-5.0, 15.0));
        assert_eq!(bounds.north_east(), LatLng::new(12.0, 25.0));
        assert!(!bounds.is_single_point());
    }

    #[test]
    fn single_point_bounds_collapse() {
        let bounds = Bounds::of(LatLng::new(30.5, 104.0));
        assert!(bounds.is_single_point());
        assert_eq!(bounds.center(), LatLng::new(30.5, 104.0));
    }

    #[test]
    fn contains_includes_corners() {
        let bounds = Bounds::new(LatLng::new(0.0, 0.0), LatLng::new(10.0, 10.0));
        assert!(bounds.contains(LatLng::new(0.0, 0.0)));
        assert!(bounds.contains(LatLng::new(5.0, 5.0)));
        assert!(!bounds.contains(LatLng::new(10.1, 5.0)));
    }

    #[test]
    fn new_normalizes_swapped_corners() {
        let bounds = Bounds::new(LatLng::new(10.0, 10.0), LatLng::new(0.0, 0.0));
        assert_eq!(bounds.south_west(), LatLng::new(0.0, 0.0));
        assert_eq!(bounds.north_east(), LatLng::new(10.0, 10.0));
    }
}
