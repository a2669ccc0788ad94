//! Geographic primitives shared by the map panel and workout records.

use serde::{Deserialize, Serialize};

/// Latitude bound of the Web-Mercator projection.
const MAX_MERCATOR_LAT: f64 = 85.051_128_779_806_59;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude in degrees, positive north
    pub lat: f64,
    /// Longitude in degrees, positive east
    pub lng: f64,
}

impl LatLng {
    /// Create a coordinate pair.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl std::fmt::Display for LatLng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lng)
    }
}

/// Side length in pixels of the square world map at the given zoom level.
fn world_size(zoom: u8) -> f64 {
    256.0 * 2f64.powi(i32::from(zoom))
}

/// Project a coordinate to Web-Mercator world pixels at the given zoom.
///
/// Latitudes beyond the Mercator bound are clamped to the map edge.
pub fn project(coords: LatLng, zoom: u8) -> (f64, f64) {
    let size = world_size(zoom);
    let lat = coords
        .lat
        .clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT)
        .to_radians();
    let x = (coords.lng + 180.0) / 360.0 * size;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / std::f64::consts::PI) / 2.0 * size;
    (x, y)
}

/// Invert [`project`]: world pixels back to a coordinate.
pub fn unproject(x: f64, y: f64, zoom: u8) -> LatLng {
    let size = world_size(zoom);
    let lng = x / size * 360.0 - 180.0;
    let n = std::f64::consts::PI * (1.0 - 2.0 * y / size);
    let lat = n.sinh().atan().to_degrees();
    LatLng::new(lat, lng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_unproject_round_trip() {
        let london = LatLng::new(51.5074, -0.1278);
        let (x, y) = project(london, 16);
        let back = unproject(x, y, 16);
        assert!((back.lat - london.lat).abs() < 1e-9);
        assert!((back.lng - london.lng).abs() < 1e-9);
    }

    #[test]
    fn test_project_origin_is_map_center() {
        let (x, y) = project(LatLng::new(0.0, 0.0), 0);
        assert!((x - 128.0).abs() < 1e-9);
        assert!((y - 128.0).abs() < 1e-9);
    }

    #[test]
    fn test_project_clamps_polar_latitudes() {
        let (_, y_pole) = project(LatLng::new(90.0, 0.0), 3);
        let (_, y_bound) = project(LatLng::new(MAX_MERCATOR_LAT, 0.0), 3);
        assert_eq!(y_pole, y_bound);
    }

    #[test]
    fn test_is_finite() {
        assert!(LatLng::new(51.5, -0.12).is_finite());
        assert!(!LatLng::new(f64::NAN, 0.0).is_finite());
        assert!(!LatLng::new(0.0, f64::INFINITY).is_finite());
    }
}
