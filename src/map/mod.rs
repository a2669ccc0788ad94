//! Map capability consumed by the session controller.

pub mod panel;

pub use panel::MapPanel;

use crate::geo::LatLng;
use crate::workouts::WorkoutKind;

/// A placed map marker with its always-open popup label.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Where the pin sits
    pub coords: LatLng,
    /// Popup label, e.g. "Running on August 5"
    pub popup_text: String,
    /// Workout kind; selects the marker accent
    pub kind: WorkoutKind,
}

/// Marker placement and view control.
///
/// The session controller drives the map exclusively through this trait;
/// tests substitute a recording implementation.
pub trait MapAdapter {
    /// Center the view and make the map interactive.
    fn initialize(&mut self, center: LatLng, zoom: u8);

    /// Pin a marker with its popup label.
    fn place_marker(&mut self, marker: Marker);

    /// Move the view to the given center, optionally animated.
    fn recenter(&mut self, center: LatLng, zoom: u8, animate: bool);
}
