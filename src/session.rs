//! Session controller: the state machine between map, form, and store.

use uuid::Uuid;

use crate::geo::LatLng;
use crate::location::LocationError;
use crate::map::{MapAdapter, Marker};
use crate::ui::form::{FormController, FormSubmission};
use crate::workouts::{ValidationError, Workout, WorkoutKind, WorkoutStore};

/// Alert shown when the start location cannot be determined.
pub const LOCATION_ALERT: &str = "Unable to get your location!";
/// Alert shown when a submission fails validation.
pub const VALIDATION_ALERT: &str = "Inputs have to be positive numbers!";

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// Waiting for the start location; the map is not interactive yet
    #[default]
    AwaitingLocation,
    /// Map centered and interactive, form hidden
    MapReady,
    /// A click is pending and the form is open
    FormOpen,
}

/// Orchestrates the session: location to map, clicks to form, submissions
/// to records, records to markers and list entries.
///
/// Sole owner of the workout store, the pending click, and the form state.
/// Generic over the map capability so tests can drive it with a recording
/// implementation.
pub struct SessionController<M: MapAdapter> {
    phase: SessionPhase,
    map: M,
    form: FormController,
    store: WorkoutStore,
    pending_click: Option<LatLng>,
    alert: Option<String>,
    default_zoom: u8,
}

impl<M: MapAdapter> SessionController<M> {
    /// Create a controller awaiting its start location.
    pub fn new(map: M, default_zoom: u8) -> Self {
        Self {
            phase: SessionPhase::AwaitingLocation,
            map,
            form: FormController::new(),
            store: WorkoutStore::new(),
            pending_click: None,
            alert: None,
            default_zoom,
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// The session's recorded workouts.
    pub fn store(&self) -> &WorkoutStore {
        &self.store
    }

    /// The workout form.
    pub fn form(&self) -> &FormController {
        &self.form
    }

    /// Mutable access for the form rendering pass.
    pub fn form_mut(&mut self) -> &mut FormController {
        &mut self.form
    }

    /// The map capability.
    pub fn map(&self) -> &M {
        &self.map
    }

    /// Mutable access for the map rendering pass.
    pub fn map_mut(&mut self) -> &mut M {
        &mut self.map
    }

    /// Coordinates of the last unconfirmed map click.
    pub fn pending_click(&self) -> Option<LatLng> {
        self.pending_click
    }

    /// The pending user-visible alert, if any.
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    /// Acknowledge the pending alert.
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Start-location result from the location service.
    ///
    /// On success the map becomes interactive; on failure the session stays
    /// in `AwaitingLocation` behind an alert, with no automatic retry.
    pub fn on_location(&mut self, result: Result<LatLng, LocationError>) {
        if self.phase != SessionPhase::AwaitingLocation {
            return;
        }
        match result {
            Ok(fix) => {
                self.map.initialize(fix, self.default_zoom);
                self.phase = SessionPhase::MapReady;
                tracing::info!("session ready at {}", fix);
            }
            Err(e) => {
                tracing::warn!("staying in awaiting-location: {}", e);
                self.alert = Some(LOCATION_ALERT.to_string());
            }
        }
    }

    /// Map click: remember the coordinates and open the form.
    ///
    /// A new click silently replaces a prior unsubmitted one.
    pub fn on_map_click(&mut self, coords: LatLng) {
        if self.phase == SessionPhase::AwaitingLocation {
            return;
        }
        self.pending_click = Some(coords);
        self.form.open();
        self.phase = SessionPhase::FormOpen;
    }

    /// Activity type changed in the form.
    pub fn on_kind_change(&mut self, kind: WorkoutKind) {
        self.form.toggle_fields_for(kind);
    }

    /// Form submitted: validate, record, render.
    ///
    /// On validation failure the form stays open and populated and the
    /// pending click is kept, so the user can correct and resubmit.
    pub fn on_submit(&mut self) {
        if self.phase != SessionPhase::FormOpen {
            return;
        }
        let Some(coords) = self.pending_click else {
            return;
        };

        match self.build_workout(coords) {
            Ok(workout) => {
                self.map.place_marker(Marker {
                    coords,
                    popup_text: workout.description(),
                    kind: workout.kind(),
                });
                tracing::info!("recorded {}", workout.description());
                self.store.append(workout);
                self.form.clear_and_hide();
                self.pending_click = None;
                self.phase = SessionPhase::MapReady;
            }
            Err(e) => {
                tracing::debug!("submission rejected: {}", e);
                self.alert = Some(VALIDATION_ALERT.to_string());
            }
        }
    }

    /// List entry clicked: recenter on the workout, if it exists.
    pub fn on_entry_click(&mut self, id: Uuid) {
        match self.store.find_by_id(id) {
            Some(workout) => {
                self.map.recenter(workout.coords(), self.default_zoom, true);
            }
            None => {
                tracing::debug!("list click for unknown workout id {}", id);
            }
        }
    }

    fn build_workout(&self, coords: LatLng) -> Result<Workout, ValidationError> {
        let FormSubmission {
            kind,
            distance,
            duration,
            extra,
        } = self.form.read_submission();

        Workout::new(
            kind,
            coords,
            parse_field(&distance),
            parse_field(&duration),
            parse_field(&extra),
        )
    }
}

/// Numeric coercion of a raw form field; anything unparseable becomes NaN
/// and falls to validation.
fn parse_field(value: &str) -> f64 {
    value.trim().parse::<f64>().unwrap_or(f64::NAN)
}
