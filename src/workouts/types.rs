//! Workout records and their validated construction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::geo::LatLng;
use crate::workouts::validation::{all_finite, all_positive};

/// Activity type recorded for a workout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutKind {
    /// Outdoor run
    #[default]
    Running,
    /// Track session; shares the running metrics
    Tracking,
    /// Bike ride
    Cycling,
}

impl WorkoutKind {
    /// Whether this kind carries cadence and pace (the run-shaped payload).
    pub fn is_run_shaped(&self) -> bool {
        matches!(self, WorkoutKind::Running | WorkoutKind::Tracking)
    }
}

impl std::fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkoutKind::Running => write!(f, "Running"),
            WorkoutKind::Tracking => write!(f, "Tracking"),
            WorkoutKind::Cycling => write!(f, "Cycling"),
        }
    }
}

/// Per-kind payload with the metric derived once at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkoutDetails {
    /// Running/tracking payload
    Run {
        /// Steps per minute
        cadence_spm: f64,
        /// Minutes per kilometre, rounded to 2 decimals
        pace_min_per_km: f64,
    },
    /// Cycling payload
    Cycle {
        /// Elevation gain in metres; stored as given, sign unconstrained
        elevation_gain_m: f64,
        /// Kilometres per hour, rounded to 2 decimals
        speed_km_per_h: f64,
    },
}

/// Rejected workout submission.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required numeric field is not a finite, positive number
    #[error("invalid value for {field}: {value}")]
    InvalidNumber {
        /// Which field was rejected
        field: &'static str,
        /// The offending value
        value: f64,
    },
}

/// A recorded exercise session tied to a map coordinate.
///
/// Records are immutable once constructed: the derived metric is computed
/// exactly once from the stored distance and duration, and no field can be
/// changed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    id: Uuid,
    created_at: DateTime<Utc>,
    coords: LatLng,
    distance_km: f64,
    duration_min: f64,
    kind: WorkoutKind,
    details: WorkoutDetails,
}

/// Round to 2 decimal places for display-grade derived metrics.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn require_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if all_finite(&[value]) && all_positive(&[value]) {
        Ok(())
    } else {
        Err(ValidationError::InvalidNumber { field, value })
    }
}

impl Workout {
    /// Construct a validated workout record.
    ///
    /// `extra` is the cadence (steps/min) for running and tracking, and the
    /// elevation gain (metres) for cycling. Distance and duration must be
    /// finite and positive for every kind; cadence likewise for the
    /// run-shaped kinds. Elevation gain is stored as given.
    pub fn new(
        kind: WorkoutKind,
        coords: LatLng,
        distance_km: f64,
        duration_min: f64,
        extra: f64,
    ) -> Result<Self, ValidationError> {
        require_positive("distance", distance_km)?;
        require_positive("duration", duration_min)?;

        let details = if kind.is_run_shaped() {
            require_positive("cadence", extra)?;
            WorkoutDetails::Run {
                cadence_spm: extra,
                pace_min_per_km: round2(duration_min / distance_km),
            }
        } else {
            WorkoutDetails::Cycle {
                elevation_gain_m: extra,
                speed_km_per_h: round2(distance_km / (duration_min / 60.0)),
            }
        };

        Ok(Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            coords,
            distance_km,
            duration_min,
            kind,
            details,
        })
    }

    /// Unique, stable identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// The map coordinate this workout is tied to.
    pub fn coords(&self) -> LatLng {
        self.coords
    }

    /// Distance in kilometres.
    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Duration in minutes.
    pub fn duration_min(&self) -> f64 {
        self.duration_min
    }

    /// Activity type.
    pub fn kind(&self) -> WorkoutKind {
        self.kind
    }

    /// Per-kind payload with the derived metric.
    pub fn details(&self) -> &WorkoutDetails {
        &self.details
    }

    /// Display string used for the marker popup and the list entry header,
    /// e.g. "Running on August 5".
    pub fn description(&self) -> String {
        format!("{} on {}", self.kind, self.created_at.format("%B %-d"))
    }
}
