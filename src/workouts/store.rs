//! In-session workout collection.

use uuid::Uuid;

use crate::workouts::types::Workout;

/// Insertion-ordered collection of the session's recorded workouts.
///
/// Owned by the session controller; records are appended on successful
/// submission and live until the session ends. There is no removal.
#[derive(Debug, Default)]
pub struct WorkoutStore {
    workouts: Vec<Workout>,
}

impl WorkoutStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            workouts: Vec::new(),
        }
    }

    /// Append a workout at the end of the display order.
    ///
    /// Id uniqueness is the caller's contract (v4 generation).
    pub fn append(&mut self, workout: Workout) {
        tracing::debug!("recorded {} ({})", workout.description(), workout.id());
        self.workouts.push(workout);
    }

    /// Look up a workout by id. Linear scan over the session-sized store.
    pub fn find_by_id(&self, id: Uuid) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id() == id)
    }

    /// Workouts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Workout> {
        self.workouts.iter()
    }

    /// Number of recorded workouts.
    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    /// True when nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }
}
