//! Waymark - Map-Based Workout Diary
//!
//! Click a point on the map, fill in the short form, and the session
//! records a run, track session, or ride tied to that point, with a map
//! marker and a synchronized list entry. Workouts live for the session
//! only; the configuration file is the sole persisted state.

pub mod geo;
pub mod location;
pub mod map;
pub mod session;
pub mod storage;
pub mod ui;
pub mod workouts;

// Re-export commonly used types
pub use map::{MapAdapter, Marker};
pub use session::{SessionController, SessionPhase};
pub use storage::config::AppConfig;
pub use workouts::{Workout, WorkoutKind, WorkoutStore};
