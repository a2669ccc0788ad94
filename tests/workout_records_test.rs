//! Tests for workout record construction and derived metrics.

use waymark::geo::LatLng;
use waymark::workouts::{ValidationError, Workout, WorkoutDetails, WorkoutKind};

fn coords() -> LatLng {
    LatLng::new(51.5, -0.12)
}

fn pace_of(workout: &Workout) -> f64 {
    match workout.details() {
        WorkoutDetails::Run {
            pace_min_per_km, ..
        } => *pace_min_per_km,
        other => panic!("expected run details, got {:?}", other),
    }
}

fn speed_of(workout: &Workout) -> f64 {
    match workout.details() {
        WorkoutDetails::Cycle { speed_km_per_h, .. } => *speed_km_per_h,
        other => panic!("expected cycle details, got {:?}", other),
    }
}

fn rejected_field(result: Result<Workout, ValidationError>) -> &'static str {
    match result {
        Err(ValidationError::InvalidNumber { field, .. }) => field,
        Ok(_) => panic!("expected a validation error"),
    }
}

#[test]
fn test_running_pace_derivation() {
    let workout = Workout::new(WorkoutKind::Running, coords(), 5.0, 25.0, 178.0)
        .expect("valid running workout");

    assert_eq!(workout.kind(), WorkoutKind::Running);
    assert_eq!(workout.distance_km(), 5.0);
    assert_eq!(workout.duration_min(), 25.0);
    assert_eq!(pace_of(&workout), 5.0);
}

#[test]
fn test_cycling_speed_derivation() {
    let workout = Workout::new(WorkoutKind::Cycling, coords(), 20.0, 60.0, 400.0)
        .expect("valid cycling workout");

    assert_eq!(speed_of(&workout), 20.0);
    match workout.details() {
        WorkoutDetails::Cycle {
            elevation_gain_m, ..
        } => assert_eq!(*elevation_gain_m, 400.0),
        other => panic!("expected cycle details, got {:?}", other),
    }
}

#[test]
fn test_derived_metrics_round_to_two_decimals() {
    let run = Workout::new(WorkoutKind::Running, coords(), 3.0, 10.0, 170.0).unwrap();
    assert_eq!(pace_of(&run), 3.33);

    let ride = Workout::new(WorkoutKind::Cycling, coords(), 27.5, 52.0, 0.0).unwrap();
    assert_eq!(speed_of(&ride), 31.73);
}

#[test]
fn test_tracking_shares_the_run_shape() {
    let workout = Workout::new(WorkoutKind::Tracking, coords(), 10.0, 50.0, 160.0)
        .expect("valid tracking workout");

    assert_eq!(workout.kind(), WorkoutKind::Tracking);
    assert_eq!(pace_of(&workout), 5.0);
}

#[test]
fn test_rejects_bad_distance() {
    for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
        let result = Workout::new(WorkoutKind::Running, coords(), bad, 25.0, 178.0);
        assert_eq!(rejected_field(result), "distance", "distance {}", bad);
    }
}

#[test]
fn test_rejects_bad_duration() {
    for bad in [0.0, -25.0, f64::NAN, f64::NEG_INFINITY] {
        let result = Workout::new(WorkoutKind::Cycling, coords(), 20.0, bad, 400.0);
        assert_eq!(rejected_field(result), "duration", "duration {}", bad);
    }
}

#[test]
fn test_rejects_bad_cadence_for_run_shaped_kinds() {
    for kind in [WorkoutKind::Running, WorkoutKind::Tracking] {
        for bad in [0.0, -178.0, f64::NAN, f64::INFINITY] {
            let result = Workout::new(kind, coords(), 5.0, 25.0, bad);
            assert_eq!(rejected_field(result), "cadence", "{:?} cadence {}", kind, bad);
        }
    }
}

#[test]
fn test_cycling_elevation_is_not_validated() {
    for elevation in [400.0, 0.0, -120.0] {
        let workout = Workout::new(WorkoutKind::Cycling, coords(), 20.0, 60.0, elevation)
            .expect("elevation is stored as given");
        match workout.details() {
            WorkoutDetails::Cycle {
                elevation_gain_m, ..
            } => assert_eq!(*elevation_gain_m, elevation),
            other => panic!("expected cycle details, got {:?}", other),
        }
    }

    let workout = Workout::new(WorkoutKind::Cycling, coords(), 20.0, 60.0, f64::NAN)
        .expect("even a non-finite elevation is accepted");
    match workout.details() {
        WorkoutDetails::Cycle {
            elevation_gain_m, ..
        } => assert!(elevation_gain_m.is_nan()),
        other => panic!("expected cycle details, got {:?}", other),
    }
}

#[test]
fn test_ids_are_unique() {
    let first = Workout::new(WorkoutKind::Running, coords(), 5.0, 25.0, 178.0).unwrap();
    let second = Workout::new(WorkoutKind::Running, coords(), 5.0, 25.0, 178.0).unwrap();
    assert_ne!(first.id(), second.id());
}

#[test]
fn test_description_names_kind_and_date() {
    let workout = Workout::new(WorkoutKind::Cycling, coords(), 20.0, 60.0, 400.0).unwrap();
    let expected = format!("Cycling on {}", workout.created_at().format("%B %-d"));
    assert_eq!(workout.description(), expected);
}
