//! Tests for the in-session workout store.

use uuid::Uuid;
use waymark::geo::LatLng;
use waymark::workouts::{Workout, WorkoutKind, WorkoutStore};

fn run_at(lat: f64) -> Workout {
    Workout::new(WorkoutKind::Running, LatLng::new(lat, 0.0), 5.0, 25.0, 178.0)
        .expect("valid workout")
}

#[test]
fn test_append_and_find_by_id() {
    let mut store = WorkoutStore::new();
    let workout = run_at(51.5);
    let id = workout.id();

    store.append(workout);

    let found = store.find_by_id(id).expect("appended workout is findable");
    assert_eq!(found.id(), id);
    assert_eq!(found.coords(), LatLng::new(51.5, 0.0));
}

#[test]
fn test_find_by_id_returns_only_the_matching_record() {
    let mut store = WorkoutStore::new();
    let first = run_at(1.0);
    let second = run_at(2.0);
    let second_id = second.id();

    store.append(first);
    store.append(second);

    let found = store.find_by_id(second_id).unwrap();
    assert_eq!(found.coords(), LatLng::new(2.0, 0.0));
}

#[test]
fn test_unknown_id_yields_none() {
    let mut store = WorkoutStore::new();
    store.append(run_at(51.5));

    assert!(store.find_by_id(Uuid::new_v4()).is_none());
}

#[test]
fn test_insertion_order_is_preserved() {
    let mut store = WorkoutStore::new();
    let ids: Vec<_> = (0..5)
        .map(|i| {
            let workout = run_at(f64::from(i));
            let id = workout.id();
            store.append(workout);
            id
        })
        .collect();

    let stored: Vec<_> = store.iter().map(|w| w.id()).collect();
    assert_eq!(stored, ids);
}

#[test]
fn test_len_and_is_empty() {
    let mut store = WorkoutStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);

    store.append(run_at(51.5));
    assert!(!store.is_empty());
    assert_eq!(store.len(), 1);
}
