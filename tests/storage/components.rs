//! Integration tests for component storage.
//!
//! Covers round-trips, default reads, lazy array creation, and slot
//! clearing on release.

use carom_foundation::Entity;
use carom_storage::{Component, Store};

#[derive(Copy, Clone, Debug, Default, PartialEq)]
struct Health {
    current: i32,
    max: i32,
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
struct Velocity {
    x: f32,
    y: f32,
    z: f32,
}

impl Component for Health {}
impl Component for Velocity {}

// =============================================================================
// Round Trips
// =============================================================================

#[test]
fn set_then_get_returns_the_written_value() {
    let mut store = Store::new(16).unwrap();
    let e = store.allocate().unwrap();

    let written = Health {
        current: 73,
        max: 100,
    };
    store.set(e, written);

    assert_eq!(store.get::<Health>(e), written);
}

#[test]
fn rewriting_a_slot_overwrites_it() {
    let mut store = Store::new(16).unwrap();
    let e = store.allocate().unwrap();

    store.set(e, Health { current: 1, max: 1 });
    store.set(e, Health { current: 2, max: 9 });

    assert_eq!(store.get::<Health>(e), Health { current: 2, max: 9 });
}

#[test]
fn component_types_do_not_interfere() {
    let mut store = Store::new(16).unwrap();
    let e = store.allocate().unwrap();

    store.set(e, Health { current: 5, max: 10 });
    store.set(e, Velocity { x: 1.0, y: 2.0, z: 3.0 });

    assert_eq!(store.get::<Health>(e), Health { current: 5, max: 10 });
    assert_eq!(store.get::<Velocity>(e), Velocity { x: 1.0, y: 2.0, z: 3.0 });
}

#[test]
fn slots_track_entities_independently() {
    let mut store = Store::new(16).unwrap();
    let ids = store.allocate_many(3).unwrap();

    for (i, &e) in ids.iter().enumerate() {
        store.set(e, Health {
            current: i as i32,
            max: 100,
        });
    }

    for (i, &e) in ids.iter().enumerate() {
        assert_eq!(store.get::<Health>(e).current, i as i32);
    }
}

// =============================================================================
// Defaults and Lazy Arrays
// =============================================================================

#[test]
fn never_written_type_reads_as_default() {
    let mut store = Store::new(16).unwrap();
    let e = store.allocate().unwrap();

    assert_eq!(store.get::<Health>(e), Health::default());
    assert_eq!(store.type_count(), 0);
}

#[test]
fn arrays_appear_on_first_write_and_persist() {
    let mut store = Store::new(16).unwrap();
    let e = store.allocate().unwrap();

    store.set(e, Health::default());
    assert_eq!(store.type_count(), 1);

    store.set(e, Velocity::default());
    assert_eq!(store.type_count(), 2);

    store.release(e);
    // Release clears slots but never drops arrays
    assert_eq!(store.type_count(), 2);
}

#[test]
fn neighbours_of_a_written_slot_read_default() {
    let mut store = Store::new(16).unwrap();
    let ids = store.allocate_many(3).unwrap();

    store.set(ids[1], Health { current: 9, max: 9 });

    assert_eq!(store.get::<Health>(ids[0]), Health::default());
    assert_eq!(store.get::<Health>(ids[2]), Health::default());
}

// =============================================================================
// Clearing on Release
// =============================================================================

#[test]
fn reused_id_starts_from_default_state() {
    let mut store = Store::new(1).unwrap();
    let e = store.allocate().unwrap();
    store.set(e, Health {
        current: 50,
        max: 50,
    });

    store.release(e);
    let reused = store.allocate().unwrap();

    // Capacity 1, so the pool hands the same id back
    assert_eq!(reused, e);
    assert_eq!(store.get::<Health>(reused), Health::default());
}

#[test]
fn release_clears_all_component_types_for_the_id() {
    let mut store = Store::new(8).unwrap();
    let ids = store.allocate_many(2).unwrap();

    for &e in &ids {
        store.set(e, Health { current: 3, max: 4 });
        store.set(e, Velocity { x: 5.0, y: 6.0, z: 7.0 });
    }

    store.release(ids[0]);

    assert_eq!(store.get::<Health>(ids[0]), Health::default());
    assert_eq!(store.get::<Velocity>(ids[0]), Velocity::default());
    // The other entity's slots are untouched
    assert_eq!(store.get::<Health>(ids[1]), Health { current: 3, max: 4 });
    assert_eq!(
        store.get::<Velocity>(ids[1]),
        Velocity { x: 5.0, y: 6.0, z: 7.0 }
    );
}

// =============================================================================
// Preconditions
// =============================================================================

#[test]
#[should_panic(expected = "out of range")]
fn writing_past_capacity_is_a_fatal_assertion() {
    let mut store = Store::new(4).unwrap();
    store.set(Entity::new(4), Health::default());
}

#[test]
#[should_panic(expected = "out of range")]
fn reading_past_capacity_is_a_fatal_assertion() {
    let store = Store::new(4).unwrap();
    let _ = store.get::<Health>(Entity::new(100));
}
