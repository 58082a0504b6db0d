//! Integration tests for entity handles.

use carom_foundation::Entity;

#[test]
fn entities_with_equal_indices_are_equal() {
    assert_eq!(Entity::new(0), Entity::new(0));
    assert_ne!(Entity::new(0), Entity::new(1));
}

#[test]
fn index_is_preserved() {
    for index in [0u32, 1, 41, 127, u32::MAX] {
        assert_eq!(Entity::new(index).index(), index as usize);
    }
}

#[test]
fn display_names_the_index() {
    assert_eq!(Entity::new(31).to_string(), "Entity(31)");
}

#[test]
fn entities_sort_by_index() {
    let mut handles = vec![Entity::new(3), Entity::new(0), Entity::new(2)];
    handles.sort();
    assert_eq!(
        handles,
        vec![Entity::new(0), Entity::new(2), Entity::new(3)]
    );
}
