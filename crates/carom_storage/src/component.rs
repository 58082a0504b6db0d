//! Dense component arrays with a type-keyed registry.
//!
//! Each component type gets one array of exactly `capacity` slots, created
//! lazily on first write. Slot `i` in every array belongs to entity `i`, so
//! the arrays stay aligned ("structure of arrays") without any index
//! remapping.

use std::any::{Any, TypeId};
use std::collections::HashMap;

use carom_foundation::Entity;

/// Marker trait for plain-data component types.
///
/// Components are copied in and out of storage by value; no reference to a
/// stored slot is ever handed out. `Default` supplies the zero value used
/// for slots that were never written and for clearing the slots of a
/// released entity.
pub trait Component: Copy + Default + 'static {}

/// Object-safe view of a component array.
///
/// Lets the registry reset one entity's slot in every array without knowing
/// the component types involved.
trait ErasedArray {
    fn reset_slot(&mut self, entity: Entity);
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// One dense array of component values, one slot per entity id.
struct ComponentArray<T: Component> {
    slots: Vec<T>,
}

impl<T: Component> ComponentArray<T> {
    fn new(capacity: usize) -> Self {
        Self {
            slots: vec![T::default(); capacity],
        }
    }
}

impl<T: Component> ErasedArray for ComponentArray<T> {
    fn reset_slot(&mut self, entity: Entity) {
        self.slots[entity.index()] = T::default();
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Registry of component arrays, keyed by component type.
///
/// Arrays are created on first write of a type and live for the registry's
/// lifetime. Reading a type that was never written yields the default value
/// without materializing an array.
pub struct ComponentArrays {
    capacity: usize,
    arrays: HashMap<TypeId, Box<dyn ErasedArray>>,
}

impl ComponentArrays {
    /// Creates an empty registry for `capacity` entity slots.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            arrays: HashMap::new(),
        }
    }

    /// Returns the slot count of every array in this registry.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of component types seen so far.
    #[must_use]
    pub fn type_count(&self) -> usize {
        self.arrays.len()
    }

    /// Returns true if an array for `T` has been created.
    #[must_use]
    pub fn has_array<T: Component>(&self) -> bool {
        self.arrays.contains_key(&TypeId::of::<T>())
    }

    /// Writes `value` into entity `entity`'s slot for type `T`.
    ///
    /// Creates the array for `T` (all slots default) if this is the first
    /// write of that type.
    ///
    /// # Panics
    ///
    /// Panics if `entity.index()` is outside `[0, capacity)`.
    pub fn set<T: Component>(&mut self, entity: Entity, value: T) {
        assert!(
            entity.index() < self.capacity,
            "entity {entity} out of range for capacity {}",
            self.capacity
        );

        let capacity = self.capacity;
        let array = self
            .arrays
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(ComponentArray::<T>::new(capacity)));

        array
            .as_any_mut()
            .downcast_mut::<ComponentArray<T>>()
            .expect("component array type mismatch")
            .slots[entity.index()] = value;
    }

    /// Reads entity `entity`'s value for type `T`.
    ///
    /// Returns `T::default()` if no value of that type was ever written for
    /// this entity.
    ///
    /// # Panics
    ///
    /// Panics if `entity.index()` is outside `[0, capacity)`.
    #[must_use]
    pub fn get<T: Component>(&self, entity: Entity) -> T {
        assert!(
            entity.index() < self.capacity,
            "entity {entity} out of range for capacity {}",
            self.capacity
        );

        self.arrays.get(&TypeId::of::<T>()).map_or_else(T::default, |array| {
            array
                .as_any()
                .downcast_ref::<ComponentArray<T>>()
                .expect("component array type mismatch")
                .slots[entity.index()]
        })
    }

    /// Resets entity `entity`'s slot to the default value in every array.
    ///
    /// Called when an entity is released so a later reuse of the same id
    /// starts from zeroed state.
    pub fn clear_entity(&mut self, entity: Entity) {
        for array in self.arrays.values_mut() {
            array.reset_slot(entity);
        }
    }
}

impl std::fmt::Debug for ComponentArrays {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentArrays")
            .field("capacity", &self.capacity)
            .field("type_count", &self.arrays.len())
            .finish()
    }
}
