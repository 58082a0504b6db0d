//! The entity/component store.
//!
//! A `Store` owns a fixed-capacity id pool and one dense array per component
//! type. This is the whole machine: allocate ids, copy component values in
//! and out by slot, give ids back.

use carom_foundation::{Entity, Result};

use crate::component::{Component, ComponentArrays};
use crate::pool::EntityPool;

/// Fixed-capacity entity/component store.
///
/// Entity ids index directly into every component array, trading
/// O(capacity) memory per component type for O(1) access with no lookup
/// table. Callers that need many sparsely-used component types must either
/// oversize the capacity or accept that cost.
///
/// All operations take `&mut self` or `&self`; the store performs no
/// internal synchronization and is meant to be driven from one thread (or
/// behind external synchronization).
#[derive(Debug)]
pub struct Store {
    pool: EntityPool,
    arrays: ComponentArrays,
}

impl Store {
    /// Creates a store with `capacity` entity slots.
    ///
    /// All ids start in the available pool; no component arrays exist until
    /// the first write of each type.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidCapacity`](carom_foundation::ErrorKind::InvalidCapacity)
    /// if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            pool: EntityPool::new(capacity)?,
            arrays: ComponentArrays::new(capacity),
        })
    }

    /// Returns the fixed entity capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.pool.capacity()
    }

    /// Returns the number of ids still available for allocation.
    #[must_use]
    pub fn available(&self) -> usize {
        self.pool.available()
    }

    /// Returns the number of ids currently held by callers.
    #[must_use]
    pub fn allocated(&self) -> usize {
        self.pool.allocated()
    }

    /// Returns the number of component types written so far.
    #[must_use]
    pub fn type_count(&self) -> usize {
        self.arrays.type_count()
    }

    /// Allocates one entity id.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::PoolExhausted`](carom_foundation::ErrorKind::PoolExhausted)
    /// when the pool is empty; size the capacity generously rather than
    /// treating this as a routine condition.
    pub fn allocate(&mut self) -> Result<Entity> {
        self.pool.allocate()
    }

    /// Allocates `count` entity ids as one atomic batch.
    ///
    /// Equivalent to `count` single allocations collected in order, except
    /// that an oversized request fails whole: no ids are taken.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::PoolExhausted`](carom_foundation::ErrorKind::PoolExhausted)
    /// if `count` exceeds the available pool.
    pub fn allocate_many(&mut self, count: usize) -> Result<Vec<Entity>> {
        self.pool.allocate_many(count)
    }

    /// Releases an entity id back to the pool.
    ///
    /// Every component slot for this id is reset to its type's default
    /// value, so a later reuse of the id observes no stale data.
    ///
    /// The caller must only release ids it currently holds; double release
    /// and use-after-release are unguarded misuse.
    pub fn release(&mut self, entity: Entity) {
        self.pool.release(entity);
        self.arrays.clear_entity(entity);
    }

    /// Writes a component value for an entity.
    ///
    /// The array for `T` is created (all slots default) on the first write
    /// of that type.
    ///
    /// # Panics
    ///
    /// Panics if `entity` is outside `[0, capacity)`.
    pub fn set<T: Component>(&mut self, entity: Entity, value: T) {
        self.arrays.set(entity, value);
    }

    /// Reads a component value for an entity, by copy.
    ///
    /// A type that was never written reads as `T::default()`.
    ///
    /// # Panics
    ///
    /// Panics if `entity` is outside `[0, capacity)`.
    #[must_use]
    pub fn get<T: Component>(&self, entity: Entity) -> T {
        self.arrays.get(entity)
    }
}
