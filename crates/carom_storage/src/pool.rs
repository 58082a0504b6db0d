//! Entity id pool with fixed capacity.
//!
//! The full id range `[0, capacity)` is created up front; allocation and
//! release only move ids between the pool and the caller. Ids come out in
//! FIFO order, so reuse is deterministic.

use std::collections::VecDeque;

use carom_foundation::{Entity, Error, Result};

/// FIFO pool of available entity ids.
///
/// Construction seeds the pool with every id in `[0, capacity)` in ascending
/// order. An id is either in the pool or held by a caller; the pool itself
/// never grows or shrinks its id range.
#[derive(Debug, Clone)]
pub struct EntityPool {
    capacity: usize,
    available: VecDeque<Entity>,
}

impl EntityPool {
    /// Creates a pool holding ids `0..capacity`.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidCapacity`](carom_foundation::ErrorKind::InvalidCapacity)
    /// if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::invalid_capacity());
        }

        let mut available = VecDeque::with_capacity(capacity);
        for index in 0..capacity {
            available.push_back(Entity::new(index as u32));
        }

        Ok(Self {
            capacity,
            available,
        })
    }

    /// Returns the total id range size.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of ids currently in the pool.
    #[must_use]
    pub fn available(&self) -> usize {
        self.available.len()
    }

    /// Returns the number of ids currently held by callers.
    #[must_use]
    pub fn allocated(&self) -> usize {
        self.capacity - self.available.len()
    }

    /// Returns true if no ids are left in the pool.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.available.is_empty()
    }

    /// Takes one id from the front of the pool.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::PoolExhausted`](carom_foundation::ErrorKind::PoolExhausted)
    /// if the pool is empty. The pool is unchanged by a failed call.
    pub fn allocate(&mut self) -> Result<Entity> {
        self.available
            .pop_front()
            .ok_or_else(|| Error::pool_exhausted(1, 0))
    }

    /// Takes `count` ids from the front of the pool, in pool order.
    ///
    /// The batch is atomic: if fewer than `count` ids are available the call
    /// fails and no ids are taken.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::PoolExhausted`](carom_foundation::ErrorKind::PoolExhausted)
    /// if `count` exceeds the available pool.
    pub fn allocate_many(&mut self, count: usize) -> Result<Vec<Entity>> {
        if count > self.available.len() {
            return Err(Error::pool_exhausted(count, self.available.len()));
        }
        Ok(self.available.drain(..count).collect())
    }

    /// Returns an id to the back of the pool.
    ///
    /// The caller must only release ids it currently holds. Releasing an id
    /// twice, or one that was never allocated, corrupts the pool; this is a
    /// documented misuse precondition and is not guarded.
    pub fn release(&mut self, entity: Entity) {
        self.available.push_back(entity);
    }
}
