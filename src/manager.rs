//! The Manager: creates entities, dispatches component operations, and runs
//! the two-phase `refresh` that reclaims destroyed entities.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::entity_handle::Entity;
use crate::entity_table::EntityTable;
use crate::error::HandleError;
use crate::foreach::{Queryable, Removable};
use crate::handle_table::HandleTable;
use crate::pool_registry::PoolRegistry;

static NEXT_MANAGER_ID: AtomicU32 = AtomicU32::new(1);

/// Owns the EntityTable, HandleTable, and PoolRegistry for one simulation
/// world. Single-threaded: all mutation happens in program order, and there
/// is no internal locking (see spec.md §5).
pub struct Manager {
    pub(crate) id: u32,
    entity_table: EntityTable,
    handle_table: HandleTable,
    pool_registry: PoolRegistry,
    /// Alive count as of the last `refresh` (also `entity_count()`).
    size: usize,
    /// High-water mark of claimed EntityTable/HandleTable rows since the
    /// last `refresh`.
    size_next: usize,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new()
    }
}

impl Manager {
    pub fn new() -> Self {
        Manager {
            id: NEXT_MANAGER_ID.fetch_add(1, Ordering::Relaxed),
            entity_table: EntityTable::new(),
            handle_table: HandleTable::new(),
            pool_registry: PoolRegistry::new(),
            size: 0,
            size_next: 0,
        }
    }

    /// Pre-sizes the EntityTable/HandleTable to hold at least `capacity`
    /// entities without growing again. A hint only; `create_entity` still
    /// grows further if needed.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut manager = Self::new();
        manager.entity_table.grow_to(capacity);
        manager.handle_table.grow_to(capacity);
        manager
    }

    /// The number of alive entities as of the last `refresh`.
    pub fn entity_count(&self) -> usize {
        self.size
    }

    pub fn create_entity(&mut self) -> Entity {
        if self.size_next >= self.entity_table.len() {
            let new_cap = (self.entity_table.len() + 10) * 2;
            self.entity_table.grow_to(new_cap);
            self.handle_table.grow_to(new_cap);
        }

        let slot = self.size_next;
        self.size_next += 1;

        let handle_index = {
            let record = self.entity_table.get_mut(slot);
            record.alive = true;
            record.handle_index as usize
        };
        self.handle_table.set_entity_index(handle_index, slot as u32);
        let counter = self.handle_table.bump(handle_index);

        Entity {
            manager_id: self.id,
            handle_index: handle_index as u32,
            captured_version: counter,
        }
    }

    /// Validates `entity` against this Manager and returns its current
    /// EntityTable slot on success.
    fn validate(&self, entity: Entity) -> Result<usize, HandleError> {
        if entity.captured_version == 0 {
            return Err(HandleError::Null);
        }
        if entity.manager_id != self.id {
            return Err(HandleError::ForeignManager);
        }
        let handle = self
            .handle_table
            .get(entity.handle_index as usize)
            .ok_or(HandleError::Null)?;
        if handle.counter != entity.captured_version {
            return Err(HandleError::StaleGeneration);
        }
        Ok(handle.entity_index as usize)
    }

    pub fn is_valid(&self, entity: Entity) -> bool {
        self.validate(entity).is_ok()
    }

    pub fn destroy(&mut self, entity: Entity) {
        self.try_destroy(entity)
            .expect("destroy: entity handle is invalid or has already been reclaimed")
    }

    pub fn try_destroy(&mut self, entity: Entity) -> Result<(), HandleError> {
        let slot = self.validate(entity)?;
        self.entity_table.get_mut(slot).alive = false;
        Ok(())
    }

    pub fn add_component<T: 'static>(&mut self, entity: Entity, value: T) -> &T {
        let slot = self
            .validate(entity)
            .expect("add_component: entity handle is invalid or has already been reclaimed");
        let data_index = self.entity_table.get(slot).data_index;
        let pool = self.pool_registry.get_or_create::<T>();
        assert!(
            !pool.has(data_index),
            "add_component: entity already owns a component of this type"
        );
        pool.add(data_index, value)
    }

    pub fn get_component<T: 'static>(&self, entity: Entity) -> &T {
        self.try_get_component(entity)
            .expect("get_component: entity does not own a component of this type")
    }

    pub fn try_get_component<T: 'static>(&self, entity: Entity) -> Option<&T> {
        let slot = self
            .validate(entity)
            .expect("get_component: entity handle is invalid or has already been reclaimed");
        let data_index = self.entity_table.get(slot).data_index;
        self.pool_registry.pool_of::<T>()?.get(data_index)
    }

    pub fn get_component_mut<T: 'static>(&mut self, entity: Entity) -> &mut T {
        self.try_get_component_mut(entity)
            .expect("get_component_mut: entity does not own a component of this type")
    }

    pub fn try_get_component_mut<T: 'static>(&mut self, entity: Entity) -> Option<&mut T> {
        let slot = self
            .validate(entity)
            .expect("get_component_mut: entity handle is invalid or has already been reclaimed");
        let data_index = self.entity_table.get(slot).data_index;
        self.pool_registry.pool_of_mut::<T>()?.get_mut(data_index)
    }

    pub fn has_component<T: 'static>(&self, entity: Entity) -> bool {
        let slot = self
            .validate(entity)
            .expect("has_component: entity handle is invalid or has already been reclaimed");
        let data_index = self.entity_table.get(slot).data_index;
        self.pool_registry
            .pool_of::<T>()
            .map_or(false, |pool| pool.has(data_index))
    }

    /// Idempotent: a no-op if `entity` does not own a `T`.
    pub fn remove_component<T: 'static>(&mut self, entity: Entity) {
        let slot = self
            .validate(entity)
            .expect("remove_component: entity handle is invalid or has already been reclaimed");
        let data_index = self.entity_table.get(slot).data_index;
        if let Some(pool) = self.pool_registry.pool_of_mut::<T>() {
            pool.remove(data_index);
        }
    }

    pub fn has_components<Q: Queryable>(&self, entity: Entity) -> bool {
        let slot = self
            .validate(entity)
            .expect("has_components: entity handle is invalid or has already been reclaimed");
        let data_index = self.entity_table.get(slot).data_index;
        Q::has(self, data_index)
    }

    /// Removes every component type in `Q` from `entity`. Idempotent per
    /// type, same as [`Manager::remove_component`]: a type `entity` does not
    /// own is simply skipped.
    pub fn remove_components<Q: Removable>(&mut self, entity: Entity) {
        let slot = self
            .validate(entity)
            .expect("remove_components: entity handle is invalid or has already been reclaimed");
        let data_index = self.entity_table.get(slot).data_index;
        Q::remove(self, data_index);
    }

    /// Invokes `f` once per live entity, ascending by entity id, for which
    /// every type in `Q` is present. Adding or removing a `Q` component from
    /// within `f` is unspecified behavior (spec.md §4.5): callers must defer
    /// structural mutation to after the pass, or call `refresh` between
    /// passes.
    pub fn for_each<Q: Queryable>(&self, mut f: impl FnMut(Q::Item<'_>)) {
        for slot in 0..self.size {
            let record = self.entity_table.get(slot);
            if !record.alive {
                continue;
            }
            let data_index = record.data_index;
            if Q::has(self, data_index) {
                f(unsafe { Q::fetch(self, data_index) });
            }
        }
    }

    /// Like [`Manager::for_each`], but yields `&mut T` for a single component
    /// type. Restricted to one type (rather than a `Q: Queryable` tuple) so
    /// that the mutable borrow handed to `f` is always of exactly one pool's
    /// backing buffer — spec.md's `Queryable` tuples compose `has`/`fetch`
    /// over an arbitrary number of *distinct* pools, which for `&mut`
    /// access would require either runtime-checked aliasing (as the
    /// teacher's `atomic_refcell`-backed `WriteComponent` joins do) or
    /// asserting the tuple's types are pairwise distinct; neither is needed
    /// by anything spec.md specifies, so multi-type mutable `ForEach` is
    /// left out (see DESIGN.md).
    pub fn for_each_mut<T: 'static>(&mut self, mut f: impl FnMut(&mut T)) {
        let size = self.size;
        let entity_table = &self.entity_table;
        let pool = match self.pool_registry.pool_of_mut::<T>() {
            Some(pool) => pool,
            None => return,
        };
        for slot in 0..size {
            let record = entity_table.get(slot);
            if !record.alive {
                continue;
            }
            if let Some(value) = pool.get_mut(record.data_index) {
                f(value);
            }
        }
    }

    pub(crate) fn pool_registry(&self) -> &PoolRegistry {
        &self.pool_registry
    }

    pub(crate) fn pool_registry_mut(&mut self) -> &mut PoolRegistry {
        &mut self.pool_registry
    }

    /// The two-phase reclamation pass: partitions `[0, size_next)` into a
    /// live prefix and a dead suffix, bumping versions and tearing down
    /// components for entities that died, and relocating (without bumping)
    /// entities that merely needed to be compacted toward the front.
    ///
    /// `refresh` is idempotent: calling it twice in a row with no
    /// intervening mutation leaves the same observable state as calling it
    /// once.
    pub fn refresh(&mut self) {
        let mut dead_i = 0usize;
        let mut alive_i = self.size_next;

        loop {
            while dead_i < alive_i && self.entity_table.get(dead_i).alive {
                dead_i += 1;
            }
            if dead_i >= alive_i {
                break;
            }

            let mut found_alive = false;
            while alive_i > dead_i {
                alive_i -= 1;
                if self.entity_table.get(alive_i).alive {
                    found_alive = true;
                    break;
                }
                // `alive_i` can decrement down to `dead_i` itself when the
                // remaining suffix is entirely dead; that slot is finalized
                // exactly once below (the `!found_alive` branch), not here,
                // so it isn't swept twice.
                if alive_i > dead_i {
                    self.finalize_dead(alive_i);
                }
            }

            if !found_alive {
                self.finalize_dead(dead_i);
                break;
            }

            self.finalize_dead(dead_i);
            self.entity_table.swap(dead_i, alive_i);
            self.fixup_handle(dead_i);
            self.fixup_handle(alive_i);
            dead_i += 1;
        }

        self.size = dead_i;
        self.size_next = dead_i;
    }

    /// Bumps the generation and tears down components for the (already
    /// dead, not-yet-finalized) entity occupying `slot`.
    fn finalize_dead(&mut self, slot: usize) {
        let record = *self.entity_table.get(slot);
        self.pool_registry.virtual_remove_all(record.data_index);
        self.handle_table.bump(record.handle_index as usize);
    }

    /// Re-points `HandleTable[records[slot].handle_index].entity_index` at
    /// `slot`, restoring invariant 2 after a swap.
    fn fixup_handle(&mut self, slot: usize) {
        let handle_index = self.entity_table.get(slot).handle_index as usize;
        self.handle_table.set_entity_index(handle_index, slot as u32);
    }

    /// Resets size/size_next to 0 and every EntityRecord/HandleRecord to the
    /// post-grow default. Does **not** run component destructors: any
    /// entity still alive at the time of `clear` leaves its components
    /// orphaned-but-present in their pools (found again, and dropped, when
    /// the Manager itself is dropped), and any already-dead entity would
    /// have had its components torn down by the `refresh` that killed it.
    pub fn clear(&mut self) {
        for slot in 0..self.entity_table.len() {
            self.entity_table.reset(slot);
        }
        for i in 0..self.handle_table.len() {
            self.handle_table.reset(i);
        }
        self.size = 0;
        self.size_next = 0;
    }
}
