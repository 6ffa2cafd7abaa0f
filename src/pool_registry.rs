//! Maps `ComponentId -> Pool<T>`, lazily, and owns every pool it creates.

use crate::component::component_id;
use crate::pool::{ErasedPool, Pool};

#[derive(Default)]
pub(crate) struct PoolRegistry {
    // Indexed by `ComponentId`. `None` is the null-pool sentinel for ids not
    // yet used by this Manager; destruction drops entries in id order,
    // which is the order `Vec`'s own drop glue walks them in.
    pools: Vec<Option<Box<dyn ErasedPool>>>,
}

impl PoolRegistry {
    pub fn new() -> Self {
        Self { pools: Vec::new() }
    }

    pub fn get_or_create<T: 'static>(&mut self) -> &mut Pool<T> {
        let id = component_id::<T>().index();
        if self.pools.len() <= id {
            self.pools.resize_with(id + 1, || None);
        }
        let slot = &mut self.pools[id];
        if slot.is_none() {
            *slot = Some(Box::new(Pool::<T>::new()));
        }
        slot.as_mut()
            .unwrap()
            .as_any_mut()
            .downcast_mut::<Pool<T>>()
            .expect("pool registry: component id collided with a different type")
    }

    pub fn pool_of<T: 'static>(&self) -> Option<&Pool<T>> {
        let id = component_id::<T>().index();
        self.pools
            .get(id)
            .and_then(|slot| slot.as_ref())
            .map(|pool| {
                pool.as_any()
                    .downcast_ref::<Pool<T>>()
                    .expect("pool registry: component id collided with a different type")
            })
    }

    pub fn pool_of_mut<T: 'static>(&mut self) -> Option<&mut Pool<T>> {
        let id = component_id::<T>().index();
        self.pools
            .get_mut(id)
            .and_then(|slot| slot.as_mut())
            .map(|pool| {
                pool.as_any_mut()
                    .downcast_mut::<Pool<T>>()
                    .expect("pool registry: component id collided with a different type")
            })
    }

    /// Type-erased sweep over every registered pool, used by `refresh` to
    /// tear down all components of a dying entity without needing to know
    /// which component types it owned.
    pub fn virtual_remove_all(&mut self, entity_id: u32) {
        for slot in &mut self.pools {
            if let Some(pool) = slot {
                pool.virtual_remove(entity_id);
            }
        }
    }
}
