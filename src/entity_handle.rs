//! `Entity` — the opaque, copyable token that names an entity.

use crate::error::HandleError;
use crate::foreach::{Queryable, Removable};
use crate::manager::Manager;

/// A trivially copyable reference to an entity owned by some [`Manager`].
///
/// Every operation that dereferences an `Entity` re-validates it against the
/// `Manager` passed in: a stale generation, a null handle, or a handle from
/// a different `Manager` is a precondition violation and panics (see
/// spec.md §7). Use the `try_*` family (or [`Entity::is_valid`]) where a
/// non-panicking check is wanted instead.
///
/// Unlike the literal `{manager_ref, handle_index, captured_version}` tuple
/// spec.md describes, this type does not embed a pointer back to its
/// `Manager` — see DESIGN.md's Open Question on handle shape for why a raw
/// pointer would be unsound in a `Copy`, `'static` handle, and how the
/// `manager_id` tag below reconstructs the same "foreign manager" detection
/// without one.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Entity {
    pub(crate) manager_id: u32,
    pub(crate) handle_index: u32,
    pub(crate) captured_version: u32,
}

impl Entity {
    /// The sentinel handle: `captured_version == 0`, always invalid.
    pub fn null() -> Entity {
        Entity {
            manager_id: 0,
            handle_index: 0,
            captured_version: 0,
        }
    }

    #[inline]
    pub fn is_null(self) -> bool {
        self.captured_version == 0
    }

    #[inline]
    pub fn handle_index(self) -> u32 {
        self.handle_index
    }

    pub fn is_valid(self, manager: &Manager) -> bool {
        manager.is_valid(self)
    }

    pub fn destroy(self, manager: &mut Manager) {
        manager.destroy(self)
    }

    pub fn try_destroy(self, manager: &mut Manager) -> Result<(), HandleError> {
        manager.try_destroy(self)
    }

    pub fn add_component<T: 'static>(self, manager: &mut Manager, value: T) -> &T {
        manager.add_component(self, value)
    }

    pub fn get_component<T: 'static>(self, manager: &Manager) -> &T {
        manager.get_component(self)
    }

    pub fn try_get_component<T: 'static>(self, manager: &Manager) -> Option<&T> {
        manager.try_get_component(self)
    }

    pub fn get_component_mut<T: 'static>(self, manager: &mut Manager) -> &mut T {
        manager.get_component_mut(self)
    }

    pub fn try_get_component_mut<T: 'static>(self, manager: &mut Manager) -> Option<&mut T> {
        manager.try_get_component_mut(self)
    }

    pub fn has_component<T: 'static>(self, manager: &Manager) -> bool {
        manager.has_component::<T>(self)
    }

    pub fn has_components<Q: Queryable>(self, manager: &Manager) -> bool {
        manager.has_components::<Q>(self)
    }

    pub fn remove_component<T: 'static>(self, manager: &mut Manager) {
        manager.remove_component::<T>(self)
    }

    pub fn remove_components<Q: Removable>(self, manager: &mut Manager) {
        manager.remove_components::<Q>(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_handle_is_always_invalid() {
        let manager = Manager::new();
        assert!(Entity::null().is_null());
        assert!(!Entity::null().is_valid(&manager));
    }
}
