//! Process-wide component type identity.
//!
//! Any component type is assigned a dense, monotonically increasing id the
//! first time it is used by *any* [`crate::Manager`] in the process. The
//! assignment is a `TypeId`-keyed lookup guarded by a single mutex, backed by
//! an atomic counter for the actual id allocation.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Mutex, OnceLock};

/// A dense, process-wide identifier for a component type.
///
/// Constant for the process lifetime once assigned. Never reused, even if
/// the owning type is never instantiated again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ComponentId(pub(crate) u32);

impl ComponentId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

static NEXT_COMPONENT_ID: AtomicU32 = AtomicU32::new(0);
static REGISTRY: OnceLock<Mutex<HashMap<TypeId, ComponentId>>> = OnceLock::new();

/// Returns the process-wide [`ComponentId`] for `T`, assigning one on first
/// call. Every later call for the same `T`, in any Manager, returns the same
/// id.
pub(crate) fn component_id<T: 'static>() -> ComponentId {
    let registry = REGISTRY.get_or_init(|| Mutex::new(HashMap::new()));
    let type_id = TypeId::of::<T>();

    let mut registry = registry.lock().expect("component id registry poisoned");
    *registry
        .entry(type_id)
        .or_insert_with(|| ComponentId(NEXT_COMPONENT_ID.fetch_add(1, Ordering::Relaxed)))
}
