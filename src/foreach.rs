//! `ForEach` over tuples of component types.
//!
//! A thin consumer of the storage substrate: iterating the currently live
//! prefix of the EntityTable and testing pool presence at each entity's
//! data-index. Grounded on the teacher's `define_join!` tuple-macro
//! expansion (`goggles::join`), simplified down from the teacher's general
//! `Join`/`Access`/`Mask` machinery (parallel joins, bitset combinators,
//! `MaybeJoin`) since spec.md needs only ascending-order iteration over a
//! fixed tuple of component types, not arbitrary combinators — that
//! generality is unneeded surface area for a single-threaded substrate
//! (concurrent iteration is a non-goal, spec.md §1/§5).

use crate::manager::Manager;

/// A single component type, or a tuple of up to eight of them, usable as the
/// query passed to [`Manager::has_components`] and [`Manager::for_each`].
pub trait Queryable {
    type Item<'a>;

    fn has(manager: &Manager, data_index: u32) -> bool;

    /// # Safety
    /// Must only be called when `Self::has(manager, data_index)` is `true`.
    unsafe fn fetch<'a>(manager: &'a Manager, data_index: u32) -> Self::Item<'a>;
}

impl<T: 'static> Queryable for T {
    type Item<'a> = &'a T;

    fn has(manager: &Manager, data_index: u32) -> bool {
        manager
            .pool_registry()
            .pool_of::<T>()
            .map_or(false, |pool| pool.has(data_index))
    }

    unsafe fn fetch<'a>(manager: &'a Manager, data_index: u32) -> &'a T {
        manager
            .pool_registry()
            .pool_of::<T>()
            .and_then(|pool| pool.get(data_index))
            .expect("Queryable::fetch called without a prior Queryable::has check")
    }
}

macro_rules! impl_queryable_tuple {
    ($($t:ident),+) => {
        impl<$($t: Queryable),+> Queryable for ($($t,)+) {
            type Item<'a> = ($($t::Item<'a>,)+);

            fn has(manager: &Manager, data_index: u32) -> bool {
                $($t::has(manager, data_index))&&+
            }

            unsafe fn fetch<'a>(manager: &'a Manager, data_index: u32) -> Self::Item<'a> {
                ($($t::fetch(manager, data_index),)+)
            }
        }
    };
}

impl_queryable_tuple!(A);
impl_queryable_tuple!(A, B);
impl_queryable_tuple!(A, B, C);
impl_queryable_tuple!(A, B, C, D);
impl_queryable_tuple!(A, B, C, D, E);
impl_queryable_tuple!(A, B, C, D, E, F);
impl_queryable_tuple!(A, B, C, D, E, F, G);
impl_queryable_tuple!(A, B, C, D, E, F, G, H);

/// A single component type, or a tuple of up to eight of them, usable as the
/// query passed to [`Manager::remove_components`]. Mirrors [`Queryable`]'s
/// tuple arities so `has_components::<(A, B)>` and
/// `remove_components::<(A, B)>` always accept the same shapes.
pub trait Removable {
    fn remove(manager: &mut Manager, data_index: u32);
}

impl<T: 'static> Removable for T {
    fn remove(manager: &mut Manager, data_index: u32) {
        if let Some(pool) = manager.pool_registry_mut().pool_of_mut::<T>() {
            pool.remove(data_index);
        }
    }
}

macro_rules! impl_removable_tuple {
    ($($t:ident),+) => {
        impl<$($t: Removable),+> Removable for ($($t,)+) {
            fn remove(manager: &mut Manager, data_index: u32) {
                $($t::remove(manager, data_index);)+
            }
        }
    };
}

impl_removable_tuple!(A);
impl_removable_tuple!(A, B);
impl_removable_tuple!(A, B, C);
impl_removable_tuple!(A, B, C, D);
impl_removable_tuple!(A, B, C, D, E);
impl_removable_tuple!(A, B, C, D, E, F);
impl_removable_tuple!(A, B, C, D, E, F, G);
impl_removable_tuple!(A, B, C, D, E, F, G, H);
