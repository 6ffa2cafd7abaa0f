//! A data-oriented ECS core: type-segregated, densely packed component
//! pools behind stable, generationally versioned entity handles.
//!
//! Iteration over one or a few component types at a time is the dominant
//! access pattern this crate is built for; creating and destroying entities
//! must never fragment pool memory or invalidate outstanding handles except
//! at a predictable boundary — the call to [`Manager::refresh`].
//!
//! Entities are created and queried through a [`Manager`], which single-
//! handedly owns the entity/handle bookkeeping and every component pool.
//! An [`Entity`] is a cheap, copyable token; it is only ever meaningful
//! relative to the `Manager` that produced it.

mod component;
mod entity_handle;
mod entity_table;
mod error;
mod foreach;
mod handle_table;
mod manager;
mod pool;
mod pool_registry;

pub mod prelude;

pub use entity_handle::Entity;
pub use error::HandleError;
pub use foreach::{Queryable, Removable};
pub use manager::Manager;
