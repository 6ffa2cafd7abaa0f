//! Convenience re-export of the crate's public surface.
//!
//! ```
//! use warden::prelude::*;
//!
//! let mut manager = Manager::new();
//! let entity = manager.create_entity();
//! manager.add_component(entity, 7i32);
//! assert_eq!(*manager.get_component::<i32>(entity), 7);
//! ```

pub use crate::{Entity, HandleError, Manager, Queryable, Removable};
