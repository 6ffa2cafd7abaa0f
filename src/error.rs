//! Recoverable escape hatches alongside the primary, panicking API.
//!
//! spec.md classifies an invalid handle as a precondition violation — a
//! programmer error, not a data error — so the primary API (`Manager::destroy`,
//! `Entity::get_component`, ...) panics on one, matching this crate's
//! teacher (`goggles`), which panics/asserts through most of its primary
//! paths. The `try_*` family below gives embedders that need to validate
//! handles they don't control (e.g. deserialized from a save file) a
//! non-panicking alternative, the same way the teacher exposes
//! `Result<(), WrongGeneration>` from `Allocator::kill` alongside panicking
//! callers elsewhere.

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum HandleError {
    #[error("entity handle is null")]
    Null,
    #[error("entity handle has a stale generation and no longer refers to a live entity")]
    StaleGeneration,
    #[error("entity handle does not belong to this manager")]
    ForeignManager,
}
