//! Model to entity mappers
//!
//! This module converts database rows into domain entities:
//! - `From<Model> for Entity`: convert child rows to domain objects
//! - `assemble` / `group_children`: join a parent row (or a whole page of
//!   them) with batch-fetched child rows, in memory, so list reads stay at
//!   three queries total instead of fanning out per record

mod automation;
mod link;
mod reaction;

pub use automation::{assemble, group_children};
