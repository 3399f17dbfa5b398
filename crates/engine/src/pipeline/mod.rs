// crates/engine/src/pipeline/mod.rs
//! Deferred operator stages.
//!
//! Each stage owns its upstream [`Sequence`](crate::sequence::Sequence) and the
//! callables handed to it at composition time. Composing a stage pulls nothing;
//! a stage pulls from upstream only when its own cursor is pulled.

mod distinct;
mod filter;
mod group;
mod map;
mod order;
mod take;
mod zip;

pub use distinct::{Distinct, DistinctCursor, DistinctWith, DistinctWithCursor};
pub use filter::Filter;
pub use group::{GroupBy, GroupByCursor};
pub use map::Map;
pub use order::{ByComparison, ByKey, Comparer, OrderBy, OrderByCursor, ThenBy};
pub use take::{Skip, Take};
pub use zip::{Zip, ZipCursor};
