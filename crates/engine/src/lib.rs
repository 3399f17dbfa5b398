// crates/engine/src/lib.rs
//! Deferred, composable queries over pull-based sequences.
//!
//! A [`Query`] wraps a [`Sequence`]; stage methods (`filter`, `map`,
//! `order_by`, ...) compose without touching the source, and terminal
//! methods (`sum`, `first`, `to_dictionary`, ...) pull from a fresh cursor
//! every time they are called. With the `parallel` feature, [`ParallelQuery`]
//! partitions an owned input across a shared worker pool for associative
//! reductions.

pub mod aggregate;
pub mod datagen;
pub mod materialize;
pub mod multicast;
#[cfg(feature = "parallel")]
pub mod options;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod pipeline;
pub mod query;
pub mod reducer;
pub mod sequence;
pub mod source;

pub use datagen::RandomIntegers;
pub use lazyq_shared_kernel::{BoxError, ErrorContext, Mean, QueryError, Result, SortOrder};
pub use materialize::{Grouping, Lookup};
pub use multicast::{Handler, Multicast};
#[cfg(feature = "parallel")]
pub use options::{ParallelOptions, ParallelOptionsBuilder, Parallelism};
#[cfg(feature = "parallel")]
pub use parallel::{CancellationToken, ParallelQuery};
pub use query::Query;
pub use reducer::Reducer;
pub use sequence::Sequence;
pub use source::{from_slice, from_vec, generate, range};
