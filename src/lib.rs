//! Deferred queries and aggregations over in-memory sequences.
//!
//! ```
//! use lazyq::prelude::*;
//!
//! let evens = from_vec(vec![3, 10, 6, 1, 4, 8, 2, 5, 9, 7])
//!     .filter(|v| v % 2 == 0)
//!     .order_by(|v| *v);
//! assert_eq!(evens.to_list(), vec![2, 4, 6, 8, 10]);
//! assert_eq!(evens.first().unwrap(), 2);
//! ```

pub use lazyq_engine as engine;
pub use lazyq_shared_kernel as shared_kernel;

pub use lazyq_engine::*;

pub mod prelude {
    pub use lazyq_engine::sequence::Sequence;
    pub use lazyq_engine::source::{from_slice, from_vec, generate, range};
    pub use lazyq_engine::{
        CancellationToken, Grouping, Lookup, Multicast, ParallelOptions, ParallelQuery, Query,
        QueryError, RandomIntegers, Result,
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
