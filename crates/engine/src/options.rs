// crates/engine/src/options.rs
use std::num::NonZeroUsize;

use derive_builder::Builder;

use crate::parallel::CancellationToken;

/// Requested worker count. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Parallelism(NonZeroUsize);

impl Parallelism {
    /// Zero is treated as one.
    pub fn new(workers: usize) -> Self {
        Self(NonZeroUsize::new(workers).unwrap_or(NonZeroUsize::MIN))
    }

    /// Number of logical cores on this machine.
    pub fn available() -> Self {
        Self::new(num_cpus::get())
    }

    #[inline]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for Parallelism {
    fn default() -> Self {
        Self::available()
    }
}

impl From<usize> for Parallelism {
    fn from(workers: usize) -> Self {
        Self::new(workers)
    }
}

/// Per-call options for parallel execution.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct ParallelOptions {
    /// Upper bound on workers; the effective count is also capped by the pool
    /// size and by the number of partitions the input can fill.
    #[builder(default)]
    pub parallelism: Parallelism,
    #[builder(default, setter(strip_option))]
    pub cancellation: Option<CancellationToken>,
    /// Smallest partition worth a worker of its own.
    #[builder(default = "1")]
    pub min_partition_len: usize,
}

impl ParallelOptions {
    pub fn builder() -> ParallelOptionsBuilder {
        ParallelOptionsBuilder::default()
    }

    pub fn with_parallelism(workers: usize) -> Self {
        Self {
            parallelism: Parallelism::new(workers),
            ..Self::default()
        }
    }
}

impl Default for ParallelOptions {
    fn default() -> Self {
        Self {
            parallelism: Parallelism::default(),
            cancellation: None,
            min_partition_len: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_parallelism_clamps_to_one() {
        assert_eq!(Parallelism::new(0).get(), 1);
        assert_eq!(Parallelism::from(6).get(), 6);
    }

    #[test]
    fn builder_fills_defaults() {
        let options = ParallelOptions::builder().parallelism(3_usize).build().unwrap();
        assert_eq!(options.parallelism.get(), 3);
        assert_eq!(options.min_partition_len, 1);
        assert!(options.cancellation.is_none());

        let token = CancellationToken::new();
        let options = ParallelOptions::builder()
            .cancellation(token.clone())
            .min_partition_len(64_usize)
            .build()
            .unwrap();
        assert_eq!(options.min_partition_len, 64);
        token.cancel();
        assert!(options.cancellation.unwrap().is_cancelled());
    }
}
