// crates/engine/src/datagen.rs
//! Seeded, reproducible input data.
//!
//! Large test and benchmark inputs come from an explicit source value instead
//! of process-wide random state: the same seed always yields the same
//! elements, on every pass.
use std::ops::Range;

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{RngCore, SeedableRng};

use crate::query::Query;
use crate::sequence::Sequence;

/// `len` pseudo-random integers drawn uniformly-ish from `range`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomIntegers {
    seed: u64,
    len: usize,
    low: i64,
    span: u64,
}

impl RandomIntegers {
    /// An empty or inverted `range` produces `range.start` repeatedly.
    pub fn new(seed: u64, len: usize, range: Range<i64>) -> Self {
        let span = u64::try_from(range.end.saturating_sub(range.start))
            .unwrap_or(0)
            .max(1);
        Self { seed, len, low: range.start, span }
    }

    pub const fn seed(&self) -> u64 {
        self.seed
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn query(self) -> Query<Self> {
        Query::new(self)
    }

    /// Materializes one pass.
    pub fn to_vec(&self) -> Vec<i64> {
        self.cursor().collect()
    }
}

pub struct RandomCursor {
    rng: ChaCha8Rng,
    remaining: usize,
    low: i64,
    span: u64,
}

impl Iterator for RandomCursor {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let offset = self.rng.next_u64() % self.span;
        #[allow(clippy::cast_possible_wrap)]
        Some(self.low.wrapping_add(offset as i64))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for RandomCursor {}

impl Sequence for RandomIntegers {
    type Item = i64;
    type Cursor<'a>
        = RandomCursor
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        RandomCursor {
            rng: ChaCha8Rng::seed_from_u64(self.seed),
            remaining: self.len,
            low: self.low,
            span: self.span,
        }
    }
}
