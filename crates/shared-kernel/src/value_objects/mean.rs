// crates/shared-kernel/src/value_objects/mean.rs
use std::ops::{Add, AddAssign};

use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

/// Running `(sum, count)` pair behind `average`.
///
/// Partial means from independent partitions merge by adding both fields,
/// so the division happens exactly once, after the last merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Mean {
    sum: f64,
    count: u64,
}

impl Mean {
    #[inline]
    pub const fn new() -> Self {
        Self { sum: 0.0, count: 0 }
    }

    /// Records one observation. Values without an `f64` representation count as NaN.
    #[inline]
    pub fn push<N: ToPrimitive>(&mut self, value: N) {
        self.sum += value.to_f64().unwrap_or(f64::NAN);
        self.count += 1;
    }

    #[inline]
    #[must_use]
    pub fn with<N: ToPrimitive>(mut self, value: N) -> Self {
        self.push(value);
        self
    }

    #[inline]
    pub const fn sum(&self) -> f64 {
        self.sum
    }

    #[inline]
    pub const fn count(&self) -> u64 {
        self.count
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The arithmetic mean, or `None` when nothing was recorded.
    #[allow(clippy::cast_precision_loss)]
    pub fn value(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

impl Add for Mean {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            sum: self.sum + rhs.sum,
            count: self.count + rhs.count,
        }
    }
}

impl AddAssign for Mean {
    fn add_assign(&mut self, rhs: Self) {
        self.sum += rhs.sum;
        self.count += rhs.count;
    }
}

impl std::iter::Sum for Mean {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::new(), Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_mean_has_no_value() {
        assert_eq!(Mean::new().value(), None);
        assert!(Mean::default().is_empty());
    }

    #[test]
    fn integer_observations_average_as_float() {
        let mean = Mean::new().with(1).with(2).with(4);
        assert_eq!(mean.count(), 3);
        assert!((mean.value().unwrap() - 7.0 / 3.0).abs() < 1e-12);
    }
}
