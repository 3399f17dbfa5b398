// crates/engine/src/parallel/executor.rs
use lazyq_shared_kernel::{QueryError, Result};
use log::{debug, trace};

use super::cancel::CancellationToken;
use super::partition::{self, Partition};
use super::pool;
use super::stage::Stage;
use crate::options::ParallelOptions;
use crate::reducer::Reducer;

/// Partition `input`, reduce each partition on the shared pool, then merge the
/// partials in partition order once every worker has finished.
///
/// The partition count is bounded by the requested parallelism, the pool size
/// and `min_partition_len`. A cancelled run yields `Cancelled`, never a
/// partial value.
pub(crate) fn execute<T, S, R>(
    operation: &'static str,
    input: Vec<T>,
    stage: &S,
    reducer: &R,
    options: &ParallelOptions,
) -> Result<R::Output>
where
    T: Send,
    S: Stage<T>,
    R: Reducer<S::Output> + Sync,
    R::Acc: Send,
{
    let pool = pool::shared()?;
    let workers = options.parallelism.get().min(pool.current_num_threads());
    let count = partition::plan_partition_count(input.len(), workers, options.min_partition_len);
    debug!("{operation}: worker budget {workers}");
    execute_partitioned(operation, input, count, stage, reducer, options)
}

/// Same as [`execute`] with an explicit partition count. The count is not
/// capped by the pool size; extra partitions queue on the pool's workers.
pub(crate) fn execute_partitioned<T, S, R>(
    operation: &'static str,
    input: Vec<T>,
    count: usize,
    stage: &S,
    reducer: &R,
    options: &ParallelOptions,
) -> Result<R::Output>
where
    T: Send,
    S: Stage<T>,
    R: Reducer<S::Output> + Sync,
    R::Acc: Send,
{
    let token = options.cancellation.clone().unwrap_or_default();
    if token.is_cancelled() {
        debug!("{operation}: cancelled before dispatch");
        return Err(QueryError::Cancelled);
    }

    let pool = pool::shared()?;
    let len = input.len();
    debug!("{operation}: {len} elements in {count} partitions");

    let partitions = partition::split(input, count);
    let (tx, rx) = crossbeam_channel::unbounded();
    pool.scope(|scope| {
        for part in partitions {
            let tx = tx.clone();
            let token = &token;
            scope.spawn(move |_| {
                let index = part.index();
                let partial = reduce_partition(part, stage, reducer, token);
                trace!("{operation}: partition {index} done (complete: {})", partial.is_some());
                let _ = tx.send((index, partial));
            });
        }
    });
    drop(tx);

    // Join barrier passed: every worker has written its slot.
    let mut partials: Vec<(usize, Option<R::Acc>)> = rx.into_iter().collect();
    if token.is_cancelled() {
        debug!("{operation}: cancelled, discarding {} partials", partials.len());
        return Err(QueryError::Cancelled);
    }

    partials.sort_unstable_by_key(|(index, _)| *index);
    let mut merged = reducer.init();
    for (_, partial) in partials {
        let Some(acc) = partial else {
            return Err(QueryError::Cancelled);
        };
        merged = reducer.combine(merged, acc);
    }
    reducer.finish(merged)
}

fn reduce_partition<T, S, R>(
    part: Partition<T>,
    stage: &S,
    reducer: &R,
    token: &CancellationToken,
) -> Option<R::Acc>
where
    S: Stage<T>,
    R: Reducer<S::Output>,
{
    let mut acc = reducer.init();
    for item in part.into_items() {
        if token.is_cancelled() {
            return None;
        }
        if let Some(value) = stage.apply(item) {
            acc = reducer.accumulate(acc, value);
        }
    }
    Some(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parallel::stage::{Filtered, Identity, Mapped};
    use crate::reducer::{AverageReducer, CountReducer, MaxReducer, MinReducer, SumReducer};

    #[derive(Debug, Clone, Copy)]
    struct Tagged(i32, char);

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            self.0.partial_cmp(&other.0)
        }
    }

    fn options() -> ParallelOptions {
        ParallelOptions::with_parallelism(1)
    }

    #[test]
    fn merge_matches_sequential_for_every_partition_count() {
        let values: Vec<i64> = (0..97).map(|v| (v * 37) % 101 - 50).collect();
        let evens = Filtered::new(Identity, |v: &i64| v % 2 == 0);
        let expected_sum: i64 = values.iter().filter(|v| *v % 2 == 0).sum();
        let expected_count = values.iter().filter(|v| *v % 2 == 0).count();

        for count in 1..=12 {
            let sum = execute_partitioned("sum", values.clone(), count, &evens, &SumReducer, &options());
            assert_eq!(sum.unwrap(), expected_sum, "{count} partitions");
            let n = execute_partitioned("count", values.clone(), count, &evens, &CountReducer, &options());
            assert_eq!(n.unwrap(), expected_count, "{count} partitions");
        }
    }

    #[test]
    fn ties_resolve_to_the_earliest_across_partials() {
        let rows = vec![
            Tagged(5, 'a'),
            Tagged(9, 'b'),
            Tagged(1, 'c'),
            Tagged(9, 'd'),
            Tagged(1, 'e'),
            Tagged(9, 'f'),
        ];
        for count in 1..=rows.len() {
            let max = execute_partitioned("max", rows.clone(), count, &Identity, &MaxReducer, &options());
            assert_eq!(max.unwrap().1, 'b', "{count} partitions");
            let min = execute_partitioned("min", rows.clone(), count, &Identity, &MinReducer, &options());
            assert_eq!(min.unwrap().1, 'c', "{count} partitions");
        }
    }

    #[test]
    fn float_extremes_ignore_nan_for_every_partition_count() {
        let values = vec![1.0, 2.0, f64::NAN, 3.0, -4.0, f64::NAN];
        for count in 1..=values.len() {
            let max = execute_partitioned("max", values.clone(), count, &Identity, &MaxReducer, &options());
            assert_eq!(max.unwrap(), 3.0, "{count} partitions");
            let min = execute_partitioned("min", values.clone(), count, &Identity, &MinReducer, &options());
            assert_eq!(min.unwrap(), -4.0, "{count} partitions");
        }
    }

    #[test]
    fn average_merges_sum_and_count_partials() {
        let values: Vec<u32> = (1..=10).collect();
        let doubled = Mapped::new(Identity, |v: u32| v * 2);
        for count in 1..=10 {
            let avg = execute_partitioned("average", values.clone(), count, &doubled, &AverageReducer, &options());
            assert!((avg.unwrap() - 11.0).abs() < 1e-12, "{count} partitions");
        }
        let empty = execute_partitioned("average", Vec::<u32>::new(), 4, &Identity, &AverageReducer, &options());
        assert!(matches!(empty, Err(QueryError::EmptySequence { operation: "average" })));
    }

    #[test]
    fn cancellation_in_one_partition_fails_the_whole_run() {
        let token = CancellationToken::new();
        let trigger = token.clone();
        let stage = Mapped::new(Identity, move |v: i64| {
            if v == 5 {
                trigger.cancel();
            }
            v
        });
        let options = ParallelOptions {
            cancellation: Some(token),
            ..options()
        };
        let result = execute_partitioned("sum", (0..40).collect::<Vec<i64>>(), 4, &stage, &SumReducer, &options);
        assert!(matches!(result, Err(QueryError::Cancelled)));
    }
}
