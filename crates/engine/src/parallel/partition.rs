// crates/engine/src/parallel/partition.rs
/// A contiguous slice of the input owned by exactly one worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<T> {
    index: usize,
    items: Vec<T>,
}

impl<T> Partition<T> {
    pub const fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

/// How many partitions `len` elements should be cut into, given the worker
/// budget and the smallest partition worth scheduling.
pub fn plan_partition_count(len: usize, workers: usize, min_partition_len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let by_size = len.div_ceil(min_partition_len.max(1));
    workers.max(1).min(by_size)
}

/// Cuts `items` into `count` disjoint contiguous partitions whose lengths
/// differ by at most one. Concatenating them in index order gives back the
/// input.
pub fn split<T>(items: Vec<T>, count: usize) -> Vec<Partition<T>> {
    if count == 0 || items.is_empty() {
        return Vec::new();
    }
    let count = count.min(items.len());
    let base = items.len() / count;
    let extra = items.len() % count;
    let mut rest = items.into_iter();
    (0..count)
        .map(|index| {
            let size = base + usize::from(index < extra);
            Partition {
                index,
                items: rest.by_ref().take(size).collect(),
            }
        })
        .collect()
}
