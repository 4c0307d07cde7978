// File: src/core/ranking.rs
use crate::core::types::{FrequencyCount, Value};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

/// Maps each distinct value to its number of occurrences.
pub type CountMap = HashMap<Value, usize>;

/// How occurrences are counted before ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankStrategy {
    Sequential,
    /// Per-worker count maps merged by summing per key.
    Parallel,
}

/// Counts occurrences in one pass.
pub fn count_occurrences(source: &[Value]) -> CountMap {
    let mut counts = CountMap::new();
    for &value in source {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}

/// Counts occurrences with rayon: each worker folds its slice into a private
/// map, then the partial maps are merged.
pub fn count_occurrences_parallel(source: &[Value]) -> CountMap {
    source
        .par_iter()
        .fold(CountMap::new, |mut counts, &value| {
            *counts.entry(value).or_insert(0) += 1;
            counts
        })
        .reduce(CountMap::new, merge_counts)
}

/// Sums `other` into `into`, always folding the smaller map into the larger.
pub fn merge_counts(mut into: CountMap, mut other: CountMap) -> CountMap {
    if into.len() < other.len() {
        std::mem::swap(&mut into, &mut other);
    }
    for (value, count) in other {
        *into.entry(value).or_insert(0) += count;
    }
    into
}

pub fn count_with(source: &[Value], strategy: RankStrategy) -> CountMap {
    match strategy {
        RankStrategy::Sequential => count_occurrences(source),
        RankStrategy::Parallel => count_occurrences_parallel(source),
    }
}

// Higher count ranks first; among equal counts the smaller value wins.
fn rank_key(fc: &FrequencyCount) -> (usize, Reverse<Value>) {
    (fc.count, Reverse(fc.value))
}

/// All counts ordered by descending count, ties broken by ascending value.
pub fn ranked(counts: &CountMap) -> Vec<FrequencyCount> {
    let mut all: Vec<FrequencyCount> = counts
        .iter()
        .map(|(&value, &count)| FrequencyCount { value, count })
        .collect();
    all.sort_unstable_by_key(|fc| Reverse(rank_key(fc)));
    all
}

/// The `n` highest-ranked counts, same order as `ranked`.
/// O(d log n) for d distinct values, using a bounded min-heap.
pub fn top_n_counts(counts: &CountMap, n: usize) -> Vec<FrequencyCount> {
    // Never more entries than distinct values, whatever `n` asks for.
    let bound = n.min(counts.len());
    if bound == 0 {
        return vec![];
    }

    let mut heap: BinaryHeap<Reverse<(usize, Reverse<Value>)>> = BinaryHeap::with_capacity(bound);
    for (&value, &count) in counts {
        let key = rank_key(&FrequencyCount { value, count });
        if heap.len() < bound {
            heap.push(Reverse(key));
        } else if heap.peek().is_some_and(|Reverse(weakest)| key > *weakest) {
            heap.pop();
            heap.push(Reverse(key));
        }
    }

    // Sorted ascending by Reverse(key), i.e. strongest first.
    heap.into_sorted_vec()
        .into_iter()
        .map(|Reverse((count, Reverse(value)))| FrequencyCount { value, count })
        .collect()
}

/// The `n` most frequent values of `source`, most frequent first.
///
/// Returns `min(n, distinct values)` entries, never padded. Equal counts are
/// ordered by ascending value, so the result is reproducible.
pub fn top_n(source: &[Value], n: usize) -> Vec<Value> {
    top_n_with(source, n, RankStrategy::Sequential)
}

pub fn top_n_with(source: &[Value], n: usize, strategy: RankStrategy) -> Vec<Value> {
    let counts = count_with(source, strategy);
    top_n_counts(&counts, n).into_iter().map(|fc| fc.value).collect()
}
