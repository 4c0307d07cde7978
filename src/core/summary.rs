// File: src/core/summary.rs
use crate::core::cache::LabelCache;
use crate::core::error::Result;
use crate::core::ranking::{count_occurrences_parallel, CountMap};
use crate::core::types::{Label, SummaryRow, Value};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Algorithm used to build the summary. All of them yield the same rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryStrategy {
    /// Group by value in an ordered map.
    Grouped,
    /// Sort a copy of the source and emit one row per run.
    SortScan,
    /// Count in parallel, then order the keys.
    Parallel,
}

impl SummaryStrategy {
    pub const ALL: [SummaryStrategy; 3] = [
        SummaryStrategy::Grouped,
        SummaryStrategy::SortScan,
        SummaryStrategy::Parallel,
    ];
}

/// One row per distinct value of `source`, ascending by value, labelled through `cache`.
///
/// Fails with `LookupMiss` on the smallest distinct value the cache does not cover.
pub fn summarize(source: &[Value], cache: &LabelCache) -> Result<Vec<SummaryRow>> {
    summarize_with(source, cache, SummaryStrategy::Grouped)
}

pub fn summarize_with(
    source: &[Value],
    cache: &LabelCache,
    strategy: SummaryStrategy,
) -> Result<Vec<SummaryRow>> {
    match strategy {
        SummaryStrategy::Grouped => summarize_grouped(source, cache),
        SummaryStrategy::SortScan => summarize_sort_scan(source, cache),
        SummaryStrategy::Parallel => summarize_parallel(source, cache),
    }
}

fn row(cache: &LabelCache, value: Value, count: usize) -> Result<SummaryRow> {
    let label = Label::clone(cache.get(value)?);
    Ok(SummaryRow::new(value, label, count))
}

fn summarize_grouped(source: &[Value], cache: &LabelCache) -> Result<Vec<SummaryRow>> {
    let mut groups: BTreeMap<Value, usize> = BTreeMap::new();
    for &value in source {
        *groups.entry(value).or_insert(0) += 1;
    }
    groups
        .into_iter()
        .map(|(value, count)| row(cache, value, count))
        .collect()
}

fn summarize_sort_scan(source: &[Value], cache: &LabelCache) -> Result<Vec<SummaryRow>> {
    let mut sorted = source.to_vec();
    sorted.sort_unstable();

    let mut rows = Vec::new();
    let mut run: Option<(Value, usize)> = None;
    for (i, &value) in sorted.iter().enumerate() {
        match run {
            Some((current, _)) if current == value => {}
            Some((current, start)) => {
                rows.push(row(cache, current, i - start)?);
                run = Some((value, i));
            }
            None => run = Some((value, i)),
        }
    }
    // The last run has no boundary after it.
    if let Some((current, start)) = run {
        rows.push(row(cache, current, sorted.len() - start)?);
    }
    Ok(rows)
}

fn summarize_parallel(source: &[Value], cache: &LabelCache) -> Result<Vec<SummaryRow>> {
    let counts: CountMap = count_occurrences_parallel(source);
    let mut values: Vec<Value> = counts.keys().copied().collect();
    values.sort_unstable();
    values
        .into_iter()
        .map(|value| row(cache, value, counts[&value]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::NumeralError;

    fn triples(rows: &[SummaryRow]) -> Vec<(Value, &str, usize)> {
        rows.iter().map(|r| (r.value, r.label.as_ref(), r.count)).collect()
    }

    #[test]
    fn summary_of_simple_source() {
        let cache = LabelCache::full_domain();
        for strategy in SummaryStrategy::ALL {
            let rows = summarize_with(&[1, 1, 1, 2, 2, 3], &cache, strategy).unwrap();
            assert_eq!(
                triples(&rows),
                vec![(1, "I", 3), (2, "II", 2), (3, "III", 1)],
                "{:?}",
                strategy
            );
        }
    }

    #[test]
    fn single_repeated_value_emits_one_row() {
        let cache = LabelCache::full_domain();
        for strategy in SummaryStrategy::ALL {
            let rows = summarize_with(&[7; 50], &cache, strategy).unwrap();
            assert_eq!(triples(&rows), vec![(7, "VII", 50)], "{:?}", strategy);

            let rows = summarize_with(&[1], &cache, strategy).unwrap();
            assert_eq!(triples(&rows), vec![(1, "I", 1)], "{:?}", strategy);
        }
    }

    #[test]
    fn last_run_is_flushed() {
        let cache = LabelCache::full_domain();
        let rows = summarize_with(&[2, 1, 1], &cache, SummaryStrategy::SortScan).unwrap();
        assert_eq!(triples(&rows), vec![(1, "I", 2), (2, "II", 1)]);
    }

    #[test]
    fn unsorted_source_is_summarized_ascending() {
        let cache = LabelCache::full_domain();
        let source = [50, 3, 49, 3, 1, 50, 50];
        let expected = vec![(1, "I", 1), (3, "III", 2), (49, "XLIX", 1), (50, "L", 3)];
        for strategy in SummaryStrategy::ALL {
            let rows = summarize_with(&source, &cache, strategy).unwrap();
            assert_eq!(triples(&rows), expected, "{:?}", strategy);
        }
    }

    #[test]
    fn empty_source_has_empty_summary() {
        let cache = LabelCache::full_domain();
        for strategy in SummaryStrategy::ALL {
            assert!(summarize_with(&[], &cache, strategy).unwrap().is_empty());
        }
    }

    #[test]
    fn uncovered_value_is_lookup_miss() {
        let cache = LabelCache::build([1, 2]).unwrap();
        for strategy in SummaryStrategy::ALL {
            assert_eq!(
                summarize_with(&[2, 9, 1, 4], &cache, strategy).unwrap_err(),
                NumeralError::LookupMiss(4),
                "{:?}",
                strategy
            );
        }
    }
}
