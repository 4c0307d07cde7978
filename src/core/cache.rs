// --- File: src/core/cache.rs
use crate::core::converter::RomanConverter;
use crate::core::error::{NumeralError, Result};
use crate::core::types::{Label, Value};
use log::{debug, trace};
use std::collections::HashMap;

/// Read-only mapping from value to its precomputed label.
///
/// Built once for a domain of interest (all 50 values, or a ranked subset)
/// and then shared by reference with the batch operations. Every entry equals
/// `RomanConverter::convert` of its key.
#[derive(Debug, Clone, Default)]
pub struct LabelCache {
    labels: HashMap<Value, Label>,
}

impl LabelCache {
    /// Builds a cache covering the given values.
    ///
    /// Repeated values are an idempotent upsert: the label is the same either way,
    /// so the second insert is skipped. Fails on the first value outside 1..=50.
    pub fn build<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = Value>,
    {
        let converter = RomanConverter::new();
        let mut labels = HashMap::new();
        for value in values {
            if labels.contains_key(&value) {
                continue;
            }
            labels.insert(value, converter.label(value)?);
        }
        debug!("built label cache for {} values", labels.len());
        Ok(Self { labels })
    }

    /// Cache over the whole 1..=50 domain.
    pub fn full_domain() -> Self {
        let labels: HashMap<Value, Label> = RomanConverter::new().all_labels().collect();
        debug!("built full-domain label cache ({} values)", labels.len());
        Self { labels }
    }

    /// Looks up a label. Values the cache was not built for are a `LookupMiss`.
    pub fn get(&self, value: Value) -> Result<&Label> {
        self.labels.get(&value).ok_or(NumeralError::LookupMiss(value))
    }

    pub fn contains(&self, value: Value) -> bool {
        self.labels.contains_key(&value)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Values covered by this cache, in no particular order.
    pub fn domain(&self) -> impl Iterator<Item = Value> + '_ {
        self.labels.keys().copied()
    }

    /// Values covered by this cache, ascending.
    pub fn sorted_domain(&self) -> Vec<Value> {
        let mut values: Vec<Value> = self.domain().collect();
        values.sort_unstable();
        values
    }
}

/// A cache that fills itself on first sight of each value.
///
/// Used by the lazy mapping strategy: no upfront build, but it grows to
/// whatever subset of the domain the source actually contains.
#[derive(Debug, Default)]
pub struct LazyLabelCache {
    converter: RomanConverter,
    labels: HashMap<Value, Label>,
}

impl LazyLabelCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the memoized label, converting and storing it on first encounter.
    pub fn get_or_convert(&mut self, value: Value) -> Result<Label> {
        if let Some(label) = self.labels.get(&value) {
            return Ok(Label::clone(label));
        }
        let label = self.converter.label(value)?;
        trace!("memoized label {} for {}", label, value);
        self.labels.insert(value, Label::clone(&label));
        Ok(label)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{MAX_VALUE, MIN_VALUE};

    #[test]
    fn full_domain_matches_converter() {
        let cache = LabelCache::full_domain();
        let converter = RomanConverter::new();
        assert_eq!(cache.len(), 50);
        for v in MIN_VALUE..=MAX_VALUE {
            assert_eq!(cache.get(v).unwrap().as_ref(), converter.convert(v).unwrap());
        }
    }

    #[test]
    fn build_is_idempotent_for_repeated_values() {
        let cache = LabelCache::build([3, 7, 3, 3, 7]).unwrap();
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(3).unwrap().as_ref(), "III");
        assert_eq!(cache.get(7).unwrap().as_ref(), "VII");
    }

    #[test]
    fn domain_lists_covered_values() {
        let cache = LabelCache::build([10, 2, 10, 35]).unwrap();
        let mut domain: Vec<Value> = cache.domain().collect();
        domain.sort_unstable();
        assert_eq!(domain, vec![2, 10, 35]);

        let full: Vec<Value> = LabelCache::full_domain().sorted_domain();
        assert_eq!(full, (MIN_VALUE..=MAX_VALUE).collect::<Vec<_>>());
    }

    #[test]
    fn build_rejects_out_of_domain_value() {
        let err = LabelCache::build([1, 2, 51]).unwrap_err();
        assert_eq!(err, NumeralError::OutOfDomain(51));
    }

    #[test]
    fn reduced_cache_reports_lookup_miss() {
        let cache = LabelCache::build([1, 3, 10]).unwrap();
        assert!(cache.contains(10));
        assert!(!cache.contains(2));
        assert_eq!(cache.get(2).unwrap_err(), NumeralError::LookupMiss(2));
    }

    #[test]
    fn empty_build_yields_empty_cache() {
        let cache = LabelCache::build(std::iter::empty()).unwrap();
        assert!(cache.is_empty());
    }

    #[test]
    fn lazy_cache_reuses_first_label() {
        let mut lazy = LazyLabelCache::new();
        let first = lazy.get_or_convert(12).unwrap();
        let second = lazy.get_or_convert(12).unwrap();
        assert!(std::sync::Arc::ptr_eq(&first, &second));
        assert_eq!(lazy.len(), 1);
        assert_eq!(first.as_ref(), "XII");
    }

    #[test]
    fn lazy_cache_does_not_memoize_failures() {
        let mut lazy = LazyLabelCache::new();
        assert_eq!(lazy.get_or_convert(0), Err(NumeralError::OutOfDomain(0)));
        assert!(lazy.is_empty());
    }
}
