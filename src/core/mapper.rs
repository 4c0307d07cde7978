// File: src/core/mapper.rs
use crate::core::cache::{LabelCache, LazyLabelCache};
use crate::core::error::{NumeralError, Result};
use crate::core::types::{EngineConfig, Label, Value};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Maps a sequence of values to their labels.
///
/// Output has the same length as the source and `output[i]` is the label of
/// `source[i]`, whatever the execution strategy. A value the mapper cannot
/// label fails the whole call. When several values fail, the error names the
/// one with the lowest index.
pub trait LabelMapper {
    fn map_all(&self, source: &[Value]) -> Result<Vec<Label>>;
}

/// Execution strategy for `map_all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapStrategy {
    /// Single pass over the source against a prebuilt cache.
    Sequential,
    /// Rayon workers over disjoint slices, reassembled in source order.
    Parallel,
    /// Single pass that builds its own cache as values are first seen.
    Lazy,
}

impl MapStrategy {
    pub const ALL: [MapStrategy; 3] = [
        MapStrategy::Sequential,
        MapStrategy::Parallel,
        MapStrategy::Lazy,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MapStrategy::Sequential => "sequential",
            MapStrategy::Parallel => "parallel",
            MapStrategy::Lazy => "lazy",
        }
    }
}

/// Maps `source` through `cache` with the chosen strategy.
///
/// All strategies return identical output for identical input, including the
/// error: the lazy strategy only labels values the cache covers.
pub fn map_all(
    source: &[Value],
    cache: &LabelCache,
    strategy: MapStrategy,
    config: &EngineConfig,
) -> Result<Vec<Label>> {
    match strategy {
        MapStrategy::Sequential => SequentialMapper::new(cache).map_all(source),
        MapStrategy::Parallel => ParallelMapper::new(cache)
            .with_min_len(config.parallel_min_len)
            .map_all(source),
        MapStrategy::Lazy => LazyMapper::restricted_to(cache).map_all(source),
    }
}

pub struct SequentialMapper<'c> {
    cache: &'c LabelCache,
}

impl<'c> SequentialMapper<'c> {
    pub fn new(cache: &'c LabelCache) -> Self {
        Self { cache }
    }
}

impl LabelMapper for SequentialMapper<'_> {
    fn map_all(&self, source: &[Value]) -> Result<Vec<Label>> {
        source
            .iter()
            .map(|&value| self.cache.get(value).map(Label::clone))
            .collect()
    }
}

/// Read-only lookups from rayon workers against a shared cache.
pub struct ParallelMapper<'c> {
    cache: &'c LabelCache,
    min_len: usize,
}

impl<'c> ParallelMapper<'c> {
    pub fn new(cache: &'c LabelCache) -> Self {
        Self { cache, min_len: 1 }
    }

    /// Smallest number of elements a single worker processes.
    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len.max(1);
        self
    }
}

impl LabelMapper for ParallelMapper<'_> {
    fn map_all(&self, source: &[Value]) -> Result<Vec<Label>> {
        let mapped: Result<Vec<Label>> = source
            .par_iter()
            .with_min_len(self.min_len)
            .map(|&value| self.cache.get(value).map(Label::clone))
            .collect();

        // Workers race to report a miss; name the first one in source order instead.
        mapped.map_err(|err| {
            source
                .iter()
                .copied()
                .find(|&value| !self.cache.contains(value))
                .map_or(err, NumeralError::LookupMiss)
        })
    }
}

/// Converts on first encounter and reuses the memoized label afterwards.
///
/// With a domain set, a value outside it is a `LookupMiss` exactly as with the
/// cache-backed strategies. Without one, the converter's own domain applies
/// and values outside 1..=50 are `OutOfDomain`.
#[derive(Default)]
pub struct LazyMapper<'c> {
    domain: Option<&'c LabelCache>,
}

impl<'c> LazyMapper<'c> {
    pub fn new() -> Self {
        Self { domain: None }
    }

    pub fn restricted_to(domain: &'c LabelCache) -> Self {
        Self {
            domain: Some(domain),
        }
    }
}

impl LabelMapper for LazyMapper<'_> {
    fn map_all(&self, source: &[Value]) -> Result<Vec<Label>> {
        let mut local = LazyLabelCache::new();
        let mut result = Vec::with_capacity(source.len());
        for &value in source {
            if let Some(domain) = self.domain {
                if !domain.contains(value) {
                    return Err(NumeralError::LookupMiss(value));
                }
            }
            result.push(local.get_or_convert(value)?);
        }
        Ok(result)
    }
}
