use crate::core::cache::LabelCache;
use crate::core::converter::RomanConverter;
use crate::core::error::Result;
use crate::core::mapper::{map_all, MapStrategy};
use crate::core::ranking::{count_with, top_n_counts, RankStrategy};
use crate::core::summary::{summarize_with, SummaryStrategy};
use crate::core::types::{EngineConfig, FrequencyCount, Label, SummaryRow, Value};
use log::debug;

/// Ties the converter, a label cache and the batch operations together.
///
/// The cache is an explicit part of the engine's state and is replaced, never
/// mutated, when the domain of interest changes.
pub struct NumeralEngine {
    pub converter: RomanConverter,
    pub config: EngineConfig,
    cache: LabelCache,
}

impl NumeralEngine {
    /// Engine with a full-domain cache and default config.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            converter: RomanConverter::new(),
            config,
            cache: LabelCache::full_domain(),
        }
    }

    pub fn cache(&self) -> &LabelCache {
        &self.cache
    }

    /// Replaces the cache with one covering exactly `values`.
    pub fn rebuild_cache<I>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = Value>,
    {
        let cache = LabelCache::build(values)?;
        debug!("cache rebuilt: {} -> {:?}", self.cache.len(), cache.sorted_domain());
        self.cache = cache;
        Ok(())
    }

    pub fn reset_cache(&mut self) {
        self.cache = LabelCache::full_domain();
    }

    pub fn convert(&self, value: Value) -> Result<String> {
        self.converter.convert(value)
    }

    pub fn map_all(&self, source: &[Value], strategy: MapStrategy) -> Result<Vec<Label>> {
        map_all(source, &self.cache, strategy, &self.config)
    }

    /// The configured number of most frequent values with their counts.
    pub fn top_counts(&self, source: &[Value], strategy: RankStrategy) -> Vec<FrequencyCount> {
        top_n_counts(&count_with(source, strategy), self.config.top_n)
    }

    /// Ranks the source, narrows the cache to the winners and labels them.
    ///
    /// Afterwards the engine's cache covers only the returned values.
    pub fn top_n_labels(
        &mut self,
        source: &[Value],
        strategy: RankStrategy,
    ) -> Result<Vec<(Value, Label)>> {
        let top: Vec<Value> = self
            .top_counts(source, strategy)
            .into_iter()
            .map(|fc| fc.value)
            .collect();
        self.rebuild_cache(top.iter().copied())?;
        let labels = self.map_all(&top, MapStrategy::Sequential)?;
        Ok(top.into_iter().zip(labels).collect())
    }

    pub fn summarize(
        &self,
        source: &[Value],
        strategy: SummaryStrategy,
    ) -> Result<Vec<SummaryRow>> {
        summarize_with(source, &self.cache, strategy)
    }
}

impl Default for NumeralEngine {
    fn default() -> Self {
        Self::new()
    }
}
