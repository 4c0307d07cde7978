// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// An input integer. Only `MIN_VALUE..=MAX_VALUE` has a label.
pub type Value = u32;

/// The Roman-numeral text of a `Value`.
/// Shared so that a cache hit hands out the same allocation every time.
pub type Label = Arc<str>;

pub const MIN_VALUE: Value = 1;
pub const MAX_VALUE: Value = 50;

/// How many values the "top N" flow ranks when nothing else is configured.
pub const DEFAULT_TOP_N: usize = 5;

/// Returns true if `value` lies in the convertible domain.
pub fn in_domain(value: Value) -> bool {
    (MIN_VALUE..=MAX_VALUE).contains(&value)
}

/// A value together with the number of times it occurs in a source.
/// `count` is always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyCount {
    pub value: Value,
    pub count: usize,
}

/// One line of the collection summary: value, its label and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub value: Value,
    #[serde(with = "label_serde")]
    pub label: Label,
    pub count: usize,
}

impl SummaryRow {
    pub fn new(value: Value, label: Label, count: usize) -> Self {
        Self { value, label, count }
    }
}

/// Tunables for the engine and its parallel strategies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of values the ranking flow keeps.
    pub top_n: usize,
    /// Smallest slice a rayon worker is handed when mapping in parallel.
    pub parallel_min_len: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            parallel_min_len: 4096,
        }
    }
}

// Arc<str> only serializes with serde's "rc" feature; go through &str instead.
mod label_serde {
    use super::Label;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(label: &Label, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(label)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Label, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Label::from(s))
    }
}
