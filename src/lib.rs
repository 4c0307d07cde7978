// src/lib.rs

pub mod core;
pub mod report;
pub mod sample;

pub use crate::core::cache::LabelCache;
pub use crate::core::engine::NumeralEngine;
pub use crate::core::error::{NumeralError, Result};
pub use crate::core::mapper::{map_all, MapStrategy};
pub use crate::core::ranking::{top_n, RankStrategy};
pub use crate::core::summary::{summarize, SummaryStrategy};
pub use crate::core::types::{EngineConfig, FrequencyCount, Label, SummaryRow, Value};
