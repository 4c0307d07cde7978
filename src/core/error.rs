//! Error types for conversion and cache lookups.

use crate::core::types::Value;
use thiserror::Error;

/// Contract violations raised by the converter, the cache and the batch operations.
///
/// Both variants are caller errors. Nothing is retried, skipped or defaulted.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NumeralError {
    /// The value has no Roman-numeral label in this crate's domain.
    #[error("value {0} is outside the supported range 1..=50")]
    OutOfDomain(Value),

    /// The value was found in a source but the supplied cache does not cover it.
    ///
    /// Typically happens when the cache was built for a reduced domain
    /// (e.g. the top-N values) and then used against the full source.
    #[error("value {0} is not present in the label cache")]
    LookupMiss(Value),
}

/// A specialized `Result` type for numeral operations.
pub type Result<T> = std::result::Result<T, NumeralError>;
