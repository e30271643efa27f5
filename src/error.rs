//! Error types for sparray

use crate::sparse::RuleSpec;
use thiserror::Error;

/// Result type alias using sparray's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while constructing or converting sparse arrays
///
/// Every variant is a recoverable, typed failure: callers can surface a
/// diagnostic and leave the offending input untouched. Nothing here should
/// terminate the hosting process.
#[derive(Error, Debug)]
pub enum Error {
    /// No concrete index component was observed on some axis, so the
    /// dimensions cannot be inferred
    #[error("the dimensions cannot be determined from the positions {rules:?}")]
    DimensionInference {
        /// The rule set inference was attempted on
        rules: Vec<RuleSpec>,
    },

    /// Sibling sub-arrays have differing shapes (ragged input)
    #[error("shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Shape of the first sibling
        expected: Vec<usize>,
        /// Shape of the disagreeing sibling
        got: Vec<usize>,
    },

    /// A rule index has more components than the array has axes
    #[error("rank mismatch: dimensions imply rank {expected}, rule index has {got} components")]
    RankMismatch {
        /// Rank implied by the dimension vector
        expected: usize,
        /// Number of index components in the rule
        got: usize,
    },

    /// A rule index component exceeds its axis bound
    #[error("index {index} out of bounds for axis {axis} of size {size}")]
    IndexOutOfBounds {
        /// The offending 1-based index component
        index: usize,
        /// The 0-based axis it applies to
        axis: usize,
        /// Size of that axis
        size: usize,
    },

    /// A rule index component is not a concrete positive integer
    #[error("index component at axis {axis} is not a concrete positive integer")]
    NonIntegerIndex {
        /// The 0-based axis of the offending component
        axis: usize,
    },

    /// A dimension vector contains a zero entry
    #[error("dimension of size zero at axis {axis}")]
    ZeroDimension {
        /// The 0-based axis with the zero bound
        axis: usize,
    },

    /// Input is neither a rectangular nested sequence nor a list of rules
    #[error("rectangular array or list of rules expected")]
    NotConvertible,
}

impl Error {
    /// Create a shape mismatch error
    pub fn shape_mismatch(expected: &[usize], got: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
    }

    /// Create a dimension inference error carrying the offending rules
    pub fn dimension_inference(rules: &[RuleSpec]) -> Self {
        Self::DimensionInference {
            rules: rules.to_vec(),
        }
    }
}
