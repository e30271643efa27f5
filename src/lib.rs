//! # sparray
//!
//! **Canonical sparse multidimensional arrays.**
//!
//! sparray stores a multidimensional array as a dimension vector, a default
//! fill value, and only the entries that differ from that default - and
//! converts between that canonical form and fully materialized nested dense
//! structures.
//!
//! ## Features
//!
//! - **Rule-based construction**: build arrays from `index -> value` rules,
//!   with dimensions supplied explicitly or inferred from the rule positions
//! - **Dense conversion**: recursively merge nested dense sequences (which
//!   may embed pre-built sparse sub-arrays) into one canonical sparse array,
//!   rejecting ragged input
//! - **Materialization**: expand a sparse array back into an independent
//!   dense nested structure, with last-write-wins overwrite semantics and
//!   whole-slice writes through partial indices
//! - **Shape queries**: O(1) dimensions for canonical arrays, with a
//!   ragged-aware fallback for literal nested structures
//!
//! ## Quick Start
//!
//! ```
//! use sparray::prelude::*;
//!
//! let a = SparseArray::from_rules_and_dims(
//!     &[RuleSpec::at(&[1, 2], Value::Int(1))],
//!     [2, 2],
//! )?;
//!
//! assert_eq!(a.to_string(), "SparseArray[<1>, {2, 2}]");
//! assert_eq!(
//!     a.normal(),
//!     Value::List(vec![
//!         Value::List(vec![Value::Int(0), Value::Int(1)]),
//!         Value::List(vec![Value::Int(0), Value::Int(0)]),
//!     ])
//! );
//! # Ok::<(), sparray::error::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod error;
pub mod shape;
pub mod sparse;
pub mod value;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::shape::Shape;
    pub use crate::sparse::{classify, dimensions, to_sparse, RuleSpec, SparseArray, SparseInput};
    pub use crate::value::Value;
}
