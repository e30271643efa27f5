//! Canonical sparse array support
//!
//! A sparse array is stored as a dimension vector, a default fill value, and
//! an ordered list of `index -> value` rules for the entries that differ
//! from the default. This module provides:
//!
//! - **Construction** from rules, with dimensions supplied explicitly or
//!   inferred from the rule positions ([`SparseArray::from_rules`] and
//!   friends)
//! - **Conversion** of nested dense sequences - possibly embedding pre-built
//!   sparse sub-arrays - into canonical form ([`SparseArray::from_dense`]),
//!   behind a single input classification step ([`classify`])
//! - **Materialization** back into an independent dense nested structure
//!   ([`SparseArray::normal`])
//! - **Shape queries** that short-circuit for canonical arrays
//!   ([`dimensions`])
//!
//! Rule order is significant: materialization applies rules as unconditional
//! overwrites in stored order, so the last rule for a duplicated index wins.

mod convert;
mod core;
mod infer;
mod normal;
mod query;

pub use convert::{classify, to_sparse, SparseInput};
pub use core::{Index, Rule, RuleSpec, SparseArray};
pub use infer::infer_dims;
pub use query::dimensions;
