//! Input classification and dense-to-sparse conversion

use crate::error::{Error, Result};
use crate::shape::Shape;
use crate::value::Value;

use super::core::{Index, Rule, RuleSpec, SparseArray};

/// A classified sparse-array input
///
/// Exactly one classification step decides which conversion applies; the
/// conversion itself never re-tests the input's form.
#[derive(Debug, Clone, PartialEq)]
pub enum SparseInput<'a> {
    /// A list of `index -> value` rules, extracted into [`RuleSpec`]s
    RuleList(Vec<RuleSpec>),
    /// A nested dense sequence
    DenseSequence(&'a Value),
    /// An already-canonical sparse array
    SparseLiteral(&'a SparseArray),
}

/// Classify a value as a sparse-array input
///
/// A list whose first element is a rule expression classifies as a rule
/// list (every element must then be a rule); any other non-empty list is a
/// dense sequence; a sparse array literal passes through.
///
/// # Errors
///
/// Returns [`Error::NotConvertible`] for atoms, empty lists, and rule lists
/// with non-rule elements.
pub fn classify(expr: &Value) -> Result<SparseInput<'_>> {
    match expr {
        Value::Sparse(array) => Ok(SparseInput::SparseLiteral(array)),
        Value::List(items) if items.is_empty() => Err(Error::NotConvertible),
        Value::List(items) if matches!(items[0], Value::Rule(..)) => {
            let mut rules = Vec::with_capacity(items.len());
            for item in items {
                let Value::Rule(lhs, rhs) = item else {
                    return Err(Error::NotConvertible);
                };
                // A scalar position is shorthand for a rank-1 index
                let index = match lhs.as_ref() {
                    Value::List(parts) => parts.clone(),
                    other => vec![other.clone()],
                };
                rules.push(RuleSpec {
                    index,
                    value: rhs.as_ref().clone(),
                });
            }
            Ok(SparseInput::RuleList(rules))
        }
        Value::List(_) => Ok(SparseInput::DenseSequence(expr)),
        _ => Err(Error::NotConvertible),
    }
}

/// Convert a classified input into a canonical sparse array
pub fn to_sparse(input: SparseInput<'_>) -> Result<SparseArray> {
    match input {
        SparseInput::RuleList(rules) => SparseArray::from_rules(&rules),
        SparseInput::DenseSequence(expr) => SparseArray::from_dense(expr),
        SparseInput::SparseLiteral(array) => Ok(array.clone()),
    }
}

impl SparseArray {
    /// Build a sparse array from an arbitrary value: classify once, then
    /// convert
    ///
    /// # Errors
    ///
    /// Propagates [`classify`] and conversion failures; the input is never
    /// partially consumed or mutated.
    pub fn from_value(expr: &Value) -> Result<Self> {
        to_sparse(classify(expr)?)
    }

    /// Convert a nested dense sequence into a canonical sparse array
    ///
    /// Elements may be scalar atoms, further nested sequences, or pre-built
    /// sparse arrays (accepted as-is, contributing their own dims and
    /// rules). Positions numerically equal to the default are skipped to
    /// preserve sparsity. Rule order is deterministic: child order, then
    /// within-child order - materialization's last-write-wins depends on it.
    ///
    /// # Errors
    ///
    /// - [`Error::NotConvertible`] for non-lists, empty lists, and lists
    ///   mixing scalars with sequences
    /// - [`Error::ShapeMismatch`] when sibling sub-arrays disagree in shape
    ///   (ragged input); no partial result is produced
    pub fn from_dense(expr: &Value) -> Result<Self> {
        let Value::List(items) = expr else {
            return Err(Error::NotConvertible);
        };
        let Some(first) = items.first() else {
            return Err(Error::NotConvertible);
        };

        // The first element decides between the scalar base case and the
        // recursive merge
        if first.is_atom() {
            return from_flat(items);
        }

        let mut children: Vec<SparseArray> = Vec::with_capacity(items.len());
        for item in items {
            let child = match item {
                Value::Sparse(array) => array.clone(),
                Value::List(_) => SparseArray::from_dense(item)?,
                _ => return Err(Error::NotConvertible),
            };
            if let Some(sibling) = children.first() {
                if child.dims() != sibling.dims() {
                    return Err(Error::shape_mismatch(sibling.dims(), child.dims()));
                }
                if !child.default_value().numeric_eq(sibling.default_value()) {
                    return Err(Error::NotConvertible);
                }
            }
            children.push(child);
        }

        let mut dims = Shape::new();
        dims.push(children.len());
        for &dim in children[0].dims() {
            dims.push(dim);
        }
        let default = children[0].default_value().clone();

        // Reindex every child rule under its 1-based position
        let mut rules = Vec::new();
        for (i, child) in children.iter().enumerate() {
            for rule in child.rules() {
                let index: Index = std::iter::once(i + 1)
                    .chain(rule.index().iter().copied())
                    .collect();
                rules.push(Rule::new(index, rule.value().clone()));
            }
        }
        Ok(SparseArray::from_parts(dims, default, rules))
    }
}

/// Rank-1 base case: a flat sequence of scalar atoms
fn from_flat(items: &[Value]) -> Result<SparseArray> {
    let default = Value::Int(0);
    let mut rules = Vec::new();
    for (i, item) in items.iter().enumerate() {
        if !item.is_atom() {
            return Err(Error::NotConvertible);
        }
        if item.numeric_eq(&default) {
            continue;
        }
        let mut index = Index::new();
        index.push(i + 1);
        rules.push(Rule::new(index, item.clone()));
    }
    Ok(SparseArray::from_parts(
        Shape::from([items.len()]),
        default,
        rules,
    ))
}
