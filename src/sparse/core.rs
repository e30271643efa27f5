//! Core sparse array value: struct, construction, validation, accessors

use crate::error::{Error, Result};
use crate::shape::{Shape, STACK_DIMS};
use crate::value::Value;
use smallvec::SmallVec;
use std::fmt;

use super::infer::infer_dims;

/// A stored rule index: concrete 1-based components, one per addressed axis
///
/// A full-rank index addresses a single cell; a strict prefix of the rank
/// addresses a whole sub-structure.
pub type Index = SmallVec<[usize; STACK_DIMS]>;

/// A validated `index -> value` rule stored inside a [`SparseArray`]
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    index: Index,
    value: Value,
}

impl Rule {
    pub(crate) fn new(index: Index, value: Value) -> Self {
        Self { index, value }
    }

    /// The 1-based index components of this rule.
    pub fn index(&self) -> &[usize] {
        &self.index
    }

    /// The value stored at this rule's index.
    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// An `index -> value` rule as supplied by a caller, before validation
///
/// Index components are arbitrary [`Value`]s at this stage; only concrete
/// positive integers survive into canonical form, but dimension inference
/// tolerates (and ignores) symbolic components.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSpec {
    /// Index components, one per axis; may be a strict prefix of the rank
    pub index: Vec<Value>,
    /// The value stored at that index
    pub value: Value,
}

impl RuleSpec {
    /// Build a rule spec from concrete 1-based index components.
    pub fn at(index: &[usize], value: Value) -> Self {
        Self {
            index: index.iter().map(|&i| Value::Int(i as i64)).collect(),
            value,
        }
    }
}

/// Canonical sparse array: dimension vector, default fill, explicit rules
///
/// Immutable after construction; all constructors validate the rules against
/// the dimension vector, so a `SparseArray` never holds an out-of-bounds or
/// symbolic index. Duplicate indices are allowed and resolved
/// last-write-wins at materialization.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseArray {
    dims: Shape,
    default: Box<Value>,
    rules: Vec<Rule>,
}

impl SparseArray {
    /// Build a sparse array from rules, inferring the dimensions from the
    /// maximum concrete index component observed on each axis
    ///
    /// The default fill is the zero identity, `Value::Int(0)`. The inferred
    /// dimensions are the tightest bounds covering the rules; callers that
    /// want padding beyond the maximum observed index must supply dimensions
    /// explicitly.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionInference`] if some axis never sees a
    /// concrete index component, plus any of the construction errors below.
    pub fn from_rules(rules: &[RuleSpec]) -> Result<Self> {
        let dims = infer_dims(rules)?;
        Self::from_rules_dims_default(rules, dims, Value::Int(0))
    }

    /// Build a sparse array from rules and explicit dimensions, with the
    /// zero identity as the default fill
    pub fn from_rules_and_dims(rules: &[RuleSpec], dims: impl Into<Shape>) -> Result<Self> {
        Self::from_rules_dims_default(rules, dims, Value::Int(0))
    }

    /// Build a sparse array from rules, explicit dimensions, and an explicit
    /// default fill
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - a dimension is zero ([`Error::ZeroDimension`])
    /// - a rule index is empty or longer than the rank ([`Error::RankMismatch`])
    /// - an index component is not a concrete positive integer
    ///   ([`Error::NonIntegerIndex`])
    /// - an index component exceeds its axis bound
    ///   ([`Error::IndexOutOfBounds`])
    pub fn from_rules_dims_default(
        rules: &[RuleSpec],
        dims: impl Into<Shape>,
        default: Value,
    ) -> Result<Self> {
        let dims = dims.into();
        for (axis, &dim) in dims.iter().enumerate() {
            if dim == 0 {
                return Err(Error::ZeroDimension { axis });
            }
        }
        let rules = validate_rules(rules, &dims)?;
        Ok(Self {
            dims,
            default: Box::new(default),
            rules,
        })
    }

    /// Assemble a sparse array from components already known to be
    /// consistent. Only the converters use this; everything public goes
    /// through validation.
    pub(crate) fn from_parts(dims: Shape, default: Value, rules: Vec<Rule>) -> Self {
        Self {
            dims,
            default: Box::new(default),
            rules,
        }
    }

    /// The dimension vector.
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// The dimension vector as a [`Shape`].
    pub fn shape(&self) -> &Shape {
        &self.dims
    }

    /// The rank (number of axes).
    #[inline]
    pub fn rank(&self) -> usize {
        self.dims.rank()
    }

    /// The number of stored rules.
    #[inline]
    pub fn nnz(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rules are stored (every cell is the default).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The default fill value.
    pub fn default_value(&self) -> &Value {
        &self.default
    }

    /// The stored rules, in application order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

fn validate_rules(rules: &[RuleSpec], dims: &Shape) -> Result<Vec<Rule>> {
    let rank = dims.rank();
    let mut out = Vec::with_capacity(rules.len());
    for spec in rules {
        if spec.index.is_empty() || spec.index.len() > rank {
            return Err(Error::RankMismatch {
                expected: rank,
                got: spec.index.len(),
            });
        }
        let mut index = Index::with_capacity(spec.index.len());
        for (axis, component) in spec.index.iter().enumerate() {
            let i = component
                .as_index_component()
                .ok_or(Error::NonIntegerIndex { axis })?;
            let size = dims[axis];
            if i > size {
                return Err(Error::IndexOutOfBounds {
                    index: i,
                    axis,
                    size,
                });
            }
            index.push(i);
        }
        out.push(Rule::new(index, spec.value.clone()));
    }
    Ok(out)
}

/// Canonical display, `SparseArray[<n>, dims]`: stored rule count, then the
/// braced dimension vector. Callers compare these strings verbatim.
impl fmt::Display for SparseArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SparseArray[<{}>, {}]", self.rules.len(), self.dims)
    }
}
