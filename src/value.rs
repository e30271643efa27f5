//! The element/expression domain the sparse engine operates over
//!
//! The engine only needs three predicates from its element domain: is this a
//! list, is this a concrete integer index component, and is this value
//! numerically equal to the default. [`Value`] is the minimal owned model
//! that supplies them while still being able to carry symbolic cell contents.

use crate::sparse::SparseArray;
use std::fmt;

/// A value in the engine's element domain
///
/// Scalar atoms (`Int`, `Real`, `Symbol`) populate array cells; `List` nests
/// them into dense structures; `Rule` expresses an `index -> value`
/// assignment; `Sparse` embeds an already-canonical sparse array inside a
/// larger expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Machine integer atom
    Int(i64),
    /// Floating point atom
    Real(f64),
    /// Symbolic atom, e.g. an unbound variable
    Symbol(String),
    /// Nested dense sequence
    List(Vec<Value>),
    /// An `index -> value` rule; the left side is a `List` of index components
    Rule(Box<Value>, Box<Value>),
    /// An embedded canonical sparse array
    Sparse(SparseArray),
}

impl Value {
    /// Shorthand for a symbol atom.
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    /// Shorthand for a nested sequence.
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(items)
    }

    /// Build an `index -> value` rule with 1-based integer index components.
    pub fn rule(index: &[i64], value: Value) -> Self {
        let parts = index.iter().map(|&i| Value::Int(i)).collect();
        Value::Rule(Box::new(Value::List(parts)), Box::new(value))
    }

    /// Returns true if this is a nested sequence.
    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Returns true if this is a scalar atom.
    pub fn is_atom(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Real(_) | Value::Symbol(_))
    }

    /// The concrete 1-based index component this value denotes, if any.
    ///
    /// Zero and negative integers are not valid components; symbolic or
    /// non-integer values have no concrete component and return `None`.
    pub fn as_index_component(&self) -> Option<usize> {
        match self {
            Value::Int(i) if *i >= 1 => Some(*i as usize),
            _ => None,
        }
    }

    /// Numeric equality, used when deciding whether a cell equals the
    /// default fill: `Int(0)` and `Real(0.0)` compare equal here even though
    /// they are structurally distinct. Non-numeric values fall back to
    /// structural equality.
    pub fn numeric_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Real(a), Value::Real(b)) => a == b,
            (Value::Int(a), Value::Real(b)) | (Value::Real(b), Value::Int(a)) => *a as f64 == *b,
            _ => self == other,
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Real(value)
    }
}

impl From<&str> for Value {
    fn from(name: &str) -> Self {
        Value::Symbol(name.to_owned())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{i}"),
            Value::Real(r) => write!(f, "{r}"),
            Value::Symbol(name) => write!(f, "{name}"),
            Value::List(items) => {
                write!(f, "{{")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "}}")
            }
            Value::Rule(lhs, rhs) => write!(f, "{lhs} -> {rhs}"),
            Value::Sparse(array) => write!(f, "{array}"),
        }
    }
}
