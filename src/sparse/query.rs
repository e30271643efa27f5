//! Shape queries over arbitrary values

use crate::value::Value;

/// The dimensions of a value
///
/// A canonical sparse array short-circuits to its stored dimension vector in
/// O(1), without materializing. Anything else falls back to a generic
/// ragged-aware walk over the literal nested structure: the length of the
/// first axis, then recurse, stopping at the first level of raggedness.
///
/// ```
/// use sparray::prelude::*;
///
/// // Ragged siblings cut the walk short
/// let ragged = Value::list(vec![
///     Value::list(vec![Value::symbol("a"), Value::symbol("b")]),
///     Value::list(vec![Value::symbol("b"), Value::symbol("c")]),
///     Value::list(vec![Value::symbol("c"), Value::symbol("d"), Value::symbol("e")]),
/// ]);
/// assert_eq!(dimensions(&ragged), vec![3]);
/// ```
pub fn dimensions(expr: &Value) -> Vec<usize> {
    if let Value::Sparse(array) = expr {
        return array.dims().to_vec();
    }
    dense_dimensions(expr)
}

fn dense_dimensions(expr: &Value) -> Vec<usize> {
    let Value::List(items) = expr else {
        return Vec::new();
    };
    let mut sub: Option<Vec<usize>> = None;
    for item in items {
        let dims = dense_dimensions(item);
        match &sub {
            None => sub = Some(dims),
            Some(prev) if *prev != dims => {
                sub = Some(Vec::new());
                break;
            }
            Some(_) => {}
        }
    }
    let mut dims = vec![items.len()];
    dims.extend(sub.unwrap_or_default());
    dims
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sparse::{RuleSpec, SparseArray};

    fn sym(name: &str) -> Value {
        Value::symbol(name)
    }

    #[test]
    fn test_sparse_short_circuit() {
        // Dims come from the canonical value, not from materialization
        let a = SparseArray::from_rules_and_dims(&[RuleSpec::at(&[1, 2], Value::Int(1))], [3, 3])
            .unwrap();
        assert_eq!(dimensions(&Value::Sparse(a)), vec![3, 3]);
    }

    #[test]
    fn test_vector_and_matrix() {
        let vector = Value::list(vec![sym("a"), sym("b"), sym("c")]);
        assert_eq!(dimensions(&vector), vec![3]);

        let matrix = Value::list(vec![
            Value::list(vec![sym("a"), sym("b")]),
            Value::list(vec![sym("c"), sym("d")]),
            Value::list(vec![sym("e"), sym("f")]),
        ]);
        assert_eq!(dimensions(&matrix), vec![3, 2]);
    }

    #[test]
    fn test_ragged_stops_at_first_mismatch() {
        let ragged = Value::list(vec![
            Value::list(vec![sym("a"), sym("b")]),
            Value::list(vec![sym("b"), sym("c")]),
            Value::list(vec![sym("c"), sym("d"), sym("e")]),
        ]);
        assert_eq!(dimensions(&ragged), vec![3]);
    }

    #[test]
    fn test_atom_has_no_dimensions() {
        assert_eq!(dimensions(&sym("a")), Vec::<usize>::new());
        assert_eq!(dimensions(&Value::Int(1)), Vec::<usize>::new());
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(dimensions(&Value::List(vec![])), vec![0]);
    }
}
