//! Materialization to normal (dense) form

use crate::value::Value;

use super::core::SparseArray;

impl SparseArray {
    /// Materialize this sparse array into an independent dense nested
    /// structure
    ///
    /// A fresh default-filled scaffold of the declared shape is allocated
    /// per call, then every rule is applied in stored order as an
    /// unconditional indexed overwrite: a full-rank index overwrites a
    /// scalar leaf, a strict prefix overwrites the entire addressed
    /// sub-structure. The last rule for a duplicated index therefore wins.
    ///
    /// The output never aliases this array's rules or any previous
    /// materialization; repeated calls yield structurally equal, independent
    /// values. There is no caching.
    pub fn normal(&self) -> Value {
        let mut table = scaffold(self.dims(), self.default_value());
        for rule in self.rules() {
            write_at(&mut table, rule.index(), rule.value());
        }
        table
    }
}

fn scaffold(dims: &[usize], default: &Value) -> Value {
    match dims.split_first() {
        None => default.clone(),
        Some((&n, rest)) => Value::List((0..n).map(|_| scaffold(rest, default)).collect()),
    }
}

fn write_at(slot: &mut Value, index: &[usize], value: &Value) {
    match index.split_first() {
        None => *slot = value.clone(),
        Some((&i, rest)) => {
            // Bounds were validated at construction; the slot can still be a
            // scalar if an earlier prefix rule overwrote this slice, in
            // which case the deeper write has nothing to address.
            if let Value::List(items) = slot {
                if let Some(child) = items.get_mut(i - 1) {
                    write_at(child, rest, value);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sparse::RuleSpec;

    fn sym(name: &str) -> Value {
        Value::symbol(name)
    }

    #[test]
    fn test_normal_fills_default_and_applies_rules() {
        // SparseArray[{{1, 2} -> 1}, {2, 2}] // Normal == {{0, 1}, {0, 0}}
        let a = SparseArray::from_rules_and_dims(&[RuleSpec::at(&[1, 2], Value::Int(1))], [2, 2])
            .unwrap();
        assert_eq!(
            a.normal(),
            Value::list(vec![
                Value::list(vec![Value::Int(0), Value::Int(1)]),
                Value::list(vec![Value::Int(0), Value::Int(0)]),
            ])
        );
    }

    #[test]
    fn test_last_rule_wins_on_duplicates() {
        let a = SparseArray::from_rules_and_dims(
            &[
                RuleSpec::at(&[1, 1], sym("x")),
                RuleSpec::at(&[1, 1], sym("y")),
            ],
            [1, 1],
        )
        .unwrap();
        assert_eq!(a.normal(), Value::list(vec![Value::list(vec![sym("y")])]));
    }

    #[test]
    fn test_prefix_index_overwrites_slice() {
        // {2} -> r replaces the whole second row
        let a = SparseArray::from_rules_and_dims(
            &[
                RuleSpec::at(&[1, 1], sym("a")),
                RuleSpec::at(&[2], sym("r")),
            ],
            [2, 2],
        )
        .unwrap();
        assert_eq!(
            a.normal(),
            Value::list(vec![
                Value::list(vec![sym("a"), Value::Int(0)]),
                sym("r"),
            ])
        );
    }

    #[test]
    fn test_custom_default_fills_untouched_cells() {
        let a = SparseArray::from_rules_dims_default(
            &[RuleSpec::at(&[2], Value::Int(9))],
            [3],
            sym("e"),
        )
        .unwrap();
        assert_eq!(
            a.normal(),
            Value::list(vec![sym("e"), Value::Int(9), sym("e")])
        );
    }

    #[test]
    fn test_repeated_calls_are_independent() {
        let a = SparseArray::from_rules_and_dims(&[RuleSpec::at(&[1, 2], Value::Int(1))], [2, 2])
            .unwrap();
        let first = a.normal();
        let second = a.normal();
        assert_eq!(first, second);

        // Mutating one materialization leaves the other (and the array) intact
        let mut third = a.normal();
        if let Value::List(rows) = &mut third {
            rows[0] = sym("clobbered");
        }
        assert_eq!(a.normal(), first);
    }

    #[test]
    fn test_rank_three() {
        let a = SparseArray::from_rules_and_dims(
            &[RuleSpec::at(&[2, 1, 2], Value::Int(7))],
            [2, 1, 2],
        )
        .unwrap();
        assert_eq!(
            a.normal(),
            Value::list(vec![
                Value::list(vec![Value::list(vec![Value::Int(0), Value::Int(0)])]),
                Value::list(vec![Value::list(vec![Value::Int(0), Value::Int(7)])]),
            ])
        );
    }
}
