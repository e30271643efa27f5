//! Dimension inference from rule positions

use crate::error::{Error, Result};
use crate::shape::Shape;

use super::core::RuleSpec;

/// Infer a dimension vector from a set of rules
///
/// The rank is taken from the first rule's index length. Each axis bound is
/// the maximum concrete index component observed on that axis across all
/// rules; symbolic or non-integer components are ignored for bound purposes.
/// Components beyond the first rule's rank are likewise ignored here - rank
/// agreement is enforced by construction, not by inference.
///
/// # Errors
///
/// Returns [`Error::DimensionInference`] carrying the offending rule set if
/// the rules are empty or some axis never sees a concrete index component.
pub fn infer_dims(rules: &[RuleSpec]) -> Result<Shape> {
    let Some(first) = rules.first() else {
        return Err(Error::dimension_inference(rules));
    };
    let rank = first.index.len();
    let mut dims = vec![0usize; rank];
    for rule in rules {
        for (axis, component) in rule.index.iter().enumerate().take(rank) {
            if let Some(i) = component.as_index_component() {
                if dims[axis] < i {
                    dims[axis] = i;
                }
            }
        }
    }
    if dims.iter().any(|&d| d == 0) {
        return Err(Error::dimension_inference(rules));
    }
    Ok(dims.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn test_per_axis_maximum() {
        let rules = [
            RuleSpec::at(&[1, 4], Value::Int(1)),
            RuleSpec::at(&[3, 2], Value::Int(2)),
            RuleSpec::at(&[2, 1], Value::Int(3)),
        ];
        let dims = infer_dims(&rules).unwrap();
        assert_eq!(dims.as_slice(), [3, 4]);
    }

    #[test]
    fn test_symbolic_components_ignored() {
        let rules = [
            RuleSpec {
                index: vec![Value::symbol("i"), Value::Int(2)],
                value: Value::Int(1),
            },
            RuleSpec::at(&[3, 1], Value::Int(2)),
        ];
        let dims = infer_dims(&rules).unwrap();
        assert_eq!(dims.as_slice(), [3, 2]);
    }

    #[test]
    fn test_all_symbolic_axis_fails() {
        // Axis 0 never sees a concrete component
        let rules = [
            RuleSpec {
                index: vec![Value::symbol("i"), Value::Int(2)],
                value: Value::Int(1),
            },
            RuleSpec {
                index: vec![Value::symbol("j"), Value::Int(1)],
                value: Value::Int(2),
            },
        ];
        let err = infer_dims(&rules).unwrap_err();
        assert!(matches!(err, Error::DimensionInference { .. }));
    }

    #[test]
    fn test_empty_rules_fail() {
        assert!(matches!(
            infer_dims(&[]).unwrap_err(),
            Error::DimensionInference { .. }
        ));
    }

    #[test]
    fn test_rank_from_first_rule() {
        // Components beyond the first rule's rank do not widen the result
        let rules = [
            RuleSpec::at(&[2], Value::Int(1)),
            RuleSpec::at(&[1, 9], Value::Int(2)),
        ];
        let dims = infer_dims(&rules).unwrap();
        assert_eq!(dims.as_slice(), [2]);
    }
}
