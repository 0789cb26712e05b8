//! Rewrite rules applied by the smart constructors.
//!
//! Every function here receives already wrapped operands that are known not
//! to be unresolvable, and returns the simplest equivalent expression it can
//! find. The rules are:
//!
//! - flattening and deduplication of nested `&&`/`||` sets
//! - constant folding and absorbing literals in sets
//! - opposite-pair detection (`a && !a`, `a || !a`)
//! - De Morgan, double negation, comparison flipping
//! - conditional canonicalization, branch inlining and collapsing
//! - symmetric reduction of equality against booleans and conditionals

use crate::ast::{
    is_comparison, is_constant, is_false, is_true, ComparisonOperator, ConstantValue, Expression,
    LogicalOperator,
};
use crate::builder::{and, constant, equal, or};

/// Deep structural equality. An unresolvable expression is never equal to
/// anything, itself included.
pub fn check_expressions_are_equal(a: &Expression, b: &Expression) -> bool {
    a == b
}

// =============================================================================
// Logical sets
// =============================================================================

/// Merges direct child sets of the same operator into one operand list and
/// drops syntactic duplicates. The first occurrence wins.
pub(crate) fn flatten_set(operator: LogicalOperator, operands: Vec<Expression>) -> Vec<Expression> {
    let mut flattened: Vec<Expression> = Vec::with_capacity(operands.len());
    for operand in operands {
        let candidates = match operand {
            Expression::Set {
                operator: inner,
                operands,
            } if inner == operator => operands,
            other => vec![other],
        };
        for candidate in candidates {
            if !flattened.iter().any(|existing| *existing == candidate) {
                flattened.push(candidate);
            }
        }
    }
    flattened
}

/// Folds a flattened operand list into the simplest equivalent expression.
///
/// Literals are judged by truthiness: a falsy literal absorbs a conjunction,
/// a truthy one a disjunction, and the others are dropped. A lone operand is
/// returned as is.
pub(crate) fn fold_set(operator: LogicalOperator, mut operands: Vec<Expression>) -> Expression {
    if operands.len() == 1 {
        return operands.remove(0);
    }

    let absorbing = operator == LogicalOperator::Or;
    let mut absorbed = false;
    let mut non_trivial = Vec::with_capacity(operands.len());

    for operand in operands {
        match operand.as_constant() {
            Some(value) if value.is_truthy() == absorbing => absorbed = true,
            Some(_) => {}
            None => non_trivial.push(operand),
        }
    }

    if absorbed {
        return constant(absorbing);
    }
    match non_trivial.len() {
        0 => constant(!absorbing),
        1 => non_trivial.remove(0),
        _ if has_opposite_expressions(&non_trivial) => constant(absorbing),
        _ => Expression::Set {
            operator,
            operands: non_trivial,
        },
    }
}

/// Returns true if some operand is the syntactic negation of a later one.
fn has_opposite_expressions(operands: &[Expression]) -> bool {
    operands.iter().enumerate().any(|(i, operand)| {
        let negated = negate(operand.clone());
        operands[i + 1..].iter().any(|other| negated == *other)
    })
}

// =============================================================================
// Negation
// =============================================================================

/// Pushes a negation as far into `operand` as the rules allow.
pub(crate) fn negate(operand: Expression) -> Expression {
    match operand {
        Expression::Unresolvable => Expression::Unresolvable,
        Expression::Constant { value } => constant(!value.is_truthy()),
        Expression::Set { operator, operands }
            if operands
                .iter()
                .all(|o| is_constant(o) || is_comparison(o)) =>
        {
            let negated: Vec<Expression> = operands.into_iter().map(negate).collect();
            match operator {
                LogicalOperator::Or => and(negated),
                LogicalOperator::And => or(negated),
            }
        }
        Expression::Comparison {
            operator,
            operand1,
            operand2,
        } => Expression::Comparison {
            operator: operator.negate(),
            operand1,
            operand2,
        },
        Expression::Not { operand } => *operand,
        other => Expression::Not {
            operand: Box::new(other),
        },
    }
}

// =============================================================================
// Equality
// =============================================================================

/// One direction of the symmetric equality reductions: `left === right`.
pub(crate) fn reduce_equality(left: &Expression, right: &Expression) -> Option<Expression> {
    match left {
        Expression::Comparison { .. } if is_true(right) => Some(left.clone()),
        Expression::Comparison { .. } if is_false(right) => Some(negate(left.clone())),
        Expression::IfElse {
            condition,
            on_true,
            on_false,
        } => {
            if **on_true == *right {
                Some(or([
                    (**condition).clone(),
                    equal((**on_false).clone(), right.clone()),
                ]))
            } else if **on_false == *right {
                Some(or([
                    negate((**condition).clone()),
                    equal((**on_true).clone(), right.clone()),
                ]))
            } else {
                match (on_true.as_constant(), on_false.as_constant(), right.as_constant()) {
                    (Some(t), Some(f), Some(r)) if !t.strict_equals(r) && !f.strict_equals(r) => {
                        Some(constant(false))
                    }
                    _ => None,
                }
            }
        }
        _ => None,
    }
}

/// Evaluates a comparison between two literals.
pub(crate) fn fold_comparison(
    operator: ComparisonOperator,
    left: &Expression,
    right: &Expression,
) -> Option<Expression> {
    match (left.as_constant(), right.as_constant()) {
        (Some(l), Some(r)) => Some(constant(operator.evaluate(l, r))),
        _ => None,
    }
}

// =============================================================================
// Conditionals
// =============================================================================

/// Removes a negated condition by swapping the branches, then inlines nested
/// conditionals that test the same condition.
pub(crate) fn canonicalize_if_else(
    condition: Expression,
    on_true: Expression,
    on_false: Expression,
) -> (Expression, Expression, Expression) {
    let (condition, on_true, on_false) = match condition {
        Expression::Not { operand } => (*operand, on_false, on_true),
        other => (other, on_true, on_false),
    };

    let on_true = match on_true {
        Expression::IfElse {
            condition: inner,
            on_true: inner_true,
            ..
        } if *inner == condition => *inner_true,
        other => other,
    };
    let on_false = match on_false {
        Expression::IfElse {
            condition: inner,
            on_false: inner_false,
            ..
        } if *inner == condition => *inner_false,
        other => other,
    };

    (condition, on_true, on_false)
}

/// Collapses a canonical conditional whose shape makes the choice trivial.
pub(crate) fn collapse_if_else(
    condition: &Expression,
    on_true: &Expression,
    on_false: &Expression,
) -> Option<Expression> {
    if let Some(value) = condition.as_constant() {
        return Some(if value.is_truthy() {
            on_true.clone()
        } else {
            on_false.clone()
        });
    }
    if on_true == on_false {
        return Some(on_true.clone());
    }
    if is_false(on_false) {
        return Some(and([condition.clone(), on_true.clone()]));
    }
    if is_true(on_false) {
        return Some(or([negate(condition.clone()), on_true.clone()]));
    }
    if is_false(on_true) {
        return Some(and([negate(condition.clone()), on_false.clone()]));
    }
    if is_true(on_true) {
        return Some(or([condition.clone(), on_false.clone()]));
    }
    None
}

// =============================================================================
// Concatenation
// =============================================================================

/// Folds literal parts into one string constant. Undefined parts are skipped.
pub(crate) fn fold_concat(parts: &[Expression]) -> Option<Expression> {
    let mut folded = String::new();
    for part in parts {
        match part.as_constant()? {
            ConstantValue::Undefined => {}
            value => folded.push_str(&value.to_js_string()),
        }
    }
    Some(constant(folded))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{not, path_in_model};

    #[test]
    fn test_flatten_merges_same_operator() {
        let inner = Expression::Set {
            operator: LogicalOperator::And,
            operands: vec![path_in_model("A"), path_in_model("B")],
        };
        let flattened = flatten_set(LogicalOperator::And, vec![inner, path_in_model("C")]);
        assert_eq!(
            flattened,
            vec![path_in_model("A"), path_in_model("B"), path_in_model("C")]
        );
    }

    #[test]
    fn test_flatten_keeps_other_operator() {
        let inner = Expression::Set {
            operator: LogicalOperator::Or,
            operands: vec![path_in_model("A"), path_in_model("B")],
        };
        let flattened = flatten_set(LogicalOperator::And, vec![inner.clone(), path_in_model("C")]);
        assert_eq!(flattened, vec![inner, path_in_model("C")]);
    }

    #[test]
    fn test_flatten_dedups_first_occurrence() {
        let flattened = flatten_set(
            LogicalOperator::Or,
            vec![path_in_model("A"), path_in_model("B"), path_in_model("A")],
        );
        assert_eq!(flattened, vec![path_in_model("A"), path_in_model("B")]);
    }

    #[test]
    fn test_flatten_never_dedups_unresolvable() {
        let flattened = flatten_set(
            LogicalOperator::Or,
            vec![Expression::Unresolvable, Expression::Unresolvable],
        );
        assert_eq!(flattened.len(), 2);
    }

    #[test]
    fn test_fold_set_absorbing() {
        let folded = fold_set(
            LogicalOperator::And,
            vec![path_in_model("A"), constant(false)],
        );
        assert_eq!(folded, constant(false));
        let folded = fold_set(LogicalOperator::Or, vec![path_in_model("A"), constant(true)]);
        assert_eq!(folded, constant(true));
    }

    #[test]
    fn test_fold_set_all_constants() {
        assert_eq!(
            fold_set(LogicalOperator::And, vec![constant(true), constant(true)]),
            constant(true)
        );
        assert_eq!(
            fold_set(LogicalOperator::And, vec![constant(true), constant("x")]),
            constant(true)
        );
        assert_eq!(
            fold_set(LogicalOperator::And, vec![constant(true), constant("")]),
            constant(false)
        );
        assert_eq!(
            fold_set(LogicalOperator::Or, vec![constant(false), constant(2)]),
            constant(true)
        );
        assert_eq!(
            fold_set(LogicalOperator::Or, vec![constant(false), constant(false)]),
            constant(false)
        );
    }

    #[test]
    fn test_negate_comparison_flips_operator() {
        let cmp = Expression::Comparison {
            operator: ComparisonOperator::LessThan,
            operand1: Box::new(path_in_model("Qty")),
            operand2: Box::new(constant(5)),
        };
        match negate(cmp) {
            Expression::Comparison { operator, .. } => {
                assert_eq!(operator, ComparisonOperator::GreaterOrEqual)
            }
            other => panic!("expected comparison, got {:?}", other),
        }
    }

    #[test]
    fn test_negate_de_morgan_only_for_comparisons() {
        let a = Expression::Comparison {
            operator: ComparisonOperator::Equal,
            operand1: Box::new(path_in_model("A")),
            operand2: Box::new(constant(1)),
        };
        let b = Expression::Comparison {
            operator: ComparisonOperator::Equal,
            operand1: Box::new(path_in_model("B")),
            operand2: Box::new(constant(2)),
        };
        let negated = negate(or([a, b]));
        match negated {
            Expression::Set { operator, operands } => {
                assert_eq!(operator, LogicalOperator::And);
                assert!(operands.iter().all(|o| matches!(
                    o,
                    Expression::Comparison {
                        operator: ComparisonOperator::NotEqual,
                        ..
                    }
                )));
            }
            other => panic!("expected set, got {:?}", other),
        }

        let paths = or([path_in_model("A"), path_in_model("B")]);
        assert!(matches!(negate(paths), Expression::Not { .. }));
    }

    #[test]
    fn test_canonicalize_swaps_negated_condition() {
        let (c, t, f) = canonicalize_if_else(not(path_in_model("A")), constant(1), constant(2));
        assert_eq!(c, path_in_model("A"));
        assert_eq!(t, constant(2));
        assert_eq!(f, constant(1));
    }

    #[test]
    fn test_canonicalize_inlines_nested_same_condition() {
        let nested = Expression::IfElse {
            condition: Box::new(path_in_model("X")),
            on_true: Box::new(constant("a")),
            on_false: Box::new(constant("b")),
        };
        let (_, t, f) = canonicalize_if_else(path_in_model("X"), nested.clone(), constant("c"));
        assert_eq!(t, constant("a"));
        assert_eq!(f, constant("c"));

        let (_, t, f) = canonicalize_if_else(path_in_model("X"), constant("c"), nested);
        assert_eq!(t, constant("c"));
        assert_eq!(f, constant("b"));
    }

    #[test]
    fn test_fold_concat_skips_undefined() {
        let parts = vec![
            constant("a"),
            constant(ConstantValue::Undefined),
            constant(1),
            constant(true),
        ];
        assert_eq!(fold_concat(&parts), Some(constant("a1true")));
        assert_eq!(fold_concat(&[path_in_model("A")]), None);
    }
}
