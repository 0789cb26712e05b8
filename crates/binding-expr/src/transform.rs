//! Recursive replace-by-kind rewriting of expression trees.

use crate::ast::{has_unresolvable, Expression, ExpressionKind, LogicalOperator};
use crate::builder::{and, call_function, comparison, concat, if_else, not, or, truthy};

/// Rebuilds `expression` depth-first, replacing every node of kind
/// `target_kind` with the result of `transform_fn`.
///
/// Calls, formatters, concatenations and composite types are always
/// descended into. Conditionals, negations, coercions, sets and comparisons
/// are only descended into when `include_all_kinds` is set; they are rebuilt
/// through their constructors, so the result stays simplified.
///
/// A matching node is handed to `transform_fn` as it was before its children
/// were rewritten. Its children are still walked first, so `transform_fn`
/// also sees every match nested inside it, but the replacements made for
/// those nested matches are discarded along with the rewritten children.
/// A callback that collects matches of a container kind therefore sees a
/// nested match on its own and again inside its enclosing match.
///
/// ```rust
/// use binding_expr::{concat, constant, path_in_model, transform_recursively, ExpressionKind};
///
/// let greeting = concat([constant("Hello "), path_in_model("Name")]);
/// let mut seen = Vec::new();
/// let rewritten = transform_recursively(
///     greeting,
///     ExpressionKind::PathInModel,
///     &mut |path| {
///         seen.push(path);
///         constant("World")
///     },
///     false,
/// );
/// assert_eq!(rewritten, constant("Hello World"));
/// assert_eq!(seen, vec![path_in_model("Name")]);
/// ```
pub fn transform_recursively<F>(
    expression: Expression,
    target_kind: ExpressionKind,
    transform_fn: &mut F,
    include_all_kinds: bool,
) -> Expression
where
    F: FnMut(Expression) -> Expression,
{
    if expression.kind() == target_kind {
        let original = expression.clone();
        // Nested matches are reported, their rewrites dropped.
        let _ = rebuild(expression, target_kind, transform_fn, include_all_kinds);
        return transform_fn(original);
    }
    rebuild(expression, target_kind, transform_fn, include_all_kinds)
}

fn rebuild<F>(
    expression: Expression,
    target_kind: ExpressionKind,
    transform_fn: &mut F,
    include_all_kinds: bool,
) -> Expression
where
    F: FnMut(Expression) -> Expression,
{
    let mut recurse = |child: Expression| {
        transform_recursively(child, target_kind, transform_fn, include_all_kinds)
    };

    match expression {
        Expression::Function {
            object,
            function,
            parameters,
        } => {
            let object = object.map(|object| recurse(*object));
            let parameters: Vec<Expression> = parameters.into_iter().map(&mut recurse).collect();
            call_function(function, parameters, object)
        }
        Expression::Formatter {
            function,
            parameters,
        } => {
            let parameters: Vec<Expression> = parameters.into_iter().map(&mut recurse).collect();
            if has_unresolvable(&parameters) {
                return Expression::Unresolvable;
            }
            Expression::Formatter {
                function,
                parameters,
            }
        }
        Expression::ComplexType {
            type_name,
            parameters,
            format_options,
            binding_parameters,
        } => {
            let parameters: Vec<Expression> = parameters.into_iter().map(&mut recurse).collect();
            if has_unresolvable(&parameters) {
                return Expression::Unresolvable;
            }
            Expression::ComplexType {
                type_name,
                parameters,
                format_options,
                binding_parameters,
            }
        }
        Expression::Concat { expressions } => {
            let expressions: Vec<Expression> =
                expressions.into_iter().map(&mut recurse).collect();
            concat(expressions)
        }

        Expression::IfElse {
            condition,
            on_true,
            on_false,
        } if include_all_kinds => {
            let condition = recurse(*condition);
            let on_true = recurse(*on_true);
            let on_false = recurse(*on_false);
            if_else(condition, on_true, on_false)
        }
        Expression::Not { operand } if include_all_kinds => not(recurse(*operand)),
        Expression::Truthy { operand } if include_all_kinds => truthy(recurse(*operand)),
        Expression::Set { operator, operands } if include_all_kinds => {
            let operands: Vec<Expression> = operands.into_iter().map(&mut recurse).collect();
            match operator {
                LogicalOperator::And => and(operands),
                LogicalOperator::Or => or(operands),
            }
        }
        Expression::Comparison {
            operator,
            operand1,
            operand2,
        } if include_all_kinds => {
            let left = recurse(*operand1);
            let right = recurse(*operand2);
            comparison(operator, left, right)
        }

        leaf => leaf,
    }
}
