//! Expression outlining.
//!
//! Some trees cannot be written in the binding syntax directly, for example a
//! conditional choosing between two composite-typed values. Such a tree is
//! outlined: every model path is hoisted into a formatter part, the path in
//! the tree is replaced by a placeholder (`$0`, `$1`, ... in model `$`), and
//! the rewritten tree travels as JSON to a runtime formatter that evaluates it
//! with the resolved part values.

use tracing::{debug, warn};

use crate::ast::{Expression, ExpressionKind};
use crate::builder::{format_result, path_in_named_model};
use crate::error::BindingResult;
use crate::transform::transform_recursively;

/// Runtime formatter class hosting the outlining helpers.
pub const STANDARD_FORMATTER: &str = "sap.fe.core.formatters.StandardFormatter";
/// Evaluates an outlined tree against its hoisted parts.
pub const EVALUATE_COMPLEX_EXPRESSION: &str =
    "sap.fe.core.formatters.StandardFormatter#evaluateComplexExpression";
/// Runtime conditional.
pub const IF_ELSE_FORMATTER: &str = "sap.fe.core.formatters.StandardFormatter#ifElse";
/// Runtime concatenation.
pub const CONCAT_FORMATTER: &str = "sap.fe.core.formatters.StandardFormatter#concat";
/// Model name of the placeholder paths.
pub const PLACEHOLDER_MODEL: &str = "$";

/// Serializes a tree to the JSON shape the runtime reads back.
pub fn serialize_expression(expression: &Expression) -> BindingResult<String> {
    Ok(serde_json::to_string(expression)?)
}

/// Hoists every model path of `expression` and wraps the rewritten tree in a
/// call to [`EVALUATE_COMPLEX_EXPRESSION`].
///
/// `include_all_kinds` controls whether logical and conditional nodes are
/// descended into (see [`transform_recursively`]).
///
/// ```rust
/// use binding_expr::{concat, constant, outline_expression, path_in_model, Expression};
///
/// let name = concat([path_in_model("First"), constant(" "), path_in_model("Last")]);
/// match outline_expression(name, false) {
///     Expression::Formatter { parameters, .. } => {
///         assert_eq!(parameters[0], constant("evaluateComplexExpression"));
///         assert_eq!(parameters[2], path_in_model("First"));
///         assert_eq!(parameters[3], path_in_model("Last"));
///     }
///     other => panic!("unexpected {:?}", other),
/// }
/// ```
pub fn outline_expression(expression: Expression, include_all_kinds: bool) -> Expression {
    let mut hoisted: Vec<Expression> = Vec::new();
    let rewritten = transform_recursively(
        expression,
        ExpressionKind::PathInModel,
        &mut |path| {
            let placeholder = format!("${}", hoisted.len());
            hoisted.push(path);
            path_in_named_model(&placeholder, PLACEHOLDER_MODEL)
        },
        include_all_kinds,
    );

    let json = match serialize_expression(&rewritten) {
        Ok(json) => json,
        Err(error) => {
            warn!(%error, "expression outlining failed");
            return Expression::Unresolvable;
        }
    };
    debug!(
        hoisted = hoisted.len(),
        include_all_kinds,
        root = %rewritten.kind(),
        "outlined expression"
    );

    let mut parameters = Vec::with_capacity(hoisted.len() + 1);
    parameters.push(Expression::from(json));
    parameters.extend(hoisted);
    format_result(parameters, EVALUATE_COMPLEX_EXPRESSION, None, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::ConstantValue;
    use crate::builder::{add_type_information, constant, if_else, path_in_model, CURRENCY_TYPE};

    fn formatter_parts(expression: Expression) -> (String, Vec<Expression>) {
        match expression {
            Expression::Formatter {
                function,
                parameters,
            } => (function, parameters),
            other => panic!("expected formatter, got {:?}", other),
        }
    }

    #[test]
    fn test_placeholders_in_order() {
        let call = format_result(
            [path_in_model("A"), constant(1), path_in_named_model("/b", "ui")],
            "my.Formatter",
            None,
            true,
        );
        let (function, parameters) = formatter_parts(outline_expression(call, false));
        assert_eq!(function, STANDARD_FORMATTER);
        assert_eq!(parameters.len(), 4);
        assert_eq!(parameters[2], path_in_model("A"));
        assert_eq!(parameters[3], path_in_named_model("/b", "ui"));

        let json = match &parameters[1] {
            Expression::Constant {
                value: ConstantValue::String(json),
            } => json.clone(),
            other => panic!("expected json constant, got {:?}", other),
        };
        assert_eq!(
            json,
            r#"{"_type":"Formatter","fn":"my.Formatter","parameters":[{"_type":"PathInModel","path":"$0","modelName":"$"},{"_type":"Constant","value":1},{"_type":"PathInModel","path":"$1","modelName":"$"}]}"#
        );
    }

    #[test]
    fn test_repeated_paths_are_hoisted_each_time() {
        let call = format_result([path_in_model("A"), path_in_model("A")], "f", None, true);
        let (_, parameters) = formatter_parts(outline_expression(call, false));
        assert_eq!(parameters.len(), 4);
    }

    #[test]
    fn test_outlined_if_else_keeps_condition_paths() {
        let amount = add_type_information(
            [path_in_model("Amount"), path_in_model("Currency")],
            CURRENCY_TYPE,
            None,
            None,
        );
        let (_, parameters) = formatter_parts(if_else(path_in_model("Show"), amount, ""));
        assert_eq!(parameters[2], path_in_model("Show"));
        assert_eq!(parameters[3], path_in_model("Amount"));
    }

    #[test]
    fn test_serialize_expression() {
        let json = serialize_expression(&path_in_named_model("/x", "ui")).unwrap();
        assert_eq!(json, r#"{"_type":"PathInModel","path":"/x","modelName":"ui"}"#);
    }
}
