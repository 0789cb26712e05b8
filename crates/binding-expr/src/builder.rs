//! Smart constructors for binding expressions.
//!
//! Each constructor wraps raw primitives into constants, returns
//! [`Expression::Unresolvable`] as soon as any operand is unresolvable, and
//! runs the rewrite rules of [`crate::simplify`] before returning. None of
//! them fails or panics.

use tracing::trace;

use crate::ast::{
    has_unresolvable, is_complex_value, is_constant, is_path_in_model, BindingMode,
    ComparisonOperator, ConstantValue, Expression, LogicalOperator, ObjectLiteral,
    PathInModelExpression,
};
use crate::outline::{outline_expression, CONCAT_FORMATTER, IF_ELSE_FORMATTER};
use crate::simplify;
use crate::traits::{BindingFunction, EntityTypeKeys, PathVisitor};

/// Composite type of an amount with a unit of measure.
pub const UNIT_TYPE: &str = "sap.ui.model.odata.type.Unit";
/// Composite type of an amount with a currency.
pub const CURRENCY_TYPE: &str = "sap.ui.model.odata.type.Currency";
/// Lookup path of the unit-of-measure customizing.
pub const UNITS_OF_MEASURE_PATH: &str = "/##@@requestUnitsOfMeasure";
/// Lookup path of the currency customizing.
pub const CURRENCY_CODES_PATH: &str = "/##@@requestCurrencyCodes";

fn wrap_all<I>(operands: I) -> Vec<Expression>
where
    I: IntoIterator,
    I::Item: Into<Expression>,
{
    operands.into_iter().map(Into::into).collect()
}

// =============================================================================
// Leaves
// =============================================================================

/// Creates a constant.
///
/// Object attributes holding an undefined constant are dropped.
pub fn constant(value: impl Into<ConstantValue>) -> Expression {
    let value = match value.into() {
        ConstantValue::Object(mut object) => {
            object.retain(|_, attribute| {
                !matches!(
                    attribute,
                    Expression::Constant {
                        value: ConstantValue::Undefined
                    }
                )
            });
            ConstantValue::Object(object)
        }
        other => other,
    };
    Expression::Constant { value }
}

/// Creates a binding to `path` in the default model.
pub fn path_in_model(path: &str) -> Expression {
    resolve_path_in_model(Some(path), None, &[], None)
}

/// Creates a binding to `path` in the model named `model_name`.
pub fn path_in_named_model(path: &str, model_name: &str) -> Expression {
    resolve_path_in_model(Some(path), Some(model_name), &[], None)
}

/// Creates a path binding from a possibly absent source path.
///
/// The navigation paths visited so far are prefixed with `/`. A path visitor,
/// when given, decides the final path instead.
///
/// ```rust
/// use binding_expr::{resolve_path_in_model, Expression};
///
/// let path = resolve_path_in_model(Some("Name"), None, &["_Customer", "_Address"], None);
/// assert_eq!(path.as_path_in_model().unwrap().path, "_Customer/_Address/Name");
///
/// assert!(matches!(resolve_path_in_model(None, None, &[], None), Expression::Unresolvable));
/// ```
pub fn resolve_path_in_model(
    path: Option<&str>,
    model_name: Option<&str>,
    visited_navigation_paths: &[&str],
    path_visitor: Option<&dyn PathVisitor>,
) -> Expression {
    let Some(path) = path else {
        return Expression::Unresolvable;
    };

    let target_path = match path_visitor {
        Some(visitor) => match visitor.visit_path(path) {
            Some(target) => target,
            None => return Expression::Unresolvable,
        },
        None => visited_navigation_paths
            .iter()
            .copied()
            .chain(std::iter::once(path))
            .collect::<Vec<_>>()
            .join("/"),
    };

    PathInModelExpression::new(target_path, model_name.map(str::to_string)).into()
}

/// Creates a raw reference token such as `$event`. `None` renders as `null`.
pub fn reference(name: Option<&str>) -> Expression {
    Expression::Ref {
        reference: name.map(str::to_string),
    }
}

/// Classifies a pre-rendered binding string.
///
/// `{= ...}` becomes an embedded expression binding and `{...}` an embedded
/// binding. Anything else is a constant, converted to a boolean or number
/// when `target_type` asks for one.
pub fn resolve_binding_string(value: &str, target_type: Option<&str>) -> Expression {
    if value.starts_with("{=") && value.ends_with('}') {
        return Expression::EmbeddedExpressionBinding {
            value: value.to_string(),
        };
    }
    if value.starts_with('{') && value.ends_with('}') {
        return Expression::EmbeddedBinding {
            value: value.to_string(),
        };
    }
    match target_type {
        Some("boolean") => constant(value == "true"),
        Some("number") => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                constant(0)
            } else {
                constant(trimmed.parse::<f64>().unwrap_or(f64::NAN))
            }
        }
        _ => constant(value),
    }
}

// =============================================================================
// Logic
// =============================================================================

/// Negates an expression.
pub fn not(operand: impl Into<Expression>) -> Expression {
    simplify::negate(operand.into())
}

/// Coerces an expression to a boolean: `!!operand`.
pub fn truthy(operand: impl Into<Expression>) -> Expression {
    match operand.into() {
        Expression::Unresolvable => Expression::Unresolvable,
        Expression::Constant { value } => constant(value.is_truthy()),
        other => Expression::Truthy {
            operand: Box::new(other),
        },
    }
}

/// Logical conjunction of all operands.
///
/// ```rust
/// use binding_expr::{and, constant, not, path_in_model};
///
/// assert_eq!(and([constant(true), path_in_model("Visible")]), path_in_model("Visible"));
/// assert_eq!(and([path_in_model("X"), not(path_in_model("X"))]), constant(false));
/// ```
pub fn and<I>(operands: I) -> Expression
where
    I: IntoIterator,
    I::Item: Into<Expression>,
{
    logical_set(LogicalOperator::And, wrap_all(operands))
}

/// Logical disjunction of all operands.
pub fn or<I>(operands: I) -> Expression
where
    I: IntoIterator,
    I::Item: Into<Expression>,
{
    logical_set(LogicalOperator::Or, wrap_all(operands))
}

fn logical_set(operator: LogicalOperator, operands: Vec<Expression>) -> Expression {
    let operands = simplify::flatten_set(operator, operands);
    if has_unresolvable(&operands) {
        return Expression::Unresolvable;
    }
    simplify::fold_set(operator, operands)
}

// =============================================================================
// Comparison
// =============================================================================

/// Compares two expressions. Literal operands are evaluated immediately.
pub fn comparison(
    operator: ComparisonOperator,
    left: impl Into<Expression>,
    right: impl Into<Expression>,
) -> Expression {
    let left = left.into();
    let right = right.into();
    if has_unresolvable([&left, &right]) {
        return Expression::Unresolvable;
    }
    if let Some(folded) = simplify::fold_comparison(operator, &left, &right) {
        return folded;
    }
    Expression::Comparison {
        operator,
        operand1: Box::new(left),
        operand2: Box::new(right),
    }
}

/// Strict equality, reduced against booleans and conditionals where possible.
pub fn equal(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    let left = left.into();
    let right = right.into();
    if has_unresolvable([&left, &right]) {
        return Expression::Unresolvable;
    }
    if left == right {
        return constant(true);
    }
    if let Some(reduced) = simplify::reduce_equality(&left, &right) {
        return reduced;
    }
    if let Some(reduced) = simplify::reduce_equality(&right, &left) {
        return reduced;
    }
    comparison(ComparisonOperator::Equal, left, right)
}

/// Strict inequality: `not(equal(left, right))`.
pub fn not_equal(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    not(equal(left, right))
}

/// `left > right`
pub fn greater_than(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    comparison(ComparisonOperator::GreaterThan, left, right)
}

/// `left >= right`
pub fn greater_or_equal(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    comparison(ComparisonOperator::GreaterOrEqual, left, right)
}

/// `left < right`
pub fn less_than(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    comparison(ComparisonOperator::LessThan, left, right)
}

/// `left <= right`
pub fn less_or_equal(left: impl Into<Expression>, right: impl Into<Expression>) -> Expression {
    comparison(ComparisonOperator::LessOrEqual, left, right)
}

/// True when the value is an empty string, undefined or null.
pub fn is_empty(expression: impl Into<Expression>) -> Expression {
    let expression = expression.into();
    or([
        equal(expression.clone(), ""),
        equal(expression.clone(), ConstantValue::Undefined),
        equal(expression, ConstantValue::Null),
    ])
}

// =============================================================================
// Conditional
// =============================================================================

/// Conditional choice: `condition ? on_true : on_false`.
///
/// Conditionals over composite types or concatenations cannot be written
/// as a ternary; they are outlined into a formatter call.
pub fn if_else(
    condition: impl Into<Expression>,
    on_true: impl Into<Expression>,
    on_false: impl Into<Expression>,
) -> Expression {
    let condition = condition.into();
    let on_true = on_true.into();
    let on_false = on_false.into();
    if has_unresolvable([&condition, &on_true, &on_false]) {
        return Expression::Unresolvable;
    }

    let (condition, on_true, on_false) =
        simplify::canonicalize_if_else(condition, on_true, on_false);
    if let Some(collapsed) = simplify::collapse_if_else(&condition, &on_true, &on_false) {
        return collapsed;
    }

    if [&condition, &on_true, &on_false]
        .into_iter()
        .any(is_complex_value)
    {
        let formatter = format_result([condition, on_true, on_false], IF_ELSE_FORMATTER, None, true);
        return outline_expression(formatter, true);
    }

    Expression::IfElse {
        condition: Box::new(condition),
        on_true: Box::new(on_true),
        on_false: Box::new(on_false),
    }
}

// =============================================================================
// Values
// =============================================================================

/// String concatenation. Literal parts fold into one string.
pub fn concat<I>(parts: I) -> Expression
where
    I: IntoIterator,
    I::Item: Into<Expression>,
{
    let parts = wrap_all(parts);
    if has_unresolvable(&parts) {
        return Expression::Unresolvable;
    }
    if let Some(folded) = simplify::fold_concat(&parts) {
        return folded;
    }
    if parts.iter().any(is_complex_value) {
        let formatter = format_result(parts, CONCAT_FORMATTER, None, true);
        return outline_expression(formatter, false);
    }
    Expression::Concat { expressions: parts }
}

/// Length of a collection path. Literal strings and arrays fold.
pub fn length(path: impl Into<Expression>) -> Expression {
    match path.into() {
        path @ Expression::PathInModel(_) => Expression::Length {
            path_in_model: Box::new(path),
        },
        Expression::Constant {
            value: ConstantValue::String(s),
        } => constant(s.encode_utf16().count() as i64),
        Expression::Constant {
            value: ConstantValue::Array(items),
        } => constant(items.len() as i64),
        other => {
            trace!(kind = %other.kind(), "length of a non-path expression is unresolvable");
            Expression::Unresolvable
        }
    }
}

// =============================================================================
// Calls
// =============================================================================

/// Appends one path per key of the context entity type, unless a parameter
/// already binds against the default model.
fn inject_context_keys(parameters: &mut Vec<Expression>, entity_type: &dyn EntityTypeKeys) {
    let binds_default_context = parameters.iter().any(|parameter| {
        matches!(parameter, Expression::PathInModel(path) if path.model_name.is_none())
    });
    if !binds_default_context {
        parameters.extend(entity_type.key_names().into_iter().map(path_in_model));
    }
}

/// Calls a formatter with the given parts.
///
/// A formatter named `Class#method` is called as `Class` with the method name
/// as its leading part. Unless `ignore_complex_type` is set, a call with any
/// part other than a literal or a model path is outlined, since the binding
/// syntax only has parts for those two.
pub fn format_result<I>(
    parameters: I,
    formatter: impl BindingFunction,
    context_entity_type: Option<&dyn EntityTypeKeys>,
    ignore_complex_type: bool,
) -> Expression
where
    I: IntoIterator,
    I::Item: Into<Expression>,
{
    let mut parameters = wrap_all(parameters);
    if has_unresolvable(&parameters) {
        return Expression::Unresolvable;
    }
    if let Some(entity_type) = context_entity_type {
        inject_context_keys(&mut parameters, entity_type);
    }

    let name = formatter.function_name();
    if !ignore_complex_type
        && parameters
            .iter()
            .any(|parameter| !is_constant(parameter) && !is_path_in_model(parameter))
    {
        let inner = format_result(parameters, name, None, true);
        return outline_expression(inner, true);
    }

    let function = match name.split_once('#') {
        Some((class, method)) => {
            if !method.is_empty() {
                parameters.insert(0, constant(method));
            }
            class
        }
        None => name,
    };

    Expression::Formatter {
        function: function.to_string(),
        parameters,
    }
}

/// Wraps the parts in a composite type binding.
///
/// Unit and currency types additionally receive a one-time lookup path for
/// their customizing.
pub fn add_type_information<I>(
    parameters: I,
    type_name: &str,
    context_entity_type: Option<&dyn EntityTypeKeys>,
    format_options: Option<ObjectLiteral>,
) -> Expression
where
    I: IntoIterator,
    I::Item: Into<Expression>,
{
    let mut parameters = wrap_all(parameters);
    if has_unresolvable(&parameters) {
        return Expression::Unresolvable;
    }
    if let Some(entity_type) = context_entity_type {
        inject_context_keys(&mut parameters, entity_type);
    }

    let lookup_path = match type_name {
        UNIT_TYPE => Some(UNITS_OF_MEASURE_PATH),
        CURRENCY_TYPE => Some(CURRENCY_CODES_PATH),
        _ => None,
    };
    if let Some(lookup_path) = lookup_path {
        let already_bound = parameters.iter().any(|parameter| {
            matches!(parameter, Expression::PathInModel(path) if path.path == lookup_path)
        });
        if !already_bound {
            parameters.push(
                PathInModelExpression::new(lookup_path, None)
                    .with_target_type("any")
                    .with_mode(BindingMode::OneTime)
                    .into(),
            );
        }
    }

    Expression::ComplexType {
        type_name: type_name.to_string(),
        parameters,
        format_options,
        binding_parameters: None,
    }
}

/// Calls a function inside an expression binding, optionally on a receiver.
pub fn call_function<I>(
    function: impl BindingFunction,
    parameters: I,
    on: Option<Expression>,
) -> Expression
where
    I: IntoIterator,
    I::Item: Into<Expression>,
{
    let parameters = wrap_all(parameters);
    if has_unresolvable(parameters.iter().chain(on.as_ref())) {
        return Expression::Unresolvable;
    }
    Expression::Function {
        object: on.map(Box::new),
        function: function.function_name().to_string(),
        parameters,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::is_formatter;
    use crate::traits::ContextEntityType;

    #[test]
    fn test_constant_object_drops_undefined() {
        let object: ObjectLiteral = [
            ("scale", Expression::from(2)),
            ("precision", Expression::from(ConstantValue::Undefined)),
        ]
        .into_iter()
        .collect();
        match constant(object) {
            Expression::Constant {
                value: ConstantValue::Object(object),
            } => {
                assert_eq!(object.len(), 1);
                assert!(object.get("precision").is_none());
            }
            other => panic!("expected object constant, got {:?}", other),
        }
    }

    #[test]
    fn test_path_with_navigation() {
        let path = resolve_path_in_model(Some("City"), Some("ui"), &["_Address"], None);
        let path = path.as_path_in_model().unwrap();
        assert_eq!(path.path, "_Address/City");
        assert_eq!(path.model_name.as_deref(), Some("ui"));
    }

    #[test]
    fn test_path_visitor_decides() {
        let visitor = |p: &str| Some(format!("/{}", p));
        let path = resolve_path_in_model(Some("Name"), None, &["_Ignored"], Some(&visitor));
        assert_eq!(path.as_path_in_model().unwrap().path, "/Name");

        let refusing = |_: &str| -> Option<String> { None };
        assert!(matches!(
            resolve_path_in_model(Some("Name"), None, &[], Some(&refusing)),
            Expression::Unresolvable
        ));
    }

    #[test]
    fn test_not_constant() {
        assert_eq!(not(true), constant(false));
        assert_eq!(not(""), constant(true));
    }

    #[test]
    fn test_not_unresolvable() {
        assert!(matches!(not(Expression::Unresolvable), Expression::Unresolvable));
    }

    #[test]
    fn test_truthy() {
        assert_eq!(truthy("x"), constant(true));
        assert!(matches!(truthy(path_in_model("A")), Expression::Truthy { .. }));
    }

    #[test]
    fn test_comparison_folds_constants() {
        assert_eq!(greater_than(3, 2), constant(true));
        assert_eq!(less_or_equal("b", "a"), constant(false));
        assert!(matches!(
            less_than(path_in_model("Qty"), 2),
            Expression::Comparison { .. }
        ));
    }

    #[test]
    fn test_equal_comparison_against_boolean() {
        let cmp = greater_than(path_in_model("Qty"), 2);
        assert_eq!(equal(cmp.clone(), true), cmp);
        assert_eq!(equal(false, cmp.clone()), less_or_equal(path_in_model("Qty"), 2));
    }

    #[test]
    fn test_equal_if_else_branch() {
        let choice = if_else(path_in_model("Active"), "A", path_in_model("Fallback"));
        assert_eq!(
            equal(choice, "A"),
            or([
                path_in_model("Active"),
                equal(path_in_model("Fallback"), "A")
            ])
        );
    }

    #[test]
    fn test_equal_if_else_false_branch() {
        let choice = if_else(path_in_model("Active"), path_in_model("Value"), "B");
        assert_eq!(
            equal("B", choice),
            or([
                not(path_in_model("Active")),
                equal(path_in_model("Value"), "B")
            ])
        );
    }

    #[test]
    fn test_equal_if_else_distinct_constants() {
        let choice = if_else(path_in_model("Active"), "A", "B");
        assert_eq!(equal(choice, "C"), constant(false));
    }

    #[test]
    fn test_not_equal() {
        assert_eq!(not_equal(1, 1), constant(false));
        assert!(matches!(
            not_equal(path_in_model("Status"), "A"),
            Expression::Comparison {
                operator: ComparisonOperator::NotEqual,
                ..
            }
        ));
    }

    #[test]
    fn test_is_empty_folds_literals() {
        assert_eq!(is_empty(""), constant(true));
        assert_eq!(is_empty("x"), constant(false));
        assert!(matches!(is_empty(path_in_model("Name")), Expression::Set { .. }));
    }

    #[test]
    fn test_if_else_boolean_identities() {
        let c = path_in_model("C");
        let x = path_in_model("X");
        assert_eq!(if_else(c.clone(), x.clone(), false), and([c.clone(), x.clone()]));
        assert_eq!(if_else(c.clone(), x.clone(), true), or([not(c.clone()), x.clone()]));
        assert_eq!(if_else(c.clone(), false, x.clone()), and([not(c.clone()), x.clone()]));
        assert_eq!(if_else(c.clone(), true, x.clone()), or([c, x]));
    }

    #[test]
    fn test_if_else_with_complex_type_is_outlined() {
        let amount = add_type_information(
            [path_in_model("Amount"), path_in_model("Currency")],
            CURRENCY_TYPE,
            None,
            None,
        );
        let outlined = if_else(path_in_model("HasAmount"), amount, "-");
        match outlined {
            Expression::Formatter { parameters, .. } => {
                assert_eq!(parameters[0], constant("evaluateComplexExpression"));
                // json, then HasAmount, Amount, Currency, currency codes lookup
                assert_eq!(parameters.len(), 6);
            }
            other => panic!("expected formatter, got {:?}", other),
        }
    }

    #[test]
    fn test_concat_folds_and_builds() {
        assert_eq!(concat(["a", "b"]), constant("ab"));
        assert!(matches!(
            concat([path_in_model("First"), constant(" "), path_in_model("Last")]),
            Expression::Concat { .. }
        ));
        assert!(matches!(
            concat([path_in_model("A"), Expression::Unresolvable]),
            Expression::Unresolvable
        ));
    }

    #[test]
    fn test_length() {
        assert!(matches!(length(path_in_model("Items")), Expression::Length { .. }));
        assert_eq!(length("abc"), constant(3));
        assert!(matches!(length(Expression::Unresolvable), Expression::Unresolvable));
    }

    #[test]
    fn test_format_result_splits_method() {
        let formatted = format_result([path_in_model("Name")], "my.app.Formatter#upper", None, false);
        assert_eq!(
            formatted,
            Expression::Formatter {
                function: "my.app.Formatter".to_string(),
                parameters: vec![constant("upper"), path_in_model("Name")],
            }
        );
    }

    #[test]
    fn test_format_result_injects_context_keys() {
        let entity = ContextEntityType::new("SalesOrderType", ["SalesOrder", "IsActiveEntity"]);
        let formatted = format_result(
            [path_in_named_model("/mode", "ui")],
            "my.app.Formatter.status",
            Some(&entity),
            false,
        );
        match formatted {
            Expression::Formatter { parameters, .. } => {
                assert_eq!(
                    parameters,
                    vec![
                        path_in_named_model("/mode", "ui"),
                        path_in_model("SalesOrder"),
                        path_in_model("IsActiveEntity"),
                    ]
                );
            }
            other => panic!("expected formatter, got {:?}", other),
        }

        let bound = format_result([path_in_model("Name")], "f", Some(&entity), false);
        match bound {
            Expression::Formatter { parameters, .. } => assert_eq!(parameters.len(), 1),
            other => panic!("expected formatter, got {:?}", other),
        }
    }

    #[test]
    fn test_format_result_outlines_concat_parameter() {
        let name = concat([path_in_model("First"), constant(" "), path_in_model("Last")]);
        let formatted = format_result([name], "my.app.Formatter#upper", None, false);
        assert!(is_formatter(&formatted));
        match formatted {
            Expression::Formatter { function, parameters } => {
                assert_eq!(function, "sap.fe.core.formatters.StandardFormatter");
                assert_eq!(parameters[0], constant("evaluateComplexExpression"));
                assert_eq!(parameters[2], path_in_model("First"));
                assert_eq!(parameters[3], path_in_model("Last"));
            }
            other => panic!("expected formatter, got {:?}", other),
        }
    }

    #[test]
    fn test_format_result_outlines_conditional_parameter() {
        let choice = if_else(path_in_model("A"), "x", "y");
        match format_result([choice], "my.F", None, false) {
            Expression::Formatter { function, parameters } => {
                assert_eq!(function, "sap.fe.core.formatters.StandardFormatter");
                assert_eq!(parameters.len(), 3);
                assert_eq!(parameters[0], constant("evaluateComplexExpression"));
                assert_eq!(parameters[2], path_in_model("A"));
                let json = match &parameters[1] {
                    Expression::Constant {
                        value: ConstantValue::String(json),
                    } => json.clone(),
                    other => panic!("expected json constant, got {:?}", other),
                };
                assert!(json.starts_with(r#"{"_type":"Formatter","fn":"my.F""#));
                assert!(json.contains(r#""condition":{"_type":"PathInModel","path":"$0","modelName":"$"}"#));
            }
            other => panic!("expected formatter, got {:?}", other),
        }
    }

    #[test]
    fn test_format_result_keeps_conditional_when_ignoring() {
        let choice = if_else(path_in_model("A"), "x", "y");
        let formatted = format_result([choice.clone()], "my.F", None, true);
        assert_eq!(
            formatted,
            Expression::Formatter {
                function: "my.F".to_string(),
                parameters: vec![choice],
            }
        );
    }

    #[test]
    fn test_add_type_information_unit_lookup() {
        let quantity = add_type_information(
            [path_in_model("Quantity"), path_in_model("Unit")],
            UNIT_TYPE,
            None,
            None,
        );
        match quantity {
            Expression::ComplexType { parameters, .. } => {
                let lookup = parameters[2].as_path_in_model().unwrap();
                assert_eq!(lookup.path, UNITS_OF_MEASURE_PATH);
                assert_eq!(lookup.mode, Some(BindingMode::OneTime));
                assert_eq!(lookup.target_type.as_deref(), Some("any"));
            }
            other => panic!("expected complex type, got {:?}", other),
        }
    }

    #[test]
    fn test_call_function() {
        let call = call_function(
            "odata.fillUriTemplate",
            [constant("{id}"), path_in_model("ID")],
            None,
        );
        assert!(matches!(call, Expression::Function { object: None, .. }));
        assert!(matches!(
            call_function("f", [path_in_model("A")], Some(Expression::Unresolvable)),
            Expression::Unresolvable
        ));
    }

    #[test]
    fn test_resolve_binding_string() {
        assert!(matches!(
            resolve_binding_string("{= ${A} }", None),
            Expression::EmbeddedExpressionBinding { .. }
        ));
        assert!(matches!(
            resolve_binding_string("{A}", None),
            Expression::EmbeddedBinding { .. }
        ));
        assert_eq!(resolve_binding_string("true", Some("boolean")), constant(true));
        assert_eq!(resolve_binding_string("12.5", Some("number")), constant(12.5));
        assert_eq!(resolve_binding_string("text", None), constant("text"));
    }
}
