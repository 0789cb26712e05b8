//! Compilation of expression trees into binding text.

use binding_expr::{Expression, ObjectLiteral, PathInModelExpression};
use tracing::{debug, trace};

use crate::config::CompileOptions;
use crate::literal::{compile_constant, compile_object, quote};

/// Compiles expression trees into binding strings.
///
/// # Example
///
/// ```rust
/// use binding_expr_compiler::{equal, path_in_model, BindingCompiler, CompileOptions};
///
/// let check = equal(path_in_model("Status"), "A");
///
/// let compiler = BindingCompiler::new();
/// assert_eq!(compiler.compile(&check).as_deref(), Some("{= %{Status} === 'A'}"));
///
/// let typed = BindingCompiler::with_options(
///     CompileOptions::builder().with_keep_target_type(true).build(),
/// );
/// assert_eq!(typed.compile(&check).as_deref(), Some("{= ${Status} === 'A'}"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BindingCompiler {
    options: CompileOptions,
}

impl BindingCompiler {
    /// Creates a compiler with default options (top level, `%` separator).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a compiler with custom options.
    pub fn with_options(options: CompileOptions) -> Self {
        Self { options }
    }

    /// Returns the compile options.
    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    /// Compiles an expression. Returns `None` for unresolvable expressions and
    /// for nullable `null`/`undefined` constants.
    pub fn compile(&self, expression: &Expression) -> Option<String> {
        compile_node(expression, self.options)
    }
}

/// Compiles an expression into its binding string.
///
/// `embedded_in_binding` compiles the expression as an operand of an
/// enclosing expression binding. `keep_target_type` switches the path
/// separator from `%` to `$`. `is_nullable` maps a top-level `null` or
/// `undefined` constant to `None`.
pub fn compile_expression(
    expression: &Expression,
    embedded_in_binding: bool,
    keep_target_type: bool,
    is_nullable: bool,
) -> Option<String> {
    let options = CompileOptions {
        embedded: embedded_in_binding,
        keep_target_type,
        nullable: is_nullable,
    };
    compile_node(expression, options)
}

/// Compiles a top-level expression with default options.
pub fn compile(expression: &Expression) -> Option<String> {
    compile_node(expression, CompileOptions::default())
}

/// Returns true if the compiled operand must be parenthesized inside an
/// operator expression.
pub fn needs_parenthesis(expression: &Expression) -> bool {
    !matches!(
        expression,
        Expression::Constant { .. }
            | Expression::PathInModel(_)
            | Expression::IfElse { .. }
            | Expression::Function { .. }
            | Expression::EmbeddedExpressionBinding { .. }
            | Expression::Unresolvable
    )
}

// =============================================================================
// Dispatch
// =============================================================================

pub(crate) fn compile_node(expression: &Expression, options: CompileOptions) -> Option<String> {
    match expression {
        Expression::Unresolvable => {
            trace!("unresolvable expression compiles to no binding");
            None
        }
        Expression::Constant { value } => compile_constant(value, options),
        Expression::Ref { reference } => {
            Some(reference.clone().unwrap_or_else(|| "null".to_string()))
        }
        Expression::Function {
            object,
            function,
            parameters,
        } => {
            let arguments = parameters
                .iter()
                .map(|parameter| compile_node(parameter, options.operand()))
                .collect::<Option<Vec<_>>>()?
                .join(", ");
            match object {
                Some(object) => {
                    let receiver = compile_node(object, options.operand())?;
                    Some(format!("{}.{}({})", receiver, function, arguments))
                }
                None => Some(format!("{}({})", function, arguments)),
            }
        }
        Expression::EmbeddedExpressionBinding { value } => {
            if options.embedded {
                let inner = value.get(2..value.len().saturating_sub(1)).unwrap_or_default();
                Some(format!("({})", inner))
            } else {
                Some(value.clone())
            }
        }
        Expression::EmbeddedBinding { value } => Some(embed(value.clone(), options)),
        Expression::PathInModel(path) => Some(compile_path(path, options)),
        Expression::Formatter {
            function,
            parameters,
        } => compile_formatter(function, parameters, options).map(|text| embed(text, options)),
        Expression::ComplexType {
            type_name,
            parameters,
            format_options,
            binding_parameters,
        } => compile_complex_type(
            type_name,
            parameters,
            format_options.as_ref(),
            binding_parameters.as_ref(),
            options,
        )
        .map(|text| embed(text, options)),

        Expression::Comparison {
            operator,
            operand1,
            operand2,
        } => {
            let left = compile_operand(operand1, options.operand())?;
            let right = compile_operand(operand2, options.operand())?;
            Some(wrap(format!("{} {} {}", left, operator, right), options))
        }
        Expression::Set { operator, operands } => {
            let separator = format!(" {} ", operator);
            let joined = operands
                .iter()
                .map(|operand| compile_operand(operand, options.typed_operand()))
                .collect::<Option<Vec<_>>>()?
                .join(&separator);
            Some(wrap(joined, options))
        }
        Expression::Concat { expressions } => {
            let joined = expressions
                .iter()
                .map(|part| compile_operand(part, options.typed_operand()))
                .collect::<Option<Vec<_>>>()?
                .join(" + ");
            Some(wrap(joined, options))
        }
        Expression::Length { path_in_model } => {
            let path = compile_node(path_in_model, options.operand())?;
            Some(wrap(format!("{}.length", path), options))
        }
        Expression::Not { operand } => {
            let operand = compile_operand(operand, options.operand())?;
            Some(wrap(format!("!{}", operand), options))
        }
        Expression::Truthy { operand } => {
            let operand = compile_operand(operand, options.operand())?;
            Some(wrap(format!("!!{}", operand), options))
        }
        Expression::IfElse {
            condition,
            on_true,
            on_false,
        } => {
            let condition = compile_node(condition, options.operand())?;
            let on_true = compile_node(on_true, options.operand())?;
            let on_false = compile_node(on_false, options.operand())?;
            let choice = format!("{} ? {} : {}", condition, on_true, on_false);
            if options.embedded {
                Some(format!("({})", choice))
            } else {
                Some(wrap(choice, options))
            }
        }
    }
}

/// Compiles an operand, parenthesizing it when required.
fn compile_operand(expression: &Expression, options: CompileOptions) -> Option<String> {
    let compiled = compile_node(expression, options)?;
    if needs_parenthesis(expression) {
        Some(format!("({})", compiled))
    } else {
        Some(compiled)
    }
}

/// Wraps an operator expression in `{= ...}` unless it is embedded.
fn wrap(expression: String, options: CompileOptions) -> String {
    if options.embedded {
        expression
    } else {
        format!("{{= {}}}", expression)
    }
}

/// Prefixes a binding with the separator when it is embedded.
fn embed(binding: String, options: CompileOptions) -> String {
    if options.embedded {
        format!("{}{}", options.separator(), binding)
    } else {
        binding
    }
}

// =============================================================================
// Paths
// =============================================================================

fn compile_path(path: &PathInModelExpression, options: CompileOptions) -> String {
    let binding = if path.has_binding_metadata() {
        let mut entries = vec![format!("path: {}", quote(&path.qualified_path()))];
        if let Some(type_name) = &path.type_name {
            entries.push(format!("type: {}", quote(type_name)));
        }
        if let Some(target_type) = &path.target_type {
            entries.push(format!("targetType: {}", quote(target_type)));
        }
        if let Some(mode) = path.mode {
            entries.push(format!("mode: '{}'", mode));
        }
        push_object(&mut entries, "parameters", path.parameters.as_ref(), options);
        push_object(&mut entries, "formatOptions", path.format_options.as_ref(), options);
        push_object(&mut entries, "constraints", path.constraints.as_ref(), options);
        format!("{{{}}}", entries.join(", "))
    } else {
        format!("{{{}}}", path.qualified_path())
    };
    embed(binding, options)
}

fn push_object(
    entries: &mut Vec<String>,
    key: &str,
    object: Option<&ObjectLiteral>,
    options: CompileOptions,
) {
    if let Some(rendered) = object.and_then(|object| compile_object(object, options)) {
        entries.push(format!("{}: {}", key, rendered));
    }
}

/// Renders one part of a formatter or composite type binding, without the
/// enclosing braces. Only literals and model paths have a part syntax.
fn compile_part(
    expression: &Expression,
    default_target_type: bool,
    options: CompileOptions,
) -> Option<String> {
    match expression {
        Expression::Constant { value } => {
            compile_constant(value, options.operand()).map(|value| format!("value: {}", value))
        }
        Expression::PathInModel(path) => {
            let mut entries = vec![format!("path: {}", quote(&path.qualified_path()))];
            if let Some(type_name) = &path.type_name {
                entries.push(format!("type: {}", quote(type_name)));
            }
            match &path.target_type {
                Some(target_type) => entries.push(format!("targetType: {}", quote(target_type))),
                None if default_target_type && path.type_name.is_none() => {
                    entries.push("targetType: 'any'".to_string())
                }
                None => {}
            }
            if let Some(mode) = path.mode {
                entries.push(format!("mode: '{}'", mode));
            }
            push_object(&mut entries, "constraints", path.constraints.as_ref(), options);
            push_object(&mut entries, "formatOptions", path.format_options.as_ref(), options);
            push_object(&mut entries, "parameters", path.parameters.as_ref(), options);
            Some(entries.join(", "))
        }
        other => {
            debug!(kind = %other.kind(), "binding part has no part syntax");
            None
        }
    }
}

// =============================================================================
// Formatters and composite types
// =============================================================================

fn compile_formatter(
    function: &str,
    parameters: &[Expression],
    options: CompileOptions,
) -> Option<String> {
    let top_level = CompileOptions {
        embedded: false,
        ..options
    };
    if let [single] = parameters {
        if !matches!(single, Expression::ComplexType { .. }) {
            return Some(format!(
                "{{{}, formatter: {}}}",
                compile_part(single, true, top_level)?,
                quote(function)
            ));
        }
    }

    let parts = parameters
        .iter()
        .map(|parameter| match parameter {
            Expression::ComplexType {
                type_name,
                parameters,
                format_options,
                binding_parameters,
            } => compile_complex_type(
                type_name,
                parameters,
                format_options.as_ref(),
                binding_parameters.as_ref(),
                top_level,
            ),
            other => compile_part(other, true, top_level).map(|part| format!("{{{}}}", part)),
        })
        .collect::<Option<Vec<_>>>()?;
    Some(format!(
        "{{parts: [{}], formatter: {}}}",
        parts.join(", "),
        quote(function)
    ))
}

fn compile_complex_type(
    type_name: &str,
    parameters: &[Expression],
    format_options: Option<&ObjectLiteral>,
    binding_parameters: Option<&ObjectLiteral>,
    options: CompileOptions,
) -> Option<String> {
    let top_level = CompileOptions {
        embedded: false,
        ..options
    };
    let mut tail = vec![format!("type: {}", quote(type_name))];
    if let Some(format_options) = format_options.filter(|o| !o.is_empty()) {
        tail.push(format!(
            "formatOptions: {}",
            compile_object(format_options, top_level)?
        ));
    }
    if let Some(binding_parameters) = binding_parameters.filter(|o| !o.is_empty()) {
        tail.push(format!(
            "parameters: {}",
            compile_object(binding_parameters, top_level)?
        ));
    }

    if let [single] = parameters {
        return Some(format!(
            "{{{}, {}}}",
            compile_part(single, false, top_level)?,
            tail.join(", ")
        ));
    }

    let parts = parameters
        .iter()
        .map(|parameter| {
            compile_part(parameter, false, top_level).map(|part| format!("{{{}}}", part))
        })
        .collect::<Option<Vec<_>>>()?;
    Some(format!(
        "{{mode:'TwoWay', parts:[{}], {}}}",
        parts.join(","),
        tail.join(", ")
    ))
}
