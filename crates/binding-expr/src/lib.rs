//! # binding-expr
//!
//! An algebra of UI data-binding expressions.
//!
//! Framework code describes what a control displays or reacts to as a tree:
//! a constant, a model path, a logical combination, a comparison, a
//! conditional choice, a concatenation, or a call into a named formatter or
//! composite type. This crate provides:
//! - **Expression model**: the [`Expression`] tree and its predicates
//! - **Smart constructors**: one function per node kind, simplifying as they build
//! - **Structural transform**: replace-by-kind rewriting and expression outlining
//!
//! Turning a tree into binding text is the job of `binding-expr-compiler`.
//!
//! ## Usage
//!
//! ```rust
//! use binding_expr::{and, constant, equal, if_else, not, path_in_model, Expression};
//!
//! // Literals fold away
//! assert_eq!(and([constant(true), path_in_model("Visible")]), path_in_model("Visible"));
//!
//! // Contradictions are detected
//! assert_eq!(and([path_in_model("X"), not(path_in_model("X"))]), constant(false));
//!
//! // A comparison and a conditional
//! let label = if_else(equal(path_in_model("Status"), "A"), "Approved", "Open");
//! assert!(matches!(label, Expression::IfElse { .. }));
//! ```
//!
//! ## Unresolvable
//!
//! When a value cannot be determined, constructors return
//! [`Expression::Unresolvable`]. It absorbs every operation it takes part in
//! and compiles to no binding at all.
//!
//! ```rust
//! use binding_expr::{concat, or, path_in_model, resolve_path_in_model, Expression};
//!
//! let missing = resolve_path_in_model(None, None, &[], None);
//! assert!(matches!(or([path_in_model("A"), missing.clone()]), Expression::Unresolvable));
//! assert!(matches!(concat(["x".into(), missing]), Expression::Unresolvable));
//! ```
//!
//! ## Node kinds
//!
//! | Kind | Constructor | Binding text |
//! |------|-------------|--------------|
//! | Constant | [`constant`] | `'A'`, `42` |
//! | PathInModel | [`path_in_model`] | `{Status}`, `{ui>/editMode}` |
//! | Not | [`not()`] | `!a` |
//! | Set | [`and`], [`or`] | `a && b` |
//! | Comparison | [`equal`], [`less_than`], ... | `a === b` |
//! | IfElse | [`if_else`] | `c ? a : b` |
//! | Concat | [`concat`] | `a + b` |
//! | Formatter | [`format_result`] | `{parts: [...], formatter: 'f'}` |
//! | ComplexType | [`add_type_information`] | `{parts: [...], type: 't'}` |
//! | Function | [`call_function`] | `f(a, b)` |

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod ast;
pub mod builder;
mod error;
pub mod outline;
pub mod simplify;
mod traits;
mod transform;

pub use ast::{
    format_number, has_unresolvable, is_comparison, is_complex_type, is_complex_value, is_concat,
    is_constant, is_false, is_formatter, is_function, is_if_else, is_not, is_path_in_model, is_set,
    is_true, is_unresolvable, wrap_primitive, BindingMode, ComparisonOperator, ConstantValue, Expression,
    ExpressionKind, LogicalOperator, ObjectLiteral, PathInModelExpression,
};
pub use builder::{
    add_type_information, and, call_function, comparison, concat, constant, equal,
    format_result, greater_or_equal, greater_than, if_else, is_empty, length, less_or_equal,
    less_than, not, not_equal, or, path_in_model, path_in_named_model, reference,
    resolve_binding_string, resolve_path_in_model, truthy,
};
pub use error::{BindingError, BindingResult};
pub use outline::{outline_expression, serialize_expression};
pub use simplify::check_expressions_are_equal;
pub use traits::{BindingFunction, ContextEntityType, EntityTypeKeys, FunctionReference, PathVisitor};
pub use transform::transform_recursively;
