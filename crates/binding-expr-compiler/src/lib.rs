//! # binding-expr-compiler
//!
//! Compiles [`binding-expr`] trees into the textual binding syntax read by
//! the host runtime's binding evaluator.
//!
//! ## Quick Start
//!
//! ```rust
//! use binding_expr_compiler::{compile, concat, if_else, path_in_model};
//!
//! // A plain path is a property binding
//! assert_eq!(compile(&path_in_model("Visible")).as_deref(), Some("{Visible}"));
//!
//! // Operators produce an expression binding
//! let label = if_else(path_in_model("Active"), "Yes", "No");
//! assert_eq!(compile(&label).as_deref(), Some("{= %{Active} ? 'Yes' : 'No'}"));
//!
//! // Literals fold before they are compiled
//! assert_eq!(compile(&concat(["a", "b"])).as_deref(), Some("ab"));
//! ```
//!
//! ## With Options
//!
//! ```rust
//! use binding_expr_compiler::{equal, path_in_model, BindingCompiler, CompileOptions};
//!
//! let options = CompileOptions::builder()
//!     .with_keep_target_type(true)
//!     .build();
//!
//! let compiler = BindingCompiler::with_options(options);
//! let check = equal(path_in_model("Status"), "A");
//! assert_eq!(compiler.compile(&check).as_deref(), Some("{= ${Status} === 'A'}"));
//! ```
//!
//! ## Output Forms
//!
//! | Expression | Top level | Embedded |
//! |------------|-----------|----------|
//! | Constant | `ab`, `42`, `null` | `'ab'`, `42`, `null` |
//! | PathInModel | `{ui>/mode}` | `%{ui>/mode}` or `${ui>/mode}` |
//! | Operators | `{= a && b}` | `a && b` |
//! | IfElse | `{= c ? a : b}` | `(c ? a : b)` |
//! | Formatter | `{parts: [...], formatter: 'f'}` | `${parts: [...], formatter: 'f'}` |
//! | ComplexType | `{mode:'TwoWay', parts:[...], type: 't'}` | `$` prefixed |
//!
//! An unresolvable expression compiles to `None`.
//!
//! [`binding-expr`]: binding_expr

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod compiler;
mod config;
mod literal;

// Public re-exports
pub use compiler::{compile, compile_expression, needs_parenthesis, BindingCompiler};
pub use config::{CompileOptions, CompileOptionsBuilder};
pub use literal::{escape_string, quote};

// Re-export commonly used types from the expression crate for convenience
pub use binding_expr::{
    add_type_information, and, call_function, comparison, concat, constant, equal, format_result,
    greater_or_equal, greater_than, if_else, is_empty, length, less_or_equal, less_than, not,
    not_equal, or, path_in_model, path_in_named_model, reference, resolve_binding_string, truthy,
    BindingMode, ComparisonOperator, ConstantValue, Expression, LogicalOperator, ObjectLiteral,
    PathInModelExpression,
};
