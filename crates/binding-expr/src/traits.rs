//! Seams to the annotation layer that feeds the constructors.
//!
//! The translation of annotation metadata into expressions lives outside this
//! crate. What the constructors need from it is expressed here as small traits:
//!
//! - [`EntityTypeKeys`]: key properties of the entity type of the current
//!   binding context
//! - [`PathVisitor`]: rewrites a raw path before it becomes a binding
//! - [`BindingFunction`]: resolves a function reference to its declared name
//!
//! # Example: Implementing EntityTypeKeys
//!
//! ```rust
//! use binding_expr::{format_result, path_in_named_model, EntityTypeKeys};
//!
//! struct SalesOrder;
//!
//! impl EntityTypeKeys for SalesOrder {
//!     fn key_names(&self) -> Vec<&str> {
//!         vec!["SalesOrder", "IsActiveEntity"]
//!     }
//! }
//!
//! let formatted = format_result(
//!     [path_in_named_model("/currency", "ui")],
//!     "my.app.Formatter#formatCurrency",
//!     Some(&SalesOrder),
//!     false,
//! );
//! ```

// =============================================================================
// Context entity type
// =============================================================================

/// Key properties of the entity type a binding is evaluated against.
pub trait EntityTypeKeys {
    /// Names of the key properties, in declaration order.
    fn key_names(&self) -> Vec<&str>;
}

/// Plain entity type description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextEntityType {
    /// Qualified name of the entity type.
    pub name: String,
    /// Key property names.
    pub keys: Vec<String>,
}

impl ContextEntityType {
    /// Creates an entity type description.
    pub fn new<I, S>(name: impl Into<String>, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }
}

impl EntityTypeKeys for ContextEntityType {
    fn key_names(&self) -> Vec<&str> {
        self.keys.iter().map(String::as_str).collect()
    }
}

// =============================================================================
// Path visitor
// =============================================================================

/// Rewrites a raw path into the path that is actually bound.
///
/// Returning `None` means the path cannot be resolved.
pub trait PathVisitor {
    /// Resolves `path`.
    fn visit_path(&self, path: &str) -> Option<String>;
}

impl<F> PathVisitor for F
where
    F: Fn(&str) -> Option<String>,
{
    fn visit_path(&self, path: &str) -> Option<String> {
        self(path)
    }
}

// =============================================================================
// Function references
// =============================================================================

/// Anything that names a formatter or function callable from a binding.
pub trait BindingFunction {
    /// The declared, dot-qualified name (optionally `Class#method`).
    fn function_name(&self) -> &str;
}

impl BindingFunction for &str {
    fn function_name(&self) -> &str {
        self
    }
}

impl BindingFunction for String {
    fn function_name(&self) -> &str {
        self.as_str()
    }
}

impl BindingFunction for &String {
    fn function_name(&self) -> &str {
        self.as_str()
    }
}

/// A reference to a function declared elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionReference {
    declared_name: String,
}

impl FunctionReference {
    /// Creates a reference to the function declared as `declared_name`.
    pub fn new(declared_name: impl Into<String>) -> Self {
        Self {
            declared_name: declared_name.into(),
        }
    }
}

impl BindingFunction for FunctionReference {
    fn function_name(&self) -> &str {
        &self.declared_name
    }
}

impl BindingFunction for &FunctionReference {
    fn function_name(&self) -> &str {
        &self.declared_name
    }
}
