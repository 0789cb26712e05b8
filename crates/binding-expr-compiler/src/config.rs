//! Configuration types for the binding compiler.

/// Options controlling how an expression is compiled.
///
/// # Example
///
/// ```rust
/// use binding_expr_compiler::CompileOptions;
///
/// let options = CompileOptions::builder()
///     .with_embedded(true)
///     .with_keep_target_type(true)
///     .build();
/// assert_eq!(options.separator(), '$');
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileOptions {
    /// The expression is emitted inside another expression binding.
    pub embedded: bool,
    /// Keep the target type of embedded paths (`${...}` instead of `%{...}`).
    pub keep_target_type: bool,
    /// Emit no binding at all for a top-level `null` or `undefined` constant.
    pub nullable: bool,
}

impl CompileOptions {
    /// Creates a new builder for CompileOptions.
    pub fn builder() -> CompileOptionsBuilder {
        CompileOptionsBuilder::default()
    }

    /// Prefix of bindings embedded in an expression binding.
    pub fn separator(&self) -> char {
        if self.keep_target_type {
            '$'
        } else {
            '%'
        }
    }

    /// The same options for an operand of the current node.
    pub(crate) fn operand(&self) -> Self {
        Self {
            embedded: true,
            ..*self
        }
    }

    /// Operand options that keep the target type.
    pub(crate) fn typed_operand(&self) -> Self {
        Self {
            embedded: true,
            keep_target_type: true,
            nullable: self.nullable,
        }
    }
}

/// Builder for CompileOptions.
#[derive(Debug, Clone, Default)]
pub struct CompileOptionsBuilder {
    embedded: bool,
    keep_target_type: bool,
    nullable: bool,
}

impl CompileOptionsBuilder {
    /// Compiles as an operand of an enclosing expression binding.
    pub fn with_embedded(mut self, embedded: bool) -> Self {
        self.embedded = embedded;
        self
    }

    /// Keeps the target type of embedded paths.
    pub fn with_keep_target_type(mut self, keep_target_type: bool) -> Self {
        self.keep_target_type = keep_target_type;
        self
    }

    /// Maps top-level `null` and `undefined` to no binding.
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Builds the CompileOptions.
    pub fn build(self) -> CompileOptions {
        CompileOptions {
            embedded: self.embedded,
            keep_target_type: self.keep_target_type,
            nullable: self.nullable,
        }
    }
}
