//! Expression tree types for UI binding expressions.
//!
//! Every node is one variant of [`Expression`]. Raw primitives enter the tree
//! through `Into<Expression>`, which wraps them in [`Expression::Constant`].

use std::cmp::Ordering;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

use crate::error::BindingError;

// =============================================================================
// Operators
// =============================================================================

/// Operator of a logical [`Expression::Set`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LogicalOperator {
    /// Conjunction: `&&`
    #[serde(rename = "&&")]
    And,
    /// Disjunction: `||`
    #[serde(rename = "||")]
    Or,
}

impl LogicalOperator {
    /// Returns the binding syntax token.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalOperator::And => "&&",
            LogicalOperator::Or => "||",
        }
    }
}

impl std::fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogicalOperator {
    type Err = BindingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "&&" => Ok(LogicalOperator::And),
            "||" => Ok(LogicalOperator::Or),
            other => Err(BindingError::UnknownOperator(other.to_string())),
        }
    }
}

/// Operator of an [`Expression::Comparison`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ComparisonOperator {
    /// Strict equality: `===`
    #[serde(rename = "===")]
    Equal,
    /// Strict inequality: `!==`
    #[serde(rename = "!==")]
    NotEqual,
    /// Less than: `<`
    #[serde(rename = "<")]
    LessThan,
    /// Less than or equal: `<=`
    #[serde(rename = "<=")]
    LessOrEqual,
    /// Greater than: `>`
    #[serde(rename = ">")]
    GreaterThan,
    /// Greater than or equal: `>=`
    #[serde(rename = ">=")]
    GreaterOrEqual,
}

impl ComparisonOperator {
    /// Returns the binding syntax token.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonOperator::Equal => "===",
            ComparisonOperator::NotEqual => "!==",
            ComparisonOperator::LessThan => "<",
            ComparisonOperator::LessOrEqual => "<=",
            ComparisonOperator::GreaterThan => ">",
            ComparisonOperator::GreaterOrEqual => ">=",
        }
    }

    /// Returns the operator whose result is the logical complement of this one.
    pub fn negate(&self) -> Self {
        match self {
            ComparisonOperator::Equal => ComparisonOperator::NotEqual,
            ComparisonOperator::NotEqual => ComparisonOperator::Equal,
            ComparisonOperator::LessThan => ComparisonOperator::GreaterOrEqual,
            ComparisonOperator::LessOrEqual => ComparisonOperator::GreaterThan,
            ComparisonOperator::GreaterThan => ComparisonOperator::LessOrEqual,
            ComparisonOperator::GreaterOrEqual => ComparisonOperator::LessThan,
        }
    }

    /// Evaluates the operator on two literal values.
    pub fn evaluate(&self, left: &ConstantValue, right: &ConstantValue) -> bool {
        match self {
            ComparisonOperator::Equal => left.strict_equals(right),
            ComparisonOperator::NotEqual => !left.strict_equals(right),
            ComparisonOperator::LessThan => left.relational_cmp(right) == Some(Ordering::Less),
            ComparisonOperator::LessOrEqual => matches!(
                left.relational_cmp(right),
                Some(Ordering::Less | Ordering::Equal)
            ),
            ComparisonOperator::GreaterThan => {
                left.relational_cmp(right) == Some(Ordering::Greater)
            }
            ComparisonOperator::GreaterOrEqual => matches!(
                left.relational_cmp(right),
                Some(Ordering::Greater | Ordering::Equal)
            ),
        }
    }
}

impl std::fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComparisonOperator {
    type Err = BindingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "===" => Ok(ComparisonOperator::Equal),
            "!==" => Ok(ComparisonOperator::NotEqual),
            "<" => Ok(ComparisonOperator::LessThan),
            "<=" => Ok(ComparisonOperator::LessOrEqual),
            ">" => Ok(ComparisonOperator::GreaterThan),
            ">=" => Ok(ComparisonOperator::GreaterOrEqual),
            other => Err(BindingError::UnknownOperator(other.to_string())),
        }
    }
}

/// Data flow mode of a model binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BindingMode {
    /// Value is read once.
    OneTime,
    /// Model changes flow to the control.
    OneWay,
    /// Changes flow in both directions.
    TwoWay,
}

impl std::fmt::Display for BindingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BindingMode::OneTime => write!(f, "OneTime"),
            BindingMode::OneWay => write!(f, "OneWay"),
            BindingMode::TwoWay => write!(f, "TwoWay"),
        }
    }
}

// =============================================================================
// Constant values
// =============================================================================

/// Insertion-ordered object literal whose attributes are expressions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ObjectLiteral {
    entries: IndexMap<String, Expression>,
}

impl ObjectLiteral {
    /// Creates an empty object literal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute, replacing an existing one with the same key in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Expression>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Returns the attribute stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Expression> {
        self.entries.get(key)
    }

    /// Iterates over the attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Expression)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the object has no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keeps only the attributes for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(&str, &Expression) -> bool) {
        self.entries.retain(|k, v| keep(k, v));
    }
}

impl<K: Into<String>, V: Into<Expression>> FromIterator<(K, V)> for ObjectLiteral {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        ObjectLiteral {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// Literal value held by [`Expression::Constant`].
///
/// Collections hold wrapped expressions, so later passes can treat nested
/// literals and general expressions uniformly.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstantValue {
    /// Absent value.
    Undefined,
    /// Explicit null.
    Null,
    /// Boolean literal.
    Boolean(bool),
    /// Integer literal.
    Integer(i64),
    /// Floating point literal.
    Decimal(f64),
    /// String literal.
    String(String),
    /// Array literal.
    Array(Vec<Expression>),
    /// Object literal.
    Object(ObjectLiteral),
}

impl ConstantValue {
    /// Returns true for [`ConstantValue::Undefined`].
    pub fn is_undefined(&self) -> bool {
        matches!(self, ConstantValue::Undefined)
    }

    /// Truthiness as the host runtime defines it.
    pub fn is_truthy(&self) -> bool {
        match self {
            ConstantValue::Undefined | ConstantValue::Null => false,
            ConstantValue::Boolean(b) => *b,
            ConstantValue::Integer(n) => *n != 0,
            ConstantValue::Decimal(n) => *n != 0.0 && !n.is_nan(),
            ConstantValue::String(s) => !s.is_empty(),
            ConstantValue::Array(_) | ConstantValue::Object(_) => true,
        }
    }

    /// Numeric coercion used by relational comparison.
    pub fn to_number(&self) -> f64 {
        match self {
            ConstantValue::Undefined => f64::NAN,
            ConstantValue::Null => 0.0,
            ConstantValue::Boolean(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            ConstantValue::Integer(n) => *n as f64,
            ConstantValue::Decimal(n) => *n,
            ConstantValue::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse().unwrap_or(f64::NAN)
                }
            }
            ConstantValue::Array(_) | ConstantValue::Object(_) => f64::NAN,
        }
    }

    /// Strict (`===`) equality: same type and same value.
    ///
    /// Integers and decimals are one numeric type; `NaN` is never equal.
    /// Collections compare structurally.
    pub fn strict_equals(&self, other: &ConstantValue) -> bool {
        use ConstantValue::*;
        match (self, other) {
            (Undefined, Undefined) | (Null, Null) => true,
            (Boolean(a), Boolean(b)) => a == b,
            (Integer(a), Integer(b)) => a == b,
            (Integer(_) | Decimal(_), Integer(_) | Decimal(_)) => {
                self.to_number() == other.to_number()
            }
            (String(a), String(b)) => a == b,
            (Array(a), Array(b)) => a == b,
            (Object(a), Object(b)) => a == b,
            _ => false,
        }
    }

    /// Relational ordering: strings compare lexicographically, everything else
    /// numerically. `None` when a side coerces to `NaN`.
    pub fn relational_cmp(&self, other: &ConstantValue) -> Option<Ordering> {
        if let (ConstantValue::String(a), ConstantValue::String(b)) = (self, other) {
            return Some(a.cmp(b));
        }
        self.to_number().partial_cmp(&other.to_number())
    }

    /// String conversion as the host runtime performs it.
    pub fn to_js_string(&self) -> String {
        match self {
            ConstantValue::Undefined => "undefined".to_string(),
            ConstantValue::Null => "null".to_string(),
            ConstantValue::Boolean(b) => b.to_string(),
            ConstantValue::Integer(n) => n.to_string(),
            ConstantValue::Decimal(n) => format_number(*n),
            ConstantValue::String(s) => s.clone(),
            ConstantValue::Array(items) => items
                .iter()
                .map(|item| match item {
                    Expression::Constant { value } => match value {
                        ConstantValue::Undefined | ConstantValue::Null => String::new(),
                        other => other.to_js_string(),
                    },
                    _ => String::new(),
                })
                .collect::<Vec<_>>()
                .join(","),
            ConstantValue::Object(_) => "[object Object]".to_string(),
        }
    }
}

/// Formats a float the way the host runtime prints numbers.
///
/// Magnitudes from `1e21` up and below `1e-6` use exponent notation with an
/// explicit sign (`1e+21`, `1.5e-7`).
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if n == 0.0 {
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        let exponential = format!("{:e}", n);
        match exponential.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => exponential,
        }
    } else {
        n.to_string()
    }
}

impl Serialize for ConstantValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ConstantValue::Undefined | ConstantValue::Null => serializer.serialize_none(),
            ConstantValue::Boolean(b) => serializer.serialize_bool(*b),
            ConstantValue::Integer(n) => serializer.serialize_i64(*n),
            ConstantValue::Decimal(n) => serializer.serialize_f64(*n),
            ConstantValue::String(s) => serializer.serialize_str(s),
            ConstantValue::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            ConstantValue::Object(object) => object.serialize(serializer),
        }
    }
}

impl From<bool> for ConstantValue {
    fn from(value: bool) -> Self {
        ConstantValue::Boolean(value)
    }
}

impl From<i32> for ConstantValue {
    fn from(value: i32) -> Self {
        ConstantValue::Integer(value.into())
    }
}

impl From<i64> for ConstantValue {
    fn from(value: i64) -> Self {
        ConstantValue::Integer(value)
    }
}

impl From<f64> for ConstantValue {
    fn from(value: f64) -> Self {
        ConstantValue::Decimal(value)
    }
}

impl From<&str> for ConstantValue {
    fn from(value: &str) -> Self {
        ConstantValue::String(value.to_string())
    }
}

impl From<String> for ConstantValue {
    fn from(value: String) -> Self {
        ConstantValue::String(value)
    }
}

impl<T: Into<Expression>> From<Vec<T>> for ConstantValue {
    fn from(values: Vec<T>) -> Self {
        ConstantValue::Array(values.into_iter().map(Into::into).collect())
    }
}

impl From<ObjectLiteral> for ConstantValue {
    fn from(value: ObjectLiteral) -> Self {
        ConstantValue::Object(value)
    }
}

impl<T: Into<ConstantValue>> From<Option<T>> for ConstantValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ConstantValue::Undefined, Into::into)
    }
}

// =============================================================================
// Paths
// =============================================================================

/// A binding to a path in a named (or the default) model.
///
/// The optional metadata is supplied by the annotation layer and turns the
/// binding into a typed one when compiled.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathInModelExpression {
    /// Slash-joined path.
    pub path: String,
    /// Model name (`None` = default model).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    /// Qualified name of the binding type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    /// Target type of the binding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_type: Option<String>,
    /// Binding mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<BindingMode>,
    /// Type constraints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<ObjectLiteral>,
    /// Type format options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format_options: Option<ObjectLiteral>,
    /// Binding parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<ObjectLiteral>,
}

impl PathInModelExpression {
    /// Creates a plain path binding.
    pub fn new(path: impl Into<String>, model_name: Option<String>) -> Self {
        Self {
            path: path.into(),
            model_name,
            type_name: None,
            target_type: None,
            mode: None,
            constraints: None,
            format_options: None,
            parameters: None,
        }
    }

    /// Sets the binding type.
    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Sets the target type.
    pub fn with_target_type(mut self, target_type: impl Into<String>) -> Self {
        self.target_type = Some(target_type.into());
        self
    }

    /// Sets the binding mode.
    pub fn with_mode(mut self, mode: BindingMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Sets the type constraints.
    pub fn with_constraints(mut self, constraints: ObjectLiteral) -> Self {
        self.constraints = Some(constraints);
        self
    }

    /// Sets the type format options.
    pub fn with_format_options(mut self, format_options: ObjectLiteral) -> Self {
        self.format_options = Some(format_options);
        self
    }

    /// Sets the binding parameters.
    pub fn with_parameters(mut self, parameters: ObjectLiteral) -> Self {
        self.parameters = Some(parameters);
        self
    }

    /// Returns true if any typed-binding metadata is attached.
    pub fn has_binding_metadata(&self) -> bool {
        self.type_name.is_some()
            || self.target_type.is_some()
            || self.mode.is_some()
            || self.constraints.is_some()
            || self.format_options.is_some()
            || self.parameters.is_some()
    }

    /// The path qualified by its model name: `model>path`.
    pub fn qualified_path(&self) -> String {
        match self.model_name.as_deref() {
            Some(model) if !model.is_empty() => format!("{}>{}", model, self.path),
            _ => self.path.clone(),
        }
    }
}

// =============================================================================
// Expression tree
// =============================================================================

/// Kind tag of an [`Expression`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpressionKind {
    /// [`Expression::Constant`]
    Constant,
    /// [`Expression::Unresolvable`]
    Unresolvable,
    /// [`Expression::PathInModel`]
    PathInModel,
    /// [`Expression::EmbeddedBinding`]
    EmbeddedBinding,
    /// [`Expression::EmbeddedExpressionBinding`]
    EmbeddedExpressionBinding,
    /// [`Expression::Ref`]
    Ref,
    /// [`Expression::Not`]
    Not,
    /// [`Expression::Truthy`]
    Truthy,
    /// [`Expression::Set`]
    Set,
    /// [`Expression::Comparison`]
    Comparison,
    /// [`Expression::IfElse`]
    IfElse,
    /// [`Expression::Concat`]
    Concat,
    /// [`Expression::Length`]
    Length,
    /// [`Expression::Formatter`]
    Formatter,
    /// [`Expression::ComplexType`]
    ComplexType,
    /// [`Expression::Function`]
    Function,
}

impl std::fmt::Display for ExpressionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ExpressionKind::Constant => "Constant",
            ExpressionKind::Unresolvable => "Unresolvable",
            ExpressionKind::PathInModel => "PathInModel",
            ExpressionKind::EmbeddedBinding => "EmbeddedBinding",
            ExpressionKind::EmbeddedExpressionBinding => "EmbeddedExpressionBinding",
            ExpressionKind::Ref => "Ref",
            ExpressionKind::Not => "Not",
            ExpressionKind::Truthy => "Truthy",
            ExpressionKind::Set => "Set",
            ExpressionKind::Comparison => "Comparison",
            ExpressionKind::IfElse => "IfElse",
            ExpressionKind::Concat => "Concat",
            ExpressionKind::Length => "Length",
            ExpressionKind::Formatter => "Formatter",
            ExpressionKind::ComplexType => "ComplexType",
            ExpressionKind::Function => "Function",
        };
        f.write_str(name)
    }
}

/// A node of a binding expression tree.
///
/// Build trees with the smart constructors in [`crate::builder`]; they keep
/// the tree simplified. Serializes to JSON objects tagged by `_type`, which is
/// the shape the host runtime reads back for outlined expressions.
///
/// # Examples
///
/// ```rust
/// use binding_expr::{and, constant, path_in_model, Expression};
///
/// let visible = and([constant(true), path_in_model("Visible")]);
/// assert!(matches!(visible, Expression::PathInModel(_)));
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "_type")]
pub enum Expression {
    /// A literal value.
    /// Example: `'Yes'`, `42`, `[1,2]`
    Constant {
        /// The literal.
        #[serde(skip_serializing_if = "ConstantValue::is_undefined")]
        value: ConstantValue,
    },

    /// No value could be determined. Absorbs every operation it takes part in.
    Unresolvable,

    /// A model path binding.
    /// Example: `{Status}` or `{ui>/isEditable}`
    PathInModel(PathInModelExpression),

    /// A pre-rendered binding string: `{path}`
    EmbeddedBinding {
        /// The raw binding.
        value: String,
    },

    /// A pre-rendered expression binding string: `{= expr}`
    EmbeddedExpressionBinding {
        /// The raw binding.
        value: String,
    },

    /// A raw reference token such as `$event`.
    Ref {
        /// The token (`None` renders as `null`).
        #[serde(rename = "ref")]
        reference: Option<String>,
    },

    /// Logical negation: `!operand`
    Not {
        /// The negated expression.
        operand: Box<Expression>,
    },

    /// Boolean coercion: `!!operand`
    Truthy {
        /// The coerced expression.
        operand: Box<Expression>,
    },

    /// Logical conjunction or disjunction of two or more operands.
    /// Example: `a && b && c`
    Set {
        /// `&&` or `||`.
        operator: LogicalOperator,
        /// Operands, never a direct `Set` of the same operator.
        operands: Vec<Expression>,
    },

    /// Binary comparison.
    /// Example: `a === 'A'`
    Comparison {
        /// Comparison operator.
        operator: ComparisonOperator,
        /// Left side.
        operand1: Box<Expression>,
        /// Right side.
        operand2: Box<Expression>,
    },

    /// Conditional choice: `condition ? on_true : on_false`
    IfElse {
        /// Condition, never a `Not` node.
        condition: Box<Expression>,
        /// Value when the condition holds.
        #[serde(rename = "onTrue")]
        on_true: Box<Expression>,
        /// Value otherwise.
        #[serde(rename = "onFalse")]
        on_false: Box<Expression>,
    },

    /// String concatenation: `a + b`
    Concat {
        /// Concatenated parts.
        expressions: Vec<Expression>,
    },

    /// Length of a collection: `path.length`
    Length {
        /// The measured path.
        #[serde(rename = "pathInModel")]
        path_in_model: Box<Expression>,
    },

    /// Call of a named formatter with bound parts.
    Formatter {
        /// Formatter name.
        #[serde(rename = "fn")]
        function: String,
        /// Formatter parts.
        parameters: Vec<Expression>,
    },

    /// A composite typed binding (for example amount and currency).
    ComplexType {
        /// Qualified name of the composite type.
        #[serde(rename = "type")]
        type_name: String,
        /// Bound parts.
        parameters: Vec<Expression>,
        /// Type format options.
        #[serde(rename = "formatOptions", skip_serializing_if = "Option::is_none")]
        format_options: Option<ObjectLiteral>,
        /// Binding parameters.
        #[serde(rename = "bindingParameters", skip_serializing_if = "Option::is_none")]
        binding_parameters: Option<ObjectLiteral>,
    },

    /// Call of a function inside an expression binding.
    /// Example: `odata.fillUriTemplate(a, b)`
    Function {
        /// Optional receiver: `obj.fn(...)`
        #[serde(rename = "obj", skip_serializing_if = "Option::is_none")]
        object: Option<Box<Expression>>,
        /// Function name.
        #[serde(rename = "fn")]
        function: String,
        /// Arguments.
        parameters: Vec<Expression>,
    },
}

impl Expression {
    /// Returns the kind tag of this node.
    pub fn kind(&self) -> ExpressionKind {
        match self {
            Expression::Constant { .. } => ExpressionKind::Constant,
            Expression::Unresolvable => ExpressionKind::Unresolvable,
            Expression::PathInModel(_) => ExpressionKind::PathInModel,
            Expression::EmbeddedBinding { .. } => ExpressionKind::EmbeddedBinding,
            Expression::EmbeddedExpressionBinding { .. } => {
                ExpressionKind::EmbeddedExpressionBinding
            }
            Expression::Ref { .. } => ExpressionKind::Ref,
            Expression::Not { .. } => ExpressionKind::Not,
            Expression::Truthy { .. } => ExpressionKind::Truthy,
            Expression::Set { .. } => ExpressionKind::Set,
            Expression::Comparison { .. } => ExpressionKind::Comparison,
            Expression::IfElse { .. } => ExpressionKind::IfElse,
            Expression::Concat { .. } => ExpressionKind::Concat,
            Expression::Length { .. } => ExpressionKind::Length,
            Expression::Formatter { .. } => ExpressionKind::Formatter,
            Expression::ComplexType { .. } => ExpressionKind::ComplexType,
            Expression::Function { .. } => ExpressionKind::Function,
        }
    }

    /// Returns the literal if this is a constant.
    pub fn as_constant(&self) -> Option<&ConstantValue> {
        match self {
            Expression::Constant { value } => Some(value),
            _ => None,
        }
    }

    /// Returns the path binding if this is one.
    pub fn as_path_in_model(&self) -> Option<&PathInModelExpression> {
        match self {
            Expression::PathInModel(path) => Some(path),
            _ => None,
        }
    }

    /// Applies `annotate` to a path binding; other nodes pass through.
    ///
    /// ```rust
    /// use binding_expr::{path_in_model, Expression};
    ///
    /// let price = path_in_model("Price").annotate_path(|p| p.with_type("sap.ui.model.odata.type.Decimal"));
    /// assert!(price.as_path_in_model().unwrap().has_binding_metadata());
    /// ```
    pub fn annotate_path(
        self,
        annotate: impl FnOnce(PathInModelExpression) -> PathInModelExpression,
    ) -> Expression {
        match self {
            Expression::PathInModel(path) => Expression::PathInModel(annotate(path)),
            other => other,
        }
    }
}

/// Structural equality. [`Expression::Unresolvable`] is never equal to
/// anything, itself included.
impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        use Expression::*;
        match (self, other) {
            (Unresolvable, _) | (_, Unresolvable) => false,
            (Constant { value: a }, Constant { value: b }) => a == b,
            (PathInModel(a), PathInModel(b)) => a == b,
            (EmbeddedBinding { value: a }, EmbeddedBinding { value: b }) => a == b,
            (
                EmbeddedExpressionBinding { value: a },
                EmbeddedExpressionBinding { value: b },
            ) => a == b,
            (Ref { reference: a }, Ref { reference: b }) => a == b,
            (Not { operand: a }, Not { operand: b }) => a == b,
            (Truthy { operand: a }, Truthy { operand: b }) => a == b,
            (
                Set {
                    operator: op_a,
                    operands: a,
                },
                Set {
                    operator: op_b,
                    operands: b,
                },
            ) => op_a == op_b && a == b,
            (
                Comparison {
                    operator: op_a,
                    operand1: l_a,
                    operand2: r_a,
                },
                Comparison {
                    operator: op_b,
                    operand1: l_b,
                    operand2: r_b,
                },
            ) => op_a == op_b && l_a == l_b && r_a == r_b,
            (
                IfElse {
                    condition: c_a,
                    on_true: t_a,
                    on_false: f_a,
                },
                IfElse {
                    condition: c_b,
                    on_true: t_b,
                    on_false: f_b,
                },
            ) => c_a == c_b && t_a == t_b && f_a == f_b,
            (Concat { expressions: a }, Concat { expressions: b }) => a == b,
            (Length { path_in_model: a }, Length { path_in_model: b }) => a == b,
            (
                Formatter {
                    function: fn_a,
                    parameters: a,
                },
                Formatter {
                    function: fn_b,
                    parameters: b,
                },
            ) => fn_a == fn_b && a == b,
            (
                ComplexType {
                    type_name: t_a,
                    parameters: p_a,
                    format_options: fo_a,
                    binding_parameters: bp_a,
                },
                ComplexType {
                    type_name: t_b,
                    parameters: p_b,
                    format_options: fo_b,
                    binding_parameters: bp_b,
                },
            ) => t_a == t_b && p_a == p_b && fo_a == fo_b && bp_a == bp_b,
            (
                Function {
                    object: o_a,
                    function: fn_a,
                    parameters: a,
                },
                Function {
                    object: o_b,
                    function: fn_b,
                    parameters: b,
                },
            ) => fn_a == fn_b && o_a == o_b && a == b,
            _ => false,
        }
    }
}

// =============================================================================
// Primitive wrapping
// =============================================================================

impl From<ConstantValue> for Expression {
    fn from(value: ConstantValue) -> Self {
        Expression::Constant { value }
    }
}

impl From<PathInModelExpression> for Expression {
    fn from(path: PathInModelExpression) -> Self {
        Expression::PathInModel(path)
    }
}

impl From<bool> for Expression {
    fn from(value: bool) -> Self {
        ConstantValue::from(value).into()
    }
}

impl From<i32> for Expression {
    fn from(value: i32) -> Self {
        ConstantValue::from(value).into()
    }
}

impl From<i64> for Expression {
    fn from(value: i64) -> Self {
        ConstantValue::from(value).into()
    }
}

impl From<f64> for Expression {
    fn from(value: f64) -> Self {
        ConstantValue::from(value).into()
    }
}

impl From<&str> for Expression {
    fn from(value: &str) -> Self {
        ConstantValue::from(value).into()
    }
}

impl From<String> for Expression {
    fn from(value: String) -> Self {
        ConstantValue::from(value).into()
    }
}

impl<T: Into<Expression>> From<Option<T>> for Expression {
    fn from(value: Option<T>) -> Self {
        value.map_or(ConstantValue::Undefined.into(), Into::into)
    }
}

/// Wraps a primitive into a constant; expressions are returned unchanged.
pub fn wrap_primitive(value: impl Into<Expression>) -> Expression {
    value.into()
}

// =============================================================================
// Predicates
// =============================================================================

/// Returns true for constants.
pub fn is_constant(expression: &Expression) -> bool {
    matches!(expression, Expression::Constant { .. })
}

/// Returns true for the absorbing [`Expression::Unresolvable`].
pub fn is_unresolvable(expression: &Expression) -> bool {
    matches!(expression, Expression::Unresolvable)
}

/// Returns true if any of the expressions is unresolvable.
pub fn has_unresolvable<'a>(expressions: impl IntoIterator<Item = &'a Expression>) -> bool {
    expressions.into_iter().any(is_unresolvable)
}

/// Returns true for model path bindings.
pub fn is_path_in_model(expression: &Expression) -> bool {
    matches!(expression, Expression::PathInModel(_))
}

/// Returns true for comparisons.
pub fn is_comparison(expression: &Expression) -> bool {
    matches!(expression, Expression::Comparison { .. })
}

/// Returns true for logical sets.
pub fn is_set(expression: &Expression) -> bool {
    matches!(expression, Expression::Set { .. })
}

/// Returns true for negations.
pub fn is_not(expression: &Expression) -> bool {
    matches!(expression, Expression::Not { .. })
}

/// Returns true for conditionals.
pub fn is_if_else(expression: &Expression) -> bool {
    matches!(expression, Expression::IfElse { .. })
}

/// Returns true for concatenations.
pub fn is_concat(expression: &Expression) -> bool {
    matches!(expression, Expression::Concat { .. })
}

/// Returns true for composite typed bindings.
pub fn is_complex_type(expression: &Expression) -> bool {
    matches!(expression, Expression::ComplexType { .. })
}

/// Returns true for formatter calls.
pub fn is_formatter(expression: &Expression) -> bool {
    matches!(expression, Expression::Formatter { .. })
}

/// Returns true for function calls.
pub fn is_function(expression: &Expression) -> bool {
    matches!(expression, Expression::Function { .. })
}

/// Returns true for the literal `true`.
pub fn is_true(expression: &Expression) -> bool {
    matches!(
        expression,
        Expression::Constant {
            value: ConstantValue::Boolean(true)
        }
    )
}

/// Returns true for the literal `false`.
pub fn is_false(expression: &Expression) -> bool {
    matches!(
        expression,
        Expression::Constant {
            value: ConstantValue::Boolean(false)
        }
    )
}

/// Returns true if the expression cannot be emitted inside a ternary or a
/// concatenation: a composite type or concatenation, or logical structure
/// containing one.
pub fn is_complex_value(expression: &Expression) -> bool {
    match expression {
        Expression::ComplexType { .. } | Expression::Concat { .. } => true,
        Expression::Not { operand } | Expression::Truthy { operand } => {
            is_complex_value(operand)
        }
        Expression::Set { operands, .. } => operands.iter().any(is_complex_value),
        Expression::Comparison {
            operand1, operand2, ..
        } => is_complex_value(operand1) || is_complex_value(operand2),
        Expression::IfElse {
            condition,
            on_true,
            on_false,
        } => is_complex_value(condition) || is_complex_value(on_true) || is_complex_value(on_false),
        _ => false,
    }
}
