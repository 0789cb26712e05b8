//! Rendering of literal values.

use binding_expr::{format_number, ConstantValue, ObjectLiteral};

use crate::compiler::compile_node;
use crate::config::CompileOptions;

/// Escapes a string for use between single quotes. Backslashes are escaped
/// first so an escaped quote stays escaped.
pub fn escape_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Single-quotes a string, escaping embedded quotes and backslashes.
pub fn quote(value: &str) -> String {
    format!("'{}'", escape_string(value))
}

/// Renders a constant.
///
/// At top level strings are emitted raw, inside an expression they are
/// quoted. Collections always render their elements as operands.
pub(crate) fn compile_constant(value: &ConstantValue, options: CompileOptions) -> Option<String> {
    match value {
        ConstantValue::Null if options.nullable && !options.embedded => None,
        ConstantValue::Undefined if options.nullable && !options.embedded => None,
        ConstantValue::Null => Some("null".to_string()),
        ConstantValue::Undefined => Some("undefined".to_string()),
        ConstantValue::Boolean(b) => Some(b.to_string()),
        ConstantValue::Integer(n) => Some(n.to_string()),
        ConstantValue::Decimal(n) => Some(format_number(*n)),
        ConstantValue::String(s) if options.embedded => Some(quote(s)),
        ConstantValue::String(s) => Some(s.clone()),
        ConstantValue::Array(items) => {
            let items = items
                .iter()
                .map(|item| compile_node(item, options.operand()))
                .collect::<Option<Vec<_>>>()?;
            Some(format!("[{}]", items.join(",")))
        }
        ConstantValue::Object(object) => compile_object(object, options),
    }
}

/// Renders an object literal as `{key: value, ...}`.
pub(crate) fn compile_object(object: &ObjectLiteral, options: CompileOptions) -> Option<String> {
    let entries = object
        .iter()
        .map(|(key, value)| {
            compile_node(value, options.operand()).map(|value| format!("{}: {}", key, value))
        })
        .collect::<Option<Vec<_>>>()?;
    Some(format!("{{{}}}", entries.join(", ")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use binding_expr::Expression;

    fn top_level() -> CompileOptions {
        CompileOptions::default()
    }

    fn embedded() -> CompileOptions {
        CompileOptions::builder().with_embedded(true).build()
    }

    #[test]
    fn test_quote_escapes_single_quotes() {
        assert_eq!(quote("it's"), r"'it\'s'");
        assert_eq!(quote(""), "''");
    }

    #[test]
    fn test_quote_escapes_backslashes() {
        assert_eq!(quote(r"C:\"), r"'C:\\'");
        assert_eq!(escape_string(r#"{"a":"\"x\""}"#), r#"{"a":"\\"x\\""}"#);
        assert_eq!(escape_string(r"\'"), r"\\\'");
    }

    #[test]
    fn test_strings() {
        let value = ConstantValue::from("ab");
        assert_eq!(compile_constant(&value, top_level()), Some("ab".to_string()));
        assert_eq!(compile_constant(&value, embedded()), Some("'ab'".to_string()));
    }

    #[test]
    fn test_null_and_undefined() {
        let nullable = CompileOptions::builder().with_nullable(true).build();
        assert_eq!(
            compile_constant(&ConstantValue::Null, top_level()),
            Some("null".to_string())
        );
        assert_eq!(compile_constant(&ConstantValue::Undefined, nullable), None);
        assert_eq!(compile_constant(&ConstantValue::Null, nullable), None);
        assert_eq!(
            compile_constant(&ConstantValue::Null, embedded()),
            Some("null".to_string())
        );
    }

    #[test]
    fn test_numbers_and_booleans() {
        assert_eq!(
            compile_constant(&ConstantValue::Decimal(2.0), embedded()),
            Some("2".to_string())
        );
        assert_eq!(
            compile_constant(&ConstantValue::Decimal(0.25), embedded()),
            Some("0.25".to_string())
        );
        assert_eq!(
            compile_constant(&ConstantValue::Boolean(false), top_level()),
            Some("false".to_string())
        );
    }

    #[test]
    fn test_collections() {
        let array = ConstantValue::from(vec![Expression::from(1), Expression::from("a")]);
        assert_eq!(compile_constant(&array, top_level()), Some("[1,'a']".to_string()));

        let object: ObjectLiteral = [("scale", Expression::from(2)), ("unit", Expression::from("kg"))]
            .into_iter()
            .collect();
        assert_eq!(
            compile_object(&object, top_level()),
            Some("{scale: 2, unit: 'kg'}".to_string())
        );
        assert_eq!(compile_object(&ObjectLiteral::new(), top_level()), Some("{}".to_string()));
    }
}
