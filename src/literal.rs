//! Typed literal coercion.
//!
//! Test data is authored as strings. A trailing `:tag` (the last `:` in the
//! input) selects the native type the prefix is converted to:
//!
//! | Suffix                           | Result                        |
//! |----------------------------------|-------------------------------|
//! | `:string`, `:str`                | prefix verbatim               |
//! | `:bool`, `:boolean`              | case-insensitive true/false   |
//! | `:int`, `:integer`               | 32-bit signed integer         |
//! | `:float`, `:double`, `:decimal`  | 64-bit float                  |
//! | `:long`                          | 64-bit signed integer         |
//! | `:null`                          | `null`, prefix ignored        |
//! | `:json`                          | parsed JSON fragment          |
//!
//! Anything else, including an unknown suffix, is the whole input as a string.
//!
//! ```
//! use json_graft::{parse_typed, TypedValue};
//!
//! assert_eq!(parse_typed("42:int").unwrap(), TypedValue::Int(42));
//! assert_eq!(parse_typed("42").unwrap(), TypedValue::String("42".into()));
//! assert_eq!(parse_typed("a:b:str").unwrap(), TypedValue::String("a:b".into()));
//! ```

use std::fmt;
use std::str::FromStr;

use crate::config::GraftOptions;
use crate::error::{GraftError, Result};
use crate::value::TypedValue;

/// Type tag carried by a literal suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    String,
    Bool,
    Int,
    Float,
    Long,
    Null,
    Json,
}

impl TypeTag {
    /// Canonical tag name
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::String => "string",
            TypeTag::Bool => "bool",
            TypeTag::Int => "int",
            TypeTag::Float => "float",
            TypeTag::Long => "long",
            TypeTag::Null => "null",
            TypeTag::Json => "json",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Marker error for an unrecognized tag; the literal is then a plain string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTag;

impl FromStr for TypeTag {
    type Err = UnknownTag;

    // Case-sensitive: `5:INT` is the string "5:INT".
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "string" | "str" => Ok(TypeTag::String),
            "bool" | "boolean" => Ok(TypeTag::Bool),
            "int" | "integer" => Ok(TypeTag::Int),
            "float" | "double" | "decimal" => Ok(TypeTag::Float),
            "long" => Ok(TypeTag::Long),
            "null" => Ok(TypeTag::Null),
            "json" => Ok(TypeTag::Json),
            _ => Err(UnknownTag),
        }
    }
}

/// Split `raw` at its last `:` when the suffix is a recognized tag.
pub fn split_tag(raw: &str) -> Option<(&str, TypeTag)> {
    let (prefix, suffix) = raw.rsplit_once(':')?;
    let tag = suffix.parse().ok()?;
    Some((prefix, tag))
}

/// Coerce a typed literal with the default (lenient) options.
pub fn parse_typed(raw: &str) -> Result<TypedValue> {
    parse_typed_with(raw, &GraftOptions::default())
}

/// Coerce a typed literal.
///
/// Booleans are lenient unless `strict_booleans` is set: anything other than
/// `true`/`false` (any case) becomes `false`. Numeric and JSON conversions
/// always report malformed input as [`GraftError::InvalidLiteral`].
pub fn parse_typed_with(raw: &str, options: &GraftOptions) -> Result<TypedValue> {
    let Some((prefix, tag)) = split_tag(raw) else {
        return Ok(TypedValue::String(raw.to_string()));
    };

    let invalid = |reason: String| GraftError::InvalidLiteral {
        raw: raw.to_string(),
        tag,
        reason,
    };

    match tag {
        TypeTag::String => Ok(TypedValue::String(prefix.to_string())),
        TypeTag::Bool => {
            if prefix.eq_ignore_ascii_case("true") {
                Ok(TypedValue::Bool(true))
            } else if prefix.eq_ignore_ascii_case("false") || !options.strict_booleans {
                Ok(TypedValue::Bool(false))
            } else {
                Err(invalid("expected true or false".to_string()))
            }
        }
        TypeTag::Int => prefix
            .parse::<i32>()
            .map(TypedValue::Int)
            .map_err(|e| invalid(e.to_string())),
        TypeTag::Long => prefix
            .parse::<i64>()
            .map(TypedValue::Long)
            .map_err(|e| invalid(e.to_string())),
        TypeTag::Float => {
            let f = prefix.parse::<f64>().map_err(|e| invalid(e.to_string()))?;
            if f.is_finite() {
                Ok(TypedValue::Float(f))
            } else {
                Err(invalid("value is not a finite number".to_string()))
            }
        }
        TypeTag::Null => Ok(TypedValue::Null),
        TypeTag::Json => serde_json::from_str(prefix)
            .map(TypedValue::Json)
            .map_err(|e| invalid(format!("fragment '{}' is not valid JSON: {}", prefix, e))),
    }
}
