use serde_json::{Number, Value};

/// A value produced by coercing a typed literal such as `"5:int"`.
///
/// This is a closed set: every caller matches exhaustively instead of probing
/// the runtime type of a loosely typed result.
///
/// # Type Preservation
///
/// The 32-bit `int` and 64-bit `long` tags are kept apart so callers can tell
/// which coercion was requested, even though both serialize to a JSON integer.
///
/// # Examples
///
/// ```
/// use json_graft::TypedValue;
/// use serde_json::json;
///
/// let value = TypedValue::Int(5);
/// assert_eq!(value.into_json(), json!(5));
///
/// let fragment = TypedValue::Json(json!({"a": [1, 2]}));
/// assert_eq!(fragment.type_name(), "json");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    /// UTF-8 string, also the result when no type suffix is recognized
    String(String),

    /// `:bool` / `:boolean`
    Bool(bool),

    /// `:int` / `:integer`
    Int(i32),

    /// `:float` / `:double` / `:decimal`, always finite
    Float(f64),

    /// `:long`
    Long(i64),

    /// `:null`
    Null,

    /// `:json`, a parsed document fragment
    Json(Value),
}

impl TypedValue {
    /// Name of the tag family this value came from
    pub fn type_name(&self) -> &'static str {
        match self {
            TypedValue::String(_) => "string",
            TypedValue::Bool(_) => "bool",
            TypedValue::Int(_) => "int",
            TypedValue::Float(_) => "float",
            TypedValue::Long(_) => "long",
            TypedValue::Null => "null",
            TypedValue::Json(_) => "json",
        }
    }

    /// Convert into a document node.
    ///
    /// Floats are finite by construction; a non-finite float built by hand
    /// becomes `null`, which is the only JSON spelling available for it.
    pub fn into_json(self) -> Value {
        match self {
            TypedValue::String(s) => Value::String(s),
            TypedValue::Bool(b) => Value::Bool(b),
            TypedValue::Int(i) => Value::Number(i.into()),
            TypedValue::Long(i) => Value::Number(i.into()),
            TypedValue::Float(f) => Number::from_f64(f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            TypedValue::Null => Value::Null,
            TypedValue::Json(v) => v,
        }
    }
}

impl From<TypedValue> for Value {
    fn from(value: TypedValue) -> Self {
        value.into_json()
    }
}

impl From<&str> for TypedValue {
    fn from(s: &str) -> Self {
        TypedValue::String(s.to_string())
    }
}

impl From<String> for TypedValue {
    fn from(s: String) -> Self {
        TypedValue::String(s)
    }
}

impl From<bool> for TypedValue {
    fn from(b: bool) -> Self {
        TypedValue::Bool(b)
    }
}

impl From<i32> for TypedValue {
    fn from(i: i32) -> Self {
        TypedValue::Int(i)
    }
}

impl From<i64> for TypedValue {
    fn from(i: i64) -> Self {
        TypedValue::Long(i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars_convert_to_matching_json() {
        assert_eq!(TypedValue::from("x").into_json(), json!("x"));
        assert_eq!(TypedValue::Bool(true).into_json(), json!(true));
        assert_eq!(TypedValue::Long(1 << 40).into_json(), json!(1_i64 << 40));
        assert_eq!(TypedValue::Float(1.5).into_json(), json!(1.5));
        assert_eq!(TypedValue::Null.into_json(), Value::Null);
    }

    #[test]
    fn non_finite_float_becomes_null() {
        assert_eq!(TypedValue::Float(f64::NAN).into_json(), Value::Null);
    }
}
