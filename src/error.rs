use thiserror::Error;

use crate::literal::TypeTag;

/// Errors surfaced to callers of the mutation engine.
///
/// Resolution failures inside the primary evaluator never show up here; they
/// only route a write to the tree builder.
#[derive(Debug, Error)]
pub enum GraftError {
    /// Bad path grammar, e.g. `items[x]` or an unbalanced bracket.
    #[error("invalid path segment '{segment}' in '{path}'")]
    InvalidPathSegment { path: String, segment: String },

    /// A field step was applied to something that is not an object.
    ///
    /// `path` is where the blocking node sits (`$` for the root), `segment`
    /// the field that could not be applied to it.
    #[error("cannot traverse {found} at '{path}' with field '{segment}'")]
    CannotTraverseScalar {
        path: String,
        segment: String,
        found: &'static str,
    },

    /// Array index at or past the end. Arrays are never auto-extended.
    #[error("array index {index} out of bounds (length: {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    /// An index step was applied to something that is not an array.
    #[error("cannot index {found} with [{index}]")]
    CannotIndexNonArray { index: usize, found: &'static str },

    /// `[+]` was used on a location that does not hold an array.
    #[error("cannot append to '{segment}': expected array, found {found}")]
    NotAnArray { segment: String, found: &'static str },

    /// A typed literal whose prefix does not convert to its tag.
    #[error("invalid {tag} literal '{raw}': {reason}")]
    InvalidLiteral {
        raw: String,
        tag: TypeTag,
        reason: String,
    },

    #[error("unsupported update mode '{0}' (expected set, update or delete)")]
    UnsupportedMode(String),

    /// Only raised when lenient document recovery is switched off.
    #[error("malformed document: {0}")]
    MalformedDocument(#[from] serde_json::Error),
}

pub type Result<T, E = GraftError> = std::result::Result<T, E>;

/// Returns a human-readable type name for a JSON node
pub(crate) fn type_name(v: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
