//! JSON text output for documents and read results.
//!
//! Object members keep their insertion order, so a document read from text
//! and written back only changes where it was edited.
//!
//! A read result is always rendered as a JSON fragment: a string match comes
//! back quote-wrapped. That keeps "the value is the 3-character string `abc`"
//! apart from "the value is the (invalid) fragment `abc`".
//!
//! # Examples
//!
//! ```
//! use json_graft::output::{to_json, to_json_pretty};
//! use serde_json::json;
//!
//! assert_eq!(to_json(&json!("abc")), "\"abc\"");
//! assert_eq!(to_json(&json!({"b": 1, "a": [true]})), r#"{"b":1,"a":[true]}"#);
//! assert_eq!(to_json_pretty(&json!({"a": 1})), "{\n  \"a\": 1\n}");
//! ```

use serde_json::Value;

/// Compact JSON, minimal whitespace.
pub fn to_json(value: &Value) -> String {
    value.to_string()
}

/// Human-readable JSON with 2-space indentation.
pub fn to_json_pretty(value: &Value) -> String {
    format!("{:#}", value)
}

/// Render with the requested layout.
pub fn render(value: &Value, pretty: bool) -> String {
    if pretty {
        to_json_pretty(value)
    } else {
        to_json(value)
    }
}
