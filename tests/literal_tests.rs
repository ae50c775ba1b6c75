use json_graft::{GraftError, GraftOptions, TypeTag, TypedValue, parse_typed, parse_typed_with};
use serde_json::json;

fn string(s: &str) -> TypedValue {
    TypedValue::String(s.to_string())
}

fn assert_invalid(raw: &str, expected: TypeTag) {
    match parse_typed(raw) {
        Err(GraftError::InvalidLiteral { raw: r, tag, .. }) => {
            assert_eq!(r, raw);
            assert_eq!(tag, expected);
        }
        other => panic!("expected InvalidLiteral for {:?}, got {:?}", raw, other),
    }
}

// ============================================================================
// Untyped and string literals
// ============================================================================

#[test]
fn test_no_suffix_is_string() {
    assert_eq!(parse_typed("42").unwrap(), string("42"));
    assert_eq!(parse_typed("").unwrap(), string(""));
    assert_eq!(parse_typed("hello world").unwrap(), string("hello world"));
}

#[test]
fn test_unknown_suffix_keeps_whole_input() {
    assert_eq!(parse_typed("12:30").unwrap(), string("12:30"));
    assert_eq!(parse_typed("5:INT").unwrap(), string("5:INT"));
    assert_eq!(parse_typed("http://host:8080").unwrap(), string("http://host:8080"));
}

#[test]
fn test_string_tags() {
    assert_eq!(parse_typed("42:string").unwrap(), string("42"));
    assert_eq!(parse_typed("42:str").unwrap(), string("42"));
    assert_eq!(parse_typed("a:b:str").unwrap(), string("a:b"));
    assert_eq!(parse_typed("true:str").unwrap(), string("true"));
}

// ============================================================================
// Booleans
// ============================================================================

#[test]
fn test_bool_is_case_insensitive() {
    assert_eq!(parse_typed("true:bool").unwrap(), TypedValue::Bool(true));
    assert_eq!(parse_typed("TRUE:boolean").unwrap(), TypedValue::Bool(true));
    assert_eq!(parse_typed("False:bool").unwrap(), TypedValue::Bool(false));
}

#[test]
fn test_unparseable_bool_is_false_by_default() {
    assert_eq!(parse_typed("yes:bool").unwrap(), TypedValue::Bool(false));
    assert_eq!(parse_typed(":bool").unwrap(), TypedValue::Bool(false));
}

#[test]
fn test_strict_booleans_reject_garbage() {
    let options = GraftOptions::new().with_strict_booleans(true);
    assert_eq!(
        parse_typed_with("true:bool", &options).unwrap(),
        TypedValue::Bool(true)
    );
    assert!(matches!(
        parse_typed_with("yes:bool", &options),
        Err(GraftError::InvalidLiteral { tag: TypeTag::Bool, .. })
    ));
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn test_int() {
    assert_eq!(parse_typed("42:int").unwrap(), TypedValue::Int(42));
    assert_eq!(parse_typed("-7:integer").unwrap(), TypedValue::Int(-7));
    assert_eq!(parse_typed("2147483647:int").unwrap(), TypedValue::Int(i32::MAX));
}

#[test]
fn test_int_errors() {
    assert_invalid("abc:int", TypeTag::Int);
    assert_invalid("1.5:int", TypeTag::Int);
    assert_invalid("2147483648:int", TypeTag::Int);
    assert_invalid(" 1:int", TypeTag::Int);
}

#[test]
fn test_long() {
    assert_eq!(
        parse_typed("9000000000:long").unwrap(),
        TypedValue::Long(9_000_000_000)
    );
    assert_invalid("9e3:long", TypeTag::Long);
}

#[test]
fn test_float_aliases() {
    assert_eq!(parse_typed("1.5:float").unwrap(), TypedValue::Float(1.5));
    assert_eq!(parse_typed("-0.25:double").unwrap(), TypedValue::Float(-0.25));
    assert_eq!(parse_typed("10:decimal").unwrap(), TypedValue::Float(10.0));
    assert_eq!(parse_typed("1e3:float").unwrap(), TypedValue::Float(1000.0));
}

#[test]
fn test_float_errors() {
    assert_invalid("one:float", TypeTag::Float);
    assert_invalid("NaN:float", TypeTag::Float);
    assert_invalid("inf:double", TypeTag::Float);
}

// ============================================================================
// Null and JSON
// ============================================================================

#[test]
fn test_null_ignores_prefix() {
    assert_eq!(parse_typed("anything:null").unwrap(), TypedValue::Null);
    assert_eq!(parse_typed(":null").unwrap(), TypedValue::Null);
}

#[test]
fn test_json_fragment() {
    assert_eq!(
        parse_typed(r#"{"a":[1,2]}:json"#).unwrap(),
        TypedValue::Json(json!({"a": [1, 2]}))
    );
    assert_eq!(parse_typed("[]:json").unwrap(), TypedValue::Json(json!([])));
    assert_eq!(parse_typed(r#""x":json"#).unwrap(), TypedValue::Json(json!("x")));
}

#[test]
fn test_json_fragment_with_colons_uses_last_one() {
    assert_eq!(
        parse_typed(r#"{"k":"v"}:json"#).unwrap(),
        TypedValue::Json(json!({"k": "v"}))
    );
}

#[test]
fn test_json_error_reports_fragment() {
    let err = parse_typed("{oops:json").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("{oops"), "message was: {}", message);
    assert!(matches!(err, GraftError::InvalidLiteral { tag: TypeTag::Json, .. }));
}

#[test]
fn test_typed_values_become_json() {
    assert_eq!(parse_typed("5:int").unwrap().into_json(), json!(5));
    assert_eq!(parse_typed("x").unwrap().into_json(), json!("x"));
    assert_eq!(parse_typed("true:bool").unwrap().into_json(), json!(true));
    assert_eq!(parse_typed("x:null").unwrap().into_json(), json!(null));
}
