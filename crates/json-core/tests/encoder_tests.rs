use json_core::{encode, encode_with, EncodeOptions, JsonError, Value};
use num_bigint::BigInt;

fn object(members: Vec<(&str, Value)>) -> Value {
    Value::Object(
        members
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect(),
    )
}

// ============================================================================
// Symbols and Numbers
// ============================================================================

#[test]
fn encode_true() {
    assert_eq!(encode(&Value::Bool(true)).unwrap(), "true");
}

#[test]
fn encode_false() {
    assert_eq!(encode(&Value::Bool(false)).unwrap(), "false");
}

#[test]
fn encode_null() {
    assert_eq!(encode(&Value::Null).unwrap(), "null");
}

#[test]
fn encode_integer() {
    assert_eq!(encode(&Value::from(44i64)).unwrap(), "44");
    assert_eq!(encode(&Value::from(-44i64)).unwrap(), "-44");
    assert_eq!(encode(&Value::from(0i64)).unwrap(), "0");
}

#[test]
fn encode_long_integer_exact() {
    let n = "12345678901234567890".parse::<BigInt>().unwrap();
    assert_eq!(encode(&Value::Int(n)).unwrap(), "12345678901234567890");
}

#[test]
fn encode_huge_negative_integer_exact() {
    let n = "-98765432109876543210987654321".parse::<BigInt>().unwrap();
    assert_eq!(
        encode(&Value::Int(n)).unwrap(),
        "-98765432109876543210987654321"
    );
}

#[test]
fn encode_float() {
    assert_eq!(encode(&Value::Float(3.44556677)).unwrap(), "3.44556677");
}

#[test]
fn encode_integral_float_keeps_fraction() {
    // "3.0" rather than "3": re-decoding must yield a float, not an integer.
    assert_eq!(encode(&Value::Float(3.0)).unwrap(), "3.0");
}

#[test]
fn encode_negative_zero() {
    assert_eq!(encode(&Value::Float(-0.0)).unwrap(), "-0.0");
}

#[test]
fn reject_nan() {
    match encode(&Value::Float(f64::NAN)) {
        Err(JsonError::Encode(_)) => {}
        other => panic!("expected encode error, got {other:?}"),
    }
}

#[test]
fn reject_infinity() {
    assert!(matches!(
        encode(&Value::Float(f64::INFINITY)),
        Err(JsonError::Encode(_))
    ));
    assert!(matches!(
        encode(&Value::Float(f64::NEG_INFINITY)),
        Err(JsonError::Encode(_))
    ));
}

// ============================================================================
// Strings
// ============================================================================

#[test]
fn encode_string_value() {
    assert_eq!(
        encode(&object(vec![("name", Value::from("Patrick"))])).unwrap(),
        r#"{"name":"Patrick"}"#
    );
}

#[test]
fn encode_escaped_quotation_mark() {
    assert_eq!(encode(&Value::from("\"")).unwrap(), "\"\\\"\"");
}

#[test]
fn encode_non_escaped_solidus() {
    assert_eq!(encode(&Value::from("/")).unwrap(), "\"/\"");
}

#[test]
fn encode_escaped_reverse_solidus() {
    assert_eq!(encode(&Value::from("\\")).unwrap(), "\"\\\\\"");
}

#[test]
fn encode_escaped_backspace() {
    assert_eq!(encode(&Value::from("\u{0008}")).unwrap(), "\"\\b\"");
}

#[test]
fn encode_escaped_formfeed() {
    assert_eq!(encode(&Value::from("\u{000C}")).unwrap(), "\"\\f\"");
}

#[test]
fn encode_escaped_newline() {
    assert_eq!(encode(&Value::from("\n")).unwrap(), "\"\\n\"");
}

#[test]
fn encode_escaped_carriage_return() {
    assert_eq!(encode(&Value::from("\r")).unwrap(), "\"\\r\"");
}

#[test]
fn encode_escaped_horizontal_tab() {
    assert_eq!(encode(&Value::from("\t")).unwrap(), "\"\\t\"");
}

#[test]
fn encode_escaped_hex_character() {
    assert_eq!(encode(&Value::from("\u{1001}")).unwrap(), "\"\\u1001\"");
}

#[test]
fn encode_control_character_as_hex_escape() {
    assert_eq!(encode(&Value::from("\u{0001}")).unwrap(), "\"\\u0001\"");
}

#[test]
fn encode_delete_character_as_hex_escape() {
    assert_eq!(encode(&Value::from("\u{007F}")).unwrap(), "\"\\u007f\"");
}

#[test]
fn encode_astral_character_as_surrogate_pair() {
    assert_eq!(
        encode(&Value::from("\u{1D11E}")).unwrap(),
        "\"\\ud834\\udd1e\""
    );
}

#[test]
fn encode_raw_unicode_mode() {
    let options = EncodeOptions {
        escape_non_ascii: false,
    };
    assert_eq!(
        encode_with(&Value::from("\u{1001}"), &options).unwrap(),
        "\"\u{1001}\""
    );
    // Control characters stay escaped regardless of mode.
    assert_eq!(
        encode_with(&Value::from("\n"), &options).unwrap(),
        "\"\\n\""
    );
}

// ============================================================================
// Arrays and Objects
// ============================================================================

#[test]
fn encode_empty_array() {
    assert_eq!(encode(&Value::Array(vec![])).unwrap(), "[]");
}

#[test]
fn encode_small_array() {
    let arr = Value::Array(vec![
        Value::from(1i64),
        Value::from(2i64),
        Value::from(3i64),
        Value::from(4i64),
    ]);
    assert_eq!(encode(&arr).unwrap(), "[1,2,3,4]");
}

#[test]
fn encode_array_of_symbols() {
    let arr = Value::Array(vec![Value::Bool(true), Value::Bool(false), Value::Null]);
    assert_eq!(encode(&arr).unwrap(), "[true,false,null]");
}

#[test]
fn encode_empty_object() {
    assert_eq!(encode(&Value::Object(vec![])).unwrap(), "{}");
}

#[test]
fn encode_small_object() {
    let obj = object(vec![
        ("name", Value::from("Patrick")),
        ("age", Value::from(44i64)),
    ]);
    // Deterministic: members come out in insertion order, each exactly once.
    assert_eq!(encode(&obj).unwrap(), r#"{"name":"Patrick","age":44}"#);
}

#[test]
fn encode_nested_containers_compact() {
    let obj = object(vec![(
        "a",
        Value::Array(vec![
            Value::from(1i64),
            object(vec![("b", Value::Null)]),
        ]),
    )]);
    assert_eq!(encode(&obj).unwrap(), r#"{"a":[1,{"b":null}]}"#);
}

#[test]
fn encode_complex_array() {
    let arr = Value::Array(vec![
        object(vec![
            ("name", Value::from("Patrick")),
            ("age", Value::from(44i64)),
            ("Employed?", Value::Bool(true)),
            ("Female?", Value::Bool(false)),
            ("grandchildren", Value::Null),
        ]),
        Value::from("used"),
        Value::from("abused"),
        Value::from("confused"),
        Value::from(1i64),
        Value::from(2i64),
        Value::Array(vec![Value::from(3i64), Value::from(4i64), Value::from(5i64)]),
    ]);
    assert_eq!(
        encode(&arr).unwrap(),
        "[{\"name\":\"Patrick\",\"age\":44,\"Employed?\":true,\"Female?\":false,\"grandchildren\":null},\"used\",\"abused\",\"confused\",1,2,[3,4,5]]"
    );
}

#[test]
fn encode_escapes_object_keys() {
    let obj = object(vec![("a\"b", Value::from(1i64))]);
    assert_eq!(encode(&obj).unwrap(), "{\"a\\\"b\":1}");
}

#[test]
fn reject_excessive_nesting_depth() {
    let mut value = Value::from(1i64);
    for _ in 0..200 {
        value = Value::Array(vec![value]);
    }
    assert!(matches!(encode(&value), Err(JsonError::Encode(_))));
}
