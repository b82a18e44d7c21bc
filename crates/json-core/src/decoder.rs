//! JSON decoder — recursive-descent parser over the scanner.
//!
//! Recognizes exactly one complete JSON value and fails if anything other
//! than whitespace remains after it. All failures are reported as
//! [`JsonError::Decode`] with the byte offset where the problem was detected;
//! a failed decode never returns a partial value.
//!
//! Beyond the core grammar the decoder accepts a few forms that the strict
//! RFC grammar leaves out but real-world producers emit:
//!
//! - A leading `+` sign on numbers.
//! - The bare literals `NaN`, `Infinity`, `+Infinity` and `-Infinity`, which
//!   decode to the corresponding non-finite doubles. The encoder refuses to
//!   emit these, so accepting them never round-trips invalid JSON back out.
//! - Raw (unescaped) control characters inside strings.
//!
//! Integer literals without a fraction or exponent decode to [`Value::Int`]
//! at arbitrary precision; everything else numeric decodes to
//! [`Value::Float`].

use crate::error::{JsonError, Result};
use crate::scanner::Scanner;
use crate::types::{Value, MAX_DEPTH};
use num_bigint::BigInt;

/// Decode one complete JSON document into a [`Value`].
///
/// Empty (or all-whitespace) input, any grammar violation, and trailing
/// non-whitespace content after the value are all decode errors.
pub fn decode(input: &str) -> Result<Value> {
    let mut scanner = Scanner::new(input);
    scanner.skip_whitespace();
    if scanner.at_end() {
        return Err(JsonError::decode(0, "empty JSON document"));
    }
    let value = parse_value(&mut scanner, 0)?;
    scanner.skip_whitespace();
    if !scanner.at_end() {
        return Err(JsonError::decode(
            scanner.pos(),
            "trailing characters after JSON document",
        ));
    }
    Ok(value)
}

/// Dispatch on the first significant code point, as the grammar is LL(1)
/// everywhere except signed `Infinity`, which needs one extra look-ahead.
fn parse_value(scanner: &mut Scanner<'_>, depth: usize) -> Result<Value> {
    scanner.skip_whitespace();
    let start = scanner.pos();
    match scanner.peek() {
        None => Err(JsonError::decode(start, "unexpected end of input")),
        Some('{') => parse_object(scanner, depth),
        Some('[') => parse_array(scanner, depth),
        Some('"') => parse_string(scanner).map(Value::String),
        Some('t' | 'f') => parse_bool(scanner),
        Some('n') => parse_null(scanner),
        Some('N') => parse_nan(scanner),
        Some('I') => parse_infinity(scanner),
        Some('+' | '-') if scanner.peek_second() == Some('I') => parse_infinity(scanner),
        Some('+' | '-' | '0'..='9') => parse_number(scanner),
        Some(ch) => Err(JsonError::decode(
            start,
            format!("unexpected character '{ch}'"),
        )),
    }
}

fn parse_null(scanner: &mut Scanner<'_>) -> Result<Value> {
    let start = scanner.pos();
    if scanner.eat_literal("null") {
        Ok(Value::Null)
    } else {
        Err(JsonError::decode(start, "expected 'null'"))
    }
}

fn parse_bool(scanner: &mut Scanner<'_>) -> Result<Value> {
    let start = scanner.pos();
    if scanner.eat_literal("true") {
        Ok(Value::Bool(true))
    } else if scanner.eat_literal("false") {
        Ok(Value::Bool(false))
    } else {
        Err(JsonError::decode(start, "expected 'true' or 'false'"))
    }
}

fn parse_nan(scanner: &mut Scanner<'_>) -> Result<Value> {
    let start = scanner.pos();
    if scanner.eat_literal("NaN") {
        Ok(Value::Float(f64::NAN))
    } else {
        Err(JsonError::decode(start, "expected 'NaN'"))
    }
}

fn parse_infinity(scanner: &mut Scanner<'_>) -> Result<Value> {
    let start = scanner.pos();
    if scanner.eat_literal("Infinity") || scanner.eat_literal("+Infinity") {
        Ok(Value::Float(f64::INFINITY))
    } else if scanner.eat_literal("-Infinity") {
        Ok(Value::Float(f64::NEG_INFINITY))
    } else {
        Err(JsonError::decode(start, "expected 'Infinity'"))
    }
}

fn parse_object(scanner: &mut Scanner<'_>, depth: usize) -> Result<Value> {
    let start = scanner.pos();
    if depth >= MAX_DEPTH {
        return Err(JsonError::decode(start, "maximum nesting depth exceeded"));
    }
    scanner.bump(); // '{'
    let mut members: Vec<(String, Value)> = Vec::new();

    scanner.skip_whitespace();
    if scanner.peek() == Some('}') {
        scanner.bump();
        return Ok(Value::Object(members));
    }

    loop {
        scanner.skip_whitespace();
        match scanner.peek() {
            None => return Err(JsonError::decode(start, "unterminated object")),
            Some('"') => {}
            Some(_) => {
                return Err(JsonError::decode(
                    scanner.pos(),
                    "expected string as object key",
                ))
            }
        }
        let key = parse_string(scanner)?;

        scanner.skip_whitespace();
        if !scanner.eat_literal(":") {
            return Err(JsonError::decode(
                scanner.pos(),
                "missing ':' after object key",
            ));
        }

        scanner.skip_whitespace();
        if matches!(scanner.peek(), Some(',' | '}')) {
            return Err(JsonError::decode(
                scanner.pos(),
                "expected value after object key",
            ));
        }
        let value = parse_value(scanner, depth + 1)?;
        insert_member(&mut members, key, value);

        scanner.skip_whitespace();
        let sep_pos = scanner.pos();
        match scanner.bump() {
            Some('}') => return Ok(Value::Object(members)),
            Some(',') => {}
            Some(_) => {
                return Err(JsonError::decode(sep_pos, "expected ',' or '}' in object"))
            }
            None => return Err(JsonError::decode(start, "unterminated object")),
        }
    }
}

fn parse_array(scanner: &mut Scanner<'_>, depth: usize) -> Result<Value> {
    let start = scanner.pos();
    if depth >= MAX_DEPTH {
        return Err(JsonError::decode(start, "maximum nesting depth exceeded"));
    }
    scanner.bump(); // '['
    let mut items = Vec::new();

    scanner.skip_whitespace();
    if scanner.peek() == Some(']') {
        scanner.bump();
        return Ok(Value::Array(items));
    }

    loop {
        scanner.skip_whitespace();
        match scanner.peek() {
            None => return Err(JsonError::decode(start, "unterminated array")),
            Some(',' | ']') => {
                return Err(JsonError::decode(scanner.pos(), "expected array element"))
            }
            Some(_) => {}
        }
        items.push(parse_value(scanner, depth + 1)?);

        scanner.skip_whitespace();
        let sep_pos = scanner.pos();
        match scanner.bump() {
            Some(']') => return Ok(Value::Array(items)),
            Some(',') => {}
            Some(_) => {
                return Err(JsonError::decode(sep_pos, "expected ',' or ']' in array"))
            }
            None => return Err(JsonError::decode(start, "unterminated array")),
        }
    }
}

/// Object member insertion: the last occurrence of a duplicate key wins, the
/// position of the first occurrence is kept.
fn insert_member(members: &mut Vec<(String, Value)>, key: String, value: Value) {
    if let Some(slot) = members.iter_mut().find(|(existing, _)| *existing == key) {
        slot.1 = value;
    } else {
        members.push((key, value));
    }
}

/// Parse a string literal, consuming the surrounding quotes.
fn parse_string(scanner: &mut Scanner<'_>) -> Result<String> {
    let start = scanner.pos();
    scanner.bump(); // opening '"'
    let mut out = String::new();
    loop {
        let Some(ch) = scanner.bump() else {
            return Err(JsonError::decode(start, "unterminated string"));
        };
        match ch {
            '"' => return Ok(out),
            '\\' => out.push(parse_escape(scanner, start)?),
            other => out.push(other),
        }
    }
}

fn parse_escape(scanner: &mut Scanner<'_>, string_start: usize) -> Result<char> {
    let esc_pos = scanner.pos() - 1;
    let Some(ch) = scanner.bump() else {
        return Err(JsonError::decode(string_start, "unterminated string"));
    };
    match ch {
        '"' => Ok('"'),
        '\\' => Ok('\\'),
        '/' => Ok('/'),
        'b' => Ok('\u{0008}'),
        'f' => Ok('\u{000C}'),
        'n' => Ok('\n'),
        'r' => Ok('\r'),
        't' => Ok('\t'),
        'u' => parse_unicode_escape(scanner, esc_pos),
        other => Err(JsonError::decode(
            esc_pos,
            format!("invalid escape '\\{other}'"),
        )),
    }
}

/// Decode a `\uXXXX` escape. A code unit in the high-surrogate range must be
/// followed by a second escape carrying the low surrogate; the pair combines
/// into one code point beyond the BMP.
fn parse_unicode_escape(scanner: &mut Scanner<'_>, esc_pos: usize) -> Result<char> {
    let first = parse_hex4(scanner)?;
    if (0xD800..=0xDBFF).contains(&first) {
        let pair_pos = scanner.pos();
        if !scanner.eat_literal("\\u") {
            return Err(JsonError::decode(
                pair_pos,
                "unpaired UTF-16 surrogate in string escape",
            ));
        }
        let second = parse_hex4(scanner)?;
        if !(0xDC00..=0xDFFF).contains(&second) {
            return Err(JsonError::decode(
                pair_pos,
                "invalid UTF-16 surrogate pair in string escape",
            ));
        }
        let code_point = 0x10000 + ((first - 0xD800) << 10) + (second - 0xDC00);
        char::from_u32(code_point)
            .ok_or_else(|| JsonError::decode(esc_pos, "invalid Unicode code point"))
    } else if (0xDC00..=0xDFFF).contains(&first) {
        Err(JsonError::decode(
            esc_pos,
            "unpaired UTF-16 surrogate in string escape",
        ))
    } else {
        char::from_u32(first)
            .ok_or_else(|| JsonError::decode(esc_pos, "invalid Unicode code point"))
    }
}

fn parse_hex4(scanner: &mut Scanner<'_>) -> Result<u32> {
    let mut unit = 0u32;
    for _ in 0..4 {
        let pos = scanner.pos();
        let Some(ch) = scanner.bump() else {
            return Err(JsonError::decode(pos, "unexpected end of input in Unicode escape"));
        };
        let digit = ch.to_digit(16).ok_or_else(|| {
            JsonError::decode(pos, format!("invalid hex digit '{ch}' in Unicode escape"))
        })?;
        unit = unit * 16 + digit;
    }
    Ok(unit)
}

/// Validate and consume a numeric literal, then hand the slice to the
/// appropriate parser: `f64` when a fraction or exponent is present, `BigInt`
/// otherwise so magnitude is never capped.
fn parse_number(scanner: &mut Scanner<'_>) -> Result<Value> {
    let start = scanner.pos();
    let mut is_float = false;

    if matches!(scanner.peek(), Some('+' | '-')) {
        scanner.bump();
    }

    match scanner.peek() {
        Some('0') => {
            scanner.bump();
            // Leading zeros are not numbers: "05" is malformed.
            if matches!(scanner.peek(), Some('0'..='9')) {
                return Err(number_error(start));
            }
        }
        Some('1'..='9') => skip_digits(scanner),
        _ => return Err(number_error(start)),
    }

    if scanner.peek() == Some('.') {
        is_float = true;
        scanner.bump();
        if !matches!(scanner.peek(), Some('0'..='9')) {
            return Err(number_error(start));
        }
        skip_digits(scanner);
    }

    if matches!(scanner.peek(), Some('e' | 'E')) {
        is_float = true;
        scanner.bump();
        if matches!(scanner.peek(), Some('+' | '-')) {
            scanner.bump();
        }
        if !matches!(scanner.peek(), Some('0'..='9')) {
            return Err(number_error(start));
        }
        skip_digits(scanner);
    }

    let literal = scanner.slice_from(start);
    if is_float {
        literal
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|_| number_error(start))
    } else {
        literal
            .parse::<BigInt>()
            .map(Value::Int)
            .map_err(|_| number_error(start))
    }
}

fn skip_digits(scanner: &mut Scanner<'_>) {
    while matches!(scanner.peek(), Some('0'..='9')) {
        scanner.bump();
    }
}

fn number_error(position: usize) -> JsonError {
    JsonError::decode(position, "invalid number literal")
}
