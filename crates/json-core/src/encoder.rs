//! JSON encoder — compact serializer over the value tree.
//!
//! Renders a [`Value`] as minimal JSON text: no whitespace beyond what the
//! grammar requires, members in insertion order, no trailing commas. The
//! inverse of the decoder for every representable value.
//!
//! Two output modes exist for strings, selected through [`EncodeOptions`]:
//! the default escapes every code point above U+007E as `\uXXXX` (surrogate
//! pairs for code points beyond the BMP), reproducing the legacy output this
//! codec is compatibility-tested against; the alternative emits non-ASCII
//! code points as raw UTF-8. Control characters are escaped in both modes.
//!
//! Encoding fails only on values JSON cannot represent: non-finite floats
//! (NaN, Infinity), or trees nested beyond the depth bound shared with the
//! decoder. Value trees are exclusively owned, so reference cycles cannot be
//! constructed in safe code and need no cycle detection.

use crate::error::{JsonError, Result};
use crate::types::{Value, MAX_DEPTH};

/// Options controlling the encoder's output form.
#[derive(Debug, Clone)]
pub struct EncodeOptions {
    /// Emit code points above U+007E as `\uXXXX` escapes. On by default for
    /// compatibility with the legacy output; when off, non-ASCII code points
    /// pass through as raw UTF-8.
    pub escape_non_ascii: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        EncodeOptions {
            escape_non_ascii: true,
        }
    }
}

/// Encode a value as compact JSON text using the default options.
pub fn encode(value: &Value) -> Result<String> {
    encode_with(value, &EncodeOptions::default())
}

/// Encode a value as compact JSON text.
pub fn encode_with(value: &Value, options: &EncodeOptions) -> Result<String> {
    let mut out = String::new();
    encode_value(value, options, 0, &mut out)?;
    Ok(out)
}

fn encode_value(
    value: &Value,
    options: &EncodeOptions,
    depth: usize,
    out: &mut String,
) -> Result<()> {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Int(n) => out.push_str(&n.to_string()),
        Value::Float(f) => encode_float(*f, out)?,
        Value::String(s) => encode_string(s, options, out),
        Value::Array(items) => {
            if depth >= MAX_DEPTH {
                return Err(JsonError::Encode(
                    "maximum nesting depth exceeded".to_string(),
                ));
            }
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                encode_value(item, options, depth + 1, out)?;
            }
            out.push(']');
        }
        Value::Object(members) => {
            if depth >= MAX_DEPTH {
                return Err(JsonError::Encode(
                    "maximum nesting depth exceeded".to_string(),
                ));
            }
            out.push('{');
            for (i, (key, member)) in members.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                encode_string(key, options, out);
                out.push(':');
                encode_value(member, options, depth + 1, out)?;
            }
            out.push('}');
        }
    }
    Ok(())
}

/// Emit the shortest decimal that re-parses to the same double. Integral
/// values keep a trailing `.0` so decoding the output yields a float again
/// rather than an integer.
fn encode_float(f: f64, out: &mut String) -> Result<()> {
    if !f.is_finite() {
        return Err(JsonError::Encode(format!(
            "cannot encode non-finite number {f}"
        )));
    }
    out.push_str(&format!("{f:?}"));
    Ok(())
}

fn encode_string(s: &str, options: &EncodeOptions, out: &mut String) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            ch if (ch as u32) < 0x20 => push_unicode_escape(ch as u32, out),
            ch if options.escape_non_ascii && (ch as u32) > 0x7E => {
                let code_point = ch as u32;
                if code_point > 0xFFFF {
                    // Beyond the BMP: emit a UTF-16 surrogate pair.
                    let v = code_point - 0x10000;
                    push_unicode_escape(0xD800 + (v >> 10), out);
                    push_unicode_escape(0xDC00 + (v & 0x3FF), out);
                } else {
                    push_unicode_escape(code_point, out);
                }
            }
            ch => out.push(ch),
        }
    }
    out.push('"');
}

/// One `\uXXXX` escape for a UTF-16 code unit, lowercase hex.
fn push_unicode_escape(unit: u32, out: &mut String) {
    out.push_str(&format!("\\u{unit:04x}"));
}
