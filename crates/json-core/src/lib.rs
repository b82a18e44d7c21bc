//! # json-core
//!
//! Fast JSON encoder/decoder with a native value model.
//!
//! [`decode`] parses one complete JSON document into a [`Value`] tree and
//! [`encode`] performs the inverse mapping, producing the compact form with
//! no inserted whitespace. Integer literals keep arbitrary precision, so
//! integers of any digit length survive a decode/encode round-trip exactly.
//! Object member order is insertion order, making encoding deterministic.
//!
//! Both halves are pure functions over fully buffered input with no shared
//! state, so concurrent calls from different threads are safe.
//!
//! ## Quick start
//!
//! ```rust
//! use json_core::{decode, encode, Value};
//!
//! let value = decode(r#"{ "name" : "Patrick", "age" : 44 }"#).unwrap();
//! assert_eq!(value.get("name").and_then(Value::as_str), Some("Patrick"));
//! assert_eq!(value.get("age").and_then(Value::as_i64), Some(44));
//!
//! // Compact output, insertion order preserved.
//! assert_eq!(encode(&value).unwrap(), r#"{"name":"Patrick","age":44}"#);
//! ```
//!
//! ## Modules
//!
//! - [`decoder`] — JSON text → [`Value`]
//! - [`encoder`] — [`Value`] → compact JSON text (`encode`, `encode_with`)
//! - [`error`] — error types for decode/encode failures
//! - [`types`] — the `Value` AST
//!
//! The scanner module is internal plumbing for the decoder.

pub mod decoder;
pub mod encoder;
pub mod error;
mod scanner;
pub mod types;

pub use decoder::decode;
pub use encoder::{encode, encode_with, EncodeOptions};
pub use error::{JsonError, Result};
pub use types::Value;
