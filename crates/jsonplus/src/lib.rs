//! A single-pass parser for a superset of JSON literals.
//!
//! On top of JSON the grammar accepts:
//!
//! - single-quoted strings,
//! - `NaN` and `Infinity` (optionally signed),
//! - `0b` binary and `0x` hexadecimal integers,
//! - `_` digit separators and a leading `+`,
//! - an `n` suffix for exact, arbitrary-precision integers,
//! - `/pattern/flags` regular expression literals (flags `i` and `m`),
//! - `//` line comments and `/* */` block comments,
//! - a trailing comma in arrays and objects, and `[,]` / `{,}` as empty
//!   collections.
//!
//! Parsing either yields a complete [`Value`] tree or fails with
//! [`MalformedInput`]; no position or reason is reported.
//!
//! ```rust
//! use jsonplus::{parse, RegexFlag, Value};
//!
//! let v = parse(r#"
//!     // request arguments
//!     {
//!         'id': 0x2A,
//!         "big": 123456789012345678901234567890n,
//!         "match": /ab+/i,
//!         "tags": ['a', 'b',],
//!     }
//! "#).unwrap();
//!
//! assert_eq!(v.get("id"), Some(&Value::Double(42.0)));
//! assert!(v.get("big").is_some_and(Value::is_big_integer));
//! let re = v.get("match").and_then(Value::as_regex).unwrap();
//! assert_eq!(re.pattern, "ab+");
//! assert!(re.flags.contains(RegexFlag::CaseInsensitive));
//!
//! assert!(parse("1 2").is_err());
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod options;
mod parser;
mod value;

#[cfg(test)]
mod tests;

use core::str::FromStr;

pub use error::MalformedInput;
pub use num_bigint::BigInt;
pub use options::ParserOptions;
pub use parser::Parser;
pub use value::{Array, Object, Regex, RegexFlag, RegexFlags, Value};

/// Parses one value from `text` with default options.
///
/// # Errors
///
/// Returns [`MalformedInput`] if `text` does not match the grammar or if
/// anything other than whitespace and comments follows the value.
///
/// # Examples
///
/// ```rust
/// use jsonplus::{parse, Value};
///
/// assert_eq!(parse("  1.5e3 // x"), Ok(Value::Double(1500.0)));
/// assert_eq!(parse("[1,2,]"), parse("[1,2]"));
/// assert!(parse("1 /* ").is_err());
/// ```
pub fn parse(text: &str) -> Result<Value, MalformedInput> {
    Parser::default().parse(text)
}

/// Parses one value from `text` with the given options.
///
/// # Errors
///
/// See [`parse`]; a [`ParserOptions::max_depth`] violation fails the same
/// way.
pub fn parse_with_options(text: &str, options: ParserOptions) -> Result<Value, MalformedInput> {
    Parser::new(options).parse(text)
}

/// Parses one value from UTF-8 bytes with default options.
///
/// # Errors
///
/// See [`parse`]; invalid UTF-8 is malformed input as well.
pub fn parse_slice(bytes: &[u8]) -> Result<Value, MalformedInput> {
    Parser::default().parse_slice(bytes)
}

/// Parses one value from UTF-8 bytes with the given options.
///
/// # Errors
///
/// See [`parse_slice`].
pub fn parse_slice_with_options(
    bytes: &[u8],
    options: ParserOptions,
) -> Result<Value, MalformedInput> {
    Parser::new(options).parse_slice(bytes)
}

impl FromStr for Value {
    type Err = MalformedInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
