//! Single-pass, non-backtracking literal parser.
//!
//! Overview
//! - There is no tokenizer. [`Cursor`] hands out one character of lookahead
//!   and is the only place whitespace and comments are skipped.
//! - The dispatcher peeks at the next significant character and picks exactly
//!   one sub-parser: object, array, quoted string, keyword, number or regex.
//! - Arrays and objects call back into the dispatcher for every child, so the
//!   tree is assembled bottom-up in one pass.
//!
//! Failure
//! - Every step returns `Result<_, MalformedInput>` and failure short-circuits
//!   with `?`. Nothing is rolled back: the cursor may be left anywhere, which
//!   is fine because a failure always propagates to the outermost call.

mod cursor;
mod number;
mod regex;
mod unescape;


use alloc::{string::String, vec::Vec};

use cursor::Cursor;
use unescape::{Escapes, read_delimited};

use crate::{
    error::{MalformedInput, Result},
    options::ParserOptions,
    value::{Array, Object, Value},
};

/// A reusable parser configuration.
///
/// `Parser` holds only [`ParserOptions`]; every call builds its own cursor,
/// so one `Parser` can serve any number of independent (and concurrent)
/// parses.
///
/// # Examples
///
/// ```rust
/// use jsonplus::{Parser, ParserOptions, Value};
///
/// let parser = Parser::new(ParserOptions::default());
/// assert_eq!(parser.parse("true"), Ok(Value::Boolean(true)));
/// assert_eq!(parser.parse_slice(b"[]"), Ok(Value::Array(vec![])));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Parser {
    options: ParserOptions,
}

impl Parser {
    /// Creates a parser with the given options.
    #[must_use]
    pub fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    /// The options this parser was built with.
    #[must_use]
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parses exactly one value from `text`.
    ///
    /// Whitespace and comments may surround the value; anything else left
    /// over after it makes the input malformed.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedInput`] if `text` does not match the grammar or has
    /// trailing characters.
    pub fn parse(&self, text: &str) -> Result<Value> {
        self.parse_slice(text.as_bytes())
    }

    /// Parses exactly one value from UTF-8 encoded bytes.
    ///
    /// The bytes are decoded as they are read; invalid UTF-8 anywhere in the
    /// input (including inside comments) makes it malformed.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedInput`] under the same conditions as
    /// [`Parser::parse`], or if the bytes are not valid UTF-8.
    pub fn parse_slice(&self, bytes: &[u8]) -> Result<Value> {
        let mut reader = Reader {
            cursor: Cursor::new(bytes, self.options.slash_always_opens_comment),
            max_depth: self.options.max_depth,
            depth: 0,
        };
        let value = reader.parse_value()?;
        reader.cursor.finish()?;
        Ok(value)
    }
}

/// Per-call parse state.
struct Reader<'src> {
    cursor: Cursor<'src>,
    max_depth: Option<usize>,
    depth: usize,
}

impl Reader<'_> {
    /// The dispatcher: one significant character of lookahead picks the
    /// sub-parser.
    fn parse_value(&mut self) -> Result<Value> {
        match self.cursor.peek_significant()? {
            '{' => self.nested(Self::parse_object),
            '[' => self.nested(Self::parse_array),
            quote @ ('"' | '\'') => {
                read_delimited(&mut self.cursor, quote, Escapes::Decode).map(Value::String)
            }
            'n' => self.keyword("null", Value::Null),
            't' => self.keyword("true", Value::Boolean(true)),
            'f' => self.keyword("false", Value::Boolean(false)),
            'N' => self.keyword("NaN", Value::Double(f64::NAN)),
            'I' => self.keyword("Infinity", Value::Double(f64::INFINITY)),
            '0'..='9' | '+' | '-' | '.' => number::parse_number(&mut self.cursor),
            '/' => regex::parse_regex(&mut self.cursor).map(Value::Regex),
            _ => Err(MalformedInput),
        }
    }

    fn keyword(&mut self, text: &str, value: Value) -> Result<Value> {
        self.cursor.expect_str(text)?;
        Ok(value)
    }

    /// Runs `parse` one nesting level deeper, enforcing `max_depth`.
    fn nested(&mut self, parse: fn(&mut Self) -> Result<Value>) -> Result<Value> {
        self.depth += 1;
        if self.max_depth.is_some_and(|max| self.depth > max) {
            return Err(MalformedInput);
        }
        let value = parse(self)?;
        self.depth -= 1;
        Ok(value)
    }

    fn parse_array(&mut self) -> Result<Value> {
        let items: Array = self.composite('[', ']', Self::parse_value)?;
        Ok(Value::Array(items))
    }

    fn parse_object(&mut self) -> Result<Value> {
        let members: Object = self.composite('{', '}', |reader| {
            let key = reader.parse_key()?;
            if reader.cursor.next_significant()? != ':' {
                return Err(MalformedInput);
            }
            Ok((key, reader.parse_value()?))
        })?;
        Ok(Value::Object(members))
    }

    /// Shared shape of arrays and objects:
    ///
    /// ```text
    /// open close | open "," close | open item ("," item)* [","] close
    /// ```
    fn composite<T>(
        &mut self,
        open: char,
        close: char,
        mut item: impl FnMut(&mut Self) -> Result<T>,
    ) -> Result<Vec<T>> {
        if self.cursor.next_significant()? != open {
            return Err(MalformedInput);
        }
        let mut items = Vec::new();
        match self.cursor.peek_significant()? {
            c if c == close => {
                self.cursor.next_char();
                return Ok(items);
            }
            ',' => {
                self.cursor.next_char();
                return if self.cursor.next_significant()? == close {
                    Ok(items)
                } else {
                    Err(MalformedInput)
                };
            }
            _ => {}
        }
        loop {
            items.push(item(self)?);
            match self.cursor.next_significant()? {
                c if c == close => return Ok(items),
                ',' => {}
                _ => return Err(MalformedInput),
            }
            if self.cursor.peek_significant()? == close {
                self.cursor.next_char();
                return Ok(items);
            }
        }
    }

    /// Object keys are quoted strings only.
    fn parse_key(&mut self) -> Result<String> {
        match self.cursor.peek_significant()? {
            quote @ ('"' | '\'') => read_delimited(&mut self.cursor, quote, Escapes::Decode),
            _ => Err(MalformedInput),
        }
    }
}
