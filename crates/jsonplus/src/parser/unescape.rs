//! Decoding of delimited literals: quoted strings and regex patterns.
//!
//! [`read_delimited`] consumes the opening delimiter, the body and the closing
//! delimiter. In [`Escapes::Decode`] mode backslash escapes are resolved as in
//! JSON, with `\'` added. In [`Escapes::Raw`] mode the body is kept verbatim
//! except that an escaped delimiter loses its backslash.

use alloc::string::String;

use super::cursor::Cursor;
use crate::error::{MalformedInput, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Escapes {
    Decode,
    Raw,
}

pub(crate) fn read_delimited(
    cursor: &mut Cursor<'_>,
    delimiter: char,
    escapes: Escapes,
) -> Result<String> {
    if !cursor.eat(delimiter) {
        return Err(MalformedInput);
    }
    let mut out = String::new();
    loop {
        match cursor.next_char().ok_or(MalformedInput)? {
            c if c == delimiter => return Ok(out),
            '\\' => {
                let escaped = cursor.next_char().ok_or(MalformedInput)?;
                match escapes {
                    Escapes::Decode => out.push(decode_escape(cursor, escaped)?),
                    Escapes::Raw if escaped == delimiter => out.push(escaped),
                    Escapes::Raw => {
                        out.push('\\');
                        out.push(escaped);
                    }
                }
            }
            c => out.push(c),
        }
    }
}

/// Resolves the escape whose backslash and first character were consumed.
fn decode_escape(cursor: &mut Cursor<'_>, escaped: char) -> Result<char> {
    Ok(match escaped {
        '"' | '\'' | '\\' | '/' => escaped,
        'b' => '\u{0008}',
        'f' => '\u{000C}',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'u' => return decode_unicode_escape(cursor),
        _ => return Err(MalformedInput),
    })
}

/// Decodes the hex digits of a `\u` escape, pairing UTF-16 surrogates.
fn decode_unicode_escape(cursor: &mut Cursor<'_>) -> Result<char> {
    let unit = read_code_unit(cursor)?;
    match unit {
        0xD800..=0xDBFF => {
            cursor.expect_str("\\u")?;
            let low = read_code_unit(cursor)?;
            if !(0xDC00..=0xDFFF).contains(&low) {
                return Err(MalformedInput);
            }
            let code = 0x1_0000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
            char::from_u32(code).ok_or(MalformedInput)
        }
        _ => char::from_u32(unit).ok_or(MalformedInput),
    }
}

fn read_code_unit(cursor: &mut Cursor<'_>) -> Result<u32> {
    let mut buf = CodeUnitBuffer::new();
    loop {
        let c = cursor.next_char().ok_or(MalformedInput)?;
        if let Some(unit) = buf.feed(c)? {
            return Ok(unit);
        }
    }
}

/// Accumulates exactly four ASCII hexadecimal digits into a UTF-16 code
/// unit.
#[derive(Debug)]
struct CodeUnitBuffer {
    acc: u32,
    len: u8,
}

impl CodeUnitBuffer {
    fn new() -> Self {
        Self { acc: 0, len: 0 }
    }

    #[inline]
    fn hex_val(c: char) -> Option<u32> {
        c.to_digit(16)
    }

    /// Returns `Ok(Some(unit))` on the fourth digit and `Ok(None)` before.
    fn feed(&mut self, c: char) -> Result<Option<u32>> {
        let d = Self::hex_val(c).ok_or(MalformedInput)?;
        self.acc = (self.acc << 4) | d;
        self.len += 1;
        if self.len < 4 {
            return Ok(None);
        }
        let unit = self.acc;
        self.acc = 0;
        self.len = 0;
        Ok(Some(unit))
    }
}
