//! Forward-only character cursor with significant-character lookahead.
//!
//! The cursor walks a byte slice and decodes UTF-8 one scalar at a time with
//! [`bstr::decode_utf8`]; input is never validated up front. A byte sequence
//! that is not valid UTF-8 reads as `None`, exactly like end of input, but
//! [`Cursor::is_exhausted`] still reports `false`, so any value that would
//! have continued past it (or the top-level end check) fails.
//!
//! Whitespace and comments are only ever skipped here. Every other component
//! reads raw characters and assumes it never sees either.

use crate::error::{MalformedInput, Result};

pub(crate) struct Cursor<'src> {
    src: &'src [u8],
    pos: usize,
    slash_always_opens_comment: bool,
}

impl<'src> Cursor<'src> {
    pub(crate) fn new(src: &'src [u8], slash_always_opens_comment: bool) -> Self {
        Self {
            src,
            pos: 0,
            slash_always_opens_comment,
        }
    }

    #[inline]
    fn decode_at(&self, pos: usize) -> (Option<char>, usize) {
        match self.src.get(pos..) {
            Some(rest) if !rest.is_empty() => bstr::decode_utf8(rest),
            _ => (None, 0),
        }
    }

    /// The next raw character, without consuming it.
    #[inline]
    pub(crate) fn peek(&self) -> Option<char> {
        self.decode_at(self.pos).0
    }

    /// The raw character after [`Cursor::peek`].
    fn peek_second(&self) -> Option<char> {
        match self.decode_at(self.pos) {
            (Some(_), len) => self.decode_at(self.pos + len).0,
            (None, _) => None,
        }
    }

    /// Consumes and returns the next raw character.
    ///
    /// Invalid UTF-8 is never consumed, so the cursor cannot step past it.
    #[inline]
    pub(crate) fn next_char(&mut self) -> Option<char> {
        let (ch, len) = self.decode_at(self.pos);
        if ch.is_some() {
            self.pos += len;
        }
        ch
    }

    /// Consumes the next raw character if it equals `expected`.
    #[inline]
    pub(crate) fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.next_char();
            true
        } else {
            false
        }
    }

    /// Consumes `expected` character by character; fails on the first
    /// mismatch, leaving the cursor wherever it stopped.
    pub(crate) fn expect_str(&mut self, expected: &str) -> Result<()> {
        for c in expected.chars() {
            if !self.eat(c) {
                return Err(MalformedInput);
            }
        }
        Ok(())
    }

    /// `true` once every byte has been consumed.
    pub(crate) fn is_exhausted(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Skips whitespace and comments up to the next significant character.
    ///
    /// Fails on a malformed or unterminated comment.
    pub(crate) fn skip_insignificant(&mut self) -> Result<()> {
        loop {
            match self.peek() {
                Some(' ' | '\t' | '\r' | '\n') => {
                    self.next_char();
                }
                Some('/') => {
                    match self.peek_second() {
                        Some('/' | '*') => {}
                        _ if self.slash_always_opens_comment => return Err(MalformedInput),
                        _ => return Ok(()),
                    }
                    self.next_char();
                    self.skip_comment()?;
                }
                _ => return Ok(()),
            }
        }
    }

    /// Skips one comment body; the leading `/` is already consumed.
    fn skip_comment(&mut self) -> Result<()> {
        match self.next_char() {
            Some('/') => {
                while let Some(c) = self.next_char() {
                    if c == '\n' || c == '\r' {
                        return Ok(());
                    }
                }
                // A line comment may run to end of input, but not into
                // invalid UTF-8.
                if self.is_exhausted() {
                    Ok(())
                } else {
                    Err(MalformedInput)
                }
            }
            Some('*') => {
                let mut star = false;
                while let Some(c) = self.next_char() {
                    if star && c == '/' {
                        return Ok(());
                    }
                    star = c == '*';
                }
                Err(MalformedInput)
            }
            _ => Err(MalformedInput),
        }
    }

    /// The next significant character, without consuming it.
    ///
    /// End of input is a failure: every caller needs a character here.
    pub(crate) fn peek_significant(&mut self) -> Result<char> {
        self.skip_insignificant()?;
        self.peek().ok_or(MalformedInput)
    }

    /// Consumes and returns the next significant character.
    pub(crate) fn next_significant(&mut self) -> Result<char> {
        self.skip_insignificant()?;
        self.next_char().ok_or(MalformedInput)
    }

    /// Succeeds only if nothing but whitespace and comments remain.
    pub(crate) fn finish(mut self) -> Result<()> {
        self.skip_insignificant()?;
        if self.is_exhausted() {
            Ok(())
        } else {
            Err(MalformedInput)
        }
    }
}
