//! Number literals: one forward scan over signs, digits, separators, a dot,
//! an exponent, radix prefixes, `NaN`/`Infinity` and the `n` suffix.
//!
//! The scan keeps a normalized copy of the literal in `text` (separators and
//! a leading `+` dropped, radix prefix removed) and a handful of flags that
//! decide which character may come next:
//!
//! - a sign only at the very start or directly after the exponent marker,
//! - at most one dot, only before the exponent and only in radix 10,
//! - at most one exponent marker, only after a digit,
//! - a radix switch (`b`/`x`) only directly after a lone `0` or `-0`.
//!
//! The first character that fits none of these ends the literal and is left
//! unconsumed.

use alloc::string::String;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{Num, ToPrimitive, Zero};

use super::cursor::Cursor;
use crate::{
    error::{MalformedInput, Result},
    value::Value,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Radix {
    Binary = 2,
    Decimal = 10,
    Hexadecimal = 16,
}

#[derive(Debug)]
struct NumberLiteral {
    text: String,
    radix: Radix,
    allow_dot: bool,
    allow_exponent: bool,
    allow_sign: bool,
    has_digits: bool,
}

impl NumberLiteral {
    fn new() -> Self {
        Self {
            text: String::new(),
            radix: Radix::Decimal,
            allow_dot: true,
            allow_exponent: true,
            allow_sign: true,
            has_digits: false,
        }
    }

    fn push_digit(&mut self, c: char) {
        self.has_digits = true;
        self.text.push(c);
    }

    /// Nothing but an optional `-` so far.
    fn is_bare_sign(&self) -> bool {
        self.text.is_empty() || self.text == "-"
    }

    fn is_lone_zero(&self) -> bool {
        self.text == "0" || self.text == "-0"
    }

    fn switch_radix(&mut self, radix: Radix) {
        self.text.pop();
        self.radix = radix;
        self.allow_dot = false;
        self.allow_exponent = false;
        self.has_digits = false;
    }

    /// The literal ended without a suffix.
    fn finish(self) -> Result<Value> {
        if !self.has_digits {
            return Err(MalformedInput);
        }
        let value = match self.radix {
            Radix::Decimal => self.text.parse::<f64>().map_err(|_| MalformedInput)?,
            Radix::Binary | Radix::Hexadecimal => parse_big_integer(&self.text, self.radix)?
                .to_f64()
                .ok_or(MalformedInput)?,
        };
        Ok(Value::Double(value))
    }
}

/// Parses a number literal starting at the cursor.
///
/// The cursor must sit on the first character of the literal (a digit, a
/// sign or a dot); whitespace and comments are not skipped inside it.
pub(crate) fn parse_number(cursor: &mut Cursor<'_>) -> Result<Value> {
    let mut lit = NumberLiteral::new();
    loop {
        let Some(c) = cursor.peek() else {
            return lit.finish();
        };
        let sign_allowed = lit.allow_sign;
        lit.allow_sign = false;
        match c {
            '0' | '1' => lit.push_digit(c),
            '2'..='9' if lit.radix != Radix::Binary => lit.push_digit(c),
            'a'..='f' | 'A'..='F' if lit.radix == Radix::Hexadecimal => lit.push_digit(c),
            '_' => {}
            '.' if lit.allow_dot => {
                lit.text.push('.');
                lit.allow_dot = false;
            }
            'e' | 'E' if lit.allow_exponent && lit.has_digits => {
                lit.text.push(c);
                lit.allow_exponent = false;
                lit.allow_dot = false;
                lit.allow_sign = true;
            }
            '+' if sign_allowed => {}
            '-' if sign_allowed => lit.text.push('-'),
            'N' if lit.is_bare_sign() => {
                cursor.expect_str("NaN")?;
                return Ok(Value::Double(f64::NAN));
            }
            'I' if lit.is_bare_sign() => {
                cursor.expect_str("Infinity")?;
                let value = if lit.text.is_empty() {
                    f64::INFINITY
                } else {
                    f64::NEG_INFINITY
                };
                return Ok(Value::Double(value));
            }
            'b' if lit.radix == Radix::Decimal && lit.is_lone_zero() => {
                lit.switch_radix(Radix::Binary);
            }
            'x' if lit.radix == Radix::Decimal && lit.is_lone_zero() => {
                lit.switch_radix(Radix::Hexadecimal);
            }
            'n' if lit.has_digits => {
                cursor.next_char();
                return parse_big_integer(&lit.text, lit.radix).map(Value::BigInteger);
            }
            _ => return lit.finish(),
        }
        cursor.next_char();
    }
}

/// Largest power of ten a decimal `n` literal may be scaled by.
const MAX_DECIMAL_SCALE: u32 = 4096;

/// Parses normalized literal text as an exact integer.
///
/// Binary and hex text is `-?digits`. Decimal text may also carry a dot and
/// an exponent as long as the value it spells is integral.
pub(crate) fn parse_big_integer(text: &str, radix: Radix) -> Result<BigInt> {
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => (Sign::Minus, rest),
        None => (Sign::Plus, text),
    };
    if digits.is_empty() {
        return Err(MalformedInput);
    }
    let magnitude = match radix {
        Radix::Binary => digits.chars().try_fold(BigUint::zero(), |acc, c| match c {
            '0' => Ok(acc << 1u32),
            '1' => Ok((acc << 1u32) | BigUint::from(1u8)),
            _ => Err(MalformedInput),
        })?,
        Radix::Decimal => parse_decimal_magnitude(digits)?,
        Radix::Hexadecimal => parse_digits(digits, radix)?,
    };
    Ok(BigInt::from_biguint(sign, magnitude))
}

/// `from_str_radix` tolerates a sign and `_`, so the digits are checked
/// first.
fn parse_digits(digits: &str, radix: Radix) -> Result<BigUint> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix as u32)) {
        return Err(MalformedInput);
    }
    BigUint::from_str_radix(digits, radix as u32).map_err(|_| MalformedInput)
}

/// Exact value of unsigned decimal text `int[.frac][e[-]exp]`; fails if the
/// value has a nonzero fractional part.
fn parse_decimal_magnitude(text: &str) -> Result<BigUint> {
    let (mantissa, exponent) = match text.find(['e', 'E']) {
        Some(at) => {
            let exponent = text[at + 1..].parse::<i64>().map_err(|_| MalformedInput)?;
            (&text[..at], exponent)
        }
        None => (text, 0),
    };
    let (int, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let mut digits = String::with_capacity(int.len() + frac.len());
    digits.push_str(int);
    digits.push_str(frac);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MalformedInput);
    }
    if digits.bytes().all(|b| b == b'0') {
        return Ok(BigUint::zero());
    }

    let frac_len = i64::try_from(frac.len()).map_err(|_| MalformedInput)?;
    let scale = exponent.checked_sub(frac_len).ok_or(MalformedInput)?;
    if scale < 0 {
        // the dropped digits must all be zero
        let dropped = usize::try_from(scale.unsigned_abs()).map_err(|_| MalformedInput)?;
        let kept = digits.len().checked_sub(dropped).ok_or(MalformedInput)?;
        if !digits[kept..].bytes().all(|b| b == b'0') {
            return Err(MalformedInput);
        }
        digits.truncate(kept);
        return parse_digits(&digits, Radix::Decimal);
    }
    let scale = u32::try_from(scale)
        .ok()
        .filter(|s| *s <= MAX_DECIMAL_SCALE)
        .ok_or(MalformedInput)?;
    Ok(parse_digits(&digits, Radix::Decimal)? * BigUint::from(10u8).pow(scale))
}
