//! Literal value types.
//!
//! This module defines the [`Value`] enum, the tree produced by a successful
//! parse, together with the [`Regex`] payload and its flag set.
use alloc::{string::String, vec::Vec};
use core::fmt::{self, Write as _};

use num_bigint::BigInt;

use crate::error::MalformedInput;

/// Elements of an array literal, in source order.
pub type Array = Vec<Value>;

/// Members of an object literal, in source order.
///
/// Keys are not deduplicated: `{"a":1,"a":2}` yields two entries.
pub type Object = Vec<(String, Value)>;

/// A parsed literal.
///
/// The variant set is closed:
///
/// - Null
/// - Boolean
/// - Double (including NaN and the infinities)
/// - `BigInteger` (from an `n` suffix)
/// - String
/// - Regex
/// - Array
/// - Object
///
/// # Examples
///
/// ```
/// use jsonplus::{parse, Value};
///
/// let v = parse("{'k': [1, 0x10, 7n]}").unwrap();
/// let items = v.get("k").and_then(Value::as_array).unwrap();
/// assert_eq!(items[1], Value::Double(16.0));
/// assert!(items[2].is_big_integer());
/// ```
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    /// `null`
    #[default]
    Null,
    /// `true` or `false`
    Boolean(bool),
    /// Any number without an `n` suffix, narrowed to 64 bits.
    Double(f64),
    /// An `n`-suffixed integer, exact at any magnitude.
    BigInteger(BigInt),
    /// A single- or double-quoted string, unescaped.
    String(String),
    /// A `/pattern/flags` literal.
    Regex(Regex),
    /// An array literal.
    Array(Array),
    /// An object literal; duplicate keys are kept.
    Object(Object),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<BigInt> for Value {
    fn from(v: BigInt) -> Self {
        Self::BigInteger(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<Regex> for Value {
    fn from(v: Regex) -> Self {
        Self::Regex(v)
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Self::Array(v)
    }
}

impl From<Object> for Value {
    fn from(v: Object) -> Self {
        Self::Object(v)
    }
}

impl Value {
    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Boolean`].
    ///
    /// [`Boolean`]: Value::Boolean
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` if the value is [`Double`].
    ///
    /// [`Double`]: Value::Double
    #[must_use]
    pub fn is_double(&self) -> bool {
        matches!(self, Self::Double(..))
    }

    /// Returns `true` if the value is [`BigInteger`].
    ///
    /// [`BigInteger`]: Value::BigInteger
    #[must_use]
    pub fn is_big_integer(&self) -> bool {
        matches!(self, Self::BigInteger(..))
    }

    /// Returns `true` if the value is [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Regex`].
    ///
    /// [`Regex`]: Value::Regex
    #[must_use]
    pub fn is_regex(&self) -> bool {
        matches!(self, Self::Regex(..))
    }

    /// Returns `true` if the value is [`Array`].
    ///
    /// [`Array`]: Value::Array
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Object`].
    ///
    /// [`Object`]: Value::Object
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// Returns the payload of a [`Value::Boolean`].
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the payload of a [`Value::Double`].
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Double(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the payload of a [`Value::BigInteger`].
    #[must_use]
    pub fn as_big_integer(&self) -> Option<&BigInt> {
        match self {
            Self::BigInteger(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the payload of a [`Value::String`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the payload of a [`Value::Regex`].
    #[must_use]
    pub fn as_regex(&self) -> Option<&Regex> {
        match self {
            Self::Regex(r) => Some(r),
            _ => None,
        }
    }

    /// Returns the elements of a [`Value::Array`].
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Returns the members of a [`Value::Object`].
    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Looks up the first member named `key` in an object.
    ///
    /// Returns `None` for non-objects and for missing keys. Later duplicates
    /// are reachable through [`Value::get_all`].
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonplus::{parse, Value};
    ///
    /// let v = parse(r#"{"a":1,"a":2}"#).unwrap();
    /// assert_eq!(v.get("a"), Some(&Value::Double(1.0)));
    /// assert_eq!(v.get("b"), None);
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.get_all(key).next()
    }

    /// Iterates every member named `key`, in source order.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonplus::{parse, Value};
    ///
    /// let v = parse(r#"{"a":1,"b":0,"a":2}"#).unwrap();
    /// let all: Vec<_> = v.get_all("a").collect();
    /// assert_eq!(all, [&Value::Double(1.0), &Value::Double(2.0)]);
    /// ```
    pub fn get_all<'a>(&'a self, key: &str) -> impl Iterator<Item = &'a Value> {
        self.as_object()
            .into_iter()
            .flatten()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Structural equality that treats every NaN as equal to every other NaN.
    ///
    /// `PartialEq` follows IEEE 754, so a tree containing `NaN` is never equal
    /// to itself; this is the comparison to use when checking that parsing
    /// reproduces a tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonplus::{parse, Value};
    ///
    /// let v = parse("[NaN]").unwrap();
    /// assert_ne!(v, v.clone());
    /// assert!(v.same_as(&v.clone()));
    /// ```
    #[must_use]
    pub fn same_as(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::Double(a), Self::Double(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Self::Array(a), Self::Array(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.same_as(y))
            }
            (Self::Object(a), Self::Object(b)) => {
                a.len() == b.len()
                    && a
                        .iter()
                        .zip(b)
                        .all(|((ka, va), (kb, vb))| ka == kb && va.same_as(vb))
            }
            _ => self == other,
        }
    }
}

/// A regular expression literal: `/pattern/flags`.
///
/// The pattern is kept as written, except that an escaped delimiter (`\/`)
/// is stored as a bare `/`. It is not compiled or validated.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Regex {
    /// Source text between the delimiters.
    pub pattern: String,
    /// Flags that followed the closing delimiter.
    pub flags: RegexFlags,
}

impl Regex {
    /// Creates a regex literal from its parts.
    pub fn new(pattern: impl Into<String>, flags: RegexFlags) -> Self {
        Self {
            pattern: pattern.into(),
            flags,
        }
    }
}

/// A single regex flag character.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegexFlag {
    /// `i`
    CaseInsensitive,
    /// `m`
    Multiline,
}

impl RegexFlag {
    const ALL: [RegexFlag; 2] = [RegexFlag::CaseInsensitive, RegexFlag::Multiline];

    /// Maps a flag character to its flag, or `None` if it is not one.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'i' => Some(Self::CaseInsensitive),
            'm' => Some(Self::Multiline),
            _ => None,
        }
    }

    /// The character that spells this flag in a literal.
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::CaseInsensitive => 'i',
            Self::Multiline => 'm',
        }
    }

    fn bit(self) -> u8 {
        match self {
            Self::CaseInsensitive => 1,
            Self::Multiline => 2,
        }
    }
}

/// A set of [`RegexFlag`]s.
///
/// ```
/// use jsonplus::{RegexFlag, RegexFlags};
///
/// let mut flags = RegexFlags::empty();
/// assert!(flags.insert(RegexFlag::Multiline));
/// assert!(!flags.insert(RegexFlag::Multiline));
/// assert_eq!(flags.to_string(), "m");
/// ```
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(any(test, feature = "serde"), serde(try_from = "u8", into = "u8"))]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RegexFlags(u8);

impl RegexFlags {
    /// The empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Adds `flag`, returning `false` if it was already present.
    pub fn insert(&mut self, flag: RegexFlag) -> bool {
        let fresh = !self.contains(flag);
        self.0 |= flag.bit();
        fresh
    }

    /// Returns `true` if `flag` is in the set.
    #[must_use]
    pub fn contains(self, flag: RegexFlag) -> bool {
        self.0 & flag.bit() != 0
    }

    /// Returns `true` if no flag is set.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates the flags in the set in canonical order (`i`, then `m`).
    pub fn iter(self) -> impl Iterator<Item = RegexFlag> {
        RegexFlag::ALL.into_iter().filter(move |f| self.contains(*f))
    }
}

/// Bits outside the known flags are rejected.
impl TryFrom<u8> for RegexFlags {
    type Error = MalformedInput;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        let known = RegexFlag::ALL.iter().fold(0, |acc, f| acc | f.bit());
        if bits & !known == 0 {
            Ok(Self(bits))
        } else {
            Err(MalformedInput)
        }
    }
}

impl From<RegexFlags> for u8 {
    fn from(flags: RegexFlags) -> Self {
        flags.0
    }
}

impl FromIterator<RegexFlag> for RegexFlags {
    fn from_iter<T: IntoIterator<Item = RegexFlag>>(iter: T) -> Self {
        let mut flags = Self::empty();
        for flag in iter {
            flags.insert(flag);
        }
        flags
    }
}

impl fmt::Display for RegexFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iter().try_for_each(|flag| f.write_char(flag.as_char()))
    }
}

impl fmt::Debug for RegexFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
