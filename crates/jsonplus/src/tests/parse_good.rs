use alloc::{string::String, vec, vec::Vec};
use core::str::FromStr;

use num_bigint::BigInt;
use rstest::rstest;

use crate::{Regex, RegexFlag, RegexFlags, Value, parse};

fn s(text: &str) -> Value {
    Value::String(text.into())
}

fn obj(members: &[(&str, Value)]) -> Value {
    Value::Object(
        members
            .iter()
            .map(|(k, v)| (String::from(*k), v.clone()))
            .collect(),
    )
}

fn flags(list: &[RegexFlag]) -> RegexFlags {
    list.iter().copied().collect()
}

#[rstest]
#[case("null", Value::Null)]
#[case("true", Value::Boolean(true))]
#[case("false", Value::Boolean(false))]
#[case("  1.5e3 // x", Value::Double(1500.0))]
#[case("0x1F", Value::Double(31.0))]
#[case("0b1010", Value::Double(10.0))]
#[case("0x2A", Value::Double(42.0))]
#[case("[0x10, 0x7]", Value::Array(vec![Value::Double(16.0), Value::Double(7.0)]))]
#[case("1e3n", Value::BigInteger(BigInt::from(1000)))]
#[case("0xA5n", Value::BigInteger(BigInt::from(165)))]
#[case("-Infinity", Value::Double(f64::NEG_INFINITY))]
#[case("Infinity", Value::Double(f64::INFINITY))]
#[case("+7", Value::Double(7.0))]
#[case(".5", Value::Double(0.5))]
#[case("'single'", s("single"))]
#[case(r#""dou\"ble""#, s("dou\"ble"))]
#[case("/ab+/i", Value::Regex(Regex::new("ab+", flags(&[RegexFlag::CaseInsensitive]))))]
#[case("/^x$/mi", Value::Regex(Regex::new("^x$", flags(&[RegexFlag::CaseInsensitive, RegexFlag::Multiline]))))]
#[case("/* lead */ null /* tail */", Value::Null)]
#[case("// only a comment before\ntrue", Value::Boolean(true))]
fn parses_scalars(#[case] src: &str, #[case] expected: Value) {
    assert_eq!(parse(src), Ok(expected));
}

#[test]
fn nan_literals() {
    for src in ["NaN", "-NaN", "+NaN", " NaN "] {
        match parse(src) {
            Ok(Value::Double(d)) => assert!(d.is_nan(), "{src:?}"),
            other => panic!("{src:?} parsed as {other:?}"),
        }
    }
}

#[test]
fn big_integer_keeps_every_digit() {
    let v = parse("123456789012345678901234567890n").unwrap();
    assert_eq!(
        v,
        Value::BigInteger(BigInt::from_str("123456789012345678901234567890").unwrap())
    );
}

#[test]
fn plain_decimal_narrows_to_double() {
    // no suffix, so precision is lost on purpose
    assert_eq!(
        parse("123456789012345678901234567890"),
        Ok(Value::Double(1.234_567_890_123_456_8e29))
    );
}

#[rstest]
#[case("[]")]
#[case("[,]")]
#[case("[ , ]")]
#[case("[/* */,/* */]")]
fn empty_arrays(#[case] src: &str) {
    assert_eq!(parse(src), Ok(Value::Array(vec![])));
}

#[rstest]
#[case("{}")]
#[case("{,}")]
#[case("{ , }")]
#[case("{\n// nothing here\n}")]
fn empty_objects(#[case] src: &str) {
    assert_eq!(parse(src), Ok(Value::Object(vec![])));
}

#[test]
fn trailing_comma_is_ignored() {
    assert_eq!(parse("[1,2,]"), parse("[1,2]"));
    assert_eq!(parse("[1,2 , ]"), parse("[1,2]"));
    assert_eq!(parse("{'a':1,}"), parse("{'a':1}"));
}

#[test]
fn duplicate_keys_are_kept_in_order() {
    let v = parse(r#"{"a":1,"a":2}"#).unwrap();
    assert_eq!(
        v,
        obj(&[("a", Value::Double(1.0)), ("a", Value::Double(2.0))])
    );
    assert_eq!(v.as_object().map(Vec::len), Some(2));
}

#[test]
fn keys_keep_source_order() {
    let v = parse("{'z':1,'a':2,'m':3}").unwrap();
    let keys: Vec<&str> = v
        .as_object()
        .unwrap()
        .iter()
        .map(|(k, _)| k.as_str())
        .collect();
    assert_eq!(keys, ["z", "a", "m"]);
}

#[test]
fn nested_document_with_every_variant() {
    let src = r#"
        /* header */
        {
            "null": null,
            'flags': [true, false,],
            "num": [1, -2.5e-1, 0xff, 0b11, 1_000, NaN, -Infinity],
            "big": [10n, -0x10n, 0b100n],
            "text": 'it\'s',
            "re": /a\/b/m, // trailing line comment
            "nest": {'x': [[], [,], {}, {,}]},
        }
    "#;
    let v = parse(src).unwrap();
    let nums = v.get("num").and_then(Value::as_array).unwrap();
    assert_eq!(nums.len(), 7);
    assert_eq!(nums[2], Value::Double(255.0));
    assert_eq!(nums[3], Value::Double(3.0));
    assert_eq!(nums[4], Value::Double(1000.0));
    assert!(nums[5].as_f64().is_some_and(f64::is_nan));
    assert_eq!(
        v.get("big"),
        Some(&Value::Array(vec![
            BigInt::from(10).into(),
            BigInt::from(-16).into(),
            BigInt::from(4).into(),
        ]))
    );
    assert_eq!(v.get("text"), Some(&s("it's")));
    assert_eq!(
        v.get("re"),
        Some(&Value::Regex(Regex::new("a/b", flags(&[RegexFlag::Multiline]))))
    );
    assert_eq!(
        v.get("nest"),
        Some(&obj(&[(
            "x",
            Value::Array(vec![
                Value::Array(vec![]),
                Value::Array(vec![]),
                Value::Object(vec![]),
                Value::Object(vec![]),
            ])
        )]))
    );
}

#[test]
fn comments_between_every_token() {
    let src = "/*a*/[/*b*/1/*c*/,/*d*/{/*e*/'k'/*f*/:/*g*/2/*h*/}/*i*/,/*j*/]/*k*/";
    assert_eq!(
        parse(src),
        Ok(Value::Array(vec![
            Value::Double(1.0),
            obj(&[("k", Value::Double(2.0))]),
        ]))
    );
}

#[test]
fn regex_in_composites() {
    assert_eq!(
        parse("[/x/, /y/i]"),
        Ok(Value::Array(vec![
            Value::Regex(Regex::new("x", RegexFlags::empty())),
            Value::Regex(Regex::new("y", flags(&[RegexFlag::CaseInsensitive]))),
        ]))
    );
    assert_eq!(
        parse("{'r':/x/m}").ok().and_then(|v| v.get("r").cloned()),
        Some(Value::Regex(Regex::new("x", flags(&[RegexFlag::Multiline]))))
    );
}

#[test]
fn from_str_matches_parse() {
    assert_eq!("[1]".parse::<Value>(), parse("[1]"));
    assert!("[1".parse::<Value>().is_err());
}

#[test]
fn deep_nesting_without_limit() {
    let depth = 200;
    let mut src = String::new();
    src.extend(core::iter::repeat_n('[', depth));
    src.extend(core::iter::repeat_n(']', depth));
    let mut v = parse(&src).unwrap();
    let mut seen = 1;
    while let Value::Array(mut items) = v {
        match items.pop() {
            Some(inner) => {
                v = inner;
                seen += 1;
            }
            None => break,
        }
    }
    assert_eq!(seen, depth);
}
