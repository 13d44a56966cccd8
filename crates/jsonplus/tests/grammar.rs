#![expect(missing_docs)]

use jsonplus::{
    BigInt, MalformedInput, ParserOptions, Regex, RegexFlag, RegexFlags, Value, parse,
    parse_slice, parse_slice_with_options, parse_with_options,
};
use rstest::rstest;

#[rstest]
#[case("null", Value::Null)]
#[case("true", Value::Boolean(true))]
#[case("  1.5e3 // x", Value::Double(1500.0))]
#[case("0x1F", Value::Double(31.0))]
#[case("[]", Value::Array(vec![]))]
#[case("[,]", Value::Array(vec![]))]
#[case("{}", Value::Object(vec![]))]
#[case("{,}", Value::Object(vec![]))]
fn documented_examples(#[case] src: &str, #[case] expected: Value) {
    assert_eq!(parse(src), Ok(expected));
}

#[test]
fn suffixed_integer_is_exact() {
    let v = parse("123456789012345678901234567890n").unwrap();
    let expected: BigInt = "123456789012345678901234567890".parse().unwrap();
    assert_eq!(v.as_big_integer(), Some(&expected));
}

#[test]
fn regex_literal_with_flag() {
    let v = parse("/ab+/i").unwrap();
    let mut flags = RegexFlags::empty();
    flags.insert(RegexFlag::CaseInsensitive);
    assert_eq!(v, Value::Regex(Regex::new("ab+", flags)));
    assert_eq!(flags.to_string(), "i");
}

#[test]
fn trailing_comma_and_duplicates() {
    assert_eq!(parse("[1,2,]"), parse("[1,2]"));
    let v = parse(r#"{"a":1,"a":2}"#).unwrap();
    assert_eq!(v.as_object().map(Vec::len), Some(2));
    assert_eq!(v.get_all("a").count(), 2);
}

#[rstest]
#[case("1 2")]
#[case("1 /* ")]
#[case("'unterminated")]
#[case("[1, 2")]
#[case("{'a': 1")]
#[case("/a/ii")]
fn rejected_inputs(#[case] src: &str) {
    assert_eq!(parse(src), Err(MalformedInput));
}

#[test]
fn error_carries_no_detail() {
    let err = parse("[").unwrap_err();
    assert_eq!(err.to_string(), "malformed input");
    assert_eq!(err, MalformedInput);
}

#[test]
fn byte_entry_points() {
    assert_eq!(parse_slice(b"[1]"), parse("[1]"));
    assert_eq!(parse_slice(b"[\xFF]"), Err(MalformedInput));
    let options = ParserOptions {
        max_depth: Some(1),
        ..ParserOptions::default()
    };
    assert!(parse_slice_with_options(b"[1]", options).is_ok());
    assert!(parse_slice_with_options(b"[[1]]", options).is_err());
    assert!(parse_with_options("[[1]]", options).is_err());
}

#[test]
fn values_are_owned_by_the_caller() {
    let text = String::from("{'k': ['v']}");
    let v = parse(&text).unwrap();
    drop(text);
    assert_eq!(
        v.get("k").and_then(Value::as_array).map(|a| a[0].as_str()),
        Some(Some("v"))
    );
}
