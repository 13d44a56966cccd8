#![no_main]
use std::cell::RefCell;

use arbitrary::Arbitrary;
use jsonplus::{ParserOptions, parse_slice_with_options};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use serde_json::{Map, Value};

const HEADER: usize = 1; // option flags

thread_local! {
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

/// Everything the grammar treats as insignificant between tokens.
static PADDING_TABLE: &[&[u8]] = &[
    b" ",
    b"\t",
    b"\n",
    b"\r",
    b"/**/",
    b"/* c */",
    b"/* // */",
    b"// c\n",
    b"//\r",
];

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size < HEADER || seed.is_multiple_of(10) {
        data[0] = with_rng(|rng| rng.next_u32() as u8);

        let mut prefix = HEADER;
        let limit = max_size - prefix;
        prefix += append_padding(&mut data[prefix..], limit);
        let limit = max_size - prefix;
        prefix += append_value(&mut data[prefix..], size.max(16), limit);
        let limit = max_size - prefix;
        prefix += append_padding(&mut data[prefix..], limit);

        prefix
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

/// Append 1‒8 padding pieces to `buf` without exceeding `limit`. Returns the
/// number of bytes written.
fn append_padding(buf: &mut [u8], limit: usize) -> usize {
    with_rng(|rng| {
        if limit == 0 {
            return 0;
        }

        let pieces = rng.random_range(1..=8);
        let mut written = 0;

        for _ in 0..pieces {
            let p = PADDING_TABLE[rng.random_range(0..PADDING_TABLE.len())];
            if written + p.len() > limit {
                break;
            }
            buf[written..written + p.len()].copy_from_slice(p);
            written += p.len();
        }
        written
    })
}

fn append_value(data: &mut [u8], size: usize, limit: usize) -> usize {
    let value = loop {
        let s = with_rng(|rng| rng.random_range(size / 2..size * 2));
        let bytes: Vec<u8> = with_rng(|rng| (0..s).map(|_| rng.random::<u8>()).collect());
        if let Ok(value) = ArbitraryValue::arbitrary(&mut arbitrary::Unstructured::new(&bytes)) {
            break value;
        }
    };

    let serialized = if with_rng(|rng| rng.random::<bool>()) {
        serde_json::to_vec_pretty(&value.0)
    } else {
        serde_json::to_vec(&value.0)
    }
    .expect("Failed to serialize arbitrary value");

    let len = serialized.len().min(limit);
    data[..len].copy_from_slice(&serialized[..len]);

    len
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

#[derive(Debug)]
struct ArbitraryValue(Value);

impl<'a> Arbitrary<'a> for ArbitraryValue {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        let node_type = u.choose_index(21)?;
        let value = match node_type {
            0 => Value::Null,
            1 => Value::Bool(u.arbitrary()?),
            2 => {
                let n: f64 = u.arbitrary()?;
                Value::Number(
                    serde_json::Number::from_f64(n).ok_or(arbitrary::Error::IncorrectFormat)?,
                )
            }
            3 => Value::Number(u.arbitrary::<i64>()?.into()),
            4..=10 => Value::String(u.arbitrary()?),
            11..=15 => {
                let elems: Vec<ArbitraryValue> = u.arbitrary()?;
                Value::Array(elems.into_iter().map(|v| v.0).collect())
            }
            16..=20 => {
                let m: Vec<(String, ArbitraryValue)> = u.arbitrary()?;
                Value::Object(Map::from_iter(m.into_iter().map(|(k, v)| (k, v.0))))
            }
            _ => Err(arbitrary::Error::IncorrectFormat)?,
        };
        Ok(ArbitraryValue(value))
    }
}

/// Structural equality between a parsed tree and `serde_json`'s reading of
/// the same text. `serde_json` keeps the last of duplicate keys.
fn agrees(ours: &jsonplus::Value, theirs: &Value) -> bool {
    match (ours, theirs) {
        (jsonplus::Value::Null, Value::Null) => true,
        (jsonplus::Value::Boolean(a), Value::Bool(b)) => a == b,
        (jsonplus::Value::Double(a), Value::Number(b)) => b.as_f64() == Some(*a),
        (jsonplus::Value::String(a), Value::String(b)) => a == b,
        (jsonplus::Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| agrees(x, y))
        }
        (jsonplus::Value::Object(a), Value::Object(b)) => {
            a.iter().all(|(k, _)| b.contains_key(k))
                && b.iter().all(|(k, v)| {
                    a.iter()
                        .rev()
                        .find(|(key, _)| key == k)
                        .is_some_and(|(_, x)| agrees(x, v))
                })
        }
        _ => false,
    }
}

fn parser(data: &[u8]) {
    if data.len() < HEADER {
        return;
    }

    let flags = data[0];
    let data = &data[HEADER..];

    let options = ParserOptions {
        slash_always_opens_comment: flags & 1 != 0,
        max_depth: (flags & 2 != 0).then_some(usize::from(flags >> 2)),
    };
    let ours = parse_slice_with_options(data, options);

    // Strict JSON with only whitespace and comments around it must parse,
    // and must parse to the same tree.
    let Ok(text) = std::str::from_utf8(data) else {
        assert!(ours.is_err(), "accepted invalid UTF-8: {data:?}");
        return;
    };
    let Ok(theirs) = serde_json::from_str::<Value>(text) else {
        return;
    };
    match ours {
        Ok(ours) => assert!(
            agrees(&ours, &theirs),
            "disagreement on {text:?}: {ours:?} vs {theirs:?}"
        ),
        Err(_) if options.max_depth.is_some() => {}
        Err(err) => panic!("rejected strict JSON {text:?}: {err}"),
    }
}

fuzz_target!(|data: &[u8]| parser(data));
