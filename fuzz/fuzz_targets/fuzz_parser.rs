#![no_main]
use std::cell::RefCell;

use arbitrary::Arbitrary;
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use mjson::{DuplicateKeys, Loader, ParserOptions};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use serde_json::{Map, Value};

const HEADER: usize = 1; // 1 flag byte

thread_local! {
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

static WS_TABLE: &[&[u8]] = &[b" ", b"\t", b"\n", b"\r", b",", b",,"];

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

/// Mostly feeds the target serialized documents with random padding, so the
/// corpus reaches deep into the parser instead of failing in the lexer.
fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size < HEADER || seed.is_multiple_of(10) {
        data[0] = with_rng(|rng| rng.next_u32() as u8 & 0x07);

        let mut prefix = HEADER;
        while prefix < size.max(HEADER + 1) && prefix < max_size {
            let limit = max_size - prefix;
            prefix += append_padding(&mut data[prefix..], limit);
            let limit = max_size - prefix;
            prefix += append_value(&mut data[prefix..], size, limit);
        }
        prefix
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

/// Append 1‒N whitespace or comma runs to `buf`, never exceeding `limit`.
fn append_padding(buf: &mut [u8], limit: usize) -> usize {
    with_rng(|rng| {
        if limit == 0 {
            return 0;
        }
        let runs = rng.random_range(1..=limit.min(4));
        let mut written = 0;
        for _ in 0..runs {
            let w = WS_TABLE[rng.random_range(0..WS_TABLE.len())];
            if written + w.len() > limit {
                break;
            }
            buf[written..written + w.len()].copy_from_slice(w);
            written += w.len();
        }
        written
    })
}

fn append_value(data: &mut [u8], size: usize, limit: usize) -> usize {
    if limit == 0 {
        return 0;
    }
    let value = loop {
        let s = with_rng(|rng| rng.random_range(1..size.max(2) * 2));
        let bytes: Vec<u8> = with_rng(|rng| (0..s).map(|_| rng.random::<u8>()).collect());
        if let Ok(value) = ArbitraryDocument::arbitrary(&mut arbitrary::Unstructured::new(&bytes)) {
            break value;
        }
    };

    let serialized = serde_json::to_vec(&value.0).expect("Failed to serialize arbitrary value");
    let len = serialized.len().min(limit);
    data[..len].copy_from_slice(&serialized[..len]);
    len
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

/// A serde_json value restricted to what the grammar can express: integers
/// and short decimals, strings without quotes or backslashes, container roots.
#[derive(Debug)]
struct ArbitraryDocument(Value);

fn arbitrary_value(u: &mut arbitrary::Unstructured<'_>, depth: usize) -> arbitrary::Result<Value> {
    let node_type = u.choose_index(if depth == 0 { 11 } else { 21 })?;
    let value = match node_type {
        0 => Value::Null,
        1 => Value::Bool(u.arbitrary()?),
        2..=3 => Value::from(u.arbitrary::<i64>()?),
        4 => Value::from(f64::from(u.arbitrary::<i32>()?) / 8.0),
        5..=10 => {
            let s: String = u.arbitrary()?;
            Value::String(s.replace(['"', '\\'], ""))
        }
        11..=15 => {
            let len = u.choose_index(4)?;
            let items = (0..len)
                .map(|_| arbitrary_value(u, depth - 1))
                .collect::<arbitrary::Result<Vec<_>>>()?;
            Value::Array(items)
        }
        _ => {
            let len = u.choose_index(4)?;
            let mut map = Map::new();
            for _ in 0..len {
                let key: String = u.arbitrary()?;
                map.insert(key.replace(['"', '\\'], ""), arbitrary_value(u, depth - 1)?);
            }
            Value::Object(map)
        }
    };
    Ok(value)
}

impl<'a> Arbitrary<'a> for ArbitraryDocument {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let depth = u.choose_index(6)?;
        let root = if u.arbitrary()? {
            Value::Array(vec![arbitrary_value(u, depth)?])
        } else {
            let mut map = Map::new();
            map.insert(u.arbitrary::<String>()?.replace(['"', '\\'], ""), arbitrary_value(u, depth)?);
            Value::Object(map)
        };
        Ok(ArbitraryDocument(root))
    }
}

fn parser(data: &[u8]) {
    let Some((&flags, data)) = data.split_first() else {
        return;
    };

    let source = String::from_utf8_lossy(data);
    let loader = Loader::new(ParserOptions {
        duplicate_keys: if flags & 1 != 0 {
            DuplicateKeys::Reject
        } else {
            DuplicateKeys::LastWriteWins
        },
        max_depth: match (flags >> 1) & 3 {
            0 => usize::MAX,
            1 => 1,
            2 => 8,
            _ => mjson::DEFAULT_MAX_DEPTH,
        },
        panic_on_error: false,
    });

    if let Ok(root) = loader.load_text(&source) {
        assert!(root.is_container(), "accepted a scalar root: {root:?}");
    }
}

fuzz_target!(|data: &[u8]| parser(data));
