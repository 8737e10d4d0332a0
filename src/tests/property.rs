//! Property tests over generated documents.

use alloc::vec::Vec;

use quickcheck::{QuickCheck, TestResult};

use super::arbitrary::TValue;
use super::{check_trace_invariants, record_recursive, record_stackless};
use crate::{parse, Cursor};

/// The recursive and constant-space parsers must emit byte-identical event
/// sequences for every accepted document.
#[test]
fn parsers_agree_on_generated_documents() {
    fn prop(v: TValue) -> bool {
        let doc = v.to_json();
        let a = record_stackless(doc.as_bytes()).unwrap();
        let b = record_recursive(doc.as_bytes()).unwrap();
        a == b
    }

    QuickCheck::new()
        .tests(500)
        .quickcheck(prop as fn(TValue) -> bool);
}

#[test]
fn tree_round_trips_generated_documents() {
    fn prop(v: TValue) -> bool {
        let doc = v.to_json();
        let mut buf = Vec::from(doc.as_bytes());
        let root = parse(&mut Cursor::new(&mut buf)).unwrap();
        TValue::from_value(&root) == v
    }

    QuickCheck::new()
        .tests(500)
        .quickcheck(prop as fn(TValue) -> bool);
}

#[test]
fn traces_stay_balanced_on_generated_documents() {
    fn prop(v: TValue) -> bool {
        let doc = v.to_json();
        check_trace_invariants(&record_stackless(doc.as_bytes()).unwrap());
        true
    }

    QuickCheck::new()
        .tests(300)
        .quickcheck(prop as fn(TValue) -> bool);
}

fn agrees(mine: &TValue, oracle: &serde_json::Value) -> bool {
    match (mine, oracle) {
        (TValue::Null, serde_json::Value::Null) => true,
        (TValue::Boolean(a), serde_json::Value::Bool(b)) => a == b,
        (TValue::Integer(a), serde_json::Value::Number(n)) => n.as_i64() == Some(*a),
        (TValue::Double(a), serde_json::Value::Number(n)) => n.as_f64() == Some(*a),
        (TValue::Str(a), serde_json::Value::String(b)) => a == b,
        (TValue::Array(items), serde_json::Value::Array(other)) => {
            items.len() == other.len() && items.iter().zip(other).all(|(m, o)| agrees(m, o))
        }
        (TValue::Object(entries), serde_json::Value::Object(map)) => {
            entries.len() == map.len()
                && entries
                    .iter()
                    .all(|(k, v)| map.get(k).is_some_and(|o| agrees(v, o)))
        }
        _ => false,
    }
}

/// Cross-check against a reference parser. Duplicate keys are discarded:
/// map-based parsers collapse them, this one preserves them.
#[test]
fn matches_reference_parser_on_unique_keys() {
    fn prop(v: TValue) -> TestResult {
        if v.has_duplicate_keys() {
            return TestResult::discard();
        }
        let doc = v.to_json();
        let oracle: serde_json::Value = serde_json::from_str(&doc).unwrap();
        let mut buf = Vec::from(doc.as_bytes());
        let root = parse(&mut Cursor::new(&mut buf)).unwrap();
        TestResult::from_bool(agrees(&TValue::from_value(&root), &oracle))
    }

    QuickCheck::new()
        .tests(300)
        .quickcheck(prop as fn(TValue) -> TestResult);
}
