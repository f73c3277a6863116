// Path: crates/crypto/src/canonical/tests.rs

use super::*;
use agentid_test_utils::fixtures::{AGENT_ONE_CANONICAL, AGENT_ONE_JSON};
use proptest::prelude::*;
use serde_json::json;

fn canon(json: &str) -> String {
    String::from_utf8(canonicalize_str(json).unwrap()).unwrap()
}

#[test]
fn sorts_keys_and_strips_whitespace() {
    assert_eq!(canon(r#"{"z":1,"a":2}"#), r#"{"a":2,"z":1}"#);
    assert_eq!(canon(r#"{"a":2,"z":1}"#), r#"{"a":2,"z":1}"#);
    assert_eq!(canon("{\n  \"a\": 1,\n  \"b\": 2\n}"), r#"{"a":1,"b":2}"#);
    assert_eq!(
        canon(r#"{"z":"last","a":"first","m":{"zz":"deep","aa":"deeper"}}"#),
        r#"{"a":"first","m":{"aa":"deeper","zz":"deep"},"z":"last"}"#
    );
}

#[test]
fn keeps_array_order_and_literals() {
    assert_eq!(canon(r#"{"items":["c","a","b"]}"#), r#"{"items":["c","a","b"]}"#);
    assert_eq!(
        canon(r#"{"bool": true, "null": null, "num": 42, "str": "hello", "f": false}"#),
        r#"{"bool":true,"f":false,"null":null,"num":42,"str":"hello"}"#
    );
    assert_eq!(canon("{}"), "{}");
    assert_eq!(canon("[]"), "[]");
}

#[test]
fn manifest_fixture_matches_reference_text() {
    assert_eq!(canon(AGENT_ONE_JSON), AGENT_ONE_CANONICAL);
}

#[test]
fn keys_order_by_code_point() {
    let value = CanonicalValue::object([
        ("\u{1F600}", CanonicalValue::from(6i64)),
        ("\u{E000}", CanonicalValue::from(5i64)),
        ("\u{20ac}", CanonicalValue::from(4i64)),
        ("é", CanonicalValue::from(3i64)),
        ("z", CanonicalValue::from(2i64)),
        ("A", CanonicalValue::from(1i64)),
    ]);
    // Astral keys sort after U+E000, unlike UTF-16 code unit order.
    assert_eq!(
        to_canonical_string(&value).unwrap(),
        "{\"A\":1,\"z\":2,\"é\":3,\"\u{20ac}\":4,\"\u{E000}\":5,\"\u{1F600}\":6}"
    );
}

#[test]
fn escapes_only_what_it_must() {
    let value = CanonicalValue::from("q\"b\\\u{08}\u{0c}\n\r\t\u{0}\u{1f}\u{7f}é🔥\u{2028}/");
    assert_eq!(
        to_canonical_string(&value).unwrap(),
        "\"q\\\"b\\\\\\b\\f\\n\\r\\t\\u0000\\u001f\u{7f}é🔥\u{2028}/\""
    );
}

#[test]
fn unicode_passes_through() {
    assert_eq!(
        canon(r#"{"emoji":"🔥","text":"café"}"#),
        r#"{"emoji":"🔥","text":"café"}"#
    );
    assert_eq!(canon(r#""é""#), "\"é\"");
}

#[test]
fn numbers_follow_ecmascript() {
    let table: &[(f64, &str)] = &[
        (0.0, "0"),
        (-0.0, "0"),
        (1.0, "1"),
        (-1.5, "-1.5"),
        (0.1, "0.1"),
        (4.35, "4.35"),
        (0.1 + 0.2, "0.30000000000000004"),
        (1e20, "100000000000000000000"),
        (1e21, "1e+21"),
        (1e-6, "0.000001"),
        (1e-7, "1e-7"),
        (333333333.3333332, "333333333.3333332"),
        (5e-324, "5e-324"),
        (1.7976931348623157e308, "1.7976931348623157e308"),
        (9007199254740992.0, "9007199254740992"),
    ];
    for (n, want) in table {
        let got = to_canonical_string(&CanonicalValue::from(*n)).unwrap();
        assert_eq!(&got, want, "formatting {n:e}");
    }
}

#[test]
fn integers_are_exact() {
    assert_eq!(
        to_canonical_string(&CanonicalValue::from(i64::MIN)).unwrap(),
        "-9223372036854775808"
    );
    assert_eq!(
        to_canonical_string(&CanonicalValue::from(u64::MAX)).unwrap(),
        "18446744073709551615"
    );
    assert_eq!(canon("[18446744073709551615,-42,7]"), "[18446744073709551615,-42,7]");
    assert_eq!(canon("[1.0,1e2,-0.0,2.50]"), "[1,100,0,2.5]");
}

#[test]
fn non_finite_numbers_fail() {
    for n in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let value = CanonicalValue::Array(vec![CanonicalValue::from(n)]);
        assert_eq!(canonicalize(&value), Err(CanonicalError::NonFiniteNumber));
    }
}

#[test]
fn rejects_invalid_text() {
    assert!(matches!(canonicalize_str("{} x"), Err(CanonicalError::Parse(_))));
    assert!(matches!(canonicalize_str("{\"a\":}"), Err(CanonicalError::Parse(_))));
    assert!(matches!(canonicalize_str(""), Err(CanonicalError::Parse(_))));
}

#[test]
fn agrees_with_serde_jcs() {
    let documents = [
        json!({"systemPrompt": "Be helpful."}),
        json!({"b": [1, 2, {"y": null, "x": true}], "a": "text\n\"quoted\"", "c": -3}),
        json!({"nested": {"z": {"k": "v"}, "a": []}, "numbers": [0, 4.5, 0.25, -17]}),
        json!(["\u{1}", "tab\t", "é", {"": "empty key"}]),
        serde_json::from_str::<serde_json::Value>(AGENT_ONE_JSON).unwrap(),
    ];
    for doc in documents {
        let ours = String::from_utf8(canonicalize(&doc.clone().into()).unwrap()).unwrap();
        let theirs = serde_jcs::to_string(&doc).unwrap();
        assert_eq!(ours, theirs);
    }
}

#[test]
fn serializable_values_go_through_json() {
    #[derive(serde::Serialize)]
    struct Probe {
        zeta: Option<u8>,
        alpha: &'static str,
    }
    let bytes = canonicalize_serializable(&Probe {
        zeta: None,
        alpha: "x",
    })
    .unwrap();
    assert_eq!(bytes, br#"{"alpha":"x","zeta":null}"#);
}

#[test]
fn converts_back_to_serde_json() {
    let value = CanonicalValue::object([
        ("f", CanonicalValue::from(f64::NAN)),
        ("n", CanonicalValue::from(3u64)),
    ]);
    let json: serde_json::Value = value.into();
    assert_eq!(json, json!({"f": null, "n": 3}));
}

fn arb_json() -> impl Strategy<Value = serde_json::Value> {
    let leaf = prop_oneof![
        Just(serde_json::Value::Null),
        any::<bool>().prop_map(serde_json::Value::from),
        any::<i64>().prop_map(serde_json::Value::from),
        (-1e300f64..1e300f64).prop_map(serde_json::Value::from),
        "\\PC{0,12}".prop_map(serde_json::Value::from),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..6).prop_map(serde_json::Value::Array),
            proptest::collection::btree_map("[a-zA-Z0-9_é]{0,6}", inner, 0..6).prop_map(
                |members| serde_json::Value::Object(members.into_iter().collect())
            ),
        ]
    })
}

proptest! {
    #[test]
    fn canonical_form_is_a_fixed_point(doc in arb_json()) {
        let once = canonicalize(&doc.into()).unwrap();
        let twice = canonicalize_str(std::str::from_utf8(&once).unwrap()).unwrap();
        prop_assert_eq!(once, twice);
    }
}
