use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use jsonbind::{
    deserialize, serialize, CasePolicy, JsonError, JsonOptions, JsonRecord, TokenKind,
};
use rust_decimal::Decimal;

fn snake() -> JsonOptions {
    JsonOptions::default().with_case_policy(CasePolicy::SnakeCase)
}

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq, JsonRecord)]
struct Easy {
    AEasyInt: i32,
    AEasyString: String,
    AEasyBool: bool,
    AEasyNull: Option<i32>,
}

impl Default for Easy {
    fn default() -> Self {
        Self {
            AEasyInt: 5,
            AEasyString: "AA".to_string(),
            AEasyBool: true,
            AEasyNull: None,
        }
    }
}

#[allow(non_snake_case)]
#[derive(Debug, Clone, Default, PartialEq, JsonRecord)]
struct DictStruct {
    DPr: IndexMap<i32, IndexMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, JsonRecord)]
struct Flags {
    #[json(skip)]
    ignored: String,
    #[json(rename = "namey")]
    not_namey: f64,
    count: u8,
}

#[derive(Debug, Clone, Default, PartialEq, JsonRecord)]
struct Inner {
    dec: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, JsonRecord)]
struct Outer {
    inner_struct: Inner,
    l_int: Vec<i32>,
    label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, JsonRecord)]
struct Stamped {
    at: NaiveDateTime,
    seen: DateTime<FixedOffset>,
}

impl Default for Stamped {
    fn default() -> Self {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        Self {
            at: epoch,
            seen: DateTime::parse_from_rfc3339("1970-01-01T00:00:00+00:00").unwrap(),
        }
    }
}

#[test]
fn easy_record_snake_case_emits_nulls_by_default() {
    let text = serialize(&Easy::default(), snake()).unwrap();
    assert_eq!(
        text,
        r#"{"a_easy_int":5,"a_easy_string":"AA","a_easy_bool":true,"a_easy_null":null}"#
    );
}

#[test]
fn easy_record_snake_case_drops_nulls_when_asked() {
    let options = snake().with_ignore_null_values(true);
    let text = serialize(&Easy::default(), options).unwrap();
    assert_eq!(
        text,
        r#"{"a_easy_int":5,"a_easy_string":"AA","a_easy_bool":true}"#
    );
}

#[test]
fn easy_record_camel_case_roundtrip() {
    let options = JsonOptions::default();
    let text = serialize(&Easy::default(), options).unwrap();
    assert_eq!(
        text,
        r#"{"aEasyInt":5,"aEasyString":"AA","aEasyBool":true,"aEasyNull":null}"#
    );
    let back: Easy = deserialize(&text, options).unwrap();
    assert_eq!(back, Easy::default());
}

#[test]
fn easy_record_roundtrip_with_populated_null_field() {
    let easy = Easy {
        AEasyNull: Some(-12),
        ..Easy::default()
    };
    for options in [snake(), JsonOptions::default()] {
        let text = serialize(&easy, options).unwrap();
        let back: Easy = deserialize(&text, options).unwrap();
        assert_eq!(back, easy);
    }
}

#[test]
fn pretty_printing_matches_indentation_rules() {
    let options = snake()
        .with_ignore_null_values(true)
        .with_pretty_print(true);
    let text = serialize(&Easy::default(), options).unwrap();
    assert_eq!(
        text,
        "{\n    \"a_easy_int\": 5,\n    \"a_easy_string\": \"AA\",\n    \"a_easy_bool\": true\n}"
    );
    let back: Easy = deserialize(&text, options).unwrap();
    assert_eq!(back, Easy::default());
}

#[test]
fn unknown_keys_are_skipped_during_decode() {
    let text = r#"{"a_easy_int":7,"mystery":[{"x":1},[2]],"a_easy_bool":false}"#;
    let easy: Easy = deserialize(text, snake()).unwrap();
    assert_eq!(easy.AEasyInt, 7);
    assert!(!easy.AEasyBool);
    // Untouched fields keep their zero-initialized values.
    assert_eq!(easy.AEasyString, "AA");
    assert_eq!(easy.AEasyNull, None);
}

#[test]
fn nested_mapping_record_decodes_document_order() {
    let text = r#"{"dPr":{"1":{"k1":"v1","k2":"v2"}}}"#;
    let dict: DictStruct = deserialize(text, JsonOptions::default()).unwrap();
    let inner = dict.DPr.get(&1).expect("key 1 decoded");
    assert_eq!(inner.get("k1").map(String::as_str), Some("v1"));
    assert_eq!(inner.get("k2").map(String::as_str), Some("v2"));
}

#[test]
fn nested_mapping_record_roundtrip() {
    let mut first = IndexMap::new();
    first.insert("k1".to_string(), "v1".to_string());
    first.insert("k2".to_string(), "v2".to_string());
    let mut second = IndexMap::new();
    second.insert("k1".to_string(), "v2".to_string());
    second.insert("k2".to_string(), "v1".to_string());
    let mut dpr = IndexMap::new();
    dpr.insert(1, first);
    dpr.insert(2, second);
    let dict = DictStruct { DPr: dpr };

    let text = serialize(&dict, JsonOptions::default()).unwrap();
    assert_eq!(
        text,
        r#"{"dPr":{"1":{"k1":"v1","k2":"v2"},"2":{"k1":"v2","k2":"v1"}}}"#
    );
    let back: DictStruct = deserialize(&text, JsonOptions::default()).unwrap();
    assert_eq!(back, dict);
}

#[test]
fn skipped_field_never_appears_in_output() {
    let flags = Flags {
        ignored: "not ignored".to_string(),
        not_namey: 6.9,
        count: 3,
    };
    for options in [
        snake(),
        JsonOptions::default(),
        snake().with_ignore_null_values(true),
    ] {
        let text = serialize(&flags, options).unwrap();
        assert_eq!(text, r#"{"namey":6.9,"count":3}"#);
    }
}

#[test]
fn skipped_field_is_never_consumed_during_decode() {
    let text = r#"{"ignored":"zzz","namey":6.9,"count":3}"#;
    let flags: Flags = deserialize(text, snake()).unwrap();
    assert_eq!(flags.ignored, "");
    assert_eq!(flags.not_namey, 6.9);
    assert_eq!(flags.count, 3);
}

#[test]
fn explicit_rename_wins_under_both_policies() {
    let flags = Flags {
        not_namey: 1.5,
        ..Flags::default()
    };
    for options in [snake(), JsonOptions::default()] {
        let text = serialize(&flags, options).unwrap();
        assert!(text.starts_with(r#"{"namey":1.5"#), "got {text}");
        let back: Flags = deserialize(&text, options).unwrap();
        assert_eq!(back.not_namey, 1.5);
    }
}

#[test]
fn int_sequence_scenario() {
    let text = serialize(&vec![1, 3, 5, 77], JsonOptions::default()).unwrap();
    assert_eq!(text, "[1,3,5,77]");
    let back: Vec<i32> = deserialize(&text, JsonOptions::default()).unwrap();
    assert_eq!(back, vec![1, 3, 5, 77]);
}

#[test]
fn nested_record_roundtrip_all_modes() {
    let outer = Outer {
        inner_struct: Inner {
            dec: "10.51".parse().unwrap(),
        },
        l_int: vec![1, 3, 5, 77],
        label: Some("other".to_string()),
    };
    for snake_mode in [false, true] {
        for pretty in [false, true] {
            let options = JsonOptions::default()
                .with_case_policy(if snake_mode {
                    CasePolicy::SnakeCase
                } else {
                    CasePolicy::CamelCase
                })
                .with_pretty_print(pretty);
            let text = serialize(&outer, options).unwrap();
            let back: Outer = deserialize(&text, options).unwrap();
            assert_eq!(back, outer, "mode snake={snake_mode} pretty={pretty}");
        }
    }
}

#[test]
fn decimal_record_compact_output() {
    let inner = Inner {
        dec: "10.51".parse().unwrap(),
    };
    let text = serialize(&inner, JsonOptions::default()).unwrap();
    assert_eq!(text, r#"{"dec":10.51}"#);
    let back: Inner = deserialize(&text, JsonOptions::default()).unwrap();
    assert_eq!(back, inner);
}

#[test]
fn timestamps_quote_their_invariant_forms() {
    let stamped = Stamped {
        at: NaiveDateTime::parse_from_str("2024-03-05T07:30:00", "%Y-%m-%dT%H:%M:%S").unwrap(),
        seen: DateTime::parse_from_rfc3339("2024-03-05T07:30:00+02:00").unwrap(),
    };
    let text = serialize(&stamped, JsonOptions::default()).unwrap();
    assert_eq!(
        text,
        r#"{"at":"2024-03-05T07:30:00","seen":"2024-03-05T07:30:00+02:00"}"#
    );
    let back: Stamped = deserialize(&text, JsonOptions::default()).unwrap();
    assert_eq!(back, stamped);
}

#[test]
fn null_into_non_nullable_field_fails() {
    let text = r#"{"count":null}"#;
    let err = deserialize::<Flags>(text, snake()).unwrap_err();
    assert_eq!(err, JsonError::UnexpectedNull("u8"));
}

#[test]
fn primitive_document_into_record_is_a_shape_mismatch() {
    let err = deserialize::<Easy>("5", snake()).unwrap_err();
    assert_eq!(
        err,
        JsonError::ShapeMismatch {
            expected: "object",
            found: TokenKind::Value,
        }
    );
}

#[test]
fn malformed_literal_reports_target_kind() {
    let err = deserialize::<Vec<i32>>(r#"["a"]"#, JsonOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        JsonError::PrimitiveParse { kind: "i32", .. }
    ));
}

#[test]
fn truncated_document_runs_out_of_tokens() {
    let err = deserialize::<Easy>(r#"{"a_easy_int":5"#, snake()).unwrap_err();
    assert!(matches!(err, JsonError::OutOfBounds(_)));
}
