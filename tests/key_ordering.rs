use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rhymebucket::prelude::*;
use rhymebucket::GroupError;
use serde_json::{Value, json};

#[test]
fn test_mixed_kinds_are_rejected() {
    let input = vec![
        json!({ "numSyllables": 1 }),
        json!({ "numSyllables": "two" }),
        json!({ "numSyllables": 3 }),
    ];

    let err = group_by(&input, "numSyllables").unwrap_err();
    assert_eq!(
        err,
        GroupError::KeyComparison {
            left: "1".to_string(),
            right: "two".to_string(),
        }
    );
}

#[test]
fn test_nan_is_rejected() {
    let err = group_by_key(vec![1.0, f64::NAN, 2.0], |n| *n).unwrap_err();
    assert!(matches!(err, GroupError::KeyComparison { .. }));
    assert!(err.to_string().contains("NaN"));
}

#[test]
fn test_missing_is_comparable_with_every_kind() {
    let input = vec![
        json!({ "tag": "b" }),
        json!({}),
        json!({ "tag": "a" }),
    ];
    let grouped = group_by(&input, "tag").unwrap();
    let keys: Vec<String> = grouped.keys().map(ToString::to_string).collect();
    assert_eq!(keys, vec!["a", "b", "missing"]);
}

#[test]
fn test_null_joins_the_missing_group() {
    let input = vec![
        json!({ "numSyllables": 1 }),
        json!({ "numSyllables": null }),
        json!({ "word": "orange" }),
        json!({ "numSyllables": 3 }),
    ];
    let grouped = group_by(&input, "numSyllables").unwrap();

    let keys: Vec<String> = grouped.keys().map(ToString::to_string).collect();
    assert_eq!(keys, vec!["1", "3", "missing"]);
    assert_eq!(
        grouped.get(&GroupKey::Missing).unwrap(),
        &[&input[1], &input[2]]
    );
}

#[test]
fn test_index_closure_matches_field_name_on_absent_fields() {
    let input = vec![
        json!({ "numSyllables": 1 }),
        json!({ "word": "orange" }),
        json!({ "numSyllables": 3 }),
    ];

    let by_field = group_by(&input, "numSyllables").unwrap();
    let by_index = group_by(
        &input,
        KeySelector::key_fn(|r: &&Value| r["numSyllables"].clone()),
    )
    .unwrap();

    assert_eq!(by_field, by_index);
    assert_eq!(by_index.len(), 3);
}

#[test]
fn test_large_integers_keep_distinct_buckets() {
    let input = vec![9_007_199_254_740_992u64, 9_007_199_254_740_993, 9_007_199_254_740_992];
    let grouped = group_by_key(&input, |n| **n).unwrap();

    let keys: Vec<i128> = grouped.keys().filter_map(GroupKey::as_i128).collect();
    assert_eq!(keys, vec![9_007_199_254_740_992, 9_007_199_254_740_993]);
    assert_eq!(grouped.bucket(9_007_199_254_740_992u64).unwrap(), &[&input[0], &input[2]]);

    let records = vec![
        json!({ "id": u64::MAX }),
        json!({ "id": u64::MAX - 1 }),
        json!({ "id": i64::MIN }),
    ];
    let grouped = group_by(&records, "id").unwrap();
    let keys: Vec<String> = grouped.keys().map(ToString::to_string).collect();
    assert_eq!(
        keys,
        vec![
            i64::MIN.to_string(),
            (u64::MAX - 1).to_string(),
            u64::MAX.to_string(),
        ]
    );
}

#[test]
fn test_integers_and_floats_share_number_order() {
    let input = vec![json!({ "n": 2 }), json!({ "n": 1.5 }), json!({ "n": 2.0 }), json!({ "n": 1 })];
    let grouped = group_by(&input, "n").unwrap();

    let keys: Vec<String> = grouped.keys().map(ToString::to_string).collect();
    assert_eq!(keys, vec!["1", "1.5", "2"]);
    assert_eq!(grouped.bucket(2).unwrap(), &[&input[0], &input[2]]);
}

#[test]
fn test_negative_zero_shares_a_bucket() {
    let grouped = group_by_key(vec![0.0, -0.0, 1.0], |n| *n).unwrap();
    assert_eq!(grouped.len(), 2);
    assert_eq!(grouped.bucket(0.0).unwrap().len(), 2);
}

#[test]
fn test_bools_sort_false_first() {
    let grouped = group_by_key(vec![3, 4, 5, 6], |n| n % 2 == 0).unwrap();
    let keys: Vec<&GroupKey> = grouped.keys().collect();
    assert_eq!(keys, vec![&GroupKey::Bool(false), &GroupKey::Bool(true)]);
    assert_eq!(grouped.bucket(false).unwrap(), &[3, 5]);
}

#[test]
fn test_text_sorts_bytewise() {
    let input: Vec<Value> = ["beta", "Alpha", "alpha", "\u{e9}t\u{e9}", "zeta"]
        .iter()
        .map(|w| json!({ "word": w }))
        .collect();

    let grouped = group_by(&input, "word").unwrap();
    let keys: Vec<String> = grouped.keys().map(ToString::to_string).collect();
    assert_eq!(keys, vec!["Alpha", "alpha", "beta", "zeta", "\u{e9}t\u{e9}"]);
}

#[test]
fn test_compound_values_group_by_json_text() {
    let input = vec![
        json!({ "tags": ["n", "v"] }),
        json!({ "tags": ["adj"] }),
        json!({ "tags": ["n", "v"] }),
    ];
    let grouped = group_by(&input, "tags").unwrap();
    let keys: Vec<String> = grouped.keys().map(ToString::to_string).collect();
    assert_eq!(keys, vec![r#"["adj"]"#, r#"["n","v"]"#]);
    assert_eq!(grouped.bucket(r#"["n","v"]"#).unwrap().len(), 2);
}

#[test]
fn test_zeroed_and_missing_mix() {
    let mut rng = StdRng::seed_from_u64(42);

    for _iter in 0..10 {
        let len = rng.random_range(2000..5000);
        let input: Vec<Value> = (0..len)
            .map(|i| match rng.random_range(0..4) {
                0 => json!({ "id": i }),
                n => json!({ "id": i, "numSyllables": n - 1 }),
            })
            .collect();

        let grouped = group_by(&input, "numSyllables").unwrap();
        assert_eq!(grouped.record_count(), input.len());

        let keys: Vec<&GroupKey> = grouped.keys().collect();
        for pair in keys.windows(2) {
            match (pair[0], pair[1]) {
                (GroupKey::Int(a), GroupKey::Int(b)) => assert!(a < b),
                (GroupKey::Int(_), GroupKey::Missing) => {}
                other => panic!("Unexpected key order: {other:?}"),
            }
        }
    }
}
