use rand::Rng;
use rhymebucket::prelude::*;
use rhymebucket::{GroupError, WordEntry};
use serde_json::{Value, json};
use std::collections::BTreeMap;

fn teams() -> Vec<Value> {
    vec![
        json!({ "name": "Steve", "team": "blue" }),
        json!({ "name": "Jack", "team": "red" }),
        json!({ "name": "Carol", "team": "blue" }),
    ]
}

#[test]
fn test_group_by_team() {
    let input = teams();
    let grouped = group_by(input.clone(), "team").unwrap();

    let keys: Vec<&GroupKey> = grouped.keys().collect();
    assert_eq!(keys, vec![&GroupKey::from("blue"), &GroupKey::from("red")]);

    assert_eq!(
        grouped.bucket("blue").unwrap(),
        &[
            json!({ "name": "Steve", "team": "blue" }),
            json!({ "name": "Carol", "team": "blue" }),
        ]
    );
    assert_eq!(
        grouped.bucket("red").unwrap(),
        &[json!({ "name": "Jack", "team": "red" })]
    );
}

#[test]
fn test_group_by_syllables() {
    let input = vec![
        json!({ "word": "cat", "numSyllables": 1 }),
        json!({ "word": "dog", "numSyllables": 1 }),
        json!({ "word": "rhyme", "numSyllables": 1 }),
        json!({ "word": "syllable", "numSyllables": 3 }),
    ];

    let grouped = group_by(&input, "numSyllables").unwrap();

    let keys: Vec<String> = grouped.keys().map(ToString::to_string).collect();
    assert_eq!(keys, vec!["1", "3"]);

    let one: Vec<&str> = grouped
        .bucket(1)
        .unwrap()
        .iter()
        .map(|r| r["word"].as_str().unwrap())
        .collect();
    assert_eq!(one, vec!["cat", "dog", "rhyme"]);
    assert_eq!(grouped.bucket(3).unwrap(), &[&input[3]]);
}

#[test]
fn test_field_and_function_are_equivalent() {
    let input = teams();

    let by_field = group_by(&input, "team").unwrap();
    let by_fn = group_by(&input, KeySelector::key_fn(|r: &&Value| r["team"].clone())).unwrap();
    let by_key = group_by_key(&input, |r| r.get("team").cloned()).unwrap();

    assert_eq!(by_field, by_fn);
    assert_eq!(by_field, by_key);
}

#[test]
fn test_empty() {
    let input: Vec<Value> = vec![];
    let grouped = group_by(input, "team").unwrap();
    assert!(grouped.is_empty());
    assert_eq!(grouped.record_count(), 0);
}

#[test]
fn test_single_record() {
    let input = vec![json!({ "team": "green" })];
    let grouped = group_by(&input, "team").unwrap();

    assert_eq!(grouped.len(), 1);
    assert_eq!(grouped.bucket("green").unwrap(), &[&input[0]]);
}

#[test]
fn test_single_group_keeps_order() {
    let input: Vec<Value> = (0..20).map(|i| json!({ "id": i, "team": "solo" })).collect();
    let grouped = group_by(&input, "team").unwrap();

    assert_eq!(grouped.len(), 1);
    let ids: Vec<i64> = grouped
        .bucket("solo")
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, (0..20).collect::<Vec<_>>());
}

#[test]
fn test_missing_field_is_its_own_group() {
    let input = vec![
        json!({ "word": "orange" }),
        json!({ "word": "cat", "numSyllables": 1 }),
        json!({ "word": "door hinge" }),
    ];

    let grouped = group_by(&input, "numSyllables").unwrap();

    let keys: Vec<&GroupKey> = grouped.keys().collect();
    assert_eq!(keys, vec![&GroupKey::Int(1), &GroupKey::Missing]);
    assert_eq!(
        grouped.get(&GroupKey::Missing).unwrap(),
        &[&input[0], &input[2]]
    );
}

#[test]
fn test_non_object_records_have_no_fields() {
    let input = vec![json!(1), json!("text"), json!({ "team": "blue" })];
    let grouped = group_by(&input, "team").unwrap();

    assert_eq!(grouped.bucket("blue").unwrap().len(), 1);
    assert_eq!(grouped.get(&GroupKey::Missing).unwrap().len(), 2);
}

#[test]
fn test_numbers_sort_numerically() {
    let input: Vec<Value> = [10, 2, 33, 1, 2]
        .iter()
        .map(|n| json!({ "numSyllables": n }))
        .collect();

    let grouped = group_by(&input, "numSyllables").unwrap();
    let keys: Vec<f64> = grouped.keys().filter_map(GroupKey::as_f64).collect();
    assert_eq!(keys, vec![1.0, 2.0, 10.0, 33.0]);
}

#[test]
fn test_invalid_selector() {
    let err = KeySelector::<Value>::from_json(&json!(42)).unwrap_err();
    assert!(matches!(err, GroupError::InvalidSelector { .. }));
    assert!(err.to_string().contains("a number"));

    let selector = KeySelector::<Value>::try_from(&json!("team")).unwrap();
    let grouped = group_by(teams(), selector).unwrap();
    assert_eq!(grouped.len(), 2);
}

#[test]
fn test_word_entries_by_syllables() {
    let input = vec![
        WordEntry::new("forgettable").with_syllables(4),
        WordEntry::new("hat").with_syllables(1),
        WordEntry::new("unset"),
    ];

    let grouped = group_by(&input, "numSyllables").unwrap();
    let keys: Vec<String> = grouped.keys().map(ToString::to_string).collect();
    assert_eq!(keys, vec!["1", "4", "missing"]);
}

#[test]
fn test_owned_buckets() {
    let grouped = group_by_key(vec!["cat", "syllable", "dog"], |w| w.len()).unwrap();
    let buckets: Vec<(GroupKey, Vec<&str>)> = grouped.into_iter().collect();

    assert_eq!(
        buckets,
        vec![
            (GroupKey::from(3), vec!["cat", "dog"]),
            (GroupKey::from(8), vec!["syllable"]),
        ]
    );
}

#[test]
fn test_serializes_in_key_order() {
    let grouped = group_by(teams(), "team").unwrap();
    let text = serde_json::to_string(&grouped).unwrap();

    assert!(text.starts_with(r#"{"blue":[{"#));
    assert!(text.find("\"blue\"").unwrap() < text.find("\"red\"").unwrap());
}

#[test]
fn test_fuzz_random_against_btreemap() {
    let mut rng = rand::rng();

    for _ in 0..1_000 {
        let count = rng.random_range(0..200);
        let input: Vec<(u8, usize)> = (0..count)
            .map(|i| (rng.random_range(0..16u8), i))
            .collect();

        let mut expected: BTreeMap<u8, Vec<(u8, usize)>> = BTreeMap::new();
        for item in &input {
            expected.entry(item.0).or_default().push(*item);
        }

        let grouped = group_by_key(input.clone(), |item| item.0).unwrap();

        let actual: Vec<(f64, Vec<(u8, usize)>)> = grouped
            .into_iter()
            .map(|(key, bucket)| (key.as_f64().unwrap(), bucket))
            .collect();
        let expected: Vec<(f64, Vec<(u8, usize)>)> = expected
            .into_iter()
            .map(|(key, bucket)| (f64::from(key), bucket))
            .collect();

        assert_eq!(actual, expected);
    }
}
