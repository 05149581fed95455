//! Grouping algorithm.
//!
//! Records are bucketed in one pass, keeping each bucket in input order, and the
//! distinct keys are then validated and sorted:
//! - **Bucketing**: an insertion-ordered map from key to bucket, created on first
//!   occurrence of a key and appended to afterwards.
//! - **Key validation**: all keys other than [`GroupKey::Missing`] must share one
//!   kind, and number keys must not be NaN.
//! - **Ordering**: a stable sort of the buckets by key, `Missing` last.
//!
//! The main entry points are [`group_by`] and [`group_by_key`].

use std::cmp::Ordering;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::core::{GroupKey, Record};
use crate::error::GroupError;
use crate::grouped::GroupedResult;
use crate::selector::KeySelector;

/// Groups `records` by a field name or key function.
///
/// The selector is normalised into a single key function before any record is
/// processed. Every record lands in exactly one bucket, buckets keep the input
/// order of their records, and the result iterates its keys in ascending order.
///
/// # Errors
///
/// Returns [`GroupError::KeyComparison`] when two derived keys cannot be ordered
/// (for example a number key and a text key). No partial result is produced.
///
/// # Examples
///
/// ```
/// use rhymebucket::{group_by, GroupKey};
/// use serde_json::json;
///
/// let players = vec![
///     json!({ "name": "Steve", "team": "blue" }),
///     json!({ "name": "Jack", "team": "red" }),
///     json!({ "name": "Carol", "team": "blue" }),
/// ];
///
/// let teams = group_by(&players, "team").unwrap();
///
/// let keys: Vec<String> = teams.keys().map(|k| k.to_string()).collect();
/// assert_eq!(keys, vec!["blue", "red"]);
/// assert_eq!(teams.bucket("blue").unwrap(), &[&players[0], &players[2]]);
/// ```
pub fn group_by<'f, I, S>(records: I, selector: S) -> Result<GroupedResult<I::Item>, GroupError>
where
    I: IntoIterator,
    I::Item: Record + 'f,
    S: Into<KeySelector<'f, I::Item>>,
{
    let key_of = selector.into().into_key_fn();
    partition(records, key_of)
}

/// Groups `records` by the key returned from `key_of`.
///
/// Unlike [`group_by`], the record type does not need to implement [`Record`].
///
/// # Examples
///
/// ```
/// use rhymebucket::group_by_key;
///
/// let words = vec!["cat", "syllable", "dog", "rhyme"];
/// let by_len = group_by_key(words, |w| w.len()).unwrap();
///
/// assert_eq!(by_len.bucket(3).unwrap(), &["cat", "dog"]);
/// assert_eq!(by_len.len(), 3);
/// ```
pub fn group_by_key<I, F, K>(records: I, key_of: F) -> Result<GroupedResult<I::Item>, GroupError>
where
    I: IntoIterator,
    F: Fn(&I::Item) -> K,
    K: Into<GroupKey>,
{
    partition(records, |record| key_of(record).into())
}

fn partition<I, F>(records: I, key_of: F) -> Result<GroupedResult<I::Item>, GroupError>
where
    I: IntoIterator,
    F: Fn(&I::Item) -> GroupKey,
{
    // Insertion ordered, so validation and tie-breaking follow first occurrence.
    let mut buckets: IndexMap<GroupKey, Vec<I::Item>> = IndexMap::new();
    let mut total = 0usize;

    for record in records {
        let key = key_of(&record);
        if let Some(bucket) = buckets.get_mut(&key) {
            bucket.push(record);
        } else {
            trace!(%key, "opening bucket");
            buckets.insert(key, vec![record]);
        }
        total += 1;
    }

    ensure_ordered(buckets.keys())?;
    buckets.sort_by(|a, _, b, _| compare_keys(a, b));

    debug!(records = total, buckets = buckets.len(), "grouped records");
    Ok(GroupedResult::from_sorted(buckets))
}

/// Checks that every pair of keys has a defined order.
///
/// Keys are checked in the order given, so the reported pair is the first
/// offending key together with the first key of a different kind.
pub fn ensure_ordered<'a, I>(keys: I) -> Result<(), GroupError>
where
    I: IntoIterator<Item = &'a GroupKey>,
{
    let mut anchor: Option<&GroupKey> = None;

    for key in keys {
        if key.is_missing() {
            continue;
        }
        // Only NaN fails to compare with itself.
        if key.partial_order(key).is_none() {
            return Err(GroupError::KeyComparison {
                left: key.to_string(),
                right: key.to_string(),
            });
        }
        match anchor {
            None => anchor = Some(key),
            Some(first) if first.kind() != key.kind() => {
                return Err(GroupError::KeyComparison {
                    left: first.to_string(),
                    right: key.to_string(),
                });
            }
            Some(_) => {}
        }
    }

    Ok(())
}

#[inline]
fn compare_keys(a: &GroupKey, b: &GroupKey) -> Ordering {
    // Validated by `ensure_ordered`; equal is unreachable for distinct keys.
    a.partial_order(b).unwrap_or(Ordering::Equal)
}
