//! The key-ordered result of a grouping.

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::core::GroupKey;

/// Buckets of records keyed by [`GroupKey`], iterated in ascending key order.
#[derive(Clone, Debug)]
pub struct GroupedResult<R> {
    buckets: IndexMap<GroupKey, Vec<R>>,
}

impl<R> GroupedResult<R> {
    pub(crate) fn from_sorted(buckets: IndexMap<GroupKey, Vec<R>>) -> Self {
        Self { buckets }
    }

    /// Number of buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of records across all buckets.
    pub fn record_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn keys(&self) -> impl Iterator<Item = &GroupKey> {
        self.buckets.keys()
    }

    pub fn get(&self, key: &GroupKey) -> Option<&[R]> {
        self.buckets.get(key).map(Vec::as_slice)
    }

    /// Like [`get`](Self::get), converting `key` first.
    pub fn bucket(&self, key: impl Into<GroupKey>) -> Option<&[R]> {
        self.get(&key.into())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&GroupKey, &[R])> {
        self.buckets.iter().map(|(key, bucket)| (key, bucket.as_slice()))
    }

    pub fn into_inner(self) -> IndexMap<GroupKey, Vec<R>> {
        self.buckets
    }
}

// Order sensitive, unlike `IndexMap` equality.
impl<R: PartialEq> PartialEq for GroupedResult<R> {
    fn eq(&self, other: &Self) -> bool {
        self.buckets.iter().eq(other.buckets.iter())
    }
}

impl<R> IntoIterator for GroupedResult<R> {
    type Item = (GroupKey, Vec<R>);
    type IntoIter = indexmap::map::IntoIter<GroupKey, Vec<R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.into_iter()
    }
}

impl<'a, R> IntoIterator for &'a GroupedResult<R> {
    type Item = (&'a GroupKey, &'a Vec<R>);
    type IntoIter = indexmap::map::Iter<'a, GroupKey, Vec<R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.iter()
    }
}

/// Serializes as a map from the key's display text to its bucket, in key order.
impl<R: Serialize> Serialize for GroupedResult<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.buckets.len()))?;
        for (key, bucket) in &self.buckets {
            map.serialize_entry(&key.to_string(), bucket)?;
        }
        map.end()
    }
}
