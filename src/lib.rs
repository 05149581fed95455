//! # Rhymebucket
//!
//! `rhymebucket` groups records into buckets by a derived key and hands the buckets
//! back ordered by key. On top of that primitive it provides a small word lookup
//! layer for the [Datamuse](https://www.datamuse.com/api/) API: rhymes grouped by
//! syllable count, words with a similar meaning, and a session list of saved words.
//!
//! ## Key Features
//!
//! - **Stable partitioning**: every record lands in exactly one bucket, and buckets
//!   keep the input order of their records.
//! - **Ordered keys**: buckets come back in ascending key order. Keys that cannot be
//!   ordered against each other are reported as [`GroupError::KeyComparison`]
//!   instead of producing an arbitrary order.
//! - **Field or function selectors**: group by a field name through the [`Record`]
//!   trait, or by any function returning something convertible into a [`GroupKey`].
//!
//! ## Usage
//!
//! ### Grouping JSON records
//!
//! ```rust
//! use rhymebucket::group_by;
//! use serde_json::json;
//!
//! let words = vec![
//!     json!({ "word": "cat", "numSyllables": 1 }),
//!     json!({ "word": "syllable", "numSyllables": 3 }),
//!     json!({ "word": "dog", "numSyllables": 1 }),
//! ];
//!
//! let grouped = group_by(&words, "numSyllables").unwrap();
//!
//! let keys: Vec<String> = grouped.keys().map(|k| k.to_string()).collect();
//! assert_eq!(keys, vec!["1", "3"]);
//! assert_eq!(grouped.bucket(1).unwrap(), &[&words[0], &words[2]]);
//! ```
//!
//! ### Custom Types
//!
//! Types that are not field maps can be grouped with a key function:
//!
//! ```rust
//! use rhymebucket::group_by_key;
//!
//! struct Player {
//!     name: &'static str,
//!     score: u32,
//! }
//!
//! let players = vec![
//!     Player { name: "Steve", score: 12 },
//!     Player { name: "Jack", score: 7 },
//!     Player { name: "Carol", score: 15 },
//! ];
//!
//! let grouped = group_by_key(&players, |p| p.score >= 10).unwrap();
//!
//! let winners: Vec<&str> = grouped.bucket(true).unwrap().iter().map(|p| p.name).collect();
//! assert_eq!(winners, vec!["Steve", "Carol"]);
//! ```
//!
//! ### Looking words up
//!
//! With the default `client` feature, [`DatamuseClient`] fetches entries and
//! [`rhymes_view`] renders them:
//!
//! ```no_run
//! # async fn run() -> rhymebucket::Result<()> {
//! use rhymebucket::{rhymes_view, DatamuseClient, DatamuseConfig};
//!
//! let client = DatamuseClient::new(DatamuseConfig::default())?;
//! let entries = client.rhymes("cat").await?;
//! println!("{}", rhymes_view("cat", &entries)?);
//! # Ok(())
//! # }
//! ```

pub mod algo;
pub mod config;
pub mod core;
#[cfg(feature = "client")]
pub mod datamuse;
pub mod error;
pub mod grouped;
pub mod render;
pub mod saved;
pub mod selector;
pub mod words;

pub use algo::{group_by, group_by_key};
pub use config::DatamuseConfig;
pub use crate::core::{GroupKey, KeyKind, Record};
#[cfg(feature = "client")]
pub use datamuse::DatamuseClient;
pub use error::{Error, GroupError, Result};
pub use grouped::GroupedResult;
pub use render::{Section, View, pluralize, rhymes_view, similar_view, syllable_heading};
pub use saved::SavedWords;
pub use selector::KeySelector;
pub use words::{Relation, WordEntry};

pub mod prelude {
    pub use crate::algo::{group_by, group_by_key};
    pub use crate::core::{GroupKey, Record};
    pub use crate::grouped::GroupedResult;
    pub use crate::selector::KeySelector;
}
