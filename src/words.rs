//! Datamuse word entries.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::{GroupKey, Record};

/// Field holding the syllable count of a [`WordEntry`].
pub const NUM_SYLLABLES: &str = "numSyllables";

/// One entry of a Datamuse `/words` response.
///
/// Every field is optional on the wire; unknown fields are kept in `extra` so
/// they stay available to field-name grouping.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WordEntry {
    #[serde(default)]
    pub word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u64>,
    #[serde(
        rename = "numSyllables",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub num_syllables: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WordEntry {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            ..Self::default()
        }
    }

    pub fn with_syllables(mut self, count: u32) -> Self {
        self.num_syllables = Some(count);
        self
    }

    pub fn with_score(mut self, score: u64) -> Self {
        self.score = Some(score);
        self
    }
}

impl Record for WordEntry {
    fn field(&self, name: &str) -> GroupKey {
        match name {
            "word" => GroupKey::from(&self.word),
            "score" => self.score.into(),
            NUM_SYLLABLES => self.num_syllables.into(),
            other => self.extra.field(other),
        }
    }
}

/// The kind of word relation to look up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Relation {
    /// Perfect rhymes.
    Rhyme,
    /// Words with a similar meaning.
    MeansLike,
}

impl Relation {
    /// The Datamuse query parameter for this relation.
    pub fn query_param(self) -> &'static str {
        match self {
            Relation::Rhyme => "rel_rhy",
            Relation::MeansLike => "ml",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relation::Rhyme => f.write_str("rhymes"),
            Relation::MeansLike => f.write_str("similar"),
        }
    }
}
