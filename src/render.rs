//! Turns Datamuse results into displayable views.

use std::fmt;

use serde::Serialize;

use crate::algo::group_by;
use crate::core::GroupKey;
use crate::error::GroupError;
use crate::words::{NUM_SYLLABLES, WordEntry};

pub const NO_RHYMES: &str = "No Rhymes";
pub const NO_SYNONYMS: &str = "No Synonyms";

/// `""` for exactly one, `"s"` otherwise.
pub fn pluralize<N>(count: N) -> &'static str
where
    N: PartialEq + From<u8>,
{
    if count == N::from(1) { "" } else { "s" }
}

/// Heading for a syllable-count group, e.g. `1 syllable` or `3 syllables`.
pub fn syllable_heading(key: &GroupKey) -> String {
    match key {
        GroupKey::Int(n) => format!("{key} syllable{}", pluralize(*n)),
        GroupKey::Number(n) => format!("{key} syllable{}", pluralize(*n)),
        GroupKey::Missing => "unknown syllables".to_string(),
        other => format!("{other} syllables"),
    }
}

/// A list of words under an optional heading.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Section {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    pub words: Vec<String>,
}

/// The rendered outcome of one lookup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum View {
    /// Nothing came back.
    Empty { message: String },
    Results {
        description: String,
        sections: Vec<Section>,
    },
}

impl View {
    /// Every word listed, in display order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        let sections: &[Section] = match self {
            View::Empty { .. } => &[],
            View::Results { sections, .. } => sections,
        };
        sections
            .iter()
            .flat_map(|section| section.words.iter().map(String::as_str))
    }

    pub fn contains_word(&self, word: &str) -> bool {
        self.words().any(|listed| listed == word)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Empty { message } => writeln!(f, "{message}"),
            View::Results {
                description,
                sections,
            } => {
                writeln!(f, "{description}")?;
                for section in sections {
                    writeln!(f)?;
                    if let Some(heading) = &section.heading {
                        writeln!(f, "{heading}")?;
                    }
                    for word in &section.words {
                        writeln!(f, "  {word}")?;
                    }
                }
                Ok(())
            }
        }
    }
}

/// Rhymes for `word`, one section per syllable count in ascending order.
pub fn rhymes_view(word: &str, entries: &[WordEntry]) -> Result<View, GroupError> {
    if entries.is_empty() {
        return Ok(View::Empty {
            message: NO_RHYMES.to_string(),
        });
    }

    let grouped = group_by(entries, NUM_SYLLABLES)?;
    let sections = grouped
        .iter()
        .map(|(key, bucket)| Section {
            heading: Some(syllable_heading(key)),
            words: bucket.iter().map(|entry| entry.word.clone()).collect(),
        })
        .collect();

    Ok(View::Results {
        description: format!("Words that rhyme with {word}"),
        sections,
    })
}

/// Words similar in meaning to `word`, in the order Datamuse ranked them.
pub fn similar_view(word: &str, entries: &[WordEntry]) -> View {
    if entries.is_empty() {
        return View::Empty {
            message: NO_SYNONYMS.to_string(),
        };
    }

    View::Results {
        description: format!("Words with similar meaning to {word}"),
        sections: vec![Section {
            heading: None,
            words: entries.iter().map(|entry| entry.word.clone()).collect(),
        }],
    }
}
