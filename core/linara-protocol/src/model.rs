use rkyv::{Archive, Deserialize, Serialize};
use crate::morphology::Category;
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// One English lemma and its Linara root.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct LexiconEntry {
    pub category: Category,
    pub lemma: String,
    pub root: String,
}

impl LexiconEntry {
    pub fn new(category: Category, lemma: impl Into<String>, root: impl Into<String>) -> Self {
        Self {
            category,
            lemma: lemma.into(),
            root: root.into(),
        }
    }
}

/// The four Linara affixes.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct MorphologyRules {
    pub past_suffix: String,
    pub future_suffix: String,
    pub plural_suffix: String,
    pub negation_prefix: String,
}

/// A fixed expression: English token sequence and its fixed Linara rendering.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Phrase {
    pub source: Vec<String>,
    pub target: String,
}

/// Function words the realizers emit that are not lexicon entries.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Markers {
    /// Linara sentence-final question particle.
    pub question_particle: String,
    pub future: String,
    pub past: String,
    pub negation: String,
}

/// Everything needed to translate between English and one constructed language.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct LanguagePack {
    pub version: u32,
    pub name: String,
    pub entries: Vec<LexiconEntry>,
    pub morphology: MorphologyRules,
    /// Checked before clause parsing; order is priority.
    pub phrases: Vec<Phrase>,
    /// Whole-sentence greeting questions and their canned responses.
    pub greeting_questions: Vec<Phrase>,
    pub markers: Markers,
}
