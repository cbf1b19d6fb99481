use alloc::collections::BTreeMap;
use alloc::string::String;

use core::fmt;

use crate::model::{LanguagePack, Markers, MorphologyRules, Phrase};
use crate::morphology::Category;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconError {
    /// A lemma was registered under two different categories.
    OverlappingCategories {
        lemma: String,
        first: Category,
        second: Category,
    },
    EmptyAffix(&'static str),
    /// One tense suffix ends with the other, so decoding could not tell them apart.
    AmbiguousTenseSuffixes { past: String, future: String },
    InvalidArchive(String),
}

impl fmt::Display for LexiconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexiconError::OverlappingCategories { lemma, first, second } => write!(
                f,
                "lemma '{}' is listed as both {} and {}",
                lemma,
                first.name(),
                second.name()
            ),
            LexiconError::EmptyAffix(which) => write!(f, "morphology rule '{}' is empty", which),
            LexiconError::AmbiguousTenseSuffixes { past, future } => write!(
                f,
                "tense suffixes '{}' (past) and '{}' (future) overlap",
                past, future
            ),
            LexiconError::InvalidArchive(reason) => write!(f, "invalid language pack archive: {}", reason),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LexiconError {}

type Table = BTreeMap<String, String>;

/// Forward (lemma -> root) and reverse (root -> lemma) tables per category,
/// built once from a [`LanguagePack`] and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Lexicon {
    pack: LanguagePack,
    forward: [Table; 5],
    reverse: [Table; 5],
}

impl Lexicon {
    pub fn build(pack: LanguagePack) -> Result<Self, LexiconError> {
        validate_morphology(&pack.morphology)?;

        let mut forward: [Table; 5] = Default::default();
        let mut reverse: [Table; 5] = Default::default();

        for entry in &pack.entries {
            for other in Category::ALL {
                if other != entry.category && forward[other.index()].contains_key(&entry.lemma) {
                    return Err(LexiconError::OverlappingCategories {
                        lemma: entry.lemma.clone(),
                        first: other,
                        second: entry.category,
                    });
                }
            }

            let idx = entry.category.index();
            forward[idx].insert(entry.lemma.clone(), entry.root.clone());
            // Root collisions: the entry processed last wins.
            reverse[idx].insert(entry.root.clone(), entry.lemma.clone());
        }

        Ok(Self { pack, forward, reverse })
    }

    pub fn lookup(&self, category: Category, lemma: &str) -> Option<&str> {
        self.forward[category.index()].get(lemma).map(String::as_str)
    }

    pub fn reverse(&self, category: Category, root: &str) -> Option<&str> {
        self.reverse[category.index()].get(root).map(String::as_str)
    }

    pub fn contains(&self, category: Category, lemma: &str) -> bool {
        self.forward[category.index()].contains_key(lemma)
    }

    pub fn is_root(&self, category: Category, root: &str) -> bool {
        self.reverse[category.index()].contains_key(root)
    }

    /// First category in `order` that knows `lemma`, with its root.
    pub fn lookup_any(&self, order: &[Category], lemma: &str) -> Option<(Category, &str)> {
        order
            .iter()
            .find_map(|&cat| self.lookup(cat, lemma).map(|root| (cat, root)))
    }

    /// First category in `order` whose reverse table knows `root`, with its lemma.
    pub fn reverse_any(&self, order: &[Category], root: &str) -> Option<(Category, &str)> {
        order
            .iter()
            .find_map(|&cat| self.reverse(cat, root).map(|lemma| (cat, lemma)))
    }

    pub fn entries(&self, category: Category) -> impl Iterator<Item = (&str, &str)> {
        self.forward[category.index()]
            .iter()
            .map(|(lemma, root)| (lemma.as_str(), root.as_str()))
    }

    pub fn morphology(&self) -> &MorphologyRules {
        &self.pack.morphology
    }

    pub fn phrases(&self) -> &[Phrase] {
        &self.pack.phrases
    }

    pub fn greeting_questions(&self) -> &[Phrase] {
        &self.pack.greeting_questions
    }

    pub fn markers(&self) -> &Markers {
        &self.pack.markers
    }

    pub fn pack(&self) -> &LanguagePack {
        &self.pack
    }
}

fn validate_morphology(rules: &MorphologyRules) -> Result<(), LexiconError> {
    let affixes = [
        ("past_suffix", &rules.past_suffix),
        ("future_suffix", &rules.future_suffix),
        ("plural_suffix", &rules.plural_suffix),
        ("negation_prefix", &rules.negation_prefix),
    ];
    for (name, affix) in affixes {
        if affix.is_empty() {
            return Err(LexiconError::EmptyAffix(name));
        }
    }

    if rules.past_suffix.ends_with(rules.future_suffix.as_str())
        || rules.future_suffix.ends_with(rules.past_suffix.as_str())
    {
        return Err(LexiconError::AmbiguousTenseSuffixes {
            past: rules.past_suffix.clone(),
            future: rules.future_suffix.clone(),
        });
    }

    Ok(())
}
