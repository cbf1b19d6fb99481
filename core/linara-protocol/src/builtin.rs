//! The built-in English ⇄ Linara language pack.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::model::{LanguagePack, LexiconEntry, Markers, MorphologyRules, Phrase};
use crate::morphology::Category;

const PRONOUNS: &[(&str, &str)] = &[
    ("i", "mi"),
    ("you", "ta"),
    ("he", "ro"),
    ("she", "sa"),
    ("it", "ko"),
    ("we", "mira"),
    ("they", "tira"),
];

const NOUNS: &[(&str, &str)] = &[
    ("house", "palo"),
    ("water", "nalu"),
    ("friend", "suni"),
    ("food", "kera"),
    ("day", "dina"),
    ("night", "noka"),
    ("city", "siro"),
    ("book", "libo"),
    ("name", "nomi"),
    ("world", "vira"),
];

// Roots must not end in a tense suffix ("ta", "lo").
const VERBS: &[(&str, &str)] = &[
    ("eat", "kema"),
    ("drink", "nema"),
    ("see", "liso"),
    ("go", "vani"),
    ("come", "ravi"),
    ("sleep", "soma"),
    ("speak", "tari"),
    ("read", "lesa"),
    ("love", "amira"),
    ("know", "savi"),
    ("like", "piri"),
    ("want", "voli"),
    ("make", "feri"),
];

const ADJECTIVES: &[(&str, &str)] = &[
    ("good", "meli"),
    ("bad", "sari"),
    ("big", "tova"),
    ("small", "neli"),
    ("happy", "joli"),
    ("new", "novi"),
    ("old", "vera"),
];

// "hello" comes last among the greetings so "sava" decodes to it.
const PARTICLES: &[(&str, &str)] = &[
    ("hi", "sava"),
    ("hey", "sava"),
    ("greetings", "sava"),
    ("hello", "sava"),
    ("bye", "salo"),
    ("goodbye", "salo"),
    ("yes", "si"),
    ("please", "pora"),
    ("thanks", "grasi"),
];

const PHRASES: &[(&[&str], &str)] = &[
    (&["thank", "you"], "grasi"),
    (&["thanks"], "grasi"),
    (&["good", "morning"], "meli dina"),
    (&["good", "night"], "meli noka"),
    (&["see", "you", "later"], "salo ta"),
    (&["please"], "pora"),
    (&["yes"], "si"),
];

const GREETING_QUESTIONS: &[(&[&str], &str)] = &[
    (&["how", "are", "you"], "ta meli"),
    (&["how", "is", "it", "going"], "ko meli"),
];

pub fn linara() -> LanguagePack {
    let tables = [
        (Category::Pronoun, PRONOUNS),
        (Category::Noun, NOUNS),
        (Category::Verb, VERBS),
        (Category::Adjective, ADJECTIVES),
        (Category::Particle, PARTICLES),
    ];

    let entries = tables
        .iter()
        .flat_map(|&(category, pairs)| {
            pairs
                .iter()
                .map(move |&(lemma, root)| LexiconEntry::new(category, lemma, root))
        })
        .collect();

    LanguagePack {
        version: 1,
        name: "linara".to_string(),
        entries,
        morphology: MorphologyRules {
            past_suffix: "ta".to_string(),
            future_suffix: "lo".to_string(),
            plural_suffix: "n".to_string(),
            negation_prefix: "ma".to_string(),
        },
        phrases: phrases(PHRASES),
        greeting_questions: phrases(GREETING_QUESTIONS),
        markers: Markers {
            question_particle: "ka".to_string(),
            future: "will".to_string(),
            past: "did".to_string(),
            negation: "not".to_string(),
        },
    }
}

fn phrases(table: &[(&[&str], &str)]) -> Vec<Phrase> {
    table
        .iter()
        .map(|&(source, target)| Phrase {
            source: source.iter().map(|w| String::from(*w)).collect(),
            target: target.to_string(),
        })
        .collect()
}
