//! Closed English word classes the tagger checks after the lexicon.

use linara_protocol::Tense;

pub const GREETINGS: &[&str] = &["hello", "hi", "hey", "greetings", "goodbye", "bye"];

pub const AUXILIARIES: &[&str] = &[
    "will", "would", "shall", "did", "do", "does", "am", "is", "are", "was", "were", "had", "has",
    "have", "be", "been",
];

pub const NEGATIONS: &[&str] = &["not", "no", "never", "dont", "didnt"];

pub const WH_WORDS: &[&str] = &["what", "who", "where", "when", "why", "how", "which"];

pub const DETERMINERS: &[&str] = &["the", "a", "an"];

const COPULAS: &[&str] = &["am", "is", "are"];

pub fn is_greeting(word: &str) -> bool {
    GREETINGS.contains(&word)
}

pub fn is_auxiliary(word: &str) -> bool {
    AUXILIARIES.contains(&word)
}

pub fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word)
}

pub fn is_wh_word(word: &str) -> bool {
    WH_WORDS.contains(&word)
}

pub fn is_determiner(word: &str) -> bool {
    DETERMINERS.contains(&word)
}

pub fn is_copula(word: &str) -> bool {
    COPULAS.contains(&word)
}

/// Tense signalled by an auxiliary; anything unlisted reads as present.
pub fn auxiliary_tense(word: &str) -> Tense {
    match word {
        "will" | "would" | "shall" => Tense::Future,
        "did" | "was" | "were" | "had" | "has" | "have" => Tense::Past,
        _ => Tense::Present,
    }
}
