//! English inflection: naive number handling, lemmatization, pronoun case.

use alloc::string::String;
use alloc::vec::Vec;

use linara_protocol::Tense;

/// Irregular forms: (surface, lemma, implied tense).
const IRREGULAR_VERBS: &[(&str, &str, Option<Tense>)] = &[
    ("ate", "eat", Some(Tense::Past)),
    ("eaten", "eat", Some(Tense::Past)),
    ("drank", "drink", Some(Tense::Past)),
    ("drunk", "drink", Some(Tense::Past)),
    ("saw", "see", Some(Tense::Past)),
    ("seen", "see", Some(Tense::Past)),
    ("went", "go", Some(Tense::Past)),
    ("gone", "go", Some(Tense::Past)),
    ("goes", "go", None),
    ("came", "come", Some(Tense::Past)),
    ("slept", "sleep", Some(Tense::Past)),
    ("spoke", "speak", Some(Tense::Past)),
    ("spoken", "speak", Some(Tense::Past)),
    ("knew", "know", Some(Tense::Past)),
    ("known", "know", Some(Tense::Past)),
    ("made", "make", Some(Tense::Past)),
];

// Checked in order; "-ed" implies past.
const VERB_SUFFIXES: &[(&str, Option<Tense>)] = &[
    ("ing", None),
    ("ed", Some(Tense::Past)),
    ("es", None),
    ("s", None),
];

const PRONOUN_CASES: &[(&str, &str)] = &[
    ("i", "me"),
    ("he", "him"),
    ("she", "her"),
    ("we", "us"),
    ("they", "them"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inflection {
    pub lemma: String,
    pub tense: Option<Tense>,
}

/// Naive plural detection: ends with "s" but not "is".
pub fn is_plural(word: &str) -> bool {
    word.ends_with('s') && !word.ends_with("is")
}

/// Naive pluralization: `y` -> `ies`, trailing `s` -> `+es`, else `+s`.
pub fn pluralize(word: &str) -> String {
    if let Some(stem) = word.strip_suffix('y') {
        format!("{}ies", stem)
    } else if word.ends_with('s') {
        format!("{}es", word)
    } else {
        format!("{}s", word)
    }
}

/// Singular forms worth trying for a plural-looking word, most likely first.
pub fn singular_candidates(word: &str) -> Vec<String> {
    let mut out = Vec::new();
    if !is_plural(word) {
        return out;
    }
    if let Some(stem) = word.strip_suffix("ies").filter(|s| !s.is_empty()) {
        out.push(format!("{}y", stem));
    }
    if let Some(stem) = word.strip_suffix('s').filter(|s| !s.is_empty()) {
        out.push(String::from(stem));
    }
    if let Some(stem) = word.strip_suffix("es").filter(|s| !s.is_empty()) {
        out.push(String::from(stem));
    }
    out
}

/// Picks the first known singular form, falling back to dropping the final "s".
pub fn singularize<F>(word: &str, is_known: F) -> String
where
    F: Fn(&str) -> bool,
{
    let candidates = singular_candidates(word);
    if let Some(known) = candidates.iter().find(|c| is_known(c.as_str())) {
        return known.clone();
    }
    match word.strip_suffix('s') {
        Some(stem) if is_plural(word) && !stem.is_empty() => String::from(stem),
        _ => String::from(word),
    }
}

/// Irregular table first, then suffix stripping (`-ing`, `-ed`, `-es`, `-s`).
///
/// A stripped stem is only accepted when `is_known` recognizes it (trying the
/// bare stem, stem + "e", and an undoubled final consonant); otherwise the
/// word is returned unchanged.
pub fn lemmatize<F>(word: &str, is_known: F) -> Inflection
where
    F: Fn(&str) -> bool,
{
    if let Some(&(_, lemma, tense)) = IRREGULAR_VERBS.iter().find(|(form, _, _)| *form == word) {
        return Inflection {
            lemma: String::from(lemma),
            tense,
        };
    }

    if is_known(word) {
        return Inflection {
            lemma: String::from(word),
            tense: None,
        };
    }

    for &(suffix, tense) in VERB_SUFFIXES {
        let stem = match word.strip_suffix(suffix) {
            Some(stem) if stem.chars().count() >= 2 => stem,
            _ => continue,
        };
        if let Some(lemma) = stem_candidates(stem).into_iter().find(|c| is_known(c.as_str())) {
            return Inflection { lemma, tense };
        }
    }

    Inflection {
        lemma: String::from(word),
        tense: None,
    }
}

fn stem_candidates(stem: &str) -> Vec<String> {
    let mut out = vec![String::from(stem), format!("{}e", stem)];
    // Doubled final consonant: "running" -> "runn" -> "run".
    let mut tail = stem.chars().rev();
    if let (Some(last), Some(prev)) = (tail.next(), tail.next()) {
        if last == prev && stem.chars().count() >= 3 {
            out.push(String::from(&stem[..stem.len() - last.len_utf8()]));
        }
    }
    out
}

/// Maps an object-case pronoun back to its lemma (`me` -> `i`).
pub fn nominative(word: &str) -> Option<&'static str> {
    PRONOUN_CASES
        .iter()
        .find(|(_, object)| *object == word)
        .map(|(subject, _)| *subject)
}

/// Object-case form of a pronoun lemma (`i` -> `me`).
pub fn accusative(lemma: &str) -> Option<&'static str> {
    PRONOUN_CASES
        .iter()
        .find(|(subject, _)| *subject == lemma)
        .map(|(_, object)| *object)
}

/// Present-tense form of "to be" agreeing with `subject`.
pub fn copula(subject: &str, plural: bool) -> &'static str {
    match subject {
        "i" => "am",
        "you" | "we" | "they" => "are",
        _ if plural => "are",
        _ => "is",
    }
}
