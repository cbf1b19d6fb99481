//! Linara affixation: tense suffixes, the negation prefix and the plural suffix.

use alloc::string::String;

use linara_protocol::{MorphFlags, MorphologyRules, Tense};

/// A decoded Linara word: the bare root plus the features its affixes carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub stem: String,
    pub flags: MorphFlags,
}

impl Analysis {
    fn bare(stem: &str, flags: MorphFlags) -> Self {
        Self {
            stem: String::from(stem),
            flags,
        }
    }
}

/// Builds a verb form: the tense suffix goes on first, then the negation
/// prefix wraps the suffixed root (`kema` + past + negated = `ma-kemata`).
pub fn generate_verb(root: &str, flags: MorphFlags, rules: &MorphologyRules) -> String {
    let mut form = String::from(root);
    match flags.tense() {
        Tense::Present => {}
        Tense::Past => form.push_str(&rules.past_suffix),
        Tense::Future => form.push_str(&rules.future_suffix),
    }

    if flags.contains(MorphFlags::NEGATED) {
        form = format!("{}-{}", rules.negation_prefix, form);
    }
    form
}

pub fn generate_noun(root: &str, flags: MorphFlags, rules: &MorphologyRules) -> String {
    if flags.contains(MorphFlags::PLURAL) {
        format!("{}{}", root, rules.plural_suffix)
    } else {
        String::from(root)
    }
}

/// Strips the negation prefix, then the future suffix, else the past suffix.
///
/// A word that is already a known root keeps its ending, so roots that happen
/// to end like a tense suffix are not mangled.
pub fn analyze_verb<F>(token: &str, rules: &MorphologyRules, is_root: F) -> Analysis
where
    F: Fn(&str) -> bool,
{
    let mut flags = MorphFlags::empty();
    let mut rest = token;

    if let Some(stripped) = strip_negation(token, rules) {
        flags |= MorphFlags::NEGATED;
        rest = stripped;
    }

    if is_root(rest) {
        return Analysis::bare(rest, flags | MorphFlags::PRESENT);
    }

    if let Some(stem) = strip_suffix_nonempty(rest, &rules.future_suffix) {
        Analysis::bare(stem, flags | MorphFlags::FUTURE)
    } else if let Some(stem) = strip_suffix_nonempty(rest, &rules.past_suffix) {
        Analysis::bare(stem, flags | MorphFlags::PAST)
    } else {
        Analysis::bare(rest, flags | MorphFlags::PRESENT)
    }
}

/// Strips the plural suffix when what remains is a known root, or when
/// `strip_unknown` allows guessing for words outside the lexicon.
pub fn analyze_noun<F>(token: &str, rules: &MorphologyRules, is_root: F, strip_unknown: bool) -> Analysis
where
    F: Fn(&str) -> bool,
{
    if is_root(token) {
        return Analysis::bare(token, MorphFlags::empty());
    }

    match strip_suffix_nonempty(token, &rules.plural_suffix) {
        Some(stem) if strip_unknown || is_root(stem) => Analysis::bare(stem, MorphFlags::PLURAL),
        _ => Analysis::bare(token, MorphFlags::empty()),
    }
}

fn strip_negation<'a>(token: &'a str, rules: &MorphologyRules) -> Option<&'a str> {
    token
        .strip_prefix(rules.negation_prefix.as_str())
        .and_then(|rest| rest.strip_prefix('-'))
        .filter(|rest| !rest.is_empty())
}

fn strip_suffix_nonempty<'a>(token: &'a str, suffix: &str) -> Option<&'a str> {
    token.strip_suffix(suffix).filter(|stem| !stem.is_empty())
}
