//! Word order, capitalization and terminal punctuation.

use crate::transform::{EnglishClause, LinaraClause};

/// `[Subject] [Object] [Adjectives...] [Verb]`
pub fn realize_linara(clause: &LinaraClause, leading: bool) -> Vec<String> {
    let words = clause
        .subject
        .iter()
        .chain(clause.object.iter())
        .chain(clause.adjectives.iter())
        .chain(clause.verb.iter())
        .cloned()
        .collect();
    lead(words, leading)
}

/// `[Subject] [Auxiliary] [Negation] [Verb] [Adjectives...] [Object]`
pub fn realize_english(clause: &EnglishClause, leading: bool) -> Vec<String> {
    let words = [&clause.subject, &clause.auxiliary, &clause.negation, &clause.verb]
        .into_iter()
        .flatten()
        .chain(clause.adjectives.iter())
        .chain(clause.object.iter())
        // The first-person pronoun is capitalized anywhere.
        .map(|w| if w == "i" { String::from("I") } else { w.clone() })
        .collect();
    lead(words, leading)
}

/// Splits a fixed translation into words.
pub fn fixed(text: &str, leading: bool) -> Vec<String> {
    lead(text.split_whitespace().map(String::from).collect(), leading)
}

/// Capitalizes the first word when it opens the sentence.
pub fn lead(mut words: Vec<String>, leading: bool) -> Vec<String> {
    if leading {
        if let Some(first) = words.first_mut() {
            *first = capitalize(first);
        }
    }
    words
}

pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn finish(words: &[String], terminator: char) -> String {
    let mut sentence = words.join(" ");
    sentence.push(terminator);
    sentence
}
