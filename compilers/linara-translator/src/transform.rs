//! Clause-level morphology: a parsed [`ClauseDraft`] becomes the words of the
//! other language, still in slot form.

use linara_morph::{analyze_noun, analyze_verb, english, generate_noun, generate_verb};
use linara_parser::syntax::{ClauseDraft, Word};
use linara_protocol::{Category, Lexicon, MorphFlags, Tense};

const SUBJECT_ORDER: [Category; 2] = [Category::Pronoun, Category::Noun];
const OBJECT_ORDER: [Category; 2] = [Category::Noun, Category::Pronoun];

/// Linara slots, rendered subject-object-verb.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinaraClause {
    pub subject: Option<String>,
    pub object: Option<String>,
    pub adjectives: Vec<String>,
    pub verb: Option<String>,
}

/// English slots, rendered subject-verb-object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnglishClause {
    pub subject: Option<String>,
    pub auxiliary: Option<String>,
    pub negation: Option<String>,
    pub verb: Option<String>,
    pub adjectives: Vec<String>,
    pub object: Option<String>,
}

pub fn encode_clause(draft: &ClauseDraft, lexicon: &Lexicon) -> LinaraClause {
    LinaraClause {
        subject: draft
            .subject
            .as_ref()
            .map(|w| encode_nominal(w, draft.subject_plural, &SUBJECT_ORDER, lexicon)),
        object: draft
            .object
            .as_ref()
            .map(|w| encode_nominal(w, draft.object_plural, &OBJECT_ORDER, lexicon)),
        adjectives: draft
            .adjectives
            .iter()
            .map(|w| root_or_surface(lexicon.lookup(Category::Adjective, &w.lemma), w))
            .collect(),
        verb: draft.verb.as_ref().map(|w| encode_verb(w, draft, lexicon)),
    }
}

fn encode_nominal(word: &Word, plural: bool, order: &[Category], lexicon: &Lexicon) -> String {
    if word.name {
        return word.surface.clone();
    }
    let root = root_or_surface(lexicon.lookup_any(order, &word.lemma).map(|(_, root)| root), word);
    let flags = if plural { MorphFlags::PLURAL } else { MorphFlags::empty() };
    generate_noun(&root, flags, lexicon.morphology())
}

/// Unknown verbs still take tense and negation affixes.
fn encode_verb(word: &Word, draft: &ClauseDraft, lexicon: &Lexicon) -> String {
    let root = root_or_surface(lexicon.lookup(Category::Verb, &word.lemma), word);
    let mut flags = draft.tense().flags();
    if draft.negated {
        flags |= MorphFlags::NEGATED;
    }
    generate_verb(&root, flags, lexicon.morphology())
}

fn root_or_surface(root: Option<&str>, word: &Word) -> String {
    root.map_or_else(|| word.surface.clone(), String::from)
}

/// An English reading of a Linara nominal.
struct Gloss {
    text: String,
    pronoun: bool,
    plural: bool,
}

pub fn decode_clause(draft: &ClauseDraft, lexicon: &Lexicon) -> EnglishClause {
    let subject = draft.subject.as_ref().map(|w| gloss_nominal(w, lexicon));
    let markers = lexicon.markers();

    let Some(verb) = draft.verb.as_ref() else {
        return EnglishClause {
            subject: subject.map(|g| g.text),
            adjectives: decode_adjectives(draft, lexicon),
            object: draft.object.as_ref().map(|w| object_text(gloss_nominal(w, lexicon))),
            ..EnglishClause::default()
        };
    };

    let analysis = analyze_verb(&verb.lemma, lexicon.morphology(), |r| {
        lexicon.is_root(Category::Verb, r)
    });

    // "Mi Nyxen": a name in verb position reads as "I am Nyxen".
    if draft.object.is_none() && verb.name && !lexicon.is_root(Category::Verb, &analysis.stem) {
        let copula = subject
            .as_ref()
            .map_or("is", |g| english::copula(&g.text, g.plural));
        return EnglishClause {
            subject: subject.map(|g| g.text),
            verb: Some(copula.to_string()),
            object: Some(verb.surface.clone()),
            ..EnglishClause::default()
        };
    }

    let auxiliary = match analysis.flags.tense() {
        Tense::Present => None,
        Tense::Past => Some(markers.past.clone()),
        Tense::Future => Some(markers.future.clone()),
    };
    let negation = analysis
        .flags
        .contains(MorphFlags::NEGATED)
        .then(|| markers.negation.clone());
    let verb_text = lexicon
        .reverse(Category::Verb, &analysis.stem)
        .or_else(|| lexicon.reverse_any(&Category::NOMINAL, &analysis.stem).map(|(_, lemma)| lemma))
        .unwrap_or(&analysis.stem)
        .to_string();

    EnglishClause {
        subject: subject.map(|g| g.text),
        auxiliary,
        negation,
        verb: Some(verb_text),
        adjectives: decode_adjectives(draft, lexicon),
        object: draft.object.as_ref().map(|w| object_text(gloss_nominal(w, lexicon))),
    }
}

fn decode_adjectives(draft: &ClauseDraft, lexicon: &Lexicon) -> Vec<String> {
    draft
        .adjectives
        .iter()
        .map(|w| {
            lexicon
                .reverse(Category::Adjective, &w.lemma)
                .or_else(|| lexicon.reverse_any(&Category::NOMINAL, &w.lemma).map(|(_, lemma)| lemma))
                .map_or_else(|| w.surface.clone(), String::from)
        })
        .collect()
}

/// Known roots first; otherwise the plural suffix is stripped when the rest
/// is a known noun, or when the word is neither known nor a name.
fn gloss_nominal(word: &Word, lexicon: &Lexicon) -> Gloss {
    if let Some((category, lemma)) = lexicon.reverse_any(&Category::NOMINAL, &word.lemma) {
        return Gloss {
            text: lemma.to_string(),
            pronoun: category == Category::Pronoun,
            plural: false,
        };
    }

    let analysis = analyze_noun(
        &word.lemma,
        lexicon.morphology(),
        |r| lexicon.is_root(Category::Noun, r),
        !word.name,
    );
    if analysis.flags.contains(MorphFlags::PLURAL) {
        let singular = lexicon.reverse(Category::Noun, &analysis.stem).unwrap_or(&analysis.stem);
        return Gloss {
            text: english::pluralize(singular),
            pronoun: false,
            plural: true,
        };
    }

    Gloss {
        text: if word.name { word.surface.clone() } else { word.lemma.clone() },
        pronoun: false,
        plural: false,
    }
}

fn object_text(gloss: Gloss) -> String {
    if gloss.pronoun {
        if let Some(form) = english::accusative(&gloss.text) {
            return form.to_string();
        }
    }
    gloss.text
}
