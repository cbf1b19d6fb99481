use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{multispace0, one_of},
    combinator::map,
    IResult,
};
use crate::token::{Span, Token};

const SENTENCE_PUNCTUATION: &str = ".,;:!?";

/// Expanded case-insensitively, whole words only.
const CONTRACTIONS: &[(&str, &str)] = &[
    ("i'm", "i am"),
    ("you're", "you are"),
    ("we're", "we are"),
    ("they're", "they are"),
    ("he's", "he is"),
    ("she's", "she is"),
    ("it's", "it is"),
    ("that's", "that is"),
    ("what's", "what is"),
    ("don't", "do not"),
    ("doesn't", "does not"),
    ("didn't", "did not"),
    ("won't", "will not"),
    ("can't", "can not"),
    ("isn't", "is not"),
    ("aren't", "are not"),
    ("wasn't", "was not"),
    ("weren't", "were not"),
    ("haven't", "have not"),
    ("hasn't", "has not"),
    ("i'll", "i will"),
    ("you'll", "you will"),
    ("we'll", "we will"),
    ("they'll", "they will"),
    ("i've", "i have"),
    ("you've", "you have"),
    ("we've", "we have"),
    ("they've", "they have"),
];

/// Letters plus the apostrophes and hyphens that live inside words
/// (`o'clock`, `ma-kema`).
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '\'' || c == '-'
}

#[derive(Debug, Clone, PartialEq)]
pub enum RawToken<'a> {
    Word(&'a str),
    Punct(char),
}

/// A normalized sentence: its word tokens and whether it was a question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sentence {
    pub tokens: Vec<Token>,
    pub question: bool,
}

impl Sentence {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Raw text -> word tokens.
///
/// A trailing `?` sets the question flag and is removed; contractions are
/// expanded; punctuation is split off and dropped along with anything that
/// normalizes to nothing.
pub fn normalize(input: &str) -> Sentence {
    let (body, question) = split_question(input);
    if body.trim().is_empty() {
        return Sentence { tokens: Vec::new(), question };
    }

    let expanded = expand_contractions(body);
    let tokens = parse_with_spans(&expanded)
        .into_iter()
        .filter_map(|(span, raw)| match raw {
            RawToken::Word(word) => word_token(span, word),
            RawToken::Punct(_) => None,
        })
        .collect();

    Sentence { tokens, question }
}

fn word_token(span: Span, word: &str) -> Option<Token> {
    let surface = word.trim_matches(|c: char| c == '\'' || c == '-');
    let normalized = normalize_word(surface);
    if normalized.is_empty() {
        return None;
    }
    Some(Token {
        span,
        surface: surface.to_string(),
        normalized,
    })
}

/// Lowercase, keeping only letters, apostrophes and hyphens.
pub fn normalize_word(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_alphabetic() || *c == '\'' || *c == '-')
        .flat_map(char::to_lowercase)
        .collect::<String>()
        .trim_matches(|c: char| c == '\'' || c == '-')
        .to_string()
}

/// Strips a trailing question mark (ignoring closing quotes/brackets).
pub fn split_question(input: &str) -> (&str, bool) {
    let trimmed = input.trim_end_matches(|c: char| c.is_whitespace() || matches!(c, '"' | '\'' | ')' | ']'));
    match trimmed.strip_suffix('?') {
        Some(body) => (body.trim_end_matches('?'), true),
        None => (input, false),
    }
}

pub fn expand_contractions(input: &str) -> String {
    input
        .replace('\u{2019}', "'")
        .split_whitespace()
        .map(expand_chunk)
        .collect::<Vec<_>>()
        .join(" ")
}

fn expand_chunk(chunk: &str) -> String {
    let keep = |c: char| c.is_alphanumeric() || c == '\'';
    let (start, end) = match (chunk.find(keep), chunk.rfind(keep)) {
        (Some(start), Some(end)) => (start, end + chunk[end..].chars().next().map_or(1, char::len_utf8)),
        _ => return chunk.to_string(),
    };

    let core = &chunk[start..end];
    let lower = core.to_lowercase();
    let expansion = match CONTRACTIONS.iter().find(|(short, _)| *short == lower) {
        Some((_, long)) => *long,
        None => return chunk.to_string(),
    };

    let expansion = if core.starts_with(|c: char| c.is_uppercase()) {
        capitalize(expansion)
    } else {
        expansion.to_string()
    };
    format!("{}{}{}", &chunk[..start], expansion, &chunk[end..])
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn parse_with_spans(original_input: &str) -> Vec<(Span, RawToken)> {
    let mut input = original_input;
    let mut result = Vec::new();

    loop {
        // 1. Skip whitespace
        let (next_input, _) = match multispace0::<&str, nom::error::Error<&str>>(input) {
            Ok(res) => res,
            Err(_) => break,
        };
        input = next_input;

        if input.is_empty() {
            break;
        }

        // 2. Try to match a token
        let parse_res: IResult<&str, RawToken> = alt((
            map(take_while1(is_word_char), RawToken::Word),
            map(one_of(SENTENCE_PUNCTUATION), RawToken::Punct),
        ))(input);

        match parse_res {
            Ok((next_input, token)) => {
                let len = input.len() - next_input.len();
                let start = input.as_ptr() as usize - original_input.as_ptr() as usize;

                result.push((Span::new(start, start + len), token));
                input = next_input;
            }
            Err(_) => {
                // Skip one char to recover (resilient parsing)
                if let Some(c) = input.chars().next() {
                    input = &input[c.len_utf8()..];
                } else {
                    break;
                }
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(sentence: &Sentence) -> Vec<&str> {
        sentence.tokens.iter().map(|t| t.normalized.as_str()).collect()
    }

    #[test]
    fn test_punctuation_is_split_off() {
        let raw = parse_with_spans("Hello, world.");
        assert_eq!(raw.len(), 4);
        assert_eq!(raw[1].1, RawToken::Punct(','));
        assert_eq!(raw[0].0, Span::new(0, 5));

        let sentence = normalize("Hello, world.");
        assert_eq!(words(&sentence), vec!["hello", "world"]);
        assert!(!sentence.question);
    }

    #[test]
    fn test_question_mark_detected() {
        let sentence = normalize("Do you eat food?  ");
        assert!(sentence.question);
        assert_eq!(words(&sentence), vec!["do", "you", "eat", "food"]);

        assert_eq!(split_question("What?!"), ("What?!", false));
        assert_eq!(split_question("Really??"), ("Really", true));
    }

    #[test]
    fn test_contractions_expand() {
        assert_eq!(expand_contractions("I'm hungry, don't wait."), "I am hungry, do not wait.");
        assert_eq!(expand_contractions("DIDN'T"), "Did not");
        assert_eq!(expand_contractions("I\u{2019}ll go"), "I will go");
        assert_eq!(expand_contractions("o'clock"), "o'clock");

        let sentence = normalize("I don't eat food.");
        assert_eq!(words(&sentence), vec!["i", "do", "not", "eat", "food"]);
    }

    #[test]
    fn test_hyphenated_words_survive() {
        let sentence = normalize("Mi kera ma-kemata.");
        assert_eq!(words(&sentence), vec!["mi", "kera", "ma-kemata"]);
        assert_eq!(sentence.tokens[0].surface, "Mi");
    }

    #[test]
    fn test_empty_and_noise() {
        assert!(normalize("").is_empty());
        assert!(normalize("   \t ").is_empty());
        assert!(normalize("... 42 ---").is_empty());
        assert_eq!(normalize_word("'Nyxen'"), "nyxen");
    }
}
