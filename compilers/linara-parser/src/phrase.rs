use linara_protocol::Phrase;

use crate::token::Token;

/// A fixed expression found at `tokens[start..end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhraseMatch<'p> {
    pub start: usize,
    pub end: usize,
    pub phrase: &'p Phrase,
}

/// Slides each phrase over the tokens in dictionary order; the first phrase
/// with any match wins, at its leftmost position.
pub fn find_phrase<'p>(tokens: &[Token], phrases: &'p [Phrase]) -> Option<PhraseMatch<'p>> {
    for phrase in phrases {
        let n = phrase.source.len();
        if n == 0 || n > tokens.len() {
            continue;
        }
        for start in 0..=tokens.len() - n {
            let window = &tokens[start..start + n];
            if window.iter().zip(&phrase.source).all(|(t, w)| t.normalized == *w) {
                return Some(PhraseMatch {
                    start,
                    end: start + n,
                    phrase,
                });
            }
        }
    }
    None
}

/// Phrase whose English side is exactly the whole token sequence.
pub fn match_source<'p>(tokens: &[Token], phrases: &'p [Phrase]) -> Option<&'p Phrase> {
    phrases.iter().find(|phrase| {
        phrase.source.len() == tokens.len()
            && tokens.iter().zip(&phrase.source).all(|(t, w)| t.normalized == *w)
    })
}

/// Phrase whose Linara side starts the token sequence, with the number of
/// tokens it covers.
pub fn match_target_prefix<'p>(tokens: &[Token], phrases: &'p [Phrase]) -> Option<(usize, &'p Phrase)> {
    phrases.iter().find_map(|phrase| {
        let target: Vec<&str> = phrase.target.split_whitespace().collect();
        let n = target.len();
        let covers = n > 0
            && n <= tokens.len()
            && tokens.iter().zip(&target).all(|(t, w)| t.normalized == *w);
        covers.then_some((n, phrase))
    })
}
