pub mod closed;
pub mod parser;
pub mod phrase;
pub mod syntax;
pub mod token;

use linara_morph::english;
use linara_protocol::{Category, Lexicon};
use crate::parser::normalize;
use crate::phrase::match_source;
use crate::token::{Tag, TaggedToken, Token};

/// Lexicon categories consulted by the tagger, in priority order.
const TAG_ORDER: [(Category, Tag); 4] = [
    (Category::Pronoun, Tag::Pronoun),
    (Category::Noun, Tag::Noun),
    (Category::Verb, Tag::Verb),
    (Category::Adjective, Tag::Adjective),
];

pub struct Tagger<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> Tagger<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Primary entry point: Text -> Tagged Tokens
    pub fn analyze(&self, input: &str) -> Vec<TaggedToken> {
        self.tag(&normalize(input).tokens)
    }

    pub fn tag(&self, tokens: &[Token]) -> Vec<TaggedToken> {
        // A greeting question is recognized as a whole sentence or not at all.
        if match_source(tokens, self.lexicon.greeting_questions()).is_some() {
            return tokens
                .iter()
                .map(|t| tagged(t, Tag::GreetingQuestion, &t.normalized))
                .collect();
        }

        tokens.iter().map(|t| self.tag_word(t)).collect()
    }

    /// Lexicon first, closed classes second, capitalization last.
    fn tag_word(&self, token: &Token) -> TaggedToken {
        let word = token.normalized.as_str();

        // 1. Exact lexicon match
        for (category, tag) in TAG_ORDER {
            if self.lexicon.contains(category, word) {
                return tagged(token, tag, word);
            }
        }

        // 2. Inflected lexicon match (me -> i, friends -> friend, ate -> eat)
        if let Some((tag, lemma)) = self.inflected(word) {
            return tagged(token, tag, &lemma);
        }

        // 3. Closed classes
        let tag = if closed::is_greeting(word) {
            Tag::Greeting
        } else if closed::is_auxiliary(word) {
            Tag::Auxiliary
        } else if closed::is_negation(word) {
            Tag::Negation
        } else if closed::is_wh_word(word) {
            Tag::WhWord
        } else if closed::is_determiner(word) {
            Tag::Determiner
        // 4. Capitalization heuristic
        } else if token.looks_like_name() {
            Tag::Name
        } else {
            Tag::Unknown
        };

        tagged(token, tag, word)
    }

    fn inflected(&self, word: &str) -> Option<(Tag, String)> {
        if let Some(lemma) = english::nominative(word) {
            if self.lexicon.contains(Category::Pronoun, lemma) {
                return Some((Tag::Pronoun, lemma.to_string()));
            }
        }

        let nouns = |w: &str| self.lexicon.contains(Category::Noun, w);
        if let Some(lemma) = english::singular_candidates(word).into_iter().find(|c| nouns(c.as_str())) {
            return Some((Tag::Noun, lemma));
        }

        let verbs = |w: &str| self.lexicon.contains(Category::Verb, w);
        let inflection = english::lemmatize(word, verbs);
        if inflection.lemma != word && verbs(inflection.lemma.as_str()) {
            return Some((Tag::Verb, inflection.lemma));
        }

        None
    }
}

fn tagged(token: &Token, tag: Tag, lemma: &str) -> TaggedToken {
    TaggedToken {
        token: token.clone(),
        tag,
        lemma: lemma.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linara_protocol::builtin;

    fn lexicon() -> Lexicon {
        Lexicon::build(builtin::linara()).unwrap()
    }

    fn tags(input: &str) -> Vec<Tag> {
        let lexicon = lexicon();
        Tagger::new(&lexicon).analyze(input).into_iter().map(|t| t.tag).collect()
    }

    #[test]
    fn test_tagger_integration() {
        let lexicon = lexicon();
        let tagged = Tagger::new(&lexicon).analyze("I did not eat the good food.");

        assert_eq!(tagged.len(), 7);
        assert_eq!(tagged[0].token.surface, "I");
        assert_eq!(
            tagged.iter().map(|t| t.tag).collect::<Vec<_>>(),
            vec![
                Tag::Pronoun,
                Tag::Auxiliary,
                Tag::Negation,
                Tag::Verb,
                Tag::Determiner,
                Tag::Adjective,
                Tag::Noun,
            ]
        );
    }

    #[test]
    fn test_lexicon_beats_name_heuristic() {
        // "Food" is capitalized but known, "Nyxen" is not.
        assert_eq!(tags("Food Nyxen"), vec![Tag::Noun, Tag::Name]);
        assert_eq!(tags("nyxen"), vec![Tag::Unknown]);
        assert_eq!(tags("McLeod-Smith"), vec![Tag::Unknown]);
    }

    #[test]
    fn test_inflected_forms() {
        let lexicon = lexicon();
        let tagged = Tagger::new(&lexicon).analyze("friends ate me cities");

        assert_eq!(tagged[0].tag, Tag::Noun);
        assert_eq!(tagged[0].lemma, "friend");
        assert!(tagged[0].is_inflected());
        assert_eq!(tagged[1].tag, Tag::Verb);
        assert_eq!(tagged[1].lemma, "eat");
        assert_eq!(tagged[2].tag, Tag::Pronoun);
        assert_eq!(tagged[2].lemma, "i");
        assert_eq!(tagged[3].lemma, "city");
    }

    #[test]
    fn test_closed_classes() {
        assert_eq!(
            tags("hello will never where an"),
            vec![Tag::Greeting, Tag::Auxiliary, Tag::Negation, Tag::WhWord, Tag::Determiner]
        );
    }

    #[test]
    fn test_greeting_question_is_whole_sentence() {
        assert_eq!(tags("How are you?"), vec![Tag::GreetingQuestion; 3]);
        assert_eq!(
            tags("How are you friends"),
            vec![Tag::WhWord, Tag::Auxiliary, Tag::Pronoun, Tag::Noun]
        );
    }
}
