use linara_morph::english;
use linara_protocol::{Category, Lexicon, Phrase, Tense};

use crate::closed;
use crate::phrase::{match_source, match_target_prefix};
use crate::token::{Tag, TaggedToken, Token};

/// A word occupying a clause slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    /// Text as written.
    pub surface: String,
    /// Lexicon key: an English lemma when encoding, a Linara token when decoding.
    pub lemma: String,
    /// Proper name: passed through as written, never inflected.
    pub name: bool,
}

impl Word {
    pub fn new(surface: impl Into<String>, lemma: impl Into<String>, name: bool) -> Self {
        Self {
            surface: surface.into(),
            lemma: lemma.into(),
            name,
        }
    }

    fn from_tagged(t: &TaggedToken) -> Self {
        Self::new(t.token.surface.as_str(), t.lemma.as_str(), t.tag == Tag::Name)
    }

    fn from_token(t: &Token) -> Self {
        Self::new(t.surface.as_str(), t.normalized.as_str(), t.looks_like_name())
    }
}

/// The shallow clause both directions parse into.
///
/// Every slot is first-match-wins: the `fill_*` setters refuse to overwrite.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClauseDraft {
    pub subject: Option<Word>,
    pub verb: Option<Word>,
    pub object: Option<Word>,
    /// Modifiers of the object, in source order.
    pub adjectives: Vec<Word>,
    pub tense: Option<Tense>,
    pub negated: bool,
    pub subject_plural: bool,
    pub object_plural: bool,
    pub question: bool,
}

impl ClauseDraft {
    pub fn fill_subject(&mut self, word: Word, plural: bool) -> bool {
        if self.subject.is_some() {
            return false;
        }
        self.subject = Some(word);
        self.subject_plural = plural;
        true
    }

    pub fn fill_verb(&mut self, word: Word) -> bool {
        if self.verb.is_some() {
            return false;
        }
        self.verb = Some(word);
        true
    }

    pub fn fill_object(&mut self, word: Word, plural: bool) -> bool {
        if self.object.is_some() {
            return false;
        }
        self.object = Some(word);
        self.object_plural = plural;
        true
    }

    pub fn fill_tense(&mut self, tense: Tense) -> bool {
        if self.tense.is_some() {
            return false;
        }
        self.tense = Some(tense);
        true
    }

    pub fn tense(&self) -> Tense {
        self.tense.unwrap_or_default()
    }

    /// No content slot was filled; markers alone do not count.
    pub fn is_empty(&self) -> bool {
        self.subject.is_none() && self.verb.is_none() && self.object.is_none() && self.adjectives.is_empty()
    }

    /// "She is Nyxen": no verb, but a subject and a name in object position.
    pub fn is_copular(&self) -> bool {
        self.verb.is_none()
            && self.subject.is_some()
            && self.object.as_ref().is_some_and(|o| o.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnglishParse<'t, 'p> {
    /// The whole sentence is a greeting question with a canned response.
    GreetingQuestion(&'p Phrase),
    /// GREETING PRONOUN copula NAME ("Hello, I am Nyxen").
    Introduction {
        greeting: &'t TaggedToken,
        pronoun: &'t TaggedToken,
        name: &'t TaggedToken,
    },
    /// Any other sentence opening with a greeting.
    Greeting {
        greeting: &'t TaggedToken,
        rest: &'t [TaggedToken],
    },
    Clause(ClauseDraft),
}

/// Special cases first, then a single left-to-right slot-filling pass.
pub fn parse_english<'t, 'p>(tagged: &'t [TaggedToken], lexicon: &'p Lexicon) -> EnglishParse<'t, 'p> {
    if tagged.first().is_some_and(|t| t.tag == Tag::GreetingQuestion) {
        let tokens: Vec<Token> = tagged.iter().map(|t| t.token.clone()).collect();
        if let Some(phrase) = match_source(&tokens, lexicon.greeting_questions()) {
            return EnglishParse::GreetingQuestion(phrase);
        }
    }

    if let [greeting, rest @ ..] = tagged {
        if greeting.tag == Tag::Greeting {
            if let [pronoun, copula, name] = rest {
                if pronoun.tag == Tag::Pronoun
                    && copula.tag == Tag::Auxiliary
                    && closed::is_copula(&copula.token.normalized)
                    && name.tag == Tag::Name
                {
                    return EnglishParse::Introduction { greeting, pronoun, name };
                }
            }
            return EnglishParse::Greeting { greeting, rest };
        }
    }

    let draft = tagged
        .iter()
        .fold(SlotFiller::new(lexicon), SlotFiller::accept)
        .finish();
    EnglishParse::Clause(draft)
}

/// Accumulates a [`ClauseDraft`] over tagged tokens.
///
/// Adjectives met before the object are held back and attached once an
/// object shows up.
struct SlotFiller<'l> {
    lexicon: &'l Lexicon,
    draft: ClauseDraft,
    pending_adjectives: Vec<Word>,
}

impl<'l> SlotFiller<'l> {
    fn new(lexicon: &'l Lexicon) -> Self {
        Self {
            lexicon,
            draft: ClauseDraft::default(),
            pending_adjectives: Vec::new(),
        }
    }

    fn accept(mut self, t: &TaggedToken) -> Self {
        let lexicon = self.lexicon;
        let draft = &mut self.draft;
        match t.tag {
            Tag::Pronoun | Tag::Noun | Tag::Name if draft.subject.is_none() => {
                draft.fill_subject(Word::from_tagged(t), t.tag == Tag::Noun && t.is_inflected());
            }
            Tag::Auxiliary => {
                draft.fill_tense(closed::auxiliary_tense(&t.token.normalized));
            }
            Tag::Negation => draft.negated = true,
            Tag::WhWord => draft.question = true,
            Tag::Determiner | Tag::Greeting | Tag::GreetingQuestion => {}
            Tag::Verb | Tag::Unknown if draft.verb.is_none() => {
                let verbs = |w: &str| lexicon.contains(Category::Verb, w);
                let inflection = english::lemmatize(&t.token.normalized, verbs);
                let surface = if inflection.lemma == t.token.normalized {
                    t.token.surface.clone()
                } else {
                    inflection.lemma.clone()
                };
                draft.fill_verb(Word::new(surface, inflection.lemma, false));
                if let Some(tense) = inflection.tense {
                    draft.fill_tense(tense);
                }
            }
            Tag::Noun | Tag::Name | Tag::Unknown | Tag::Pronoun if draft.object.is_none() => {
                let (word, plural) = object_word(t);
                draft.fill_object(word, plural);
                draft.adjectives.append(&mut self.pending_adjectives);
            }
            Tag::Adjective if draft.object.is_some() => draft.adjectives.push(Word::from_tagged(t)),
            Tag::Adjective => self.pending_adjectives.push(Word::from_tagged(t)),
            // Surplus nouns, verbs and pronouns have no slot left.
            _ => {}
        }
        self
    }

    fn finish(self) -> ClauseDraft {
        self.draft
    }
}

/// Nouns, names and unknown words are plural when they end in "s" but not
/// "is"; pronouns never are. Names keep their surface form.
fn object_word(t: &TaggedToken) -> (Word, bool) {
    let plural = t.tag != Tag::Pronoun && english::is_plural(&t.token.normalized);
    match t.tag {
        Tag::Unknown if plural => {
            let lemma = english::singularize(&t.token.normalized, |_| false);
            let surface = english::singularize(&t.token.surface, |_| false);
            (Word::new(surface, lemma, false), true)
        }
        _ => (Word::from_tagged(t), plural),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinaraParse<'t, 'p> {
    /// The whole sentence is a canned greeting-question response.
    GreetingQuestion(&'p Phrase),
    /// A fixed expression opens the sentence (or is all of it).
    Phrase { phrase: &'p Phrase, rest: &'t [Token] },
    Greeting { greeting: &'t Token, lemma: &'p str, rest: &'t [Token] },
    Clause(ClauseDraft),
}

/// Removes a sentence-final question particle, reporting whether one was there.
pub fn strip_question_particle<'t>(tokens: &'t [Token], lexicon: &Lexicon) -> (&'t [Token], bool) {
    match tokens.split_last() {
        Some((last, rest)) if last.normalized == lexicon.markers().question_particle => (rest, true),
        _ => (tokens, false),
    }
}

/// Linara is strictly SOV, so decoding is positional rather than tag-driven:
/// subject first, verb last, object second, adjectives in between.
pub fn parse_linara<'t, 'p>(tokens: &'t [Token], lexicon: &'p Lexicon) -> LinaraParse<'t, 'p> {
    if let Some(phrase) = lexicon
        .greeting_questions()
        .iter()
        .find(|p| target_matches(tokens, p))
    {
        return LinaraParse::GreetingQuestion(phrase);
    }

    if let Some((n, phrase)) = match_target_prefix(tokens, lexicon.phrases()) {
        return LinaraParse::Phrase { phrase, rest: &tokens[n..] };
    }

    if let [first, rest @ ..] = tokens {
        if let Some(lemma) = lexicon.reverse(Category::Particle, &first.normalized) {
            if closed::is_greeting(lemma) {
                return LinaraParse::Greeting { greeting: first, lemma, rest };
            }
        }
    }

    LinaraParse::Clause(positional_clause(tokens))
}

fn target_matches(tokens: &[Token], phrase: &Phrase) -> bool {
    let target: Vec<&str> = phrase.target.split_whitespace().collect();
    target.len() == tokens.len() && tokens.iter().zip(&target).all(|(t, w)| t.normalized == *w)
}

fn positional_clause(tokens: &[Token]) -> ClauseDraft {
    let mut draft = ClauseDraft::default();
    match tokens {
        [] => {}
        [subject] => {
            draft.fill_subject(Word::from_token(subject), false);
        }
        [subject, verb] => {
            draft.fill_subject(Word::from_token(subject), false);
            draft.fill_verb(Word::from_token(verb));
        }
        [subject, object, adjectives @ .., verb] => {
            draft.fill_subject(Word::from_token(subject), false);
            draft.fill_object(Word::from_token(object), false);
            draft.adjectives = adjectives.iter().map(Word::from_token).collect();
            draft.fill_verb(Word::from_token(verb));
        }
    }
    draft
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::normalize;
    use crate::Tagger;
    use linara_protocol::builtin;

    fn lexicon() -> Lexicon {
        Lexicon::build(builtin::linara()).unwrap()
    }

    fn english_clause(input: &str) -> ClauseDraft {
        let lexicon = lexicon();
        let tagged = Tagger::new(&lexicon).analyze(input);
        match parse_english(&tagged, &lexicon) {
            EnglishParse::Clause(draft) => draft,
            other => panic!("Expected a clause, got {:?}", other),
        }
    }

    fn lemma(word: &Option<Word>) -> &str {
        word.as_ref().map(|w| w.lemma.as_str()).unwrap_or("")
    }

    #[test]
    fn test_simple_svo() {
        let draft = english_clause("I eat food.");

        assert_eq!(lemma(&draft.subject), "i");
        assert_eq!(lemma(&draft.verb), "eat");
        assert_eq!(lemma(&draft.object), "food");
        assert_eq!(draft.tense(), Tense::Present);
        assert!(!draft.negated);
    }

    #[test]
    fn test_auxiliary_and_negation_are_consumed() {
        let draft = english_clause("I did not eat the food.");

        assert_eq!(draft.tense, Some(Tense::Past));
        assert!(draft.negated);
        assert_eq!(lemma(&draft.verb), "eat");
        assert_eq!(lemma(&draft.object), "food");
    }

    #[test]
    fn test_first_match_wins() {
        // Second auxiliary, second verb and second object are all ignored.
        let draft = english_clause("They will have eaten food water");

        assert_eq!(draft.tense, Some(Tense::Future));
        assert_eq!(lemma(&draft.verb), "eat");
        assert_eq!(lemma(&draft.object), "food");

        let mut draft = ClauseDraft::default();
        assert!(draft.fill_subject(Word::new("I", "i", false), false));
        assert!(!draft.fill_subject(Word::new("you", "you", false), false));
        assert_eq!(lemma(&draft.subject), "i");
    }

    #[test]
    fn test_irregular_verb_implies_past() {
        let draft = english_clause("I ate food");
        assert_eq!(draft.tense, Some(Tense::Past));
        assert_eq!(lemma(&draft.verb), "eat");
    }

    #[test]
    fn test_plural_object() {
        let draft = english_clause("I see friends.");
        assert_eq!(lemma(&draft.object), "friend");
        assert!(draft.object_plural);

        let draft = english_clause("I eat pizzas");
        assert_eq!(lemma(&draft.object), "pizza");
        assert!(draft.object_plural);
    }

    #[test]
    fn test_plural_name_object_keeps_surface() {
        let draft = english_clause("I see James.");
        let object = draft.object.as_ref().unwrap();
        assert!(object.name);
        assert_eq!(object.surface, "James");
        assert!(draft.object_plural);

        assert!(!english_clause("I see Doris.").object_plural);
        assert!(!english_clause("You love us").object_plural);
    }

    #[test]
    fn test_adjectives_attach_to_object() {
        let draft = english_clause("I eat good food big");
        let adjectives: Vec<&str> = draft.adjectives.iter().map(|w| w.lemma.as_str()).collect();
        assert_eq!(adjectives, vec!["good", "big"]);

        // No object ever shows up: the adjective is dropped.
        assert!(english_clause("I am happy").adjectives.is_empty());
    }

    #[test]
    fn test_copular_clause() {
        let draft = english_clause("She is Nyxen.");
        assert!(draft.is_copular());
        assert!(draft.verb.is_none());
        assert_eq!(draft.object.as_ref().unwrap().surface, "Nyxen");
    }

    #[test]
    fn test_wh_word_marks_question() {
        assert!(english_clause("What do you eat").question);
    }

    #[test]
    fn test_greeting_special_cases() {
        let lexicon = lexicon();
        let tagger = Tagger::new(&lexicon);

        let tagged = tagger.analyze("Hello, I am Nyxen.");
        match parse_english(&tagged, &lexicon) {
            EnglishParse::Introduction { pronoun, name, .. } => {
                assert_eq!(pronoun.lemma, "i");
                assert_eq!(name.token.surface, "Nyxen");
            }
            other => panic!("Expected an introduction, got {:?}", other),
        }

        let tagged = tagger.analyze("Hi, I eat food");
        assert!(matches!(
            parse_english(&tagged, &lexicon),
            EnglishParse::Greeting { rest, .. } if rest.len() == 3
        ));

        let tagged = tagger.analyze("how are you");
        assert!(matches!(
            parse_english(&tagged, &lexicon),
            EnglishParse::GreetingQuestion(p) if p.target == "ta meli"
        ));
    }

    #[test]
    fn test_positional_shapes() {
        let lexicon = lexicon();
        let clause = |text: &str| match parse_linara(&normalize(text).tokens, &lexicon) {
            LinaraParse::Clause(draft) => draft,
            other => panic!("Expected a clause, got {:?}", other),
        };

        let one = clause("Mi");
        assert_eq!(lemma(&one.subject), "mi");
        assert!(one.verb.is_none());

        let two = clause("Mi kema");
        assert_eq!(lemma(&two.verb), "kema");
        assert!(two.object.is_none());

        let four = clause("Mi kera meli tova kema");
        assert_eq!(lemma(&four.object), "kera");
        assert_eq!(four.adjectives.len(), 2);
        assert_eq!(lemma(&four.verb), "kema");
    }

    #[test]
    fn test_linara_greeting_and_particle() {
        let lexicon = lexicon();
        let sentence = normalize("Sava mi Nyxen ka");

        let (tokens, question) = strip_question_particle(&sentence.tokens, &lexicon);
        assert!(question);
        assert_eq!(tokens.len(), 3);

        match parse_linara(tokens, &lexicon) {
            LinaraParse::Greeting { lemma, rest, .. } => {
                assert_eq!(lemma, "hello");
                assert_eq!(rest.len(), 2);
            }
            other => panic!("Expected a greeting, got {:?}", other),
        }
    }

    #[test]
    fn test_linara_phrases() {
        let lexicon = lexicon();

        let tokens = normalize("Ta meli").tokens;
        assert!(matches!(
            parse_linara(&tokens, &lexicon),
            LinaraParse::GreetingQuestion(phrase) if phrase.source == vec!["how", "are", "you"]
        ));

        let tokens = normalize("Grasi mi kera kema").tokens;
        assert!(matches!(
            parse_linara(&tokens, &lexicon),
            LinaraParse::Phrase { rest, .. } if rest.len() == 3
        ));
    }
}
