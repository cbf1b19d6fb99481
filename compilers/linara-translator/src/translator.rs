use linara_parser::parser::normalize;
use linara_parser::phrase::find_phrase;
use linara_parser::syntax::{parse_english, parse_linara, strip_question_particle, EnglishParse, LinaraParse};
use linara_parser::token::{TaggedToken, Token};
use linara_parser::Tagger;
use linara_protocol::{builtin, load_pack, Category, LanguagePack, Lexicon};
use tracing::{debug, instrument, trace};

use crate::error::TranslatorError;
use crate::realizer;
use crate::transform::{decode_clause, encode_clause};

/// Words produced for one span of the input.
#[derive(Debug, Default)]
struct Rendered {
    words: Vec<String>,
    question: bool,
    /// A canned answer, which never takes the question particle.
    response: bool,
}

impl Rendered {
    fn words(words: Vec<String>) -> Self {
        Self {
            words,
            ..Self::default()
        }
    }

    fn append(&mut self, other: Rendered) {
        self.words.extend(other.words);
        self.question |= other.question;
        self.response |= other.response;
    }
}

/// English <-> Linara sentence translator over an immutable [`Lexicon`].
///
/// Both directions are infallible: unknown material passes through and input
/// that yields nothing is returned unchanged.
#[derive(Debug, Clone)]
pub struct Translator {
    lexicon: Lexicon,
}

impl Translator {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// The built-in Linara pack.
    pub fn linara() -> Result<Self, TranslatorError> {
        Self::from_pack(builtin::linara())
    }

    pub fn from_pack(pack: LanguagePack) -> Result<Self, TranslatorError> {
        if pack.entries.is_empty() {
            return Err(TranslatorError::EmptyPack(pack.name));
        }
        let lexicon = Lexicon::build(pack)?;
        debug!(
            name = %lexicon.pack().name,
            version = lexicon.pack().version,
            entries = lexicon.pack().entries.len(),
            "language pack loaded"
        );
        Ok(Self::new(lexicon))
    }

    /// Loads a validated rkyv archive of a [`LanguagePack`].
    pub fn from_archive(bytes: &[u8]) -> Result<Self, TranslatorError> {
        Self::from_pack(load_pack(bytes)?)
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Normalizer and tagger output, for diagnostics.
    pub fn analyze(&self, input: &str) -> Vec<TaggedToken> {
        Tagger::new(&self.lexicon).analyze(input)
    }

    /// English -> Linara. Always terminated with `.`; questions are carried
    /// by the question particle instead.
    #[instrument(level = "debug", skip(self))]
    pub fn encode(&self, input: &str) -> String {
        if input.trim().is_empty() {
            return String::new();
        }

        let sentence = normalize(input);
        let mut out = self.encode_tokens(&sentence.tokens, true);
        if out.words.is_empty() {
            debug!("nothing to encode");
            return input.to_string();
        }

        if (sentence.question || out.question) && !out.response {
            out.words.push(self.lexicon.markers().question_particle.clone());
        }

        let result = realizer::finish(&out.words, '.');
        debug!(%result, "encoded");
        result
    }

    /// Linara -> English. Terminated with `?` when the input was a question.
    #[instrument(level = "debug", skip(self))]
    pub fn decode(&self, input: &str) -> String {
        if input.trim().is_empty() {
            return String::new();
        }

        let sentence = normalize(input);
        let (tokens, particle) = strip_question_particle(&sentence.tokens, &self.lexicon);
        let out = self.decode_tokens(tokens, true);
        if out.words.is_empty() {
            debug!("nothing to decode");
            return input.to_string();
        }

        let terminator = if sentence.question || particle || out.question { '?' } else { '.' };
        let result = realizer::finish(&out.words, terminator);
        debug!(%result, "decoded");
        result
    }

    /// Phrases are cut out first and the spans around them encoded on their
    /// own; each recursion works on a strictly shorter span.
    fn encode_tokens(&self, tokens: &[Token], leading: bool) -> Rendered {
        if tokens.is_empty() {
            return Rendered::default();
        }

        if let Some(m) = find_phrase(tokens, self.lexicon.phrases()) {
            trace!(start = m.start, end = m.end, target = %m.phrase.target, "phrase");
            let mut out = self.encode_tokens(&tokens[..m.start], leading);
            let lead = leading && out.words.is_empty();
            out.words.extend(realizer::fixed(&m.phrase.target, lead));
            out.append(self.encode_tokens(&tokens[m.end..], false));
            return out;
        }

        let tagged = Tagger::new(&self.lexicon).tag(tokens);
        trace!(tags = ?tagged.iter().map(|t| t.tag.as_str()).collect::<Vec<_>>(), "tagged");

        match parse_english(&tagged, &self.lexicon) {
            EnglishParse::GreetingQuestion(phrase) => Rendered {
                words: realizer::fixed(&phrase.target, leading),
                question: false,
                response: true,
            },
            EnglishParse::Introduction { greeting, pronoun, name } => {
                let words = vec![
                    self.root_or_surface(Category::Particle, greeting),
                    self.root_or_surface(Category::Pronoun, pronoun),
                    name.token.surface.clone(),
                ];
                Rendered::words(realizer::lead(words, leading))
            }
            EnglishParse::Greeting { greeting, rest } => {
                let opening = vec![self.root_or_surface(Category::Particle, greeting)];
                let mut out = Rendered::words(realizer::lead(opening, leading));
                out.append(self.encode_tokens(&tokens[tokens.len() - rest.len()..], false));
                out
            }
            EnglishParse::Clause(draft) => {
                debug!(?draft, "english clause");
                let clause = encode_clause(&draft, &self.lexicon);
                Rendered {
                    words: realizer::realize_linara(&clause, leading),
                    question: draft.question,
                    response: false,
                }
            }
        }
    }

    fn decode_tokens(&self, tokens: &[Token], leading: bool) -> Rendered {
        match parse_linara(tokens, &self.lexicon) {
            LinaraParse::GreetingQuestion(phrase) => Rendered {
                words: realizer::lead(phrase.source.clone(), leading),
                question: true,
                response: false,
            },
            LinaraParse::Phrase { phrase, rest } => self.decode_after(phrase.source.clone(), rest, leading),
            LinaraParse::Greeting { lemma, rest, .. } => self.decode_after(vec![lemma.to_string()], rest, leading),
            LinaraParse::Clause(draft) => {
                debug!(?draft, "linara clause");
                let clause = decode_clause(&draft, &self.lexicon);
                Rendered::words(realizer::realize_english(&clause, leading))
            }
        }
    }

    /// `Opening, rest...`
    fn decode_after(&self, opening: Vec<String>, rest: &[Token], leading: bool) -> Rendered {
        let mut out = Rendered::words(realizer::lead(opening, leading));
        let tail = self.decode_tokens(rest, false);
        if !tail.words.is_empty() {
            if let Some(last) = out.words.last_mut() {
                last.push(',');
            }
        }
        out.append(tail);
        out
    }

    fn root_or_surface(&self, category: Category, word: &TaggedToken) -> String {
        self.lexicon
            .lookup(category, &word.lemma)
            .map_or_else(|| word.token.surface.clone(), String::from)
    }
}
