#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// A word of the (contraction-expanded) input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub span: Span,
    /// Text as written, minus surrounding apostrophes/hyphens.
    pub surface: String,
    /// Lowercased, restricted to letters, apostrophes and hyphens.
    pub normalized: String,
}

impl Token {
    /// `^[A-Z][a-zA-Z]*$`
    pub fn looks_like_name(&self) -> bool {
        let mut chars = self.surface.chars();
        match chars.next() {
            Some(first) if first.is_ascii_uppercase() => chars.all(|c| c.is_ascii_alphabetic()),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Pronoun,
    Noun,
    Verb,
    Adjective,
    Auxiliary,
    Negation,
    Greeting,
    /// Part of a whole-sentence greeting question ("how are you").
    GreetingQuestion,
    /// Unrecognized capitalized word.
    Name,
    WhWord,
    Determiner,
    Unknown,
}

impl Tag {
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Pronoun => "PRONOUN",
            Tag::Noun => "NOUN",
            Tag::Verb => "VERB",
            Tag::Adjective => "ADJECTIVE",
            Tag::Auxiliary => "AUXILIARY",
            Tag::Negation => "NEGATION",
            Tag::Greeting => "GREETING",
            Tag::GreetingQuestion => "GREETING-QUESTION",
            Tag::Name => "NAME",
            Tag::WhWord => "WH-WORD",
            Tag::Determiner => "DETERMINER",
            Tag::Unknown => "UNKNOWN",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub token: Token,
    pub tag: Tag,
    /// Lexicon lemma when the word was found through an inflected form
    /// (`friends` -> `friend`, `me` -> `i`); otherwise the normalized form.
    pub lemma: String,
}

impl TaggedToken {
    /// True when the lemma differs from the written form, i.e. the word was inflected.
    pub fn is_inflected(&self) -> bool {
        self.lemma != self.token.normalized
    }
}
