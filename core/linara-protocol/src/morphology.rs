use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use bitflags::bitflags;

/// Lexicon category of a lemma. Categories never share a lemma.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Category {
    Pronoun = 0,
    Noun = 1,
    Verb = 2,
    Adjective = 3,
    Particle = 4,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Pronoun,
        Category::Noun,
        Category::Verb,
        Category::Adjective,
        Category::Particle,
    ];

    /// Lookup order used when a word may be any kind of nominal.
    pub const NOMINAL: [Category; 5] = [
        Category::Pronoun,
        Category::Noun,
        Category::Adjective,
        Category::Particle,
        Category::Verb,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::Pronoun => "pronoun",
            Category::Noun => "noun",
            Category::Verb => "verb",
            Category::Adjective => "adjective",
            Category::Particle => "particle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[repr(u8)]
pub enum Tense {
    #[default]
    Present = 0,
    Past = 1,
    Future = 2,
}

impl Tense {
    pub fn flags(self) -> MorphFlags {
        match self {
            Tense::Present => MorphFlags::PRESENT,
            Tense::Past => MorphFlags::PAST,
            Tense::Future => MorphFlags::FUTURE,
        }
    }

    /// Future wins over past when both bits are set.
    pub fn from_flags(flags: MorphFlags) -> Self {
        if flags.contains(MorphFlags::FUTURE) {
            Tense::Future
        } else if flags.contains(MorphFlags::PAST) {
            Tense::Past
        } else {
            Tense::Present
        }
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
    pub struct MorphFlags: u32 {
        // Tense (Bits 0-2)
        const PRESENT = 1;
        const PAST = 2;
        const FUTURE = 4;

        // Polarity (Bit 3)
        const NEGATED = 8;

        // Number (Bit 4)
        const PLURAL = 16;
    }
}

impl MorphFlags {
    pub fn tense(self) -> Tense {
        Tense::from_flags(self)
    }
}
