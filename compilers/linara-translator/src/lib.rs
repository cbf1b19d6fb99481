pub mod error;
pub mod realizer;
pub mod transform;
pub mod translator;

pub use error::TranslatorError;
pub use translator::Translator;

#[cfg(test)]
mod tests {
    use super::*;
    use linara_protocol::{builtin, Category, LanguagePack, LexiconEntry, LexiconError};
    use proptest::prelude::*;

    fn linara() -> Translator {
        Translator::linara().unwrap()
    }

    #[test]
    fn test_empty_input() {
        let t = linara();
        assert_eq!(t.encode(""), "");
        assert_eq!(t.decode(""), "");
        assert_eq!(t.encode("   "), "");
        assert_eq!(t.decode("\n"), "");
    }

    #[test]
    fn test_encode_simple_clause() {
        let t = linara();
        assert_eq!(t.encode("I eat food."), "Mi kera kema.");
        assert_eq!(t.encode("I eat good food"), "Mi kera meli kema.");
        assert_eq!(t.encode("Friends eat food"), "Sunin kera kema.");
    }

    #[test]
    fn test_encode_tense_and_negation() {
        let t = linara();
        assert_eq!(t.encode("I did not eat the food."), "Mi kera ma-kemata.");
        assert_eq!(t.encode("They will eat."), "Tira kemalo.");
        assert_eq!(t.encode("I ate food"), "Mi kera kemata.");
        assert_eq!(t.encode("I don't eat food"), "Mi kera ma-kema.");
    }

    #[test]
    fn test_decode_simple_clause() {
        let t = linara();
        assert_eq!(t.decode("Mi kera kema."), "I eat food.");
        assert_eq!(t.decode("Tira kemalo."), "They will eat.");
        assert_eq!(t.decode("Mi kera ma-kemata."), "I did not eat food.");
        assert_eq!(t.decode("Mi kera meli kema"), "I eat good food.");
        assert_eq!(t.decode("Ta mi amira."), "You love me.");
    }

    #[test]
    fn test_greeting_introduction_round_trip() {
        let t = linara();
        assert_eq!(t.encode("Hello, I am Nyxen."), "Sava mi Nyxen.");
        assert_eq!(t.decode("Sava mi Nyxen."), "Hello, I am Nyxen.");
    }

    #[test]
    fn test_greetings() {
        let t = linara();
        assert_eq!(t.encode("Hi!"), "Sava.");
        assert_eq!(t.encode("Goodbye, friend"), "Salo suni.");
        assert_eq!(t.encode("Hello, how are you?"), "Sava ta meli.");
        assert_eq!(t.encode("How are you?"), "Ta meli.");
        assert_eq!(t.decode("Ta meli."), "How are you?");
        assert_eq!(t.decode("Sava."), "Hello.");
    }

    #[test]
    fn test_copula_with_name() {
        let t = linara();
        assert_eq!(t.encode("She is Nyxen."), "Sa Nyxen.");
        assert_eq!(t.decode("Sa Nyxen."), "She is Nyxen.");
        assert_eq!(t.decode("Mira Nyxen"), "We are Nyxen.");
    }

    #[test]
    fn test_plural_round_trip() {
        let t = linara();
        let encoded = t.encode("I see friends.");
        assert!(encoded.contains("sunin"), "{}", encoded);
        assert_eq!(encoded, "Mi sunin liso.");
        assert_eq!(t.decode(&encoded), "I see friends.");

        assert_eq!(t.decode("Mi siron liso."), "I see cities.");
        assert_eq!(t.encode("I eat pizzas"), "Mi pizzan kema.");
        assert_eq!(t.decode("Mi pizzan kema."), "I eat pizzas.");
    }

    #[test]
    fn test_phrase_priority() {
        let t = linara();
        // "thank you" is earlier in the dictionary than "yes".
        assert_eq!(t.encode("Yes, thank you."), "Si grasi.");
        assert_eq!(t.encode("Good morning, friend"), "Meli dina suni.");
        assert_eq!(t.encode("Thanks, I eat food"), "Grasi mi kera kema.");
        assert_eq!(t.decode("Grasi."), "Thank you.");
        assert_eq!(t.decode("Meli dina, mi kera kema."), "Good morning, I eat food.");
    }

    #[test]
    fn test_questions() {
        let t = linara();
        assert_eq!(t.encode("Do you eat food?"), "Ta kera kema ka.");
        assert_eq!(t.encode("What do you eat"), "Ta kema ka.");
        assert_eq!(t.decode("Ta kera kema ka."), "You eat food?");
        assert_eq!(t.decode("Ta kera kema?"), "You eat food?");
    }

    #[test]
    fn test_unknown_words_pass_through() {
        let t = linara();
        assert_eq!(t.encode("I eat pizza"), "Mi pizza kema.");
        assert_eq!(t.decode("Mi pizza kema"), "I eat pizza.");
        assert_eq!(t.encode("Nyxen will juggle"), "Nyxen jugglelo.");
    }

    #[test]
    fn test_multibyte_words_do_not_panic() {
        let t = linara();
        assert_eq!(t.encode("I eat \u{1000}s"), "Mi \u{1000}n kema.");
        assert_eq!(t.encode("I \u{1000}\u{1000}\u{1000}ing food"), "Mi kera \u{1000}\u{1000}\u{1000}ing.");
        assert_eq!(t.analyze("I eat \u{1000}s").len(), 3);
    }

    #[test]
    fn test_plural_name_object_is_not_affixed() {
        let t = linara();
        assert_eq!(t.encode("I see James."), "Mi James liso.");
        assert_eq!(t.decode("Mi James liso."), "I see James.");
    }

    #[test]
    fn test_input_without_words_is_returned() {
        let t = linara();
        assert_eq!(t.encode("the"), "the");
        assert_eq!(t.encode("?!"), "?!");
        assert_eq!(t.decode("ka"), "ka");
    }

    #[test]
    fn test_reverse_collision_is_last_write() {
        // hi, hey, greetings and hello all map to "sava"; "hello" is listed last.
        let t = linara();
        assert_eq!(t.lexicon().reverse(Category::Particle, "sava"), Some("hello"));
        assert_eq!(t.decode("Sava"), "Hello.");
    }

    #[test]
    fn test_synthetic_lexicon() {
        let mut pack = builtin::linara();
        pack.name = String::from("test");
        pack.entries = vec![
            LexiconEntry::new(Category::Pronoun, "i", "zo"),
            LexiconEntry::new(Category::Verb, "sing", "lali"),
            LexiconEntry::new(Category::Noun, "song", "mu"),
        ];
        pack.phrases.clear();
        let t = Translator::from_pack(pack).unwrap();

        assert_eq!(t.encode("I sing songs"), "Zo mun lali.");
        assert_eq!(t.decode("Zo mun lalilo"), "I will sing songs.");
    }

    #[test]
    fn test_pack_errors() {
        let mut pack = builtin::linara();
        pack.entries.clear();
        assert!(matches!(Translator::from_pack(pack), Err(TranslatorError::EmptyPack(_))));

        let mut pack: LanguagePack = builtin::linara();
        pack.morphology.future_suffix = String::from("ta");
        assert!(matches!(
            Translator::from_pack(pack),
            Err(TranslatorError::Lexicon(LexiconError::AmbiguousTenseSuffixes { .. }))
        ));

        assert!(matches!(
            Translator::from_archive(b"not an archive"),
            Err(TranslatorError::Lexicon(LexiconError::InvalidArchive(_)))
        ));
    }

    #[test]
    fn test_from_archive() {
        let bytes = rkyv::to_bytes::<_, 4096>(&builtin::linara()).unwrap();
        let t = Translator::from_archive(&bytes).unwrap();
        assert_eq!(t.encode("I eat food."), "Mi kera kema.");
    }

    #[test]
    fn test_translator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Translator>();
    }

    proptest! {
        #[test]
        fn prop_known_clauses_round_trip(
            s in 0usize..7,
            v in 0usize..13,
            o in 0usize..10,
            plural in any::<bool>(),
        ) {
            let t = linara();
            let pick = |cat: Category, i: usize| {
                t.lexicon().entries(cat).nth(i).map(|(lemma, _)| lemma.to_string()).unwrap()
            };
            let subject = pick(Category::Pronoun, s);
            let verb = pick(Category::Verb, v);
            let mut object = pick(Category::Noun, o);
            if plural {
                object = linara_morph::english::pluralize(&object);
            }

            let english = format!("{} {} {}.", subject, verb, object);
            let decoded = t.decode(&t.encode(&english));
            let expected = format!("{} {} {}.", realizer::capitalize(&subject), verb, object);
            prop_assert_eq!(decoded, expected);
        }
    }
}
