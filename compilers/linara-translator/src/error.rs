use linara_protocol::LexiconError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslatorError {
    #[error("invalid language pack: {0}")]
    Lexicon(#[from] LexiconError),

    #[error("language pack '{0}' has no lexicon entries")]
    EmptyPack(String),
}
