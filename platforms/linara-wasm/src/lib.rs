use linara_parser::token::TaggedToken;
use linara_translator::{Translator, TranslatorError};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// The structured response sent back to JavaScript
#[derive(Debug, Serialize)]
pub struct TokenDebug {
    pub text: String,
    pub normalized: String,
    pub lemma: String,
    pub tag: String,
    pub start: usize,
    pub end: usize,
}

impl From<&TaggedToken> for TokenDebug {
    fn from(t: &TaggedToken) -> Self {
        Self {
            text: t.token.surface.clone(),
            normalized: t.token.normalized.clone(),
            lemma: t.lemma.clone(),
            tag: t.tag.as_str().to_string(),
            start: t.token.span.start,
            end: t.token.span.end,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub tokens: Vec<TokenDebug>,
    pub linara: String,
    pub debug_info: String,
}

fn to_js(e: TranslatorError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// The engine instance running in the browser
#[wasm_bindgen]
pub struct LinaraEngine {
    translator: Translator,
}

#[wasm_bindgen]
impl LinaraEngine {
    /// Engine over the built-in Linara pack.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<LinaraEngine, JsValue> {
        Translator::linara().map(|translator| Self { translator }).map_err(to_js)
    }

    /// Engine over a compiled pack (loaded via fetch() in JS).
    #[wasm_bindgen(js_name = fromArchive)]
    pub fn from_archive(data: Vec<u8>) -> Result<LinaraEngine, JsValue> {
        Translator::from_archive(&data)
            .map(|translator| Self { translator })
            .map_err(to_js)
    }

    pub fn encode(&self, input: &str) -> String {
        self.translator.encode(input)
    }

    pub fn decode(&self, input: &str) -> String {
        self.translator.decode(input)
    }

    /// Text -> Tagged Tokens -> JSON
    pub fn analyze(&self, input: &str) -> Result<JsValue, JsValue> {
        let report = self.report(input);
        serde_wasm_bindgen::to_value(&report).map_err(JsValue::from)
    }
}

impl LinaraEngine {
    fn report(&self, input: &str) -> AnalysisReport {
        let tokens = self.translator.analyze(input).iter().map(TokenDebug::from).collect();
        let pack = self.translator.lexicon().pack();

        AnalysisReport {
            tokens,
            linara: self.translator.encode(input),
            debug_info: format!(
                "Pack: {} v{}, Entries: {}, Phrases: {}",
                pack.name,
                pack.version,
                pack.entries.len(),
                pack.phrases.len()
            ),
        }
    }
}
