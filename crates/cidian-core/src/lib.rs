pub mod extract;
pub mod format;

use cidian_types::{ExampleSentence, TranslationEntry};
use serde_json::Value;

pub use extract::{DEFAULT_EXAMPLE_COUNT, extract_examples, extract_translations, parse_translation};
pub use format::{Palette, format};

/// Everything shown for one lookup
#[derive(Debug, Clone, Default)]
pub struct LookupResult {
    pub translations: Vec<TranslationEntry>,
    pub examples: Vec<ExampleSentence>,
}

impl LookupResult {
    pub fn from_response(response: &Value, example_count: usize) -> Self {
        let translations = extract_translations(response);
        let examples = extract_examples(response, example_count);
        tracing::debug!(
            "Extracted {} translations and {} examples",
            translations.len(),
            examples.len()
        );

        Self {
            translations,
            examples,
        }
    }

    pub fn render(&self, word: &str, palette: Palette) -> String {
        format(word, &self.translations, &self.examples, palette)
    }
}
